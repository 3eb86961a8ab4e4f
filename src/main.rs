use arboard::Clipboard;
use macroquad::prelude::*;
use std::sync::OnceLock;
use std::time::Duration;

use lightcast::config::{ColorsConfig, Config, SimulationConfig};
use lightcast::form::ParameterForm;
use lightcast::frame::{build_frame, FramePlan};
use lightcast::geometry::Viewport;
use lightcast::scene::{InputSnapshot, SimulationState};
use lightcast::snapshot::SceneSnapshot;

/// File config, loaded once and shared between window setup and main
fn app_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(Config::load)
}

fn window_conf() -> Conf {
    let config = app_config();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Sample the per-frame input snapshot.
/// Arrow keys move the occluder, WASD moves the light, Escape quits.
fn sample_input() -> InputSnapshot {
    InputSnapshot {
        occluder_left: is_key_down(KeyCode::Left),
        occluder_right: is_key_down(KeyCode::Right),
        occluder_up: is_key_down(KeyCode::Up),
        occluder_down: is_key_down(KeyCode::Down),
        light_left: is_key_down(KeyCode::A),
        light_right: is_key_down(KeyCode::D),
        light_up: is_key_down(KeyCode::W),
        light_down: is_key_down(KeyCode::S),
        quit: is_key_pressed(KeyCode::Escape),
    }
}

fn draw_form_screen(form: &ParameterForm) {
    clear_background(Color::from_rgba(20, 20, 25, 255));

    draw_text("Lightcast - simulation parameters", 40.0, 50.0, 30.0, WHITE);
    draw_text(
        "Type numbers, Tab/Up/Down to switch fields, Enter to start, Esc to quit",
        40.0,
        80.0,
        18.0,
        GRAY,
    );

    for (i, field) in form.fields.iter().enumerate() {
        let y = 130.0 + i as f32 * 30.0;
        let selected = i == form.selected;
        let color = if selected { YELLOW } else { WHITE };
        let marker = if selected { ">" } else { " " };
        let line = format!("{} {}: {}", marker, field.key, field.value);
        draw_text(&line, 40.0, y, 22.0, color);
    }

    if let Some(message) = &form.error {
        let y = 130.0 + form.fields.len() as f32 * 30.0 + 20.0;
        draw_text(message, 40.0, y, 20.0, RED);
    }
}

/// Run the parameter form until Enter applies a valid batch.
/// Returns None if the user quits from the form.
async fn collect_config(config: &Config) -> Option<SimulationConfig> {
    let mut form = ParameterForm::from_config(&config.simulation);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            return None;
        }
        if is_key_pressed(KeyCode::Tab) || is_key_pressed(KeyCode::Down) {
            form.select_next();
        }
        if is_key_pressed(KeyCode::Up) {
            form.select_prev();
        }
        if is_key_pressed(KeyCode::Backspace) {
            form.backspace();
        }
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                form.push_char(c);
            }
        }
        if is_key_pressed(KeyCode::Enter) {
            match form.apply() {
                Ok(sim_config) => return Some(sim_config),
                Err(message) => eprintln!("Rejected parameter batch: {}", message),
            }
        }

        draw_form_screen(&form);
        next_frame().await;
    }
}

/// Rasterize one finished frame plan
fn draw_frame(plan: &FramePlan, colors: &ColorsConfig, ray_width: f32) {
    clear_background(rgb(colors.background));

    for seg in &plan.segments {
        draw_line(
            seg.start.x as f32,
            seg.start.y as f32,
            seg.end.x as f32,
            seg.end.y as f32,
            ray_width,
            rgb(colors.ray),
        );
    }

    draw_circle(
        plan.occluder.center.x as f32,
        plan.occluder.center.y as f32,
        plan.occluder.radius as f32,
        rgb(colors.occluder),
    );

    if let Some(glyph) = &plan.light_glyph {
        draw_circle(
            glyph.center.x as f32,
            glyph.center.y as f32,
            glyph.radius as f32,
            rgb(colors.light),
        );
    }
}

fn draw_help(state: &SimulationState) {
    let lines = [
        format!(
            "Occluder: ({:.0}, {:.0})  Light: ({:.0}, {:.0})  Rays: {}",
            state.occluder.center.x,
            state.occluder.center.y,
            state.light.position.x,
            state.light.position.y,
            state.config.ray_count
        ),
        "Arrows: move occluder  WASD: move light  C: copy scene  Esc: quit".to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 20.0, 18.0, WHITE);
    }
}

fn copy_snapshot_to_clipboard(state: &SimulationState) {
    let json = match SceneSnapshot::from_state(state).to_json() {
        Ok(json) => json,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&json) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Scene snapshot copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = app_config();
    let viewport = Viewport::new(config.window.width, config.window.height);

    let sim_config = match collect_config(config).await {
        Some(sim_config) => sim_config,
        None => return,
    };

    let frame_budget = 1.0 / sim_config.frame_rate as f64;
    let ray_width = sim_config.ray_width;
    let mut state = SimulationState::new(sim_config, viewport);

    loop {
        let frame_start = get_time();

        let input = sample_input();
        if input.quit {
            break;
        }

        state.step(&input);
        let plan = build_frame(&state);

        draw_frame(&plan, &config.colors, ray_width);
        draw_help(&state);

        if is_key_pressed(KeyCode::C) {
            copy_snapshot_to_clipboard(&state);
        }

        next_frame().await;

        // Frame pacing: sleep off the remainder of the frame budget
        let elapsed = get_time() - frame_start;
        if elapsed < frame_budget {
            std::thread::sleep(Duration::from_secs_f64(frame_budget - elapsed));
        }
    }
}
