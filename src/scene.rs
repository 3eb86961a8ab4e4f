use crate::config::SimulationConfig;
use crate::geometry::{Vec2, Viewport};

/// The movable disc that blocks light rays
#[derive(Debug, Clone, Copy)]
pub struct Occluder {
    /// Mutable position; radius is fixed for the session
    pub center: Vec2,
    pub radius: f64,
}

/// The movable point-like emitter of the ray fan
#[derive(Debug, Clone, Copy)]
pub struct LightSource {
    pub position: Vec2,
    /// Radius of the drawn glyph, also part of the containment invariant
    pub radius: f64,
}

/// Per-frame snapshot of the directional input signals
///
/// Sampled once per frame at the input boundary; the stepper never polls the
/// keyboard itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub occluder_left: bool,
    pub occluder_right: bool,
    pub occluder_up: bool,
    pub occluder_down: bool,
    pub light_left: bool,
    pub light_right: bool,
    pub light_up: bool,
    pub light_down: bool,
    pub quit: bool,
}

/// Whole simulation state, stepped once per frame
///
/// Owns the occluder and light exclusively; all ray resolution within a
/// frame reads this as a frozen snapshot.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub occluder: Occluder,
    pub light: LightSource,
    pub viewport: Viewport,
    pub config: SimulationConfig,
}

impl SimulationState {
    /// Build the initial state: occluder at the viewport center, light in
    /// the upper-left quadrant
    pub fn new(config: SimulationConfig, viewport: Viewport) -> Self {
        SimulationState {
            occluder: Occluder {
                center: Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
                radius: config.occluder_radius,
            },
            light: LightSource {
                position: Vec2::new(viewport.width * 0.1875, viewport.height / 6.0),
                radius: config.light_radius,
            },
            viewport,
            config,
        }
    }

    /// Advance occluder and light positions by one tick from the sampled
    /// input, enforcing each entity's containment invariant.
    ///
    /// The two entities deliberately use different policies: the occluder
    /// moves first and is clamped back inside afterwards, the light only
    /// moves on an axis when the move would keep it inside.
    pub fn step(&mut self, input: &InputSnapshot) {
        let velocity = occluder_velocity(input, self.config.occluder_speed);
        self.occluder.center = self.occluder.center + velocity;
        self.occluder.center = clamp_disc_center(
            self.occluder.center,
            self.occluder.radius,
            &self.viewport,
        );

        self.light.position = step_light(
            self.light.position,
            self.light.radius,
            input,
            self.config.light_speed,
            &self.viewport,
        );
    }

    /// Draw the light glyph only while its disc does not overlap the
    /// occluder's disc
    pub fn light_visible(&self) -> bool {
        self.occluder.center.distance(self.light.position)
            > self.occluder.radius + self.light.radius
    }
}

/// Resolve the occluder's directional signals into a per-tick velocity.
/// One direction at a time: left beats right beats up beats down.
pub fn occluder_velocity(input: &InputSnapshot, speed: f64) -> Vec2 {
    if input.occluder_left {
        Vec2::new(-speed, 0.0)
    } else if input.occluder_right {
        Vec2::new(speed, 0.0)
    } else if input.occluder_up {
        Vec2::new(0.0, -speed)
    } else if input.occluder_down {
        Vec2::new(0.0, speed)
    } else {
        Vec2::new(0.0, 0.0)
    }
}

/// Clamp a disc center per axis so the full disc stays inside the viewport.
/// Out-of-range coordinates are replaced with the nearest legal value; the
/// move itself is never rejected.
pub fn clamp_disc_center(center: Vec2, radius: f64, viewport: &Viewport) -> Vec2 {
    let mut clamped = center;

    if clamped.x - radius <= 0.0 {
        clamped.x = radius;
    } else if clamped.x + radius >= viewport.width {
        clamped.x = viewport.width - radius;
    }

    if clamped.y - radius <= 0.0 {
        clamped.y = radius;
    } else if clamped.y + radius >= viewport.height {
        clamped.y = viewport.height - radius;
    }

    clamped
}

/// Move the light per axis, independently and simultaneously, applying each
/// axis move only if the resulting position keeps the light's disc inside
/// the viewport (check-before-move; a failing move is dropped, not clamped).
pub fn step_light(
    position: Vec2,
    radius: f64,
    input: &InputSnapshot,
    speed: f64,
    viewport: &Viewport,
) -> Vec2 {
    let mut pos = position;

    if input.light_left && pos.x - speed - radius >= 0.0 {
        pos.x -= speed;
    }
    if input.light_right && pos.x + speed + radius <= viewport.width {
        pos.x += speed;
    }
    if input.light_up && pos.y - speed - radius >= 0.0 {
        pos.y -= speed;
    }
    if input.light_down && pos.y + speed + radius <= viewport.height {
        pos.y += speed;
    }

    pos
}
