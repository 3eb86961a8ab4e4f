use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

/// Simulation parameters, immutable once the session starts.
///
/// Loaded from the [simulation] section of config.toml as the form's
/// starting values; the form's Apply step produces the final value that the
/// loop owns by value and never mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_occluder_radius")]
    pub occluder_radius: f64,
    #[serde(default = "default_occluder_speed")]
    pub occluder_speed: f64,
    #[serde(default = "default_light_radius")]
    pub light_radius: f64,
    #[serde(default = "default_light_speed")]
    pub light_speed: f64,
    #[serde(default = "default_ray_count")]
    pub ray_count: u32,
    #[serde(default = "default_ray_width")]
    pub ray_width: f32,
}

#[derive(Debug, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_background_color")]
    pub background: [u8; 3],
    #[serde(default = "default_ray_color")]
    pub ray: [u8; 3],
    #[serde(default = "default_occluder_color")]
    pub occluder: [u8; 3],
    #[serde(default = "default_light_color")]
    pub light: [u8; 3],
}

// Default values
fn default_window_title() -> String { "Lightcast - Ray Occlusion Demo".to_string() }
fn default_width() -> f64 { 800.0 }
fn default_height() -> f64 { 600.0 }
fn default_frame_rate() -> u32 { 60 }
fn default_occluder_radius() -> f64 { 50.0 }
fn default_occluder_speed() -> f64 { 5.0 }
fn default_light_radius() -> f64 { 8.0 }
fn default_light_speed() -> f64 { 5.0 }
fn default_ray_count() -> u32 { 1000 }
fn default_ray_width() -> f32 { 1.0 }
fn default_background_color() -> [u8; 3] { [0, 0, 0] }
fn default_ray_color() -> [u8; 3] { [255, 220, 100] }
fn default_occluder_color() -> [u8; 3] { [100, 200, 255] }
fn default_light_color() -> [u8; 3] { [255, 255, 150] }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            occluder_radius: default_occluder_radius(),
            occluder_speed: default_occluder_speed(),
            light_radius: default_light_radius(),
            light_speed: default_light_speed(),
            ray_count: default_ray_count(),
            ray_width: default_ray_width(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background_color(),
            ray: default_ray_color(),
            occluder: default_occluder_color(),
            light: default_light_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
