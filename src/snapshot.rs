use serde::Serialize;
use crate::config::SimulationConfig;
use crate::scene::SimulationState;

/// One-shot scene snapshot for clipboard export.
/// Export only: the session never restores state from it.
#[derive(Debug, Serialize)]
pub struct SceneSnapshot {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub occluder_x: f64,
    pub occluder_y: f64,
    pub occluder_radius: f64,
    pub light_x: f64,
    pub light_y: f64,
    pub light_radius: f64,
    pub light_visible: bool,
    pub config: SimulationConfig,
}

impl SceneSnapshot {
    /// Capture the current scene
    pub fn from_state(state: &SimulationState) -> Self {
        SceneSnapshot {
            viewport_width: state.viewport.width,
            viewport_height: state.viewport.height,
            occluder_x: state.occluder.center.x,
            occluder_y: state.occluder.center.y,
            occluder_radius: state.occluder.radius,
            light_x: state.light.position.x,
            light_y: state.light.position.y,
            light_radius: state.light.radius,
            light_visible: state.light_visible(),
            config: state.config.clone(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scene snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;

    #[test]
    fn test_snapshot_reflects_scene() {
        let state =
            SimulationState::new(SimulationConfig::default(), Viewport::new(800.0, 600.0));
        let snapshot = SceneSnapshot::from_state(&state);
        assert_eq!(snapshot.viewport_width, 800.0);
        assert_eq!(snapshot.occluder_x, 400.0);
        assert_eq!(snapshot.occluder_y, 300.0);
        assert!(snapshot.light_visible);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"occluder_radius\": 50.0"));
    }
}
