use crate::geometry::Vec2;
use crate::ray::{cast_rays, RaySegment};
use crate::scene::SimulationState;

/// A circle the compositor should fill, in viewport coordinates
#[derive(Debug, Clone, Copy)]
pub struct CircleDraw {
    pub center: Vec2,
    pub radius: f64,
}

/// Everything the compositor needs for one frame.
///
/// The core hands this over fully computed; the rasterizer consumes it
/// without touching simulation state. Built fresh every frame from the
/// frozen scene, never cached.
#[derive(Debug, Clone)]
pub struct FramePlan {
    /// Ray segments to stroke, in fan order
    pub segments: Vec<RaySegment>,
    /// The occluder disc
    pub occluder: CircleDraw,
    /// The light glyph, absent while its disc overlaps the occluder's
    pub light_glyph: Option<CircleDraw>,
}

/// Compose the frame plan for the current state: resolve the full ray fan
/// and gate the light glyph on the overlap predicate.
pub fn build_frame(state: &SimulationState) -> FramePlan {
    let segments = cast_rays(
        &state.light,
        &state.occluder,
        &state.viewport,
        state.config.ray_count,
    );

    let light_glyph = if state.light_visible() {
        Some(CircleDraw {
            center: state.light.position,
            radius: state.light.radius,
        })
    } else {
        None
    };

    FramePlan {
        segments,
        occluder: CircleDraw {
            center: state.occluder.center,
            radius: state.occluder.radius,
        },
        light_glyph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::geometry::Viewport;

    fn test_state() -> SimulationState {
        let config = SimulationConfig {
            ray_count: 64,
            ..SimulationConfig::default()
        };
        SimulationState::new(config, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_frame_carries_full_fan() {
        let state = test_state();
        let plan = build_frame(&state);
        assert_eq!(plan.segments.len(), 64);
        assert_eq!(plan.occluder.center, state.occluder.center);
        assert!(plan.light_glyph.is_some());
    }

    #[test]
    fn test_light_glyph_gated_by_overlap() {
        let mut state = test_state();
        state.light.position = state.occluder.center;
        let plan = build_frame(&state);
        assert!(plan.light_glyph.is_none());
    }

    #[test]
    fn test_frame_rebuilt_identically_from_same_state() {
        // Stateless per-frame recomputation: same scene, same plan
        let state = test_state();
        let first = build_frame(&state);
        let second = build_frame(&state);
        assert_eq!(first.segments, second.segments);
    }
}
