use crate::geometry::{intersect_ray_boundary, intersect_ray_circle, Vec2, Viewport};
use crate::scene::{LightSource, Occluder};

/// One finished ray, ready to be stroked by the compositor.
/// Derived per frame from the current scene; never kept across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Direction of ray i out of count, at angle 2*pi*i/count
pub fn ray_direction(index: u32, count: u32) -> Vec2 {
    let angle = 2.0 * std::f64::consts::PI * index as f64 / count as f64;
    Vec2::new(angle.cos(), angle.sin())
}

/// Pick the authoritative endpoint for one ray.
///
/// The ray terminates at the occluder surface when that hit is strictly
/// nearer than the viewport boundary, otherwise at the boundary. A ray that
/// reaches both at exactly the same parameter draws to the boundary (the
/// tie-break is strict `<` on the occluder side). Returns None for any
/// degenerate outcome: no positive boundary parameter, or a non-finite or
/// non-positive final parameter. The endpoint is clamped into the viewport
/// against floating-point overshoot.
pub fn resolve_ray_endpoint(
    light: &LightSource,
    dir: Vec2,
    occluder: &Occluder,
    viewport: &Viewport,
) -> Option<Vec2> {
    let t_bound = match intersect_ray_boundary(light.position, dir, viewport) {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => return None,
    };

    let t_hit = intersect_ray_circle(light.position, dir, occluder.center, occluder.radius);

    let t_final = match t_hit {
        Some(t) if t > 0.0 && t < t_bound => t,
        _ => t_bound,
    };
    if !t_final.is_finite() || t_final <= 0.0 {
        return None;
    }

    let end = light.position + dir * t_final;
    Some(viewport.clamp_point(end))
}

/// Cast the full fan: count rays at uniform angles over [0, 2*pi), resolved
/// against a frozen occluder/light/viewport snapshot. Degenerate rays are
/// simply omitted from the result.
pub fn cast_rays(
    light: &LightSource,
    occluder: &Occluder,
    viewport: &Viewport,
    count: u32,
) -> Vec<RaySegment> {
    let mut segments = Vec::with_capacity(count as usize);
    for i in 0..count {
        let dir = ray_direction(i, count);
        if let Some(end) = resolve_ray_endpoint(light, dir, occluder, viewport) {
            segments.push(RaySegment {
                start: light.position,
                end,
            });
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> (LightSource, Occluder, Viewport) {
        (
            LightSource {
                position: Vec2::new(150.0, 100.0),
                radius: 8.0,
            },
            Occluder {
                center: Vec2::new(400.0, 300.0),
                radius: 50.0,
            },
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_endpoint_reaches_boundary_past_occluder() {
        // Horizontal ray at y=100 passes 200 above the occluder center
        let (light, occluder, viewport) = test_scene();
        let end = resolve_ray_endpoint(&light, Vec2::new(1.0, 0.0), &occluder, &viewport);
        assert_eq!(end, Some(Vec2::new(800.0, 100.0)));
    }

    #[test]
    fn test_endpoint_lands_on_occluder_surface() {
        let (light, occluder, viewport) = test_scene();
        let dir = (occluder.center - light.position).normalized().unwrap();
        let end = resolve_ray_endpoint(&light, dir, &occluder, &viewport).unwrap();
        assert!((end.distance(occluder.center) - occluder.radius).abs() < 1e-6);
    }

    #[test]
    fn test_endpoint_tie_goes_to_boundary() {
        // Occluder tangent to the right wall from inside: the ray meets the
        // surface and the wall at the same t and must draw to the wall
        let light = LightSource {
            position: Vec2::new(100.0, 300.0),
            radius: 8.0,
        };
        let occluder = Occluder {
            center: Vec2::new(850.0, 300.0),
            radius: 50.0,
        };
        let viewport = Viewport::new(800.0, 600.0);
        let end = resolve_ray_endpoint(&light, Vec2::new(1.0, 0.0), &occluder, &viewport);
        assert_eq!(end, Some(Vec2::new(800.0, 300.0)));
    }

    #[test]
    fn test_endpoint_zero_direction_skipped() {
        let (light, occluder, viewport) = test_scene();
        let end = resolve_ray_endpoint(&light, Vec2::new(0.0, 0.0), &occluder, &viewport);
        assert_eq!(end, None);
    }

    #[test]
    fn test_endpoint_resolution_is_idempotent() {
        let (light, occluder, viewport) = test_scene();
        let dir = ray_direction(123, 1000);
        let first = resolve_ray_endpoint(&light, dir, &occluder, &viewport);
        let second = resolve_ray_endpoint(&light, dir, &occluder, &viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ray_direction_fan_coverage() {
        let n = 8;
        for i in 0..n {
            let dir = ray_direction(i, n);
            assert!((dir.length() - 1.0).abs() < 1e-12);
        }
        // Cardinal spokes of the 8-ray fan
        assert!(ray_direction(0, n).distance(Vec2::new(1.0, 0.0)) < 1e-12);
        assert!(ray_direction(2, n).distance(Vec2::new(0.0, 1.0)) < 1e-12);
        assert!(ray_direction(4, n).distance(Vec2::new(-1.0, 0.0)) < 1e-12);
        assert!(ray_direction(6, n).distance(Vec2::new(0.0, -1.0)) < 1e-12);
    }

    #[test]
    fn test_cast_rays_emits_full_fan_inside_viewport() {
        // Light strictly inside: every direction reaches a wall, so no ray
        // is dropped
        let (light, occluder, viewport) = test_scene();
        let segments = cast_rays(&light, &occluder, &viewport, 360);
        assert_eq!(segments.len(), 360);
        for seg in &segments {
            assert_eq!(seg.start, light.position);
            assert!(viewport.contains(seg.end));
        }
    }
}
