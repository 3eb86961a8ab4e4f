use lightcast::geometry::{intersect_ray_boundary, intersect_ray_circle, Vec2, Viewport};
use lightcast::ray::ray_direction;

/// Distance from a point to the nearest of the four boundary lines
fn distance_to_boundary(p: Vec2, viewport: &Viewport) -> f64 {
    let dx = p.x.min(viewport.width - p.x);
    let dy = p.y.min(viewport.height - p.y);
    dx.min(dy)
}

#[test]
fn boundary_hit_is_positive_and_lands_on_boundary() {
    let viewport = Viewport::new(800.0, 600.0);
    let origins = [
        Vec2::new(150.0, 100.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(799.0, 599.0),
        Vec2::new(1.0, 1.0),
    ];

    for origin in origins {
        for i in 0..720 {
            let dir = ray_direction(i, 720);
            let t = intersect_ray_boundary(origin, dir, &viewport)
                .unwrap_or_else(|| panic!("no boundary hit from {:?} along {:?}", origin, dir));

            assert!(t.is_finite() && t > 0.0);

            let end = origin + dir * t;
            assert!(distance_to_boundary(end, &viewport) < 1e-9);
            assert!(end.x >= -1e-9 && end.x <= viewport.width + 1e-9);
            assert!(end.y >= -1e-9 && end.y <= viewport.height + 1e-9);
        }
    }
}

#[test]
fn boundary_hit_is_the_nearest_crossing() {
    // The viewport is convex, so every point strictly before the returned t
    // must still be strictly interior
    let viewport = Viewport::new(800.0, 600.0);
    let origin = Vec2::new(150.0, 100.0);

    for i in 0..720 {
        let dir = ray_direction(i, 720);
        let t = intersect_ray_boundary(origin, dir, &viewport).unwrap();

        for fraction in [0.1, 0.5, 0.9, 0.999] {
            let p = origin + dir * (t * fraction);
            assert!(p.x > -1e-9 && p.x < viewport.width + 1e-9);
            assert!(p.y > -1e-9 && p.y < viewport.height + 1e-9);
            assert!(distance_to_boundary(p, &viewport) > 0.0);
        }
    }
}

#[test]
fn circle_miss_matches_perpendicular_distance() {
    // For an origin well outside the circle, a hit is reported exactly when
    // the infinite line passes within the radius AND the circle lies ahead
    let origin = Vec2::new(150.0, 100.0);
    let center = Vec2::new(400.0, 300.0);
    let radius = 50.0;

    for i in 0..720 {
        let dir = ray_direction(i, 720);
        let to_center = center - origin;
        let t_closest = to_center.dot(dir);
        let perp_sq = to_center.dot(to_center) - t_closest * t_closest;
        let perp = perp_sq.max(0.0).sqrt();

        let hit = intersect_ray_circle(origin, dir, center, radius);
        let expected_hit = perp <= radius && t_closest > 0.0;

        assert_eq!(
            hit.is_some(),
            expected_hit,
            "direction {:?}: perp distance {}, closest t {}",
            dir,
            perp,
            t_closest
        );
    }
}

#[test]
fn circle_hit_distance_round_trip() {
    // Circle placed so the near root is analytically at distance d
    let d = 123.456;
    let radius = 2.0;
    let origin = Vec2::new(0.0, 0.0);
    let center = Vec2::new(d + radius, 0.0);

    let t = intersect_ray_circle(origin, Vec2::new(1.0, 0.0), center, radius).unwrap();
    assert!((t - d).abs() / d < 1e-6);

    // Same scene rotated 90 degrees
    let center_up = Vec2::new(0.0, d + radius);
    let t_up = intersect_ray_circle(origin, Vec2::new(0.0, 1.0), center_up, radius).unwrap();
    assert!((t_up - d).abs() / d < 1e-6);
}

#[test]
fn circle_hit_point_lies_on_circumference() {
    let origin = Vec2::new(150.0, 100.0);
    let center = Vec2::new(400.0, 300.0);
    let radius = 50.0;

    for i in 0..720 {
        let dir = ray_direction(i, 720);
        if let Some(t) = intersect_ray_circle(origin, dir, center, radius) {
            let p = origin + dir * t;
            assert!((p.distance(center) - radius).abs() < 1e-6);
        }
    }
}
