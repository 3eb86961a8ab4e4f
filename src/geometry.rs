use std::ops::{Add, Mul, Sub};

/// Minimum parameter value for a circle hit to count.
/// Excludes behind-origin roots and a ray starting exactly on (or a hair
/// inside) the circle surface reporting a spurious immediate hit.
pub const HIT_EPSILON: f64 = 1e-3;

/// 2D vector used for both positions and ray directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Dot product
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Distance to another point
    pub fn distance(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    /// Unit vector with the same direction, or None for a zero vector
    pub fn normalized(&self) -> Option<Vec2> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Vec2::new(self.x / len, self.y / len))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

/// Bounded viewport rectangle: x in [0, width], y in [0, height]
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Clamp a point component-wise into the viewport rectangle
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Check whether a point lies inside the rectangle (boundary included)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Compute the intersection of the ray `origin + t * dir` with a circle.
///
/// Standard quadratic test restricted to the near branch: returns the
/// smallest root exceeding HIT_EPSILON, or None when the discriminant is
/// negative, both roots are behind the origin, or the direction is zero.
pub fn intersect_ray_circle(origin: Vec2, dir: Vec2, center: Vec2, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let a = dir.dot(dir);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    if t1 > HIT_EPSILON && t2 > HIT_EPSILON {
        Some(t1.min(t2))
    } else if t1 > HIT_EPSILON {
        Some(t1)
    } else if t2 > HIT_EPSILON {
        Some(t2)
    } else {
        None
    }
}

/// Find the smallest positive t such that `origin + t * dir` lies on one of
/// the four viewport boundary lines (x=0, x=width, y=0, y=height).
///
/// An axis is skipped entirely when its direction component is exactly zero.
/// Returns None for a degenerate ray or when no positive candidate exists;
/// callers must handle that case even though it cannot occur for an origin
/// inside the viewport and a non-zero direction.
pub fn intersect_ray_boundary(origin: Vec2, dir: Vec2, viewport: &Viewport) -> Option<f64> {
    let mut nearest: Option<f64> = None;
    let mut consider = |t: f64| {
        if t > 0.0 && nearest.map_or(true, |best| t < best) {
            nearest = Some(t);
        }
    };

    if dir.x != 0.0 {
        consider((0.0 - origin.x) / dir.x);
        consider((viewport.width - origin.x) / dir.x);
    }
    if dir.y != 0.0 {
        consider((0.0 - origin.y) / dir.y);
        consider((viewport.height - origin.y) / dir.y);
    }

    nearest
}
