//! Per-tick displacement of a moving body

use glam::DVec2;

use super::point::Point;

/// Change in position applied once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from a heading in degrees and a speed.
    ///
    /// 0° points straight up and angles grow clockwise, so
    /// `dx = speed·sin(θ)` and `dy = -speed·cos(θ)` in screen space.
    pub fn from_angle_and_speed(angle_degrees: f64, speed: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(speed * sin, -speed * cos)
    }

    #[inline]
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }

    /// Magnitude of the displacement
    #[inline]
    pub fn speed(&self) -> f64 {
        self.as_vec().length()
    }

    /// Heading in degrees using the same convention as `from_angle_and_speed`,
    /// normalized to `[0, 360)`
    pub fn angle(&self) -> f64 {
        self.dx.atan2(-self.dy).to_degrees().rem_euclid(360.0)
    }

    /// Move a point by one tick of this velocity
    #[inline]
    pub fn apply_to_point(&self, p: Point) -> Point {
        Point::from(p.as_vec() + self.as_vec())
    }

    /// Same velocity with the horizontal component negated
    #[inline]
    pub fn flip_horizontal(self) -> Self {
        Self::new(-self.dx, self.dy)
    }

    /// Same velocity with the vertical component negated
    #[inline]
    pub fn flip_vertical(self) -> Self {
        Self::new(self.dx, -self.dy)
    }
}
