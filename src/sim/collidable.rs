//! Collision surfaces and their hit responses
//!
//! Anything a ball can bounce off exposes a bounding rectangle and a hit rule
//! that turns the incoming velocity into the outgoing one. The hit rule never
//! touches the rest of the game; it reports through `HitResponse::notify`
//! whether the surface's hit listeners should be told about the hit.

use super::ball::Ball;
use super::environment::ColliderId;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// Outcome of a ball striking a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResponse {
    /// Velocity the ball leaves with
    pub velocity: Velocity,
    /// Whether the surface's hit listeners must be notified
    pub notify: bool,
}

impl HitResponse {
    /// Velocity change only, nothing to report
    pub fn silent(velocity: Velocity) -> Self {
        Self {
            velocity,
            notify: false,
        }
    }
}

/// A surface balls can collide with
pub trait Collidable {
    /// Bounds used for the collision scan
    fn collision_rectangle(&self) -> &Rectangle;

    /// Compute the outgoing velocity for `hitter` striking at `collision_point`
    fn hit(&self, hitter: &Ball, collision_point: Point, velocity: Velocity) -> HitResponse;
}

/// The nearest collision found along a trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Where the trajectory first meets the surface
    pub point: Point,
    /// Which registered surface was struck
    pub collider: ColliderId,
}

/// Base reflection rule shared by every surface.
///
/// A point on the top or bottom edge negates `dy`; a point on the left or
/// right edge negates `dx`. A corner satisfies both. A point on no edge leaves
/// the velocity unchanged.
pub fn reflect(rect: &Rectangle, point: Point, velocity: Velocity) -> Velocity {
    let mut out = velocity;
    if rect.top().on_segment(point) || rect.bottom().on_segment(point) {
        out = out.flip_vertical();
    }
    if rect.left().on_segment(point) || rect.right().on_segment(point) {
        out = out.flip_horizontal();
    }
    out
}
