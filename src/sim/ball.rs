//! Ball movement and collision resolution
//!
//! Each tick a ball follows its trajectory (center to center + velocity).
//! The nearest surface on that segment decides what happens:
//! - nothing in the way: the ball moves the full step
//! - the ball's center is already inside the surface: nudge it up and apply
//!   the surface's hit rule, ending the step
//! - otherwise: stop one unit short of the collision point on each axis,
//!   apply the hit rule, and keep resolving while the trajectory still hits
//!   something, up to `MAX_COLLISION_RECHECKS` times

use super::collidable::{Collidable, CollisionInfo};
use super::color::Color;
use super::line::Line;
use super::point::Point;
use super::scene::Scene;
use super::velocity::Velocity;
use crate::consts::{BACK_OFF, EMBED_NUDGE, MAX_COLLISION_RECHECKS};

pub type BallId = u32;

/// What a single `move_one_step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No collision, moved the full velocity
    FreeFlight,
    /// Center was inside the struck surface; nudged and redirected
    Embedded,
    /// Resolved this many collisions in sequence
    Collided { collisions: u32 },
    /// Gave up after `MAX_COLLISION_RECHECKS`; stays where the last hit left it
    RecheckCapReached,
}

/// A moving ball
#[derive(Debug, Clone)]
pub struct Ball {
    id: BallId,
    center: Point,
    radius: f64,
    color: Color,
    velocity: Velocity,
    removed: bool,
}

impl Ball {
    pub fn new(id: BallId, center: Point, radius: f64, color: Color) -> Self {
        Self {
            id,
            center,
            radius,
            color,
            velocity: Velocity::default(),
            removed: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn id(&self) -> BallId {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Whether a listener has taken this ball out of the game
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// Segment the center would cover this tick without collisions
    pub fn trajectory(&self) -> Line {
        Line::new(self.center, self.velocity.apply_to_point(self.center))
    }

    /// Advance one tick against the scene's surfaces
    pub fn move_one_step(&mut self, scene: &mut Scene) -> StepOutcome {
        let mut collisions = 0;

        while collisions < MAX_COLLISION_RECHECKS {
            let trajectory = self.trajectory();
            let Some(info) = scene.environment.nearest_collision(&trajectory) else {
                self.center = trajectory.end();
                return if collisions == 0 {
                    StepOutcome::FreeFlight
                } else {
                    StepOutcome::Collided { collisions }
                };
            };

            let embedded = scene
                .environment
                .get(info.collider)
                .is_some_and(|s| s.collision_rectangle().contains(self.center));
            if embedded {
                // Typically the paddle moved over the ball
                log::debug!(
                    "Ball {} embedded in {:?} at {:?}, nudging",
                    self.id,
                    info.collider,
                    self.center
                );
                self.center = self.center.offset(0.0, -EMBED_NUDGE);
                self.apply_hit(scene, info);
                return StepOutcome::Embedded;
            }

            self.center = back_off(info.point, self.velocity);
            self.apply_hit(scene, info);
            collisions += 1;

            // Same segment again: done once it no longer hits anything
            if scene.environment.nearest_collision(&trajectory).is_none() {
                return StepOutcome::Collided { collisions };
            }
        }

        log::debug!(
            "Ball {} hit the re-check cap at {:?}, stopping for this tick",
            self.id,
            self.center
        );
        StepOutcome::RecheckCapReached
    }

    /// Apply the struck surface's hit rule and dispatch its notification
    fn apply_hit(&mut self, scene: &mut Scene, info: CollisionInfo) {
        let Some(surface) = scene.environment.get(info.collider) else {
            return;
        };
        let response = surface.hit(self, info.point, self.velocity);
        self.velocity = response.velocity;
        if response.notify {
            scene.notify_hit(info.collider, self);
        }
    }
}

/// A point one unit back from `point` against the direction of travel, per axis
fn back_off(point: Point, velocity: Velocity) -> Point {
    let step = |v: f64| {
        if v > 0.0 {
            -BACK_OFF
        } else if v < 0.0 {
            BACK_OFF
        } else {
            0.0
        }
    };
    point.offset(step(velocity.dx), step(velocity.dy))
}
