//! Static blocks: boundary walls, breakable bricks and the death region
//!
//! All three are the same surface with different listeners attached. A block
//! reflects every ball on its edges, and notifies its listeners only when the
//! striking ball's color differs from its own.

use super::ball::Ball;
use super::collidable::{Collidable, HitResponse, reflect};
use super::color::Color;
use super::listener::HitListener;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// A colored, axis-aligned block
#[derive(Debug, Clone)]
pub struct Block {
    rect: Rectangle,
    color: Color,
    listeners: Vec<HitListener>,
}

impl Block {
    pub fn new(rect: Rectangle, color: Color) -> Self {
        Self {
            rect,
            color,
            listeners: Vec::new(),
        }
    }

    /// Builder-style listener registration for scene assembly
    pub fn with_listener(mut self, listener: HitListener) -> Self {
        self.add_hit_listener(listener);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn add_hit_listener(&mut self, listener: HitListener) {
        self.listeners.push(listener);
    }

    /// Remove the first registration of `listener`, if any
    pub fn remove_hit_listener(&mut self, listener: HitListener) {
        if let Some(pos) = self.listeners.iter().position(|l| *l == listener) {
            self.listeners.remove(pos);
        }
    }

    pub fn listeners(&self) -> &[HitListener] {
        &self.listeners
    }

    /// Whether a ball of this color passes without raising a notification
    pub fn matches_color(&self, ball: &Ball) -> bool {
        ball.color() == self.color
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    fn hit(&self, hitter: &Ball, collision_point: Point, velocity: Velocity) -> HitResponse {
        HitResponse {
            velocity: reflect(&self.rect, collision_point, velocity),
            notify: !self.matches_color(hitter),
        }
    }
}
