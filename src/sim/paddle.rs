//! The player's paddle and its zoned hit response

use super::ball::Ball;
use super::collidable::{Collidable, HitResponse};
use super::color::Color;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;
use crate::input::{Key, KeyboardSensor};

/// Number of equal-width zones across the paddle's top edge
pub const PADDLE_ZONES: usize = 5;

/// How a zone redirects the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneResponse {
    /// Leave at a fixed heading (degrees, 0 = up, clockwise), keeping speed
    Angle(f64),
    /// Negate the vertical component only
    FlipVertical,
}

/// Zone responses from left to right
pub const ZONE_RESPONSES: [ZoneResponse; PADDLE_ZONES] = [
    ZoneResponse::Angle(300.0),
    ZoneResponse::Angle(330.0),
    ZoneResponse::FlipVertical,
    ZoneResponse::Angle(30.0),
    ZoneResponse::Angle(60.0),
];

/// A horizontally moving paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    rect: Rectangle,
    color: Color,
    /// Right boundary of the playfield; the paddle wraps around at both sides
    width_bound: f64,
    /// Horizontal displacement per tick while a key is held
    speed: f64,
}

impl Paddle {
    pub fn new(rect: Rectangle, color: Color, width_bound: f64, speed: f64) -> Self {
        Self {
            rect,
            color,
            width_bound,
            speed,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Move left by one step; past the left boundary, reappear flush right
    pub fn move_left(&mut self) {
        let next = self.rect.translated(-self.speed, 0.0);
        self.rect = if next.upper_left().x >= 0.0 {
            next
        } else {
            let y = self.rect.upper_left().y;
            self.rect
                .moved_to(Point::new(self.width_bound - self.rect.width(), y))
        };
    }

    /// Move right by one step; past the right boundary, reappear flush left
    pub fn move_right(&mut self) {
        let next = self.rect.translated(self.speed, 0.0);
        self.rect = if next.upper_left().x + next.width() <= self.width_bound {
            next
        } else {
            let y = self.rect.upper_left().y;
            self.rect.moved_to(Point::new(0.0, y))
        };
    }

    /// Poll the keyboard once and move accordingly
    pub fn time_passed(&mut self, keyboard: &dyn KeyboardSensor) {
        if keyboard.is_pressed(Key::Left) {
            self.move_left();
        }
        if keyboard.is_pressed(Key::Right) {
            self.move_right();
        }
    }

    /// Index of the top-edge zone containing `x`.
    ///
    /// Zones are closed intervals scanned left to right, so an x exactly on
    /// a boundary always lands in the left-hand zone.
    pub fn zone_at(&self, x: f64) -> Option<usize> {
        let left = self.rect.upper_left().x;
        let zone_width = self.rect.width() / PADDLE_ZONES as f64;
        (0..PADDLE_ZONES).find(|&i| {
            let lo = left + i as f64 * zone_width;
            let hi = left + (i + 1) as f64 * zone_width;
            x >= lo && x <= hi
        })
    }

    fn on_side(&self, point: Point) -> bool {
        self.rect.left().on_segment(point) || self.rect.right().on_segment(point)
    }
}

impl Collidable for Paddle {
    fn collision_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    /// Side hits below the top edge flip `dx`. Any other hit inside the
    /// paddle's span is redirected by zone. Anything else keeps its velocity.
    ///
    /// Side hits are pure side reflections: the zone rule is skipped for them.
    fn hit(&self, _hitter: &Ball, collision_point: Point, velocity: Velocity) -> HitResponse {
        if self.on_side(collision_point) && !self.rect.top().on_segment(collision_point) {
            return HitResponse::silent(velocity.flip_horizontal());
        }

        let velocity = match self.zone_at(collision_point.x) {
            Some(zone) => match ZONE_RESPONSES[zone] {
                ZoneResponse::Angle(angle) => {
                    Velocity::from_angle_and_speed(angle, velocity.speed())
                }
                ZoneResponse::FlipVertical => velocity.flip_vertical(),
            },
            None => velocity,
        };
        HitResponse::silent(velocity)
    }
}
