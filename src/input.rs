//! Keyboard capability and per-tick input
//!
//! The paddle only asks "is this key held?" once per tick. `TickInput` is a
//! plain snapshot of that answer; `TickInput::autopilot` derives one from the
//! game itself for headless play.

use crate::sim::Collidable;
use crate::sim::state::Game;

/// Logical directions the paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

/// Anything that can report whether a key is currently held
pub trait KeyboardSensor {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl KeyboardSensor for TickInput {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }
}

impl TickInput {
    /// Steer the paddle under the most threatening ball.
    ///
    /// The lowest descending ball is chased; when every ball is rising the
    /// lowest one is. Within one paddle step of the target no key is held.
    pub fn autopilot(game: &Game) -> Self {
        let Some(paddle) = game.paddle() else {
            return Self::default();
        };

        let lowest = |descending: bool| {
            game.balls
                .iter()
                .filter(|b| !descending || b.velocity().dy > 0.0)
                .max_by(|a, b| a.center().y.total_cmp(&b.center().y))
        };
        let Some(target) = lowest(true).or_else(|| lowest(false)) else {
            return Self::default();
        };

        let center = paddle.collision_rectangle().top().middle().x;
        let error = target.center().x - center;
        if error.abs() <= paddle.speed() {
            Self::default()
        } else {
            Self {
                left: error < 0.0,
                right: error > 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Ball, Color, Point, Velocity};

    fn game_with_balls(balls: &[(f64, f64, f64)]) -> Game {
        let mut game = Game::new(Settings::default(), 1);
        game.balls = balls
            .iter()
            .enumerate()
            .map(|(i, &(x, y, dy))| {
                Ball::new(i as u32 + 1, Point::new(x, y), 5.0, Color::RED)
                    .with_velocity(Velocity::new(0.0, dy))
            })
            .collect();
        game
    }

    #[test]
    fn test_tick_input_as_sensor() {
        let input = TickInput {
            left: true,
            right: false,
        };
        assert!(input.is_pressed(Key::Left));
        assert!(!input.is_pressed(Key::Right));
        assert!(!TickInput::default().is_pressed(Key::Left));
    }

    #[test]
    fn test_autopilot_chases_lowest_descending_ball() {
        // Paddle center is at x = 410
        let game = game_with_balls(&[(100.0, 500.0, -5.0), (700.0, 300.0, 5.0)]);
        let input = TickInput::autopilot(&game);
        assert!(input.right);
        assert!(!input.left);
    }

    #[test]
    fn test_autopilot_falls_back_to_lowest_ball() {
        let game = game_with_balls(&[(100.0, 500.0, -5.0), (700.0, 300.0, -5.0)]);
        assert_eq!(
            TickInput::autopilot(&game),
            TickInput {
                left: true,
                right: false
            }
        );
    }

    #[test]
    fn test_autopilot_holds_when_aligned() {
        let game = game_with_balls(&[(405.0, 400.0, 5.0)]);
        assert_eq!(TickInput::autopilot(&game), TickInput::default());

        let game = game_with_balls(&[]);
        assert_eq!(TickInput::autopilot(&game), TickInput::default());
    }
}
