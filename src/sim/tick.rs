//! One simulation tick
//!
//! Every sprite gets `time_passed` in registration order, over a snapshot of
//! the registry so listeners can remove sprites mid-tick. The end conditions
//! are checked once all sprites have run.

use super::environment::Surface;
use super::state::{Game, GamePhase};
use super::scene::SpriteRef;
use crate::input::KeyboardSensor;

/// Advance the game by one tick and return the resulting phase.
///
/// A game that is already over is left untouched.
pub fn tick(game: &mut Game, keyboard: &dyn KeyboardSensor) -> GamePhase {
    if game.phase.is_over() {
        return game.phase;
    }

    let Game { scene, balls, .. } = game;
    for sprite in scene.sprites.snapshot() {
        match sprite {
            SpriteRef::Ball(id) => {
                let Some(ball) = balls.iter_mut().find(|b| b.id() == id) else {
                    continue;
                };
                // Lost earlier this tick
                if ball.is_removed() {
                    continue;
                }
                ball.move_one_step(scene);
            }
            SpriteRef::Surface(id) => {
                if let Some(Surface::Paddle(paddle)) = scene.environment.get_mut(id) {
                    paddle.time_passed(keyboard);
                }
            }
            SpriteRef::ScoreIndicator => {}
        }
    }
    balls.retain(|b| !b.is_removed());

    game.time_ticks += 1;

    if game.scene.counters.remaining_blocks.value() <= 0 {
        let bonus = game.settings.clear_bonus;
        game.scene.counters.score.increase(bonus);
        game.phase = GamePhase::Cleared;
        log::info!(
            "All blocks cleared after {} ticks, score {}",
            game.time_ticks,
            game.scene.counters.score
        );
    } else if game.scene.counters.remaining_balls.value() <= 0 {
        game.phase = GamePhase::BallsLost;
        log::info!(
            "All balls lost after {} ticks, score {}",
            game.time_ticks,
            game.scene.counters.score
        );
    }

    game.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TickInput;
    use crate::settings::Settings;
    use crate::sim::ball::Ball;
    use crate::sim::collidable::Collidable;
    use crate::sim::color::Color;
    use crate::sim::environment::ColliderId;
    use crate::sim::point::Point;
    use crate::sim::velocity::Velocity;

    fn game() -> Game {
        Game::new(Settings::default(), 12345)
    }

    #[test]
    fn test_tick_moves_balls_and_counts() {
        let mut game = game();
        let before: Vec<_> = game.balls.iter().map(|b| b.center()).collect();
        assert_eq!(tick(&mut game, &TickInput::default()), GamePhase::Playing);
        assert_eq!(game.time_ticks, 1);
        for (ball, start) in game.balls.iter().zip(before) {
            assert_eq!(ball.center(), ball.velocity().apply_to_point(start));
        }
    }

    #[test]
    fn test_tick_moves_paddle_from_input() {
        let mut game = game();
        let x0 = game.paddle().unwrap().collision_rectangle().upper_left().x;
        tick(
            &mut game,
            &TickInput {
                left: true,
                ..Default::default()
            },
        );
        let x1 = game.paddle().unwrap().collision_rectangle().upper_left().x;
        assert_eq!(x1, x0 - 10.0);
    }

    #[test]
    fn test_clearing_last_block_awards_bonus() {
        let mut game = game();
        // Leave exactly one block standing: remove all but the first brick
        let bricks: Vec<ColliderId> = game
            .scene
            .environment
            .iter()
            .filter_map(|(id, s)| match s {
                Surface::Block(b) if b.listeners().len() == 2 => Some(id),
                _ => None,
            })
            .collect();
        for id in &bricks[1..] {
            game.scene.remove_collidable(*id);
            game.scene.counters.remaining_blocks.decrease(1);
        }
        assert_eq!(game.remaining_blocks(), 1);

        // Aim the first ball straight up into the remaining brick (100..150, 40..60)
        let last = game.scene.environment.get(bricks[0]).unwrap();
        let target = last.collision_rectangle().bottom().middle();
        game.balls[0] = Ball::new(1, Point::new(target.x, target.y + 5.0), 5.0, Color::BLACK)
            .with_velocity(Velocity::new(0.0, -10.0));

        assert_eq!(tick(&mut game, &TickInput::default()), GamePhase::Cleared);
        assert_eq!(game.remaining_blocks(), 0);
        assert_eq!(game.score(), 5 + 100);

        // Finished games stay put
        let ticks = game.time_ticks;
        assert_eq!(tick(&mut game, &TickInput::default()), GamePhase::Cleared);
        assert_eq!(game.time_ticks, ticks);
    }

    #[test]
    fn test_losing_every_ball_ends_the_game() {
        let mut game = game();
        // Drop each ball just above the death region, falling
        for (i, ball) in game.balls.iter_mut().enumerate() {
            *ball = Ball::new(
                ball.id(),
                Point::new(100.0 + 100.0 * i as f64, 596.0),
                5.0,
                Color::RED,
            )
            .with_velocity(Velocity::new(0.0, 10.0));
        }

        assert_eq!(tick(&mut game, &TickInput::default()), GamePhase::BallsLost);
        assert!(game.balls.is_empty());
        assert_eq!(game.remaining_balls(), 0);
        assert!(
            !game
                .scene
                .sprites
                .iter()
                .any(|s| matches!(s, SpriteRef::Ball(_)))
        );
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut game = Game::new(Settings::default(), seed);
            for _ in 0..500 {
                tick(&mut game, &TickInput::default());
            }
            (
                game.score(),
                game.remaining_blocks(),
                game.balls.iter().map(|b| b.center()).collect::<Vec<_>>(),
            )
        };
        assert_eq!(run(99), run(99));
    }
}
