//! Game state and level assembly
//!
//! `Game` is the explicit context the runner owns: the scene (surfaces,
//! sprites, counters), the balls, and the bookkeeping for a single run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId};
use super::block::Block;
use super::color::Color;
use super::environment::{ColliderId, Surface};
use super::listener::HitListener;
use super::paddle::Paddle;
use super::point::Point;
use super::rectangle::Rectangle;
use super::scene::{Scene, SpriteRef};
use super::velocity::Velocity;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls in flight
    Playing,
    /// Every block removed
    Cleared,
    /// Every ball lost
    BallsLost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Horizontal start of the paddle in the default level
const PADDLE_START_X: f64 = 360.0;
/// First ball's spawn point; later balls are offset up and left
const BALL_SPAWN: Point = Point::new(398.0, 370.0);
const BALL_SPAWN_STEP: f64 = 5.0;

/// A complete run of the game
#[derive(Debug, Clone)]
pub struct Game {
    pub settings: Settings,
    /// Run seed; block colors are drawn from it
    pub seed: u64,
    pub scene: Scene,
    /// Balls in registration order
    pub balls: Vec<Ball>,
    pub paddle: ColliderId,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_ball_id: BallId,
}

impl Game {
    /// Build the default level
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut scene = Scene::new();
        scene.block_hit_score = settings.block_hit_score;

        add_walls(&mut scene);
        add_pyramid(&mut scene, seed);

        let mut game = Self {
            settings,
            seed,
            scene,
            balls: Vec::new(),
            paddle: ColliderId(u32::MAX),
            phase: GamePhase::Playing,
            time_ticks: 0,
            next_ball_id: 1,
        };

        let colors = game.settings.ball_colors.clone();
        for (i, color) in colors.into_iter().enumerate() {
            let offset = BALL_SPAWN_STEP * i as f64;
            let speed = game.settings.ball_speed + i as f64;
            game.add_ball(
                BALL_SPAWN.offset(-offset, -offset),
                color,
                Velocity::new(0.0, -speed),
            );
        }

        game.scene.sprites.add(SpriteRef::ScoreIndicator);

        let paddle = Paddle::new(
            Rectangle::new(
                Point::new(PADDLE_START_X, PADDLE_Y),
                game.settings.paddle_width,
                PADDLE_HEIGHT,
            ),
            Color::YELLOW,
            SCREEN_WIDTH,
            game.settings.paddle_speed,
        );
        game.paddle = game.scene.add_collidable(paddle);

        log::info!(
            "Level built (seed {}): {} blocks, {} balls",
            seed,
            game.scene.counters.remaining_blocks,
            game.scene.counters.remaining_balls
        );
        game
    }

    /// Launch a ball and register it as a sprite
    pub fn add_ball(&mut self, center: Point, color: Color, velocity: Velocity) -> BallId {
        let id = self.next_ball_id;
        self.next_ball_id += 1;
        let ball =
            Ball::new(id, center, self.settings.ball_radius, color).with_velocity(velocity);
        self.balls.push(ball);
        self.scene.sprites.add(SpriteRef::Ball(id));
        self.scene.counters.remaining_balls.increase(1);
        id
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id() == id)
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        match self.scene.environment.get(self.paddle) {
            Some(Surface::Paddle(paddle)) => Some(paddle),
            _ => None,
        }
    }

    pub fn score(&self) -> i64 {
        self.scene.counters.score.value()
    }

    pub fn remaining_blocks(&self) -> i64 {
        self.scene.counters.remaining_blocks.value()
    }

    pub fn remaining_balls(&self) -> i64 {
        self.scene.counters.remaining_balls.value()
    }
}

/// Gray walls on three sides and the blue death region below the screen
fn add_walls(scene: &mut Scene) {
    let walls = [
        Rectangle::new(
            Point::new(0.0, SCORE_BAR_HEIGHT),
            SCREEN_WIDTH,
            WALL_THICKNESS,
        ),
        Rectangle::new(Point::new(0.0, 0.0), WALL_THICKNESS, SCREEN_HEIGHT),
        Rectangle::new(
            Point::new(SCREEN_WIDTH - WALL_THICKNESS, 0.0),
            WALL_THICKNESS,
            SCREEN_HEIGHT,
        ),
    ];
    for rect in walls {
        scene.add_collidable(Block::new(rect, Color::GRAY));
    }

    let death_region = Block::new(
        Rectangle::new(Point::new(0.0, SCREEN_HEIGHT + 1.0), SCREEN_WIDTH, 1.0),
        Color::DEATH_REGION,
    )
    .with_listener(HitListener::BallRemover);
    scene.add_collidable(death_region);
}

/// Rows shrink by two blocks each, shifting right by one block width
fn add_pyramid(scene: &mut Scene, seed: u64) {
    let mut rng = Pcg32::seed_from_u64(seed);
    for row in 0..BLOCK_ROWS {
        let y = BLOCK_HEIGHT * row as f64 + 2.0 * WALL_THICKNESS;
        let left = PYRAMID_LEFT + BLOCK_WIDTH * row as f64;
        for i in 0..BLOCKS_IN_FIRST_ROW - 2 * row {
            let color = Color::BLOCK_PALETTE[rng.random_range(0..Color::BLOCK_PALETTE.len())];
            let block = Block::new(
                Rectangle::new(
                    Point::new(left + BLOCK_WIDTH * i as f64, y),
                    BLOCK_WIDTH,
                    BLOCK_HEIGHT,
                ),
                color,
            )
            .with_listener(HitListener::BlockRemover)
            .with_listener(HitListener::ScoreTracker);
            scene.add_collidable(block);
            scene.counters.remaining_blocks.increase(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collidable::Collidable;

    #[test]
    fn test_default_level_layout() {
        let game = Game::new(Settings::default(), 12345);
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.remaining_blocks(), 12 + 10 + 8 + 6 + 4 + 2);
        assert_eq!(game.remaining_balls(), 3);
        assert_eq!(game.score(), 0);
        // 3 walls + death region + 42 blocks + paddle
        assert_eq!(game.scene.environment.len(), 4 + 42 + 1);
        // Surfaces, balls, score indicator
        assert_eq!(game.scene.sprites.len(), 4 + 42 + 1 + 3 + 1);
    }

    #[test]
    fn test_sprite_order_puts_paddle_last() {
        let game = Game::new(Settings::default(), 1);
        let sprites = game.scene.sprites.snapshot();
        let n = sprites.len();
        assert_eq!(sprites[n - 1], SpriteRef::Surface(game.paddle));
        assert_eq!(sprites[n - 2], SpriteRef::ScoreIndicator);
        assert_eq!(sprites[n - 3], SpriteRef::Ball(3));
        assert_eq!(sprites[n - 5], SpriteRef::Ball(1));
    }

    #[test]
    fn test_balls_launch_upward_with_increasing_speed() {
        let game = Game::new(Settings::default(), 1);
        let speeds: Vec<_> = game.balls.iter().map(|b| b.velocity().dy).collect();
        assert_eq!(speeds, vec![-10.0, -11.0, -12.0]);
        assert_eq!(game.balls[0].center(), Point::new(398.0, 370.0));
        assert_eq!(game.balls[2].center(), Point::new(388.0, 360.0));
        assert_eq!(game.balls[1].color(), Color::GREEN);
    }

    #[test]
    fn test_pyramid_rows() {
        let game = Game::new(Settings::default(), 1);
        let blocks: Vec<_> = game
            .scene
            .environment
            .iter()
            .filter_map(|(_, s)| match s {
                Surface::Block(b) if !b.listeners().is_empty() && b.color() != Color::DEATH_REGION => {
                    Some(*b.collision_rectangle())
                }
                _ => None,
            })
            .collect();
        assert_eq!(blocks.len(), 42);
        assert_eq!(blocks[0].upper_left(), Point::new(100.0, 40.0));
        assert_eq!(blocks[11].upper_left(), Point::new(650.0, 40.0));
        // Second row starts one block in and 20 lower
        assert_eq!(blocks[12].upper_left(), Point::new(150.0, 60.0));
        assert_eq!(blocks[41].upper_left(), Point::new(400.0, 140.0));
    }

    #[test]
    fn test_block_colors_depend_on_seed() {
        let colors = |seed| {
            Game::new(Settings::default(), seed)
                .scene
                .environment
                .iter()
                .filter_map(|(_, s)| match s {
                    Surface::Block(b) => Some(b.color()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(colors(7), colors(7));
        assert_ne!(colors(7), colors(8));
        assert!(
            colors(7)[4..]
                .iter()
                .all(|c| Color::BLOCK_PALETTE.contains(c))
        );
    }

    #[test]
    fn test_paddle_from_settings() {
        let settings = Settings {
            paddle_width: 150.0,
            paddle_speed: 4.0,
            ..Default::default()
        };
        let game = Game::new(settings, 1);
        let paddle = game.paddle().unwrap();
        assert_eq!(paddle.collision_rectangle().width(), 150.0);
        assert_eq!(paddle.speed(), 4.0);
        assert_eq!(
            paddle.collision_rectangle().upper_left(),
            Point::new(360.0, 560.0)
        );
    }

    #[test]
    fn test_game_phase_is_over() {
        assert!(!GamePhase::Playing.is_over());
        assert!(GamePhase::Cleared.is_over());
        assert!(GamePhase::BallsLost.is_over());
    }
}
