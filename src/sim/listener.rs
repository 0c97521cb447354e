//! Hit listeners and game counters
//!
//! Listeners react to block notifications: removing the struck block,
//! removing the ball that fell out of the playfield, and keeping score. They
//! run during the hit dispatch of the tick that caused them.

use std::fmt;

use super::ball::Ball;
use super::environment::{ColliderId, Surface};
use super::scene::{Scene, SpriteRef};

/// A running integer count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn increase(&mut self, amount: i64) {
        self.value += amount;
    }

    pub fn decrease(&mut self, amount: i64) {
        self.value -= amount;
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Game bookkeeping updated by listeners
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    pub remaining_blocks: Counter,
    pub remaining_balls: Counter,
    pub score: Counter,
}

/// Reactions a block can trigger when struck by a ball of another color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitListener {
    /// Recolor the ball to the block's color and take the block out of the game
    BlockRemover,
    /// Take the ball out of the game
    BallRemover,
    /// Award points for the hit
    ScoreTracker,
}

impl HitListener {
    pub fn hit_event(self, scene: &mut Scene, being_hit: ColliderId, hitter: &mut Ball) {
        match self {
            HitListener::BlockRemover => {
                let Some(Surface::Block(block)) = scene.environment.get_mut(being_hit) else {
                    return;
                };
                hitter.set_color(block.color());
                block.remove_hit_listener(self);
                scene.remove_collidable(being_hit);
                scene.counters.remaining_blocks.decrease(1);
                log::debug!(
                    "Block {:?} removed by ball {}, {} left",
                    being_hit,
                    hitter.id(),
                    scene.counters.remaining_blocks
                );
            }
            HitListener::BallRemover => {
                if hitter.is_removed() {
                    return;
                }
                hitter.mark_removed();
                scene.sprites.remove(SpriteRef::Ball(hitter.id()));
                scene.counters.remaining_balls.decrease(1);
                log::debug!(
                    "Ball {} lost, {} left",
                    hitter.id(),
                    scene.counters.remaining_balls
                );
            }
            HitListener::ScoreTracker => {
                let points = scene.block_hit_score;
                scene.counters.score.increase(points);
            }
        }
    }
}
