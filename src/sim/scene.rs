//! Scene context: the collision environment, the sprite registry and the
//! counters, owned together and handed explicitly to whoever needs them.

use super::ball::{Ball, BallId};
use super::environment::{ColliderId, GameEnvironment, Surface};
use super::listener::Counters;
use crate::consts::BLOCK_HIT_SCORE;

/// Something drawn and ticked each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteRef {
    Surface(ColliderId),
    Ball(BallId),
    ScoreIndicator,
}

/// Sprites in registration order (also draw and update order)
#[derive(Debug, Clone, Default)]
pub struct SpriteCollection {
    sprites: Vec<SpriteRef>,
}

impl SpriteCollection {
    pub fn add(&mut self, sprite: SpriteRef) {
        self.sprites.push(sprite);
    }

    /// Remove the first registration of `sprite`, if any
    pub fn remove(&mut self, sprite: SpriteRef) {
        if let Some(pos) = self.sprites.iter().position(|s| *s == sprite) {
            self.sprites.remove(pos);
        }
    }

    pub fn contains(&self, sprite: SpriteRef) -> bool {
        self.sprites.contains(&sprite)
    }

    pub fn iter(&self) -> impl Iterator<Item = SpriteRef> + '_ {
        self.sprites.iter().copied()
    }

    /// Point-in-time copy for iterating while the registry may change
    pub fn snapshot(&self) -> Vec<SpriteRef> {
        self.sprites.clone()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Everything hit listeners are allowed to mutate
#[derive(Debug, Clone)]
pub struct Scene {
    pub environment: GameEnvironment,
    pub sprites: SpriteCollection,
    pub counters: Counters,
    /// Points awarded per score notification
    pub block_hit_score: i64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            environment: GameEnvironment::new(),
            sprites: SpriteCollection::default(),
            counters: Counters::default(),
            block_hit_score: BLOCK_HIT_SCORE,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface for collisions and drawing
    pub fn add_collidable(&mut self, surface: impl Into<Surface>) -> ColliderId {
        let id = self.environment.add(surface);
        self.sprites.add(SpriteRef::Surface(id));
        id
    }

    /// Take a surface out of both registries
    pub fn remove_collidable(&mut self, id: ColliderId) -> Option<Surface> {
        self.sprites.remove(SpriteRef::Surface(id));
        self.environment.remove(id)
    }

    /// Tell every listener of `being_hit` that `hitter` struck it.
    ///
    /// The listener list is copied first, so listeners may remove the block,
    /// themselves or other surfaces without affecting this dispatch.
    pub fn notify_hit(&mut self, being_hit: ColliderId, hitter: &mut Ball) {
        let Some(surface) = self.environment.get(being_hit) else {
            return;
        };
        let listeners = surface.listeners().to_vec();
        for listener in listeners {
            listener.hit_event(self, being_hit, hitter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::Block;
    use crate::sim::color::Color;
    use crate::sim::listener::HitListener;
    use crate::sim::point::Point;
    use crate::sim::rectangle::Rectangle;

    fn listening_block(color: Color) -> Block {
        Block::new(Rectangle::new(Point::new(0.0, 0.0), 50.0, 20.0), color)
            .with_listener(HitListener::BlockRemover)
            .with_listener(HitListener::ScoreTracker)
    }

    #[test]
    fn test_add_and_remove_collidable_updates_both_registries() {
        let mut scene = Scene::new();
        let id = scene.add_collidable(listening_block(Color::RED));
        assert!(scene.sprites.contains(SpriteRef::Surface(id)));
        assert_eq!(scene.environment.len(), 1);

        assert!(scene.remove_collidable(id).is_some());
        assert!(!scene.sprites.contains(SpriteRef::Surface(id)));
        assert!(scene.environment.is_empty());
    }

    #[test]
    fn test_snapshot_dispatch_reaches_listeners_after_removal() {
        let mut scene = Scene::new();
        scene.counters.remaining_blocks.increase(1);
        let id = scene.add_collidable(listening_block(Color::CYAN));
        let mut ball = Ball::new(7, Point::new(10.0, 30.0), 5.0, Color::RED);

        scene.notify_hit(id, &mut ball);

        // BlockRemover ran first and removed the block; ScoreTracker still fired
        assert!(scene.environment.get(id).is_none());
        assert_eq!(scene.counters.remaining_blocks.value(), 0);
        assert_eq!(scene.counters.score.value(), BLOCK_HIT_SCORE);
        assert_eq!(ball.color(), Color::CYAN);
    }

    #[test]
    fn test_notify_unknown_collider_is_noop() {
        let mut scene = Scene::new();
        let mut ball = Ball::new(1, Point::new(0.0, 0.0), 5.0, Color::RED);
        scene.notify_hit(ColliderId(42), &mut ball);
        assert_eq!(scene.counters, Counters::default());
    }

    #[test]
    fn test_ball_remover_fires_once() {
        let mut scene = Scene::new();
        scene.counters.remaining_balls.increase(1);
        let death = scene.add_collidable(
            Block::new(Rectangle::new(Point::new(0.0, 601.0), 800.0, 1.0), Color::DEATH_REGION)
                .with_listener(HitListener::BallRemover),
        );
        let mut ball = Ball::new(3, Point::new(10.0, 595.0), 5.0, Color::RED);
        scene.sprites.add(SpriteRef::Ball(ball.id()));

        scene.notify_hit(death, &mut ball);
        scene.notify_hit(death, &mut ball);

        assert!(ball.is_removed());
        assert!(!scene.sprites.contains(SpriteRef::Ball(3)));
        assert_eq!(scene.counters.remaining_balls.value(), 0);
        // The death region stays
        assert!(scene.environment.get(death).is_some());
    }
}
