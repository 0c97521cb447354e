//! Registry of collision surfaces and the nearest-collision scan

use super::ball::Ball;
use super::block::Block;
use super::collidable::{Collidable, CollisionInfo, HitResponse};
use super::line::Line;
use super::listener::HitListener;
use super::paddle::Paddle;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// Stable handle to a registered surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// Every kind of surface the environment can hold
#[derive(Debug, Clone)]
pub enum Surface {
    Block(Block),
    Paddle(Paddle),
}

impl Surface {
    /// Listeners to notify when this surface reports a hit
    pub fn listeners(&self) -> &[HitListener] {
        match self {
            Surface::Block(block) => block.listeners(),
            Surface::Paddle(_) => &[],
        }
    }
}

impl Collidable for Surface {
    fn collision_rectangle(&self) -> &Rectangle {
        match self {
            Surface::Block(block) => block.collision_rectangle(),
            Surface::Paddle(paddle) => paddle.collision_rectangle(),
        }
    }

    fn hit(&self, hitter: &Ball, collision_point: Point, velocity: Velocity) -> HitResponse {
        match self {
            Surface::Block(block) => block.hit(hitter, collision_point, velocity),
            Surface::Paddle(paddle) => paddle.hit(hitter, collision_point, velocity),
        }
    }
}

impl From<Block> for Surface {
    fn from(block: Block) -> Self {
        Surface::Block(block)
    }
}

impl From<Paddle> for Surface {
    fn from(paddle: Paddle) -> Self {
        Surface::Paddle(paddle)
    }
}

#[derive(Debug, Clone)]
struct Collider {
    id: ColliderId,
    surface: Surface,
}

/// All surfaces balls can collide with, in insertion order
#[derive(Debug, Clone, Default)]
pub struct GameEnvironment {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl GameEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface and return its handle
    pub fn add(&mut self, surface: impl Into<Surface>) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(Collider {
            id,
            surface: surface.into(),
        });
        id
    }

    /// Deregister a surface. Remaining surfaces keep their scan order.
    pub fn remove(&mut self, id: ColliderId) -> Option<Surface> {
        let pos = self.colliders.iter().position(|c| c.id == id)?;
        Some(self.colliders.remove(pos).surface)
    }

    pub fn get(&self, id: ColliderId) -> Option<&Surface> {
        self.colliders
            .iter()
            .find(|c| c.id == id)
            .map(|c| &c.surface)
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Surface> {
        self.colliders
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| &mut c.surface)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Surfaces in scan order
    pub fn iter(&self) -> impl Iterator<Item = (ColliderId, &Surface)> {
        self.colliders.iter().map(|c| (c.id, &c.surface))
    }

    /// The collision nearest to `trajectory.start()`, if any.
    ///
    /// Every surface is checked; on equal distances the surface registered
    /// first wins.
    pub fn nearest_collision(&self, trajectory: &Line) -> Option<CollisionInfo> {
        let start = trajectory.start();
        let mut nearest: Option<(CollisionInfo, f64)> = None;

        for collider in &self.colliders {
            let rect = collider.surface.collision_rectangle();
            let Some(point) = trajectory.closest_intersection(rect) else {
                continue;
            };
            let distance = start.distance(point);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((
                    CollisionInfo {
                        point,
                        collider: collider.id,
                    },
                    distance,
                ));
            }
        }

        nearest.map(|(info, _)| info)
    }
}
