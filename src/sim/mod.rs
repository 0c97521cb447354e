//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no clocks
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod collidable;
pub mod color;
pub mod environment;
pub mod line;
pub mod listener;
pub mod paddle;
pub mod point;
pub mod rectangle;
pub mod scene;
pub mod state;
pub mod tick;
pub mod velocity;

pub use ball::{Ball, BallId, StepOutcome};
pub use block::Block;
pub use collidable::{Collidable, CollisionInfo, HitResponse, reflect};
pub use color::Color;
pub use environment::{ColliderId, GameEnvironment, Surface};
pub use line::Line;
pub use listener::{Counter, Counters, HitListener};
pub use paddle::{PADDLE_ZONES, Paddle, ZoneResponse};
pub use point::Point;
pub use rectangle::Rectangle;
pub use scene::{Scene, SpriteCollection, SpriteRef};
pub use state::{Game, GamePhase};
pub use tick::tick;
pub use velocity::Velocity;
