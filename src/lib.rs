//! Brick Breaker - a ball-and-paddle block breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `render`: Draw-surface abstraction and sprite drawing
//! - `input`: Keyboard capability and per-tick input
//! - `settings`: Data-driven game configuration

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::{Key, KeyboardSensor, TickInput};
pub use render::{CommandBuffer, DrawCommand, DrawSurface, Sprite};
pub use settings::{Settings, SettingsError};

/// Absolute tolerance for every floating-point comparison in the engine
pub const EPSILON: f64 = 1e-7;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;

    /// Fixed frame rate the tick loop is paced to
    pub const FRAMES_PER_SECOND: u32 = 60;

    /// Score bar across the top of the screen
    pub const SCORE_BAR_HEIGHT: f64 = 20.0;
    /// Thickness of the gray boundary walls
    pub const WALL_THICKNESS: f64 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    pub const PADDLE_Y: f64 = 560.0;
    pub const PADDLE_SPEED: f64 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 5.0;
    pub const BALL_SPEED: f64 = 10.0;

    /// Block pyramid
    pub const BLOCK_WIDTH: f64 = 50.0;
    pub const BLOCK_HEIGHT: f64 = 20.0;
    pub const BLOCK_ROWS: usize = 6;
    pub const BLOCKS_IN_FIRST_ROW: usize = 12;
    pub const PYRAMID_LEFT: f64 = 100.0;

    /// Distance a ball backs off from a collision point, per axis
    pub const BACK_OFF: f64 = 1.0;
    /// Upward displacement applied when a ball is found inside an obstacle
    pub const EMBED_NUDGE: f64 = 50.0;
    /// Maximum collisions resolved for one ball within one tick
    pub const MAX_COLLISION_RECHECKS: u32 = 8;

    /// Points per block notification
    pub const BLOCK_HIT_SCORE: i64 = 5;
    /// Bonus for clearing every block
    pub const CLEAR_BONUS: i64 = 100;
}

/// Tolerant float equality (absolute epsilon)
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// True when `value` lies in `[min(a, b), max(a, b)]`, widened by `EPSILON`
#[inline]
pub fn within_range(value: f64, a: f64, b: f64) -> bool {
    a.min(b) - EPSILON <= value && value <= a.max(b) + EPSILON
}

/// True when the closed intervals `[a1, a2]` and `[b1, b2]` overlap (either order)
#[inline]
pub fn ranges_overlap(a1: f64, a2: f64, b1: f64, b2: f64) -> bool {
    a1.min(a2) <= b1.max(b2) + EPSILON && b1.min(b2) <= a1.max(a2) + EPSILON
}
