//! RGB colors shared by balls and blocks

use serde::{Deserialize, Serialize};

/// An opaque RGB color. Equality is exact per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const PINK: Color = Color::rgb(255, 175, 175);

    /// Color of the strip below the screen; balls of this color are never removed by it
    pub const DEATH_REGION: Color = Color::BLUE;

    /// Palette the block pyramid draws from
    pub const BLOCK_PALETTE: [Color; 6] = [
        Color::YELLOW,
        Color::GREEN,
        Color::MAGENTA,
        Color::CYAN,
        Color::PINK,
        Color::RED,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
