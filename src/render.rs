//! Drawing
//!
//! The simulation never talks to a window. Sprites emit primitive draw calls
//! on a `DrawSurface`; `CommandBuffer` is a surface that records them, which
//! the headless runner and the tests use.

use serde::Serialize;

use crate::consts::{SCORE_BAR_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Ball, Block, Collidable, Color, Game, Paddle, Rectangle, SpriteRef, Surface};

/// Font size of the score text
const SCORE_FONT_SIZE: i32 = 15;

/// Fire-and-forget drawing primitives, in pixel coordinates
pub trait DrawSurface {
    fn set_color(&mut self, color: Color);
    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32);
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, font_size: i32);
}

/// Anything that can draw itself
pub trait Sprite {
    fn draw_on(&self, surface: &mut dyn DrawSurface);
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

/// Filled rectangle with a black outline
fn outlined_rectangle(surface: &mut dyn DrawSurface, rect: &Rectangle, color: Color) {
    let ul = rect.upper_left();
    let (x, y, w, h) = (px(ul.x), px(ul.y), px(rect.width()), px(rect.height()));
    surface.set_color(color);
    surface.fill_rectangle(x, y, w, h);
    surface.set_color(Color::BLACK);
    surface.draw_rectangle(x, y, w, h);
}

impl Sprite for Block {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        outlined_rectangle(surface, self.collision_rectangle(), self.color());
    }
}

impl Sprite for Paddle {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        outlined_rectangle(surface, self.collision_rectangle(), self.color());
    }
}

impl Sprite for Surface {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        match self {
            Surface::Block(block) => block.draw_on(surface),
            Surface::Paddle(paddle) => paddle.draw_on(surface),
        }
    }
}

impl Sprite for Ball {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        let (x, y, r) = (px(self.center().x), px(self.center().y), px(self.radius()));
        surface.set_color(self.color());
        surface.fill_circle(x, y, r);
        surface.set_color(Color::BLACK);
        surface.draw_circle(x, y, r);
    }
}

/// White bar across the top showing the score
#[derive(Debug, Clone, Copy)]
pub struct ScoreIndicator {
    pub score: i64,
}

impl Sprite for ScoreIndicator {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(Color::WHITE);
        surface.fill_rectangle(0, 0, px(SCREEN_WIDTH), px(SCORE_BAR_HEIGHT));
        surface.set_color(Color::BLACK);
        surface.draw_text(
            px(SCREEN_WIDTH / 2.0) - 40,
            px(SCORE_BAR_HEIGHT) - 5,
            &format!("Score: {}", self.score),
            SCORE_FONT_SIZE,
        );
    }
}

/// Background first, then every sprite in registration order
impl Sprite for Game {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(Color::BLUE);
        surface.fill_rectangle(0, 0, px(SCREEN_WIDTH), px(SCREEN_HEIGHT));

        for sprite in self.scene.sprites.iter() {
            match sprite {
                SpriteRef::Surface(id) => {
                    if let Some(s) = self.scene.environment.get(id) {
                        s.draw_on(surface);
                    }
                }
                SpriteRef::Ball(id) => {
                    if let Some(ball) = self.ball(id) {
                        ball.draw_on(surface);
                    }
                }
                SpriteRef::ScoreIndicator => ScoreIndicator {
                    score: self.score(),
                }
                .draw_on(surface),
            }
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DrawCommand {
    SetColor(Color),
    FillRectangle { x: i32, y: i32, width: i32, height: i32 },
    DrawRectangle { x: i32, y: i32, width: i32, height: i32 },
    FillCircle { x: i32, y: i32, radius: i32 },
    DrawCircle { x: i32, y: i32, radius: i32 },
    DrawLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    DrawText { x: i32, y: i32, text: String, font_size: i32 },
}

/// A surface that records every call for later inspection
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget recorded commands, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for CommandBuffer {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::FillRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::DrawRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32) {
        self.commands.push(DrawCommand::DrawCircle { x, y, radius });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::DrawLine { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, font_size: i32) {
        self.commands.push(DrawCommand::DrawText {
            x,
            y,
            text: text.to_string(),
            font_size,
        });
    }
}
