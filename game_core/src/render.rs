//! Immediate-mode drawing of the table
//!
//! The host supplies a [`Surface`] (a 2D canvas or a test recorder) and the
//! scene is painted back to front on every tick.

use hecs::World;

use crate::{Ball, Config, Paddle, Particle};

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 1.0);
    pub const TABLE: Color = Color::rgba(0, 0, 0, 0.6);
    pub const NET: Color = Color::rgba(255, 255, 255, 0.4);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.45);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` notation for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

pub const COUNTDOWN_FONT: &str = "bold 72px 'Courier New', monospace";
pub const COUNTDOWN_RADIUS: f32 = 110.0;

const NET_WIDTH: f32 = 4.0;
const NET_SEGMENT: f32 = 20.0;
const NET_SPACING: f32 = 30.0;

/// 2D drawing primitives
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color);
}

/// Paint one frame: table, net, paddles, ball, particles, countdown overlay.
///
/// The table fill is translucent and nothing clears the surface first, so
/// moving objects leave a short trail.
pub fn draw(surface: &mut dyn Surface, world: &World, config: &Config, countdown: Option<u8>) {
    draw_table(surface, config);

    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by(|a, b| a.x.total_cmp(&b.x));
    for paddle in &paddles {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, Color::WHITE);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        draw_ball(surface, ball);
    }

    for (_e, particle) in world.query::<&Particle>().iter() {
        let half = particle.size / 2.0;
        surface.fill_rect(
            particle.pos.x - half,
            particle.pos.y - half,
            particle.size,
            particle.size,
            Color::WHITE.with_alpha(particle.alpha()),
        );
    }

    if let Some(value) = countdown {
        draw_countdown(surface, config, value);
    }
}

fn draw_table(surface: &mut dyn Surface, config: &Config) {
    surface.fill_rect(0.0, 0.0, config.table_width, config.table_height, Color::TABLE);

    let net_x = config.table_width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < config.table_height {
        surface.fill_rect(net_x, y, NET_WIDTH, NET_SEGMENT, Color::NET);
        y += NET_SPACING;
    }
}

fn draw_ball(surface: &mut dyn Surface, ball: &Ball) {
    if !ball.visible {
        return;
    }
    surface.fill_rect(
        ball.pos.x - ball.size,
        ball.pos.y - ball.size,
        ball.size * 2.0,
        ball.size * 2.0,
        Color::WHITE,
    );
}

fn draw_countdown(surface: &mut dyn Surface, config: &Config, value: u8) {
    let center = config.table_center();
    surface.fill_circle(center.x, center.y, COUNTDOWN_RADIUS, Color::OVERLAY);
    let style = TextStyle {
        font: COUNTDOWN_FONT,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    surface.fill_text(&value.to_string(), center.x, center.y, &style, Color::WHITE);
}
