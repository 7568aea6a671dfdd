//! # Rendering
//!
//! Widgets draw through the [Renderer] trait: filled rectangles and single
//! lines of text are all they need. The host decides how those reach the
//! screen.
//!
//! [DrawList] records the calls instead of drawing them. It is what the tests
//! inspect, and a host can [replay](DrawList::replay) it later onto a real
//! renderer.

use nalgebra::Vector2;
use rgui_theme::font::Font;
use vello::peniko::Color;

use crate::geometry::Rectangle;

/// Width of one glyph of the [DrawList] metrics, relative to the font size.
const GLYPH_ASPECT: f32 = 0.5;

/// The drawing primitives widgets use. Implemented by the host.
pub trait Renderer {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rectangle, color: Color);

    /// Draw one line of text with its top left corner at `position`.
    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2<f32>,
        font: Option<Font>,
        size: f32,
        spacing: f32,
        tint: Color,
    );

    /// The size `text` would take when drawn.
    fn measure_text(&mut self, text: &str, font: Option<Font>, size: f32, spacing: f32) -> Vector2<f32>;
}

/// A recorded [Renderer] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    Rect {
        /// The filled area.
        rect: Rectangle,
        /// The fill color.
        color: Color,
    },
    /// A line of text.
    Text {
        /// The text itself.
        text: String,
        /// Top left corner.
        position: Vector2<f32>,
        /// Font handle passed by the widget.
        font: Option<Font>,
        /// Font size in pixels.
        size: f32,
        /// Extra space between glyphs.
        spacing: f32,
        /// Text color.
        tint: Color,
    },
}

/// A [Renderer] that records every call.
///
/// Text is measured as if the font were monospaced with glyphs half as wide as
/// they are tall, which keeps layout deterministic without a font.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The filled rectangles with their colors.
    pub fn rects(&self) -> impl Iterator<Item = (Rectangle, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            DrawCommand::Text { .. } => None,
        })
    }

    /// The drawn strings with their positions and colors.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vector2<f32>, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                text,
                position,
                tint,
                ..
            } => Some((text.as_str(), *position, *tint)),
            DrawCommand::Rect { .. } => None,
        })
    }

    /// Issue every recorded command on `renderer`.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for command in &self.commands {
            match command {
                DrawCommand::Rect { rect, color } => renderer.fill_rect(*rect, *color),
                DrawCommand::Text {
                    text,
                    position,
                    font,
                    size,
                    spacing,
                    tint,
                } => renderer.draw_text(text, *position, *font, *size, *spacing, *tint),
            }
        }
    }
}

impl Renderer for DrawList {
    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2<f32>,
        font: Option<Font>,
        size: f32,
        spacing: f32,
        tint: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font,
            size,
            spacing,
            tint,
        });
    }

    fn measure_text(&mut self, text: &str, _: Option<Font>, size: f32, spacing: f32) -> Vector2<f32> {
        let glyphs = text.chars().count() as f32;
        if glyphs == 0.0 {
            return Vector2::new(0.0, size);
        }
        Vector2::new(glyphs * size * GLYPH_ASPECT + (glyphs - 1.0) * spacing, size)
    }
}
