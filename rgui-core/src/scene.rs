// SPDX-License-Identifier: MIT OR Apache-2.0

//! A [Renderer] drawing into a [vello::Scene], with Parley text layout.

use nalgebra::Vector2;
use parley::{Alignment, FontContext, Layout, LayoutContext, StyleProperty};
use rgui_theme::font::Font;
use vello::kurbo::Affine;
use vello::peniko::{Color, Fill};
use vello::Scene;

use crate::geometry::Rectangle;
use crate::render::Renderer;

/// Draws widgets into an owned [Scene] the host submits to vello.
///
/// Text uses system fonts through Parley. The font handle widgets pass along is
/// not used for shaping.
pub struct SceneRenderer {
    scene: Scene,
    font_cx: FontContext,
    layout_cx: LayoutContext<[u8; 4]>,
}

impl SceneRenderer {
    /// Create a renderer with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// The scene drawn so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, for drawing the host's own content.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Clear the scene for the next frame.
    pub fn reset(&mut self) {
        self.scene.reset();
    }

    fn layout(&mut self, text: &str, size: f32, spacing: f32) -> Layout<[u8; 4]> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(size));
        builder.push_default(StyleProperty::LetterSpacing(spacing));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());
        layout
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SceneRenderer {
    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            color,
            None,
            &vello::kurbo::Rect::from(rect),
        );
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2<f32>,
        _: Option<Font>,
        size: f32,
        spacing: f32,
        tint: Color,
    ) {
        if text.is_empty() {
            return;
        }

        let layout = self.layout(text, size, spacing);
        let transform = Affine::translate((position.x as f64, position.y as f64));

        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                self.scene
                    .draw_glyphs(run.font())
                    .brush(tint)
                    .hint(true)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(run.font_size())
                    .normalized_coords(run.normalized_coords())
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }

    fn measure_text(&mut self, text: &str, _: Option<Font>, size: f32, spacing: f32) -> Vector2<f32> {
        if text.is_empty() {
            return Vector2::new(0.0, size);
        }
        let layout = self.layout(text, size, spacing);
        Vector2::new(layout.width(), layout.height())
    }
}
