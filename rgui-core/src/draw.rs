//! Drawing helpers shared by every widget.

use nalgebra::Vector2;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::Property;
use rgui_theme::state::TextAlignment;
use vello::peniko::Color;

use crate::context::GuiContext;
use crate::geometry::Rectangle;
use crate::render::Renderer;

/// Multiply the alpha of `color` by `alpha`.
pub fn fade(color: Color, alpha: f32) -> Color {
    let mut faded = color;
    faded.components[3] *= alpha.clamp(0.0, 1.0);
    faded
}

/// Draw a rectangle with an optional border.
///
/// The fill is skipped when `color` is fully transparent. A positive
/// `border_width` draws the four edges inside `rect`. Coordinates are
/// truncated to whole pixels.
pub fn draw_rectangle<R: Renderer + ?Sized>(
    renderer: &mut R,
    rect: Rectangle,
    border_width: i32,
    border_color: Color,
    color: Color,
) {
    let (x, y) = (rect.x as i32, rect.y as i32);
    let (width, height) = (rect.width as i32, rect.height as i32);

    if color.components[3] > 0.0 {
        fill(renderer, x, y, width, height, color);
    }

    if border_width > 0 {
        let bw = border_width;
        fill(renderer, x, y, width, bw, border_color);
        fill(renderer, x, y + bw, bw, height - 2 * bw, border_color);
        fill(renderer, x + width - bw, y + bw, bw, height - 2 * bw, border_color);
        fill(renderer, x, y + height - bw, width, bw, border_color);
    }
}

fn fill<R: Renderer + ?Sized>(renderer: &mut R, x: i32, y: i32, width: i32, height: i32, color: Color) {
    if width > 0 && height > 0 {
        renderer.fill_rect(
            Rectangle::new(x as f32, y as f32, width as f32, height as f32),
            color,
        );
    }
}

/// Width of `text` in whole pixels with the current font and text size.
pub fn text_width<R: Renderer + ?Sized>(renderer: &mut R, gui: &GuiContext, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    renderer
        .measure_text(text, gui.font(), gui.text_size(), gui.text_spacing())
        .x
        .trunc()
}

/// The area text of `control` is laid out in: `bounds` inset by the border
/// width, then shifted by the text padding.
///
/// Right aligned text is padded from the right edge, everything else from the
/// left. Combo boxes and value boxes take no padding.
pub fn text_bounds(gui: &GuiContext, control: ControlKind, bounds: Rectangle) -> Rectangle {
    text_bounds_with(
        gui,
        control,
        bounds,
        gui.style(control, Property::BorderWidth),
        alignment(gui, control),
    )
}

/// [text_bounds] with the border width and alignment given explicitly, for
/// controls drawn with values that differ from their style.
pub fn text_bounds_with(
    gui: &GuiContext,
    control: ControlKind,
    bounds: Rectangle,
    border_width: u32,
    alignment: TextAlignment,
) -> Rectangle {
    let border = border_width as f32;
    let mut text_bounds = Rectangle::new(
        bounds.x + border,
        bounds.y + border,
        bounds.width - 2.0 * border,
        bounds.height - 2.0 * border,
    );

    match control {
        ControlKind::ComboBox | ControlKind::ValueBox => {},
        _ => {
            let padding = gui.style(control, Property::TextPadding) as f32;
            if alignment == TextAlignment::Right {
                text_bounds.x -= padding;
            } else {
                text_bounds.x += padding;
            }
        },
    }

    text_bounds
}

/// The text alignment of `control`.
pub fn alignment(gui: &GuiContext, control: ControlKind) -> TextAlignment {
    TextAlignment::from_value(gui.style(control, Property::TextAlignment))
}

/// Draw one line of text aligned inside `bounds`.
///
/// Text is centered vertically with a one pixel nudge for odd heights and
/// snapped to whole pixels. Empty text draws nothing.
pub fn draw_text<R: Renderer + ?Sized>(
    renderer: &mut R,
    gui: &GuiContext,
    text: &str,
    bounds: Rectangle,
    alignment: TextAlignment,
    tint: Color,
) {
    if text.is_empty() {
        return;
    }

    let text_width = text_width(renderer, gui, text) as i32;
    let text_height = gui.text_size() as i32;
    let y = bounds.y + bounds.height / 2.0 - (text_height / 2) as f32 + (bounds.height as i32 % 2) as f32;
    let x = match alignment {
        TextAlignment::Left => bounds.x,
        TextAlignment::Center => bounds.x + bounds.width / 2.0 - (text_width / 2) as f32,
        TextAlignment::Right => bounds.x + bounds.width - text_width as f32,
    };

    renderer.draw_text(
        text,
        Vector2::new(x.trunc(), y.trunc()),
        gui.font(),
        gui.text_size(),
        gui.text_spacing(),
        tint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    fn rects(list: &DrawList) -> Vec<Rectangle> {
        list.rects().map(|(rect, _)| rect).collect()
    }

    #[test]
    fn transparent_fill_is_skipped() {
        let mut list = DrawList::new();
        draw_rectangle(&mut list, Rectangle::new(0.0, 0.0, 10.0, 10.0), 0, Color::BLACK, Color::TRANSPARENT);
        assert!(list.is_empty());
    }

    #[test]
    fn border_edges_are_truncated() {
        let mut list = DrawList::new();
        draw_rectangle(
            &mut list,
            Rectangle::new(1.7, 2.2, 20.9, 10.5),
            2,
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(
            rects(&list),
            vec![
                Rectangle::new(1.0, 2.0, 20.0, 10.0),
                Rectangle::new(1.0, 2.0, 20.0, 2.0),
                Rectangle::new(1.0, 4.0, 2.0, 6.0),
                Rectangle::new(19.0, 4.0, 2.0, 6.0),
                Rectangle::new(1.0, 10.0, 20.0, 2.0),
            ]
        );
    }

    #[test]
    fn fade_multiplies_alpha() {
        let faded = fade(Color::from_rgba8(10, 20, 30, 200), 0.5);
        assert_eq!(faded.to_rgba8().a, 100);
        assert_eq!(faded.to_rgba8().r, 10);
    }

    #[test]
    fn text_bounds_follow_alignment() {
        let mut gui = GuiContext::new();
        let bounds = Rectangle::new(0.0, 0.0, 100.0, 30.0);

        // Check boxes are right aligned with padding 5 and border 1.
        let right = text_bounds(&gui, ControlKind::CheckBox, bounds);
        assert_eq!(right, Rectangle::new(-4.0, 1.0, 98.0, 28.0));

        gui.set_style(ControlKind::TextBox, Property::BorderWidth, 2);
        let left = text_bounds(&gui, ControlKind::TextBox, bounds);
        assert_eq!(left, Rectangle::new(7.0, 2.0, 96.0, 26.0));

        gui.set_style(ControlKind::ComboBox, Property::TextPadding, 9);
        let combo = text_bounds(&gui, ControlKind::ComboBox, bounds);
        assert_eq!(combo, Rectangle::new(1.0, 1.0, 98.0, 28.0));
    }

    #[test]
    fn text_is_centered_and_snapped() {
        let gui = GuiContext::new();
        let mut list = DrawList::new();

        // "OK" is 11px wide at size 10 and spacing 1.
        draw_text(&mut list, &gui, "OK", Rectangle::new(0.0, 0.0, 100.0, 31.0), TextAlignment::Center, Color::BLACK);
        draw_text(&mut list, &gui, "OK", Rectangle::new(0.0, 0.0, 100.0, 30.0), TextAlignment::Right, Color::BLACK);
        draw_text(&mut list, &gui, "", Rectangle::new(0.0, 0.0, 100.0, 30.0), TextAlignment::Left, Color::BLACK);

        let positions: Vec<_> = list.texts().map(|(_, position, _)| position).collect();
        assert_eq!(positions, vec![Vector2::new(45.0, 11.0), Vector2::new(89.0, 10.0)]);
    }
}
