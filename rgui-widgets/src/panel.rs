use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{DefaultProperty, Property};
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};
use vello::peniko::Color;

use crate::ui::Ui;

/// Height of a window title bar before its borders.
const STATUS_BAR_HEIGHT: u32 = 22;
const CLOSE_BUTTON_SIZE: f32 = 18.0;
const GROUP_LINE_THICKNESS: f32 = 1.0;
/// Distance from the start of a line to its embedded text.
const LINE_TEXT_PADDING: f32 = 10.0;
const PANEL_BORDER_WIDTH: u32 = 1;

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// Either `normal` or `disabled` of the default control, depending on the
    /// global state.
    fn default_color(&self, normal: impl Into<Property>, disabled: Property) -> Color {
        if self.gui.state().is_disabled() {
            self.color(ControlKind::Default, disabled)
        } else {
            self.color(ControlKind::Default, normal)
        }
    }

    /// A bordered background rectangle.
    pub fn panel(&mut self, bounds: Rectangle) {
        let border = self.default_color(DefaultProperty::LineColor, Property::BorderColorDisabled);
        let base = self.default_color(DefaultProperty::BackgroundColor, Property::BaseColorDisabled);
        self.rectangle(bounds, PANEL_BORDER_WIDTH, border, base);
    }

    /// A horizontal line along the top of `bounds`, interrupted by `text`.
    /// Without text the line spans the whole width.
    pub fn line(&mut self, bounds: Rectangle, text: &str) {
        let color = self.default_color(DefaultProperty::LineColor, Property::BorderColorDisabled);

        if text.is_empty() {
            self.fill(Rectangle::new(bounds.x, bounds.y, bounds.width, 1.0), color);
            return;
        }

        let size = self.text_size();
        let text_bounds = Rectangle::new(
            bounds.x + LINE_TEXT_PADDING,
            bounds.y - size / 2.0,
            self.text_width(text),
            size,
        );

        self.fill(Rectangle::new(bounds.x, bounds.y, LINE_TEXT_PADDING - 2.0, 1.0), color);
        self.label(text_bounds, text);
        self.fill(
            Rectangle::new(
                bounds.x + LINE_TEXT_PADDING + text_bounds.width + 4.0,
                bounds.y,
                bounds.width - text_bounds.width - LINE_TEXT_PADDING - 4.0,
                1.0,
            ),
            color,
        );
    }

    /// A frame open at the top, where [Ui::line] draws the title.
    pub fn group_box(&mut self, bounds: Rectangle, text: &str) {
        let color = self.default_color(DefaultProperty::LineColor, Property::BorderColorDisabled);

        self.fill(Rectangle::new(bounds.x, bounds.y, GROUP_LINE_THICKNESS, bounds.height), color);
        self.fill(
            Rectangle::new(bounds.x, bounds.y + bounds.height - 1.0, bounds.width, GROUP_LINE_THICKNESS),
            color,
        );
        self.fill(
            Rectangle::new(bounds.x + bounds.width - 1.0, bounds.y, GROUP_LINE_THICKNESS, bounds.height),
            color,
        );

        self.line(Rectangle::new(bounds.x, bounds.y, bounds.width, 1.0), text);
    }

    /// A bar with text, in the normal or disabled palette only.
    pub fn status_bar(&mut self, bounds: Rectangle, text: &str) {
        let control = ControlKind::StatusBar;
        let state = if self.gui.state().is_disabled() {
            ControlState::Disabled
        } else {
            ControlState::Normal
        };

        self.frame(control, bounds, state);
        let tint = self.state_color(control, ColorRole::Text, state);
        self.control_text(control, bounds, text, tint);
    }

    /// A panel with a title bar and a close button. Returns `true` on the
    /// frame the close button is clicked.
    ///
    /// The window is at least twice as tall as its title bar.
    pub fn window_box(&mut self, bounds: Rectangle, title: &str) -> bool {
        let status_border = self.border_width(ControlKind::StatusBar);
        let mut bar_height = STATUS_BAR_HEIGHT + 2 * status_border;
        bar_height += bar_height % 2;
        let bar_height = bar_height as f32;

        let mut bounds = bounds;
        bounds.height = bounds.height.max(2.0 * bar_height);

        let status_bar = Rectangle::new(bounds.x, bounds.y, bounds.width, bar_height);
        let window_panel = Rectangle::new(bounds.x, bounds.y + bar_height - 1.0, bounds.width, bounds.height - bar_height);
        let close = Rectangle::new(
            status_bar.x + status_bar.width - status_border as f32 - 20.0,
            status_bar.y + bar_height / 2.0 - CLOSE_BUTTON_SIZE / 2.0,
            CLOSE_BUTTON_SIZE,
            CLOSE_BUTTON_SIZE,
        );

        self.status_bar(status_bar, title);
        self.panel(window_panel);
        self.button_with(close, "x", 1, TextAlignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use rgui_core::context::GuiContext;
    use rgui_core::input::InputState;
    use rgui_core::render::DrawList;

    use super::*;

    #[test]
    fn panel_uses_line_and_background_colors() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).panel(Rectangle::new(0.0, 0.0, 40.0, 40.0));

        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0].1, gui.style_color(ControlKind::Default, DefaultProperty::BackgroundColor));
        assert_eq!(rects[1].1, gui.style_color(ControlKind::Default, DefaultProperty::LineColor));
    }

    #[test]
    fn empty_line_spans_the_width() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).line(Rectangle::new(5.0, 7.0, 90.0, 20.0), "");

        let rects: Vec<_> = list.rects().map(|(rect, _)| rect).collect();
        assert_eq!(rects, vec![Rectangle::new(5.0, 7.0, 90.0, 1.0)]);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn line_leaves_a_gap_for_text() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        // "Ab" is 2 * 5 + 1 = 11 wide.
        Ui::new(&gui, &mut list, &input).line(Rectangle::new(0.0, 10.0, 100.0, 1.0), "Ab");

        let rects: Vec<_> = list.rects().map(|(rect, _)| rect).collect();
        assert_eq!(rects[0], Rectangle::new(0.0, 10.0, 8.0, 1.0));
        assert_eq!(rects[1], Rectangle::new(25.0, 10.0, 75.0, 1.0));
        assert_eq!(list.texts().next().map(|(text, _, _)| text), Some("Ab"));
    }

    #[test]
    fn window_box_grows_to_twice_the_title_bar() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        let closed = Ui::new(&gui, &mut list, &input).window_box(Rectangle::new(0.0, 0.0, 200.0, 10.0), "Tools");
        assert!(!closed);

        // Title bar of 22 plus two borders, then the panel below it.
        let rects: Vec<_> = list.rects().map(|(rect, _)| rect).collect();
        assert_eq!(rects[0], Rectangle::new(0.0, 0.0, 200.0, 24.0));
        assert!(rects.contains(&Rectangle::new(0.0, 23.0, 200.0, 24.0)));
        let texts: Vec<_> = list.texts().map(|(text, _, _)| text).collect();
        assert_eq!(texts, vec!["Tools", "x"]);
    }
}
