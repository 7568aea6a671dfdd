use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::state::{ColorRole, ControlState};

use crate::ui::Ui;

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// Static text, in the normal or disabled label color.
    pub fn label(&mut self, bounds: Rectangle, text: &str) {
        let state = if self.gui.state().is_disabled() {
            ControlState::Disabled
        } else {
            ControlState::Normal
        };
        let tint = self.state_color(ControlKind::Label, ColorRole::Text, state);
        self.control_text(ControlKind::Label, bounds, text, tint);
    }

    /// Text that behaves like a button. Returns `true` on the frame it is
    /// clicked.
    ///
    /// The clickable area is widened to the whole text when `bounds` is
    /// narrower.
    pub fn label_button(&mut self, bounds: Rectangle, text: &str) -> bool {
        let mut bounds = bounds;
        bounds.width = bounds.width.max(self.text_width(text));

        let state = self.control_state(bounds);
        let clicked = self.hovered(bounds) && self.primary_released();

        let tint = self.state_color(ControlKind::Label, ColorRole::Text, state);
        self.control_text(ControlKind::Label, bounds, text, tint);
        clicked
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;
    use rgui_core::context::GuiContext;
    use rgui_core::input::InputState;
    use rgui_core::render::DrawList;
    use rgui_core::window::MouseButton;
    use rgui_theme::properties::Property;

    use super::*;

    #[test]
    fn label_uses_left_alignment_and_padding() {
        let mut gui = GuiContext::new();
        gui.set_style(ControlKind::Label, Property::TextPadding, 4);
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).label(Rectangle::new(10.0, 0.0, 200.0, 20.0), "Name");

        let (text, position, tint) = list.texts().next().unwrap();
        assert_eq!(text, "Name");
        // Border 1 plus padding 4.
        assert_eq!(position.x, 15.0);
        assert_eq!(tint, gui.style_color(ControlKind::Label, Property::TextColorNormal));
    }

    #[test]
    fn disabled_label_uses_disabled_color() {
        let mut gui = GuiContext::new();
        gui.disable();
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).label(Rectangle::new(0.0, 0.0, 50.0, 20.0), "Off");

        let (_, _, tint) = list.texts().next().unwrap();
        assert_eq!(tint, gui.style_color(ControlKind::Label, Property::TextColorDisabled));
    }

    #[test]
    fn label_button_widens_to_its_text() {
        let gui = GuiContext::new();
        let mut input = InputState::new();
        // "Open file" is 9 glyphs: 9 * 5 + 8 = 53px wide, past the 10px bounds.
        input.set_mouse_position(Vector2::new(40.0, 5.0));
        input.press_mouse_button(MouseButton::Left);
        input.begin_frame();
        input.release_mouse_button(MouseButton::Left);

        let mut list = DrawList::new();
        let clicked = Ui::new(&gui, &mut list, &input).label_button(Rectangle::new(0.0, 0.0, 10.0, 10.0), "Open file");
        assert!(clicked);
        assert!(list.rects().next().is_none());
    }
}
