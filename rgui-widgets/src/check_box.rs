use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{CheckBoxProperty, Property};
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};
use vello::peniko::Color;

use crate::ui::Ui;

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A box with a label beside it. Returns the new `checked` value, flipped
    /// on the frame the primary button is released over the box or its label.
    ///
    /// The label sits right of the box, or left of it when the check box text
    /// alignment is [TextAlignment::Left].
    pub fn check_box(&mut self, bounds: Rectangle, text: &str, checked: bool) -> bool {
        let control = ControlKind::CheckBox;
        let padding = self.gui.style(control, Property::TextPadding) as f32;
        let label_left = self.gui.style(control, Property::TextAlignment) == TextAlignment::Left.value();

        let text_bounds = if text.is_empty() {
            Rectangle::default()
        } else {
            self.side_text_bounds(bounds, text, padding, label_left)
        };

        let mut checked = checked;
        let mut state = self.gui.state();
        let total = Rectangle::new(
            if label_left { text_bounds.x } else { bounds.x },
            bounds.y,
            bounds.width + text_bounds.width + padding,
            bounds.height,
        );
        if self.hovered(total) {
            state = if self.primary_down() {
                ControlState::Pressed
            } else {
                ControlState::Focused
            };
            if self.primary_released() {
                checked = !checked;
            }
        }

        let border = self.border_width(control);
        let border_color = self.state_color(control, ColorRole::Border, state);
        self.rectangle(bounds, border, border_color, Color::TRANSPARENT);

        if checked {
            let inset = (border + self.gui.style(control, CheckBoxProperty::CheckPadding)) as f32;
            let check = Rectangle::new(
                bounds.x + inset,
                bounds.y + inset,
                bounds.width - 2.0 * inset,
                bounds.height - 2.0 * inset,
            );
            let check_color = self.state_color(control, ColorRole::Text, state);
            self.fill(check, check_color);
        }

        let alignment = if label_left {
            TextAlignment::Right
        } else {
            TextAlignment::Left
        };
        let tint = self.state_color(ControlKind::Label, ColorRole::Text, state);
        self.text(text, text_bounds, alignment, tint);

        checked
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;
    use rgui_core::context::GuiContext;
    use rgui_core::input::InputState;
    use rgui_core::render::DrawList;
    use rgui_core::window::MouseButton;

    use super::*;

    const BOX: Rectangle = Rectangle::new(10.0, 10.0, 15.0, 15.0);

    fn released_at(x: f32, y: f32) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(x, y));
        input.press_mouse_button(MouseButton::Left);
        input.begin_frame();
        input.release_mouse_button(MouseButton::Left);
        input
    }

    #[test]
    fn clicking_the_label_toggles() {
        let gui = GuiContext::new();
        // Label starts at 10 + 15 + 5 = 30.
        let input = released_at(35.0, 15.0);
        let mut list = DrawList::new();

        assert!(Ui::new(&gui, &mut list, &input).check_box(BOX, "Wrap", false));
    }

    #[test]
    fn checked_box_draws_the_mark() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        assert!(Ui::new(&gui, &mut list, &input).check_box(BOX, "Wrap", true));

        // Four border edges, no fill, then the mark inset by border and padding.
        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[4].0, Rectangle::new(12.0, 12.0, 11.0, 11.0));
        assert_eq!(rects[4].1, gui.style_color(ControlKind::CheckBox, Property::TextColorNormal));
        let (_, position, _) = list.texts().next().unwrap();
        assert_eq!(position.x, 30.0);
    }

    #[test]
    fn left_alignment_moves_the_label() {
        let mut gui = GuiContext::new();
        gui.set_style(ControlKind::CheckBox, Property::TextAlignment, TextAlignment::Left.value());
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).check_box(BOX, "Wrap", false);

        // "Wrap" is 4 * 5 + 3 = 23 wide, right aligned ending 5 before the box.
        let (_, position, _) = list.texts().next().unwrap();
        assert_eq!(position.x, 10.0 - 23.0 - 5.0);
    }
}
