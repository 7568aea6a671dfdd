use std::borrow::Cow;

use rgui_core::draw;
use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_core::window::KeyCode;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{Property, TextBoxProperty};
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};
use vello::peniko::Color;

use crate::ui::Ui;

/// The result of [Ui::text_box].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextEdit<'t> {
    /// The edited text. Borrowed when nothing changed this frame.
    pub text: Cow<'t, str>,
    /// The box asks to enter or leave edit mode. Flip the caller's edit flag
    /// when set.
    pub toggled: bool,
}

fn accepts_char(c: char) -> bool {
    (' '..='}').contains(&c)
}

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A single line text field holding at most `capacity` characters.
    ///
    /// While `edit_mode` is set typed characters are appended as long as they
    /// fit the box and Backspace removes the last one. Enter, or a press
    /// outside the box, asks to leave edit mode. Outside edit mode a press on
    /// the box asks to enter it.
    pub fn text_box<'t>(&mut self, bounds: Rectangle, text: &'t str, capacity: usize, edit_mode: bool) -> TextEdit<'t> {
        let control = ControlKind::TextBox;
        let mut text = Cow::Borrowed(text);
        let mut toggled = false;
        let mut state = self.gui.state();

        if self.accepts_input() {
            let inside = bounds.contains(self.input.mouse_position());
            if edit_mode {
                state = ControlState::Pressed;

                let size = self.text_size();
                let max_width = bounds.width - 2.0 * self.gui.text_spacing();
                let input = self.input;
                for &c in input.chars_pressed() {
                    if !accepts_char(c) || text.chars().count() >= capacity {
                        continue;
                    }
                    if self.text_width(&text) < max_width - size {
                        text.to_mut().push(c);
                    }
                }

                if self.input.is_key_pressed(KeyCode::Backspace) && !text.is_empty() {
                    text.to_mut().pop();
                }

                if self.input.is_key_pressed(KeyCode::Enter) || (!inside && self.primary_pressed()) {
                    toggled = true;
                }
            } else if inside {
                state = ControlState::Focused;
                if self.primary_pressed() {
                    toggled = true;
                }
            }
        }

        let border = self.border_width(control);
        let border_color = self.state_color(control, ColorRole::Border, state);
        match state {
            ControlState::Pressed => {
                let base = self.color(control, Property::BaseColorPressed);
                self.rectangle(bounds, border, border_color, base);
                if edit_mode {
                    let cursor = self.cursor(bounds, &text);
                    let cursor_color = self.color(control, Property::BorderColorPressed);
                    self.fill(cursor, cursor_color);
                }
            },
            ControlState::Disabled => {
                let base = self.color(control, Property::BaseColorDisabled);
                self.rectangle(bounds, border, border_color, base);
            },
            _ => self.rectangle(bounds, 1, border_color, Color::TRANSPARENT),
        }

        let tint = self.state_color(control, ColorRole::Text, state);
        self.control_text(control, bounds, &text, tint);

        TextEdit { text, toggled }
    }

    /// The text cursor, placed after the text for the box alignment.
    fn cursor(&mut self, bounds: Rectangle, text: &str) -> Rectangle {
        let control = ControlKind::TextBox;
        let size = self.text_size();
        let width = self.text_width(text);
        let x = match draw::alignment(self.gui, control) {
            TextAlignment::Left => {
                bounds.x + self.gui.style(control, Property::TextPadding) as f32 + width + 2.0
            },
            TextAlignment::Center => bounds.x + (width as i32 / 2) as f32 + bounds.width / 2.0 + 1.0,
            TextAlignment::Right => {
                bounds.x + bounds.width - self.gui.style(control, TextBoxProperty::TextInnerPadding) as f32
            },
        };
        Rectangle::new(x, bounds.y + bounds.height / 2.0 - size, 1.0, size * 2.0)
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

    const BOUNDS: Rectangle = Rectangle::new(0.0, 0.0, 100.0, 20.0);

    fn typing(chars: &str) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(10.0, 10.0));
        for c in chars.chars() {
            input.push_char(c);
        }
        input
    }

    #[test]
    fn typed_printable_chars_are_appended() {
        let gui = GuiContext::new();
        let input = typing("ab\u{7}~c");
        let mut list = DrawList::new();

        let edit = Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "x", 16, true);
        // '~' is past the accepted range, the bell is a control char.
        assert_eq!(edit.text, "xabc");
        assert!(!edit.toggled);
    }

    #[test]
    fn capacity_limits_length() {
        let gui = GuiContext::new();
        let input = typing("abcdef");
        let mut list = DrawList::new();

        let edit = Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "", 3, true);
        assert_eq!(edit.text, "abc");
    }

    #[test]
    fn width_limits_length() {
        let gui = GuiContext::new();
        let input = typing("aaaaaaaaaaaaaaaaaaaa");
        let mut list = DrawList::new();

        // Chars are taken while the text is narrower than 100 - 2 - 10 = 88.
        // 14 glyphs measure 83, 15 measure 89.
        let edit = Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "", 64, true);
        assert_eq!(edit.text.chars().count(), 15);
    }

    #[test]
    fn backspace_removes_last_char() {
        let gui = GuiContext::new();
        let mut input = typing("");
        input.press_key(KeyCode::Backspace);
        let mut list = DrawList::new();

        let edit = Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "héllo", 16, true);
        assert_eq!(edit.text, "héll");
    }

    #[test]
    fn unchanged_text_stays_borrowed() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        let edit = Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "same", 16, false);
        assert!(matches!(edit.text, Cow::Borrowed("same")));
    }

    #[test]
    fn enter_and_outside_press_leave_edit_mode() {
        let gui = GuiContext::new();
        let mut list = DrawList::new();

        let mut input = typing("");
        input.press_key(KeyCode::Enter);
        assert!(Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "", 16, true).toggled);

        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(300.0, 10.0));
        input.press_mouse_button(MouseButton::Left);
        assert!(Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "", 16, true).toggled);
    }

    #[test]
    fn edit_mode_draws_a_cursor_after_the_text() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).text_box(BOUNDS, "ab", 16, true);

        // Padding 5, text 11, gap 2.
        let cursor = Rectangle::new(18.0, 0.0, 1.0, 20.0);
        assert!(list.rects().any(|(rect, _)| rect == cursor));
    }
}
