use rgui_core::draw;
use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{ComboBoxProperty, DropdownBoxProperty, Property};
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};

use crate::toggle::split_items;
use crate::ui::Ui;

/// The result of [Ui::dropdown_box].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dropdown {
    /// The selected item.
    pub active: usize,
    /// The box asks to enter or leave edit mode. Flip the caller's edit flag
    /// when set.
    pub toggled: bool,
}

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A box showing one item of `text` with a `n/count` selector beside it.
    /// Each press on the box or selector advances to the next item, wrapping
    /// around. Returns the active item.
    pub fn combo_box(&mut self, bounds: Rectangle, text: &str, active: usize) -> usize {
        let control = ControlKind::ComboBox;
        let button_width = self.gui.style(control, ComboBoxProperty::ComboButtonWidth) as f32;
        let button_padding = self.gui.style(control, ComboBoxProperty::ComboButtonPadding) as f32;

        let mut bounds = bounds;
        bounds.width -= button_width + button_padding;
        let selector = Rectangle::new(bounds.x + bounds.width + button_padding, bounds.y, button_width, bounds.height);

        let items = split_items(text);
        let count = items.len();
        let mut active = active.min(count - 1);

        let mut state = self.gui.state();
        if count > 1 && (self.hovered(bounds) || self.hovered(selector)) {
            if self.primary_pressed() {
                active = (active + 1) % count;
            }
            state = if self.primary_down() {
                ControlState::Pressed
            } else {
                ControlState::Focused
            };
        }

        self.frame(control, bounds, state);
        let tint = self.state_color(control, ColorRole::Text, state);
        self.control_text(control, bounds, items[active].text, tint);

        let counter = format!("{}/{}", active + 1, count);
        self.button_with(selector, &counter, 1, TextAlignment::Center);

        active
    }

    /// A box that opens a list of the items of `text` below itself.
    ///
    /// `edit_mode` is owned by the caller: while it is set the list is open.
    /// The returned [Dropdown::toggled] flag asks the caller to flip it, either
    /// because the closed box was pressed or because an item was picked or
    /// the box pressed again while open.
    pub fn dropdown_box(&mut self, bounds: Rectangle, text: &str, active: usize, edit_mode: bool) -> Dropdown {
        let control = ControlKind::DropdownBox;
        let items_padding = self.gui.style(control, DropdownBoxProperty::DropdownItemsPadding) as f32;
        let step = bounds.height + items_padding;

        let items = split_items(text);
        let count = items.len();
        let mut selected = active.min(count - 1);
        let mut focused = None;
        let mut toggled = false;

        let mut open_bounds = bounds;
        open_bounds.height = (count + 1) as f32 * step;

        let mut state = self.gui.state();
        if self.accepts_input() && count > 1 {
            let pointer = self.input.mouse_position();
            if edit_mode {
                state = ControlState::Pressed;
                if bounds.contains(pointer) && self.primary_pressed() {
                    toggled = true;
                }

                let mut item_bounds = bounds;
                for index in 0..count {
                    item_bounds.y += step;
                    if item_bounds.contains(pointer) {
                        focused = Some(index);
                        if self.primary_released() {
                            selected = index;
                            toggled = true;
                        }
                        break;
                    }
                }
            } else if bounds.contains(pointer) {
                if self.primary_pressed() {
                    toggled = true;
                    state = ControlState::Pressed;
                } else {
                    state = ControlState::Focused;
                }
            }
        }

        if edit_mode {
            self.panel(open_bounds);
        }

        let alignment = draw::alignment(self.gui, control);
        let border = self.border_width(control);
        self.frame(control, bounds, state);
        let tint = self.state_color(control, ColorRole::Text, state);
        let text_bounds = draw::text_bounds(self.gui, ControlKind::Default, bounds);
        self.text(items[selected].text, text_bounds, alignment, tint);

        if edit_mode {
            let mut item_bounds = bounds;
            for (index, item) in items.iter().enumerate() {
                item_bounds.y += step;
                let item_text = draw::text_bounds(self.gui, ControlKind::Default, item_bounds);

                let highlight = if index == selected {
                    Some(ControlState::Pressed)
                } else if focused == Some(index) {
                    Some(ControlState::Focused)
                } else {
                    None
                };

                match highlight {
                    Some(item_state) => {
                        let border_color = self.state_color(control, ColorRole::Border, item_state);
                        let base = self.state_color(control, ColorRole::Base, item_state);
                        self.rectangle(item_bounds, border, border_color, base);
                        let tint = self.state_color(control, ColorRole::Text, item_state);
                        self.text(item.text, item_text, alignment, tint);
                    },
                    None => {
                        let tint = self.color(control, Property::TextColorNormal);
                        self.text(item.text, item_text, alignment, tint);
                    },
                }
            }
        }

        let arrow_padding = self.gui.style(control, DropdownBoxProperty::ArrowPadding) as f32;
        let arrow = Rectangle::new(
            bounds.x + bounds.width - arrow_padding,
            bounds.y + bounds.height / 2.0 - 6.0,
            10.0,
            10.0,
        );
        self.text("v", arrow, TextAlignment::Center, tint);

        Dropdown {
            active: selected,
            toggled,
        }
    }
}
