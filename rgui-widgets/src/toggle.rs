use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{Property, ToggleProperty};
use rgui_theme::state::{ColorRole, ControlState};

use crate::ui::Ui;

/// Maximum number of items taken from an item list.
pub const MAX_ITEMS: usize = 32;

/// One entry of an item list, see [split_items].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'t> {
    /// The item text.
    pub text: &'t str,
    /// Zero based row the item is laid out on.
    pub row: usize,
}

/// Split an item list: `;` separates items, `\n` separates items and starts a
/// new row.
///
/// Empty text is a single empty item. Items past [MAX_ITEMS] are dropped.
///
/// ```rust
/// use rgui_widgets::toggle::{split_items, Item};
///
/// let items = split_items("One;Two\nThree");
/// assert_eq!(items[1], Item { text: "Two", row: 0 });
/// assert_eq!(items[2], Item { text: "Three", row: 1 });
/// ```
pub fn split_items(text: &str) -> Vec<Item<'_>> {
    let mut items = Vec::new();
    let mut row = 0;
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if c == ';' || c == '\n' {
            items.push(Item {
                text: &text[start..index],
                row,
            });
            start = index + 1;
            if c == '\n' {
                row += 1;
            }
        }
    }
    items.push(Item {
        text: &text[start..],
        row,
    });

    if items.len() > MAX_ITEMS {
        log::trace!("Dropping {} items past the limit of {}", items.len() - MAX_ITEMS, MAX_ITEMS);
        items.truncate(MAX_ITEMS);
    }
    items
}

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A button that stays on. Returns the new `active` value, flipped on the
    /// frame the primary button is released over it.
    pub fn toggle(&mut self, bounds: Rectangle, text: &str, active: bool) -> bool {
        let mut active = active;
        let mut state = self.control_state(bounds);
        if self.hovered(bounds) && !self.primary_down() && self.primary_released() {
            state = ControlState::Normal;
            active = !active;
        }

        let control = ControlKind::Toggle;
        let (border, base, text_color) = if state == ControlState::Normal && active {
            (
                self.color(control, Property::BorderColorPressed),
                self.color(control, Property::BaseColorPressed),
                self.color(control, Property::TextColorPressed),
            )
        } else {
            (
                self.state_color(control, ColorRole::Border, state),
                self.state_color(control, ColorRole::Base, state),
                self.state_color(control, ColorRole::Text, state),
            )
        };

        let width = self.border_width(control);
        self.rectangle(bounds, width, border, base);
        self.control_text(control, bounds, text, text_color);

        active
    }

    /// A row-wrapping group of toggles, one per item of `text` (see
    /// [split_items]). Returns the index of the active item.
    ///
    /// Items are laid out left to right with the group padding between them
    /// and start over below when the row changes. Every item has the size of
    /// `bounds`.
    pub fn toggle_group(&mut self, bounds: Rectangle, text: &str, active: usize) -> usize {
        let padding = self.gui.style(ControlKind::Toggle, ToggleProperty::GroupPadding) as f32;
        let items = split_items(text);

        let mut active = active;
        let mut item_bounds = bounds;
        let mut previous_row = items.first().map(|item| item.row).unwrap_or_default();

        for (index, item) in items.iter().enumerate() {
            if item.row != previous_row {
                item_bounds.x = bounds.x;
                item_bounds.y += bounds.height + padding;
                previous_row = item.row;
            }

            if index == active {
                self.toggle(item_bounds, item.text, true);
            } else if self.toggle(item_bounds, item.text, false) {
                active = index;
            }

            item_bounds.x += bounds.width + padding;
        }

        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rows_and_items() {
        let items = split_items("A;B\nC;D\nE");
        let rows: Vec<_> = items.iter().map(|item| (item.text, item.row)).collect();
        assert_eq!(rows, vec![("A", 0), ("B", 0), ("C", 1), ("D", 1), ("E", 2)]);
    }

    #[test]
    fn split_keeps_empty_items() {
        assert_eq!(split_items(""), vec![Item { text: "", row: 0 }]);
        let items = split_items(";x;");
        let texts: Vec<_> = items.iter().map(|item| item.text).collect();
        assert_eq!(texts, vec!["", "x", ""]);
    }

    #[test]
    fn split_truncates_past_the_limit() {
        let text = (0..40).map(|i| i.to_string()).collect::<Vec<_>>().join(";");
        let items = split_items(&text);
        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items.last().map(|item| item.text), Some("31"));
    }

    #[test]
    fn split_handles_multibyte_text() {
        let items = split_items("été;ñ\nü");
        let texts: Vec<_> = items.iter().map(|item| item.text).collect();
        assert_eq!(texts, vec!["été", "ñ", "ü"]);
    }
}
