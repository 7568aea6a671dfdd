//! # Style Properties
//!
//! The second half of a style key. A [Property] is either one of the sixteen
//! base properties every control has (state colors, border width, text padding,
//! text alignment) or one of eight extended slots whose meaning depends on the
//! control.
//!
//! Extended slots are addressed through the per-control enums generated below,
//! which convert into [Property]:
//!
//! ```rust
//! use rgui_theme::properties::{Property, SliderProperty};
//!
//! let width: Property = SliderProperty::SliderWidth.into();
//! assert_eq!(width.id(), 16);
//! assert!(!width.is_base());
//! ```
//!
//! ## Color layout
//!
//! The first twelve base properties are four blocks of three colors
//! (border, base, text) for the normal, focused, pressed and disabled states.
//! [Property::color] computes the slot for a role and state so widgets never do
//! the offset arithmetic themselves.

use std::borrow::Cow;

use crate::control::{normalize, ControlKind};
use crate::state::{ColorRole, ControlState};

/// Number of base properties shared by every control.
pub const BASE_PROPERTY_COUNT: usize = 16;
/// Number of control specific property slots.
pub const EXTENDED_PROPERTY_COUNT: usize = 8;
/// Total number of property slots per control.
pub const PROPERTY_COUNT: usize = BASE_PROPERTY_COUNT + EXTENDED_PROPERTY_COUNT;

/// Index of a control specific property slot, always below
/// [EXTENDED_PROPERTY_COUNT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtendedSlot(u8);

impl ExtendedSlot {
    /// Create a slot, returning [None] when `index` is out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < EXTENDED_PROPERTY_COUNT).then_some(Self(index as u8))
    }

    /// The slot index in `0..8`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A style attribute key.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    BorderColorNormal,
    BaseColorNormal,
    TextColorNormal,
    BorderColorFocused,
    BaseColorFocused,
    TextColorFocused,
    BorderColorPressed,
    BaseColorPressed,
    TextColorPressed,
    BorderColorDisabled,
    BaseColorDisabled,
    TextColorDisabled,
    BorderWidth,
    TextPadding,
    TextAlignment,
    Reserved,
    /// A control specific slot. Prefer the typed enums such as
    /// [SliderProperty] over building this by hand.
    Extended(ExtendedSlot),
}

const BASE: [(Property, &str); BASE_PROPERTY_COUNT] = [
    (Property::BorderColorNormal, "border_color_normal"),
    (Property::BaseColorNormal, "base_color_normal"),
    (Property::TextColorNormal, "text_color_normal"),
    (Property::BorderColorFocused, "border_color_focused"),
    (Property::BaseColorFocused, "base_color_focused"),
    (Property::TextColorFocused, "text_color_focused"),
    (Property::BorderColorPressed, "border_color_pressed"),
    (Property::BaseColorPressed, "base_color_pressed"),
    (Property::TextColorPressed, "text_color_pressed"),
    (Property::BorderColorDisabled, "border_color_disabled"),
    (Property::BaseColorDisabled, "base_color_disabled"),
    (Property::TextColorDisabled, "text_color_disabled"),
    (Property::BorderWidth, "border_width"),
    (Property::TextPadding, "text_padding"),
    (Property::TextAlignment, "text_alignment"),
    (Property::Reserved, "reserved"),
];

impl Property {
    /// Column index of this property in the style table.
    pub fn id(self) -> usize {
        match self {
            Property::Extended(slot) => BASE_PROPERTY_COUNT + slot.index(),
            base => BASE
                .iter()
                .position(|(property, _)| *property == base)
                .unwrap_or(BASE_PROPERTY_COUNT - 1),
        }
    }

    /// Look a property up by its column index.
    pub fn from_id(id: usize) -> Option<Self> {
        if id < BASE_PROPERTY_COUNT {
            Some(BASE[id].0)
        } else {
            ExtendedSlot::new(id - BASE_PROPERTY_COUNT).map(Property::Extended)
        }
    }

    /// Whether this property belongs to the shared base block.
    pub fn is_base(self) -> bool {
        !matches!(self, Property::Extended(_))
    }

    /// The color slot for `role` in `state`, laid out as `role + state * 3`.
    pub fn color(role: ColorRole, state: ControlState) -> Self {
        BASE[role.index() + state.index() * 3].0
    }

    /// The name of this property as written in style files for `control`.
    ///
    /// Extended slots without a name for that control are written
    /// `extended_<slot>`.
    pub fn name(self, control: ControlKind) -> Cow<'static, str> {
        match self {
            Property::Extended(slot) => extended_name(control, slot)
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(format!("extended_{}", slot.index()))),
            base => Cow::Borrowed(BASE[base.id()].1),
        }
    }

    /// Parse a property name for `control`.
    ///
    /// Accepts base names, the extended names of that control and the generic
    /// `extended_<slot>` form. Matching ignores case, `_`, `-` and spaces.
    pub fn from_name(control: ControlKind, name: &str) -> Option<Self> {
        let wanted = normalize(name);
        if let Some((property, _)) = BASE.iter().find(|(_, base)| normalize(base) == wanted) {
            return Some(*property);
        }
        if let Some(slot) = extended_slot_by_name(control, &wanted) {
            return Some(Property::Extended(slot));
        }
        wanted
            .strip_prefix("extended")
            .and_then(|index| index.parse::<usize>().ok())
            .and_then(ExtendedSlot::new)
            .map(Property::Extended)
    }
}

macro_rules! extended_properties {
    (
        $(#[$meta:meta])*
        $name:ident for $control:ident {
            $($(#[$vmeta:meta])* $variant:ident = $slot:literal => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $name {
            /// Every property of this control.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The control these properties belong to.
            pub const CONTROL: ControlKind = ControlKind::$control;

            /// The extended slot backing this property.
            pub const fn slot(self) -> ExtendedSlot {
                match self {
                    $($name::$variant => ExtendedSlot($slot)),*
                }
            }

            /// The name used in style files.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl From<$name> for Property {
            fn from(property: $name) -> Self {
                Property::Extended(property.slot())
            }
        }
    };
}

extended_properties! {
    /// Extended properties of [ControlKind::Default]. They are global settings
    /// and are only ever read from the default control.
    DefaultProperty for Default {
        TextSize = 0 => "text_size",
        TextSpacing = 1 => "text_spacing",
        LineColor = 2 => "line_color",
        BackgroundColor = 3 => "background_color",
    }
}

extended_properties! {
    /// Extended properties of toggles and toggle groups.
    ToggleProperty for Toggle {
        /// Gap between the items of a toggle group.
        GroupPadding = 0 => "group_padding",
    }
}

extended_properties! {
    /// Extended properties of sliders.
    SliderProperty for Slider {
        SliderWidth = 0 => "slider_width",
        SliderPadding = 1 => "slider_padding",
    }
}

extended_properties! {
    /// Extended properties of progress bars.
    ProgressBarProperty for ProgressBar {
        ProgressPadding = 0 => "progress_padding",
    }
}

extended_properties! {
    /// Extended properties of check boxes.
    CheckBoxProperty for CheckBox {
        CheckPadding = 0 => "check_padding",
    }
}

extended_properties! {
    /// Extended properties of combo boxes.
    ComboBoxProperty for ComboBox {
        ComboButtonWidth = 0 => "combo_button_width",
        ComboButtonPadding = 1 => "combo_button_padding",
    }
}

extended_properties! {
    /// Extended properties of dropdown boxes.
    DropdownBoxProperty for DropdownBox {
        ArrowPadding = 0 => "arrow_padding",
        DropdownItemsPadding = 1 => "dropdown_items_padding",
    }
}

extended_properties! {
    /// Extended properties of text boxes.
    TextBoxProperty for TextBox {
        TextInnerPadding = 0 => "text_inner_padding",
        TextLinesPadding = 1 => "text_lines_padding",
        ColorSelectedFg = 2 => "color_selected_fg",
        ColorSelectedBg = 3 => "color_selected_bg",
    }
}

extended_properties! {
    /// Extended properties of spinners.
    SpinnerProperty for Spinner {
        SpinButtonWidth = 0 => "spin_button_width",
        SpinButtonPadding = 1 => "spin_button_padding",
    }
}

extended_properties! {
    /// Extended properties of scroll bars.
    ScrollBarProperty for ScrollBar {
        ArrowsSize = 0 => "arrows_size",
        /// Non-zero shows the step arrows at both ends.
        ArrowsVisible = 1 => "arrows_visible",
        ScrollSliderPadding = 2 => "scroll_slider_padding",
        ScrollSliderSize = 3 => "scroll_slider_size",
        ScrollPadding = 4 => "scroll_padding",
        /// Pixels per frame for keyboard scrolling, divisor for arrow steps.
        ScrollSpeed = 5 => "scroll_speed",
    }
}

extended_properties! {
    /// Extended properties of list views and scroll panels.
    ListViewProperty for ListView {
        ListItemsHeight = 0 => "list_items_height",
        ListItemsPadding = 1 => "list_items_padding",
        ScrollBarWidth = 2 => "scroll_bar_width",
        /// See [ScrollBarSide](crate::state::ScrollBarSide).
        ScrollBarSide = 3 => "scroll_bar_side",
    }
}

extended_properties! {
    /// Extended properties of color pickers.
    ColorPickerProperty for ColorPicker {
        ColorSelectorSize = 0 => "color_selector_size",
        HueBarWidth = 1 => "hue_bar_width",
        HueBarPadding = 2 => "hue_bar_padding",
        HueBarSelectorHeight = 3 => "hue_bar_selector_height",
        HueBarSelectorOverflow = 4 => "hue_bar_selector_overflow",
    }
}

fn extended_names(control: ControlKind) -> Vec<(ExtendedSlot, &'static str)> {
    fn collect<T: Copy>(all: &[T], slot: fn(T) -> ExtendedSlot, name: fn(T) -> &'static str) -> Vec<(ExtendedSlot, &'static str)> {
        all.iter().map(|p| (slot(*p), name(*p))).collect()
    }

    match control {
        ControlKind::Default => collect(DefaultProperty::ALL, DefaultProperty::slot, DefaultProperty::name),
        ControlKind::Toggle => collect(ToggleProperty::ALL, ToggleProperty::slot, ToggleProperty::name),
        ControlKind::Slider => collect(SliderProperty::ALL, SliderProperty::slot, SliderProperty::name),
        ControlKind::ProgressBar => collect(ProgressBarProperty::ALL, ProgressBarProperty::slot, ProgressBarProperty::name),
        ControlKind::CheckBox => collect(CheckBoxProperty::ALL, CheckBoxProperty::slot, CheckBoxProperty::name),
        ControlKind::ComboBox => collect(ComboBoxProperty::ALL, ComboBoxProperty::slot, ComboBoxProperty::name),
        ControlKind::DropdownBox => collect(DropdownBoxProperty::ALL, DropdownBoxProperty::slot, DropdownBoxProperty::name),
        ControlKind::TextBox => collect(TextBoxProperty::ALL, TextBoxProperty::slot, TextBoxProperty::name),
        ControlKind::Spinner => collect(SpinnerProperty::ALL, SpinnerProperty::slot, SpinnerProperty::name),
        ControlKind::ScrollBar => collect(ScrollBarProperty::ALL, ScrollBarProperty::slot, ScrollBarProperty::name),
        ControlKind::ListView => collect(ListViewProperty::ALL, ListViewProperty::slot, ListViewProperty::name),
        ControlKind::ColorPicker => collect(ColorPickerProperty::ALL, ColorPickerProperty::slot, ColorPickerProperty::name),
        ControlKind::Label
        | ControlKind::Button
        | ControlKind::ValueBox
        | ControlKind::StatusBar => Vec::new(),
    }
}

fn extended_name(control: ControlKind, slot: ExtendedSlot) -> Option<&'static str> {
    extended_names(control)
        .into_iter()
        .find(|(candidate, _)| *candidate == slot)
        .map(|(_, name)| name)
}

fn extended_slot_by_name(control: ControlKind, normalized: &str) -> Option<ExtendedSlot> {
    extended_names(control)
        .into_iter()
        .find(|(_, name)| normalize(name) == normalized)
        .map(|(slot, _)| slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_across_both_blocks() {
        for id in 0..PROPERTY_COUNT {
            let property = Property::from_id(id).unwrap();
            assert_eq!(property.id(), id);
            assert_eq!(property.is_base(), id < BASE_PROPERTY_COUNT);
        }
        assert_eq!(Property::from_id(PROPERTY_COUNT), None);
    }

    #[test]
    fn color_slots_follow_role_plus_state_times_three() {
        assert_eq!(
            Property::color(ColorRole::Border, ControlState::Normal),
            Property::BorderColorNormal
        );
        assert_eq!(
            Property::color(ColorRole::Base, ControlState::Focused),
            Property::BaseColorFocused
        );
        assert_eq!(
            Property::color(ColorRole::Text, ControlState::Pressed),
            Property::TextColorPressed
        );
        assert_eq!(
            Property::color(ColorRole::Text, ControlState::Disabled).id(),
            2 + 3 * 3
        );
    }

    #[test]
    fn extended_names_depend_on_the_control() {
        let slot_two = Property::Extended(ExtendedSlot::new(2).unwrap());
        assert_eq!(slot_two.name(ControlKind::ListView), "scroll_bar_width");
        assert_eq!(slot_two.name(ControlKind::Default), "line_color");
        assert_eq!(slot_two.name(ControlKind::Button), "extended_2");

        assert_eq!(
            Property::from_name(ControlKind::ScrollBar, "ScrollSpeed"),
            Some(ScrollBarProperty::ScrollSpeed.into())
        );
        assert_eq!(Property::from_name(ControlKind::Button, "scroll_speed"), None);
        assert_eq!(
            Property::from_name(ControlKind::Button, "extended_7"),
            Some(Property::Extended(ExtendedSlot::new(7).unwrap()))
        );
        assert_eq!(Property::from_name(ControlKind::Button, "extended_8"), None);
        assert_eq!(
            Property::from_name(ControlKind::Label, "Border-Width"),
            Some(Property::BorderWidth)
        );
    }
}
