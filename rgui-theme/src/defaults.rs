//! The built-in light style.

use crate::control::ControlKind;
use crate::properties::{
    CheckBoxProperty, ColorPickerProperty, ComboBoxProperty, DefaultProperty,
    DropdownBoxProperty, ListViewProperty, ProgressBarProperty, Property, ScrollBarProperty,
    SliderProperty, SpinnerProperty, TextBoxProperty, ToggleProperty,
};
use crate::state::{ScrollBarSide, TextAlignment};
use crate::style::{write, Slots};

/// Base properties of the default control. Written first so they reach every
/// control before the per-control overrides below.
const DEFAULT_BASE: [(Property, u32); 15] = [
    (Property::BorderColorNormal, 0x838383ff),
    (Property::BaseColorNormal, 0xc9c9c9ff),
    (Property::TextColorNormal, 0x686868ff),
    (Property::BorderColorFocused, 0x5bb2d9ff),
    (Property::BaseColorFocused, 0xc9effeff),
    (Property::TextColorFocused, 0x6c9bbcff),
    (Property::BorderColorPressed, 0x0492c7ff),
    (Property::BaseColorPressed, 0x97e8ffff),
    (Property::TextColorPressed, 0x368bafff),
    (Property::BorderColorDisabled, 0xb5c1c2ff),
    (Property::BaseColorDisabled, 0xe6e9e9ff),
    (Property::TextColorDisabled, 0xaeb7b8ff),
    (Property::BorderWidth, 1),
    (Property::TextPadding, 0),
    (Property::TextAlignment, TextAlignment::Center.value()),
];

pub(crate) fn populate(slots: &mut Slots) {
    let mut set = |control: ControlKind, property: Property, value: u32| {
        write(slots, control, property, value);
    };

    for (property, value) in DEFAULT_BASE {
        set(ControlKind::Default, property, value);
    }

    set(ControlKind::Default, DefaultProperty::TextSize.into(), 10);
    set(ControlKind::Default, DefaultProperty::TextSpacing.into(), 1);
    set(ControlKind::Default, DefaultProperty::LineColor.into(), 0x90abb5ff);
    set(ControlKind::Default, DefaultProperty::BackgroundColor.into(), 0xf5f5f5ff);

    let left = TextAlignment::Left.value();
    let right = TextAlignment::Right.value();

    set(ControlKind::Label, Property::TextAlignment, left);
    set(ControlKind::Button, Property::BorderWidth, 2);
    set(ControlKind::Slider, Property::TextPadding, 5);
    set(ControlKind::CheckBox, Property::TextPadding, 5);
    set(ControlKind::CheckBox, Property::TextAlignment, right);
    set(ControlKind::TextBox, Property::TextPadding, 5);
    set(ControlKind::TextBox, Property::TextAlignment, left);
    set(ControlKind::ValueBox, Property::TextAlignment, left);
    set(ControlKind::Spinner, Property::TextAlignment, left);
    set(ControlKind::StatusBar, Property::TextPadding, 6);
    set(ControlKind::StatusBar, Property::TextAlignment, left);
    set(ControlKind::ScrollBar, Property::BorderWidth, 0);

    set(ControlKind::Toggle, ToggleProperty::GroupPadding.into(), 2);
    set(ControlKind::Slider, SliderProperty::SliderWidth.into(), 15);
    set(ControlKind::Slider, SliderProperty::SliderPadding.into(), 1);
    set(ControlKind::ProgressBar, ProgressBarProperty::ProgressPadding.into(), 1);
    set(ControlKind::CheckBox, CheckBoxProperty::CheckPadding.into(), 1);
    set(ControlKind::ComboBox, ComboBoxProperty::ComboButtonWidth.into(), 30);
    set(ControlKind::ComboBox, ComboBoxProperty::ComboButtonPadding.into(), 2);
    set(ControlKind::DropdownBox, DropdownBoxProperty::ArrowPadding.into(), 16);
    set(ControlKind::DropdownBox, DropdownBoxProperty::DropdownItemsPadding.into(), 2);
    set(ControlKind::TextBox, TextBoxProperty::TextInnerPadding.into(), 4);
    set(ControlKind::TextBox, TextBoxProperty::TextLinesPadding.into(), 5);
    set(ControlKind::TextBox, TextBoxProperty::ColorSelectedFg.into(), 0xf0fffeff);
    set(ControlKind::TextBox, TextBoxProperty::ColorSelectedBg.into(), 0x839affe0);
    set(ControlKind::Spinner, SpinnerProperty::SpinButtonWidth.into(), 20);
    set(ControlKind::Spinner, SpinnerProperty::SpinButtonPadding.into(), 2);
    set(ControlKind::ScrollBar, ScrollBarProperty::ArrowsSize.into(), 6);
    set(ControlKind::ScrollBar, ScrollBarProperty::ArrowsVisible.into(), 0);
    set(ControlKind::ScrollBar, ScrollBarProperty::ScrollSliderPadding.into(), 0);
    set(ControlKind::ScrollBar, ScrollBarProperty::ScrollSliderSize.into(), 16);
    set(ControlKind::ScrollBar, ScrollBarProperty::ScrollPadding.into(), 0);
    set(ControlKind::ScrollBar, ScrollBarProperty::ScrollSpeed.into(), 10);
    set(ControlKind::ListView, ListViewProperty::ListItemsHeight.into(), 30);
    set(ControlKind::ListView, ListViewProperty::ListItemsPadding.into(), 2);
    set(ControlKind::ListView, ListViewProperty::ScrollBarWidth.into(), 10);
    set(ControlKind::ListView, ListViewProperty::ScrollBarSide.into(), ScrollBarSide::Right.value());
    set(ControlKind::ColorPicker, ColorPickerProperty::ColorSelectorSize.into(), 6);
    set(ControlKind::ColorPicker, ColorPickerProperty::HueBarWidth.into(), 20);
    set(ControlKind::ColorPicker, ColorPickerProperty::HueBarPadding.into(), 10);
    set(ControlKind::ColorPicker, ColorPickerProperty::HueBarSelectorHeight.into(), 6);
    set(ControlKind::ColorPicker, ColorPickerProperty::HueBarSelectorOverflow.into(), 2);
}

#[cfg(test)]
mod tests {
    use crate::control::ControlKind;
    use crate::properties::{DefaultProperty, Property};
    use crate::state::TextAlignment;
    use crate::style::StyleTable;

    #[test]
    fn base_defaults_reach_controls_without_overrides() {
        let style = StyleTable::new();
        assert_eq!(style.get(ControlKind::Toggle, Property::BaseColorNormal), 0xc9c9c9ff);
        assert_eq!(style.get(ControlKind::Slider, Property::BorderWidth), 1);
        assert_eq!(
            style.get(ControlKind::Button, Property::TextAlignment),
            TextAlignment::Center.value()
        );
    }

    #[test]
    fn per_control_overrides_survive_population() {
        let style = StyleTable::new();
        assert_eq!(
            style.get(ControlKind::Label, Property::TextAlignment),
            TextAlignment::Left.value()
        );
        assert_eq!(style.get(ControlKind::StatusBar, Property::TextPadding), 6);
        assert_eq!(style.get(ControlKind::ScrollBar, Property::BorderWidth), 0);
        assert_eq!(style.get(ControlKind::Default, DefaultProperty::TextSize), 10);
    }
}
