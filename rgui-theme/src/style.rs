//! # Style Table
//!
//! A flat `(control, property) -> u32` mapping holding every color, size and
//! alignment the widgets draw with. Colors are packed `0xRRGGBBAA`.
//!
//! The table fills itself with the built-in defaults on first access, whatever
//! that access is, so a fresh table can be read or written right away.
//!
//! ## Propagation
//!
//! Writing a base property on [ControlKind::Default] writes the same value into
//! that slot for every control. It is a fallback layer, not inheritance: a
//! control can be overridden afterwards, and the next default write
//! overwrites that override again.
//!
//! ```rust
//! use rgui_theme::control::ControlKind;
//! use rgui_theme::properties::Property;
//! use rgui_theme::style::StyleTable;
//!
//! let mut style = StyleTable::new();
//! style.set(ControlKind::Default, Property::BorderWidth, 3);
//! assert_eq!(style.get(ControlKind::Slider, Property::BorderWidth), 3);
//!
//! style.set(ControlKind::Button, Property::BorderWidth, 5);
//! assert_eq!(style.get(ControlKind::Button, Property::BorderWidth), 5);
//! assert_eq!(style.get(ControlKind::Slider, Property::BorderWidth), 3);
//! ```

use std::cell::OnceCell;

use vello::peniko::Color;

use crate::color;
use crate::control::{ControlKind, CONTROL_COUNT};
use crate::defaults;
use crate::properties::{Property, PROPERTY_COUNT};

pub(crate) type Slots = [[u32; PROPERTY_COUNT]; CONTROL_COUNT];

/// The style table. See the [module documentation](self).
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    slots: OnceCell<Box<Slots>>,
}

impl StyleTable {
    /// Create an empty table. Defaults are loaded lazily.
    pub fn new() -> Self {
        Self {
            slots: OnceCell::new(),
        }
    }

    /// Whether the defaults have been populated yet.
    pub fn is_loaded(&self) -> bool {
        self.slots.get().is_some()
    }

    /// Read a value.
    pub fn get(&self, control: ControlKind, property: impl Into<Property>) -> u32 {
        self.slots()[control.id()][property.into().id()]
    }

    /// Read a value as a color.
    pub fn get_color(&self, control: ControlKind, property: impl Into<Property>) -> Color {
        color::unpack(self.get(control, property))
    }

    /// Write a value, propagating base properties written on
    /// [ControlKind::Default] to every control.
    pub fn set(&mut self, control: ControlKind, property: impl Into<Property>, value: u32) {
        self.slots.get_or_init(populate);
        if let Some(slots) = self.slots.get_mut() {
            write(slots, control, property.into(), value);
        }
    }

    /// Write a color.
    pub fn set_color(&mut self, control: ControlKind, property: impl Into<Property>, value: Color) {
        self.set(control, property, color::pack(value));
    }

    /// Replace every slot with the built-in defaults.
    pub fn load_defaults(&mut self) {
        self.slots = OnceCell::from(populate());
    }

    /// Read by raw table indices, as used by `.rgs` style files.
    ///
    /// Out-of-range indices are a programming error: debug builds panic,
    /// release builds log a warning and read `0`.
    pub fn get_raw(&self, control_id: usize, property_id: usize) -> u32 {
        match resolve(control_id, property_id) {
            Some((control, property)) => self.get(control, property),
            None => 0,
        }
    }

    /// Write by raw table indices. Out-of-range indices behave as in
    /// [StyleTable::get_raw] and the write is dropped.
    pub fn set_raw(&mut self, control_id: usize, property_id: usize, value: u32) {
        if let Some((control, property)) = resolve(control_id, property_id) {
            self.set(control, property, value);
        }
    }

    fn slots(&self) -> &Slots {
        &**self.slots.get_or_init(populate)
    }
}

fn populate() -> Box<Slots> {
    log::debug!("Loading default style table");
    let mut slots = Box::new([[0; PROPERTY_COUNT]; CONTROL_COUNT]);
    defaults::populate(&mut slots);
    slots
}

fn resolve(control_id: usize, property_id: usize) -> Option<(ControlKind, Property)> {
    let resolved = ControlKind::from_id(control_id).zip(Property::from_id(property_id));
    debug_assert!(
        resolved.is_some(),
        "style key ({control_id}, {property_id}) is out of range"
    );
    if resolved.is_none() {
        log::warn!("Ignoring out-of-range style key ({control_id}, {property_id})");
    }
    resolved
}

pub(crate) fn write(slots: &mut Slots, control: ControlKind, property: Property, value: u32) {
    let column = property.id();
    slots[control.id()][column] = value;

    if control == ControlKind::Default && property.is_base() {
        for row in slots.iter_mut() {
            row[column] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{
        DefaultProperty, ExtendedSlot, ListViewProperty, SliderProperty, BASE_PROPERTY_COUNT,
    };

    #[test]
    fn first_read_loads_defaults() {
        let style = StyleTable::new();
        assert!(!style.is_loaded());
        assert_eq!(style.get(ControlKind::Button, Property::BorderWidth), 2);
        assert!(style.is_loaded());
    }

    #[test]
    fn first_write_loads_defaults() {
        let mut style = StyleTable::new();
        style.set(ControlKind::Label, Property::TextPadding, 9);
        assert!(style.is_loaded());
        assert_eq!(style.get(ControlKind::Slider, SliderProperty::SliderWidth), 15);
    }

    #[test]
    fn default_base_writes_reach_every_control() {
        let mut style = StyleTable::new();
        for id in 0..BASE_PROPERTY_COUNT {
            let property = Property::from_id(id).unwrap();
            let value = 0x1000 + id as u32;
            style.set(ControlKind::Default, property, value);
            for control in ControlKind::ALL {
                assert_eq!(style.get(control, property), value, "{control:?} {property:?}");
            }
        }
    }

    #[test]
    fn control_override_stays_local() {
        let mut style = StyleTable::new();
        style.set(ControlKind::Default, Property::TextColorNormal, 0x112233ff);
        style.set(ControlKind::Toggle, Property::TextColorNormal, 0x445566ff);

        assert_eq!(style.get(ControlKind::Toggle, Property::TextColorNormal), 0x445566ff);
        for control in ControlKind::ALL.into_iter().filter(|c| *c != ControlKind::Toggle) {
            assert_eq!(style.get(control, Property::TextColorNormal), 0x112233ff);
        }

        // A later default write wins over the override.
        style.set(ControlKind::Default, Property::TextColorNormal, 0);
        assert_eq!(style.get(ControlKind::Toggle, Property::TextColorNormal), 0);
    }

    #[test]
    fn extended_default_writes_do_not_propagate() {
        let mut style = StyleTable::new();
        let before = style.get(ControlKind::ListView, ListViewProperty::ScrollBarWidth);
        style.set(ControlKind::Default, DefaultProperty::LineColor, 0xdeadbeef);

        assert_eq!(style.get(ControlKind::Default, DefaultProperty::LineColor), 0xdeadbeef);
        assert_eq!(
            style.get(ControlKind::ListView, ListViewProperty::ScrollBarWidth),
            before
        );
        for control in ControlKind::ALL.into_iter().skip(1) {
            let slot = Property::Extended(ExtendedSlot::new(2).unwrap());
            assert_ne!(style.get(control, slot), 0xdeadbeef);
        }
    }

    #[test]
    fn border_width_scenario() {
        let mut style = StyleTable::new();
        let built_in = style.get(ControlKind::Button, Property::BorderWidth);
        assert_eq!(built_in, 2);

        style.set(ControlKind::Default, Property::BorderWidth, 3);
        assert_eq!(style.get(ControlKind::Button, Property::BorderWidth), 3);
        assert_eq!(style.get(ControlKind::Slider, Property::BorderWidth), 3);
    }

    #[test]
    fn load_defaults_is_idempotent() {
        let mut style = StyleTable::new();
        style.set(ControlKind::Default, Property::BorderWidth, 7);
        style.load_defaults();
        let first: Vec<u32> = (0..CONTROL_COUNT)
            .flat_map(|c| (0..PROPERTY_COUNT).map(move |p| (c, p)))
            .map(|(c, p)| style.get_raw(c, p))
            .collect();
        style.load_defaults();
        let second: Vec<u32> = (0..CONTROL_COUNT)
            .flat_map(|c| (0..PROPERTY_COUNT).map(move |p| (c, p)))
            .map(|(c, p)| style.get_raw(c, p))
            .collect();
        assert_eq!(first, second);
        assert_eq!(style.get(ControlKind::Label, Property::BorderWidth), 1);
    }

    #[test]
    fn raw_access_matches_typed_access() {
        let mut style = StyleTable::new();
        style.set_raw(ControlKind::ScrollBar.id(), 16 + 5, 42);
        assert_eq!(
            style.get(ControlKind::ScrollBar, crate::properties::ScrollBarProperty::ScrollSpeed),
            42
        );
        assert_eq!(style.get_raw(0, 12), style.get(ControlKind::Default, Property::BorderWidth));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn raw_access_out_of_range_fails_fast_in_debug() {
        let style = StyleTable::new();
        style.get_raw(CONTROL_COUNT, 0);
    }

    #[test]
    fn colors_unpack_from_the_table() {
        let style = StyleTable::new();
        let border = style.get_color(ControlKind::Default, Property::BorderColorFocused);
        let rgba = border.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0x5b, 0xb2, 0xd9, 0xff));
    }
}
