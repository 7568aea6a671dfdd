#![allow(missing_docs)]

//! Small enumerations shared by the style table and the widgets.

/// The transient state of a control during one widget call.
///
/// The numeric order matters: color properties are laid out as
/// `role + state * 3`, see [Property::color](crate::properties::Property::color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    /// Idle.
    #[default]
    Normal,
    /// The pointer is over the control.
    Focused,
    /// The pointer is over the control and the primary button is held.
    Pressed,
    /// The control ignores input and draws with the disabled palette.
    Disabled,
}

impl ControlState {
    /// Position of this state in the color block.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, ControlState::Disabled)
    }
}

/// Which of the three parallel colors of a state is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Outline color.
    Border,
    /// Fill color.
    Base,
    /// Text and glyph color.
    Text,
}

impl ColorRole {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Horizontal text placement inside a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// The packed value stored in the style table.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Decode a stored value. Unknown values fall back to [TextAlignment::Left].
    pub fn from_value(value: u32) -> Self {
        match value {
            1 => TextAlignment::Center,
            2 => TextAlignment::Right,
            _ => TextAlignment::Left,
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "left" => Some(TextAlignment::Left),
            "center" | "centre" => Some(TextAlignment::Center),
            "right" => Some(TextAlignment::Right),
            _ => None,
        }
    }
}

/// The side a vertical scroll bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBarSide {
    Left,
    #[default]
    Right,
}

impl ScrollBarSide {
    pub const fn value(self) -> u32 {
        self as u32
    }

    pub fn from_value(value: u32) -> Self {
        if value == 0 {
            ScrollBarSide::Left
        } else {
            ScrollBarSide::Right
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "left" => Some(ScrollBarSide::Left),
            "right" => Some(ScrollBarSide::Right),
            _ => None,
        }
    }
}
