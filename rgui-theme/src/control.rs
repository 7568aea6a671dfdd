//! # Control Kinds
//!
//! Every widget draws itself with the style of one [ControlKind]. The kind is
//! the first half of a style key; the second half is a
//! [Property](crate::properties::Property).
//!
//! [ControlKind::Default] is special: writes to its base properties are
//! propagated to every other control, which makes it the place to restyle the
//! whole toolkit at once.
//!
//! ```rust
//! use rgui_theme::control::ControlKind;
//!
//! assert_eq!(ControlKind::from_name("check_box"), Some(ControlKind::CheckBox));
//! assert_eq!(ControlKind::from_id(2), Some(ControlKind::Button));
//! ```

/// Number of control kinds in the style table.
pub const CONTROL_COUNT: usize = 16;

/// A widget category used as the first half of a style lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlKind {
    /// Fallback layer. Base property writes fan out to all controls.
    Default,
    /// Static text and label buttons.
    Label,
    /// Push buttons.
    Button,
    /// Toggle buttons and toggle groups.
    Toggle,
    /// Sliders and slider bars.
    Slider,
    /// Progress bars.
    ProgressBar,
    /// Check boxes.
    CheckBox,
    /// Combo boxes.
    ComboBox,
    /// Dropdown boxes.
    DropdownBox,
    /// Single line text boxes.
    TextBox,
    /// Numeric value boxes.
    ValueBox,
    /// Spinners.
    Spinner,
    /// List views. Also styles scroll panels.
    ListView,
    /// Color pickers.
    ColorPicker,
    /// Scroll bars.
    ScrollBar,
    /// Status bars and window title bars.
    StatusBar,
}

impl ControlKind {
    /// All control kinds in table order.
    pub const ALL: [ControlKind; CONTROL_COUNT] = [
        ControlKind::Default,
        ControlKind::Label,
        ControlKind::Button,
        ControlKind::Toggle,
        ControlKind::Slider,
        ControlKind::ProgressBar,
        ControlKind::CheckBox,
        ControlKind::ComboBox,
        ControlKind::DropdownBox,
        ControlKind::TextBox,
        ControlKind::ValueBox,
        ControlKind::Spinner,
        ControlKind::ListView,
        ControlKind::ColorPicker,
        ControlKind::ScrollBar,
        ControlKind::StatusBar,
    ];

    /// Row index of this control in the style table.
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Look a control up by its row index.
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// The snake_case name used in style files.
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::Default => "default",
            ControlKind::Label => "label",
            ControlKind::Button => "button",
            ControlKind::Toggle => "toggle",
            ControlKind::Slider => "slider",
            ControlKind::ProgressBar => "progress_bar",
            ControlKind::CheckBox => "check_box",
            ControlKind::ComboBox => "combo_box",
            ControlKind::DropdownBox => "dropdown_box",
            ControlKind::TextBox => "text_box",
            ControlKind::ValueBox => "value_box",
            ControlKind::Spinner => "spinner",
            ControlKind::ListView => "list_view",
            ControlKind::ColorPicker => "color_picker",
            ControlKind::ScrollBar => "scroll_bar",
            ControlKind::StatusBar => "status_bar",
        }
    }

    /// Parse a control name. Case, `_`, `-` and spaces are ignored, so
    /// `"CheckBox"`, `"checkbox"` and `"check_box"` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|control| normalize(control.name()) == wanted)
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
