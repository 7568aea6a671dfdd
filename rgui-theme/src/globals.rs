//! # Global Toggles
//!
//! Process-wide switches consulted at the start of every widget call: the state
//! override, the input lock, the alpha fade and the active font.
//!
//! ```rust
//! use rgui_theme::globals::Globals;
//! use rgui_theme::state::ControlState;
//!
//! let mut globals = Globals::default();
//! globals.set_alpha(1.7);
//! assert_eq!(globals.alpha(), 1.0);
//! assert_eq!(globals.state, ControlState::Normal);
//! ```

use crate::font::Font;
use crate::state::ControlState;

/// Global values for all widgets to use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Globals {
    /// Starting state of every widget. [ControlState::Disabled] disables the
    /// whole toolkit; other values act as an override that hit-testing may
    /// refine.
    pub state: ControlState,
    /// When `true` no input is processed, widgets are still drawn.
    pub locked: bool,
    /// Active font, if the host installed one.
    pub font: Option<Font>,
    alpha: f32,
}

impl Globals {
    /// Alpha fade applied to every drawn color, in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set the alpha fade. Values outside `[0, 1]` are clamped, NaN becomes `1`.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self {
            state: ControlState::Normal,
            locked: false,
            font: None,
            alpha: 1.0,
        }
    }
}
