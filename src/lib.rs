#![warn(missing_docs)]

//! Immediate-mode GUI controls in the raygui tradition.
//!
//! Widgets keep no state of their own. Each frame the host builds a
//! [Ui](widgets::ui::Ui) from a [GuiContext](core::context::GuiContext), a
//! [Renderer](core::render::Renderer) and an [Input](core::input::Input)
//! snapshot, calls the widgets it wants on screen and keeps the values they
//! return.
//!
//! ```rust
//! use rgui::prelude::*;
//!
//! let gui = GuiContext::new();
//! let input = InputState::new();
//! let mut renderer = DrawList::new();
//! let mut volume = 0.5;
//!
//! let mut ui = Ui::new(&gui, &mut renderer, &input);
//! if ui.window_box(Rectangle::new(0.0, 0.0, 220.0, 120.0), "Mixer") {
//!     // close the window
//! }
//! volume = ui.slider(Rectangle::new(60.0, 40.0, 100.0, 16.0), "Low", "High", volume, 0.0, 1.0);
//! assert_eq!(volume, 0.5);
//! ```

pub use nalgebra as math;
pub use vello::peniko as color;

pub use rgui_core as core;
pub use rgui_theme as theme;
pub use rgui_widgets as widgets;

/// A "prelude" for users of rgui.
///
/// Importing this module brings into scope the types needed to lay out and
/// style a frame of widgets.
///
/// ```rust
/// use rgui::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::context::GuiContext;
    pub use crate::core::geometry::Rectangle;
    pub use crate::core::input::{Input, InputState};
    pub use crate::core::render::{DrawList, Renderer};
    #[cfg(feature = "scene")]
    pub use crate::core::scene::SceneRenderer;

    pub use crate::theme::config::StyleConfig;
    pub use crate::theme::control::ControlKind;
    pub use crate::theme::properties::*;
    pub use crate::theme::state::{ControlState, ScrollBarSide, TextAlignment};

    pub use crate::widgets::combo_box::Dropdown;
    pub use crate::widgets::scroll::ScrollPanel;
    pub use crate::widgets::text_box::TextEdit;
    pub use crate::widgets::ui::Ui;

    pub use nalgebra::Vector2;
    pub use vello::peniko::Color;
}
