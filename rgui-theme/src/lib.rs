#![warn(missing_docs)]

//! # RGUI Styling
//!
//! The style table and the small shared types every rgui widget is styled with.
//!
//! ## Overview
//!
//! - **[StyleTable](style::StyleTable)**: A `(control, property) -> u32` table, lazily filled with the built-in light style
//! - **[ControlKind](control::ControlKind)**: The widget category half of a style key
//! - **[Property](properties::Property)**: The attribute half, base or control specific
//! - **[Globals](globals::Globals)**: Global state override, lock, alpha fade and font
//! - **[StyleConfig](config::StyleConfig)**: Style overrides from TOML, JSON or `.rgs` files
//!
//! ## Quick Start
//!
//! ```rust
//! use rgui_theme::control::ControlKind;
//! use rgui_theme::properties::{Property, SliderProperty};
//! use rgui_theme::state::{ColorRole, ControlState};
//! use rgui_theme::style::StyleTable;
//!
//! let mut style = StyleTable::new();
//!
//! // Reads populate the defaults on first use.
//! assert_eq!(style.get(ControlKind::Slider, SliderProperty::SliderWidth), 15);
//!
//! // Colors are looked up by role and state.
//! let border = style.get_color(
//!     ControlKind::Button,
//!     Property::color(ColorRole::Border, ControlState::Focused),
//! );
//!
//! // Writes to the default control reach every control.
//! style.set(ControlKind::Default, Property::TextPadding, 4);
//! assert_eq!(style.get(ControlKind::Toggle, Property::TextPadding), 4);
//! # let _ = border;
//! ```
//!
//! ## Style Files
//!
//! ```rust,no_run
//! use rgui_theme::config::StyleConfig;
//! use rgui_theme::style::StyleTable;
//!
//! let mut style = StyleTable::new();
//! if let Some(config) = StyleConfig::from_env().unwrap() {
//!     config.apply(&mut style).unwrap();
//! }
//! ```
//!
//! ```bash
//! export RGUI_STYLE=~/.config/rgui/dark.toml
//! ```

/// Contains conversions between packed style values and colors.
pub mod color;
/// Contains the [config::StyleConfig] struct for loading style files.
pub mod config;
/// Contains the [control::ControlKind] enum.
pub mod control;
mod defaults;
/// Contains the [error::StyleError] type.
pub mod error;
/// Contains the [font::Font] handle.
pub mod font;
/// Contains the [globals::Globals] struct.
pub mod globals;
/// Contains the [properties::Property] key and per-control property enums.
pub mod properties;
/// Contains control states, color roles and alignments.
pub mod state;
/// Contains the [style::StyleTable].
pub mod style;
