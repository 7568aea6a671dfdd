#![warn(missing_docs)]

//! Widget library for rgui => See `rgui` crate.
//!
//! Every widget is a method on [ui::Ui]: it reads the input snapshot, draws
//! itself through the renderer and returns its new value. Nothing is retained
//! between frames.

/// Contains the [ui::Ui] frame binding.
pub mod ui;

/// Contains the [Ui::label](ui::Ui::label) and [Ui::label_button](ui::Ui::label_button) widgets.
pub mod label;

/// Contains the [Ui::button](ui::Ui::button) widget.
pub mod button;

/// Contains the toggle widgets and the [toggle::split_items] item list parser.
pub mod toggle;

/// Contains the slider and progress bar widgets.
pub mod slider;

/// Contains the [Ui::check_box](ui::Ui::check_box) widget.
pub mod check_box;

/// Contains the combo box and the [combo_box::Dropdown] box.
pub mod combo_box;

/// Contains the [Ui::text_box](ui::Ui::text_box) widget.
pub mod text_box;

/// Contains the scroll bar and the [scroll::ScrollPanel].
pub mod scroll;

/// Contains panels, group boxes, lines, status bars and window boxes.
pub mod panel;
