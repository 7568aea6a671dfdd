#![warn(missing_docs)]

//! Core library for rgui => See `rgui` crate.
//!
//! Contains the host collaborator traits, the drawing helpers and the
//! [GuiContext](context::GuiContext) widgets are driven with.

pub use vello as vg;

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::event::{ElementState, MouseButton, WindowEvent};
    pub use winit::keyboard::KeyCode;
}

/// Contains the [context::GuiContext] struct.
pub mod context;

/// Contains the drawing helpers shared by all widgets.
pub mod draw;

/// Contains the [geometry::Rectangle] struct.
pub mod geometry;

/// Contains the [input::Input] trait and the winit backed [input::InputState].
pub mod input;

/// Contains the [render::Renderer] trait and the recording [render::DrawList].
pub mod render;

/// Contains the [scene::SceneRenderer] drawing into a vello scene.
#[cfg(feature = "scene")]
pub mod scene;
