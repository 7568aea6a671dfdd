//! # Input
//!
//! Widgets read input through the [Input] trait, polled once per widget call.
//! [InputState] is a ready made implementation fed from winit window events.
//!
//! ```rust
//! use rgui_core::input::{Input, InputState};
//! use rgui_core::window::MouseButton;
//! use nalgebra::Vector2;
//!
//! let mut input = InputState::new();
//! input.set_mouse_position(Vector2::new(12.0, 8.0));
//! input.press_mouse_button(MouseButton::Left);
//! assert!(input.is_mouse_button_pressed(MouseButton::Left));
//!
//! input.begin_frame();
//! assert!(input.is_mouse_button_down(MouseButton::Left));
//! assert!(!input.is_mouse_button_pressed(MouseButton::Left));
//! ```

use std::collections::HashSet;

use nalgebra::Vector2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixels of a precise scroll that count as one wheel notch.
const PIXELS_PER_LINE: f64 = 20.0;

/// The input queries widgets make. Implemented by the host.
pub trait Input {
    /// Pointer position in window pixels.
    fn mouse_position(&self) -> Vector2<f32>;

    /// Whether `button` is held.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Whether `button` went down this frame.
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;

    /// Whether `button` went up this frame.
    fn is_mouse_button_released(&self, button: MouseButton) -> bool;

    /// Whether `key` is held.
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Whether `key` went down this frame.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Wheel notches moved this frame. Positive is away from the user.
    fn mouse_wheel_move(&self) -> f32;

    /// Characters typed this frame, in order.
    fn chars_pressed(&self) -> &[char];
}

/// A per-frame input snapshot.
///
/// Feed events with [InputState::handle_window_event] (or the setters) and call
/// [InputState::begin_frame] once the frame's widgets have run. Presses and
/// releases are recorded as edges, so a click that starts and ends between two
/// frames is still seen.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor_pos: Option<Vector2<f32>>,
    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    wheel: f32,
    chars: Vec<char>,
}

impl InputState {
    /// Create an empty snapshot with the cursor outside the window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget this frame's edges, wheel movement and typed characters.
    /// Held buttons and keys stay held.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.keys_pressed.clear();
        self.wheel = 0.0;
        self.chars.clear();
    }

    /// Move the pointer.
    pub fn set_mouse_position(&mut self, position: Vector2<f32>) {
        self.cursor_pos = Some(position);
    }

    /// Mark the pointer as outside the window.
    pub fn clear_mouse_position(&mut self) {
        self.cursor_pos = None;
    }

    /// Hold `button` down.
    pub fn press_mouse_button(&mut self, button: MouseButton) {
        if self.buttons_down.insert(button) {
            self.buttons_pressed.insert(button);
        }
    }

    /// Let go of `button`.
    pub fn release_mouse_button(&mut self, button: MouseButton) {
        if self.buttons_down.remove(&button) {
            self.buttons_released.insert(button);
        }
    }

    /// Hold `key` down.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    /// Let go of `key`.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Add wheel movement in notches.
    pub fn scroll_wheel(&mut self, notches: f32) {
        self.wheel += notches;
    }

    /// Record a typed character.
    pub fn push_char(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Update the snapshot from a winit window event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(Vector2::new(position.x as f32, position.y as f32));
            },
            WindowEvent::CursorLeft { .. } => self.clear_mouse_position(),
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_mouse_button(*button),
                ElementState::Released => self.release_mouse_button(*button),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
                };
                self.scroll_wheel(notches);
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed if !event.repeat => self.press_key(code),
                        ElementState::Pressed => {},
                        ElementState::Released => self.release_key(code),
                    }
                }

                if event.state == ElementState::Pressed {
                    if let Some(text) = &event.text {
                        text.chars()
                            .filter(|c| !c.is_control())
                            .for_each(|c| self.push_char(c));
                    }
                }
            },
            WindowEvent::Focused(false) => {
                log::trace!("Window lost focus, releasing held input");
                self.buttons_down.clear();
                self.keys_down.clear();
            },
            _ => (),
        }
    }
}

impl Input for InputState {
    fn mouse_position(&self) -> Vector2<f32> {
        self.cursor_pos
            .unwrap_or_else(|| Vector2::new(f32::NEG_INFINITY, f32::NEG_INFINITY))
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn mouse_wheel_move(&self) -> f32 {
        self.wheel
    }

    fn chars_pressed(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_are_edges() {
        let mut input = InputState::new();
        input.press_mouse_button(MouseButton::Left);
        assert!(input.is_mouse_button_pressed(MouseButton::Left));
        assert!(input.is_mouse_button_down(MouseButton::Left));

        input.begin_frame();
        input.press_mouse_button(MouseButton::Left);
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));

        input.release_mouse_button(MouseButton::Left);
        assert!(input.is_mouse_button_released(MouseButton::Left));
        assert!(!input.is_mouse_button_down(MouseButton::Left));

        input.begin_frame();
        assert!(!input.is_mouse_button_released(MouseButton::Left));
    }

    #[test]
    fn click_between_frames_is_not_lost() {
        let mut input = InputState::new();
        input.press_mouse_button(MouseButton::Left);
        input.release_mouse_button(MouseButton::Left);
        assert!(input.is_mouse_button_pressed(MouseButton::Left));
        assert!(input.is_mouse_button_released(MouseButton::Left));
        assert!(!input.is_mouse_button_down(MouseButton::Left));
    }

    #[test]
    fn keys_and_text_reset_each_frame() {
        let mut input = InputState::new();
        input.press_key(KeyCode::Backspace);
        input.push_char('a');
        input.scroll_wheel(1.5);
        assert!(input.is_key_pressed(KeyCode::Backspace));
        assert_eq!(input.chars_pressed(), &['a']);
        assert_eq!(input.mouse_wheel_move(), 1.5);

        input.begin_frame();
        assert!(input.is_key_down(KeyCode::Backspace));
        assert!(!input.is_key_pressed(KeyCode::Backspace));
        assert!(input.chars_pressed().is_empty());
        assert_eq!(input.mouse_wheel_move(), 0.0);
    }

    #[test]
    fn cursor_outside_window_hits_nothing() {
        let mut input = InputState::new();
        let bounds = crate::geometry::Rectangle::new(-1e6, -1e6, 2e6, 2e6);
        assert!(!bounds.contains(input.mouse_position()));

        input.set_mouse_position(Vector2::new(3.0, 4.0));
        assert!(bounds.contains(input.mouse_position()));
        input.clear_mouse_position();
        assert!(!bounds.contains(input.mouse_position()));
    }
}
