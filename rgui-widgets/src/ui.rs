//! # Frame Binding
//!
//! A [Ui] ties together everything a widget call needs for one frame: the
//! [GuiContext] with style and global toggles, the host [Renderer] and the
//! host [Input]. Each widget is a method on [Ui], defined in its own module.
//!
//! ```rust
//! use rgui_core::context::GuiContext;
//! use rgui_core::geometry::Rectangle;
//! use rgui_core::input::InputState;
//! use rgui_core::render::DrawList;
//! use rgui_widgets::ui::Ui;
//!
//! let gui = GuiContext::new();
//! let input = InputState::new();
//! let mut renderer = DrawList::new();
//! let mut checked = false;
//!
//! let mut ui = Ui::new(&gui, &mut renderer, &input);
//! ui.label(Rectangle::new(10.0, 10.0, 120.0, 20.0), "Settings");
//! checked = ui.check_box(Rectangle::new(10.0, 40.0, 15.0, 15.0), "Enabled", checked);
//! assert!(!checked);
//! ```
//!
//! ## Interaction
//!
//! Every interactive widget starts from the global state. Unless that state is
//! [ControlState::Disabled] or input is locked, a pointer inside the widget
//! turns it [ControlState::Focused], or [ControlState::Pressed] while the
//! primary button is held. Values change on the frame the button is released
//! inside the widget.

use rgui_core::context::GuiContext;
use rgui_core::draw;
use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_core::window::MouseButton;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::Property;
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};
use vello::peniko::Color;

/// The widget entry point for one frame.
pub struct Ui<'a, R: Renderer + ?Sized, I: Input + ?Sized> {
    pub(crate) gui: &'a GuiContext,
    pub(crate) renderer: &'a mut R,
    pub(crate) input: &'a I,
}

impl<'a, R: Renderer + ?Sized, I: Input + ?Sized> Ui<'a, R, I> {
    /// Bind a context, renderer and input snapshot for a frame.
    pub fn new(gui: &'a GuiContext, renderer: &'a mut R, input: &'a I) -> Self {
        Self {
            gui,
            renderer,
            input,
        }
    }

    /// The context widgets are styled with.
    pub fn context(&self) -> &GuiContext {
        self.gui
    }

    /// The host renderer, for drawing between widgets.
    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    /// The input snapshot.
    pub fn input(&self) -> &I {
        self.input
    }

    /// Whether widgets may react to input at all.
    pub(crate) fn accepts_input(&self) -> bool {
        !self.gui.state().is_disabled() && !self.gui.is_locked()
    }

    /// Whether the pointer is over `bounds` and input is accepted.
    pub(crate) fn hovered(&self, bounds: Rectangle) -> bool {
        self.accepts_input() && bounds.contains(self.input.mouse_position())
    }

    /// The state of a widget covering `bounds` this frame.
    pub(crate) fn control_state(&self, bounds: Rectangle) -> ControlState {
        if !self.hovered(bounds) {
            return self.gui.state();
        }
        if self.input.is_mouse_button_down(MouseButton::Left) {
            ControlState::Pressed
        } else {
            ControlState::Focused
        }
    }

    pub(crate) fn primary_pressed(&self) -> bool {
        self.input.is_mouse_button_pressed(MouseButton::Left)
    }

    pub(crate) fn primary_down(&self) -> bool {
        self.input.is_mouse_button_down(MouseButton::Left)
    }

    pub(crate) fn primary_released(&self) -> bool {
        self.input.is_mouse_button_released(MouseButton::Left)
    }

    /// A style property of `control` as a color, faded by the global alpha.
    pub(crate) fn color(&self, control: ControlKind, property: impl Into<Property>) -> Color {
        draw::fade(self.gui.style_color(control, property), self.gui.alpha())
    }

    /// The `role` color of `control` in `state`, faded by the global alpha.
    pub(crate) fn state_color(&self, control: ControlKind, role: ColorRole, state: ControlState) -> Color {
        self.color(control, Property::color(role, state))
    }

    pub(crate) fn border_width(&self, control: ControlKind) -> u32 {
        self.gui.style(control, Property::BorderWidth)
    }

    pub(crate) fn text_size(&self) -> f32 {
        self.gui.text_size()
    }

    pub(crate) fn text_width(&mut self, text: &str) -> f32 {
        draw::text_width(&mut *self.renderer, self.gui, text)
    }

    pub(crate) fn rectangle(&mut self, rect: Rectangle, border_width: u32, border_color: Color, color: Color) {
        draw::draw_rectangle(&mut *self.renderer, rect, border_width as i32, border_color, color);
    }

    pub(crate) fn fill(&mut self, rect: Rectangle, color: Color) {
        self.rectangle(rect, 0, Color::TRANSPARENT, color);
    }

    /// Border and base of `control` in `state`.
    pub(crate) fn frame(&mut self, control: ControlKind, bounds: Rectangle, state: ControlState) {
        let border = self.state_color(control, ColorRole::Border, state);
        let base = self.state_color(control, ColorRole::Base, state);
        let width = self.border_width(control);
        self.rectangle(bounds, width, border, base);
    }

    /// Text placed inside `bounds` the way `control` lays out its label.
    pub(crate) fn control_text(&mut self, control: ControlKind, bounds: Rectangle, text: &str, tint: Color) {
        let text_bounds = draw::text_bounds(self.gui, control, bounds);
        let alignment = draw::alignment(self.gui, control);
        self.text(text, text_bounds, alignment, tint);
    }

    pub(crate) fn text(&mut self, text: &str, bounds: Rectangle, alignment: TextAlignment, tint: Color) {
        draw::draw_text(&mut *self.renderer, self.gui, text, bounds, alignment, tint);
    }

    /// Bounds for a label drawn beside a control, vertically centered on it.
    pub(crate) fn side_text_bounds(&mut self, bounds: Rectangle, text: &str, padding: f32, left: bool) -> Rectangle {
        let width = self.text_width(text);
        let size = self.text_size();
        let x = if left {
            bounds.x - width - padding
        } else {
            bounds.x + bounds.width + padding
        };
        Rectangle::new(x, bounds.y + bounds.height / 2.0 - (size as i32 / 2) as f32, width, size)
    }
}
