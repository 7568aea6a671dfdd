use rgui_core::draw;
use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::state::{ColorRole, TextAlignment};

use crate::ui::Ui;

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A push button. Returns `true` on the frame the primary button is
    /// released over it.
    pub fn button(&mut self, bounds: Rectangle, text: &str) -> bool {
        let border_width = self.border_width(ControlKind::Button);
        let alignment = draw::alignment(self.gui, ControlKind::Button);
        self.button_with(bounds, text, border_width, alignment)
    }

    /// A button drawn with the given border width and alignment instead of the
    /// ones in the style table.
    pub(crate) fn button_with(
        &mut self,
        bounds: Rectangle,
        text: &str,
        border_width: u32,
        alignment: TextAlignment,
    ) -> bool {
        let state = self.control_state(bounds);
        let clicked = self.hovered(bounds) && self.primary_released();

        let border = self.state_color(ControlKind::Button, ColorRole::Border, state);
        let base = self.state_color(ControlKind::Button, ColorRole::Base, state);
        let tint = self.state_color(ControlKind::Button, ColorRole::Text, state);

        self.rectangle(bounds, border_width, border, base);
        let text_bounds = draw::text_bounds_with(self.gui, ControlKind::Button, bounds, border_width, alignment);
        self.text(text, text_bounds, alignment, tint);

        clicked
    }
}
