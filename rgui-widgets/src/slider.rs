use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{ProgressBarProperty, Property, SliderProperty};
use rgui_theme::state::{ColorRole, ControlState, TextAlignment};
use vello::peniko::Color;

use crate::ui::Ui;

/// Clamp without panicking on reversed or NaN limits.
fn clamp_between(value: f32, min: f32, max: f32) -> f32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A horizontal slider with a handle. Returns the new value in
    /// `[min, max]`.
    ///
    /// While the primary button is held over the slider the value follows the
    /// pointer. `text_left` and `text_right` are drawn beside the track.
    pub fn slider(
        &mut self,
        bounds: Rectangle,
        text_left: &str,
        text_right: &str,
        value: f32,
        min: f32,
        max: f32,
    ) -> f32 {
        let handle = self.gui.style(ControlKind::Slider, SliderProperty::SliderWidth);
        self.slider_pro(bounds, text_left, text_right, value, min, max, handle.max(1))
    }

    /// A slider drawn as a bar filled up to the value.
    pub fn slider_bar(
        &mut self,
        bounds: Rectangle,
        text_left: &str,
        text_right: &str,
        value: f32,
        min: f32,
        max: f32,
    ) -> f32 {
        self.slider_pro(bounds, text_left, text_right, value, min, max, 0)
    }

    /// Shared slider logic. A `handle_width` of `0` draws a filled bar.
    fn slider_pro(
        &mut self,
        bounds: Rectangle,
        text_left: &str,
        text_right: &str,
        value: f32,
        min: f32,
        max: f32,
        handle_width: u32,
    ) -> f32 {
        let control = ControlKind::Slider;
        let border = self.border_width(control) as f32;
        let padding = self.gui.style(control, SliderProperty::SliderPadding) as f32;
        let handle = handle_width as f32;

        let mut value = clamp_between(value, min, max);
        let range = max - min;
        let ratio = if range != 0.0 { (value - min) / range } else { 0.0 };
        let offset = (ratio * (bounds.width - 2.0 * border)) as i32 as f32;

        let mut slider = Rectangle::new(
            bounds.x,
            bounds.y + border + padding,
            0.0,
            bounds.height - 2.0 * border - 2.0 * padding,
        );
        if handle_width > 0 {
            slider.x += offset - (handle_width / 2) as f32;
            slider.width = handle;
        } else {
            slider.x += border;
            slider.width = offset;
        }

        let state = self.control_state(bounds);
        if state == ControlState::Pressed && self.hovered(bounds) {
            let pointer = self.input.mouse_position().x;
            let travel = bounds.width - handle;
            if travel > 0.0 {
                value = range * (pointer - (bounds.x + (handle_width / 2) as f32)) / travel + min;
                value = clamp_between(value, min, max);
            }
            if handle_width > 0 {
                slider.x = pointer - slider.width / 2.0;
            } else {
                let ratio = if range != 0.0 { (value - min) / range } else { 0.0 };
                slider.width = (ratio * (bounds.width - 2.0 * border)) as i32 as f32;
            }
        }

        if handle_width > 0 {
            if slider.x <= bounds.x + border {
                slider.x = bounds.x + border;
            } else if slider.x + slider.width >= bounds.x + bounds.width {
                slider.x = bounds.x + bounds.width - slider.width - border;
            }
        } else if slider.width > bounds.width {
            slider.width = bounds.width - 2.0 * border;
        }

        let base = if state.is_disabled() {
            Property::BaseColorDisabled
        } else {
            Property::BaseColorNormal
        };
        let border_color = self.state_color(control, ColorRole::Border, state);
        let base_color = self.color(control, base);
        self.rectangle(bounds, border as u32, border_color, base_color);
        self.track_fill(control, slider, state);

        let text_color = self.state_color(control, ColorRole::Text, state);
        let text_padding = self.gui.style(control, Property::TextPadding) as f32;
        self.side_texts(bounds, text_left, text_right, text_padding, text_color);

        value
    }

    /// A read-only bar showing `value` between `min` and `max`. Returns the
    /// value clamped to that range.
    pub fn progress_bar(
        &mut self,
        bounds: Rectangle,
        text_left: &str,
        text_right: &str,
        value: f32,
        min: f32,
        max: f32,
    ) -> f32 {
        let control = ControlKind::ProgressBar;
        let state = self.gui.state();
        let border = self.border_width(control) as f32;
        let padding = self.gui.style(control, ProgressBarProperty::ProgressPadding) as f32;
        let value = clamp_between(value, min, max);

        let mut progress = Rectangle::new(
            bounds.x + border,
            bounds.y + border + padding,
            0.0,
            bounds.height - 2.0 * border - 2.0 * padding,
        );
        if !state.is_disabled() && max != min {
            let ratio = (value - min) / (max - min);
            progress.width = (ratio * (bounds.width - 2.0 * border)) as i32 as f32;
        }

        let border_color = self.state_color(control, ColorRole::Border, state);
        self.rectangle(bounds, border as u32, border_color, Color::TRANSPARENT);
        self.track_fill(control, progress, state);

        let text_color = self.state_color(control, ColorRole::Text, state);
        let text_padding = self.gui.style(control, Property::TextPadding) as f32;
        self.side_texts(bounds, text_left, text_right, text_padding, text_color);

        value
    }

    /// The moving part of sliders and progress bars.
    fn track_fill(&mut self, control: ControlKind, rect: Rectangle, state: ControlState) {
        let color = match state {
            ControlState::Normal | ControlState::Pressed => self.color(control, Property::BaseColorPressed),
            ControlState::Focused => self.color(control, Property::TextColorFocused),
            ControlState::Disabled => return,
        };
        self.fill(rect, color);
    }

    fn side_texts(&mut self, bounds: Rectangle, left: &str, right: &str, padding: f32, tint: Color) {
        if !left.is_empty() {
            let text_bounds = self.side_text_bounds(bounds, left, padding, true);
            self.text(left, text_bounds, TextAlignment::Right, tint);
        }
        if !right.is_empty() {
            let text_bounds = self.side_text_bounds(bounds, right, padding, false);
            self.text(right, text_bounds, TextAlignment::Left, tint);
        }
    }
}
