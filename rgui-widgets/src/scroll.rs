use nalgebra::Vector2;
use rgui_core::geometry::Rectangle;
use rgui_core::input::Input;
use rgui_core::render::Renderer;
use rgui_core::window::KeyCode;
use rgui_theme::control::ControlKind;
use rgui_theme::properties::{DefaultProperty, ListViewProperty, Property, ScrollBarProperty};
use rgui_theme::state::{ColorRole, ControlState, ScrollBarSide, TextAlignment};
use vello::peniko::Color;

use crate::ui::Ui;

/// Pixels scrolled per wheel step inside a scroll panel.
const WHEEL_STEP: f32 = 20.0;

/// The result of [Ui::scroll_panel].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPanel {
    /// The visible part of the panel, without scroll bars, clipped to the
    /// content size. Draw the content inside it, offset by `scroll`.
    pub view: Rectangle,
    /// The new scroll offset. Both components are zero or negative once the
    /// content is scrolled away from its origin.
    pub scroll: Vector2<f32>,
}

fn clamp_range(value: f32, low: f32, high: f32) -> f32 {
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

/// Narrow a widened bar value back into `[min, max]`.
fn within(value: i64, min: i32, max: i32) -> i32 {
    value.clamp(i64::from(min), i64::from(max)) as i32
}

impl<R: Renderer + ?Sized, I: Input + ?Sized> Ui<'_, R, I> {
    /// A scroll bar for `value` in `[min, max]`. Returns the new value.
    ///
    /// The bar is vertical unless it is wider than tall. Over the bar the
    /// wheel moves the value by one per step, a press on a step arrow moves it
    /// by a fraction of the range and dragging places the slider under the
    /// pointer.
    pub fn scroll_bar(&mut self, bounds: Rectangle, value: i32, min: i32, max: i32) -> i32 {
        let slider_size = self.gui.style(ControlKind::ScrollBar, ScrollBarProperty::ScrollSliderSize);
        self.scroll_bar_with(bounds, value, min, max, slider_size)
    }

    /// [Ui::scroll_bar] with an explicit slider length.
    pub(crate) fn scroll_bar_with(&mut self, bounds: Rectangle, value: i32, min: i32, max: i32, slider_size: u32) -> i32 {
        let control = ControlKind::ScrollBar;
        let mut state = self.gui.state();
        let vertical = bounds.width <= bounds.height;

        let border = self.border_width(control) as f32;
        let scroll_padding = self.gui.style(control, ScrollBarProperty::ScrollPadding) as f32;
        let slider_padding = self.gui.style(control, ScrollBarProperty::ScrollSliderPadding) as f32;
        let arrows_visible = self.gui.style(control, ScrollBarProperty::ArrowsVisible) != 0;
        let speed = self.gui.style(control, ScrollBarProperty::ScrollSpeed).max(1) as i64;

        let spinner = if !arrows_visible {
            0.0
        } else if vertical {
            bounds.width - 2.0 * border
        } else {
            bounds.height - 2.0 * border
        };

        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut value = value.clamp(min, max);
        let range = i64::from(max) - i64::from(min);
        let ratio = if range != 0 {
            (i64::from(value) - i64::from(min)) as f32 / range as f32
        } else {
            0.0
        };
        let mut slider_size = slider_size as f32;

        let arrow_start = Rectangle::new(bounds.x + border, bounds.y + border, spinner, spinner);
        let (arrow_end, track, slider) = if vertical {
            let arrow_end = Rectangle::new(bounds.x + border, bounds.y + bounds.height - spinner - border, spinner, spinner);
            let track = Rectangle::new(
                bounds.x + border + scroll_padding,
                arrow_start.y + arrow_start.height,
                bounds.width - 2.0 * (border + scroll_padding),
                bounds.height - arrow_start.height - arrow_end.height - 2.0 * border,
            );
            if slider_size >= track.height {
                slider_size = track.height - 2.0;
            }
            let slider = Rectangle::new(
                bounds.x + border + slider_padding,
                track.y + (ratio * (track.height - slider_size)) as i32 as f32,
                bounds.width - 2.0 * (border + slider_padding),
                slider_size,
            );
            (arrow_end, track, slider)
        } else {
            let arrow_end = Rectangle::new(bounds.x + bounds.width - spinner - border, bounds.y + border, spinner, spinner);
            let track = Rectangle::new(
                arrow_start.x + arrow_start.width,
                bounds.y + border + scroll_padding,
                bounds.width - arrow_start.width - arrow_end.width - 2.0 * border,
                bounds.height - 2.0 * (border + scroll_padding),
            );
            if slider_size >= track.width {
                slider_size = track.width - 2.0;
            }
            let slider = Rectangle::new(
                track.x + (ratio * (track.width - slider_size)) as i32 as f32,
                bounds.y + border + slider_padding,
                slider_size,
                bounds.height - 2.0 * (border + slider_padding),
            );
            (arrow_end, track, slider)
        };

        if self.hovered(bounds) {
            let pointer = self.input.mouse_position();
            state = ControlState::Focused;

            let wheel = self.input.mouse_wheel_move() as i32;
            value = value.saturating_add(wheel);

            if self.primary_pressed() {
                if arrow_start.contains(pointer) {
                    value = within(i64::from(value) - range / speed, min, max);
                } else if arrow_end.contains(pointer) {
                    value = within(i64::from(value) + range / speed, min, max);
                }
                state = ControlState::Pressed;
            } else if self.primary_down() {
                if vertical {
                    let area = Rectangle::new(arrow_start.x, arrow_start.y + arrow_start.height, bounds.width - 2.0 * border, track.height);
                    if area.contains(pointer) && area.height > slider.height {
                        let offset = pointer.y - area.y - slider.height / 2.0;
                        let step = (offset * range as f32 / (area.height - slider.height)) as i64;
                        value = within(i64::from(min) + step, min, max);
                    }
                } else {
                    let area = Rectangle::new(arrow_start.x + arrow_start.width, arrow_start.y, track.width, bounds.height - 2.0 * border);
                    if area.contains(pointer) && area.width > slider.width {
                        let offset = pointer.x - area.x - slider.width / 2.0;
                        let step = (offset * range as f32 / (area.width - slider.width)) as i64;
                        value = within(i64::from(min) + step, min, max);
                    }
                }
            }

            value = value.clamp(min, max);
        }

        let outline = self.state_color(ControlKind::ListView, ColorRole::Border, state);
        let background = self.color(ControlKind::Default, Property::BorderColorDisabled);
        self.rectangle(bounds, border as u32, outline, background);

        let track_color = self.color(ControlKind::Button, Property::BaseColorNormal);
        self.fill(track, track_color);
        let slider_color = self.state_color(ControlKind::Slider, ColorRole::Border, state);
        self.fill(slider, slider_color);

        if arrows_visible {
            let tint = self.state_color(control, ColorRole::Text, state);
            let (start, end) = if vertical { ("^", "v") } else { ("<", ">") };
            self.text(start, arrow_start, TextAlignment::Center, tint);
            self.text(end, arrow_end, TextAlignment::Center, tint);
        }

        value
    }

    /// A bordered area showing a window onto `content`, with scroll bars
    /// where the content does not fit.
    ///
    /// `scroll` is the current offset of the content. The returned offset lies
    /// in the legal range for this content and bounds, whatever was passed in.
    /// While the pointer is over the panel the arrow keys and the wheel
    /// scroll it; with a shift key held the wheel scrolls horizontally.
    pub fn scroll_panel(&mut self, bounds: Rectangle, content: Rectangle, scroll: Vector2<f32>) -> ScrollPanel {
        let mut state = self.gui.state();
        let border = self.border_width(ControlKind::Default) as f32;
        let side = ScrollBarSide::from_value(self.gui.style(ControlKind::ListView, ListViewProperty::ScrollBarSide));
        let bar_width = self.gui.style(ControlKind::ListView, ListViewProperty::ScrollBarWidth) as f32;
        let mut scroll = scroll;

        let mut horizontal = content.width > bounds.width - 2.0 * border;
        let mut vertical = content.height > bounds.height - 2.0 * border;
        // One bar narrows the room left for the other.
        if !horizontal {
            horizontal = vertical && content.width > bounds.width - 2.0 * border - bar_width;
        }
        if !vertical {
            vertical = horizontal && content.height > bounds.height - 2.0 * border - bar_width;
        }

        let horizontal_width = if horizontal { bar_width } else { 0.0 };
        let vertical_width = if vertical { bar_width } else { 0.0 };
        let left = side == ScrollBarSide::Left;

        let horizontal_bar = Rectangle::new(
            if left { bounds.x + vertical_width } else { bounds.x } + border,
            bounds.y + bounds.height - horizontal_width - border,
            bounds.width - vertical_width - 2.0 * border,
            horizontal_width,
        );
        let vertical_bar = Rectangle::new(
            if left {
                bounds.x + border
            } else {
                bounds.x + bounds.width - vertical_width - border
            },
            bounds.y + border,
            vertical_width,
            bounds.height - horizontal_width - 2.0 * border,
        );

        let mut view = Rectangle::new(
            if left { bounds.x + vertical_width } else { bounds.x } + border,
            bounds.y + border,
            bounds.width - 2.0 * border - vertical_width,
            bounds.height - 2.0 * border - horizontal_width,
        );
        view.width = view.width.min(content.width);
        view.height = view.height.min(content.height);

        let side_offset = if left { -vertical_width } else { 0.0 };
        let horizontal_min = side_offset - border;
        let horizontal_max = if horizontal {
            content.width - bounds.width + vertical_width + border + side_offset
        } else {
            -border
        };
        let vertical_min = -border;
        let vertical_max = if vertical {
            content.height - bounds.height + horizontal_width + border
        } else {
            -border
        };

        if self.hovered(bounds) {
            state = if self.primary_down() {
                ControlState::Pressed
            } else {
                ControlState::Focused
            };

            let speed = self.gui.style(ControlKind::ScrollBar, ScrollBarProperty::ScrollSpeed) as f32;
            if horizontal {
                if self.input.is_key_down(KeyCode::ArrowRight) {
                    scroll.x -= speed;
                }
                if self.input.is_key_down(KeyCode::ArrowLeft) {
                    scroll.x += speed;
                }
            }
            if vertical {
                if self.input.is_key_down(KeyCode::ArrowDown) {
                    scroll.y -= speed;
                }
                if self.input.is_key_down(KeyCode::ArrowUp) {
                    scroll.y += speed;
                }
            }

            let wheel = self.input.mouse_wheel_move();
            let shift = self.input.is_key_down(KeyCode::ShiftLeft) || self.input.is_key_down(KeyCode::ShiftRight);
            if horizontal && shift {
                scroll.x += wheel * WHEEL_STEP;
            } else {
                scroll.y += wheel * WHEEL_STEP;
            }
        }

        scroll.x = clamp_range(scroll.x, -horizontal_max, -horizontal_min);
        scroll.y = clamp_range(scroll.y, -vertical_max, -vertical_min);

        let background = self.color(ControlKind::Default, DefaultProperty::BackgroundColor);
        self.fill(bounds, background);

        if horizontal {
            let visible = bounds.width - 2.0 * border - vertical_width;
            let length = visible / content.width.floor() * (bounds.width.floor() - 2.0 * border - vertical_width);
            let value = self.scroll_bar_with(
                horizontal_bar,
                -scroll.x as i32,
                horizontal_min as i32,
                horizontal_max as i32,
                length as u32,
            );
            scroll.x = -(value as f32);
        }
        if vertical {
            let visible = bounds.height - 2.0 * border - horizontal_width;
            let length = visible / content.height.floor() * (bounds.height.floor() - 2.0 * border - horizontal_width);
            let value = self.scroll_bar_with(
                vertical_bar,
                -scroll.y as i32,
                vertical_min as i32,
                vertical_max as i32,
                length as u32,
            );
            scroll.y = -(value as f32);
        }

        // Integer scroll bar ranges can step past fractional limits.
        scroll.x = clamp_range(scroll.x, -horizontal_max, -horizontal_min);
        scroll.y = clamp_range(scroll.y, -vertical_max, -vertical_min);

        if horizontal && vertical {
            let x = if left {
                bounds.x + border + 2.0
            } else {
                horizontal_bar.x + horizontal_bar.width + 2.0
            };
            let corner = Rectangle::new(
                x,
                vertical_bar.y + vertical_bar.height + 2.0,
                horizontal_width - 4.0,
                vertical_width - 4.0,
            );
            let corner_color = self.state_color(ControlKind::ListView, ColorRole::Text, state);
            self.fill(corner, corner_color);
        }

        let outline = self.state_color(ControlKind::ListView, ColorRole::Border, state);
        self.rectangle(bounds, border as u32, outline, Color::TRANSPARENT);

        ScrollPanel { view, scroll }
    }
}

#[cfg(test)]
mod tests {
    use rgui_core::context::GuiContext;
    use rgui_core::input::InputState;
    use rgui_core::render::DrawList;
    use rgui_core::window::MouseButton;

    use super::*;

    #[test]
    fn wheel_moves_the_bar_value() {
        let gui = GuiContext::new();
        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(5.0, 50.0));
        input.scroll_wheel(3.0);
        let mut list = DrawList::new();

        let value = Ui::new(&gui, &mut list, &input).scroll_bar(Rectangle::new(0.0, 0.0, 10.0, 100.0), 10, 0, 100);
        assert_eq!(value, 13);
    }

    #[test]
    fn value_is_clamped_without_input() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();
        let mut ui = Ui::new(&gui, &mut list, &input);

        assert_eq!(ui.scroll_bar(Rectangle::new(0.0, 0.0, 100.0, 10.0), 500, 0, 100), 100);
        assert_eq!(ui.scroll_bar(Rectangle::new(0.0, 0.0, 100.0, 10.0), -5, 0, 100), 0);
    }

    #[test]
    fn dragging_follows_the_pointer() {
        let gui = GuiContext::new();
        let mut input = InputState::new();
        input.press_mouse_button(MouseButton::Left);
        input.begin_frame();
        // Horizontal bar, no border, track 100 wide, slider 16 wide.
        input.set_mouse_position(Vector2::new(58.0, 5.0));
        let mut list = DrawList::new();

        let value = Ui::new(&gui, &mut list, &input).scroll_bar(Rectangle::new(0.0, 0.0, 100.0, 10.0), 0, 0, 84);
        assert_eq!(value, 50);
    }

    #[test]
    fn arrows_step_by_range_over_speed() {
        let mut gui = GuiContext::new();
        gui.set_style(ControlKind::ScrollBar, ScrollBarProperty::ArrowsVisible, 1);
        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(5.0, 95.0));
        input.press_mouse_button(MouseButton::Left);
        let mut list = DrawList::new();

        let value = Ui::new(&gui, &mut list, &input).scroll_bar(Rectangle::new(0.0, 0.0, 10.0, 100.0), 0, 0, 100);
        assert_eq!(value, 10);
        assert_eq!(list.texts().map(|(text, _, _)| text).collect::<Vec<_>>(), vec!["^", "v"]);
    }

    #[test]
    fn full_i32_range_does_not_overflow() {
        let mut gui = GuiContext::new();
        gui.set_style(ControlKind::ScrollBar, ScrollBarProperty::ArrowsVisible, 1);
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 100.0);

        let idle = InputState::new();
        let mut list = DrawList::new();
        let value = Ui::new(&gui, &mut list, &idle).scroll_bar(bounds, 0, i32::MIN, i32::MAX);
        assert_eq!(value, 0);

        // One arrow step is a tenth of the full u32 span.
        let mut arrow = InputState::new();
        arrow.set_mouse_position(Vector2::new(5.0, 95.0));
        arrow.press_mouse_button(MouseButton::Left);
        let value = Ui::new(&gui, &mut list, &arrow).scroll_bar(bounds, 0, i32::MIN, i32::MAX);
        assert_eq!(value, 429_496_729);

        let value = Ui::new(&gui, &mut list, &arrow).scroll_bar(bounds, i32::MAX - 1, i32::MIN, i32::MAX);
        assert_eq!(value, i32::MAX);

        let mut drag = InputState::new();
        drag.press_mouse_button(MouseButton::Left);
        drag.begin_frame();
        drag.set_mouse_position(Vector2::new(5.0, 89.0));
        let value = Ui::new(&gui, &mut list, &drag).scroll_bar(bounds, i32::MIN, i32::MIN, i32::MAX);
        assert!(value > 0);
    }

    #[test]
    fn panel_background_is_faded() {
        let mut gui = GuiContext::new();
        gui.fade(0.5);
        let input = InputState::new();
        let mut list = DrawList::new();

        Ui::new(&gui, &mut list, &input).scroll_panel(
            Rectangle::new(0.0, 0.0, 100.0, 100.0),
            Rectangle::new(0.0, 0.0, 50.0, 50.0),
            Vector2::new(0.0, 0.0),
        );
        let (rect, color) = list.rects().next().unwrap();
        assert_eq!(rect, Rectangle::new(0.0, 0.0, 100.0, 100.0));
        assert!((color.components[3] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn panel_without_overflow_has_no_bars() {
        let gui = GuiContext::new();
        let input = InputState::new();
        let mut list = DrawList::new();

        let panel = Ui::new(&gui, &mut list, &input).scroll_panel(
            Rectangle::new(0.0, 0.0, 200.0, 100.0),
            Rectangle::new(0.0, 0.0, 150.0, 50.0),
            Vector2::new(-30.0, -30.0),
        );
        assert_eq!(panel.view, Rectangle::new(1.0, 1.0, 150.0, 50.0));
        // Nothing to scroll, the offset settles on the border.
        assert_eq!(panel.scroll, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn panel_wheel_scrolls_content() {
        let gui = GuiContext::new();
        let mut input = InputState::new();
        input.set_mouse_position(Vector2::new(50.0, 50.0));
        input.scroll_wheel(-1.0);
        let mut list = DrawList::new();

        let panel = Ui::new(&gui, &mut list, &input).scroll_panel(
            Rectangle::new(0.0, 0.0, 200.0, 100.0),
            Rectangle::new(0.0, 0.0, 150.0, 400.0),
            Vector2::new(0.0, 0.0),
        );
        assert_eq!(panel.scroll.y, -20.0);
        // Vertical bar of width 10 on the right.
        assert_eq!(panel.view, Rectangle::new(1.0, 1.0, 150.0, 98.0));
    }
}
