//! # GUI Context
//!
//! [GuiContext] owns the style table and the global toggles. Widgets borrow it
//! for the duration of a frame; setup calls mutate it between frames.
//!
//! ```rust
//! use rgui_core::context::GuiContext;
//! use rgui_theme::control::ControlKind;
//! use rgui_theme::properties::Property;
//! use rgui_theme::state::ControlState;
//!
//! let mut gui = GuiContext::new();
//! gui.disable();
//! assert_eq!(gui.state(), ControlState::Disabled);
//! gui.enable();
//!
//! gui.set_style(ControlKind::Default, Property::BorderWidth, 3);
//! assert_eq!(gui.style(ControlKind::Button, Property::BorderWidth), 3);
//! ```

use rgui_theme::config::StyleConfig;
use rgui_theme::control::ControlKind;
use rgui_theme::error::StyleResult;
use rgui_theme::font::Font;
use rgui_theme::globals::Globals;
use rgui_theme::properties::{DefaultProperty, Property};
use rgui_theme::state::ControlState;
use rgui_theme::style::StyleTable;
use vello::peniko::Color;

/// The style table plus global toggles shared by every widget call.
#[derive(Debug, Clone, Default)]
pub struct GuiContext {
    style: StyleTable,
    globals: Globals,
}

impl GuiContext {
    /// Create a context with the default style, enabled and unlocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context around an existing style table.
    pub fn with_style(style: StyleTable) -> Self {
        Self {
            style,
            globals: Globals::default(),
        }
    }

    /// Enable every control.
    pub fn enable(&mut self) {
        self.globals.state = ControlState::Normal;
    }

    /// Disable every control.
    pub fn disable(&mut self) {
        self.globals.state = ControlState::Disabled;
    }

    /// Stop processing input. Controls are still drawn.
    pub fn lock(&mut self) {
        self.globals.locked = true;
    }

    /// Resume processing input.
    pub fn unlock(&mut self) {
        self.globals.locked = false;
    }

    /// Whether input is locked.
    pub fn is_locked(&self) -> bool {
        self.globals.locked
    }

    /// Fade every control by `alpha`, clamped to `[0, 1]`.
    pub fn fade(&mut self, alpha: f32) {
        self.globals.set_alpha(alpha);
    }

    /// The current fade.
    pub fn alpha(&self) -> f32 {
        self.globals.alpha()
    }

    /// Set the global state every widget starts from.
    pub fn set_state(&mut self, state: ControlState) {
        self.globals.state = state;
    }

    /// The global state.
    pub fn state(&self) -> ControlState {
        self.globals.state
    }

    /// Use `font` for all text and adopt its base size as the text size.
    ///
    /// Fonts that are not loaded are ignored.
    pub fn set_font(&mut self, font: Font) {
        if !font.is_loaded() {
            log::warn!("Ignoring font {} because it is not loaded", font.id);
            return;
        }

        // Populate first so the lazy load does not overwrite the text size.
        if !self.style.is_loaded() {
            self.style.load_defaults();
        }

        self.globals.font = Some(font);
        self.style
            .set(ControlKind::Default, DefaultProperty::TextSize, font.base_size);
    }

    /// The active font, if one was set.
    pub fn font(&self) -> Option<Font> {
        self.globals.font
    }

    /// Write a style value. See [StyleTable::set].
    pub fn set_style(&mut self, control: ControlKind, property: impl Into<Property>, value: u32) {
        self.style.set(control, property, value);
    }

    /// Read a style value.
    pub fn style(&self, control: ControlKind, property: impl Into<Property>) -> u32 {
        self.style.get(control, property)
    }

    /// Read a style value as a color.
    pub fn style_color(&self, control: ControlKind, property: impl Into<Property>) -> Color {
        self.style.get_color(control, property)
    }

    /// Reload the built-in style.
    pub fn load_style_defaults(&mut self) {
        self.style.load_defaults();
    }

    /// The style table.
    pub fn style_table(&self) -> &StyleTable {
        &self.style
    }

    /// Mutable access to the style table.
    pub fn style_mut(&mut self) -> &mut StyleTable {
        &mut self.style
    }

    /// The global toggles.
    pub fn globals(&self) -> &Globals {
        &self.globals
    }

    /// Apply style overrides loaded from a file. Returns the number of values
    /// written.
    pub fn apply_style_config(&mut self, config: &StyleConfig) -> StyleResult<usize> {
        config.apply(&mut self.style)
    }

    /// Font size for all text, from the default control.
    pub fn text_size(&self) -> f32 {
        self.style.get(ControlKind::Default, DefaultProperty::TextSize) as f32
    }

    /// Glyph spacing for all text, from the default control.
    pub fn text_spacing(&self) -> f32 {
        self.style.get(ControlKind::Default, DefaultProperty::TextSpacing) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_and_state_toggles() {
        let mut gui = GuiContext::new();
        assert!(!gui.is_locked());
        gui.lock();
        assert!(gui.is_locked());
        gui.unlock();
        assert!(!gui.is_locked());

        gui.set_state(ControlState::Focused);
        assert_eq!(gui.state(), ControlState::Focused);
        gui.disable();
        gui.enable();
        assert_eq!(gui.state(), ControlState::Normal);
    }

    #[test]
    fn fade_is_clamped() {
        let mut gui = GuiContext::new();
        gui.fade(3.0);
        assert_eq!(gui.alpha(), 1.0);
        gui.fade(-1.0);
        assert_eq!(gui.alpha(), 0.0);
        gui.fade(0.4);
        assert_eq!(gui.alpha(), 0.4);
    }

    #[test]
    fn unloaded_font_is_ignored() {
        let mut gui = GuiContext::new();
        gui.set_font(Font::new(0, 24));
        assert_eq!(gui.font(), None);
        assert_eq!(gui.text_size(), 10.0);
    }

    #[test]
    fn loaded_font_sets_text_size() {
        let mut gui = GuiContext::new();
        gui.set_font(Font::new(7, 18));
        assert_eq!(gui.font(), Some(Font::new(7, 18)));
        assert_eq!(gui.text_size(), 18.0);
        // The lazy load happened before the size write and does not undo it.
        assert_eq!(gui.style(ControlKind::Default, DefaultProperty::TextSize), 18);
    }

    #[test]
    fn style_config_applies_to_the_table() {
        let mut gui = GuiContext::new();
        let config = StyleConfig::new().with_value("button", "border_width", 6);
        assert_eq!(gui.apply_style_config(&config).unwrap(), 1);
        assert_eq!(gui.style(ControlKind::Button, Property::BorderWidth), 6);
    }
}
