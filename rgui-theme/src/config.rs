//! # Style Configuration
//!
//! Load style overrides from files and apply them to a [StyleTable].
//!
//! ## Formats
//!
//! ### TOML / JSON
//!
//! One section per control, one entry per property. Values are integers, color
//! strings (`"#RRGGBB"`, `"#RRGGBBAA"`, `"0xRRGGBBAA"`) or alignment keywords.
//!
//! ```toml
//! [default]
//! border_width = 2
//! text_color_normal = "#202020"
//! text_size = 12
//!
//! [button]
//! text_alignment = "left"
//!
//! [list_view]
//! scroll_bar_side = "left"
//! ```
//!
//! ### raygui text styles (`.rgs`)
//!
//! Lines of the form `p <control id> <property id> <value>`. Comment lines start
//! with `#`, font lines (`f ...`) are skipped because fonts are owned by the
//! host.
//!
//! ## Ordering
//!
//! The `default` section is always applied first, whatever its position in the
//! file, so that its propagation to every control never clobbers the per-control
//! overrides written in the same file.
//!
//! ## Environment
//!
//! [StyleConfig::from_env] loads the file named by `RGUI_STYLE`, if set.
//!
//! ```rust
//! use rgui_theme::config::StyleConfig;
//! use rgui_theme::control::ControlKind;
//! use rgui_theme::properties::Property;
//! use rgui_theme::style::StyleTable;
//!
//! let config = StyleConfig::from_toml(r#"
//! [button]
//! border_width = 4
//!
//! [default]
//! border_width = 3
//! "#).unwrap();
//!
//! let mut style = StyleTable::new();
//! config.apply(&mut style).unwrap();
//! assert_eq!(style.get(ControlKind::Label, Property::BorderWidth), 3);
//! assert_eq!(style.get(ControlKind::Button, Property::BorderWidth), 4);
//! ```

use std::env;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::control::ControlKind;
use crate::error::{StyleError, StyleResult};
use crate::properties::{ListViewProperty, Property};
use crate::state::{ScrollBarSide, TextAlignment};
use crate::style::StyleTable;

/// Environment variable naming a style file to load.
pub const STYLE_ENV: &str = "RGUI_STYLE";

/// A value as written in a style file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A plain number.
    Int(u32),
    /// A color string, hex number, decimal string or keyword.
    Text(String),
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A set of style overrides, keyed by control name then property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    sections: IndexMap<String, IndexMap<String, StyleValue>>,
}

impl StyleConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return the configuration.
    ///
    /// ```rust
    /// use rgui_theme::config::StyleConfig;
    ///
    /// let config = StyleConfig::new()
    ///     .with_value("default", "text_size", 16)
    ///     .with_value("button", "base_color_normal", "#ffcc00");
    /// assert_eq!(config.len(), 2);
    /// ```
    pub fn with_value(
        mut self,
        control: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.insert(control, property, value);
        self
    }

    /// Add or replace an entry.
    pub fn insert(
        &mut self,
        control: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) {
        self.sections
            .entry(control.into())
            .or_default()
            .insert(property.into(), value.into());
    }

    /// Number of entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(IndexMap::len).sum()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load a configuration file. The format is picked from the extension:
    /// `.toml`, `.json` or `.rgs`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StyleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StyleError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let origin = path.display().to_string();
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| StyleError::parse(&origin, e)),
            Some("json") => serde_json::from_str(&content).map_err(|e| StyleError::parse(&origin, e)),
            Some("rgs") => Self::parse_rgs(&content, &origin),
            _ => Err(StyleError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }?;

        log::debug!("Loaded {} style entries from {}", config.len(), origin);
        Ok(config)
    }

    /// Parse TOML content.
    pub fn from_toml(content: &str) -> StyleResult<Self> {
        toml::from_str(content).map_err(|e| StyleError::parse("toml", e))
    }

    /// Parse JSON content.
    pub fn from_json(content: &str) -> StyleResult<Self> {
        serde_json::from_str(content).map_err(|e| StyleError::parse("json", e))
    }

    /// Parse raygui text style content.
    pub fn from_rgs(content: &str) -> StyleResult<Self> {
        Self::parse_rgs(content, "rgs")
    }

    /// Load the file named by the `RGUI_STYLE` environment variable.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn from_env() -> StyleResult<Option<Self>> {
        match env::var(STYLE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()).map(Some),
            _ => Ok(None),
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> StyleResult<String> {
        toml::to_string(self).map_err(|e| StyleError::parse("toml", e))
    }

    /// Resolve every entry to a typed `(control, property, value)` triple.
    ///
    /// Entries of the `default` section come first, the rest keep file order.
    pub fn resolve(&self) -> StyleResult<Vec<(ControlKind, Property, u32)>> {
        let mut defaults = Vec::new();
        let mut overrides = Vec::new();

        for (control_name, entries) in &self.sections {
            let control = ControlKind::from_name(control_name)
                .ok_or_else(|| StyleError::unknown_control(control_name.as_str()))?;

            for (property_name, value) in entries {
                let property = Property::from_name(control, property_name)
                    .ok_or_else(|| StyleError::unknown_property(control, property_name.as_str()))?;
                let value = resolve_value(control, property, value).ok_or_else(|| {
                    StyleError::InvalidValue {
                        control,
                        property: property_name.clone(),
                        value: match value {
                            StyleValue::Int(v) => v.to_string(),
                            StyleValue::Text(text) => text.clone(),
                        },
                    }
                })?;

                if control == ControlKind::Default {
                    defaults.push((control, property, value));
                } else {
                    overrides.push((control, property, value));
                }
            }
        }

        defaults.extend(overrides);
        Ok(defaults)
    }

    /// Apply every entry to `table`, returning how many were written.
    ///
    /// Nothing is written if any entry fails to resolve.
    pub fn apply(&self, table: &mut StyleTable) -> StyleResult<usize> {
        let resolved = self.resolve()?;
        for (control, property, value) in &resolved {
            table.set(*control, *property, *value);
        }
        log::debug!("Applied {} style entries", resolved.len());
        Ok(resolved.len())
    }

    fn parse_rgs(content: &str, origin: &str) -> StyleResult<Self> {
        let mut config = Self::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("p") => {
                    let mut field = |what: &str| {
                        tokens.next().ok_or_else(|| {
                            StyleError::parse(origin, format!("line {}: missing {what}", number + 1))
                        })
                    };
                    let control_id = field("control id")?;
                    let property_id = field("property id")?;
                    let value = field("value")?;

                    let control = control_id
                        .parse::<usize>()
                        .ok()
                        .and_then(ControlKind::from_id)
                        .ok_or_else(|| {
                            StyleError::parse(origin, format!("line {}: bad control id '{control_id}'", number + 1))
                        })?;
                    let property = property_id
                        .parse::<usize>()
                        .ok()
                        .and_then(Property::from_id)
                        .ok_or_else(|| {
                            StyleError::parse(origin, format!("line {}: bad property id '{property_id}'", number + 1))
                        })?;
                    let value = match value.parse::<u32>() {
                        Ok(number) => StyleValue::Int(number),
                        Err(_) => StyleValue::Text(value.to_string()),
                    };

                    config.insert(control.name(), property.name(control), value);
                },
                Some("f") => log::debug!("Skipping font line {} of {}", number + 1, origin),
                Some(other) => log::debug!("Skipping unknown '{}' line {} of {}", other, number + 1, origin),
                None => {},
            }
        }

        Ok(config)
    }
}

fn resolve_value(control: ControlKind, property: Property, value: &StyleValue) -> Option<u32> {
    let text = match value {
        StyleValue::Int(value) => return Some(*value),
        StyleValue::Text(text) => text.trim(),
    };

    if text.starts_with('#') {
        return color::parse_hex(text).ok();
    }
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Ok(number) = text.parse::<u32>() {
        return Some(number);
    }

    if property == Property::TextAlignment {
        TextAlignment::from_keyword(text).map(TextAlignment::value)
    } else if control == ControlKind::ListView && property == ListViewProperty::ScrollBarSide.into() {
        ScrollBarSide::from_keyword(text).map(ScrollBarSide::value)
    } else {
        None
    }
}
