//! # Style Error Types
//!
//! The style table itself never fails. Errors only come from loading style
//! files, where names and values written by people have to be checked.

use std::path::PathBuf;
use thiserror::Error;

use crate::control::ControlKind;

/// Errors that can occur while loading or applying a style configuration.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Style file was not found.
    #[error("Style file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file extension does not name a known style format.
    #[error("Unsupported style file format: {path:?} (use .toml, .json or .rgs)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Error parsing style content.
    #[error("Failed to parse style {origin}: {details}")]
    Parse {
        /// Where the content came from, a path or the format name.
        origin: String,
        /// Details about the parse error.
        details: String,
    },

    /// A section names a control that does not exist.
    #[error("Unknown control '{name}'")]
    UnknownControl {
        /// The name as written.
        name: String,
    },

    /// A control has no property with the given name.
    #[error("Control {control:?} has no property '{name}'")]
    UnknownProperty {
        /// The control of the section.
        control: ControlKind,
        /// The name as written.
        name: String,
    },

    /// A value could not be turned into a style value.
    #[error("Invalid value '{value}' for {control:?}.{property}")]
    InvalidValue {
        /// The control of the section.
        control: ControlKind,
        /// The property name.
        property: String,
        /// The value as written.
        value: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error.
    pub fn parse(origin: impl Into<String>, details: impl ToString) -> Self {
        Self::Parse {
            origin: origin.into(),
            details: details.to_string(),
        }
    }

    /// Create an unknown control error.
    pub fn unknown_control(name: impl Into<String>) -> Self {
        Self::UnknownControl { name: name.into() }
    }

    /// Create an unknown property error.
    pub fn unknown_property(control: ControlKind, name: impl Into<String>) -> Self {
        Self::UnknownProperty {
            control,
            name: name.into(),
        }
    }
}
