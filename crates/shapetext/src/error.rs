//! Error types for option loading and value-tree parsing.
//!
//! Style resolution and run merging never fail. Errors only arise when
//! reading something back in: an options file, a palette, or a value tree
//! that does not have the shape this crate emits.

use std::path::PathBuf;

use shapetext_color::PaletteError;
use thiserror::Error;

/// Errors returned by shapetext.
#[derive(Debug, Error)]
pub enum ShapeTextError {
    /// A required field is missing from an object.
    #[error("{object} is missing required field '{field}'")]
    MissingField {
        object: &'static str,
        field: &'static str,
    },

    /// A field is present but has the wrong type or an unknown value.
    #[error("field '{field}' of {object} must be {expected}")]
    InvalidField {
        object: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// A value that should be an object is something else.
    #[error("expected {what} to be a JSON object")]
    NotAnObject { what: &'static str },

    /// JSON text could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Options YAML could not be parsed.
    #[error("invalid options: {0}")]
    Options(#[from] serde_yaml::Error),

    /// Theme palette could not be loaded.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for shapetext operations.
pub type Result<T> = std::result::Result<T, ShapeTextError>;
