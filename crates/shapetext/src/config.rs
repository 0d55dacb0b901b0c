//! Extraction options.
//!
//! Options can be built in code or loaded from YAML. Every field has a
//! default, so an empty document is valid:
//!
//! ```rust
//! use shapetext::{ColorFormat, ExtractOptions};
//!
//! let options = ExtractOptions::from_yaml("color_format: hex\n").unwrap();
//! assert_eq!(options.color_format, ColorFormat::Hex);
//! assert_eq!(options.paragraph_separator, "\n");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeTextError};

/// How literal colors are spelled in emitted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `RGB(255, 128, 64)`
    #[default]
    Rgb,
    /// `FF8040`
    Hex,
}

/// Options controlling merging and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Inserted between the texts of same-styled runs from adjacent paragraphs.
    pub paragraph_separator: String,
    /// Spelling of literal colors.
    pub color_format: ColorFormat,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            paragraph_separator: "\n".to_string(),
            color_format: ColorFormat::Rgb,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color_format(mut self, format: ColorFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn with_paragraph_separator(mut self, separator: impl Into<String>) -> Self {
        self.paragraph_separator = separator.into();
        self
    }

    /// Parses options from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShapeTextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}
