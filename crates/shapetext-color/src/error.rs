//! Error types for palette loading.

use thiserror::Error;

/// Errors that can occur while loading a theme palette from text.
///
/// Resolution itself never fails; these only cover malformed palette sources.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The YAML palette document could not be parsed.
    #[error("invalid palette YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The theme part is not well-formed XML.
    #[error("invalid theme XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// The theme part has no `<a:clrScheme>` element.
    #[error("theme XML has no color scheme")]
    MissingColorScheme,
}

/// Result type for palette loading.
pub type Result<T> = std::result::Result<T, PaletteError>;
