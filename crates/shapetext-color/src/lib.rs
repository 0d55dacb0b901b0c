//! # shapetext-color - Theme-aware color resolution
//!
//! Presentation documents express most colors as a reference into a twelve
//! slot theme palette plus a chain of modifiers. This crate turns such
//! references into literal RGB values using the same arithmetic the
//! presentation renderer uses, down to its rounding of ties.
//!
//! ## Core Concepts
//!
//! - [`Rgb`]: A literal 8-bit color, with `RGB(r, g, b)` and hex text forms
//! - [`SchemeSlot`] / [`ThemePalette`]: The twelve named theme colors
//! - [`ColorTransforms`] / [`apply_transforms`]: tint, shade, luminance
//! - [`ColorRef`]: A raw reference as found in a document
//! - [`ColorValue`]: A resolved color that remembers where it came from
//!
//! ## Quick Start
//!
//! ```rust
//! use shapetext_color::{ColorRef, ColorTransforms, ThemePalette};
//!
//! let palette = ThemePalette::office();
//! let accent_darker = ColorRef::Scheme {
//!     name: "accent1".into(),
//!     transforms: ColorTransforms::new().with_lum_mod(75000),
//! };
//!
//! let value = accent_darker.resolve(Some(&palette)).unwrap();
//! assert_eq!(value.rgb().to_hex(), "2F5597");
//! assert_eq!(value.slot().map(|s| s.as_str()), Some("accent1"));
//! ```

mod error;
pub mod hsl;
pub mod palette;
mod reference;
pub mod rgb;
pub mod transform;
mod value;

pub use error::{PaletteError, Result};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use palette::{default_slot_color, resolve_slot, SchemeSlot, ThemePalette};
pub use reference::ColorRef;
pub use rgb::{format_rgb, parse_rgb, parse_rgb_to_hex, Rgb};
pub use transform::{apply_transforms, ColorTransforms, TRANSFORM_SCALE};
pub use value::{ColorKind, ColorSource, ColorValue};
