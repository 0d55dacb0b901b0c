//! Raw color references as found in a document's style attributes.

use crate::palette::{SchemeSlot, ThemePalette};
use crate::rgb::Rgb;
use crate::transform::ColorTransforms;
use crate::value::ColorValue;

/// An unresolved color reference.
///
/// This is what a traversal hands over before any palette lookup has
/// happened: a literal hex attribute, an already-decoded literal, or a slot
/// name with its modifier chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorRef {
    /// `<a:srgbClr val="...">`
    Srgb(String),
    /// A literal decoded by the caller.
    Rgb(Rgb),
    /// `<a:schemeClr val="...">` with its child modifiers.
    Scheme {
        name: String,
        transforms: ColorTransforms,
    },
    /// `<a:noFill/>` and friends.
    Transparent,
}

impl ColorRef {
    /// Shorthand for a scheme reference without modifiers.
    pub fn scheme(name: impl Into<String>) -> Self {
        ColorRef::Scheme {
            name: name.into(),
            transforms: ColorTransforms::new(),
        }
    }

    /// Resolves the reference to a [`ColorValue`].
    ///
    /// Returns `None` for malformed hex and unknown slot names; callers treat
    /// that as "no color".
    pub fn resolve(&self, palette: Option<&ThemePalette>) -> Option<ColorValue> {
        match self {
            ColorRef::Srgb(hex) => {
                let value = ColorValue::from_hex(hex);
                if value.is_none() {
                    log::debug!("dropping malformed literal color '{}'", hex);
                }
                value
            }
            ColorRef::Rgb(rgb) => Some(ColorValue::literal(*rgb)),
            ColorRef::Scheme { name, transforms } => match SchemeSlot::parse(name) {
                Some(slot) => Some(ColorValue::theme(slot, *transforms, palette)),
                None => {
                    log::debug!("dropping reference to unknown palette slot '{}'", name);
                    None
                }
            },
            ColorRef::Transparent => Some(ColorValue::transparent()),
        }
    }
}
