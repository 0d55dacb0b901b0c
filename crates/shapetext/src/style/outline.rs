//! Text and shape outlines.

use shapetext_color::ColorValue;

/// A line drawn around glyphs or shapes.
///
/// Line style tags (`dash_style`, `compound_type`, `cap_type`, `join_type`)
/// are the document's own vocabulary, kept as strings; `None` means the
/// document did not specify one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    /// Width in points.
    pub width: f64,
    pub color: Option<ColorValue>,
    pub dash_style: Option<String>,
    pub compound_type: Option<String>,
    pub cap_type: Option<String>,
    pub join_type: Option<String>,
    /// `0.0` (opaque) to `1.0` (invisible).
    pub transparency: f64,
}

impl Outline {
    /// A solid outline of the given width and color.
    pub fn new(width: f64, color: ColorValue) -> Self {
        Self {
            width,
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_dash_style(mut self, dash_style: impl Into<String>) -> Self {
        self.dash_style = Some(dash_style.into());
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }
}
