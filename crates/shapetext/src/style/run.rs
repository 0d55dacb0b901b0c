//! The complete formatting of one text run.

use shapetext_color::ColorValue;

use super::{Effects, Fill, Outline};

/// Vertical text position relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Superscript,
    Subscript,
}

impl Baseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Baseline::Superscript => "superscript",
            Baseline::Subscript => "subscript",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "superscript" => Some(Baseline::Superscript),
            "subscript" => Some(Baseline::Subscript),
            _ => None,
        }
    }
}

/// Everything that decides whether two runs look the same.
///
/// This is the comparison key used by run merging; see
/// [`styles_equivalent`](crate::styles_equivalent).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunStyle {
    pub font_name: Option<String>,
    /// Size in points.
    pub font_size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_color: Option<ColorValue>,
    pub fill: Option<Fill>,
    pub outline: Option<Outline>,
    pub effects: Option<Effects>,
    /// Extra spacing between characters, in points.
    pub character_spacing: Option<f64>,
    pub baseline: Option<Baseline>,
    pub highlight: Option<ColorValue>,
}

impl RunStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, name: impl Into<String>, size: f64) -> Self {
        self.font_name = Some(name.into());
        self.font_size = Some(size);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn with_color(mut self, color: ColorValue) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn with_character_spacing(mut self, spacing: f64) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_highlight(mut self, color: ColorValue) -> Self {
        self.highlight = Some(color);
        self
    }

    /// True when the style carries a fill that actually paints.
    pub fn has_fill(&self) -> bool {
        self.fill.as_ref().is_some_and(Fill::has_fill)
    }

    /// True when the style carries an outline.
    pub fn has_outline(&self) -> bool {
        self.outline.is_some()
    }

    /// True when the style carries at least one effect.
    pub fn has_effects(&self) -> bool {
        self.effects.as_ref().is_some_and(Effects::has_effects)
    }
}
