//! Visual effects: shadow, glow, reflection and soft edges.

use shapetext_color::ColorValue;

/// Whether a shadow falls outside or inside the glyph or shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowKind {
    #[default]
    Outer,
    Inner,
}

impl ShadowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowKind::Outer => "outer",
            ShadowKind::Inner => "inner",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "outer" => Some(ShadowKind::Outer),
            "inner" => Some(ShadowKind::Inner),
            _ => None,
        }
    }
}

/// A drop shadow. Lengths are in points, the direction in degrees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shadow {
    pub kind: ShadowKind,
    pub color: Option<ColorValue>,
    pub blur_radius: f64,
    pub distance: f64,
    pub direction: f64,
    pub transparency: f64,
}

/// A soft colored halo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glow {
    pub color: Option<ColorValue>,
    pub radius: f64,
    pub transparency: f64,
}

/// A mirrored copy below the content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reflection {
    pub blur_radius: f64,
    pub distance: f64,
    pub direction: f64,
    pub start_transparency: f64,
    pub end_transparency: f64,
    /// Fraction of the content height that is reflected.
    pub size: f64,
}

/// The effect list of a run or shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Effects {
    pub shadow: Option<Shadow>,
    pub glow: Option<Glow>,
    pub reflection: Option<Reflection>,
    /// Soft edge radius in points.
    pub soft_edge_radius: Option<f64>,
}

impl Effects {
    /// True when at least one effect is present.
    pub fn has_effects(&self) -> bool {
        self.shadow.is_some()
            || self.glow.is_some()
            || self.reflection.is_some()
            || self.soft_edge_radius.is_some()
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_glow(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }
}
