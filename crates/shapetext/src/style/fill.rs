//! Fills: solid, gradient and pattern.

use shapetext_color::ColorValue;

/// One color stop of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub position: f64,
    pub color: ColorValue,
}

impl GradientStop {
    pub fn new(position: f64, color: ColorValue) -> Self {
        Self { position, color }
    }
}

/// Shape of a path gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    Circle,
    Rect,
    Shape,
}

impl PathShape {
    pub fn as_str(self) -> &'static str {
        match self {
            PathShape::Circle => "circle",
            PathShape::Rect => "rect",
            PathShape::Shape => "shape",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "circle" => Some(PathShape::Circle),
            "rect" => Some(PathShape::Rect),
            "shape" => Some(PathShape::Shape),
            _ => None,
        }
    }
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Linear gradient; the angle is in degrees, `0.0..360.0`.
    Linear { angle: f64 },
    /// Radial-style gradient following a path.
    Path(PathShape),
}

/// A gradient with its stops kept sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Creates a gradient, sorting stops by position.
    ///
    /// Linear angles are normalized into `0.0..360.0`. The sort is stable, so
    /// stops sharing a position keep their input order.
    pub fn new(kind: GradientKind, mut stops: Vec<GradientStop>) -> Self {
        let kind = match kind {
            GradientKind::Linear { angle } => GradientKind::Linear {
                angle: normalize_angle(angle),
            },
            path => path,
        };
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { kind, stops }
    }

    pub fn linear(angle: f64, stops: Vec<GradientStop>) -> Self {
        Self::new(GradientKind::Linear { angle }, stops)
    }

    pub fn path(shape: PathShape, stops: Vec<GradientStop>) -> Self {
        Self::new(GradientKind::Path(shape), stops)
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Stops in ascending position order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// `"linear"` or `"path"`.
    pub fn gradient_type(&self) -> &'static str {
        match self.kind {
            GradientKind::Linear { .. } => "linear",
            GradientKind::Path(_) => "path",
        }
    }

    /// The angle, for linear gradients.
    pub fn angle(&self) -> Option<f64> {
        match self.kind {
            GradientKind::Linear { angle } => Some(angle),
            GradientKind::Path(_) => None,
        }
    }
}

fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// A two-color pattern fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Preset tag such as `"dkDnDiag"` or `"pct50"`.
    pub pattern_type: String,
    pub foreground: ColorValue,
    pub background: ColorValue,
}

/// How an area is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Explicitly no fill.
    None,
    Solid {
        color: ColorValue,
        /// `0.0` (opaque) to `1.0` (invisible).
        transparency: f64,
    },
    Gradient {
        gradient: Gradient,
        transparency: f64,
    },
    Pattern(Pattern),
}

impl Fill {
    pub fn solid(color: ColorValue, transparency: f64) -> Self {
        Fill::Solid {
            color,
            transparency,
        }
    }

    pub fn gradient(gradient: Gradient, transparency: f64) -> Self {
        Fill::Gradient {
            gradient,
            transparency,
        }
    }

    /// False only for [`Fill::None`].
    pub fn has_fill(&self) -> bool {
        !matches!(self, Fill::None)
    }

    /// The `fill_type` tag, absent for [`Fill::None`].
    pub fn fill_type(&self) -> Option<&'static str> {
        match self {
            Fill::None => None,
            Fill::Solid { .. } => Some("solid"),
            Fill::Gradient { .. } => Some("gradient"),
            Fill::Pattern(_) => Some("pattern"),
        }
    }
}
