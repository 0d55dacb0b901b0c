//! Style equivalence: the single predicate that decides whether two runs
//! may be merged.
//!
//! Equality is structural for tags and flags, by resolved value for colors,
//! and tolerant for floats. Tolerance works by snapping both values to a
//! grid of [`FLOAT_TOLERANCE`] and comparing grid cells. Unlike an
//! `|a - b| < ε` check, that keeps the relation transitive. The price is
//! that two values closer than the tolerance can still differ when a cell
//! boundary falls between them: `18.004` and `18.006` are not equivalent.
//! Linear gradient angles wrap, so `359.999` and `0.0` share a cell.
//!
//! Absent composites only equal absent composites: `None` never equals
//! `Some(Fill::None)` or `Some(Effects::default())`.

use shapetext_color::ColorValue;

use crate::style::{
    Effects, Fill, Glow, Gradient, GradientKind, GradientStop, Outline, Pattern, Reflection,
    RunStyle, Shadow,
};

/// Grid size for float comparison (points, degrees, fractions).
pub const FLOAT_TOLERANCE: f64 = 0.01;

fn grid(x: f64) -> i64 {
    (x / FLOAT_TOLERANCE).round() as i64
}

/// Grid cell of an angle in degrees, wrapped into one turn.
fn angle_cell(degrees: f64) -> i64 {
    grid(degrees).rem_euclid(grid(360.0))
}

/// Tolerant float equality.
pub fn floats_equivalent(a: f64, b: f64) -> bool {
    grid(a) == grid(b)
}

fn options_equivalent<T>(a: Option<&T>, b: Option<&T>, eq: impl Fn(&T, &T) -> bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => eq(a, b),
        _ => false,
    }
}

fn optional_floats_equivalent(a: Option<f64>, b: Option<f64>) -> bool {
    options_equivalent(a.as_ref(), b.as_ref(), |a, b| floats_equivalent(*a, *b))
}

/// Colors are equivalent when they render the same, whatever their source.
pub fn colors_equivalent(a: Option<&ColorValue>, b: Option<&ColorValue>) -> bool {
    options_equivalent(a, b, ColorValue::renders_same)
}

/// Returns true when two run styles are interchangeable.
///
/// Reflexive, symmetric and transitive, so it can drive grouping directly.
pub fn styles_equivalent(a: &RunStyle, b: &RunStyle) -> bool {
    a.font_name == b.font_name
        && optional_floats_equivalent(a.font_size, b.font_size)
        && a.bold == b.bold
        && a.italic == b.italic
        && a.underline == b.underline
        && a.strikethrough == b.strikethrough
        && colors_equivalent(a.font_color.as_ref(), b.font_color.as_ref())
        && options_equivalent(a.fill.as_ref(), b.fill.as_ref(), fills_equivalent)
        && options_equivalent(a.outline.as_ref(), b.outline.as_ref(), outlines_equivalent)
        && options_equivalent(a.effects.as_ref(), b.effects.as_ref(), effects_equivalent)
        && optional_floats_equivalent(a.character_spacing, b.character_spacing)
        && a.baseline == b.baseline
        && colors_equivalent(a.highlight.as_ref(), b.highlight.as_ref())
}

// ─── Fills ──────────────────────────────────────────────────────────────────

pub fn fills_equivalent(a: &Fill, b: &Fill) -> bool {
    match (a, b) {
        (Fill::None, Fill::None) => true,
        (
            Fill::Solid {
                color: ca,
                transparency: ta,
            },
            Fill::Solid {
                color: cb,
                transparency: tb,
            },
        ) => ca.renders_same(cb) && floats_equivalent(*ta, *tb),
        (
            Fill::Gradient {
                gradient: ga,
                transparency: ta,
            },
            Fill::Gradient {
                gradient: gb,
                transparency: tb,
            },
        ) => gradients_equivalent(ga, gb) && floats_equivalent(*ta, *tb),
        (Fill::Pattern(pa), Fill::Pattern(pb)) => patterns_equivalent(pa, pb),
        _ => false,
    }
}

pub fn gradients_equivalent(a: &Gradient, b: &Gradient) -> bool {
    let kinds_match = match (a.kind(), b.kind()) {
        (GradientKind::Linear { angle: x }, GradientKind::Linear { angle: y }) => {
            angle_cell(x) == angle_cell(y)
        }
        (GradientKind::Path(x), GradientKind::Path(y)) => x == y,
        _ => false,
    };
    if !kinds_match || a.stops().len() != b.stops().len() {
        return false;
    }

    let a_stops = canonical_stops(a.stops());
    let b_stops = canonical_stops(b.stops());
    a_stops.iter().zip(&b_stops).all(|(x, y)| {
        floats_equivalent(x.position, y.position) && x.color.renders_same(&y.color)
    })
}

/// Orders stops by grid position, then by rendered color, so stops that
/// share a position compare independently of input order.
fn canonical_stops(stops: &[GradientStop]) -> Vec<&GradientStop> {
    let mut sorted: Vec<&GradientStop> = stops.iter().collect();
    sorted.sort_by(|x, y| {
        grid(x.position)
            .cmp(&grid(y.position))
            .then_with(|| color_key(&x.color).cmp(&color_key(&y.color)))
    });
    sorted
}

fn color_key(color: &ColorValue) -> (bool, [u8; 3]) {
    if color.is_transparent() {
        (true, [0; 3])
    } else {
        (false, color.rgb().channels())
    }
}

fn patterns_equivalent(a: &Pattern, b: &Pattern) -> bool {
    a.pattern_type == b.pattern_type
        && a.foreground.renders_same(&b.foreground)
        && a.background.renders_same(&b.background)
}

// ─── Outlines ───────────────────────────────────────────────────────────────

pub fn outlines_equivalent(a: &Outline, b: &Outline) -> bool {
    floats_equivalent(a.width, b.width)
        && colors_equivalent(a.color.as_ref(), b.color.as_ref())
        && a.dash_style == b.dash_style
        && a.compound_type == b.compound_type
        && a.cap_type == b.cap_type
        && a.join_type == b.join_type
        && floats_equivalent(a.transparency, b.transparency)
}

// ─── Effects ────────────────────────────────────────────────────────────────

pub fn effects_equivalent(a: &Effects, b: &Effects) -> bool {
    options_equivalent(a.shadow.as_ref(), b.shadow.as_ref(), shadows_equivalent)
        && options_equivalent(a.glow.as_ref(), b.glow.as_ref(), glows_equivalent)
        && options_equivalent(
            a.reflection.as_ref(),
            b.reflection.as_ref(),
            reflections_equivalent,
        )
        && optional_floats_equivalent(a.soft_edge_radius, b.soft_edge_radius)
}

pub fn shadows_equivalent(a: &Shadow, b: &Shadow) -> bool {
    a.kind == b.kind
        && colors_equivalent(a.color.as_ref(), b.color.as_ref())
        && floats_equivalent(a.blur_radius, b.blur_radius)
        && floats_equivalent(a.distance, b.distance)
        && floats_equivalent(a.direction, b.direction)
        && floats_equivalent(a.transparency, b.transparency)
}

fn glows_equivalent(a: &Glow, b: &Glow) -> bool {
    colors_equivalent(a.color.as_ref(), b.color.as_ref())
        && floats_equivalent(a.radius, b.radius)
        && floats_equivalent(a.transparency, b.transparency)
}

fn reflections_equivalent(a: &Reflection, b: &Reflection) -> bool {
    floats_equivalent(a.blur_radius, b.blur_radius)
        && floats_equivalent(a.distance, b.distance)
        && floats_equivalent(a.direction, b.direction)
        && floats_equivalent(a.start_transparency, b.start_transparency)
        && floats_equivalent(a.end_transparency, b.end_transparency)
        && floats_equivalent(a.size, b.size)
}
