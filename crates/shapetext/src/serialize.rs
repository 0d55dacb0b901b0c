//! Emission of the JSON value tree.
//!
//! Field names and omission rules are a contract with downstream consumers
//! and with the write-back parser in [`crate::parse`]:
//!
//! - A literal color is a string: `RGB(r, g, b)` or `RRGGBB`, per
//!   [`ColorFormat`]. A transparent color is the string `transparent`.
//! - A theme color is `{ "schemeColor": slot, "colorTransforms": {...} }`,
//!   with `colorTransforms` omitted when no modifier is set.
//! - `text_fill`, `text_outline` and `text_effects` are omitted from a run
//!   when the style has no fill, outline or effects. They are never `null`.
//! - Lengths, angles and transparencies carry two decimal places.
//! - Flags are `0` or `1`.

use serde_json::{Map, Value};
use shapetext_color::{ColorSource, ColorTransforms, ColorValue};

use crate::config::{ColorFormat, ExtractOptions};
use crate::merge::{MergedRun, MergedText};
use crate::style::{Effects, Fill, Glow, Gradient, Outline, Reflection, RunStyle, Shadow};

/// Rounds to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn number(x: f64) -> Value {
    Value::from(round2(x))
}

fn flag(b: bool) -> Value {
    Value::from(u8::from(b))
}

fn optional_string(s: Option<&str>) -> Value {
    s.map(Value::from).unwrap_or(Value::Null)
}

fn optional_color(color: Option<&ColorValue>, format: ColorFormat) -> Value {
    color
        .map(|c| color_to_value(c, format))
        .unwrap_or(Value::Null)
}

// ─── Colors ─────────────────────────────────────────────────────────────────

/// Emits a color as a literal string or a theme object.
pub fn color_to_value(color: &ColorValue, format: ColorFormat) -> Value {
    if color.is_transparent() {
        return Value::from("transparent");
    }
    match color.source() {
        ColorSource::Literal { .. } => match format {
            ColorFormat::Rgb => Value::from(color.rgb().to_string()),
            ColorFormat::Hex => Value::from(color.rgb().to_hex()),
        },
        ColorSource::Theme { slot, transforms } => {
            let mut obj = Map::new();
            obj.insert("schemeColor".into(), Value::from(slot.as_str()));
            if !transforms.is_empty() {
                obj.insert("colorTransforms".into(), transforms_to_value(transforms));
            }
            Value::Object(obj)
        }
    }
}

fn transforms_to_value(transforms: &ColorTransforms) -> Value {
    let fields = [
        ("lumMod", transforms.lum_mod),
        ("lumOff", transforms.lum_off),
        ("tint", transforms.tint),
        ("shade", transforms.shade),
        ("satMod", transforms.sat_mod),
        ("satOff", transforms.sat_off),
        ("alpha", transforms.alpha),
    ];
    let obj: Map<String, Value> = fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), Value::from(v))))
        .collect();
    Value::Object(obj)
}

// ─── Fills ──────────────────────────────────────────────────────────────────

/// Emits a fill object, or `None` when the fill does not paint.
pub fn fill_to_value(fill: &Fill, format: ColorFormat) -> Option<Value> {
    let fill_type = fill.fill_type()?;

    let mut obj = Map::new();
    obj.insert("has_fill".into(), flag(true));
    obj.insert("fill_type".into(), Value::from(fill_type));

    match fill {
        Fill::None => return None,
        Fill::Solid {
            color,
            transparency,
        } => {
            obj.insert("color".into(), color_to_value(color, format));
            obj.insert("transparency".into(), number(*transparency));
        }
        Fill::Gradient {
            gradient,
            transparency,
        } => {
            write_gradient(&mut obj, gradient, format);
            obj.insert("transparency".into(), number(*transparency));
        }
        Fill::Pattern(pattern) => {
            obj.insert("pattern_type".into(), Value::from(pattern.pattern_type.as_str()));
            obj.insert(
                "foreground_color".into(),
                color_to_value(&pattern.foreground, format),
            );
            obj.insert(
                "background_color".into(),
                color_to_value(&pattern.background, format),
            );
        }
    }

    Some(Value::Object(obj))
}

fn write_gradient(obj: &mut Map<String, Value>, gradient: &Gradient, format: ColorFormat) {
    obj.insert("gradient_type".into(), Value::from(gradient.gradient_type()));
    match gradient.kind() {
        crate::style::GradientKind::Linear { angle } => {
            // 359.996 would otherwise round up to 360.00
            obj.insert("angle".into(), number(round2(angle) % 360.0));
        }
        crate::style::GradientKind::Path(shape) => {
            obj.insert("path_shape".into(), Value::from(shape.as_str()));
        }
    }
    let stops: Vec<Value> = gradient
        .stops()
        .iter()
        .map(|stop| {
            let mut s = Map::new();
            s.insert("position".into(), number(stop.position));
            s.insert("color".into(), color_to_value(&stop.color, format));
            Value::Object(s)
        })
        .collect();
    obj.insert("stops".into(), Value::Array(stops));
}

// ─── Outlines ───────────────────────────────────────────────────────────────

pub fn outline_to_value(outline: &Outline, format: ColorFormat) -> Value {
    let mut obj = Map::new();
    obj.insert("has_outline".into(), flag(true));
    obj.insert("width".into(), number(outline.width));
    obj.insert("color".into(), optional_color(outline.color.as_ref(), format));
    obj.insert("dash_style".into(), optional_string(outline.dash_style.as_deref()));
    obj.insert(
        "compound_type".into(),
        optional_string(outline.compound_type.as_deref()),
    );
    obj.insert("cap_type".into(), optional_string(outline.cap_type.as_deref()));
    obj.insert("join_type".into(), optional_string(outline.join_type.as_deref()));
    obj.insert("transparency".into(), number(outline.transparency));
    Value::Object(obj)
}

// ─── Effects ────────────────────────────────────────────────────────────────

pub fn shadow_to_value(shadow: &Shadow, format: ColorFormat) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::from(shadow.kind.as_str()));
    obj.insert("color".into(), optional_color(shadow.color.as_ref(), format));
    obj.insert("blur".into(), number(shadow.blur_radius));
    obj.insert("distance".into(), number(shadow.distance));
    obj.insert("angle".into(), number(shadow.direction));
    obj.insert("transparency".into(), number(shadow.transparency));
    Value::Object(obj)
}

fn glow_to_value(glow: &Glow, format: ColorFormat) -> Value {
    let mut obj = Map::new();
    obj.insert("color".into(), optional_color(glow.color.as_ref(), format));
    obj.insert("radius".into(), number(glow.radius));
    obj.insert("transparency".into(), number(glow.transparency));
    Value::Object(obj)
}

fn reflection_to_value(reflection: &Reflection) -> Value {
    let mut obj = Map::new();
    obj.insert("blur".into(), number(reflection.blur_radius));
    obj.insert("distance".into(), number(reflection.distance));
    obj.insert("angle".into(), number(reflection.direction));
    obj.insert(
        "start_transparency".into(),
        number(reflection.start_transparency),
    );
    obj.insert("end_transparency".into(), number(reflection.end_transparency));
    obj.insert("size".into(), number(reflection.size));
    Value::Object(obj)
}

/// Emits an effects object, or `None` when no effect is present.
pub fn effects_to_value(effects: &Effects, format: ColorFormat) -> Option<Value> {
    if !effects.has_effects() {
        return None;
    }

    let mut obj = Map::new();
    obj.insert("has_effects".into(), flag(true));
    if let Some(shadow) = &effects.shadow {
        obj.insert("shadow".into(), shadow_to_value(shadow, format));
    }
    if let Some(glow) = &effects.glow {
        obj.insert("glow".into(), glow_to_value(glow, format));
    }
    if let Some(reflection) = &effects.reflection {
        obj.insert("reflection".into(), reflection_to_value(reflection));
    }
    if let Some(radius) = effects.soft_edge_radius {
        obj.insert("soft_edge_radius".into(), number(radius));
    }
    Some(Value::Object(obj))
}

// ─── Runs ───────────────────────────────────────────────────────────────────

fn write_style(obj: &mut Map<String, Value>, style: &RunStyle, format: ColorFormat) {
    obj.insert("font".into(), optional_string(style.font_name.as_deref()));
    obj.insert(
        "font_size".into(),
        style.font_size.map(number).unwrap_or(Value::Null),
    );
    obj.insert(
        "font_color".into(),
        optional_color(style.font_color.as_ref(), format),
    );
    obj.insert("font_bold".into(), flag(style.bold));
    obj.insert("font_italic".into(), flag(style.italic));
    obj.insert("font_underline".into(), flag(style.underline));
    obj.insert("font_strikethrough".into(), flag(style.strikethrough));

    if let Some(fill) = style.fill.as_ref().and_then(|f| fill_to_value(f, format)) {
        obj.insert("text_fill".into(), fill);
    }
    if let Some(outline) = &style.outline {
        obj.insert("text_outline".into(), outline_to_value(outline, format));
    }
    if let Some(effects) = style.effects.as_ref().and_then(|e| effects_to_value(e, format)) {
        obj.insert("text_effects".into(), effects);
    }

    if let Some(spacing) = style.character_spacing {
        obj.insert("character_spacing".into(), number(spacing));
    }
    if let Some(baseline) = style.baseline {
        obj.insert("baseline".into(), Value::from(baseline.as_str()));
    }
    if let Some(highlight) = &style.highlight {
        obj.insert("highlight_color".into(), color_to_value(highlight, format));
    }
}

/// Emits one merged text run.
pub fn run_to_value(run: &MergedRun, options: &ExtractOptions) -> Value {
    let mut obj = Map::new();
    obj.insert("content".into(), Value::from(run.text.as_str()));
    write_style(&mut obj, &run.style, options.color_format);
    Value::Object(obj)
}

/// Emits every merged run of a text body, in order.
pub fn runs_to_value(text: &MergedText, options: &ExtractOptions) -> Value {
    Value::Array(
        text.runs
            .iter()
            .map(|run| run_to_value(run, options))
            .collect(),
    )
}
