//! Reading emitted value trees back into the style model.
//!
//! This is the write-back direction: every shape produced by
//! [`crate::serialize`] parses back into an equivalent model, and emitting
//! that model again yields the same bytes.
//!
//! Two kinds of failure are treated differently. A tree with the wrong
//! structure (a run without `content`, stops that are not an array) is an
//! error. A color that cannot be understood degrades to "no color", the same
//! way color resolution does.

use serde_json::{Map, Value};
use shapetext_color::{parse_rgb, ColorTransforms, ColorValue, SchemeSlot, ThemePalette};

use crate::error::{Result, ShapeTextError};
use crate::merge::{MergedRun, MergedText};
use crate::shape::ShapeRecord;
use crate::style::{
    Baseline, Effects, Fill, Glow, Gradient, GradientStop, Outline, PathShape, Pattern,
    Reflection, RunStyle, Shadow, ShadowKind,
};

type Object = Map<String, Value>;

fn as_object<'a>(value: &'a Value, what: &'static str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or(ShapeTextError::NotAnObject { what })
}

/// A field that is present and not `null`.
fn present<'a>(obj: &'a Object, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn required<'a>(obj: &'a Object, object: &'static str, field: &'static str) -> Result<&'a Value> {
    present(obj, field).ok_or(ShapeTextError::MissingField { object, field })
}

fn optional_f64(obj: &Object, object: &'static str, field: &'static str) -> Result<Option<f64>> {
    present(obj, field)
        .map(|v| {
            v.as_f64().ok_or(ShapeTextError::InvalidField {
                object,
                field,
                expected: "a number",
            })
        })
        .transpose()
}

fn f64_or_zero(obj: &Object, object: &'static str, field: &'static str) -> Result<f64> {
    Ok(optional_f64(obj, object, field)?.unwrap_or(0.0))
}

fn optional_str<'a>(
    obj: &'a Object,
    object: &'static str,
    field: &'static str,
) -> Result<Option<&'a str>> {
    present(obj, field)
        .map(|v| {
            v.as_str().ok_or(ShapeTextError::InvalidField {
                object,
                field,
                expected: "a string",
            })
        })
        .transpose()
}

fn required_str<'a>(obj: &'a Object, object: &'static str, field: &'static str) -> Result<&'a str> {
    optional_str(obj, object, field)?.ok_or(ShapeTextError::MissingField { object, field })
}

/// A `0`/`1` flag. Missing means `0`; booleans are accepted too.
fn flag(obj: &Object, object: &'static str, field: &'static str) -> Result<bool> {
    match present(obj, field) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(v) => match v.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(ShapeTextError::InvalidField {
                object,
                field,
                expected: "0 or 1",
            }),
        },
    }
}

fn optional_color(
    obj: &Object,
    field: &str,
    palette: Option<&ThemePalette>,
) -> Option<ColorValue> {
    present(obj, field).and_then(|v| color_from_value(v, palette))
}

// ─── Colors ─────────────────────────────────────────────────────────────────

/// Parses a color value. Anything unrecognized is "no color".
///
/// Theme references are re-resolved against `palette`, or the default
/// palette when it is `None`.
pub fn color_from_value(value: &Value, palette: Option<&ThemePalette>) -> Option<ColorValue> {
    match value {
        Value::String(s) if s == "transparent" => Some(ColorValue::transparent()),
        Value::String(s) => {
            let color = parse_rgb(s)
                .map(ColorValue::literal)
                .or_else(|| ColorValue::from_hex(s));
            if color.is_none() {
                log::debug!("unrecognized color literal '{}'", s);
            }
            color
        }
        Value::Object(obj) => {
            let name = obj.get("schemeColor").and_then(Value::as_str)?;
            let Some(slot) = SchemeSlot::parse(name) else {
                log::debug!("unknown theme slot '{}'", name);
                return None;
            };
            let transforms = obj
                .get("colorTransforms")
                .and_then(Value::as_object)
                .map(transforms_from_object)
                .unwrap_or_default();
            Some(ColorValue::theme(slot, transforms, palette))
        }
        _ => None,
    }
}

fn transforms_from_object(obj: &Object) -> ColorTransforms {
    let mut transforms = ColorTransforms::new();
    for (name, value) in obj {
        let amount = value.as_i64().and_then(|v| i32::try_from(v).ok());
        match amount {
            Some(amount) if transforms.set_by_name(name, amount) => {}
            _ => log::debug!("ignoring color transform {}={}", name, value),
        }
    }
    transforms
}

// ─── Fills ──────────────────────────────────────────────────────────────────

/// Parses a fill object. `has_fill: 0` yields [`Fill::None`].
///
/// A fill whose colors cannot be understood also degrades to
/// [`Fill::None`].
pub fn fill_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Fill> {
    const OBJECT: &str = "fill";
    let obj = as_object(value, OBJECT)?;
    if !flag(obj, OBJECT, "has_fill")? {
        return Ok(Fill::None);
    }

    let transparency = f64_or_zero(obj, OBJECT, "transparency")?;
    let fill = match required_str(obj, OBJECT, "fill_type")? {
        "solid" => optional_color(obj, "color", palette)
            .map(|color| Fill::solid(color, transparency)),
        "gradient" => Some(Fill::gradient(
            gradient_from_object(obj, palette)?,
            transparency,
        )),
        "pattern" => {
            let pattern_type = required_str(obj, OBJECT, "pattern_type")?;
            let foreground = optional_color(obj, "foreground_color", palette);
            let background = optional_color(obj, "background_color", palette);
            foreground.zip(background).map(|(foreground, background)| {
                Fill::Pattern(Pattern {
                    pattern_type: pattern_type.to_string(),
                    foreground,
                    background,
                })
            })
        }
        _ => {
            return Err(ShapeTextError::InvalidField {
                object: OBJECT,
                field: "fill_type",
                expected: "\"solid\", \"gradient\" or \"pattern\"",
            })
        }
    };

    Ok(fill.unwrap_or_else(|| {
        log::debug!("fill without a usable color treated as no fill");
        Fill::None
    }))
}

fn gradient_from_object(obj: &Object, palette: Option<&ThemePalette>) -> Result<Gradient> {
    const OBJECT: &str = "gradient fill";

    let stops: Vec<GradientStop> = required(obj, OBJECT, "stops")?
        .as_array()
        .ok_or(ShapeTextError::InvalidField {
            object: OBJECT,
            field: "stops",
            expected: "an array",
        })?
        .iter()
        .map(|stop| stop_from_value(stop, palette))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    match required_str(obj, OBJECT, "gradient_type")? {
        "linear" => Ok(Gradient::linear(f64_or_zero(obj, OBJECT, "angle")?, stops)),
        "path" => {
            let shape = required_str(obj, OBJECT, "path_shape")?;
            let shape = PathShape::parse(shape).ok_or(ShapeTextError::InvalidField {
                object: OBJECT,
                field: "path_shape",
                expected: "\"circle\", \"rect\" or \"shape\"",
            })?;
            Ok(Gradient::path(shape, stops))
        }
        _ => Err(ShapeTextError::InvalidField {
            object: OBJECT,
            field: "gradient_type",
            expected: "\"linear\" or \"path\"",
        }),
    }
}

/// A stop whose color cannot be understood is dropped.
fn stop_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Option<GradientStop>> {
    const OBJECT: &str = "gradient stop";
    let obj = as_object(value, OBJECT)?;
    let position = optional_f64(obj, OBJECT, "position")?.ok_or(ShapeTextError::MissingField {
        object: OBJECT,
        field: "position",
    })?;
    Ok(optional_color(obj, "color", palette).map(|color| GradientStop::new(position, color)))
}

// ─── Outlines ───────────────────────────────────────────────────────────────

/// Parses an outline object. `has_outline: 0` yields `None`.
pub fn outline_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Option<Outline>> {
    const OBJECT: &str = "outline";
    let obj = as_object(value, OBJECT)?;
    if obj.contains_key("has_outline") && !flag(obj, OBJECT, "has_outline")? {
        return Ok(None);
    }

    let owned = |field: &'static str| -> Result<Option<String>> {
        Ok(optional_str(obj, OBJECT, field)?.map(str::to_string))
    };

    Ok(Some(Outline {
        width: f64_or_zero(obj, OBJECT, "width")?,
        color: optional_color(obj, "color", palette),
        dash_style: owned("dash_style")?,
        compound_type: owned("compound_type")?,
        cap_type: owned("cap_type")?,
        join_type: owned("join_type")?,
        transparency: f64_or_zero(obj, OBJECT, "transparency")?,
    }))
}

// ─── Effects ────────────────────────────────────────────────────────────────

pub fn shadow_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Shadow> {
    const OBJECT: &str = "shadow";
    let obj = as_object(value, OBJECT)?;
    let kind = match optional_str(obj, OBJECT, "type")? {
        None => ShadowKind::default(),
        Some(tag) => ShadowKind::parse(tag).ok_or(ShapeTextError::InvalidField {
            object: OBJECT,
            field: "type",
            expected: "\"outer\" or \"inner\"",
        })?,
    };

    Ok(Shadow {
        kind,
        color: optional_color(obj, "color", palette),
        blur_radius: f64_or_zero(obj, OBJECT, "blur")?,
        distance: f64_or_zero(obj, OBJECT, "distance")?,
        direction: f64_or_zero(obj, OBJECT, "angle")?,
        transparency: f64_or_zero(obj, OBJECT, "transparency")?,
    })
}

fn glow_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Glow> {
    const OBJECT: &str = "glow";
    let obj = as_object(value, OBJECT)?;
    Ok(Glow {
        color: optional_color(obj, "color", palette),
        radius: f64_or_zero(obj, OBJECT, "radius")?,
        transparency: f64_or_zero(obj, OBJECT, "transparency")?,
    })
}

fn reflection_from_value(value: &Value) -> Result<Reflection> {
    const OBJECT: &str = "reflection";
    let obj = as_object(value, OBJECT)?;
    Ok(Reflection {
        blur_radius: f64_or_zero(obj, OBJECT, "blur")?,
        distance: f64_or_zero(obj, OBJECT, "distance")?,
        direction: f64_or_zero(obj, OBJECT, "angle")?,
        start_transparency: f64_or_zero(obj, OBJECT, "start_transparency")?,
        end_transparency: f64_or_zero(obj, OBJECT, "end_transparency")?,
        size: f64_or_zero(obj, OBJECT, "size")?,
    })
}

pub fn effects_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<Effects> {
    const OBJECT: &str = "text effects";
    let obj = as_object(value, OBJECT)?;
    Ok(Effects {
        shadow: present(obj, "shadow")
            .map(|v| shadow_from_value(v, palette))
            .transpose()?,
        glow: present(obj, "glow")
            .map(|v| glow_from_value(v, palette))
            .transpose()?,
        reflection: present(obj, "reflection")
            .map(reflection_from_value)
            .transpose()?,
        soft_edge_radius: optional_f64(obj, OBJECT, "soft_edge_radius")?,
    })
}

// ─── Runs and shapes ────────────────────────────────────────────────────────

/// Parses one text-run object.
pub fn merged_run_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<MergedRun> {
    const OBJECT: &str = "text run";
    let obj = as_object(value, OBJECT)?;
    let text = required_str(obj, OBJECT, "content")?;

    let baseline = match optional_str(obj, OBJECT, "baseline")? {
        None => None,
        Some(tag) => Some(Baseline::parse(tag).ok_or(ShapeTextError::InvalidField {
            object: OBJECT,
            field: "baseline",
            expected: "\"superscript\" or \"subscript\"",
        })?),
    };

    let style = RunStyle {
        font_name: optional_str(obj, OBJECT, "font")?.map(str::to_string),
        font_size: optional_f64(obj, OBJECT, "font_size")?,
        bold: flag(obj, OBJECT, "font_bold")?,
        italic: flag(obj, OBJECT, "font_italic")?,
        underline: flag(obj, OBJECT, "font_underline")?,
        strikethrough: flag(obj, OBJECT, "font_strikethrough")?,
        font_color: optional_color(obj, "font_color", palette),
        fill: present(obj, "text_fill")
            .map(|v| fill_from_value(v, palette))
            .transpose()?,
        outline: present(obj, "text_outline")
            .map(|v| outline_from_value(v, palette))
            .transpose()?
            .flatten(),
        effects: present(obj, "text_effects")
            .map(|v| effects_from_value(v, palette))
            .transpose()?,
        character_spacing: optional_f64(obj, OBJECT, "character_spacing")?,
        baseline,
        highlight: optional_color(obj, "highlight_color", palette),
    };

    Ok(MergedRun::new(text, style))
}

/// Parses a shape object: `{ name, has_text, text_runs, shadow? }`.
pub fn shape_from_value(value: &Value, palette: Option<&ThemePalette>) -> Result<ShapeRecord> {
    const OBJECT: &str = "shape";
    let obj = as_object(value, OBJECT)?;

    let runs = match present(obj, "text_runs") {
        None => Vec::new(),
        Some(v) => v
            .as_array()
            .ok_or(ShapeTextError::InvalidField {
                object: OBJECT,
                field: "text_runs",
                expected: "an array",
            })?
            .iter()
            .map(|run| merged_run_from_value(run, palette))
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(ShapeRecord {
        name: optional_str(obj, OBJECT, "name")?
            .unwrap_or_default()
            .to_string(),
        text: MergedText { runs },
        shadow: present(obj, "shadow")
            .map(|v| shadow_from_value(v, palette))
            .transpose()?,
    })
}

/// Parses a shape from JSON text.
pub fn shape_from_json(json: &str, palette: Option<&ThemePalette>) -> Result<ShapeRecord> {
    let value: Value = serde_json::from_str(json)?;
    shape_from_value(&value, palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shapetext_color::{ColorKind, Rgb};

    #[test]
    fn literal_colors_in_both_formats() {
        let rgb = color_from_value(&json!("RGB(255, 128, 64)"), None).unwrap();
        assert_eq!(rgb.rgb(), Rgb(255, 128, 64));

        let hex = color_from_value(&json!("ff8040"), None).unwrap();
        assert_eq!(hex.rgb(), Rgb(255, 128, 64));
        assert_eq!(hex.original_hex(), Some("ff8040"));
    }

    #[test]
    fn unparseable_colors_are_absent() {
        assert_eq!(color_from_value(&json!("RGB(300, 0, 0)"), None), None);
        assert_eq!(color_from_value(&json!("GG0000"), None), None);
        assert_eq!(color_from_value(&json!(42), None), None);
        assert_eq!(color_from_value(&json!({ "schemeColor": "accent9" }), None), None);
        assert_eq!(color_from_value(&Value::Null, None), None);
    }

    #[test]
    fn theme_color_is_re_resolved() {
        let value = json!({ "schemeColor": "accent1", "colorTransforms": { "lumMod": 75000 } });

        let default = color_from_value(&value, None).unwrap();
        assert_eq!(default.kind(), ColorKind::Theme);
        assert_eq!(default.rgb().to_hex(), "2F5597");

        let custom = ThemePalette::new().with_color(SchemeSlot::Accent1, Rgb(200, 0, 0));
        let recolored = color_from_value(&value, Some(&custom)).unwrap();
        assert_eq!(recolored.rgb(), Rgb(150, 0, 0));
    }

    #[test]
    fn transparent_color() {
        let color = color_from_value(&json!("transparent"), None).unwrap();
        assert!(color.is_transparent());
    }

    #[test]
    fn has_fill_zero_is_no_fill() {
        assert_eq!(fill_from_value(&json!({ "has_fill": 0 }), None).unwrap(), Fill::None);
    }

    #[test]
    fn unknown_fill_type_is_an_error() {
        let err = fill_from_value(&json!({ "has_fill": 1, "fill_type": "picture" }), None)
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeTextError::InvalidField { field: "fill_type", .. }
        ));
    }

    #[test]
    fn stops_must_be_an_array() {
        let err = fill_from_value(
            &json!({
                "has_fill": 1,
                "fill_type": "gradient",
                "gradient_type": "linear",
                "angle": 0.0,
                "stops": "none"
            }),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ShapeTextError::InvalidField { field: "stops", .. }));
    }

    #[test]
    fn stop_with_bad_color_is_dropped() {
        let fill = fill_from_value(
            &json!({
                "has_fill": 1,
                "fill_type": "gradient",
                "gradient_type": "path",
                "path_shape": "circle",
                "stops": [
                    { "position": 1.0, "color": "nonsense" },
                    { "position": 0.0, "color": "FFFFFF" }
                ],
                "transparency": 0.0
            }),
            None,
        )
        .unwrap();
        let Fill::Gradient { gradient, .. } = fill else {
            panic!("expected a gradient fill");
        };
        assert_eq!(gradient.stops().len(), 1);
        assert_eq!(gradient.angle(), None);
    }

    #[test]
    fn run_without_content_is_an_error() {
        let err = merged_run_from_value(&json!({ "font": "Arial" }), None).unwrap_err();
        assert!(matches!(
            err,
            ShapeTextError::MissingField { object: "text run", field: "content" }
        ));
    }

    #[test]
    fn run_that_is_not_an_object() {
        let err = merged_run_from_value(&json!(["content"]), None).unwrap_err();
        assert!(matches!(err, ShapeTextError::NotAnObject { what: "text run" }));
    }

    #[test]
    fn flags_must_be_zero_or_one() {
        let err = merged_run_from_value(&json!({ "content": "x", "font_bold": 2 }), None)
            .unwrap_err();
        assert!(matches!(err, ShapeTextError::InvalidField { field: "font_bold", .. }));
    }

    #[test]
    fn minimal_run() {
        let run = merged_run_from_value(&json!({ "content": "Hi", "font_italic": 1 }), None)
            .unwrap();
        assert_eq!(run.text, "Hi");
        assert!(run.style.italic);
        assert!(!run.style.bold);
        assert_eq!(run.style.font_name, None);
        assert_eq!(run.style.fill, None);
    }

    #[test]
    fn invalid_json_text() {
        let err = shape_from_json("{ not json", None).unwrap_err();
        assert!(matches!(err, ShapeTextError::Json(_)));
    }
}
