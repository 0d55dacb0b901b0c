//! Emission and write-back parsing of full shapes.

use serde_json::{json, Value};
use shapetext::color::{ColorTransforms, ColorValue, Rgb, SchemeSlot, ThemePalette};
use shapetext::style::{
    Baseline, Effects, Fill, Glow, Gradient, GradientStop, Outline, PathShape, Pattern,
    Reflection, Shadow, ShadowKind,
};
use shapetext::{
    extract_shape, shape_from_json, shape_from_value, shape_to_value, styles_equivalent,
    ColorFormat, ExtractOptions, Run, RunStyle, ShapeText,
};

fn accent(lum_mod: i32) -> ColorValue {
    ColorValue::theme(
        SchemeSlot::Accent1,
        ColorTransforms::new().with_lum_mod(lum_mod),
        None,
    )
}

fn rich_style() -> RunStyle {
    let gradient = Gradient::linear(
        45.0,
        vec![
            GradientStop::new(1.0, ColorValue::literal(Rgb::WHITE)),
            GradientStop::new(0.0, accent(75000)),
            GradientStop::new(0.5, ColorValue::theme(SchemeSlot::Lt2, ColorTransforms::new(), None)),
        ],
    );
    let effects = Effects {
        shadow: Some(Shadow {
            kind: ShadowKind::Inner,
            color: Some(ColorValue::literal(Rgb::BLACK)),
            blur_radius: 3.0,
            distance: 2.5,
            direction: 315.0,
            transparency: 0.4,
        }),
        glow: Some(Glow {
            color: Some(accent(60000)),
            radius: 5.0,
            transparency: 0.6,
        }),
        reflection: Some(Reflection {
            blur_radius: 0.5,
            distance: 0.0,
            direction: 90.0,
            start_transparency: 0.48,
            end_transparency: 1.0,
            size: 0.55,
        }),
        soft_edge_radius: Some(2.0),
    };

    RunStyle::new()
        .with_font("Calibri Light", 24.0)
        .bold()
        .underline()
        .with_color(accent(50000))
        .with_fill(Fill::gradient(gradient, 0.1))
        .with_outline(Outline::new(0.75, ColorValue::literal(Rgb(31, 56, 100))).with_dash_style("sysDash"))
        .with_effects(effects)
        .with_character_spacing(-0.5)
        .with_baseline(Baseline::Subscript)
        .with_highlight(ColorValue::literal(Rgb(255, 255, 0)))
}

fn sample_shape() -> ShapeText {
    let plain = RunStyle::new().with_font("Calibri", 18.0);
    let patterned = plain.clone().with_fill(Fill::Pattern(Pattern {
        pattern_type: "pct50".into(),
        foreground: ColorValue::literal(Rgb(192, 0, 0)),
        background: ColorValue::transparent(),
    }));
    let radial = plain.clone().with_fill(Fill::gradient(
        Gradient::path(
            PathShape::Rect,
            vec![
                GradientStop::new(0.0, ColorValue::literal(Rgb(0, 176, 80))),
                GradientStop::new(1.0, ColorValue::literal(Rgb(0, 112, 192))),
            ],
        ),
        0.0,
    ));

    ShapeText::new("TextBox 3")
        .with_run(Run::new("Heading", rich_style(), 0))
        .with_run(Run::new("plain ", plain.clone(), 1))
        .with_run(Run::new("text", plain, 1))
        .with_run(Run::new("stripes", patterned, 2))
        .with_run(Run::new("glow", radial, 3))
        .with_shadow(Shadow {
            color: Some(ColorValue::theme(SchemeSlot::Dk1, ColorTransforms::new(), None)),
            blur_radius: 4.0,
            distance: 3.0,
            direction: 45.0,
            transparency: 0.57,
            ..Shadow::default()
        })
}

fn emit_parse_emit(options: &ExtractOptions) -> (String, String) {
    let first = extract_shape(sample_shape(), options);
    let first_text = serde_json::to_string(&first).unwrap();

    let record = shape_from_json(&first_text, None).unwrap();
    let second_text = serde_json::to_string(&shape_to_value(&record, options)).unwrap();
    (first_text, second_text)
}

// ============================================================================
// Idempotent re-emission
// ============================================================================

#[test]
fn re_emission_is_byte_identical_with_rgb_colors() {
    let (first, second) = emit_parse_emit(&ExtractOptions::default());
    assert_eq!(first, second);
}

#[test]
fn re_emission_is_byte_identical_with_hex_colors() {
    let options = ExtractOptions::new().with_color_format(ColorFormat::Hex);
    let (first, second) = emit_parse_emit(&options);
    assert_eq!(first, second);
}

#[test]
fn parsed_styles_are_equivalent_to_the_originals() {
    let options = ExtractOptions::default();
    let record = sample_shape().merge(&options);
    let value = shape_to_value(&record, &options);
    let parsed = shape_from_value(&value, None).unwrap();

    assert_eq!(parsed.name, record.name);
    assert_eq!(parsed.text.runs.len(), record.text.runs.len());
    for (a, b) in record.text.runs.iter().zip(&parsed.text.runs) {
        assert_eq!(a.text, b.text);
        assert!(styles_equivalent(&a.style, &b.style), "{:?} vs {:?}", a.style, b.style);
    }
}

// ============================================================================
// Shape of the emitted tree
// ============================================================================

#[test]
fn emitted_tree_layout() {
    let value = extract_shape(sample_shape(), &ExtractOptions::default());

    assert_eq!(value["name"], "TextBox 3");
    assert_eq!(value["has_text"], 1);
    assert_eq!(value["shadow"]["type"], "outer");
    assert_eq!(value["shadow"]["color"], json!({ "schemeColor": "dk1" }));

    let runs = value["text_runs"].as_array().unwrap();
    assert_eq!(runs.len(), 4);
    assert_eq!(runs[1]["content"], "plain text");
    assert!(runs[1].get("text_fill").is_none());
    assert!(runs[1].get("text_outline").is_none());
    assert!(runs[1].get("text_effects").is_none());
    assert_eq!(runs[2]["text_fill"]["background_color"], "transparent");
    assert_eq!(runs[3]["text_fill"]["path_shape"], "rect");
}

#[test]
fn rich_run_fields() {
    let value = extract_shape(sample_shape(), &ExtractOptions::default());
    let heading = &value["text_runs"][0];

    assert_eq!(heading["font"], "Calibri Light");
    assert_eq!(heading["font_bold"], 1);
    assert_eq!(heading["font_italic"], 0);
    assert_eq!(heading["font_underline"], 1);
    assert_eq!(
        heading["font_color"],
        json!({ "schemeColor": "accent1", "colorTransforms": { "lumMod": 50000 } })
    );
    assert_eq!(heading["text_outline"]["width"], 0.75);
    assert_eq!(heading["text_outline"]["dash_style"], "sysDash");
    assert_eq!(heading["text_effects"]["shadow"]["type"], "inner");
    assert_eq!(heading["text_effects"]["glow"]["radius"], 5.0);
    assert_eq!(heading["text_effects"]["reflection"]["size"], 0.55);
    assert_eq!(heading["text_effects"]["soft_edge_radius"], 2.0);
    assert_eq!(heading["character_spacing"], -0.5);
    assert_eq!(heading["baseline"], "subscript");
    assert_eq!(heading["highlight_color"], "RGB(255, 255, 0)");
}

#[test]
fn gradient_stops_are_emitted_in_position_order() {
    let value = extract_shape(sample_shape(), &ExtractOptions::default());
    let stops = value["text_runs"][0]["text_fill"]["stops"].as_array().unwrap();
    let positions: Vec<f64> = stops.iter().map(|s| s["position"].as_f64().unwrap()).collect();
    assert_eq!(positions, [0.0, 0.5, 1.0]);
    assert_eq!(stops[0]["color"]["schemeColor"], "accent1");
}

#[test]
fn no_fill_style_never_emits_text_fill() {
    let shape = ShapeText::new("s").with_run(Run::new(
        "x",
        RunStyle::new().with_fill(Fill::None),
        0,
    ));
    let value = extract_shape(shape, &ExtractOptions::default());
    assert!(value["text_runs"][0].get("text_fill").is_none());
}

// ============================================================================
// Re-resolution against another palette
// ============================================================================

#[test]
fn theme_colors_follow_the_palette_on_write_back() {
    let value = extract_shape(sample_shape(), &ExtractOptions::default());
    let palette = ThemePalette::office().with_color(SchemeSlot::Accent1, Rgb(0, 0, 0));
    let record = shape_from_value(&value, Some(&palette)).unwrap();

    let color = record.text.runs[0].style.font_color.as_ref().unwrap();
    assert_eq!(color.rgb(), Rgb(0, 0, 0));
    assert_eq!(color.slot(), Some(SchemeSlot::Accent1));
}

#[test]
fn empty_shape_round_trips() {
    let options = ExtractOptions::default();
    let value = extract_shape(ShapeText::new("Picture 1"), &options);
    let record = shape_from_value(&value, None).unwrap();
    assert!(!record.has_text());
    assert_eq!(shape_to_value(&record, &options), value);
}

#[test]
fn malformed_tree_is_rejected() {
    let value: Value = json!({ "name": "s", "text_runs": [{ "font": "Arial" }] });
    assert!(shape_from_value(&value, None).is_err());
}
