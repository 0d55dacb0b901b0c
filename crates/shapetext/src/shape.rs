//! Shape-level assembly: a named shape, its merged text and its shadow.

use serde_json::{Map, Value};

use crate::config::ExtractOptions;
use crate::merge::{merge_runs_with, MergedText, Run};
use crate::serialize::{runs_to_value, shadow_to_value};
use crate::style::Shadow;

/// A shape's text as delivered by a document traversal, before merging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeText {
    pub name: String,
    pub runs: Vec<Run>,
    /// The shape's own shadow, distinct from any text shadow.
    pub shadow: Option<Shadow>,
}

impl ShapeText {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Merges the runs using the configured paragraph separator.
    pub fn merge(self, options: &ExtractOptions) -> ShapeRecord {
        ShapeRecord {
            name: self.name,
            text: merge_runs_with(self.runs, &options.paragraph_separator),
            shadow: self.shadow,
        }
    }
}

/// A shape after merging, ready for emission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeRecord {
    pub name: String,
    pub text: MergedText,
    pub shadow: Option<Shadow>,
}

impl ShapeRecord {
    pub fn has_text(&self) -> bool {
        self.text.has_text()
    }
}

/// Emits `{ name, has_text, text_runs, shadow? }`.
///
/// `text_runs` is always present, empty when the shape has no text.
pub fn shape_to_value(record: &ShapeRecord, options: &ExtractOptions) -> Value {
    let mut obj = Map::new();
    obj.insert("name".into(), Value::from(record.name.as_str()));
    obj.insert("has_text".into(), Value::from(u8::from(record.has_text())));
    obj.insert("text_runs".into(), runs_to_value(&record.text, options));
    if let Some(shadow) = &record.shadow {
        obj.insert(
            "shadow".into(),
            shadow_to_value(shadow, options.color_format),
        );
    }
    Value::Object(obj)
}

/// Merges a shape's runs and emits its value in one step.
pub fn extract_shape(shape: ShapeText, options: &ExtractOptions) -> Value {
    let record = shape.merge(options);
    log::debug!(
        "shape '{}': {} merged runs",
        record.name,
        record.text.runs.len()
    );
    shape_to_value(&record, options)
}
