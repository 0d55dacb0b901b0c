//! # shapetext - Styled text runs from presentation shapes
//!
//! A document traversal hands over a shape's text as a sequence of runs,
//! each with its full formatting. shapetext collapses adjacent runs that
//! look the same into single records and emits them as a compact JSON value
//! tree that can be read back without loss.
//!
//! ## Core Concepts
//!
//! - [`RunStyle`]: font, color, fill, outline and effects of one run
//! - [`styles_equivalent`]: the merge predicate (resolved colors, tolerant floats)
//! - [`merge_runs`]: document-order grouping with paragraph separators
//! - [`serialize`] / [`parse`]: the value tree in both directions
//! - [`ExtractOptions`]: separator and color spelling, loadable from YAML
//!
//! Colors come from [`shapetext_color`], re-exported as [`color`].
//!
//! ## Quick Start
//!
//! ```rust
//! use shapetext::color::{ColorRef, ColorTransforms};
//! use shapetext::{extract_shape, ExtractOptions, Run, RunStyle, ShapeText};
//!
//! let accent = ColorRef::Scheme {
//!     name: "accent1".into(),
//!     transforms: ColorTransforms::new().with_lum_mod(75000),
//! }
//! .resolve(None)
//! .unwrap();
//!
//! let heading = RunStyle::new().with_font("Calibri", 28.0).bold();
//! let body = RunStyle::new().with_font("Calibri", 18.0).with_color(accent);
//!
//! let shape = ShapeText::new("Content Placeholder 2")
//!     .with_run(Run::new("Overview", heading, 0))
//!     .with_run(Run::new("First point", body.clone(), 1))
//!     .with_run(Run::new("Second point", body, 2));
//!
//! let value = extract_shape(shape, &ExtractOptions::default());
//! assert_eq!(value["has_text"], 1);
//! assert_eq!(value["text_runs"][1]["content"], "First point\nSecond point");
//! assert_eq!(value["text_runs"][1]["font_color"]["schemeColor"], "accent1");
//! ```

pub mod compare;
mod config;
mod error;
mod merge;
pub mod parse;
pub mod serialize;
mod shape;
pub mod style;

pub use shapetext_color as color;

pub use compare::{floats_equivalent, styles_equivalent, FLOAT_TOLERANCE};
pub use config::{ColorFormat, ExtractOptions};
pub use error::{Result, ShapeTextError};
pub use merge::{merge_runs, merge_runs_with, MergedRun, MergedText, Run, PARAGRAPH_SEPARATOR};
pub use parse::{
    color_from_value, effects_from_value, fill_from_value, merged_run_from_value,
    outline_from_value, shape_from_json, shape_from_value,
};
pub use serialize::{
    color_to_value, effects_to_value, fill_to_value, outline_to_value, run_to_value,
    runs_to_value,
};
pub use shape::{extract_shape, shape_to_value, ShapeRecord, ShapeText};
pub use style::RunStyle;
