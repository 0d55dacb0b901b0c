//! The style vector of a text run.
//!
//! Absence is a type-level state throughout: a run with no outline has
//! `outline: None`, not an outline with a "present" flag cleared. Composite
//! fields distinguish "not specified" (`None`) from "specified as nothing"
//! (`Some(Fill::None)`, `Some(Effects::default())`).
//!
//! ## Building Styles
//!
//! ```rust
//! use shapetext::style::{Fill, RunStyle};
//! use shapetext_color::{ColorValue, Rgb};
//!
//! let style = RunStyle::new()
//!     .with_font("Calibri", 18.0)
//!     .bold()
//!     .with_color(ColorValue::literal(Rgb(255, 0, 0)))
//!     .with_fill(Fill::solid(ColorValue::literal(Rgb(255, 0, 0)), 0.0));
//!
//! assert!(style.bold);
//! assert_eq!(style.font_name.as_deref(), Some("Calibri"));
//! ```

mod effects;
mod fill;
mod outline;
mod run;

pub use effects::{Effects, Glow, Reflection, Shadow, ShadowKind};
pub use fill::{Fill, Gradient, GradientKind, GradientStop, PathShape, Pattern};
pub use outline::Outline;
pub use run::{Baseline, RunStyle};
