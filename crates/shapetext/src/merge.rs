//! Run merging: collapse adjacent same-styled runs into single records.
//!
//! Runs are scanned in document order. A run joins the open group when its
//! style is [equivalent](crate::styles_equivalent) to the group's; otherwise
//! the group is closed and a new one opened. Groups may span paragraphs: when
//! a joining run starts a new paragraph, the paragraph separator (a newline by
//! default) is appended before its text.
//!
//! ```rust
//! use shapetext::{merge_runs, Run, RunStyle};
//!
//! let style = RunStyle::new().with_font("Calibri", 18.0);
//! let merged = merge_runs(vec![
//!     Run::new("Hello ", style.clone(), 0),
//!     Run::new("World", style.clone(), 0),
//!     Run::new("Again", style, 1),
//! ]);
//!
//! assert_eq!(merged.runs.len(), 1);
//! assert_eq!(merged.runs[0].text, "Hello World\nAgain");
//! ```
//!
//! Paragraph boundaries only survive as separators inside a group; a style
//! change at a paragraph boundary simply starts a new record.

use crate::compare::styles_equivalent;
use crate::style::RunStyle;

/// The default paragraph separator.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// One run as delivered by a document traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
    /// Index of the paragraph the run belongs to, non-decreasing in input order.
    pub paragraph_index: usize,
}

impl Run {
    pub fn new(text: impl Into<String>, style: RunStyle, paragraph_index: usize) -> Self {
        Self {
            text: text.into(),
            style,
            paragraph_index,
        }
    }
}

/// A group of merged runs sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRun {
    pub text: String,
    pub style: RunStyle,
}

impl MergedRun {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// The merged runs of one text body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedText {
    pub runs: Vec<MergedRun>,
}

impl MergedText {
    /// False when the input had no runs at all.
    pub fn has_text(&self) -> bool {
        !self.runs.is_empty()
    }
}

/// Merges runs using the default newline paragraph separator.
pub fn merge_runs<I>(runs: I) -> MergedText
where
    I: IntoIterator<Item = Run>,
{
    merge_runs_with(runs, PARAGRAPH_SEPARATOR)
}

/// Merges runs, joining paragraphs within a group with `separator`.
pub fn merge_runs_with<I>(runs: I, separator: &str) -> MergedText
where
    I: IntoIterator<Item = Run>,
{
    let mut merged = Vec::new();
    let mut open: Option<MergedRun> = None;
    let mut previous_paragraph: Option<usize> = None;

    for run in runs {
        let new_paragraph = previous_paragraph.is_some_and(|p| run.paragraph_index > p);
        previous_paragraph = Some(run.paragraph_index);

        match open.as_mut() {
            Some(group) if styles_equivalent(&group.style, &run.style) => {
                if new_paragraph {
                    group.text.push_str(separator);
                }
                group.text.push_str(&run.text);
            }
            _ => {
                if let Some(done) = open.take() {
                    log::trace!("closing run group of {} bytes", done.text.len());
                    merged.push(done);
                }
                open = Some(MergedRun::new(run.text, run.style));
            }
        }
    }

    if let Some(done) = open {
        log::trace!("closing final run group of {} bytes", done.text.len());
        merged.push(done);
    }

    MergedText { runs: merged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapetext_color::{ColorValue, Rgb};

    fn style_a() -> RunStyle {
        RunStyle::new()
            .with_font("Calibri", 18.0)
            .with_color(ColorValue::literal(Rgb::BLACK))
    }

    fn style_b() -> RunStyle {
        style_a().bold()
    }

    #[test]
    fn empty_input_has_no_text() {
        let merged = merge_runs(Vec::new());
        assert!(merged.runs.is_empty());
        assert!(!merged.has_text());
    }

    #[test]
    fn single_run_passes_through() {
        let merged = merge_runs(vec![Run::new("Only", style_a(), 0)]);
        assert!(merged.has_text());
        assert_eq!(merged.runs, vec![MergedRun::new("Only", style_a())]);
    }

    #[test]
    fn same_style_runs_merge_without_separator() {
        let merged = merge_runs(vec![
            Run::new("Hello ", style_a(), 0),
            Run::new("World", style_a(), 0),
        ]);
        assert_eq!(merged.runs.len(), 1);
        assert_eq!(merged.runs[0].text, "Hello World");
    }

    #[test]
    fn different_styles_stay_apart() {
        let merged = merge_runs(vec![
            Run::new("Small", style_a().with_font_size(10.0), 0),
            Run::new("Large", style_a().with_font_size(14.0), 0),
        ]);
        let texts: Vec<&str> = merged.runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Small", "Large"]);
    }

    #[test]
    fn paragraphs_join_with_newline() {
        let merged = merge_runs(vec![
            Run::new("Para1Run1", style_a(), 0),
            Run::new("Para1Run2", style_a(), 0),
            Run::new("Para2Run1", style_a(), 1),
            Run::new("Para3Run1", style_a(), 2),
            Run::new("Para3Run2", style_a(), 2),
        ]);
        assert_eq!(merged.runs.len(), 1);
        assert_eq!(
            merged.runs[0].text,
            "Para1Run1Para1Run2\nPara2Run1\nPara3Run1Para3Run2"
        );
    }

    #[test]
    fn skipped_paragraph_index_still_adds_one_separator() {
        let merged = merge_runs(vec![Run::new("a", style_a(), 0), Run::new("b", style_a(), 3)]);
        assert_eq!(merged.runs[0].text, "a\nb");
    }

    #[test]
    fn style_change_at_paragraph_boundary_drops_separator() {
        let merged = merge_runs(vec![Run::new("one", style_a(), 0), Run::new("two", style_b(), 1)]);
        let texts: Vec<&str> = merged.runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn alternating_styles_produce_one_group_each() {
        let merged = merge_runs(vec![
            Run::new("a", style_a(), 0),
            Run::new("b", style_b(), 0),
            Run::new("c", style_a(), 0),
        ]);
        assert_eq!(merged.runs.len(), 3);
    }

    #[test]
    fn empty_runs_disappear_into_neighbours() {
        let merged = merge_runs(vec![
            Run::new("x", style_a(), 0),
            Run::new("", style_a(), 0),
            Run::new("y", style_a(), 0),
        ]);
        assert_eq!(merged.runs, vec![MergedRun::new("xy", style_a())]);
    }

    #[test]
    fn empty_run_with_own_style_is_kept() {
        let merged = merge_runs(vec![Run::new("x", style_a(), 0), Run::new("", style_b(), 0)]);
        assert_eq!(merged.runs.len(), 2);
        assert_eq!(merged.runs[1].text, "");
        assert!(merged.has_text());
    }

    #[test]
    fn group_keeps_first_style() {
        let first = style_a().with_font_size(18.0);
        let second = style_a().with_font_size(18.001);
        let merged = merge_runs(vec![
            Run::new("a", first.clone(), 0),
            Run::new("b", second, 0),
        ]);
        assert_eq!(merged.runs[0].style, first);
    }

    #[test]
    fn custom_separator() {
        let merged = merge_runs_with(
            vec![Run::new("a", style_a(), 0), Run::new("b", style_a(), 1)],
            "\u{2029}",
        );
        assert_eq!(merged.runs[0].text, "a\u{2029}b");
    }
}
