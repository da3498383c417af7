//! Removal of a marker-delimited block.
//!
//! The block starts at the first occurrence of a marker (normally a section
//! header comment) and ends after the first following line that begins with
//! the terminator pattern. The terminator is matched textually at a fixed
//! indentation; this is a heuristic for "the closing brace of the method",
//! not a structural parse, and reformatted input can defeat it.

use std::ops::Range;

use crate::search::{self, Search};
use crate::status::StatusLine;

/// What a block removal did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// The block occupied `span` in the input and has been removed.
    Removed { span: Range<usize> },
    /// The marker is absent; the block was removed by an earlier run.
    AlreadyRemoved,
    /// The marker exists at `marker_at` but no terminator line follows it.
    /// The text is left untouched.
    MissingTerminator { marker_at: usize },
}

impl BlockOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }

    /// Status lines for a block called `name`.
    pub fn status(&self, name: &str) -> Vec<StatusLine> {
        match self {
            Self::Removed { .. } => vec![StatusLine::success(format!("Removed {name} method"))],
            Self::AlreadyRemoved => vec![StatusLine::info(format!("{name} already removed"))],
            Self::MissingTerminator { .. } => vec![StatusLine::error(format!(
                "ERROR: could not find end of {name}"
            ))],
        }
    }
}

/// Locate the span a block removal would delete.
///
/// `Err` carries the marker offset when the marker exists but no terminator
/// line follows it.
pub fn locate_block(content: &str, marker: &str, terminator: &str) -> Result<Search, usize> {
    let Some(marker_at) = search::find_literal(content, marker, 0).start() else {
        return Ok(Search::NotFound);
    };
    match search::find_line_starting_with(content, terminator, marker_at) {
        Search::Found(line) => Ok(Search::Found(marker_at..line.end)),
        Search::NotFound => Err(marker_at),
    }
}

/// Remove the block opened by `marker` and closed by `terminator`.
///
/// Takes the text by value and hands it back, spliced when the block was
/// found and unchanged otherwise.
///
/// # Example
/// ```
/// use cleanup_text::block::remove_block;
///
/// let text = "a\n  // ===== Icons =====\n  icon() {\n  }\nb\n".to_string();
/// let (text, outcome) = remove_block(text, "  // ===== Icons =====", "  }");
/// assert_eq!(text, "a\nb\n");
/// assert!(outcome.is_removed());
/// ```
pub fn remove_block(content: String, marker: &str, terminator: &str) -> (String, BlockOutcome) {
    match locate_block(&content, marker, terminator) {
        Ok(Search::Found(span)) => {
            tracing::debug!(start = span.start, end = span.end, "removing block");
            let spliced = search::splice(content, span.clone());
            (spliced, BlockOutcome::Removed { span })
        }
        Ok(Search::NotFound) => {
            tracing::debug!(marker, "block marker not present");
            (content, BlockOutcome::AlreadyRemoved)
        }
        Err(marker_at) => {
            tracing::warn!(marker_at, terminator, "no terminator line after block marker");
            (content, BlockOutcome::MissingTerminator { marker_at })
        }
    }
}
