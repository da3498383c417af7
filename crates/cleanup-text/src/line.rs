//! Removal of a single literal line

use crate::search::{self, Search};
use crate::status::StatusLine;

/// What a line removal did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The first occurrence, starting at byte `at`, has been removed.
    Removed { at: usize },
    /// The literal line is absent but `reference` still occurs at byte `at`.
    StillReferenced { at: usize },
    /// Neither the line nor the reference occurs.
    AlreadyClean,
}

impl LineOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }

    /// Status lines for an import called `name`.
    pub fn status(&self, name: &str) -> Vec<StatusLine> {
        match self {
            Self::Removed { .. } => vec![StatusLine::success(format!("Removed {name} import"))],
            Self::StillReferenced { .. } => vec![
                StatusLine::info(format!("{name} import not found, checking...")),
                StatusLine::warning("  Still referenced somewhere!"),
            ],
            Self::AlreadyClean => vec![
                StatusLine::info(format!("{name} import not found, checking...")),
                StatusLine::info("  Already clean"),
            ],
        }
    }
}

/// Find `line` verbatim, or with each `\n` written as `\r\n` for files
/// with Windows line endings.
fn find_line(content: &str, line: &str) -> Search {
    let exact = search::find_literal(content, line, 0);
    if exact.range().is_some() || !line.contains('\n') {
        return exact;
    }
    let crlf = line.replace("\r\n", "\n").replace('\n', "\r\n");
    search::find_literal(content, &crlf, 0)
}

/// Remove the first occurrence of `line`.
///
/// `line` should carry its own line terminator; a `\r\n` terminator in the
/// text matches a `\n` in `line` and is removed with it. When it is absent the text
/// is returned unchanged and `reference` decides between
/// [`LineOutcome::StillReferenced`] and [`LineOutcome::AlreadyClean`].
pub fn remove_line(content: String, line: &str, reference: &str) -> (String, LineOutcome) {
    if let Search::Found(range) = find_line(&content, line) {
        tracing::debug!(at = range.start, len = range.len(), "removing line");
        let at = range.start;
        return (search::splice(content, range), LineOutcome::Removed { at });
    }

    match search::find_literal(&content, reference, 0).start() {
        Some(at) => {
            tracing::warn!(at, reference, "line absent but reference remains");
            (content, LineOutcome::StillReferenced { at })
        }
        None => (content, LineOutcome::AlreadyClean),
    }
}
