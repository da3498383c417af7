//! Marker-based text removal for resume-cleanup.
//!
//! A [`Document`] is an owned text buffer. Two edits run against it:
//!
//! - **Block removal**: delete from a marker comment through the end of the
//!   first following line that starts with a terminator pattern.
//! - **Line removal**: delete the first verbatim occurrence of a literal
//!   line, or report whether a narrower reference still exists.
//!
//! Neither edit parses the source language. Both report what they did as an
//! outcome value instead of failing; only filesystem access returns errors.

pub mod block;
pub mod document;
pub mod error;
pub mod line;
pub mod plan;
pub mod search;
pub mod status;

pub use block::{BlockOutcome, remove_block};
pub use document::Document;
pub use error::{Error, Result};
pub use line::{LineOutcome, remove_line};
pub use plan::{BlockRemoval, LineRemoval, PatchPlan, PatchReport};
pub use search::Search;
pub use status::{Severity, StatusLine};
