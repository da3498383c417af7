//! Owned text buffer under edit

use cleanup_fs::{NormalizedPath, io};

use crate::block::{self, BlockOutcome};
use crate::error::Result;
use crate::line::{self, LineOutcome};

/// The full text of one file, held in memory while it is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source as first loaded, for `is_modified`
    original_source: String,
    source: String,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            original_source: source.clone(),
            source,
        }
    }

    /// Read the whole file at `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(Self::new(io::read_text(path)?))
    }

    /// Overwrite `path` with the current source, modified or not.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        tracing::debug!(path = %path, modified = self.is_modified(), "saving document");
        io::write_text(path, &self.source)?;
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check if the source differs from what was loaded.
    pub fn is_modified(&self) -> bool {
        self.source != self.original_source
    }

    /// Remove the block opened by `marker`. See [`block::remove_block`].
    pub fn remove_block(&mut self, marker: &str, terminator: &str) -> BlockOutcome {
        let source = std::mem::take(&mut self.source);
        let (source, outcome) = block::remove_block(source, marker, terminator);
        self.source = source;
        outcome
    }

    /// Remove the first occurrence of `line`. See [`line::remove_line`].
    pub fn remove_line(&mut self, line: &str, reference: &str) -> LineOutcome {
        let source = std::mem::take(&mut self.source);
        let (source, outcome) = line::remove_line(source, line, reference);
        self.source = source;
        outcome
    }
}
