//! The set of edits one run applies.
//!
//! The built-in plan removes the dead `getTechIcon` section and the unused
//! `PerformanceMonitor` import from `src/app/resume-service.ts`. A plan can
//! also be read from TOML; omitted fields fall back to the built-in values.
//!
//! ```toml
//! target = "src/app/resume-service.ts"
//!
//! [block]
//! name = "getTechIcon"
//! marker = "  // ===== Technology Icon Mapping ====="
//! terminator = "  }"
//!
//! [line]
//! name = "PerformanceMonitor"
//! line = "import { PerformanceMonitor } from './performance-monitor';\n"
//! reference = "performance-monitor"
//! ```

use cleanup_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;

use crate::block::BlockOutcome;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::line::LineOutcome;
use crate::status::StatusLine;

pub const DEFAULT_TARGET: &str = "src/app/resume-service.ts";

pub const TECH_ICON_MARKER: &str = "  // ===== Technology Icon Mapping =====";
pub const METHOD_TERMINATOR: &str = "  }";
pub const PERFORMANCE_MONITOR_IMPORT: &str =
    "import { PerformanceMonitor } from './performance-monitor';\n";
pub const PERFORMANCE_MONITOR_MODULE: &str = "performance-monitor";

/// A block to cut from a marker through its terminator line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockRemoval {
    /// Method name used in status output
    pub name: String,
    pub marker: String,
    pub terminator: String,
}

impl Default for BlockRemoval {
    fn default() -> Self {
        Self {
            name: "getTechIcon".into(),
            marker: TECH_ICON_MARKER.into(),
            terminator: METHOD_TERMINATOR.into(),
        }
    }
}

/// A literal line to delete, plus the narrower text that means it is still in use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineRemoval {
    /// Import name used in status output
    pub name: String,
    pub line: String,
    pub reference: String,
}

impl Default for LineRemoval {
    fn default() -> Self {
        Self {
            name: "PerformanceMonitor".into(),
            line: PERFORMANCE_MONITOR_IMPORT.into(),
            reference: PERFORMANCE_MONITOR_MODULE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchPlan {
    /// File to patch, relative to the working directory
    pub target: String,
    pub block: BlockRemoval,
    pub line: LineRemoval,
}

impl Default for PatchPlan {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.into(),
            block: BlockRemoval::default(),
            line: LineRemoval::default(),
        }
    }
}

impl PatchPlan {
    /// Load and validate a plan file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let plan: Self = ConfigStore::new().load(path)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reject search strings that would match everywhere.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("target", &self.target),
            ("block.marker", &self.block.marker),
            ("block.terminator", &self.block.terminator),
            ("line.line", &self.line.line),
            ("line.reference", &self.line.reference),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(Error::InvalidPlan { field });
            }
        }
        Ok(())
    }

    /// Run block removal, then line removal, against `doc`.
    pub fn apply(&self, doc: &mut Document) -> PatchReport {
        let block = doc.remove_block(&self.block.marker, &self.block.terminator);
        let line = doc.remove_line(&self.line.line, &self.line.reference);
        tracing::info!(
            block_removed = block.is_removed(),
            line_removed = line.is_removed(),
            "applied patch plan"
        );
        PatchReport { block, line }
    }
}

/// Outcomes of one [`PatchPlan::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub block: BlockOutcome,
    pub line: LineOutcome,
}

impl PatchReport {
    /// Status lines in the order the edits ran.
    pub fn status_lines(&self, plan: &PatchPlan) -> Vec<StatusLine> {
        let mut lines = self.block.status(&plan.block.name);
        lines.extend(self.line.status(&plan.line.name));
        lines
    }
}
