use anyhow::{Context, Result};
use serde::Serialize;

/// Accumulated summary of one run.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Files processed.
    pub files: usize,
    /// Files with at least one rewritten declaration.
    pub changed: usize,
    /// Total declarations rewritten across all files.
    pub declarations: usize,
}

impl Report {
    /// Record one processed file and its rewrite count.
    pub fn record(&mut self, rewritten: usize) {
        self.files += 1;
        self.declarations += rewritten;
        if rewritten > 0 {
            self.changed += 1;
        }
    }

    /// Render the summary in the requested format (`text` or `json`).
    pub fn render(&self, format: &str) -> Result<String> {
        if format == "json" {
            return serde_json::to_string(self).context("failed to serialize report");
        }
        Ok(format!(
            "{} file{} inspected, {} changed, {} declaration{} rewritten",
            self.files,
            if self.files == 1 { "" } else { "s" },
            self.changed,
            self.declarations,
            if self.declarations == 1 { "" } else { "s" },
        ))
    }
}
