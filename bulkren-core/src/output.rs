use crate::apply::ApplyReport;
use crate::preview::{PreviewCounts, RenamePreview};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a preview operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResult {
    pub root: PathBuf,
    pub counts: PreviewCounts,
    pub previews: Vec<RenamePreview>,
}

/// Result of an apply operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResult {
    pub root: PathBuf,
    pub counts: PreviewCounts,
    pub report: ApplyReport,
}

impl ApplyResult {
    pub fn renamed(&self) -> usize {
        self.report.renamed
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PreviewResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "preview",
            "root": self.root,
            "summary": {
                "files": self.counts.total,
                "will_rename": self.counts.will_rename,
                "no_change": self.counts.no_change,
                "collisions": self.counts.collisions,
            },
            "previews": self.previews,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "Rename preview for {}", self.root.display()).unwrap();
        writeln!(
            output,
            "{} files: {} to rename, {} unchanged, {} collisions",
            self.counts.total, self.counts.will_rename, self.counts.no_change, self.counts.collisions
        )
        .unwrap();

        output
    }
}

impl OutputFormatter for ApplyResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.report.failures.is_empty(),
            "operation": "apply",
            "root": self.root,
            "summary": {
                "files": self.counts.total,
                "attempted": self.report.attempted,
                "renamed": self.report.renamed,
                "failed": self.report.failed(),
                "skipped_no_change": self.report.skipped_no_change,
                "skipped_collision": self.report.skipped_collision,
            },
            "failures": self.report.failures,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "✓ Renamed {} of {} files", self.report.renamed, self.counts.total).unwrap();

        if self.report.skipped() > 0 {
            writeln!(
                output,
                "Skipped {} unchanged and {} colliding files",
                self.report.skipped_no_change, self.report.skipped_collision
            )
            .unwrap();
        }

        if !self.report.failures.is_empty() {
            writeln!(output, "✗ {} renames failed:", self.report.failed()).unwrap();
            for failure in &self.report.failures {
                writeln!(output, "  {}: {}", failure.path.display(), failure.reason).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
