use crate::apply::{apply_renames_with, FileMover, FsMover};
use crate::output::ApplyResult;
use crate::preview::{count_statuses, RenamePreview};
use crate::settings::RenameSettings;
use anyhow::Result;
use std::path::Path;

use super::preview::preview_operation;

/// Apply operation - rebuild the preview from the current settings, then rename
pub fn apply_operation(root: &Path, settings: &RenameSettings) -> Result<ApplyResult> {
    let preview = preview_operation(root, settings)?;
    Ok(apply_previews_operation(
        root,
        &preview.previews,
        settings,
        &mut FsMover,
    ))
}

/// Apply already computed previews through `mover`
pub fn apply_previews_operation(
    root: &Path,
    previews: &[RenamePreview],
    settings: &RenameSettings,
    mover: &mut dyn FileMover,
) -> ApplyResult {
    let report = apply_renames_with(previews, settings, mover);

    if !report.failures.is_empty() {
        tracing::warn!(
            "{} of {} renames failed",
            report.failed(),
            report.attempted
        );
    }

    ApplyResult {
        root: root.to_path_buf(),
        counts: count_statuses(previews),
        report,
    }
}
