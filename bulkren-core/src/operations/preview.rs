use crate::output::PreviewResult;
use crate::preview::{build_preview, count_statuses};
use crate::scan::{FileSource, WalkdirSource};
use crate::settings::RenameSettings;
use anyhow::{Context, Result};
use std::path::Path;

/// Preview operation - enumerate `root` and compute every rename
pub fn preview_operation(root: &Path, settings: &RenameSettings) -> Result<PreviewResult> {
    preview_with_source(root, settings, &WalkdirSource)
}

pub fn preview_with_source(
    root: &Path,
    settings: &RenameSettings,
    source: &dyn FileSource,
) -> Result<PreviewResult> {
    let files = source
        .list_files(root, settings)
        .with_context(|| format!("Failed to list files in {}", root.display()))?;

    let previews = build_preview(&files, settings);
    let counts = count_statuses(&previews);

    tracing::debug!(
        "previewed {} of {} files under {}",
        counts.total,
        files.len(),
        root.display()
    );

    Ok(PreviewResult {
        root: root.to_path_buf(),
        counts,
        previews,
    })
}
