use crate::settings::RenameSettings;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Something that can list the candidate files under a root folder
pub trait FileSource {
    fn list_files(&self, root: &Path, settings: &RenameSettings) -> Result<Vec<PathBuf>>;
}

/// Walks the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkdirSource;

impl FileSource for WalkdirSource {
    fn list_files(&self, root: &Path, settings: &RenameSettings) -> Result<Vec<PathBuf>> {
        collect_files(root, settings)
    }
}

/// Files under `root`, honoring the subfolder and extension settings.
///
/// Symlinks are not followed. Output is sorted so previews are stable.
pub fn collect_files(root: &Path, settings: &RenameSettings) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(anyhow!("Folder not found: {}", root.display()));
    }

    let extensions = settings.extensions();
    let mut walker = WalkDir::new(root).min_depth(1);
    if !settings.include_subfolders {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !extensions.is_empty() && !has_extension(entry.path(), &extensions) {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

/// Case-insensitive check against dotted, lowercased extensions
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| extensions.contains(&ext))
}
