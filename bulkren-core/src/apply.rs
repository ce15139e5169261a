use crate::preview::{RenamePreview, RenameStatus};
use crate::settings::RenameSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The physical move primitive the executor asks for each eligible preview
pub trait FileMover {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Moves files with `std::fs::rename`, refusing to replace another file.
///
/// The one exception is a case-only rename whose target resolves to the
/// source itself, as on a case-insensitive filesystem. Other aliases of the
/// source, such as hard links, still count as an existing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMover;

impl FileMover for FsMover {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if fs::symlink_metadata(to).is_ok()
            && !(differs_only_in_case(from, to) && is_same_file(from, to)?)
        {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target already exists: {}", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}

fn differs_only_in_case(a: &Path, b: &Path) -> bool {
    a != b
        && a.parent() == b.parent()
        && a.file_name().map(|n| n.to_string_lossy().to_lowercase())
            == b.file_name().map(|n| n.to_string_lossy().to_lowercase())
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    let a = fs::symlink_metadata(a)?;
    let b = fs::symlink_metadata(b)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// One move that was attempted and failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub target: PathBuf,
    pub reason: String,
}

/// What happened to each preview of an apply run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Moves requested from the mover
    pub attempted: usize,
    /// Moves the mover reported as successful
    pub renamed: usize,
    pub skipped_no_change: usize,
    pub skipped_collision: usize,
    /// Eligible previews whose target is their own path
    pub unchanged: usize,
    pub failures: Vec<RenameFailure>,
}

impl ApplyReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_no_change + self.skipped_collision
    }
}

/// Apply previews through `mover`, sequentially and in order.
///
/// A failed move is logged and recorded; the batch carries on and nothing
/// already renamed is rolled back. Collision state is taken from the previews
/// as computed, not re-read from disk.
pub fn apply_renames_with<M: FileMover + ?Sized>(
    previews: &[RenamePreview],
    settings: &RenameSettings,
    mover: &mut M,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for preview in previews {
        match preview.status {
            RenameStatus::NoChange if settings.skip_if_no_change => {
                report.skipped_no_change += 1;
                continue;
            },
            RenameStatus::Collision if settings.skip_if_collision => {
                report.skipped_collision += 1;
                continue;
            },
            _ => {},
        }

        let target = preview.target_path();
        if target == preview.path {
            report.unchanged += 1;
            continue;
        }

        report.attempted += 1;
        match mover.move_file(&preview.path, &target) {
            Ok(()) => {
                tracing::debug!("renamed {} -> {}", preview.path.display(), target.display());
                report.renamed += 1;
            },
            Err(err) => {
                tracing::warn!("failed to rename '{}': {}", preview.path.display(), err);
                report.failures.push(RenameFailure {
                    path: preview.path.clone(),
                    target,
                    reason: err.to_string(),
                });
            },
        }
    }

    report
}

/// Apply previews on the real filesystem; returns the number of files renamed
pub fn apply_renames(previews: &[RenamePreview], settings: &RenameSettings) -> usize {
    apply_renames_with(previews, settings, &mut FsMover).renamed
}
