mod index;
mod json;
mod summary;
mod table;

pub use index::{directory_of, has_utf8_stem, stem_of, ExistingNames};
pub use json::render_json;
pub use summary::render_summary;
pub use table::render_table;

use crate::filter::matches_filter;
use crate::settings::RenameSettings;
use crate::transform::transform;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Outcome of one computed rename, evaluated NoChange -> Collision -> WillRename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameStatus {
    /// New stem differs and collides with nothing in its folder
    WillRename,
    /// New stem is byte-for-byte the old stem
    NoChange,
    /// New stem is already taken by a file of the batch in the same folder
    Collision,
}

impl RenameStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::WillRename => "Will rename",
            Self::NoChange => "No change",
            Self::Collision => "Collision",
        }
    }
}

impl fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed, not yet applied, rename decision for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePreview {
    pub path: PathBuf,
    pub old_stem: String,
    pub new_stem: String,
    pub status: RenameStatus,
}

impl RenamePreview {
    /// Original directory + new stem + original extension.
    ///
    /// A source whose stem is not valid UTF-8 targets itself.
    pub fn target_path(&self) -> PathBuf {
        if !has_utf8_stem(&self.path) {
            return self.path.clone();
        }

        let mut name = OsString::from(&self.new_stem);
        if let Some(ext) = self.path.extension() {
            name.push(".");
            name.push(ext);
        }
        directory_of(&self.path).join(name)
    }

    pub fn will_change(&self) -> bool {
        self.status == RenameStatus::WillRename
    }
}

/// Compute previews for `paths`, preserving input order.
///
/// Collisions are judged against the original stems of the whole supplied
/// batch, grouped per directory, including files the filter excludes.
pub fn build_preview<P: AsRef<Path>>(paths: &[P], settings: &RenameSettings) -> Vec<RenamePreview> {
    let existing = ExistingNames::from_paths(paths);
    let mut previews = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let old_stem = stem_of(path);

        if settings.use_filter && !matches_filter(&old_stem, settings) {
            continue;
        }

        if !has_utf8_stem(path) {
            tracing::debug!("leaving non UTF-8 name unchanged: {}", path.display());
            previews.push(RenamePreview {
                path: path.to_path_buf(),
                new_stem: old_stem.clone(),
                old_stem,
                status: RenameStatus::NoChange,
            });
            continue;
        }

        let new_stem = transform(&old_stem, settings);
        let status = resolve_status(path, &old_stem, &new_stem, &existing);

        previews.push(RenamePreview {
            path: path.to_path_buf(),
            old_stem,
            new_stem,
            status,
        });
    }

    previews
}

fn resolve_status(
    path: &Path,
    old_stem: &str,
    new_stem: &str,
    existing: &ExistingNames,
) -> RenameStatus {
    if old_stem == new_stem {
        return RenameStatus::NoChange;
    }

    if existing.contains(&directory_of(path), new_stem) {
        return RenameStatus::Collision;
    }

    RenameStatus::WillRename
}

/// Per-status totals for a preview batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewCounts {
    pub total: usize,
    pub will_rename: usize,
    pub no_change: usize,
    pub collisions: usize,
}

pub fn count_statuses(previews: &[RenamePreview]) -> PreviewCounts {
    previews
        .iter()
        .fold(PreviewCounts::default(), |mut counts, preview| {
            counts.total += 1;
            match preview.status {
                RenameStatus::WillRename => counts.will_rename += 1,
                RenameStatus::NoChange => counts.no_change += 1,
                RenameStatus::Collision => counts.collisions += 1,
            }
            counts
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    Json,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render previews in the requested format.
///
/// `root` is only used to shorten the folder column.
pub fn render_previews(
    previews: &[RenamePreview],
    format: Preview,
    root: Option<&Path>,
    use_color: Option<bool>,
) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(previews, root, use_color),
        Preview::Summary => render_summary(previews, root, use_color),
        Preview::Json => render_json(previews),
        Preview::None => String::new(),
    }
}

/// Write rendered previews to stdout
pub fn write_preview(
    previews: &[RenamePreview],
    format: Preview,
    root: Option<&Path>,
    use_color: Option<bool>,
) -> anyhow::Result<()> {
    let output = render_previews(previews, format, root, use_color);
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}

/// Folder of `path` relative to `root` (or the cwd), for display
pub(crate) fn display_folder(path: &Path, root: Option<&Path>) -> String {
    let dir = directory_of(path);
    let base = root
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok());

    match base.as_deref().and_then(|base| dir.strip_prefix(base).ok()) {
        Some(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Some(relative) => relative.display().to_string(),
        None => dir.display().to_string(),
    }
}
