use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory -> stems present in the batch before any transformation.
///
/// Built from every supplied path, including the ones the filter later
/// drops. Stems that are not valid UTF-8 are left out: no computed stem can
/// equal them. Lives for one preview pass only.
#[derive(Debug, Default)]
pub struct ExistingNames {
    by_dir: HashMap<PathBuf, HashSet<String>>,
}

impl ExistingNames {
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut index = Self::default();
        for path in paths {
            let path = path.as_ref();
            match path.file_stem().map(OsStr::to_str) {
                Some(Some(stem)) => index.insert(directory_of(path), stem.to_string()),
                Some(None) => {},
                None => index.insert(directory_of(path), String::new()),
            }
        }
        index
    }

    fn insert(&mut self, dir: PathBuf, stem: String) {
        self.by_dir.entry(dir).or_default().insert(stem);
    }

    /// Ordinal, case-sensitive lookup within one directory
    pub fn contains(&self, dir: &Path, stem: &str) -> bool {
        self.by_dir
            .get(dir)
            .is_some_and(|stems| stems.contains(stem))
    }
}

/// Whether the file stem survives a round trip through `String`
pub fn has_utf8_stem(path: &Path) -> bool {
    path.file_stem().map_or(true, |stem| stem.to_str().is_some())
}

/// File name without its extension; empty when the path has no file name.
///
/// Lossy for stems that are not valid UTF-8, see [`has_utf8_stem`].
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parent directory, or the empty bucket when there is none
pub fn directory_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
