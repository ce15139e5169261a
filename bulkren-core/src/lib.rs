#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod filter;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod preview;
pub mod scan;
pub mod settings;
pub mod transform;

pub use apply::{apply_renames, apply_renames_with, ApplyReport, FileMover, FsMover, RenameFailure};
pub use config::Config;
pub use filter::matches_filter;
pub use operations::{apply_operation, apply_previews_operation, preview_operation};
pub use output::{ApplyResult, OutputFormat, OutputFormatter, PreviewResult, VersionResult};
pub use pattern::{build_literal_regex, build_replace_regex, normalize_replacement, PatternError};
pub use preview::{
    build_preview, count_statuses, render_previews, write_preview, ExistingNames, Preview,
    PreviewCounts, RenamePreview, RenameStatus,
};
pub use scan::{collect_files, FileSource, WalkdirSource};
pub use settings::{ApplyMode, MatchMode, RenameSettings, ReplaceMode};
pub use transform::transform;
