use anyhow::Result;
use bulkren_core::{preview_operation, write_preview, OutputFormatter, Preview, RenameSettings};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_preview(
    root: &Path,
    settings: &RenameSettings,
    format: Preview,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = preview_operation(root, settings)?;

    match output {
        OutputFormat::Json => {
            if !quiet {
                println!("{}", result.format_json());
            }
            return Ok(());
        },
        OutputFormat::Summary if quiet => return Ok(()),
        OutputFormat::Summary => {},
    }

    if result.previews.is_empty() {
        println!("No files to rename in {}", root.display());
        return Ok(());
    }

    if format == Preview::None {
        print!("{}", result.format_summary());
    } else {
        write_preview(&result.previews, format, Some(root), Some(use_color))?;
    }

    Ok(())
}
