use anyhow::Result;
use bulkren_core::{
    apply_previews_operation, preview_operation, write_preview, FsMover, OutputFormatter,
    Preview, RenamePreview, RenameSettings, RenameStatus,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_apply(
    root: &Path,
    settings: &RenameSettings,
    format: Preview,
    dry_run: bool,
    yes: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let preview = preview_operation(root, settings)?;
    let json = output == OutputFormat::Json;
    let show = !quiet && !json;

    if show {
        if format == Preview::None {
            print!("{}", preview.format_summary());
        } else {
            write_preview(&preview.previews, format, Some(root), Some(use_color))?;
        }
    }

    if dry_run {
        if json && !quiet {
            println!("{}", preview.format_json());
        }
        return Ok(());
    }

    let work = has_work(&preview.previews, settings);
    if !work && !json {
        if show {
            println!("Nothing to rename.");
        }
        return Ok(());
    }

    if work && !yes {
        // stdout carries only the JSON document
        let confirmed = if json {
            confirm(&mut io::stdin().lock(), &mut io::stderr())?
        } else {
            confirm(&mut io::stdin().lock(), &mut io::stdout())?
        };
        if !confirmed {
            if json {
                eprintln!("Operation cancelled.");
            } else {
                println!("Operation cancelled.");
            }
            return Ok(());
        }
    }

    let result = apply_previews_operation(root, &preview.previews, settings, &mut FsMover);

    if !quiet {
        print!("{}", result.format(output.into()));
        if json {
            println!();
        }
    }

    Ok(())
}

/// Whether any preview would reach the mover under `settings`
fn has_work(previews: &[RenamePreview], settings: &RenameSettings) -> bool {
    previews.iter().any(|preview| {
        preview.will_change()
            || (!settings.skip_if_collision && preview.status == RenameStatus::Collision)
    })
}

fn confirm<R: BufRead, W: Write>(reader: &mut R, prompt: &mut W) -> Result<bool> {
    write!(prompt, "Apply these renames? [y/N]: ")?;
    prompt.flush()?;

    let mut response = String::new();
    reader.read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
