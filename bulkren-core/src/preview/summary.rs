use super::{count_statuses, display_folder, RenamePreview, RenameStatus};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::path::Path;

/// Render previews as one line per file, grouped under a header
pub fn render_summary(previews: &[RenamePreview], root: Option<&Path>, use_color: bool) -> String {
    let mut output = String::new();
    let counts = count_statuses(previews);

    writeln!(output, "[RENAME PREVIEW]").unwrap();
    writeln!(output, "Files: {}", counts.total).unwrap();
    writeln!(output, "Will rename: {}", counts.will_rename).unwrap();
    writeln!(output, "No change: {}", counts.no_change).unwrap();
    writeln!(output, "Collisions: {}", counts.collisions).unwrap();

    if previews.is_empty() {
        return output;
    }

    writeln!(output).unwrap();
    for preview in previews {
        let folder = display_folder(&preview.path, root);
        let label = if use_color {
            let color = match preview.status {
                RenameStatus::WillRename => AnsiColor::Green,
                RenameStatus::NoChange => AnsiColor::DarkGray,
                RenameStatus::Collision => AnsiColor::Red,
            };
            color.paint(preview.status.label()).to_string()
        } else {
            preview.status.label().to_string()
        };

        match preview.status {
            RenameStatus::NoChange => {
                writeln!(output, "{}: {}/{}", label, folder, preview.old_stem).unwrap();
            },
            RenameStatus::WillRename | RenameStatus::Collision => {
                writeln!(
                    output,
                    "{}: {}/{} -> {}",
                    label, folder, preview.old_stem, preview.new_stem
                )
                .unwrap();
            },
        }
    }

    output
}
