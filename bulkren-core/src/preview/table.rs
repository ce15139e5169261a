use super::{count_statuses, display_folder, RenamePreview, RenameStatus};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};
use std::path::Path;

fn status_color(status: RenameStatus) -> Color {
    match status {
        RenameStatus::WillRename => Color::Green,
        RenameStatus::NoChange => Color::DarkGrey,
        RenameStatus::Collision => Color::Red,
    }
}

/// Render previews as a table with a totals footer
pub fn render_table(previews: &[RenamePreview], root: Option<&Path>, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Folder").fg(Color::Cyan),
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Folder", "Old name", "New name", "Status"]);
    }

    for preview in previews {
        let folder = display_folder(&preview.path, root);
        let new_name = if preview.status == RenameStatus::NoChange {
            String::new()
        } else {
            format!("→ {}", preview.new_stem)
        };

        if use_color {
            table.add_row(vec![
                Cell::new(&folder),
                Cell::new(&preview.old_stem),
                Cell::new(&new_name).fg(Color::Magenta),
                Cell::new(preview.status.label()).fg(status_color(preview.status)),
            ]);
        } else {
            table.add_row(vec![
                folder.as_str(),
                preview.old_stem.as_str(),
                new_name.as_str(),
                preview.status.label(),
            ]);
        }
    }

    let counts = count_statuses(previews);
    let totals = format!(
        "{} rename, {} unchanged, {} collisions",
        counts.will_rename, counts.no_change, counts.collisions
    );

    if use_color {
        table.add_row(vec![
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
        ]);
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(format!("{} files", counts.total)).fg(Color::White),
            Cell::new(""),
            Cell::new(totals).fg(Color::White),
        ]);
    } else {
        table.add_row(vec!["─────────", "─────────", "─────────", "─────────"]);
        table.add_row(vec![
            "TOTALS",
            &format!("{} files", counts.total),
            "",
            &totals,
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_table_lists_every_preview() {
        let previews = vec![
            RenamePreview {
                path: PathBuf::from("/assets/SM_Weapon.fbx"),
                old_stem: "SM_Weapon".to_string(),
                new_stem: "Hero_Weapon".to_string(),
                status: RenameStatus::Collision,
            },
            RenamePreview {
                path: PathBuf::from("/assets/props/SM_Rock.fbx"),
                old_stem: "SM_Rock".to_string(),
                new_stem: "Hero_Rock".to_string(),
                status: RenameStatus::WillRename,
            },
        ];

        let output = render_table(&previews, Some(Path::new("/assets")), false);
        assert!(output.contains("SM_Weapon"));
        assert!(output.contains("→ Hero_Rock"));
        assert!(output.contains("Collision"));
        assert!(output.contains("props"));
        assert!(output.contains("1 rename, 0 unchanged, 1 collisions"));
    }
}
