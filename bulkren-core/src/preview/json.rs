use super::RenamePreview;

/// Render previews as pretty JSON
pub fn render_json(previews: &[RenamePreview]) -> String {
    serde_json::to_string_pretty(previews).unwrap_or_else(|_| "null".to_string())
}
