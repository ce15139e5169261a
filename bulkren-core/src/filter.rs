use crate::settings::{MatchMode, RenameSettings};

/// Decide whether a stem enters the batch.
///
/// Only consulted when `use_filter` is set. An empty filter text matches
/// every stem regardless of the match mode.
pub fn matches_filter(stem: &str, settings: &RenameSettings) -> bool {
    let needle = settings.filter_text.as_str();
    if needle.is_empty() {
        return true;
    }

    if settings.case_sensitive {
        evaluate(settings.filter_match, stem, needle)
    } else {
        evaluate(
            settings.filter_match,
            &stem.to_lowercase(),
            &needle.to_lowercase(),
        )
    }
}

fn evaluate(mode: MatchMode, haystack: &str, needle: &str) -> bool {
    match mode {
        MatchMode::Contains => haystack.contains(needle),
        MatchMode::StartsWith => haystack.starts_with(needle),
        MatchMode::EndsWith => haystack.ends_with(needle),
        MatchMode::Exact => haystack == needle,
    }
}
