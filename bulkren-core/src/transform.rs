//! Name transformation: one stem in, one stem out.
//!
//! Everything here is a pure function of the stem and the settings. A find
//! pattern that does not compile degrades to "leave the stem as it is"; it is
//! never an error for the caller.

use crate::pattern::{build_literal_regex, build_replace_regex, normalize_replacement};
use crate::settings::{ApplyMode, RenameSettings, ReplaceMode};
use regex::NoExpand;

/// Compute the new stem for `old_stem` under `settings`
pub fn transform(old_stem: &str, settings: &RenameSettings) -> String {
    if old_stem.is_empty() {
        return String::new();
    }

    let replaced = match settings.replace_mode {
        ReplaceMode::PlainText => replace_plain(old_stem, settings),
        ReplaceMode::Regex => replace_regex(old_stem, settings),
    };

    decorate(replaced, settings)
}

fn replace_plain(stem: &str, settings: &RenameSettings) -> String {
    let find = settings.find_text.as_str();
    let replace = settings.replace_text.as_str();

    if find.is_empty() {
        return stem.to_string();
    }

    if !settings.case_sensitive {
        return replace_plain_ignore_case(stem, find, replace, settings.apply_mode);
    }

    match settings.apply_mode {
        ApplyMode::Anywhere => stem.replace(find, replace),
        ApplyMode::PrefixOnly => stem
            .strip_prefix(find)
            .map_or_else(|| stem.to_string(), |rest| format!("{}{}", replace, rest)),
        ApplyMode::SuffixOnly => stem
            .strip_suffix(find)
            .map_or_else(|| stem.to_string(), |head| format!("{}{}", head, replace)),
    }
}

fn replace_plain_ignore_case(stem: &str, find: &str, replace: &str, apply_mode: ApplyMode) -> String {
    let Ok(regex) = build_literal_regex(find, apply_mode, false) else {
        return stem.to_string();
    };

    match apply_mode {
        ApplyMode::Anywhere => regex.replace_all(stem, NoExpand(replace)).into_owned(),
        ApplyMode::PrefixOnly | ApplyMode::SuffixOnly => {
            regex.replacen(stem, 1, NoExpand(replace)).into_owned()
        },
    }
}

fn replace_regex(stem: &str, settings: &RenameSettings) -> String {
    if settings.find_text.is_empty() {
        return stem.to_string();
    }

    let regex = match build_replace_regex(
        &settings.find_text,
        settings.apply_mode,
        settings.case_sensitive,
    ) {
        Ok(regex) => regex,
        Err(err) => {
            tracing::debug!("keeping '{}' unchanged: {}", stem, err);
            return stem.to_string();
        },
    };

    let replacement = normalize_replacement(&settings.replace_text);
    let replace: &str = &replacement;
    match settings.apply_mode {
        ApplyMode::Anywhere => regex.replace_all(stem, replace).into_owned(),
        ApplyMode::PrefixOnly | ApplyMode::SuffixOnly => {
            regex.replacen(stem, 1, replace).into_owned()
        },
    }
}

/// Whitespace replacement, then prefix, then suffix
fn decorate(stem: String, settings: &RenameSettings) -> String {
    let mut stem = if settings.replace_whitespace {
        collapse_whitespace(&stem, &settings.whitespace_replacement)
    } else {
        stem
    };

    if !settings.add_prefix.is_empty() {
        stem.insert_str(0, &settings.add_prefix);
    }
    if !settings.add_suffix.is_empty() {
        stem.push_str(&settings.add_suffix);
    }

    stem
}

/// Replace each run of whitespace with `replacement`
fn collapse_whitespace(stem: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;

    for ch in stem.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push_str(replacement);
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }

    out
}
