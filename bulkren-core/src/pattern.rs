use crate::settings::ApplyMode;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use thiserror::Error;

/// Errors produced while compiling a find pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Empty find pattern")]
    EmptyPattern,
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl PatternError {
    fn invalid(pattern: &str, err: &regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Compile a user-supplied regex, anchored according to `apply_mode`.
///
/// The raw pattern is validated on its own before anchoring, so text such as
/// `a)(b` is rejected even though `^(?:a)(b)` would compile.
pub fn build_replace_regex(
    find: &str,
    apply_mode: ApplyMode,
    case_sensitive: bool,
) -> Result<Regex, PatternError> {
    if find.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let raw = compile(find, case_sensitive).map_err(|e| PatternError::invalid(find, &e))?;

    match apply_mode {
        ApplyMode::Anywhere => Ok(raw),
        ApplyMode::PrefixOnly | ApplyMode::SuffixOnly => {
            compile(&anchor(find, apply_mode), case_sensitive)
                .map_err(|e| PatternError::invalid(find, &e))
        },
    }
}

/// Compile literal find text into an anchored, escaped regex
pub fn build_literal_regex(
    find: &str,
    apply_mode: ApplyMode,
    case_sensitive: bool,
) -> Result<Regex, PatternError> {
    if find.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let escaped = regex::escape(find);
    compile(&anchor(&escaped, apply_mode), case_sensitive)
        .map_err(|e| PatternError::invalid(find, &e))
}

/// Rewrite a replacement so group references read the way users type them.
///
/// `$N` is group `N` followed by literal text (`$1_LOD1` keeps `_LOD1`),
/// `$&` is the whole match, `$$` and `${name}` pass through, and any other
/// `$` is a literal dollar sign.
pub fn normalize_replacement(replace: &str) -> Cow<'_, str> {
    if !replace.contains('$') {
        return Cow::Borrowed(replace);
    }

    let mut out = String::with_capacity(replace.len() + 8);
    let mut rest = replace;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('$') {
            out.push_str("$$");
            rest = after;
        } else if let Some(after) = tail.strip_prefix('&') {
            out.push_str("${0}");
            rest = after;
        } else if let Some(end) = tail.strip_prefix('{').and_then(|_| tail.find('}')) {
            out.push('$');
            out.push_str(&tail[..=end]);
            rest = &tail[end + 1..];
        } else {
            let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                out.push_str("${");
                out.push_str(&tail[..digits]);
                out.push('}');
            } else {
                out.push_str("$$");
            }
            rest = &tail[digits..];
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn anchor(pattern: &str, apply_mode: ApplyMode) -> String {
    match apply_mode {
        ApplyMode::Anywhere => pattern.to_string(),
        ApplyMode::PrefixOnly => format!("^(?:{})", pattern),
        ApplyMode::SuffixOnly => format!("(?:{})$", pattern),
    }
}

fn compile(pattern: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
}
