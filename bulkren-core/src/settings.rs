use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the filter text is compared against a file stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    #[default]
    Contains,
    StartsWith,
    EndsWith,
    Exact,
}

/// Where inside the stem the find text is allowed to act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyMode {
    #[default]
    Anywhere,
    PrefixOnly,
    SuffixOnly,
}

/// Whether the find text is literal or a regular expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceMode {
    #[default]
    PlainText,
    Regex,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contains" => Ok(Self::Contains),
            "starts-with" | "startswith" | "prefix" => Ok(Self::StartsWith),
            "ends-with" | "endswith" | "suffix" => Ok(Self::EndsWith),
            "exact" => Ok(Self::Exact),
            _ => Err(format!("Invalid match mode: {}", s)),
        }
    }
}

impl FromStr for ApplyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anywhere" => Ok(Self::Anywhere),
            "prefix" | "prefix-only" => Ok(Self::PrefixOnly),
            "suffix" | "suffix-only" => Ok(Self::SuffixOnly),
            _ => Err(format!("Invalid apply mode: {}", s)),
        }
    }
}

impl FromStr for ReplaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "plain-text" | "text" => Ok(Self::PlainText),
            "regex" => Ok(Self::Regex),
            _ => Err(format!("Invalid replace mode: {}", s)),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Contains => "contains",
            Self::StartsWith => "starts-with",
            Self::EndsWith => "ends-with",
            Self::Exact => "exact",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Anywhere => "anywhere",
            Self::PrefixOnly => "prefix-only",
            Self::SuffixOnly => "suffix-only",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PlainText => "plain-text",
            Self::Regex => "regex",
        };
        f.write_str(s)
    }
}

/// Full configuration for one preview/apply run.
///
/// A value of this type is treated as a snapshot: previews are always rebuilt
/// from scratch when any field changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameSettings {
    /// Descend into subdirectories when enumerating files
    pub include_subfolders: bool,
    /// Comma-separated extensions, e.g. "fbx, .PNG"
    pub extension_filter: String,

    pub use_filter: bool,
    pub filter_match: MatchMode,
    pub filter_text: String,

    pub replace_mode: ReplaceMode,
    pub apply_mode: ApplyMode,
    /// Shared by the filter and the find/replace step
    pub case_sensitive: bool,
    pub find_text: String,
    pub replace_text: String,

    pub add_prefix: String,
    pub add_suffix: String,
    pub replace_whitespace: bool,
    pub whitespace_replacement: String,

    pub skip_if_no_change: bool,
    pub skip_if_collision: bool,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            include_subfolders: true,
            extension_filter: String::new(),
            use_filter: false,
            filter_match: MatchMode::Contains,
            filter_text: String::new(),
            replace_mode: ReplaceMode::PlainText,
            apply_mode: ApplyMode::Anywhere,
            case_sensitive: true,
            find_text: String::new(),
            replace_text: String::new(),
            add_prefix: String::new(),
            add_suffix: String::new(),
            replace_whitespace: false,
            whitespace_replacement: "_".to_string(),
            skip_if_no_change: true,
            skip_if_collision: true,
        }
    }
}

impl RenameSettings {
    /// Normalized extension list from `extension_filter`.
    ///
    /// Tokens are lowercased and always carry a leading dot. An empty list
    /// means every extension is accepted.
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = Vec::new();
        for token in self.extension_filter.split(',') {
            let token = token.trim();
            if token.is_empty() || token == "." {
                continue;
            }
            let lowered = token.to_lowercase();
            let normalized = if lowered.starts_with('.') {
                lowered
            } else {
                format!(".{}", lowered)
            };
            if !extensions.contains(&normalized) {
                extensions.push(normalized);
            }
        }
        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenameSettings::default();
        assert!(settings.include_subfolders);
        assert!(settings.case_sensitive);
        assert!(settings.skip_if_no_change);
        assert!(settings.skip_if_collision);
        assert!(!settings.use_filter);
        assert_eq!(settings.filter_match, MatchMode::Contains);
        assert_eq!(settings.apply_mode, ApplyMode::Anywhere);
        assert_eq!(settings.replace_mode, ReplaceMode::PlainText);
        assert_eq!(settings.whitespace_replacement, "_");
    }

    #[test]
    fn test_extensions_normalized() {
        let settings = RenameSettings {
            extension_filter: "fbx, .PNG,,  tga , .fbx".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.extensions(), vec![".fbx", ".png", ".tga"]);
    }

    #[test]
    fn test_extensions_empty() {
        let settings = RenameSettings {
            extension_filter: " , ".to_string(),
            ..Default::default()
        };
        assert!(settings.extensions().is_empty());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("starts-with".parse::<MatchMode>(), Ok(MatchMode::StartsWith));
        assert_eq!("EXACT".parse::<MatchMode>(), Ok(MatchMode::Exact));
        assert_eq!("prefix".parse::<ApplyMode>(), Ok(ApplyMode::PrefixOnly));
        assert_eq!("suffix-only".parse::<ApplyMode>(), Ok(ApplyMode::SuffixOnly));
        assert_eq!("regex".parse::<ReplaceMode>(), Ok(ReplaceMode::Regex));
        assert!("sideways".parse::<ApplyMode>().is_err());
    }

    #[test]
    fn test_partial_settings_deserialize() {
        let json = r#"{"find_text": "SM_", "apply_mode": "prefix-only"}"#;
        let settings: RenameSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.find_text, "SM_");
        assert_eq!(settings.apply_mode, ApplyMode::PrefixOnly);
        assert!(settings.skip_if_collision);
    }
}
