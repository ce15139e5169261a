use bulkren_core::{ApplyMode, MatchMode, Preview};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    Table,
    Summary,
    Json,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::Json => Self::Json,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for bulkren_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Where in the stem the find text may match
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AtArg {
    Anywhere,
    Prefix,
    Suffix,
}

impl From<AtArg> for ApplyMode {
    fn from(arg: AtArg) -> Self {
        match arg {
            AtArg::Anywhere => Self::Anywhere,
            AtArg::Prefix => Self::PrefixOnly,
            AtArg::Suffix => Self::SuffixOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MatchArg {
    Contains,
    StartsWith,
    EndsWith,
    Exact,
}

impl From<MatchArg> for MatchMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Contains => Self::Contains,
            MatchArg::StartsWith => Self::StartsWith,
            MatchArg::EndsWith => Self::EndsWith,
            MatchArg::Exact => Self::Exact,
        }
    }
}
