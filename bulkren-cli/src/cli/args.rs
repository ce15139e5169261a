use bulkren_core::{RenameSettings, ReplaceMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{AtArg, MatchArg, OutputFormat, PreviewArg};

/// Preview and apply bulk file renames with find/replace rules
#[derive(Parser, Debug)]
#[command(name = "bulkren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// Rename rule arguments shared by preview and apply
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Text to find in each file name (without extension)
    #[arg(long, default_value = "")]
    pub find: String,

    /// Replacement text (with --regex: $1, ${name} and $& insert groups, $$ is a literal $)
    #[arg(long, default_value = "")]
    pub replace: String,

    /// Treat --find as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Restrict where --find may match
    #[arg(long, value_enum, default_value = "anywhere")]
    pub at: AtArg,

    /// Match --find and --filter case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Only rename files whose name matches this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// How --filter is compared against the file name
    #[arg(long = "match", value_enum, default_value = "contains", requires = "filter")]
    pub match_mode: MatchArg,

    /// Only consider these extensions (comma-separated, e.g. "fbx,png")
    #[arg(long, value_name = "LIST")]
    pub ext: Option<String>,

    /// Only scan the top-level folder
    #[arg(long)]
    pub no_subfolders: bool,

    /// Text to prepend to every new name
    #[arg(long, value_name = "TEXT")]
    pub add_prefix: Option<String>,

    /// Text to append to every new name (before the extension)
    #[arg(long, value_name = "TEXT")]
    pub add_suffix: Option<String>,

    /// Replace runs of whitespace (with "_" unless a value is given)
    #[arg(
        long,
        value_name = "WITH",
        num_args = 0..=1,
        default_missing_value = "_"
    )]
    pub replace_whitespace: Option<String>,

    /// Also rename files whose name would not change
    #[arg(long)]
    pub allow_unchanged: bool,

    /// Rename files even when the new name is already taken in their folder
    #[arg(long)]
    pub allow_collisions: bool,
}

impl RuleArgs {
    /// Layer these flags over `settings` (usually seeded from config)
    pub fn apply_to(&self, settings: &mut RenameSettings) {
        settings.find_text.clone_from(&self.find);
        settings.replace_text.clone_from(&self.replace);
        settings.replace_mode = if self.regex {
            ReplaceMode::Regex
        } else {
            ReplaceMode::PlainText
        };
        settings.apply_mode = self.at.into();

        if self.ignore_case {
            settings.case_sensitive = false;
        }
        if self.no_subfolders {
            settings.include_subfolders = false;
        }
        if self.allow_unchanged {
            settings.skip_if_no_change = false;
        }
        if self.allow_collisions {
            settings.skip_if_collision = false;
        }

        if let Some(ref text) = self.filter {
            settings.use_filter = true;
            settings.filter_text.clone_from(text);
            settings.filter_match = self.match_mode.into();
        }
        if let Some(ref ext) = self.ext {
            settings.extension_filter.clone_from(ext);
        }
        if let Some(ref prefix) = self.add_prefix {
            settings.add_prefix.clone_from(prefix);
        }
        if let Some(ref suffix) = self.add_suffix {
            settings.add_suffix.clone_from(suffix);
        }
        if let Some(ref with) = self.replace_whitespace {
            settings.replace_whitespace = true;
            settings.whitespace_replacement.clone_from(with);
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what each file would be renamed to without touching anything
    Preview {
        /// Folder containing the files to rename
        root: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Preview format (defaults to config, then table)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Preview, confirm, then rename the files
    Apply {
        /// Folder containing the files to rename
        root: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Preview format shown before the confirmation prompt
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Show the preview only; rename nothing
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes", env = "BULKREN_YES")]
        yes: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkren_core::{ApplyMode, MatchMode};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn rules_of(cli: Cli) -> RuleArgs {
        match cli.command {
            Commands::Preview { rules, .. } | Commands::Apply { rules, .. } => rules,
            Commands::Version { .. } => panic!("no rules on version"),
        }
    }

    #[test]
    fn test_rule_flags_map_to_settings() {
        let cli = parse(&[
            "bulkren",
            "preview",
            "assets",
            "--find",
            "SM_",
            "--replace",
            "Hero_",
            "--at",
            "prefix",
            "--ignore-case",
            "--filter",
            "Weapon",
            "--match",
            "starts-with",
            "--ext",
            "fbx",
            "--no-subfolders",
            "--allow-collisions",
        ]);

        let mut settings = RenameSettings::default();
        rules_of(cli).apply_to(&mut settings);

        assert_eq!(settings.find_text, "SM_");
        assert_eq!(settings.replace_text, "Hero_");
        assert_eq!(settings.apply_mode, ApplyMode::PrefixOnly);
        assert_eq!(settings.replace_mode, ReplaceMode::PlainText);
        assert!(!settings.case_sensitive);
        assert!(settings.use_filter);
        assert_eq!(settings.filter_match, MatchMode::StartsWith);
        assert_eq!(settings.extension_filter, "fbx");
        assert!(!settings.include_subfolders);
        assert!(settings.skip_if_no_change);
        assert!(!settings.skip_if_collision);
    }

    #[test]
    fn test_replace_whitespace_default_value() {
        let cli = parse(&["bulkren", "preview", ".", "--replace-whitespace"]);
        let mut settings = RenameSettings::default();
        rules_of(cli).apply_to(&mut settings);
        assert!(settings.replace_whitespace);
        assert_eq!(settings.whitespace_replacement, "_");

        let cli = parse(&["bulkren", "preview", ".", "--replace-whitespace", "+"]);
        let mut settings = RenameSettings::default();
        rules_of(cli).apply_to(&mut settings);
        assert_eq!(settings.whitespace_replacement, "+");
    }

    #[test]
    fn test_flags_do_not_clobber_config_defaults() {
        let cli = parse(&["bulkren", "apply", ".", "--find", "a"]);
        let mut settings = RenameSettings {
            case_sensitive: false,
            skip_if_collision: false,
            ..Default::default()
        };
        rules_of(cli).apply_to(&mut settings);
        assert!(!settings.case_sensitive);
        assert!(!settings.skip_if_collision);
        assert!(!settings.use_filter);
    }

    #[test]
    fn test_match_requires_filter() {
        assert!(Cli::try_parse_from(["bulkren", "preview", ".", "--match", "exact"]).is_err());
    }

    #[test]
    fn test_root_is_required() {
        assert!(Cli::try_parse_from(["bulkren", "preview"]).is_err());
    }
}
