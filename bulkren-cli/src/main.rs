use anyhow::{Context, Result};
use bulkren_core::{
    build_replace_regex, Config, OutputFormatter, Preview, RenameSettings, ReplaceMode,
    VersionResult,
};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use std::str::FromStr;

mod apply;
mod cli;
mod logging;
mod preview;

use cli::{Cli, Commands, OutputFormat, PreviewArg, RuleArgs};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        Config::default()
    });

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    logging::init_logger(!cli.no_color && io::stderr().is_terminal());

    let result = match cli.command {
        Commands::Preview {
            root,
            rules,
            preview,
            output,
            quiet,
        } => {
            let settings = resolve_settings(&config, &rules);
            let format = resolve_format(&config, preview);
            preview::handle_preview(&root, &settings, format, use_color, output, quiet)
        },

        Commands::Apply {
            root,
            rules,
            preview,
            dry_run,
            yes,
            output,
            quiet,
        } => {
            let settings = resolve_settings(&config, &rules);
            let format = resolve_format(&config, preview);
            apply::handle_apply(
                &root, &settings, format, dry_run, yes, use_color, output, quiet,
            )
        },

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

/// 2 for invalid input (missing folder, bad values), 3 for everything else
fn exit_code_for(error: &anyhow::Error) -> i32 {
    let message = format!("{error:#}").to_lowercase();
    if message.contains("invalid") || message.contains("not found") {
        2
    } else {
        3
    }
}

/// Config defaults first, then command-line rule flags on top
fn resolve_settings(config: &Config, rules: &RuleArgs) -> RenameSettings {
    let mut settings = config.settings();
    rules.apply_to(&mut settings);
    tracing::debug!("resolved settings: {:?}", settings);
    warn_on_invalid_pattern(&settings);
    settings
}

fn resolve_format(config: &Config, preview: Option<PreviewArg>) -> Preview {
    preview.map_or_else(
        || Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Table),
        Into::into,
    )
}

/// A malformed regex leaves every name unchanged; say so up front
fn warn_on_invalid_pattern(settings: &RenameSettings) {
    if settings.replace_mode != ReplaceMode::Regex || settings.find_text.is_empty() {
        return;
    }
    if let Err(e) = build_replace_regex(
        &settings.find_text,
        settings.apply_mode,
        settings.case_sensitive,
    ) {
        eprintln!("Warning: {e}; no file names will change");
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "bulkren".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
