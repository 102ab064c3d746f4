use crate::config::GeneratorConfig;
use crate::presets::{self, CatalogEntry, RunSummary};
use crate::ui;
use crate::{log_debug, logger};
use anyhow::{Context, bail};
use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgGroup, Parser, crate_version};
use colored::Colorize;
use std::path::PathBuf;

/// CLI structure defining the available flags
#[derive(Parser, Debug)]
#[command(
    author,
    version = crate_version!(),
    about = "preset-gen: theme preset catalog to OKLCH stylesheet and metadata",
    long_about = "Reads a catalog of theme presets, completes each one from the default theme, converts every color to OKLCH and writes a stylesheet plus a typed metadata module.",
    disable_version_flag = true,
    styles = get_styles(),
    group(ArgGroup::new("mode").args(["check", "list"])),
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path to a configuration file (defaults to ./presets.toml when present)
    #[arg(short = 'c', long = "config", help = "Path to a presets.toml configuration file")]
    pub config: Option<PathBuf>,

    /// Verify the generated files are current without writing them
    #[arg(long = "check", help = "Exit non-zero if the generated files are out of date")]
    pub check: bool,

    /// Print the catalog and which presets are selected
    #[arg(long = "list", help = "List catalog presets and exit")]
    pub list: bool,

    /// Specify a log file path
    #[arg(long = "log-file", help = "Append debug logs and span timings to a file")]
    pub log_file: Option<PathBuf>,

    /// Show info and debug logs on stderr
    #[arg(long = "verbose", help = "Show info and debug logs on stderr")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Display the version
    #[arg(short = 'v', long = "version", help = "Display the version")]
    pub version: bool,
}

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and run the requested mode
pub fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    configure_output(&cli)?;

    let config = GeneratorConfig::load(cli.config.as_deref())?;
    log_debug!("Using configuration: {:?}", config);

    if cli.list {
        report_catalog(&presets::list(&config)?);
        Ok(())
    } else if cli.check {
        handle_check(&config)
    } else {
        report_run(&presets::run(&config)?);
        Ok(())
    }
}

fn configure_output(cli: &Cli) -> anyhow::Result<()> {
    if let Err(e) = logger::init() {
        ui::print_warning(&format!("Logging unavailable: {e}"));
    }

    if let Some(path) = &cli.log_file {
        logger::set_log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
    }

    if cli.verbose {
        logger::set_verbose_logging(true);
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    Ok(())
}

fn handle_check(config: &GeneratorConfig) -> anyhow::Result<()> {
    let stale = presets::check(config)?;
    if stale.is_empty() {
        ui::print_success("Generated files are up to date");
        return Ok(());
    }

    for path in &stale {
        ui::print_warning(&format!("Out of date: {}", path.display()));
    }
    bail!(
        "{} generated file(s) are out of date; run `{}` to regenerate",
        stale.len(),
        config.regenerate_command
    )
}

fn report_run(summary: &RunSummary) {
    ui::print_info(&format!("Found {} presets", summary.found));
    ui::print_info(&format!(
        "Filtered to {} presets (+ default)",
        summary.selected.len()
    ));
    for (name, label) in &summary.selected {
        ui::print_message(&format!("  - {} ({})", name.bold(), label));
    }
    for path in &summary.written {
        ui::print_success(&format!("Wrote {}", path.display()));
    }
}

fn report_catalog(entries: &[CatalogEntry]) {
    for entry in entries {
        let marker = if entry.selected {
            "*".green().bold()
        } else {
            " ".normal()
        };
        let dark = if entry.has_dark { "" } else { " [light only]" };
        ui::print_message(&format!(
            "{marker} {} ({}){}",
            entry.name,
            entry.label,
            dark.dimmed()
        ));
    }
    ui::print_info(&format!(
        "{} presets, {} selected",
        entries.len(),
        entries.iter().filter(|e| e.selected).count()
    ));
}
