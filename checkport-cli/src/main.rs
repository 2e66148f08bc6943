// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! checkport CLI - export Pingdom check configurations to local files.
//!
//! # Examples
//!
//! ```bash
//! # Full export using appsettings.json / PINGDOM_* variables
//! checkport
//!
//! # Listing only, CSV and JSON, no prompt
//! checkport --export-mode summary --format both --auto
//!
//! # UptimeRobot import file, including paused checks
//! checkport -m uptimerobot --include-disabled -t "$TOKEN"
//!
//! # Only transaction checks, no delay between requests
//! checkport --no-uptime --delay 0
//! ```

mod output;
mod prompt;
mod settings;

use anyhow::Result;
use checkport_core::{ExportMode, OutputFormat};
use checkport_export::Exporter;
use checkport_fetch::{ClientSettings, PingdomClient};
use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::TextFormatter;

// ============================================================================
// CLI Definition
// ============================================================================

/// checkport - Pingdom check exporter.
#[derive(Debug, Parser)]
#[command(name = "checkport")]
#[command(about = "Export Pingdom check configurations for backup, migration and analysis")]
#[command(long_about = r#"
Exports Pingdom uptime and transaction checks to JSON/CSV files.

Export modes:
  • full         listing plus per-check details (default)
  • summary      listing only
  • uptimerobot  listing plus an UptimeRobot bulk-import CSV

Configuration is read from appsettings.json, then PINGDOM_* environment
variables, then command-line flags (later wins).

Examples:
  checkport                              # Full export
  checkport -m summary -f both -y        # Listing only, JSON + CSV, no prompt
  checkport -m uptimerobot               # UptimeRobot import file
"#)]
#[command(version)]
pub struct Cli {
    /// Pingdom API token.
    #[arg(long, short = 't', value_name = "TOKEN")]
    pub api_token: Option<String>,

    /// API base URL.
    #[arg(long, short = 'u', value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory for exported files.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format: json, csv or both.
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Export mode: full, summary or uptimerobot.
    #[arg(long, short = 'm', value_name = "MODE")]
    pub export_mode: Option<ExportMode>,

    /// Export uptime checks.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub uptime: Option<bool>,

    /// Skip uptime checks.
    #[arg(long)]
    pub no_uptime: bool,

    /// Export transaction checks.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub transaction: Option<bool>,

    /// Skip transaction checks.
    #[arg(long)]
    pub no_transaction: bool,

    /// Request tags with the uptime listing.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub include_tags: Option<bool>,

    /// Don't request tags.
    #[arg(long)]
    pub no_tags: bool,

    /// Request teams with uptime details.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub include_teams: Option<bool>,

    /// Don't request teams.
    #[arg(long)]
    pub no_teams: bool,

    /// Also export paused and failing uptime checks.
    #[arg(long)]
    pub include_disabled: bool,

    /// Delay before every API request, in milliseconds.
    #[arg(long, short = 'd', value_name = "MS", allow_negative_numbers = true)]
    pub delay: Option<i64>,

    /// Don't ask for confirmation.
    #[arg(long, short = 'y')]
    pub auto: bool,

    /// Verbose output (show debug info).
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Config file (JSON, or YAML by extension).
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(
                "checkport_cli=debug,checkport_export=debug,checkport_fetch=debug,checkport_store=debug,checkport_core=debug,warn",
            )
        } else {
            EnvFilter::new("checkport_cli=info,checkport_export=info,warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match run(&cli).await {
        Ok(ExitCode::Success) => {}
        Ok(code) => std::process::exit(code as i32),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ExitCode::Error as i32);
        }
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<ExitCode> {
    let config = settings::load(cli).await?;
    config.validate()?;
    debug!(mode = %config.export_mode, format = %config.output_format, "Resolved configuration");

    let formatter = TextFormatter::new(std::io::stdout().is_terminal());

    if !config.auto_mode {
        println!("{}", formatter.format_config(&config));
        let confirmed = prompt::confirm(&mut std::io::stdin().lock(), &mut std::io::stdout())?;
        if !confirmed {
            println!("Export cancelled.");
            return Ok(ExitCode::Success);
        }
    }

    let client = PingdomClient::new(ClientSettings::from_config(&config))?;
    let exporter = Exporter::new(Arc::new(client), config);

    match exporter.run().await {
        Ok(summary) => {
            println!("{}", formatter.format_report(&summary));
            Ok(if summary.has_errors() {
                ExitCode::Error
            } else {
                ExitCode::Success
            })
        }
        Err(e) => {
            if let Some(summary) = e.summary() {
                println!("{}", formatter.format_report(summary));
            }
            eprintln!("{}", formatter.format_error(&e.to_string()));
            Ok(ExitCode::Error)
        }
    }
}
