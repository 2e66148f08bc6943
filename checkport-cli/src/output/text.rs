//! Text output: the configuration banner and the run report.

use chrono::Local;
use checkport_core::{ExportConfig, ExportSummary};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the resolved configuration. The token is masked.
    pub fn format_config(&self, config: &ExportConfig) -> String {
        let mut lines = Vec::new();

        lines.push(self.bold("Pingdom Export Configuration"));
        lines.push("─".repeat(40));
        lines.push(format!("API token:            {}", config.masked_token()));
        lines.push(format!("Base URL:             {}", config.base_url));
        lines.push(format!(
            "Output directory:     {}",
            config.output_directory.display()
        ));
        lines.push(format!("Output format:        {}", config.output_format));
        lines.push(format!("Export mode:          {}", config.export_mode));
        lines.push(format!("Uptime checks:        {}", yes_no(config.export_uptime_checks)));
        lines.push(format!(
            "Transaction checks:   {}",
            yes_no(config.export_transaction_checks)
        ));
        lines.push(format!("Include tags:         {}", yes_no(config.include_tags)));
        lines.push(format!("Include teams:        {}", yes_no(config.include_teams)));
        lines.push(format!(
            "Include disabled:     {}",
            yes_no(config.include_disabled_checks)
        ));
        lines.push(format!("Request delay:        {} ms", config.request_delay_ms));

        lines.join("\n")
    }

    /// Formats the report printed after a run.
    pub fn format_report(&self, summary: &ExportSummary) -> String {
        let mut lines = Vec::new();

        let title = if summary.has_errors() {
            self.red("Export finished with errors")
        } else {
            self.green("Export completed successfully")
        };
        lines.push(String::new());
        lines.push(self.bold(&title));
        lines.push("─".repeat(40));
        lines.push(format!(
            "Export date:          {}",
            summary
                .export_date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!(
            "Duration:             {:.2} seconds",
            summary.duration_seconds
        ));
        lines.push(format!(
            "Uptime checks:        {}",
            summary.uptime_checks_exported
        ));
        lines.push(format!(
            "Transaction checks:   {}",
            summary.transaction_checks_exported
        ));
        lines.push(format!(
            "Total checks:         {}",
            self.bold(&summary.total_checks_exported.to_string())
        ));

        if !summary.warnings.is_empty() {
            lines.push(String::new());
            lines.push(self.yellow(&format!("Warnings ({}):", summary.warnings.len())));
            for warning in &summary.warnings {
                lines.push(format!("  • {warning}"));
            }
        }

        if !summary.errors.is_empty() {
            lines.push(String::new());
            lines.push(self.red(&format!("Errors ({}):", summary.errors.len())));
            for error in &summary.errors {
                lines.push(format!("  • {error}"));
            }
        }

        lines.join("\n")
    }

    /// Formats a fatal error message.
    pub fn format_error(&self, error: &str) -> String {
        format!("{} {}", self.red("Export failed:"), self.dim(error))
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
