//! Resolves the run configuration from file, environment and flags.

use anyhow::{Context, Result};
use checkport_core::ExportConfig;
use checkport_store::ConfigLayer;
use tracing::debug;

use crate::Cli;

/// Loads and merges every configuration layer.
///
/// An explicit `--config` file must exist; the default lookup is skipped
/// silently when nothing is found.
pub async fn load(cli: &Cli) -> Result<ExportConfig> {
    let file = match &cli.config {
        Some(path) => ConfigLayer::load_file(path)
            .await
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => ConfigLayer::load_default().await?,
    };
    let env = ConfigLayer::from_env(std::env::vars())?;

    resolve(file, env, cli)
}

/// Merges the layers, lowest precedence first.
pub fn resolve(file: ConfigLayer, env: ConfigLayer, cli: &Cli) -> Result<ExportConfig> {
    let mut config = file.merge(env).merge(cli_layer(cli)).resolve()?;
    config.auto_mode = cli.auto;
    config.verbose_mode = cli.verbose;
    debug!(output_dir = %config.output_directory.display(), "Configuration resolved");
    Ok(config)
}

/// Converts command-line flags into a layer.
pub fn cli_layer(cli: &Cli) -> ConfigLayer {
    ConfigLayer {
        api_token: cli.api_token.clone(),
        base_url: cli.base_url.clone(),
        output_directory: cli.output_dir.clone(),
        export_uptime_checks: toggle(cli.uptime, cli.no_uptime),
        export_transaction_checks: toggle(cli.transaction, cli.no_transaction),
        include_tags: toggle(cli.include_tags, cli.no_tags),
        include_teams: toggle(cli.include_teams, cli.no_teams),
        include_disabled_checks: cli.include_disabled.then_some(true),
        output_format: cli.format.map(|f| f.to_string()),
        export_mode: cli.export_mode.map(|m| m.to_string()),
        request_delay_ms: cli.delay,
    }
}

// An explicit value wins over the `--no-*` twin.
fn toggle(explicit: Option<bool>, negated: bool) -> Option<bool> {
    explicit.or(negated.then_some(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkport_core::{ExportMode, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("checkport").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_layers() {
        let cli = parse(&[]);
        let config = resolve(ConfigLayer::default(), ConfigLayer::default(), &cli).unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_negated_flags() {
        let cli = parse(&["--no-uptime", "--no-tags", "--no-teams", "--no-transaction"]);
        let config = resolve(ConfigLayer::default(), ConfigLayer::default(), &cli).unwrap();
        assert!(!config.export_uptime_checks);
        assert!(!config.export_transaction_checks);
        assert!(!config.include_tags);
        assert!(!config.include_teams);
    }

    #[test]
    fn test_explicit_value_beats_negation() {
        let cli = parse(&["--uptime", "true", "--no-uptime"]);
        assert_eq!(cli_layer(&cli).export_uptime_checks, Some(true));

        let cli = parse(&["--include-tags", "no"]);
        assert_eq!(cli_layer(&cli).include_tags, Some(false));
    }

    #[test]
    fn test_unset_flags_leave_lower_layers_alone() {
        let file = ConfigLayer {
            include_teams: Some(false),
            request_delay_ms: Some(250),
            ..Default::default()
        };
        let cli = parse(&[]);

        let config = resolve(file, ConfigLayer::default(), &cli).unwrap();
        assert!(!config.include_teams);
        assert_eq!(config.request_delay_ms, 250);
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let file = ConfigLayer {
            api_token: Some("file".into()),
            base_url: Some("https://file.example.com".into()),
            output_directory: Some(PathBuf::from("file-out")),
            ..Default::default()
        };
        let env = ConfigLayer {
            api_token: Some("env".into()),
            base_url: Some("https://env.example.com".into()),
            ..Default::default()
        };
        let cli = parse(&["-t", "cli", "-f", "both", "-m", "UPTIMEROBOT", "-d", "-5", "-y"]);

        let config = resolve(file, env, &cli).unwrap();
        assert_eq!(config.api_token, "cli");
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.output_directory, PathBuf::from("file-out"));
        assert_eq!(config.output_format, OutputFormat::Both);
        assert_eq!(config.export_mode, ExportMode::UptimeRobot);
        assert_eq!(config.request_delay_ms, -5);
        assert!(config.auto_mode);
    }

    #[test]
    fn test_include_disabled_flag() {
        let cli = parse(&["--include-disabled"]);
        let config = resolve(ConfigLayer::default(), ConfigLayer::default(), &cli).unwrap();
        assert!(config.include_disabled_checks);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["checkport", "--export-mode", "partial"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_explicit_missing_config_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.json");
        let cli = parse(&["--config", missing.to_str().unwrap()]);

        assert!(load(&cli).await.is_err());
    }

    #[tokio::test]
    async fn test_explicit_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(&path, "ExportMode: Summary\nIncludeTags: false\n").unwrap();
        let cli = parse(&["--config", path.to_str().unwrap(), "--include-tags", "true"]);

        let file = ConfigLayer::load_file(&path).await.unwrap();
        let config = resolve(file, ConfigLayer::default(), &cli).unwrap();
        assert_eq!(config.export_mode, ExportMode::Summary);
        assert!(config.include_tags);
    }
}
