//! Configuration layers.
//!
//! A [`ConfigLayer`] holds the settings one source provides. Layers are
//! merged lowest precedence first (file, then environment, then command
//! line) and applied on top of [`ExportConfig::default`].

use checkport_core::{ExportConfig, ExportMode, OutputFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::read_text;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "appsettings.json";

/// Prefix of recognised environment variables.
pub const ENV_PREFIX: &str = "PINGDOM_";

/// Settings provided by one configuration source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigLayer {
    /// API token.
    pub api_token: Option<String>,
    /// API base URL.
    pub base_url: Option<String>,
    /// Output directory.
    pub output_directory: Option<PathBuf>,
    /// Export uptime checks.
    pub export_uptime_checks: Option<bool>,
    /// Export transaction checks.
    pub export_transaction_checks: Option<bool>,
    /// Request tags in the uptime listing.
    pub include_tags: Option<bool>,
    /// Request teams in uptime details.
    pub include_teams: Option<bool>,
    /// Keep paused and unknown checks.
    pub include_disabled_checks: Option<bool>,
    /// `json`, `csv` or `both`.
    pub output_format: Option<String>,
    /// `summary`, `full` or `uptimerobot`.
    pub export_mode: Option<String>,
    /// Delay before each request; zero or less disables it.
    pub request_delay_ms: Option<i64>,
}

impl ConfigLayer {
    /// Candidate config files, in lookup order.
    ///
    /// The working directory first, then the user config directory.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("checkport").join(DEFAULT_CONFIG_FILE));
        }
        paths
    }

    /// Loads a config file. YAML when the extension is `.yaml`/`.yml`,
    /// JSON otherwise.
    pub async fn load_file(path: &Path) -> Result<Self, StoreError> {
        let content = read_text(path).await?;
        let layer = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        info!(path = %path.display(), "Loaded configuration file");
        Ok(layer)
    }

    /// Loads the first existing candidate file, or an empty layer.
    pub async fn load_default() -> Result<Self, StoreError> {
        for path in Self::candidate_paths() {
            if tokio::fs::try_exists(&path).await? {
                return Self::load_file(&path).await;
            }
        }
        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Builds a layer from `PINGDOM_*` variables.
    ///
    /// The part after the prefix is matched ignoring case and underscores,
    /// so `PINGDOM_ApiToken`, `PINGDOM_API_TOKEN` and `PINGDOM_APITOKEN`
    /// all set the token.
    pub fn from_env<I>(vars: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut layer = Self::default();

        for (name, value) in vars {
            let Some(key) = strip_prefix_ignore_case(&name, ENV_PREFIX) else {
                continue;
            };
            let key = key.replace('_', "").to_lowercase();

            match key.as_str() {
                "apitoken" => layer.api_token = Some(value),
                "baseurl" => layer.base_url = Some(value),
                "outputdirectory" => layer.output_directory = Some(PathBuf::from(value)),
                "exportuptimechecks" => layer.export_uptime_checks = Some(parse_bool(&name, &value)?),
                "exporttransactionchecks" => {
                    layer.export_transaction_checks = Some(parse_bool(&name, &value)?);
                }
                "includetags" => layer.include_tags = Some(parse_bool(&name, &value)?),
                "includeteams" => layer.include_teams = Some(parse_bool(&name, &value)?),
                "includedisabledchecks" => {
                    layer.include_disabled_checks = Some(parse_bool(&name, &value)?);
                }
                "outputformat" => layer.output_format = Some(value),
                "exportmode" => layer.export_mode = Some(value),
                "requestdelayms" => {
                    let delay = value.trim().parse().map_err(|_| {
                        StoreError::Config(format!("{name}: invalid integer '{value}'"))
                    })?;
                    layer.request_delay_ms = Some(delay);
                }
                _ => debug!(variable = %name, "Ignoring unknown environment variable"),
            }
        }

        Ok(layer)
    }

    /// Returns a layer where every value set in `over` wins.
    #[must_use]
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            api_token: over.api_token.or(self.api_token),
            base_url: over.base_url.or(self.base_url),
            output_directory: over.output_directory.or(self.output_directory),
            export_uptime_checks: over.export_uptime_checks.or(self.export_uptime_checks),
            export_transaction_checks: over
                .export_transaction_checks
                .or(self.export_transaction_checks),
            include_tags: over.include_tags.or(self.include_tags),
            include_teams: over.include_teams.or(self.include_teams),
            include_disabled_checks: over
                .include_disabled_checks
                .or(self.include_disabled_checks),
            output_format: over.output_format.or(self.output_format),
            export_mode: over.export_mode.or(self.export_mode),
            request_delay_ms: over.request_delay_ms.or(self.request_delay_ms),
        }
    }

    /// Writes every value this layer sets into `config`.
    pub fn apply(&self, config: &mut ExportConfig) -> Result<(), StoreError> {
        if let Some(token) = &self.api_token {
            config.api_token.clone_from(token);
        }
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(dir) = &self.output_directory {
            config.output_directory.clone_from(dir);
        }
        if let Some(v) = self.export_uptime_checks {
            config.export_uptime_checks = v;
        }
        if let Some(v) = self.export_transaction_checks {
            config.export_transaction_checks = v;
        }
        if let Some(v) = self.include_tags {
            config.include_tags = v;
        }
        if let Some(v) = self.include_teams {
            config.include_teams = v;
        }
        if let Some(v) = self.include_disabled_checks {
            config.include_disabled_checks = v;
        }
        if let Some(format) = &self.output_format {
            config.output_format = format.parse::<OutputFormat>()?;
        }
        if let Some(mode) = &self.export_mode {
            config.export_mode = mode.parse::<ExportMode>()?;
        }
        if let Some(delay) = self.request_delay_ms {
            config.request_delay_ms = delay;
        }
        Ok(())
    }

    /// Resolves the layer against the built-in defaults.
    pub fn resolve(&self) -> Result<ExportConfig, StoreError> {
        let mut config = ExportConfig::default();
        self.apply(&mut config)?;
        Ok(config)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &name[prefix.len()..])
}

fn parse_bool(name: &str, value: &str) -> Result<bool, StoreError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(StoreError::Config(format!("{name}: invalid boolean '{value}'"))),
    }
}
