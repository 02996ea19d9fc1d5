//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use http::HeaderValue;
use serde_json::{Map, Value};
use url::Url;

use crate::notifier::{EventType, ImpactLevel};

use super::cli::{Cli, Command, SendArgs};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
///
/// Neither `Debug` nor `Display` prints the API key.
pub struct ValidatedConfig {
    /// Base URL of the webhook service
    pub base_url: Url,

    /// API key (required)
    pub api_key: String,

    /// What to do with the service
    pub action: Action,

    /// Verbose logging enabled
    pub verbose: bool,
}

/// Service operation selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send one notification
    Send(SendOptions),
    /// Query the status endpoint
    Status,
}

/// Merged inputs for one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOptions {
    /// Email subject
    pub subject: String,
    /// Email body
    pub content: String,
    /// Classification
    pub event_type: EventType,
    /// Recipients; empty leaves the choice to the server
    pub to: Vec<String>,
    /// Impact level
    pub impact_level: Option<ImpactLevel>,
    /// Source application label
    pub source: Option<String>,
    /// Metadata entries
    pub metadata: Map<String, Value>,
    /// Files to attach
    pub attachments: Vec<PathBuf>,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("action", &self.action)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match &self.action {
            Action::Send(opts) => format!("send({})", opts.event_type),
            Action::Status => "status".to_string(),
        };

        write!(
            f,
            "Config {{ base_url: {}, api_key: <{} chars>, action: {} }}",
            self.base_url,
            self.api_key.chars().count(),
            action,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and the API key environment variable, which clap folds
    /// into the CLI value) take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is `init`
    /// - The API key is missing or not a valid header value
    /// - The base URL is invalid
    /// - A metadata entry or the TOML impact level is malformed
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let action = match &cli.command {
            Command::Send(args) => Action::Send(Self::build_send_options(args, toml)?),
            Command::Status => Action::Status,
            Command::Init { .. } => return Err(ConfigError::NotRunnable("init")),
        };

        let base_url = Self::resolve_base_url(cli, toml)?;
        let api_key = Self::resolve_api_key(cli, toml)?;

        Ok(Self {
            base_url,
            api_key,
            action,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// Uses `cli.config` when set, otherwise the per-user config file if it
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, defaults::config_path().as_deref())
    }

    /// Like [`ValidatedConfig::load`] with an explicit fallback path.
    ///
    /// The fallback is only read if it exists; an explicit `--config` path
    /// must exist.
    ///
    /// # Errors
    ///
    /// Same as [`ValidatedConfig::load`].
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .as_deref()
            .or_else(|| fallback.filter(|p| p.is_file()));

        let toml = match path {
            Some(path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let key = cli
            .api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.api_key.as_deref()))
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::API_KEY,
                    "Use --api-key, set MAIL_NOTIFIER_API_KEY, or set client.api_key in config file",
                )
            })?;

        HeaderValue::from_str(key).map_err(|e| ConfigError::InvalidApiKey {
            reason: e.to_string(),
        })?;

        Ok(key.to_string())
    }

    fn build_send_options(
        args: &SendArgs,
        toml: Option<&TomlConfig>,
    ) -> Result<SendOptions, ConfigError> {
        let file_defaults = toml.map(|t| &t.defaults);

        // CLI recipients replace TOML recipients entirely
        let to = if args.to.is_empty() {
            file_defaults.map(|d| d.to.clone()).unwrap_or_default()
        } else {
            args.to.clone()
        };

        let impact_level = match args.impact {
            Some(level) => Some(level.into()),
            None => file_defaults
                .and_then(|d| d.impact.as_deref())
                .map(parse_impact_level)
                .transpose()?,
        };

        let source = args
            .source
            .clone()
            .or_else(|| file_defaults.and_then(|d| d.source.clone()));

        let mut metadata = Map::new();
        for entry in &args.meta {
            let (key, value) = parse_metadata_entry(entry)?;
            metadata.insert(key, value);
        }

        Ok(SendOptions {
            subject: args.subject.clone(),
            content: args.content.clone(),
            event_type: args.kind.into(),
            to,
            impact_level,
            source,
            metadata,
            attachments: args.attach.clone(),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_impact_level(s: &str) -> Result<ImpactLevel, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "critical" => Ok(ImpactLevel::Critical),
        "high" => Ok(ImpactLevel::High),
        "medium" => Ok(ImpactLevel::Medium),
        "low" => Ok(ImpactLevel::Low),
        _ => Err(ConfigError::InvalidImpactLevel {
            value: s.to_string(),
        }),
    }
}

/// Splits `Key=Value`. The value is parsed as JSON when possible and kept
/// as a string otherwise.
fn parse_metadata_entry(s: &str) -> Result<(String, Value), ConfigError> {
    let invalid = || ConfigError::InvalidMetadata {
        value: s.to_string(),
    };

    let (key, raw) = s.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }

    let value = serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));

    Ok((key.to_string(), value))
}
