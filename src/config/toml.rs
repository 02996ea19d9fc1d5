//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so the file can supply any subset of values
/// and leave the rest to CLI arguments and defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Service connection section
    #[serde(default)]
    pub client: ClientSection,

    /// Defaults applied to every `send`
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// Service connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Base URL of the webhook service
    pub base_url: Option<String>,

    /// API key for the x-api-key header
    pub api_key: Option<String>,
}

/// Per-notification defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Source application label
    pub source: Option<String>,

    /// Recipients used when `--to` is not given
    #[serde(default)]
    pub to: Vec<String>,

    /// Impact level: "critical", "high", "medium", or "low"
    pub impact: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    format!(
        r#"# Mail Notifier Configuration File

[client]
# Base URL of the webhook service (default: {base_url})
# base_url = "{base_url}"

# API key sent in the x-api-key header (required)
# Can also be given via --api-key or the {env} environment variable
# api_key = "your-api-key"

[defaults]
# Source application label attached to every notification
# source = "my-service"

# Recipients used when --to is not given (empty = server default)
# Note: --to on the command line REPLACES this list (not merged)
# to = ["ops@example.com"]

# Impact level: "critical", "high", "medium", or "low"
# impact = "medium"
"#,
        base_url = super::defaults::BASE_URL,
        env = super::defaults::API_KEY_ENV,
    )
}
