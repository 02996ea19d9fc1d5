//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use std::path::PathBuf;

/// Default base URL of the webhook service.
pub const BASE_URL: &str = crate::notifier::DEFAULT_BASE_URL;

/// Environment variable read for the API key.
pub const API_KEY_ENV: &str = "MAIL_NOTIFIER_API_KEY";

/// Default output path of the `init` subcommand.
pub const INIT_OUTPUT: &str = "mail-notifier.toml";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "mail-notifier";

/// File name of the implicit configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of the configuration file loaded when `--config` is not given.
///
/// Returns `None` on platforms without a config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
