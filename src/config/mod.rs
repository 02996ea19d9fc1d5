//! Configuration layer for the `mail-notifier` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`SendArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Action`], [`SendOptions`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! The library client never reads configuration itself; it is constructed
//! from values this layer resolves.
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment** - only `MAIL_NOTIFIER_API_KEY`, for the API key
//! 3. **TOML config file** - `--config`, or the per-user file if present
//! 4. **Built-in defaults** - the public service URL
//!
//! `--to` recipients **replace** the `defaults.to` list from TOML (not merged).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, EventTypeArg, ImpactLevelArg, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{ClientSection, DefaultsSection, TomlConfig, default_config_template};
pub use validated::{Action, SendOptions, ValidatedConfig, write_default_config};
