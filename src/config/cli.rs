//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::notifier::{EventType, ImpactLevel};

use super::defaults;

/// Mail Notifier
///
/// Sends classified email notifications through the mail-notifier
/// webhook service and checks its status.
#[derive(Debug, Parser)]
#[command(name = "mail-notifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the webhook service
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// API key sent in the x-api-key header
    #[arg(long = "api-key", env = defaults::API_KEY_ENV, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for mail-notifier
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a notification email
    Send(SendArgs),

    /// Check the webhook service status
    Status,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT)]
        output: PathBuf,
    },
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Email subject
    #[arg(long, short)]
    pub subject: String,

    /// Email body
    #[arg(long = "content", short = 'm')]
    pub content: String,

    /// Notification classification
    #[arg(long, short, value_enum, default_value_t = EventTypeArg::Info)]
    pub kind: EventTypeArg,

    /// Recipient address (can be specified multiple times)
    #[arg(long = "to", value_name = "ADDRESS")]
    pub to: Vec<String>,

    /// Impact level
    #[arg(long, value_enum)]
    pub impact: Option<ImpactLevelArg>,

    /// Source application label
    #[arg(long)]
    pub source: Option<String>,

    /// Metadata entry in 'Key=Value' format; JSON values are parsed (can be specified multiple times)
    #[arg(long = "meta", value_name = "K=V")]
    pub meta: Vec<String>,

    /// File to attach (can be specified multiple times)
    #[arg(long = "attach", value_name = "PATH")]
    pub attach: Vec<PathBuf>,
}

/// Classification argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventTypeArg {
    /// Informational
    Info,
    /// Failure
    Error,
    /// Needs attention
    Warning,
    /// Completed
    Success,
}

impl From<EventTypeArg> for EventType {
    fn from(arg: EventTypeArg) -> Self {
        match arg {
            EventTypeArg::Info => Self::Info,
            EventTypeArg::Error => Self::Error,
            EventTypeArg::Warning => Self::Warning,
            EventTypeArg::Success => Self::Success,
        }
    }
}

/// Impact level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImpactLevelArg {
    /// Critical
    Critical,
    /// High
    High,
    /// Medium
    Medium,
    /// Low
    Low,
}

impl From<ImpactLevelArg> for ImpactLevel {
    fn from(arg: ImpactLevelArg) -> Self {
        match arg {
            ImpactLevelArg::Critical => Self::Critical,
            ImpactLevelArg::High => Self::High,
            ImpactLevelArg::Medium => Self::Medium,
            ImpactLevelArg::Low => Self::Low,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Fallible variant of [`Cli::parse_from_iter`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
