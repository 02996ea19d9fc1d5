//! Process-level plumbing for the `mail-notifier` binary.

use std::process::ExitCode;

use mail_notifier::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit statuses reported by `mail-notifier`.
pub mod exit_code {
    use std::process::ExitCode;

    /// The command completed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Arguments or config file were rejected before any request was made.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The service was unreachable, refused the request, or answered with an
    /// unexpected body.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Points the user at `mail-notifier init` when the failure is a missing key
/// or an unreadable config file.
pub fn print_config_hint(error: &ConfigError) {
    let suggest_init = match error {
        ConfigError::MissingRequired { field: f, .. } => *f == field::API_KEY,
        ConfigError::FileRead { .. } => true,
        _ => false,
    };

    if suggest_init {
        eprintln!(
            "\nPass --api-key, export MAIL_NOTIFIER_API_KEY, or run 'mail-notifier init' \
             to write a config template."
        );
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level chosen
/// by `--verbose`.
///
/// Stdout carries only the JSON result of the command.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Maps the outcome of a run to the process exit status, logging failures.
pub fn finish<E: std::fmt::Display>(outcome: Result<(), E>) -> ExitCode {
    match outcome {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
