//! Command execution logic.
//!
//! Turns a validated configuration into one call against the webhook
//! service and renders the result for stdout.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use mail_notifier::config::{Action, SendOptions, ValidatedConfig};
use mail_notifier::transport::HttpClient;
use mail_notifier::{
    Attachment, EventType, NotificationClient, NotificationRequest, NotifierError, Recipients,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The client rejected the configured URL or key.
    #[error("Failed to create client: {0}")]
    ClientSetup(#[source] NotifierError),

    /// An attachment could not be read.
    #[error("Failed to read attachment '{}': {source}", path.display())]
    Attachment {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An attachment path does not name a file.
    #[error("Attachment path has no file name: '{}'", .0.display())]
    AttachmentName(PathBuf),

    /// The service call failed.
    #[error("Request failed: {0}")]
    Request(#[source] NotifierError),

    /// The result could not be rendered.
    #[error("Failed to render result: {0}")]
    Output(#[source] serde_json::Error),
}

/// Executes the configured action and prints the JSON result to stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be built, an attachment cannot be
/// read, or the service call fails.
///
/// Excluded from coverage - talks to the real service.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = NotificationClient::new(config.base_url.as_str(), config.api_key)
        .map_err(RunError::ClientSetup)?;

    let output = dispatch(&client, config.action).await?;
    println!("{output}");

    Ok(())
}

/// Runs one action against `client` and returns the pretty-printed result.
async fn dispatch<H: HttpClient>(
    client: &NotificationClient<H>,
    action: Action,
) -> Result<String, RunError> {
    match action {
        Action::Send(options) => {
            let event_type = options.event_type;
            let request = build_request(options).await?;

            tracing::info!(%event_type, subject = %request.subject, "Sending notification");

            let result = match event_type {
                EventType::Info => client.send_info(request).await,
                EventType::Error => client.send_error(request).await,
                EventType::Warning => client.send_warning(request).await,
                EventType::Success => client.send_success(request).await,
            }
            .map_err(RunError::Request)?;

            tracing::info!("Notification accepted: {}", result.message);
            render(&result)
        }
        Action::Status => {
            let status = client.get_status().await.map_err(RunError::Request)?;
            render(&status)
        }
    }
}

/// Builds the request body from merged send options, reading attachments.
///
/// The classification is left unset; the send method chosen by the caller
/// fills it in.
async fn build_request(options: SendOptions) -> Result<NotificationRequest, RunError> {
    let mut request = NotificationRequest::new(options.subject, options.content);

    let mut to = options.to;
    if to.len() == 1 {
        request = request.with_recipients(Recipients::One(to.remove(0)));
    } else if !to.is_empty() {
        request = request.with_recipients(Recipients::Many(to));
    }

    if let Some(level) = options.impact_level {
        request = request.with_impact_level(level);
    }
    if let Some(source) = options.source {
        request = request.with_source_application(source);
    }
    if !options.metadata.is_empty() {
        request = request.with_metadata(options.metadata);
    }

    for path in &options.attachments {
        request = request.with_attachment(read_attachment(path).await?);
    }

    Ok(request)
}

/// Reads a file as an attachment: UTF-8 content is sent as text, anything
/// else as raw bytes.
async fn read_attachment(path: &Path) -> Result<Attachment, RunError> {
    let filename = path
        .file_name()
        .ok_or_else(|| RunError::AttachmentName(path.to_path_buf()))?
        .to_string_lossy()
        .into_owned();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| RunError::Attachment {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Attaching {} ({} bytes)", filename, bytes.len());

    Ok(match String::from_utf8(bytes) {
        Ok(text) => Attachment::text(filename, text),
        Err(e) => Attachment::bytes(filename, e.into_bytes()),
    })
}

fn render<T: Serialize>(value: &T) -> Result<String, RunError> {
    serde_json::to_string_pretty(value).map_err(RunError::Output)
}
