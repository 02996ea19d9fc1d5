//! Request and response bodies exchanged with the webhook service.
//!
//! Field names follow the service's camelCase JSON. Optional fields that
//! are unset are left out of the body entirely.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Classification of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Something failed
    Error,
    /// Something completed
    Success,
    /// Something needs attention
    Warning,
    /// Informational
    Info,
}

impl EventType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impact level of a notification. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Critical
    Critical,
    /// High
    High,
    /// Medium
    Medium,
    /// Low
    Low,
}

impl ImpactLevel {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipient address(es).
///
/// A single address goes on the wire as a JSON string, several as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    /// One address
    One(String),
    /// Several addresses, in order
    Many(Vec<String>),
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Self::Many(addresses)
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Self::Many(addresses.iter().map(ToString::to_string).collect())
    }
}

/// Attachment payload: text, or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentContent {
    /// Sent as a JSON string
    Text(String),
    /// Sent as `{"type":"Buffer","data":[...]}`
    Bytes(Vec<u8>),
}

/// Wire shape of [`AttachmentContent`].
#[derive(Serialize)]
#[serde(untagged)]
enum AttachmentWire<'a> {
    Text(&'a str),
    Buffer {
        #[serde(rename = "type")]
        kind: &'static str,
        data: &'a [u8],
    },
}

impl Serialize for AttachmentContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Text(text) => AttachmentWire::Text(text),
            Self::Bytes(data) => AttachmentWire::Buffer {
                kind: "Buffer",
                data,
            },
        };
        wire.serialize(serializer)
    }
}

/// A named file sent along with the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// File name shown to the recipient
    pub filename: String,
    /// File content
    pub content: AttachmentContent,
}

impl Attachment {
    /// Creates a text attachment.
    #[must_use]
    pub fn text(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: AttachmentContent::Text(content.into()),
        }
    }

    /// Creates a binary attachment.
    #[must_use]
    pub fn bytes(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: AttachmentContent::Bytes(content.into()),
        }
    }
}

/// SMTP account the service should send through instead of its own.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SmtpCredentials {
    /// SMTP host
    pub host: String,
    /// SMTP port
    pub port: u16,
    /// Use implicit TLS
    pub secure: bool,
    /// Login user
    pub user: String,
    /// Login password
    pub pass: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/webhook/email`.
///
/// # Example
///
/// ```
/// use mail_notifier::{Attachment, ImpactLevel, NotificationRequest};
///
/// let request = NotificationRequest::new("Backup finished", "Nightly backup completed in 42s")
///     .with_recipients("ops@example.com")
///     .with_impact_level(ImpactLevel::Low)
///     .with_source_application("backup-runner")
///     .with_metadata_entry("duration_secs", 42)
///     .with_attachment(Attachment::text("summary.txt", "ok"));
///
/// assert_eq!(request.subject, "Backup finished");
/// assert!(request.event_type.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    /// Recipient override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Recipients>,
    /// Email subject
    pub subject: String,
    /// Email body
    pub content: String,
    /// Classification; set by the `send_*` convenience methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// Impact level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_level: Option<ImpactLevel>,
    /// Label of the application sending the notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_application: Option<String>,
    /// Free-form metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Attachments, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// SMTP override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_credentials: Option<SmtpCredentials>,
}

impl NotificationRequest {
    /// Creates a request with only the required fields set.
    #[must_use]
    pub fn new(subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            to: None,
            subject: subject.into(),
            content: content.into(),
            event_type: None,
            impact_level: None,
            source_application: None,
            metadata: None,
            attachments: None,
            custom_credentials: None,
        }
    }

    /// Sets the recipient(s).
    #[must_use]
    pub fn with_recipients(mut self, to: impl Into<Recipients>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Sets the classification.
    #[must_use]
    pub const fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Sets the impact level.
    #[must_use]
    pub const fn with_impact_level(mut self, level: ImpactLevel) -> Self {
        self.impact_level = Some(level);
        self
    }

    /// Sets the source application label.
    #[must_use]
    pub fn with_source_application(mut self, source: impl Into<String>) -> Self {
        self.source_application = Some(source.into());
        self
    }

    /// Replaces the metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Inserts one metadata entry, creating the map if needed.
    #[must_use]
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .push(attachment);
        self
    }

    /// Sets the SMTP override.
    #[must_use]
    pub fn with_custom_credentials(mut self, credentials: SmtpCredentials) -> Self {
        self.custom_credentials = Some(credentials);
        self
    }
}

/// Response of a successful send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    /// Server message
    pub message: String,
    /// Classification the server recorded
    pub event_type: String,
}

/// Response of the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    /// Service status
    pub status: String,
    /// Human-readable detail
    pub message: String,
}
