//! Mail Notifier
//!
//! A client library for the mail-notifier webhook service, which turns
//! classified notifications into emails, plus the configuration layer of
//! the `mail-notifier` command-line tool.

pub mod config;
pub mod notifier;
pub mod transport;

pub use notifier::{
    Attachment, AttachmentContent, DEFAULT_BASE_URL, EventType, ImpactLevel, NotificationClient,
    NotificationRequest, NotificationResult, NotifierError, Recipients, SmtpCredentials,
    StatusResult,
};
