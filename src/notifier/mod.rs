//! Client for the email webhook service.
//!
//! This module provides:
//! - The client ([`NotificationClient`])
//! - Request and response bodies ([`NotificationRequest`], [`NotificationResult`], [`StatusResult`])
//! - The error type ([`NotifierError`])

mod client;
mod error;
mod payload;

#[cfg(test)]
mod payload_tests;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, NotificationClient};
pub use error::NotifierError;
pub use payload::{
    Attachment, AttachmentContent, EventType, ImpactLevel, NotificationRequest,
    NotificationResult, Recipients, SmtpCredentials, StatusResult,
};
