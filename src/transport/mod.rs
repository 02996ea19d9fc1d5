//! HTTP transport layer used by the notification client.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport backed by reqwest ([`ReqwestClient`])
//!
//! The transport is chosen once, when a client is constructed. Nothing in
//! the crate looks up an HTTP implementation per call.

mod client;
mod error;
mod request;

#[cfg(test)]
mod request_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};
