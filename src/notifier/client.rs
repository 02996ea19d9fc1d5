//! The notification client.

use std::fmt;

use http::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use super::{EventType, NotificationRequest, NotificationResult, NotifierError, StatusResult};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

/// Public deployment of the webhook service.
pub const DEFAULT_BASE_URL: &str = "https://mail-notifier-production.up.railway.app";

/// Header carrying the credential on send requests.
pub const API_KEY_HEADER: &str = "x-api-key";

const EMAIL_PATH: &str = "api/webhook/email";
const STATUS_PATH: &str = "api/webhook/email/status";

/// Client for the email webhook service.
///
/// Holds the base address and credential for its whole lifetime; neither
/// changes after construction. Calls take `&self` and share no mutable
/// state, so one client can serve concurrent tasks.
///
/// # Authentication
///
/// Send requests carry the credential verbatim in the `x-api-key` header.
/// The status endpoint is called without it.
///
/// # Example
///
/// ```no_run
/// use mail_notifier::{NotificationClient, NotificationRequest};
///
/// # async fn example() -> Result<(), mail_notifier::NotifierError> {
/// let client = NotificationClient::with_default_url("my-api-key")?;
/// let result = client
///     .send_error(NotificationRequest::new("Deploy failed", "Build 1234 exited with status 1"))
///     .await?;
/// println!("{} ({})", result.message, result.event_type);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NotificationClient<H = ReqwestClient> {
    http: H,
    base_url: Url,
    email_url: Url,
    status_url: Url,
    credential: String,
    auth_value: HeaderValue,
}

impl NotificationClient<ReqwestClient> {
    /// Creates a client for `base_url` using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::InvalidBaseUrl`] or
    /// [`NotifierError::InvalidCredential`] when either input is unusable,
    /// including a blank credential.
    pub fn new(base_url: &str, credential: impl Into<String>) -> Result<Self, NotifierError> {
        Self::with_transport(ReqwestClient::new(), base_url, credential)
    }

    /// Creates a client for [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::InvalidCredential`] if the credential is blank
    /// or cannot be sent as a header value.
    pub fn with_default_url(credential: impl Into<String>) -> Result<Self, NotifierError> {
        Self::new(DEFAULT_BASE_URL, credential)
    }
}

impl<H> NotificationClient<H> {
    /// Creates a client that sends through `http`.
    ///
    /// A trailing slash on `base_url` is optional. Any path on it is kept as
    /// a prefix of the endpoint paths.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::InvalidBaseUrl`] if `base_url` does not parse
    /// or is not an `http`/`https` URL, and
    /// [`NotifierError::InvalidCredential`] if the credential is blank or
    /// contains characters not allowed in a header value.
    pub fn with_transport(
        http: H,
        base_url: &str,
        credential: impl Into<String>,
    ) -> Result<Self, NotifierError> {
        let base_url = parse_base_url(base_url)?;
        let email_url = endpoint(&base_url, EMAIL_PATH)?;
        let status_url = endpoint(&base_url, STATUS_PATH)?;

        let credential = credential.into();
        if credential.trim().is_empty() {
            return Err(NotifierError::InvalidCredential(
                "credential is empty".to_string(),
            ));
        }
        let mut auth_value = HeaderValue::from_str(&credential)
            .map_err(|e| NotifierError::InvalidCredential(e.to_string()))?;
        auth_value.set_sensitive(true);

        Ok(Self {
            http,
            base_url,
            email_url,
            status_url,
            credential,
            auth_value,
        })
    }

    /// Returns the normalized base URL (always ends with `/`).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the credential exactly as supplied.
    #[must_use]
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.http
    }
}

impl<H: HttpClient> NotificationClient<H> {
    /// Sends `request` as-is to `POST /api/webhook/email`.
    ///
    /// # Errors
    ///
    /// - [`NotifierError::Transport`] if no response was received
    /// - [`NotifierError::RequestFailed`] for a non-2xx status
    /// - [`NotifierError::Decode`] if a 2xx body is not a [`NotificationResult`]
    pub async fn send_notification(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        let body = serde_json::to_vec(request).map_err(NotifierError::Serialize)?;
        let req = HttpRequest::post(self.email_url.clone())
            .with_json_body(body)
            .with_header(
                HeaderName::from_static(API_KEY_HEADER),
                self.auth_value.clone(),
            );

        let response = self.execute(req).await?;
        decode(&response)
    }

    /// Fetches `GET /api/webhook/email/status`. No credential is sent.
    ///
    /// # Errors
    ///
    /// Same as [`send_notification`](Self::send_notification), decoding into
    /// a [`StatusResult`].
    pub async fn get_status(&self) -> Result<StatusResult, NotifierError> {
        let response = self
            .execute(HttpRequest::get(self.status_url.clone()))
            .await?;
        decode(&response)
    }

    /// Sends `request` classified as [`EventType::Info`].
    ///
    /// # Errors
    ///
    /// See [`send_notification`](Self::send_notification).
    pub async fn send_info(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        self.send_as(EventType::Info, request).await
    }

    /// Sends `request` classified as [`EventType::Error`].
    ///
    /// # Errors
    ///
    /// See [`send_notification`](Self::send_notification).
    pub async fn send_error(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        self.send_as(EventType::Error, request).await
    }

    /// Sends `request` classified as [`EventType::Warning`].
    ///
    /// # Errors
    ///
    /// See [`send_notification`](Self::send_notification).
    pub async fn send_warning(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        self.send_as(EventType::Warning, request).await
    }

    /// Sends `request` classified as [`EventType::Success`].
    ///
    /// # Errors
    ///
    /// See [`send_notification`](Self::send_notification).
    pub async fn send_success(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        self.send_as(EventType::Success, request).await
    }

    /// Overwrites the classification and sends.
    ///
    /// # Errors
    ///
    /// See [`send_notification`](Self::send_notification).
    pub async fn send_as(
        &self,
        event_type: EventType,
        mut request: NotificationRequest,
    ) -> Result<NotificationResult, NotifierError> {
        request.event_type = Some(event_type);
        self.send_notification(&request).await
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, NotifierError> {
        tracing::debug!(method = %req.method, url = %req.url, "Sending request");

        let response = self.http.request(req).await?;

        tracing::debug!(status = %response.status, "Received response");

        if response.is_success() {
            return Ok(response);
        }

        Err(NotifierError::RequestFailed {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

impl<H> fmt::Debug for NotificationClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationClient")
            .field("base_url", &self.base_url.as_str())
            .field("credential", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, NotifierError> {
    let invalid = |reason: String| NotifierError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    // Endpoints are joined as relative paths, which needs a trailing slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn endpoint(base: &Url, path: &str) -> Result<Url, NotifierError> {
    base.join(path).map_err(|e| NotifierError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, NotifierError> {
    serde_json::from_slice(&response.body).map_err(|source| NotifierError::Decode {
        source,
        body: response.body_text().map(ToString::to_string),
    })
}
