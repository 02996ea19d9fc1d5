//! Tests for HTTP request/response types and the transport trait.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url(s: &str) -> url::Url {
    url::Url::parse(s).unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_starts_without_headers_or_body() {
        let req = HttpRequest::new(http::Method::PUT, url("https://example.com/api"));

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url.as_str(), "https://example.com/api");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_post_set_method() {
        assert_eq!(
            HttpRequest::get(url("https://example.com/")).method,
            http::Method::GET
        );
        assert_eq!(
            HttpRequest::post(url("https://example.com/")).method,
            http::Method::POST
        );
    }

    #[test]
    fn with_json_body_sets_content_type_and_body() {
        let req = HttpRequest::post(url("https://example.com/")).with_json_body(b"{}".to_vec());

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let name = http::HeaderName::from_static("x-api-key");
        let req = HttpRequest::get(url("https://example.com/"))
            .with_header(name.clone(), http::HeaderValue::from_static("first"))
            .with_header(name.clone(), http::HeaderValue::from_static("second"));

        let values: Vec<_> = req.headers.get_all(&name).iter().collect();
        assert_eq!(values, vec!["second"]);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_only_for_2xx() {
        for status in [http::StatusCode::OK, http::StatusCode::NO_CONTENT] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "Expected {status} to be success");
        }

        for status in [
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::UNAUTHORIZED,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "Expected {status} to not be success");
        }
    }

    #[test]
    fn body_text_decodes_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"{\"status\":\"ok\"}".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("{\"status\":\"ok\"}"));
    }

    #[test]
    fn body_text_is_none_for_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![0xFF]);

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_keeps_source() {
        let error = HttpError::connection(std::io::Error::other("connection refused"));

        assert!(error.to_string().starts_with("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn timeout_has_no_source() {
        let error = HttpError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn arc_delegates_to_inner_client() {
        let inner = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let shared = Arc::clone(&inner);

        let resp = shared
            .request(HttpRequest::get(url("https://example.com/")))
            .await
            .unwrap();

        assert!(resp.is_success());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }
}
