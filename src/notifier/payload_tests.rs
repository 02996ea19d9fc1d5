//! Tests for the wire format of request and response bodies.

use serde_json::json;

use super::payload::{
    Attachment, EventType, ImpactLevel, NotificationRequest, NotificationResult, Recipients,
    SmtpCredentials, StatusResult,
};

fn to_json(request: &NotificationRequest) -> serde_json::Value {
    serde_json::to_value(request).unwrap()
}

mod enums {
    use super::*;

    #[test]
    fn event_type_serializes_lowercase() {
        let values: Vec<_> = [
            EventType::Error,
            EventType::Success,
            EventType::Warning,
            EventType::Info,
        ]
        .into_iter()
        .map(|e| serde_json::to_value(e).unwrap())
        .collect();

        assert_eq!(values, vec!["error", "success", "warning", "info"]);
    }

    #[test]
    fn event_type_rejects_unknown_value() {
        let result = serde_json::from_value::<EventType>(json!("debug"));
        assert!(result.is_err());
    }

    #[test]
    fn impact_level_display_matches_wire_value() {
        for level in [
            ImpactLevel::Critical,
            ImpactLevel::High,
            ImpactLevel::Medium,
            ImpactLevel::Low,
        ] {
            assert_eq!(serde_json::to_value(level).unwrap(), level.to_string());
        }
    }
}

mod notification_request {
    use super::*;

    #[test]
    fn minimal_request_omits_optional_fields() {
        let request = NotificationRequest::new("S", "C");

        assert_eq!(to_json(&request), json!({"subject": "S", "content": "C"}));
    }

    #[test]
    fn full_request_uses_camel_case_names() {
        let request = NotificationRequest::new("Disk full", "/var is at 98%")
            .with_recipients("ops@example.com")
            .with_event_type(EventType::Warning)
            .with_impact_level(ImpactLevel::High)
            .with_source_application("disk-watch")
            .with_metadata_entry("host", "db-1")
            .with_metadata_entry("usage", 98)
            .with_custom_credentials(SmtpCredentials {
                host: "smtp.example.com".to_string(),
                port: 465,
                secure: true,
                user: "mailer".to_string(),
                pass: "hunter2".to_string(),
            });

        assert_eq!(
            to_json(&request),
            json!({
                "to": "ops@example.com",
                "subject": "Disk full",
                "content": "/var is at 98%",
                "eventType": "warning",
                "impactLevel": "high",
                "sourceApplication": "disk-watch",
                "metadata": {"host": "db-1", "usage": 98},
                "customCredentials": {
                    "host": "smtp.example.com",
                    "port": 465,
                    "secure": true,
                    "user": "mailer",
                    "pass": "hunter2"
                }
            })
        );
    }

    #[test]
    fn multiple_recipients_serialize_as_array() {
        let request = NotificationRequest::new("S", "C")
            .with_recipients(&["a@example.com", "b@example.com"][..]);

        assert_eq!(
            to_json(&request)["to"],
            json!(["a@example.com", "b@example.com"])
        );
    }

    #[test]
    fn metadata_entries_accumulate() {
        let request = NotificationRequest::new("S", "C")
            .with_metadata_entry("a", 1)
            .with_metadata_entry("b", json!({"nested": [1, 2]}));

        assert_eq!(
            to_json(&request)["metadata"],
            json!({"a": 1, "b": {"nested": [1, 2]}})
        );
    }

    #[test]
    fn attachments_keep_order_and_encode_bytes_as_buffer() {
        let request = NotificationRequest::new("S", "C")
            .with_attachment(Attachment::text("notes.txt", "hello"))
            .with_attachment(Attachment::bytes("blob.bin", vec![0u8, 255, 7]));

        assert_eq!(
            to_json(&request)["attachments"],
            json!([
                {"filename": "notes.txt", "content": "hello"},
                {"filename": "blob.bin", "content": {"type": "Buffer", "data": [0, 255, 7]}}
            ])
        );
    }

    #[test]
    fn smtp_credentials_debug_hides_password() {
        let creds = SmtpCredentials {
            host: "smtp.example.com".to_string(),
            port: 587,
            secure: false,
            user: "mailer".to_string(),
            pass: "hunter2".to_string(),
        };

        let debug = format!("{creds:?}");
        assert!(debug.contains("smtp.example.com"));
        assert!(!debug.contains("hunter2"));
    }
}

mod recipients {
    use super::*;

    #[test]
    fn conversions_pick_variant() {
        assert_eq!(
            Recipients::from("a@example.com"),
            Recipients::One("a@example.com".to_string())
        );
        assert_eq!(
            Recipients::from(vec!["a@example.com".to_string()]),
            Recipients::Many(vec!["a@example.com".to_string()])
        );
    }
}

mod results {
    use super::*;

    #[test]
    fn notification_result_reads_camel_case() {
        let result: NotificationResult =
            serde_json::from_value(json!({"message": "ok", "eventType": "info"})).unwrap();

        assert_eq!(result.message, "ok");
        assert_eq!(result.event_type, "info");
    }

    #[test]
    fn notification_result_ignores_extra_fields() {
        let result: NotificationResult = serde_json::from_value(
            json!({"message": "queued", "eventType": "error", "id": 12}),
        )
        .unwrap();

        assert_eq!(result.message, "queued");
    }

    #[test]
    fn status_result_requires_both_fields() {
        assert!(serde_json::from_value::<StatusResult>(json!({"status": "ok"})).is_err());

        let status: StatusResult =
            serde_json::from_value(json!({"status": "ok", "message": "up"})).unwrap();
        assert_eq!(status.status, "ok");
        assert_eq!(status.message, "up");
    }
}
