//! HTTP client tests against a local axum backend
//!
//! Checks the wire format of both endpoints and that every failure mode
//! (status, body, transport) comes back as an `ApiError`.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use calibration_assistant::api::{ApiError, CertificateApi, HttpCertificateApi};
use calibration_assistant::controller::{self, LocalState, SendOutcome};
use calibration_assistant::state::APOLOGY_MESSAGE;
use serde_json::{Value, json};

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test backend");
    });
    format!("http://{addr}")
}

fn healthy_backend() -> Router {
    Router::new()
        .route(
            "/api/dashboard",
            get(|| async {
                Json(json!({
                    "totalCertificates": 42,
                    "expiringCertificates": 3,
                    "accreditedCertificates": 40,
                    "equipmentTypes": {"Thermometer": 10},
                    "environmentalConditions": {
                        "avgTemperature": "22.5C",
                        "avgHumidity": "45%",
                        "avgPressure": "1013hPa"
                    }
                }))
            }),
        )
        .route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "response": format!("You asked: {message}"),
                    "certificate": {
                        "certNo": "C-123",
                        "equipmentType": "Thermometer",
                        "manufacturer": "Fluke",
                        "model": "1524",
                        "calibrationDate": "2024-01-01",
                        "dueDate": "2025-01-01"
                    }
                }))
            }),
        )
}

fn failing_backend() -> Router {
    Router::new()
        .route(
            "/api/dashboard",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route(
            "/api/chat",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "database offline"})),
                )
            }),
        )
}

mod wire_tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_summary_is_decoded() {
        let base = spawn_backend(healthy_backend()).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");

        let summary = api.dashboard().await.expect("dashboard");
        assert_eq!(summary.total_certificates, 42);
        assert_eq!(summary.expiring_certificates, 3);
        assert_eq!(summary.accredited_certificates, 40);
        assert_eq!(summary.equipment_types.get("Thermometer"), Some(&10));
        assert_eq!(summary.environmental_conditions.avg_humidity, "45%");
    }

    #[tokio::test]
    async fn test_chat_posts_message_field() {
        let base = spawn_backend(healthy_backend()).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");

        let reply = api.chat("What is certificate C-123?").await.expect("reply");
        assert_eq!(reply.response, "You asked: What is certificate C-123?");
        assert_eq!(reply.certificate.map(|c| c.due_date), Some("2025-01-01".into()));
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let base = spawn_backend(Router::new().nest("/backend", healthy_backend())).await;
        let api = HttpCertificateApi::new(&format!("{base}/backend")).expect("valid base url");

        assert!(api.dashboard().await.is_ok());
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_body_is_carried_in_status_error() {
        let base = spawn_backend(failing_backend()).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");

        match api.chat("hello").await {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(detail, "database offline");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_error_body_is_kept_verbatim() {
        let base = spawn_backend(failing_backend()).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");

        match api.dashboard().await {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(detail, "maintenance");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let router = Router::new().route("/api/dashboard", get(|| async { "not json" }));
        let base = spawn_backend(router).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");

        assert!(matches!(api.dashboard().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("address");
        drop(listener);
        let api = HttpCertificateApi::new(&format!("http://{addr}")).expect("valid base url");

        assert!(matches!(api.chat("hello").await, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_controller_absorbs_http_500_into_the_conversation() {
        let base = spawn_backend(failing_backend()).await;
        let api = HttpCertificateApi::new(&base).expect("valid base url");
        let state = LocalState::default();

        let outcome = controller::send_message(state.clone(), &api, "hello").await;
        assert!(matches!(outcome, SendOutcome::Failed(_)));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.messages().len(), 3);
        assert_eq!(snapshot.messages()[2].content, APOLOGY_MESSAGE);
        assert!(snapshot.error().is_some());
    }
}
