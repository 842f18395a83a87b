use std::sync::Arc;
use std::time::Duration;

use leadform_engine::{
    build_payload, classify_transport_text, DispatchSettings, Dispatcher, EngineConfig,
    EngineEvent, EngineHandle, FailureKind, LeadDraft, LeadPayload, ReqwestDispatcher, SubmitAck,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn draft() -> LeadDraft {
    LeadDraft {
        job_title: "Full Stack Developer".to_string(),
        city: "Berlin".to_string(),
        email: "not-provided".to_string(),
    }
}

fn payload() -> LeadPayload {
    build_payload(&draft(), "2026-08-23T12:00:00+00:00", "1724407200000")
}

fn dispatcher_for(server: &MockServer) -> ReqwestDispatcher {
    ReqwestDispatcher::new(DispatchSettings {
        endpoint: format!("{}/webhook", server.uri()),
        ..DispatchSettings::default()
    })
}

#[tokio::test]
async fn posts_json_with_both_shapes_and_headers() {
    let server = MockServer::start().await;
    let expected = json!({
        "jobTitle": "Full Stack Developer",
        "city": "Berlin",
        "email": "not-provided",
        "timestamp": "2026-08-23T12:00:00+00:00",
        "status": "new",
        "source": "lead-generation-form",
        "id": "1724407200000",
        "data": {
            "jobTitle": "Full Stack Developer",
            "city": "Berlin",
            "email": "not-provided",
            "timestamp": "2026-08-23T12:00:00+00:00",
            "status": "new",
            "source": "lead-generation-form",
            "id": "1724407200000",
        },
    });
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Workflow was started"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = dispatcher_for(&server)
        .dispatch(&payload())
        .await
        .expect("dispatch ok");
    assert_eq!(ack.message.as_deref(), Some("Workflow was started"));
}

#[tokio::test]
async fn non_json_success_body_is_an_empty_ack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let ack = dispatcher_for(&server)
        .dispatch(&payload())
        .await
        .expect("dispatch ok");
    assert_eq!(ack, SubmitAck::default());
}

#[tokio::test]
async fn empty_return_marker_means_workflow_misconfigured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "No item to return got found"
        })))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server)
        .dispatch(&payload())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::WorkflowMisconfigured);
    assert_eq!(err.message, "No item to return got found");
}

#[tokio::test]
async fn plain_500_uses_raw_text_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker crashed"))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server)
        .dispatch(&payload())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::ServerError);
    assert_eq!(err.message, "worker crashed");
}

#[tokio::test]
async fn bodyless_500_falls_back_to_literal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server)
        .dispatch(&payload())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::ServerError);
    assert_eq!(err.message, "Internal server error in workflow");
}

#[tokio::test]
async fn status_codes_map_to_their_categories() {
    for (code, expected) in [
        (404, FailureKind::WebhookNotFound),
        (403, FailureKind::AccessDenied),
        (429, FailureKind::HttpStatus(429)),
        (400, FailureKind::HttpStatus(400)),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let err = dispatcher_for(&server)
            .dispatch(&payload())
            .await
            .unwrap_err();
        assert_eq!(err.kind, expected, "status {code}");
    }
}

#[tokio::test]
async fn connection_refused_is_classified_from_the_transport() {
    // A non-pooled server: `MockServer::start()` hands out a pooled instance
    // whose listener outlives the drop, so the port would still accept
    // connections and answer 404 instead of refusing the connection.
    let server = MockServer::builder().start().await;
    let endpoint = format!("{}/webhook", server.uri());
    drop(server);

    let dispatcher = ReqwestDispatcher::new(DispatchSettings {
        endpoint,
        ..DispatchSettings::default()
    });
    let err = dispatcher.dispatch(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::ConnectionFailed);
}

#[tokio::test]
async fn configured_timeout_settles_as_aborted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(DispatchSettings {
        endpoint: format!("{}/webhook", server.uri()),
        request_timeout: Some(Duration::from_millis(50)),
        ..DispatchSettings::default()
    });
    let err = dispatcher.dispatch(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Aborted);
}

#[test]
fn text_fallback_recognizes_known_substrings() {
    let cases = [
        ("TypeError: Failed to fetch", FailureKind::ConnectionFailed),
        (
            "blocked by CORS policy of the target",
            FailureKind::CrossOriginBlocked,
        ),
        ("the operation was aborted", FailureKind::Aborted),
        ("something inexplicable", FailureKind::TransportOther),
    ];
    for (text, expected) in cases {
        let err = classify_transport_text(text.to_string());
        assert_eq!(err.kind, expected, "{text}");
        assert_eq!(err.message, text);
    }
}

#[tokio::test]
async fn engine_handle_settles_one_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Workflow was started"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = EngineConfig::new(DispatchSettings {
        endpoint: format!("{}/webhook", server.uri()),
        ..DispatchSettings::default()
    });
    config.submitted_utc = Arc::new(|| "2026-08-23T12:00:00+00:00".to_string());
    config.lead_id = Arc::new(|| "1724407200000".to_string());

    let engine = EngineHandle::new(config);
    engine.submit(draft());

    let mut settled = None;
    for _ in 0..200 {
        if let Some(event) = engine.try_recv() {
            settled = Some(event);
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    match settled.expect("engine settled in time") {
        EngineEvent::Settled { result } => {
            let ack = result.expect("success");
            assert_eq!(ack.message.as_deref(), Some("Workflow was started"));
        }
    }
}
