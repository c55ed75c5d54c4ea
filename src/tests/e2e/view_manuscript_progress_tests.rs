use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::manuscripts::adapters::outbound::manuscript_source::ManuscriptSource;
use crate::modules::manuscripts::adapters::outbound::manuscript_source_rest::RestManuscriptSource;
use crate::modules::manuscripts::core::timeline::TimelineOptions;
use crate::modules::manuscripts::use_cases::view_manuscript_progress::handler::ViewManuscriptProgressHandler;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::documents::{fixed_now, make_sample_document};

async fn spawn_journal_api() -> String {
    let app = Router::new().route(
        "/manuscripts/{manuscript_id}/assignment-history",
        get(|| async { Json(make_sample_document()) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_with(source: Arc<dyn ManuscriptSource>, options: TimelineOptions) -> Router {
    router(AppState {
        progress_handler: Arc::new(
            ViewManuscriptProgressHandler::new(source, options).with_clock(fixed_now),
        ),
    })
}

async fn post_document(app: Router, document: Value) -> Value {
    let response = app
        .oneshot(
            Request::post("/project-timeline")
                .header("content-type", "application/json")
                .body(Body::from(document.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn offline_app() -> Router {
    let source: Arc<dyn ManuscriptSource> = Arc::new(
        RestManuscriptSource::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap(),
    );
    app_with(source, TimelineOptions::default())
}

#[tokio::test]
async fn projects_progress_fetched_from_the_journal_api() {
    let base_url = spawn_journal_api().await;
    let source: Arc<dyn ManuscriptSource> =
        Arc::new(RestManuscriptSource::new(&base_url, Duration::from_secs(5)).unwrap());

    let response = app_with(source, TimelineOptions::default())
        .oneshot(
            Request::get("/manuscripts/301/progress")
                .header("authorization", "Bearer token-0001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let view: Value = serde_json::from_slice(&bytes).unwrap();
    let labels: Vec<&str> = view["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["event_label"].as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Manuscript Submitted",
            "Editor Assigned: Dr. Ada Editor (ID: 17)",
            "Editor Response",
            "Reviewer Assigned: Dr. Rui Reviewer (ID: 23)",
            "Reviewer Response",
            "Reviewer Assigned: Dr. Pat Pending (ID: 24)",
        ]
    );
    assert_eq!(view["summary"]["last_activity"], "Jan 20, 2024");
}

#[tokio::test]
async fn empty_history_yields_a_single_submission_entry() {
    let view = post_document(
        offline_app().await,
        json!({
            "manuscript": {"id": 1, "submitted_at": "2024-01-01"},
            "assignment_history": []
        }),
    )
    .await;

    assert_eq!(
        view["timeline"],
        json!([{
            "step": 1,
            "kind": "submission",
            "event_label": "Manuscript Submitted",
            "description": "Manuscript submitted",
            "display_date": "Jan 1, 2024",
            "occurred_at": "2024-01-01T00:00:00Z",
            "assignment_id": null,
            "role": null,
            "status": null,
            "reviewer_decision": null
        }])
    );
}

#[tokio::test]
async fn editor_response_follows_its_assignment() {
    let view = post_document(
        offline_app().await,
        json!({
            "manuscript": {"id": 1, "submitted_at": "2024-01-01"},
            "assignment_history": [{
                "id": 5, "role": "editor",
                "assigned_to": "Dr. Ada Editor", "assigned_to_id": 17,
                "assigned_at": "2024-01-02", "updated_at": "2024-01-05",
                "status": "Accepted", "status_text": "Accepted"
            }]
        }),
    )
    .await;

    let steps: Vec<f64> = view["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["step"].as_f64())
        .collect();
    assert_eq!(steps, vec![1.0, 2.0, 2.5]);
    assert_eq!(view["timeline"][2]["event_label"], "Editor Response");
    assert_eq!(view["timeline"][2]["display_date"], "Jan 5, 2024");
}

#[tokio::test]
async fn progress_is_computed_from_the_step_counter() {
    let view = post_document(
        offline_app().await,
        json!({"workflow_info": {"current_step": 2, "workflow_progress": {"max_steps": 4}}}),
    )
    .await;
    assert_eq!(view["progress"]["percentage"], json!(50.0));

    let view = post_document(
        offline_app().await,
        json!({"workflow_info": {"current_step": 5, "workflow_progress": {"max_steps": 0}}}),
    )
    .await;
    assert_eq!(view["progress"]["percentage"], json!(0.0));
    assert_eq!(view["progress_label"], "0.00%");
}

#[tokio::test]
async fn unreachable_journal_api_maps_to_bad_gateway() {
    let response = offline_app()
        .await
        .oneshot(
            Request::get("/manuscripts/301/progress")
                .header("authorization", "Bearer token-0001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = offline_app()
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
