//! Full round trip: controller -> reqwest -> axum router with mock sources.

use chrono::NaiveDate;
use eventintel_client::api::HttpDiscoveryApi;
use eventintel_client::forms::EventSearchForm;
use eventintel_client::{ClientError, UiController};
use eventintel_common::Category;
use eventintel_test_utils::RecordingHost;
use eventintel_web::{router::build_router, state::AppState};

async fn spawn_service() -> (String, tempfile::TempDir) {
    let frontend = tempfile::tempdir().unwrap();
    std::fs::write(frontend.path().join("index.html"), "<!DOCTYPE html>").unwrap();
    let app = build_router(AppState::with_mock_sources(frontend.path()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), frontend)
}

fn austin_form(max_results: u32) -> EventSearchForm {
    EventSearchForm {
        location: "Austin".into(),
        categories: vec![Category::Technology],
        max_results,
        ..EventSearchForm::starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }
}

#[tokio::test]
async fn test_discover_then_find_attendees() {
    let (base_url, _frontend) = spawn_service().await;
    let mut ui = UiController::new(HttpDiscoveryApi::new(base_url), RecordingHost::default());

    ui.discover_events(&austin_form(1)).await.unwrap();
    assert_eq!(ui.state().events().len(), 1);
    assert!(ui.state().events()[0].event_name.contains("Austin"));
    assert_eq!(ui.state().events_meta().unwrap().total, 2);

    let name = ui.state().events()[0].event_name.clone();
    ui.analyze_attendees(&name);
    ui.discover_attendees(2).await.unwrap();
    assert_eq!(ui.state().attendees().len(), 2);
    assert!(ui.state().attendees().iter().all(|a| a.post_content.contains(&name)));
    assert_eq!(ui.state().analytics().total_reach, 4700);
    assert_eq!(ui.host().hide_count(), 2);
    assert!(ui.host().alerts().is_empty());
}

#[tokio::test]
async fn test_server_failure_envelope_reaches_user() {
    let (base_url, _frontend) = spawn_service().await;
    let mut ui = UiController::new(HttpDiscoveryApi::new(base_url), RecordingHost::default());

    let form = EventSearchForm { end_date: "2023-12-01".into(), ..austin_form(3) };
    let err = ui.discover_events(&form).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(ui.host().alerts().len(), 1);
    assert!(ui.host().alerts()[0].starts_with("Error discovering events: Date range is inverted"));
}

#[tokio::test]
async fn test_validation_status_becomes_http_error() {
    let (base_url, _frontend) = spawn_service().await;
    let mut ui = UiController::new(HttpDiscoveryApi::new(base_url), RecordingHost::default());

    let err = ui.discover_events(&austin_form(0)).await.unwrap_err();
    assert!(matches!(err, ClientError::HttpStatus(422)));
    assert_eq!(ui.host().alerts(), vec!["Error discovering events: HTTP 422"]);
}
