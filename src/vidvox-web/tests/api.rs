//! In-process router tests: acceptance checks that need no network

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use vidvox_web::{router, AppConfig, AppState};

fn test_state(dir: &tempfile::TempDir) -> AppState {
    let config = AppConfig {
        data_file: dir.path().join("video_data.json"),
        ..AppConfig::default()
    };
    AppState::new(config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let response = router(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["dependencies"].is_object());
}

#[tokio::test]
async fn derivation_routes_require_submitted_url() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let routes = [
        "/first_frame",
        "/download_frame",
        "/play_audio",
        "/download_audio",
        "/ocr_text",
        "/translate_audio",
        "/speak_spanish",
        "/debug_audio",
    ];

    for route in routes {
        let response = router(state.clone())
            .oneshot(Request::get(route).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "route {}", route);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No video URL", "route {}", route);
    }
}

#[tokio::test]
async fn submit_url_rejects_empty_url() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let request = Request::post("/submit_url")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = router(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No URL provided");
}

#[tokio::test]
async fn submit_url_rejects_video_sharing_sites() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let request = Request::post("/submit_url")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"url":"https://www.youtube.com/watch?v=dQw4w9WgXcQ"}"#,
        ))
        .unwrap();
    let response = router(state.clone()).oneshot(request).await.unwrap();

    // The submission itself succeeds; the rejection is carried in
    // video_info.error, matching the persisted-state contract.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["video_info"]["error"],
        vidvox_media::UNSUPPORTED_HOST_MESSAGE
    );
    assert_eq!(body["video_info"]["duration"], 0.0);

    // State was persisted and is visible to later requests.
    let session = state.store.load().await;
    assert_eq!(
        session.current_video_url,
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
    assert_eq!(
        session.video_info.error.as_deref(),
        Some(vidvox_media::UNSUPPORTED_HOST_MESSAGE)
    );
}

#[tokio::test]
async fn submit_url_overwrites_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    for url in [
        "https://youtu.be/first",
        "https://youtu.be/second",
    ] {
        let request = Request::post("/submit_url")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"url":"{}"}}"#, url)))
            .unwrap();
        let response = router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let session = state.store.load().await;
    assert_eq!(session.current_video_url, "https://youtu.be/second");
}

#[tokio::test]
async fn index_serves_html() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let response = router(state)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}
