mod common;

use axum::http::{header, Method, StatusCode};
use galleria::metrics::EXPOSITION_CONTENT_TYPE;
use tower::ServiceExt;

use common::{
    body_string, build_app, load_test_config, multipart_request, request, upload_request, Part,
    MEMORY_STORE_CONFIG,
};

fn sample(method: &str, route: &str, status: u16, count: u64) -> String {
    format!(
        "http_requests_total{{method=\"{}\",route=\"{}\",status_code=\"{}\"}} {}",
        method, route, status, count
    )
}

#[tokio::test]
async fn integration_fresh_process_scenario() {
    let (app, _state) = build_app(load_test_config(MEMORY_STORE_CONFIG)).await;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_string(response).await.contains("<img"));

    let png = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0, 0];
    let response = app
        .clone()
        .oneshot(upload_request("image/png", &png))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/"))
        .await
        .expect("request should complete");
    let html = body_string(response).await;
    assert_eq!(html.matches("<img").count(), 1);
    assert!(html.contains("data:image/png;base64,iVBORw0KGgoAAA=="));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/metrics"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], EXPOSITION_CONTENT_TYPE);

    let text = body_string(response).await;
    assert!(text.contains("# TYPE http_requests_total counter"));
    assert!(text.contains(&sample("GET", "/", 200, 2)), "{}", text);
    assert!(text.contains(&sample("POST", "/upload", 302, 1)), "{}", text);
    // The scrape is counted after its own response was rendered.
    assert!(!text.contains("route=\"/metrics\""), "{}", text);
}

#[tokio::test]
async fn integration_scripted_request_counts() {
    let (app, state) = build_app(load_test_config(MEMORY_STORE_CONFIG)).await;

    let script = vec![
        (request(Method::GET, "/"), StatusCode::OK),
        (request(Method::GET, "/health"), StatusCode::OK),
        (upload_request("image/gif", b"GIF89a"), StatusCode::FOUND),
        (upload_request("image/gif", b"GIF87a"), StatusCode::FOUND),
        (
            multipart_request(&[Part::text("photo", "oops")]),
            StatusCode::BAD_REQUEST,
        ),
        (request(Method::GET, "/nope/1"), StatusCode::NOT_FOUND),
        (request(Method::GET, "/nope/2"), StatusCode::NOT_FOUND),
        (request(Method::GET, "/nope/1"), StatusCode::NOT_FOUND),
        (request(Method::GET, "/metrics"), StatusCode::OK),
        (request(Method::GET, "/"), StatusCode::OK),
    ];

    for (req, expected) in script {
        let response = app
            .clone()
            .oneshot(req)
            .await
            .expect("request should complete");
        assert_eq!(response.status(), expected);
    }

    let metrics = &state.metrics;
    assert_eq!(metrics.request_count("GET", "/", 200), 2);
    assert_eq!(metrics.request_count("GET", "/health", 200), 1);
    assert_eq!(metrics.request_count("POST", "/upload", 302), 2);
    assert_eq!(metrics.request_count("POST", "/upload", 400), 1);
    assert_eq!(metrics.request_count("GET", "/metrics", 200), 1);
    // Unmatched requests are labelled with the raw path.
    assert_eq!(metrics.request_count("GET", "/nope/1", 404), 2);
    assert_eq!(metrics.request_count("GET", "/nope/2", 404), 1);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/metrics"))
        .await
        .expect("request should complete");
    let text = body_string(response).await;
    assert!(text.contains(&sample("GET", "/nope/1", 404, 2)), "{}", text);
    assert!(text.contains(&sample("GET", "/metrics", 200, 1)), "{}", text);
}

#[tokio::test]
async fn integration_counted_before_body_is_read() {
    let (app, state) = build_app(load_test_config(MEMORY_STORE_CONFIG)).await;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/"))
        .await
        .expect("request should complete");
    assert_eq!(state.metrics.request_count("GET", "/", 200), 1);
    drop(response);

    assert_eq!(state.metrics.request_count("GET", "/", 200), 1);
}

#[tokio::test]
async fn integration_exposition_is_stable() {
    let (app, state) = build_app(load_test_config(MEMORY_STORE_CONFIG)).await;

    for _ in 0..3 {
        app.clone()
            .oneshot(request(Method::GET, "/"))
            .await
            .expect("request should complete");
    }

    let first = state.metrics.render().expect("metrics should render");
    let second = state.metrics.render().expect("metrics should render");
    assert_eq!(first, second);
    assert!(first.contains(&sample("GET", "/", 200, 3)));
}
