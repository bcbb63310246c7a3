use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use axum::routing::{get, post};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Serve `backend` on an ephemeral port and return its origin.
async fn spawn_backend(backend: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/videos",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"[{"id":"v1","title":"One"}]"#) }),
        )
        .route(
            "/api/admin/verify",
            get(|headers: HeaderMap| async move {
                match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                    Some("Bearer good") => (StatusCode::OK, r#"{"valid":true}"#),
                    _ => (StatusCode::UNAUTHORIZED, r#"{"error":"Invalid token"}"#),
                }
            }),
        )
        .route("/api/echo", post(|body: String| async move { format!("echo:{body}") }))
        .route(
            "/api/search",
            get(|request: axum::extract::Request| async move { request.uri().query().unwrap_or_default().to_owned() }),
        )
}

#[test]
fn forwarded_headers_drops_hop_by_hop_and_host() {
    let mut source = HeaderMap::new();
    source.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    source.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    source.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    source.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    source.insert(header::CONTENT_TYPE, HeaderValue::from_static("multipart/form-data; boundary=x"));

    let forwarded = forwarded_headers(&source);
    assert!(forwarded.get(header::HOST).is_none());
    assert!(forwarded.get(header::CONNECTION).is_none());
    assert!(forwarded.get(header::TRANSFER_ENCODING).is_none());
    assert_eq!(forwarded.get(header::AUTHORIZATION).unwrap(), "Bearer tok");
    assert_eq!(forwarded.get(header::CONTENT_TYPE).unwrap(), "multipart/form-data; boundary=x");
}

#[test]
fn forwarded_headers_keeps_repeated_values() {
    let mut source = HeaderMap::new();
    source.append(header::ACCEPT, HeaderValue::from_static("text/html"));
    source.append(header::ACCEPT, HeaderValue::from_static("application/json"));
    assert_eq!(forwarded_headers(&source).get_all(header::ACCEPT).iter().count(), 2);
}

#[test]
fn upstream_url_appends_path_and_query() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8080", "/api/videos/v1/playlist.m3u8?x=1"),
        "http://127.0.0.1:8080/api/videos/v1/playlist.m3u8?x=1"
    );
}

#[tokio::test]
async fn forward_relays_backend_response() {
    let origin = spawn_backend(fake_backend()).await;
    let app = api_routes(AppState::new(&origin).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/api/videos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(body_to_string(response.into_body()).await, r#"[{"id":"v1","title":"One"}]"#);
}

#[tokio::test]
async fn forward_passes_authorization_and_relays_error_status() {
    let origin = spawn_backend(fake_backend()).await;
    let app = api_routes(AppState::new(&origin).unwrap());

    let accepted = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/verify")
                .header(header::AUTHORIZATION, "Bearer good")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::OK);

    let rejected = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/verify")
                .header(header::AUTHORIZATION, "Bearer bad")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_to_string(rejected.into_body()).await, r#"{"error":"Invalid token"}"#);
}

#[tokio::test]
async fn forward_streams_request_body() {
    let origin = spawn_backend(fake_backend()).await;
    let app = api_routes(AppState::new(&origin).unwrap());

    let response = app
        .oneshot(Request::builder().method("POST").uri("/api/echo").body(Body::from("payload")).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response.into_body()).await, "echo:payload");
}

#[tokio::test]
async fn forward_keeps_query_string() {
    let origin = spawn_backend(fake_backend()).await;
    let app = api_routes(AppState::new(&origin).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/api/search?q=cats&page=2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_to_string(response.into_body()).await, "q=cats&page=2");
}

#[tokio::test]
async fn forward_returns_bad_gateway_when_backend_is_down() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(AppState::new(&format!("http://{addr}")).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/api/videos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_to_string(response.into_body()).await, r#"{"error":"Backend unavailable"}"#);
}

#[tokio::test]
async fn healthz_answers_without_backend() {
    let app = api_routes(AppState::new("http://127.0.0.1:9").unwrap());
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
