//! `/api/*` pass-through to the video backend.
//!
//! Method, path, query, headers, and body are forwarded unchanged apart from
//! hop-by-hop headers. Request and response bodies are streamed, so uploads
//! and HLS segments never sit in host memory.
//!
//! ERROR HANDLING
//! ==============
//! Any backend status, including 4xx/5xx, is relayed as-is. Only transport
//! failures (refused connection, DNS, TLS) become a host-generated 502 with
//! the same `{"error": ...}` shape the backend uses.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers scoped to a single connection, plus `host`, which the client
/// sets for the upstream connection itself.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

pub(crate) const BACKEND_UNAVAILABLE: &str = "Backend unavailable";

pub(crate) fn forwarded_headers(source: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(source.len());
    for (name, value) in source {
        if !HOP_BY_HOP_HEADERS.contains(&name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

pub(crate) fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{backend_url}{path_and_query}")
}

pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);

    let result = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(reqwest::Body::wrap_stream(body.into_data_stream()))
        .send()
        .await;

    match result {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            tracing::warn!(error = %e, method = %parts.method, %url, "backend request failed");
            backend_unavailable()
        }
    }
}

fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = forwarded_headers(upstream.headers());
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

fn backend_unavailable() -> Response {
    (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": BACKEND_UNAVAILABLE }))).into_response()
}
