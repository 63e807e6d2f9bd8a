//! Pass-through for the backend endpoints the browser client calls.
//!
//! The host never interprets payment or deletion bodies: the request body
//! and an allow-listed set of headers go to `{UPSTREAM_URL}{path}`, and the
//! upstream status, body and content/cookie headers come back unchanged.
//! Failures on this hop are reported in the same `errorMessage` shape the
//! client already understands.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::state::AppState;

/// Request headers copied onto the upstream call.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["content-type", "accept", "cookie", "x-csrftoken"];

/// Upstream response headers copied back to the browser.
const RETURNED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie"];

fn copy_allowed(source: &HeaderMap, allowed: &[&str]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in source {
        if allowed.contains(&name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub(crate) fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_allowed(incoming, FORWARDED_REQUEST_HEADERS)
}

pub(crate) fn returned_response_headers(upstream: &HeaderMap) -> HeaderMap {
    copy_allowed(upstream, RETURNED_RESPONSE_HEADERS)
}

pub(crate) fn upstream_target(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Identifiers are spliced into the upstream path.
pub(crate) fn is_safe_segment(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "errorMessage": message }))).into_response()
}

/// `POST /pay`
pub async fn pay(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, "/pay", &headers, body).await
}

/// `POST /delete_celebrity/{id}`
pub async fn delete_celebrity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_safe_segment(&id) {
        return error_response(StatusCode::BAD_REQUEST, "invalid celebrity id");
    }
    forward(&state, &format!("/delete_celebrity/{id}"), &headers, body).await
}

async fn forward(state: &AppState, path: &str, headers: &HeaderMap, body: Bytes) -> Response {
    let Some(base) = state.upstream_url.as_deref() else {
        warn!(%path, "upstream not configured");
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "payment backend not configured");
    };
    let url = upstream_target(base, path);

    let upstream = match state
        .http
        .post(&url)
        .headers(forwarded_request_headers(headers))
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, %url, "upstream request failed");
            return error_response(StatusCode::BAD_GATEWAY, "payment backend unreachable");
        }
    };

    let status = upstream.status();
    let returned = returned_response_headers(upstream.headers());
    match upstream.bytes().await {
        Ok(bytes) => {
            info!(%path, status = status.as_u16(), "proxied upstream response");
            (status, returned, Body::from(bytes)).into_response()
        }
        Err(e) => {
            warn!(error = %e, %url, "upstream body read failed");
            error_response(StatusCode::BAD_GATEWAY, "payment backend unreachable")
        }
    }
}
