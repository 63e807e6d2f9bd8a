use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_TYPE, COOKIE, HOST, SET_COOKIE};
use axum::routing::post;

use super::*;

fn test_state(upstream_url: Option<String>) -> AppState {
    AppState { http: reqwest::Client::new(), upstream_url: upstream_url.as_deref().map(Arc::from) }
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve `router` on an ephemeral loopback port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn forwarded_request_headers_keeps_only_allow_list() {
    let mut incoming = HeaderMap::new();
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert("x-csrftoken", HeaderValue::from_static("tok"));
    incoming.insert(COOKIE, HeaderValue::from_static("session=abc"));
    incoming.insert(HOST, HeaderValue::from_static("celebhub.local"));
    incoming.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));

    let forwarded = forwarded_request_headers(&incoming);
    assert_eq!(forwarded.len(), 3);
    assert_eq!(forwarded.get("x-csrftoken").unwrap(), "tok");
    assert_eq!(forwarded.get(COOKIE).unwrap(), "session=abc");
    assert!(forwarded.get(HOST).is_none());
}

#[test]
fn returned_response_headers_keeps_every_set_cookie() {
    let mut upstream = HeaderMap::new();
    upstream.append(SET_COOKIE, HeaderValue::from_static("a=1"));
    upstream.append(SET_COOKIE, HeaderValue::from_static("b=2"));
    upstream.insert("server", HeaderValue::from_static("werkzeug"));

    let returned = returned_response_headers(&upstream);
    assert_eq!(returned.get_all(SET_COOKIE).iter().count(), 2);
    assert!(returned.get("server").is_none());
}

#[test]
fn upstream_target_joins_without_double_slash() {
    assert_eq!(upstream_target("http://backend:5000", "/pay"), "http://backend:5000/pay");
    assert_eq!(upstream_target("http://backend:5000/", "/pay"), "http://backend:5000/pay");
}

#[test]
fn is_safe_segment_rejects_path_tricks() {
    assert!(is_safe_segment("65f1c2ab9d3e4f0012345678"));
    assert!(!is_safe_segment(".."));
    assert!(!is_safe_segment("1%2F2"));
    assert!(!is_safe_segment(""));
}

// =============================================================
// Handlers
// =============================================================

#[tokio::test]
async fn pay_without_upstream_returns_service_unavailable() {
    let resp = pay(State(test_state(None)), HeaderMap::new(), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(resp).await["errorMessage"], "payment backend not configured");
}

#[tokio::test]
async fn delete_rejects_unsafe_id_before_forwarding() {
    let resp = delete_celebrity(
        State(test_state(None)),
        Path("../admin".to_owned()),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pay_forwards_body_and_allowed_headers() {
    let upstream = Router::new().route(
        "/pay",
        post(|headers: HeaderMap, body: Bytes| async move {
            Json(serde_json::json!({
                "ResponseCode": "0",
                "echo": String::from_utf8_lossy(&body),
                "csrf": headers.get("x-csrftoken").and_then(|v| v.to_str().ok()),
                "leaked": headers.contains_key("x-internal"),
            }))
        }),
    );
    let base = spawn_upstream(upstream).await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("x-csrftoken", HeaderValue::from_static("tok-1"));
    headers.insert("x-internal", HeaderValue::from_static("1"));
    let body = Bytes::from_static(br#"{"phone":"254700000000","amount":"1"}"#);

    let resp = pay(State(test_state(Some(base))), headers, body).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["ResponseCode"], "0");
    assert_eq!(json["echo"], r#"{"phone":"254700000000","amount":"1"}"#);
    assert_eq!(json["csrf"], "tok-1");
    assert_eq!(json["leaked"], false);
}

#[tokio::test]
async fn upstream_error_status_and_body_pass_through() {
    let upstream = Router::new().route(
        "/delete_celebrity/{id}",
        post(|| async { (StatusCode::FORBIDDEN, Json(serde_json::json!({ "errorMessage": "CSRF token missing" }))) }),
    );
    let base = spawn_upstream(upstream).await;

    let resp = delete_celebrity(
        State(test_state(Some(base))),
        Path("42".to_owned()),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["errorMessage"], "CSRF token missing");
}

#[tokio::test]
async fn unreachable_upstream_returns_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resp = pay(State(test_state(Some(format!("http://{addr}")))), HeaderMap::new(), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(resp).await["errorMessage"], "payment backend unreachable");
}
