use super::*;

#[test]
fn delete_celebrity_endpoint_formats_expected_path() {
    assert_eq!(delete_celebrity_endpoint("42"), "/delete_celebrity/42");
}

#[test]
fn build_delete_request_attaches_csrf_header() {
    let prepared = build_delete_request("abc", "tok-1");
    assert_eq!(prepared.url, "/delete_celebrity/abc");
    assert_eq!(prepared.headers, vec![("X-CSRFToken", "tok-1".to_owned())]);
}

#[test]
fn build_delete_request_uses_token_of_each_call() {
    let first = build_delete_request("1", "old");
    let second = build_delete_request("1", "new");
    assert_eq!(first.headers[0].1, "old");
    assert_eq!(second.headers[0].1, "new");
}

#[test]
fn decode_pay_response_accepts_ok_body() {
    let parsed = decode_pay_response(200, r#"{"ResponseCode":"0"}"#).unwrap();
    assert!(parsed.is_accepted());
}

#[test]
fn decode_pay_response_keeps_error_body_on_failure_status() {
    assert_eq!(
        decode_pay_response(400, r#"{"errorCode":"400.002.02","errorMessage":"Bad Request - Invalid PhoneNumber"}"#),
        Err(ApiError::Rejected(Some("Bad Request - Invalid PhoneNumber".to_owned())))
    );
}

#[test]
fn decode_pay_response_never_accepts_failure_status() {
    assert_eq!(
        decode_pay_response(500, r#"{"ResponseCode":"0"}"#),
        Err(ApiError::Rejected(None))
    );
}

#[test]
fn decode_pay_response_maps_empty_error_body_to_status() {
    assert_eq!(decode_pay_response(500, "{}"), Err(ApiError::Status(500)));
}

#[test]
fn decode_pay_response_maps_html_error_page_to_status() {
    assert_eq!(
        decode_pay_response(502, "<html>Bad Gateway</html>"),
        Err(ApiError::Status(502))
    );
}

#[test]
fn decode_pay_response_rejects_malformed_ok_body() {
    assert!(matches!(decode_pay_response(200, "not json"), Err(ApiError::Decode(_))));
    assert!(matches!(decode_pay_response(200, "[1,2]"), Err(ApiError::Decode(_))));
}

#[test]
fn api_error_display_is_human_readable() {
    assert_eq!(ApiError::Status(403).to_string(), "server responded 403");
    assert_eq!(ApiError::MissingCsrfToken.to_string(), "missing anti-forgery token");
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let request = PayRequest::from_form("254700000000", "10").unwrap();
    let pay = block_on_ready(initiate_payment(&request));
    assert_eq!(pay, Err(ApiError::Unavailable));
    let delete = block_on_ready(delete_celebrity("1", "tok"));
    assert_eq!(delete, Err(ApiError::Unavailable));
}

/// Drive a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended"),
    }
}
