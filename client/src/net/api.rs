//! REST helpers for the payment and deletion endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result<_, ApiError>`; transport failures,
//! timeouts and undecodable bodies never escape as panics, so the UI layer
//! can always map an attempt to a terminal status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PayRequest, PayResponse};
use crate::config::{CSRF_HEADER, DELETE_CELEBRITY_PREFIX};

/// Failure of a single boundary call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server responded {0}")]
    Status(u16),
    /// Non-2xx reply carrying a gateway-shaped body, with its error text.
    #[error("payment rejected")]
    Rejected(Option<String>),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("missing anti-forgery token")]
    MissingCsrfToken,
    #[error("not available on server")]
    Unavailable,
}

/// A POST prepared for the browser fetch layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedPost {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

pub(crate) fn delete_celebrity_endpoint(id: &str) -> String {
    format!("{DELETE_CELEBRITY_PREFIX}/{id}")
}

/// Build the deletion request; the token always rides in `X-CSRFToken`.
pub fn build_delete_request(id: &str, csrf_token: &str) -> PreparedPost {
    PreparedPost {
        url: delete_celebrity_endpoint(id),
        headers: vec![(CSRF_HEADER, csrf_token.to_owned())],
    }
}

/// Classify a `/pay` reply.
///
/// A non-2xx reply is never accepted, whatever its `ResponseCode`; when it
/// still decodes as a gateway body its `errorMessage` rides along in
/// `ApiError::Rejected` so it reaches the user.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_pay_response(status: u16, body: &str) -> Result<PayResponse, ApiError> {
    let ok = (200..300).contains(&status);
    match serde_json::from_str::<PayResponse>(body) {
        Ok(parsed) if ok => Ok(parsed),
        Ok(parsed) if parsed.error_text().is_some() || parsed.response_code.is_some() => {
            Err(ApiError::Rejected(parsed.error_text().map(str::to_owned)))
        }
        Ok(_) => Err(ApiError::Status(status)),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Race `call` against a timer; the timer winning yields `ApiError::Timeout`.
#[cfg(feature = "hydrate")]
async fn with_timeout<T, F>(call: F, timeout_ms: u32) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    use futures::future::{Either, select};

    let timer = gloo_timers::future::TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(call);
    futures::pin_mut!(timer);
    match select(call, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Initiate a payment via `POST /pay` with a JSON `{phone, amount}` body.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, exceeds the payment
/// timeout, or the reply cannot be decoded as a gateway response.
pub async fn initiate_payment(request: &PayRequest) -> Result<PayResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::config::{PAY_ENDPOINT, PAY_TIMEOUT_MS};

        let call = async {
            let resp = gloo_net::http::Request::post(PAY_ENDPOINT)
                .json(request)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_pay_response(status, &body)
        };
        let result = with_timeout(call, PAY_TIMEOUT_MS).await;
        if let Err(e) = &result {
            log::warn!("payment request failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Delete a celebrity via `POST /delete_celebrity/{id}`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the server responds
/// with a non-OK status.
pub async fn delete_celebrity(id: &str, csrf_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let prepared = build_delete_request(id, csrf_token);
        let mut request = gloo_net::http::Request::post(&prepared.url);
        for (name, value) in &prepared.headers {
            request = request.header(name, value);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, csrf_token);
        Err(ApiError::Unavailable)
    }
}
