//! Anti-forgery token plumbing.
//!
//! The server-rendered shell copies the backend's `csrf_token` cookie into a
//! `<meta name="csrf-token">` tag; privileged requests read it back from the
//! live document on every call so a refreshed token is always honored.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use crate::config::CSRF_COOKIE;
#[cfg(feature = "hydrate")]
use crate::config::CSRF_META_NAME;

/// Extract the anti-forgery token from a raw `Cookie` header value.
///
/// Empty values are treated as absent.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == CSRF_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_owned())
        .filter(|value| !value.is_empty())
}

/// Token for the request currently being rendered on the server.
///
/// Returns `None` in the browser; the meta tag is already in the DOM there.
pub fn token_for_render() -> Option<String> {
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;

        let parts = use_context::<http::request::Parts>()?;
        parts
            .headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(token_from_cookie_header)
    }
    #[cfg(not(feature = "ssr"))]
    {
        None
    }
}

/// Read the token from the page's `<meta name="csrf-token">` tag.
pub fn read_meta_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{CSRF_META_NAME}\"]");
        let meta = doc.query_selector(&selector).ok()??;
        meta.get_attribute("content").filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
