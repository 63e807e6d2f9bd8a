//! Compile-time client configuration.
//!
//! Endpoint paths and browser keys shared by the network and util layers.
//! The host serves (or proxies) these paths, so they stay relative.

/// Payment-initiation endpoint.
pub const PAY_ENDPOINT: &str = "/pay";

/// Prefix of the celebrity deletion endpoint; the identifier is appended.
pub const DELETE_CELEBRITY_PREFIX: &str = "/delete_celebrity";

/// Header carrying the anti-forgery token on privileged requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `name` attribute of the page-level meta tag holding the anti-forgery token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Cookie the backend uses to hand the anti-forgery token to the renderer.
pub const CSRF_COOKIE: &str = "csrf_token";

/// `localStorage` key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Upper bound on a single payment request, in milliseconds.
pub const PAY_TIMEOUT_MS: u32 = 30_000;
