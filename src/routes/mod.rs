//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the forwarded backend endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. WASM/CSS assets are
//! served from the Leptos site root under `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::state::AppState;

/// Backend endpoints the client calls directly.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/pay", post(proxy::pay))
        .route("/delete_celebrity/{id}", post(proxy::delete_celebrity))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Forwarded endpoints + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
