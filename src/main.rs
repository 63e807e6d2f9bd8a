mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    match config.upstream_url.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /pay and deletes"),
        None => tracing::warn!("UPSTREAM_URL not set; /pay and deletes will return 503"),
    }

    let state = match state::AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "http client init failed");
            std::process::exit(1);
        }
    };
    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "celebhub listening");
    axum::serve(listener, app).await.expect("server failed");
}
