//! # salarycast-server
//!
//! Web front-end for the salary prediction model: a single-page form plus
//! a small JSON API. The artifact is loaded once at startup; a load
//! failure is kept in application state and surfaced on the page instead
//! of aborting the process.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use predictor_facade::{PredictionEngine, PredictorError, DEFAULT_MODEL_FILE};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
///
/// The engine is read-only after startup, so handlers share it without
/// locks. A failed load keeps the error for display.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Result<PredictionEngine, PredictorError>>,
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salarycast_server=info,tower_http=info".into()),
        )
        .init();

    let engine = PredictionEngine::from_default_file();
    match &engine {
        Ok(_) => tracing::info!("model artifact '{}' loaded", DEFAULT_MODEL_FILE),
        Err(error) => tracing::error!("model artifact unavailable: {}", error),
    }

    let state = AppState {
        engine: Arc::new(engine),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        // The form page and its submission target
        .route("/", get(routes::form_page).post(routes::submit_form))
        // JSON API
        .route("/api/v1/predict", post(routes::predict))
        // Health endpoints
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "salarycast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
