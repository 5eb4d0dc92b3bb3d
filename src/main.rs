use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hoteldesk::config::AppConfig;
use hoteldesk::handlers;
use hoteldesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        hotel = %config.hotel_name,
        idle_minutes = config.session_idle_minutes,
        "session-scoped booking desk"
    );

    let state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::pages::dashboard))
        .route("/dashboard", get(handlers::pages::dashboard))
        .route("/bookings", get(handlers::pages::bookings).post(handlers::bookings::submit_booking))
        .route("/bookings/action", post(handlers::bookings::submit_action))
        .route("/rooms", get(handlers::pages::rooms))
        .route("/customers", get(handlers::pages::customers))
        .route("/staff", get(handlers::pages::staff))
        .route("/static/style.css", get(handlers::pages::stylesheet))
        .route(
            "/api/bookings",
            get(handlers::api::list_bookings).post(handlers::api::create_booking),
        )
        .route("/api/bookings/export.csv", get(handlers::api::export_csv))
        .route(
            "/api/bookings/:index/action",
            post(handlers::api::apply_action),
        )
        .route("/api/dashboard", get(handlers::api::dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
