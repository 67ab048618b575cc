//! Placeholder hosting service for perch.
//!
//! Exposes status endpoints and a stub upload route. It deliberately does
//! not open a webcam or run the pose model: server-side processing is a
//! non-goal, and the upload handler answers 501 to make that explicit.

mod routes;

use axum::Router;
use axum::routing::{get, post};
use log::Level;
use perch_base::logging::init_stdout_logger;
use std::env;

pub fn app() -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/info", get(routes::info))
        .route("/process-image", post(routes::process_image))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger(Level::Info);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("perch-web listening on {addr}");

    axum::serve(listener, app()).await?;
    Ok(())
}
