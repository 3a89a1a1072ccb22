mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use std::sync::Arc;
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing trip dataset path");
        std::process::exit(1);
    }
    let path = std::path::PathBuf::from(&args[1]);
    let state = Arc::new(AppState::new(path));

    let app = axum::Router::new()
        .route("/trips", get(api::trips))
        .route("/options", get(api::options))
        .route("/age", get(api::age))
        .route("/fetch", get(api::fetch_url))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
