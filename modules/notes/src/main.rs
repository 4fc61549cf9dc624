//! Notes Service — JSON-file backed note storage over HTTP.
//!
//! Serves CRUD endpoints under `/data` plus the browser client's static files.
//!
//! Default: http://127.0.0.1:3001/

mod config;
mod notes;
mod routes;

use config::ServiceConfig;
use notes::NoteStore;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServiceConfig::from_env();

    let state = Arc::new(AppState {
        store: NoteStore::new(&config.data_file),
        public_dir: config.public_dir.clone(),
    });

    log::info!(
        "Using notes file {} (public dir: {})",
        state.store.path().display(),
        state.public_dir.display(),
    );

    // Start from an empty collection; an unwritable data path fails here, not on first create
    if !state.store.path().exists() {
        if let Err(e) = state.store.save(&[]).await {
            log::error!("Failed to initialize notes file: {}", e);
            std::process::exit(1);
        }
        log::info!("Created empty notes file {}", state.store.path().display());
    }

    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("Notes Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
