use std::sync::Arc;

use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use song_service::config::MongoConfig;
use song_service::db::MongoStore;
use song_service::seed::SEED_SONGS;
use song_service::{AppState, app};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let config = MongoConfig::from_env();
    info!("The value of MONGODB_SERVICE is: {}", config.service());

    let store = match MongoStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to build MongoDB client: {}", e);
            std::process::exit(1);
        }
    };

    // The driver connects lazily, so bad credentials surface here. Startup
    // continues either way; each handler reports its own store errors.
    match store.seed(SEED_SONGS.clone()).await {
        Ok(()) => info!("Seeded {} songs", SEED_SONGS.len()),
        Err(e) => error!("Failed to seed song collection: {}", e),
    }

    let state = AppState {
        store: Arc::new(store),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!("Song service listening on 0.0.0.0:{}", port);

    axum::serve(listener, app(state)).await.unwrap();
}
