use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod routers;
pub mod seed;

use db::SongStore;
use routers::{
    count_route, create_song_route, delete_song_route, get_song_route, health_route,
    list_songs_route, test_mongo_route, update_song_route,
};

/// Shared handler state: one long-lived store handle, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SongStore>,
}

/// Builds the service router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_route))
        .route("/count", get(count_route))
        .route("/test-mongo", get(test_mongo_route))
        .route("/song", get(list_songs_route).post(create_song_route))
        .route(
            "/song/{id}",
            get(get_song_route)
                .put(update_song_route)
                .delete(delete_song_route),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
