use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::SongStore;
use crate::models::song::{CountResponse, HealthResponse, MessageResponse, SampleSongResponse};

pub struct RootController;

impl RootController {
    /// GET /health. Fixed body, never touches the store.
    pub async fn health() -> Response {
        let body = HealthResponse {
            status: "OK".to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }

    /// GET /count. No explicit error contract: a store failure surfaces as a
    /// bare 500 with the cause logged.
    pub async fn count(store: &dyn SongStore) -> Response {
        match store.count().await {
            Ok(count) => (StatusCode::OK, Json(CountResponse { count })).into_response(),
            Err(e) => {
                error!("Error counting songs: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// GET /test-mongo. Fetches one arbitrary document to prove the store is
    /// reachable; empty collection is still a success.
    pub async fn test_mongo(store: &dyn SongStore) -> Response {
        match store.find_any().await {
            Ok(Some(song)) => {
                let body = SampleSongResponse {
                    message: "Successfully connected to MongoDB!".to_string(),
                    sample_song: song,
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Ok(None) => {
                let body = MessageResponse {
                    message: "No data found in MongoDB!".to_string(),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                error!("Error connecting to MongoDB: {}", e);
                let body = MessageResponse {
                    message: "Failed to connect to MongoDB".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
