use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::{self, Bson, Document};
use serde_json::Value;
use tracing::error;

use crate::db::{SongStore, merge_fields};
use crate::models::song::{DuplicateResponse, InsertedResponse, MessageResponse, SongListResponse};

/// The store identity as a flat string. Raw-document responses keep the
/// extended-JSON wrapper; constructed bodies (create, update) flatten it.
fn identity_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

pub struct SongController;

impl SongController {
    /// GET /song. Every document, raw, in whatever order the store returns.
    pub async fn list(store: &dyn SongStore) -> Response {
        match store.find_all().await {
            Ok(songs) => (StatusCode::OK, Json(SongListResponse { songs })).into_response(),
            Err(e) => {
                error!("Error fetching songs: {}", e);
                let body = MessageResponse {
                    message: "Failed to fetch songs".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }

    /// GET /song/{id}. Lookup on the `id` field, not the store identity.
    pub async fn get_by_id(store: &dyn SongStore, id: i64) -> Response {
        match store.find_by_id(id).await {
            Ok(Some(song)) => (StatusCode::OK, Json(song)).into_response(),
            Ok(None) => {
                let body = MessageResponse {
                    message: format!("Song with id {} not found", id),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            Err(e) => {
                error!("Error fetching song with id {}: {}", id, e);
                let body = MessageResponse {
                    message: "Failed to fetch song".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }

    /// POST /song. A body without an integer `id` has no error contract and
    /// fails as a bare 500. An existing `id` is rejected with 302 and the
    /// stored document is left untouched.
    pub async fn create(store: &dyn SongStore, body: Value) -> Response {
        let Some(id) = body.get("id").and_then(Value::as_i64) else {
            error!("create request body has no integer id field");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };
        let song = match bson::to_document(&body) {
            Ok(doc) => doc,
            Err(e) => {
                error!("create request body is not a document: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        match store.find_by_id(id).await {
            Ok(Some(_)) => {
                let body = DuplicateResponse {
                    message: format!("song with id {} already present", id),
                };
                (StatusCode::FOUND, Json(body)).into_response()
            }
            Ok(None) => match store.insert(song).await {
                Ok(inserted_id) => {
                    let body = InsertedResponse {
                        inserted_id: identity_string(&inserted_id),
                    };
                    (StatusCode::CREATED, Json(body)).into_response()
                }
                Err(e) => {
                    error!("Error inserting song with id {}: {}", id, e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Err(e) => {
                error!("Error looking up song with id {}: {}", id, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// PUT /song/{id}. Field-level merge: body fields overwrite, unmentioned
    /// fields survive. A merge that changed something answers 201 with the
    /// full post-merge document; a no-op merge answers 200.
    pub async fn update(store: &dyn SongStore, id: i64, body: Value) -> Response {
        let fields = match bson::to_document(&body) {
            Ok(doc) => doc,
            Err(e) => {
                error!("update request body is not a document: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let existing = match store.find_by_id(id).await {
            Ok(existing) => existing,
            Err(e) => {
                error!("Error looking up song with id {}: {}", id, e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let Some(existing) = existing else {
            let body = MessageResponse {
                message: "song not found".to_string(),
            };
            return (StatusCode::NOT_FOUND, Json(body)).into_response();
        };
        match store.update(id, fields.clone()).await {
            Ok(outcome) if outcome.modified => {
                let mut response = Document::new();
                let identity = existing.get("_id").map(identity_string).unwrap_or_default();
                response.insert("_id", identity);
                response.insert("id", id);
                for (key, value) in merge_fields(&existing, &fields) {
                    if key != "_id" && key != "id" {
                        response.insert(key, value);
                    }
                }
                (StatusCode::CREATED, Json(response)).into_response()
            }
            Ok(_) => {
                let body = MessageResponse {
                    message: "song found, but nothing updated".to_string(),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                error!("Error updating song with id {}: {}", id, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// DELETE /song/{id}.
    pub async fn delete(store: &dyn SongStore, id: i64) -> Response {
        match store.delete(id).await {
            Ok(0) => {
                let body = MessageResponse {
                    message: "song not found".to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            Ok(_) => StatusCode::NO_CONTENT.into_response(),
            Err(e) => {
                error!("Error deleting song with id {}: {}", id, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
