use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde_json::Value;

use crate::AppState;
use crate::controllers::SongController;

pub async fn list_songs_route(State(state): State<AppState>) -> Response {
    SongController::list(state.store.as_ref()).await
}

pub async fn get_song_route(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    SongController::get_by_id(state.store.as_ref(), id).await
}

pub async fn create_song_route(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    SongController::create(state.store.as_ref(), body).await
}

pub async fn update_song_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    SongController::update(state.store.as_ref(), id, body).await
}

pub async fn delete_song_route(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    SongController::delete(state.store.as_ref(), id).await
}
