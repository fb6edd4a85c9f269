use axum::{extract::State, response::Response};

use crate::AppState;
use crate::controllers::RootController;

pub async fn health_route() -> Response {
    RootController::health().await
}

pub async fn count_route(State(state): State<AppState>) -> Response {
    RootController::count(state.store.as_ref()).await
}

pub async fn test_mongo_route(State(state): State<AppState>) -> Response {
    RootController::test_mongo(state.store.as_ref()).await
}
