use crate::services::orders::{handle_create_order, handle_get_order};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/orders", post(handle_create_order))
        .route("/orders/{id}", get(handle_get_order))
        .with_state(app_state)
}
