use crate::services::offers::{handle_create_offer_request, handle_get_offer, handle_list_offers};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/offers", post(handle_create_offer_request))
        // the front-end used both spellings at different points; keep both
        .route("/offer_requests", post(handle_create_offer_request))
        .route("/offers/{id}", get(handle_list_offers))
        .route("/offer/{offer_id}", get(handle_get_offer))
        .with_state(app_state)
}
