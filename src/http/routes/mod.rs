pub mod offers;
pub mod orders;
use crate::models::health::BannerResponse;
use crate::state::AppState;
use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};

async fn banner() -> impl IntoResponse {
    let response = BannerResponse {
        message: "✨✈️✈️✈️👨🏻‍✈️👨🏻‍✈️👨🏻‍✈️🌎🌍🌏✨",
    };

    Json(response)
}

pub fn create_routes(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/", get(banner))
        .nest("/api", offers::routes(app_state.clone()))
        .nest("/api", orders::routes(app_state))
        .layer(cors)
}
