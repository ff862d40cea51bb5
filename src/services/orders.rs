use crate::models::orders::{OrderRequestData, OrderResponse};
use crate::services::mapping::{build_order, map_order};
use crate::state::AppState;
use crate::utils::shared::provider_error_response;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{event, info, Level};
use uuid::Uuid;

pub async fn handle_create_order(
    State(app_state): State<AppState>,
    Json(req): Json<OrderRequestData>,
) -> Result<impl IntoResponse, Response> {
    let start = Instant::now();
    let request_id = format!("req-{}", Uuid::new_v4());

    let order_request = build_order(&req);
    info!(
        "🎫 Creating order | {} offer {} ({} passengers)",
        request_id,
        req.selected_offer,
        order_request.passengers.len()
    );

    let order = app_state
        .duffel
        .create_order(&order_request)
        .await
        .map_err(provider_error_response)?;

    let elapsed = start.elapsed();
    event!(
        target: "perf",
        Level::INFO,
        request_id = %request_id,
        endpoint = "/api/orders",
        duration_ms = %elapsed.as_millis(),
        "API timing(create_order)"
    );

    // The client expects the bare order id as the JSON body
    Ok(Json(order.id))
}

pub async fn handle_get_order(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let order = app_state
        .duffel
        .get_order(&id)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(OrderResponse {
        order: map_order(order),
    }))
}
