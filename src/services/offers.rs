use crate::models::offers::{OfferPassengersResponse, OfferRequestData, OffersResponse};
use crate::services::mapping::{
    build_offer_request, map_offer, offer_passengers, OFFER_PAGE_LIMIT, OFFER_SORT,
};
use crate::state::AppState;
use crate::utils::shared::{invalid_request_response, provider_error_response};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{event, info, Level};
use uuid::Uuid;

pub async fn handle_create_offer_request(
    State(app_state): State<AppState>,
    Json(req): Json<OfferRequestData>,
) -> Result<impl IntoResponse, Response> {
    let start = Instant::now();
    let request_id = format!("req-{}", Uuid::new_v4());

    let offer_request = match build_offer_request(&req) {
        Ok(payload) => payload,
        Err(e) => return Err(invalid_request_response(e)),
    };

    info!(
        "🛫 Creating offer request | {} {} -> {} ({} passengers)",
        request_id,
        req.from,
        req.destination,
        offer_request.passengers.len()
    );

    let created = app_state
        .duffel
        .create_offer_request(&offer_request)
        .await
        .map_err(provider_error_response)?;

    let elapsed = start.elapsed();
    event!(
        target: "perf",
        Level::INFO,
        request_id = %request_id,
        endpoint = "/api/offers",
        duration_ms = %elapsed.as_millis(),
        "API timing(create_offer_request)"
    );

    // The client expects the bare offer-request id as the JSON body
    Ok(Json(created.id))
}

pub async fn handle_list_offers(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let start = Instant::now();
    let request_id = format!("req-{}", Uuid::new_v4());

    let offers = app_state
        .duffel
        .list_offers(&id, OFFER_PAGE_LIMIT, OFFER_SORT)
        .await
        .map_err(provider_error_response)?;

    info!(
        "📋 Listed {} offers for offer request {}",
        offers.len(),
        id
    );

    let offers = offers.into_iter().map(map_offer).collect();

    let elapsed = start.elapsed();
    event!(
        target: "perf",
        Level::INFO,
        request_id = %request_id,
        endpoint = "/api/offers/{id}",
        duration_ms = %elapsed.as_millis(),
        "API timing(list_offers)"
    );

    Ok(Json(OffersResponse { offers }))
}

pub async fn handle_get_offer(
    State(app_state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let offer = app_state
        .duffel
        .get_offer(&offer_id)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(OfferPassengersResponse {
        passengers: offer_passengers(offer),
    }))
}
