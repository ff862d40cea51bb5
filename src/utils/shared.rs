use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::duffel::error::DuffelError;
use crate::models::errors::ErrorBody;

/// Maps an upstream failure onto the `{title, message}` contract. Provider
/// rejections carry the provider's reported status; anything that never got
/// a provider verdict is a 502.
pub fn provider_error_response(err: DuffelError) -> Response {
    match err {
        DuffelError::Api(body) => {
            let status = body
                .status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::BAD_REQUEST);

            let (title, message) = match body.first() {
                Some(detail) => (detail.title.clone(), detail.message.clone()),
                None => ("provider_error".to_string(), body.summary()),
            };

            error!("❌ Duffel rejected the request: {} - {}", title, message);
            (status, Json(ErrorBody { title, message })).into_response()
        }
        other => {
            error!("💥 Upstream call failed: {}", other);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    title: "upstream_error".to_string(),
                    message: other.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn invalid_request_response(err: anyhow::Error) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            title: "invalid_request".to_string(),
            message: format!("{:#}", err),
        }),
    )
        .into_response()
}
