use serde::Deserialize;
use thiserror::Error;

/// One entry of Duffel's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMeta {
    pub status: Option<u16>,
    pub request_id: Option<String>,
}

/// The error envelope Duffel returns on any rejected request:
/// `{"errors": [...], "meta": {"status": ..., "request_id": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    pub meta: Option<ErrorMeta>,
}

impl ApiErrorBody {
    /// The first reported sub-error, which is what the client contract surfaces.
    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    pub fn status(&self) -> Option<u16> {
        self.meta.as_ref().and_then(|m| m.status)
    }

    pub fn summary(&self) -> String {
        match self.first() {
            Some(detail) => format!("{}: {}", detail.title, detail.message),
            None => "unknown error".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DuffelError {
    #[error("duffel rejected the request: {}", .0.summary())]
    Api(ApiErrorBody),

    #[error("transport error talking to duffel: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected upstream response (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid duffel client configuration: {0}")]
    Config(String),
}
