use serde::Serialize;

/// The error body every route answers with: the first reported provider
/// sub-error, or a local title for failures that never reached the provider.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub title: String,
    pub message: String,
}
