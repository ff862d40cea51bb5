use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}
