use std::sync::Arc;

use crate::config::AppConfig;
use crate::duffel::client::DuffelClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub duffel: Arc<DuffelClient>,
}
