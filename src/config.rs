use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    pub port: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DuffelConfig {
    pub api_url: String,
    pub api_version: String,
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub debug: bool,
    pub http: HttpConfig,
    pub duffel: DuffelConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();
        let config_path = args
            .get(1)
            .cloned()
            .unwrap_or_else(|| "config/default".to_string());

        let mut config: AppConfig = Config::builder()
            .add_source(File::with_name(&config_path))
            .build()?
            .try_deserialize()?;

        // The Duffel bearer token lives in the environment, not in the file
        if let Ok(token) = env::var("DUFFEL_ACCESS_TOKEN") {
            config.duffel.access_token = token;
        }

        Ok(config)
    }
}
