use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::DuffelConfig;
use crate::duffel::error::{ApiErrorBody, DuffelError};
use crate::duffel::types::{CreateOfferRequest, CreateOrder, Offer, OfferRequest, Order};

/// Duffel wraps every request and response body in a `data` envelope.
#[derive(Serialize)]
struct DuffelRequest<T> {
    data: T,
}

#[derive(Deserialize)]
struct DuffelResponse<T> {
    data: T,
}

pub struct DuffelClient {
    http: Client,
    base_url: String,
}

impl DuffelClient {
    pub fn new(config: &DuffelConfig) -> Result<Self, DuffelError> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| DuffelError::Config("access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let version = header::HeaderValue::from_str(&config.api_version)
            .map_err(|_| DuffelError::Config("api_version is not a valid header value".to_string()))?;
        headers.insert("Duffel-Version", version);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn create_offer_request(
        &self,
        request: &CreateOfferRequest,
    ) -> Result<OfferRequest, DuffelError> {
        self.post("/air/offer_requests", &[("return_offers", "false")], request)
            .await
    }

    pub async fn list_offers(
        &self,
        offer_request_id: &str,
        limit: u32,
        sort: &str,
    ) -> Result<Vec<Offer>, DuffelError> {
        let limit = limit.to_string();
        self.get(
            "/air/offers",
            &[
                ("offer_request_id", offer_request_id),
                ("limit", limit.as_str()),
                ("sort", sort),
            ],
        )
        .await
    }

    pub async fn get_offer(&self, offer_id: &str) -> Result<Offer, DuffelError> {
        self.get(&format!("/air/offers/{}", offer_id), &[]).await
    }

    pub async fn create_order(&self, request: &CreateOrder) -> Result<Order, DuffelError> {
        self.post("/air/orders", &[], request).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Order, DuffelError> {
        self.get(&format!("/air/orders/{}", order_id), &[]).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DuffelError> {
        let url = format!("{}{}", self.base_url, path);
        info!("Sending GET request to {}", url);

        let res = self.http.get(&url).query(query).send().await?;
        Self::decode(res).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T, DuffelError> {
        let url = format!("{}{}", self.base_url, path);
        info!("Sending POST request to {}", url);

        let res = self
            .http
            .post(&url)
            .query(query)
            .json(&DuffelRequest { data: body })
            .send()
            .await?;
        Self::decode(res).await
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, DuffelError> {
        let status = res.status();
        if status.is_success() {
            let envelope = res.json::<DuffelResponse<T>>().await?;
            return Ok(envelope.data);
        }

        let body = res.text().await?;
        error!("❌ Error response from Duffel: status={}, body={}", status, body);

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) if !api.errors.is_empty() => Err(DuffelError::Api(api)),
            _ => Err(DuffelError::Upstream {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
