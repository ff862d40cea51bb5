//! The slice of the Duffel wire schema this service consumes. Field names
//! match the upstream API, so no renaming is needed on deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------- offer request creation ----------

#[derive(Debug, Clone, Serialize)]
pub struct CreateOfferRequest {
    pub slices: Vec<OfferRequestSlice>,
    pub passengers: Vec<OfferRequestPassenger>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferRequestSlice {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

/// Duffel accepts a passenger either as `{"type": "adult"}` or, for
/// children, as `{"age": N}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OfferRequestPassenger {
    Typed {
        #[serde(rename = "type")]
        passenger_type: String,
    },
    Aged { age: u8 },
}

impl OfferRequestPassenger {
    pub fn adult() -> Self {
        Self::Typed {
            passenger_type: "adult".to_string(),
        }
    }

    pub fn child(age: u8) -> Self {
        Self::Aged { age }
    }
}

/// The created offer request. Duffel returns much more; the id is all the
/// caller gets back.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRequest {
    pub id: String,
}

// ---------- offers ----------

#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    pub id: String,
    pub total_amount: String,
    pub total_currency: String,
    pub owner: Carrier,
    pub passengers: Vec<OfferPassenger>,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferPassenger {
    pub id: String,
    #[serde(rename = "type")]
    pub passenger_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Carrier {
    pub name: Option<String>,
    pub iata_code: Option<String>,
    pub logo_symbol_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slice {
    pub id: String,
    pub duration: Option<String>,
    pub origin: Place,
    pub destination: Place,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub iata_code: Option<String>,
    pub iata_city_code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    pub id: String,
    pub departing_at: String,
    pub arriving_at: String,
    pub marketing_carrier: Carrier,
}

// ---------- orders ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerTitle {
    #[serde(alias = "MR")]
    Mr,
    #[serde(alias = "MS")]
    Ms,
    #[serde(alias = "MRS")]
    Mrs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerGender {
    M,
    F,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrder {
    pub selected_offers: Vec<String>,
    /// "hold" defers payment instead of charging at booking time.
    #[serde(rename = "type")]
    pub order_type: &'static str,
    pub passengers: Vec<CreateOrderPassenger>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderPassenger {
    pub id: String,
    pub title: PassengerTitle,
    pub gender: PassengerGender,
    pub given_name: String,
    pub family_name: String,
    pub born_on: NaiveDate,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: String,
    pub total_amount: String,
    pub total_currency: String,
    pub passengers: Vec<OrderPassenger>,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderPassenger {
    pub id: String,
    pub title: Option<String>,
    pub gender: Option<String>,
    pub given_name: String,
    pub family_name: String,
    pub born_on: Option<String>,
}
