use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::duffel::types::{PassengerGender, PassengerTitle};

/// A booking submission: the offer the caller picked plus the full identity
/// and contact details for every passenger on that offer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestData {
    pub selected_offer: String,
    pub passengers: Vec<OrderPassengerData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPassengerData {
    pub id: String,
    pub born_on: NaiveDate,
    pub title: PassengerTitle,
    pub gender: PassengerGender,
    pub first_name: String,
    pub family_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: OrderDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub total_amount: String,
    pub total_currency: String,
    pub passengers: Vec<OrderPassengerDetails>,
    pub slices: Vec<super::offers::SliceSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPassengerDetails {
    pub id: String,
    pub title: Option<String>,
    pub gender: Option<String>,
    pub first_name: String,
    pub family_name: String,
    pub born_on: Option<String>,
}
