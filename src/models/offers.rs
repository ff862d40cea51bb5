use serde::{Deserialize, Serialize};

/// The search form the front-end submits. Field names (and the `formated`
/// misspelling) are the contract the client already speaks; adult and child
/// counts arrive as strings.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequestData {
    pub trip_type: String,
    pub from: String,
    pub destination: String,
    pub formated_depart_date: String,
    pub formated_return_date: Option<String>,
    pub adults: String,
    pub children: String,
}

#[derive(Debug, Serialize)]
pub struct OffersResponse {
    pub offers: Vec<OfferSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub id: String,
    pub airline_logo: Option<String>,
    pub total_amount: String,
    pub total_currency: String,
    pub passengers: Vec<OfferPassengerSummary>,
    pub slices: Vec<SliceSummary>,
}

#[derive(Debug, Serialize)]
pub struct OfferPassengerSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub passenger_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SliceSummary {
    pub id: String,
    pub duration: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub segments: Vec<SegmentSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    pub id: String,
    pub departing_at: String,
    pub arriving_at: String,
    pub airline_logo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferPassengersResponse {
    pub passengers: Vec<OfferPassengerSummary>,
}
