//! The shape transforms between the simplified client contract and the
//! Duffel schema. Everything here is a rename or a direct copy; keeping the
//! functions pure keeps them testable without a live credential.

use anyhow::{Context, Result};

use crate::duffel::types::{
    CreateOfferRequest, CreateOrder, CreateOrderPassenger, Offer, OfferRequestPassenger,
    OfferRequestSlice, Order, Slice,
};
use crate::models::offers::{
    OfferPassengerSummary, OfferRequestData, OfferSummary, SegmentSummary, SliceSummary,
};
use crate::models::orders::{OrderDetails, OrderPassengerDetails, OrderRequestData};

/// Children are booked with a fixed placeholder age; the search form does
/// not collect real ages.
pub const CHILD_PLACEHOLDER_AGE: u8 = 5;

/// Only direct flights are requested.
pub const MAX_CONNECTIONS: u32 = 0;

pub const OFFER_PAGE_LIMIT: u32 = 5;
pub const OFFER_SORT: &str = "total_amount";

/// Builds the Duffel offer-request payload: one passenger entry per adult,
/// then one per child, one outbound slice, and for return trips a second
/// slice with origin and destination swapped.
pub fn build_offer_request(data: &OfferRequestData) -> Result<CreateOfferRequest> {
    let adults: u32 = data
        .adults
        .trim()
        .parse()
        .context("adults must be a number")?;
    let children: u32 = data
        .children
        .trim()
        .parse()
        .context("children must be a number")?;

    let mut passengers = Vec::with_capacity((adults + children) as usize);
    for _ in 0..adults {
        passengers.push(OfferRequestPassenger::adult());
    }
    for _ in 0..children {
        passengers.push(OfferRequestPassenger::child(CHILD_PLACEHOLDER_AGE));
    }

    let mut slices = vec![OfferRequestSlice {
        origin: data.from.clone(),
        destination: data.destination.clone(),
        departure_date: data.formated_depart_date.clone(),
    }];

    if data.trip_type == "return" {
        let return_date = data
            .formated_return_date
            .as_ref()
            .context("return trips need a formatedReturnDate")?;
        slices.push(OfferRequestSlice {
            origin: data.destination.clone(),
            destination: data.from.clone(),
            departure_date: return_date.clone(),
        });
    }

    Ok(CreateOfferRequest {
        slices,
        passengers,
        max_connections: MAX_CONNECTIONS,
    })
}

pub fn map_offer(offer: Offer) -> OfferSummary {
    OfferSummary {
        id: offer.id,
        airline_logo: offer.owner.logo_symbol_url,
        total_amount: offer.total_amount,
        total_currency: offer.total_currency,
        passengers: offer
            .passengers
            .into_iter()
            .map(|pass| OfferPassengerSummary {
                id: pass.id,
                passenger_type: pass.passenger_type,
            })
            .collect(),
        slices: offer.slices.into_iter().map(map_slice).collect(),
    }
}

/// The single-offer projection: just the passenger list, which the client
/// uses to seed order creation.
pub fn offer_passengers(offer: Offer) -> Vec<OfferPassengerSummary> {
    offer
        .passengers
        .into_iter()
        .map(|pass| OfferPassengerSummary {
            id: pass.id,
            passenger_type: pass.passenger_type,
        })
        .collect()
}

fn map_slice(slice: Slice) -> SliceSummary {
    SliceSummary {
        id: slice.id,
        duration: slice.duration,
        origin: slice.origin.iata_city_code,
        destination: slice.destination.iata_city_code,
        segments: slice
            .segments
            .into_iter()
            .map(|segment| SegmentSummary {
                id: segment.id,
                departing_at: segment.departing_at,
                arriving_at: segment.arriving_at,
                airline_logo: segment.marketing_carrier.logo_symbol_url,
            })
            .collect(),
    }
}

/// Maps a booking submission to Duffel's create-order payload. Payment is
/// deferred ("hold"); contact details come from the caller.
pub fn build_order(data: &OrderRequestData) -> CreateOrder {
    CreateOrder {
        selected_offers: vec![data.selected_offer.clone()],
        order_type: "hold",
        passengers: data
            .passengers
            .iter()
            .map(|pass| CreateOrderPassenger {
                id: pass.id.clone(),
                title: pass.title,
                gender: pass.gender,
                given_name: pass.first_name.clone(),
                family_name: pass.family_name.clone(),
                born_on: pass.born_on,
                email: pass.email.clone(),
                phone_number: pass.phone_number.clone(),
            })
            .collect(),
    }
}

pub fn map_order(order: Order) -> OrderDetails {
    OrderDetails {
        id: order.id,
        total_amount: order.total_amount,
        total_currency: order.total_currency,
        passengers: order
            .passengers
            .into_iter()
            .map(|pass| OrderPassengerDetails {
                id: pass.id,
                title: pass.title,
                gender: pass.gender,
                first_name: pass.given_name,
                family_name: pass.family_name,
                born_on: pass.born_on,
            })
            .collect(),
        slices: order.slices.into_iter().map(map_slice).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search(trip_type: &str, return_date: Option<&str>) -> OfferRequestData {
        OfferRequestData {
            trip_type: trip_type.to_string(),
            from: "LHR".to_string(),
            destination: "JFK".to_string(),
            formated_depart_date: "2026-09-01".to_string(),
            formated_return_date: return_date.map(|d| d.to_string()),
            adults: "2".to_string(),
            children: "1".to_string(),
        }
    }

    #[test]
    fn builds_adults_then_children_in_order() {
        let payload = build_offer_request(&search("one-way", None)).unwrap();

        let passengers = serde_json::to_value(&payload.passengers).unwrap();
        assert_eq!(
            passengers,
            json!([{ "type": "adult" }, { "type": "adult" }, { "age": 5 }])
        );
    }

    #[test]
    fn one_way_trip_builds_a_single_slice() {
        let payload = build_offer_request(&search("one-way", None)).unwrap();

        assert_eq!(payload.slices.len(), 1);
        assert_eq!(payload.slices[0].origin, "LHR");
        assert_eq!(payload.slices[0].destination, "JFK");
        assert_eq!(payload.slices[0].departure_date, "2026-09-01");
        assert_eq!(payload.max_connections, 0);
    }

    #[test]
    fn return_trip_appends_the_inverse_slice() {
        let payload = build_offer_request(&search("return", Some("2026-09-10"))).unwrap();

        assert_eq!(payload.slices.len(), 2);
        assert_eq!(payload.slices[1].origin, "JFK");
        assert_eq!(payload.slices[1].destination, "LHR");
        assert_eq!(payload.slices[1].departure_date, "2026-09-10");
    }

    #[test]
    fn unknown_trip_types_build_a_single_slice() {
        let payload = build_offer_request(&search("multi-city", None)).unwrap();
        assert_eq!(payload.slices.len(), 1);
    }

    #[test]
    fn return_trip_without_a_return_date_is_rejected() {
        let err = build_offer_request(&search("return", None)).unwrap_err();
        assert!(err.to_string().contains("formatedReturnDate"));
    }

    #[test]
    fn non_numeric_counts_are_rejected() {
        let mut data = search("one-way", None);
        data.adults = "two".to_string();
        assert!(build_offer_request(&data).is_err());

        let mut data = search("one-way", None);
        data.children = "".to_string();
        assert!(build_offer_request(&data).is_err());
    }

    #[test]
    fn zero_counts_build_an_empty_passenger_list() {
        let mut data = search("one-way", None);
        data.adults = "0".to_string();
        data.children = "0".to_string();

        let payload = build_offer_request(&data).unwrap();
        assert!(payload.passengers.is_empty());
    }

    fn offer_fixture() -> Offer {
        serde_json::from_value(json!({
            "id": "off_0000AeJ4E8Pkcyv24J2Fjg",
            "total_amount": "450.00",
            "total_currency": "GBP",
            "owner": {
                "name": "British Airways",
                "iata_code": "BA",
                "logo_symbol_url": "https://assets.duffel.com/img/airlines/BA.svg"
            },
            "passengers": [
                { "id": "pas_1", "type": "adult" },
                { "id": "pas_2", "type": null }
            ],
            "slices": [{
                "id": "sli_1",
                "duration": "PT7H45M",
                "origin": { "iata_code": "LHR", "iata_city_code": "LON", "name": "Heathrow" },
                "destination": { "iata_code": "JFK", "iata_city_code": "NYC", "name": "John F. Kennedy" },
                "segments": [{
                    "id": "seg_1",
                    "departing_at": "2026-09-01T09:25:00",
                    "arriving_at": "2026-09-01T12:10:00",
                    "marketing_carrier": {
                        "name": "British Airways",
                        "iata_code": "BA",
                        "logo_symbol_url": "https://assets.duffel.com/img/airlines/BA.svg"
                    }
                }]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn map_offer_is_a_pure_rename() {
        let mapped = serde_json::to_value(map_offer(offer_fixture())).unwrap();

        assert_eq!(
            mapped,
            json!({
                "id": "off_0000AeJ4E8Pkcyv24J2Fjg",
                "airlineLogo": "https://assets.duffel.com/img/airlines/BA.svg",
                "totalAmount": "450.00",
                "totalCurrency": "GBP",
                "passengers": [
                    { "id": "pas_1", "type": "adult" },
                    { "id": "pas_2", "type": null }
                ],
                "slices": [{
                    "id": "sli_1",
                    "duration": "PT7H45M",
                    "origin": "LON",
                    "destination": "NYC",
                    "segments": [{
                        "id": "seg_1",
                        "departingAt": "2026-09-01T09:25:00",
                        "arrivingAt": "2026-09-01T12:10:00",
                        "airlineLogo": "https://assets.duffel.com/img/airlines/BA.svg"
                    }]
                }]
            })
        );
    }

    #[test]
    fn absent_upstream_logo_stays_null() {
        let mut offer = offer_fixture();
        offer.owner.logo_symbol_url = None;

        let mapped = serde_json::to_value(map_offer(offer)).unwrap();
        assert_eq!(mapped["airlineLogo"], json!(null));
    }

    #[test]
    fn offer_passengers_projects_only_the_passenger_list() {
        let passengers = offer_passengers(offer_fixture());

        assert_eq!(passengers.len(), 2);
        assert_eq!(passengers[0].id, "pas_1");
        assert_eq!(passengers[0].passenger_type.as_deref(), Some("adult"));
    }

    #[test]
    fn build_order_maps_passengers_and_defers_payment() {
        let data: OrderRequestData = serde_json::from_value(json!({
            "selectedOffer": "off_1",
            "passengers": [{
                "id": "pas_1",
                "bornOn": "1990-04-12",
                "title": "mrs",
                "gender": "f",
                "firstName": "Bessie",
                "familyName": "Coleman",
                "email": "bessie@example.com",
                "phoneNumber": "+14155550132"
            }]
        }))
        .unwrap();

        let payload = serde_json::to_value(build_order(&data)).unwrap();
        assert_eq!(payload["type"], "hold");
        assert_eq!(payload["selected_offers"], json!(["off_1"]));
        assert_eq!(payload["passengers"][0]["given_name"], "Bessie");
        assert_eq!(payload["passengers"][0]["family_name"], "Coleman");
        assert_eq!(payload["passengers"][0]["phone_number"], "+14155550132");
        assert_eq!(payload["passengers"][0]["email"], "bessie@example.com");
    }

    #[test]
    fn map_order_carries_identity_and_slices() {
        let order: Order = serde_json::from_value(json!({
            "id": "ord_1",
            "total_amount": "900.00",
            "total_currency": "GBP",
            "passengers": [{
                "id": "pas_1",
                "title": "mrs",
                "gender": "f",
                "given_name": "Bessie",
                "family_name": "Coleman",
                "born_on": "1990-04-12"
            }],
            "slices": [{
                "id": "sli_1",
                "duration": "PT7H45M",
                "origin": { "iata_code": "LHR", "iata_city_code": "LON", "name": "Heathrow" },
                "destination": { "iata_code": "JFK", "iata_city_code": "NYC", "name": "John F. Kennedy" },
                "segments": []
            }]
        }))
        .unwrap();

        let mapped = serde_json::to_value(map_order(order)).unwrap();
        assert_eq!(mapped["id"], "ord_1");
        assert_eq!(mapped["totalAmount"], "900.00");
        assert_eq!(mapped["passengers"][0]["firstName"], "Bessie");
        assert_eq!(mapped["passengers"][0]["bornOn"], "1990-04-12");
        assert_eq!(mapped["slices"][0]["origin"], "LON");
    }
}
