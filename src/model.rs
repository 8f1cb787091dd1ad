// Domain records shared across the search pipeline.
// Wire field names follow the booking backend's JSON payloads (camelCase).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// One traveler-group's lodging need: just an adult-count capacity requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomRequest {
    #[serde(rename = "numberOfAdults")]
    pub number_of_adults: i32,
}

impl RoomRequest {
    pub fn new(number_of_adults: i32) -> Self {
        Self { number_of_adults }
    }
}

// An available room category at a hotel, with its total price already
// computed upstream for the full stay. Read-only to the allocation engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeOffer {
    pub name: String,
    pub max_adults: i32,
    pub total_price: f64,
    // Units on hand for this room type. Ignored by the default allocation
    // policy; consulted only when inventory consumption is enabled.
    #[serde(default)]
    pub available_rooms: i32,
}

// Allocation outcome for one satisfied request. Does not mutate the offer
// it was produced from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedRoom {
    pub room_name: String,
    pub max_adults: i32,
    pub price: f64,
    pub assigned_adults: i32,
}

// Per-hotel response entry: the offer list is kept unmodified for
// transparency alongside the rooms actually assigned.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchResult {
    pub hotel_name: String,
    pub available_room_types: Vec<RoomTypeOffer>,
    pub assigned_rooms: Vec<AssignedRoom>,
    pub total_price: f64,
}

// Stay window as the caller expresses it: check-in plus a night count.
// Opaque to the allocation engine; only the catalog interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StayWindow {
    #[serde(rename = "checkInDate")]
    pub check_in: NaiveDate,
    #[serde(rename = "numberOfNights")]
    pub nights: u32,
}

impl StayWindow {
    pub fn new(check_in: NaiveDate, nights: u32) -> Self {
        Self { check_in, nights }
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_in + Duration::days(i64::from(self.nights))
    }
}

// Caller-facing search input: a stay window and an ordered list of room
// requests. Request order is significant to the allocation engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub stay: StayWindow,
    #[serde(rename = "roomRequests")]
    pub room_requests: Vec<RoomRequest>,
}

// Catalog output: one hotel's offers for the queried stay.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelAvailability {
    pub hotel_name: String,
    #[serde(rename = "availableRoomTypes")]
    pub offers: Vec<RoomTypeOffer>,
}

// Contract-side records, used by the in-memory catalog to derive offers.

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub contact_details: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRoomType {
    pub name: String,
    pub price_per_person: f64,
    pub number_of_rooms: i32,
    pub max_adults: i32,
}

// A negotiated rate agreement with one hotel over a date range. Offers are
// priced from these terms; the markup is a percentage on top of the
// per-person rate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub hotel: Hotel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub markup_percentage: f64,
    pub room_types: Vec<ContractRoomType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_check_out_adds_nights() {
        let stay = StayWindow::new(date("2025-06-11"), 3);
        assert_eq!(stay.check_out(), date("2025-06-14"));
    }

    #[test]
    fn test_search_request_wire_shape() {
        let json = r#"{
            "checkInDate": "2025-06-11",
            "numberOfNights": 2,
            "roomRequests": [{"numberOfAdults": 2}, {"numberOfAdults": 1}]
        }"#;

        let request: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.stay.check_in, date("2025-06-11"));
        assert_eq!(request.stay.nights, 2);
        assert_eq!(request.room_requests.len(), 2);
        assert_eq!(request.room_requests[0].number_of_adults, 2);
    }

    #[test]
    fn test_hotel_availability_wire_shape() {
        let json = r#"{
            "hotelName": "Sun Resort",
            "availableRoomTypes": [
                {"name": "Deluxe Room", "maxAdults": 2, "totalPrice": 330.0, "availableRooms": 5}
            ]
        }"#;

        let hotel: HotelAvailability = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.hotel_name, "Sun Resort");
        assert_eq!(hotel.offers[0].name, "Deluxe Room");
        assert_eq!(hotel.offers[0].total_price, 330.0);
    }

    #[test]
    fn test_offer_available_rooms_defaults_to_zero() {
        let json = r#"{"name": "Standard Twin", "maxAdults": 2, "totalPrice": 90.0}"#;
        let offer: RoomTypeOffer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.available_rooms, 0);
    }

    #[test]
    fn test_assigned_room_serializes_camel_case() {
        let room = AssignedRoom {
            room_name: "Deluxe Room".to_string(),
            max_adults: 2,
            price: 330.0,
            assigned_adults: 2,
        };

        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"roomName\""));
        assert!(json.contains("\"assignedAdults\""));
    }
}
