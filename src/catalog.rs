// Room type catalog boundary: supplies per-hotel offer lists for a stay
// window. The allocation engine depends only on this trait's return shape,
// never on how availability is fetched.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Contract, HotelAvailability, RoomTypeOffer, StayWindow};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog unreachable: {0}")]
    Unreachable(String),

    #[error("invalid availability payload: {0}")]
    InvalidPayload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait RoomTypeCatalog: Send + Sync {
    // Per-hotel offer lists for the given stay. Hotels with no qualifying
    // offers are omitted from the result.
    async fn fetch_availability(
        &self,
        stay: &StayWindow,
    ) -> Result<Vec<HotelAvailability>, CatalogError>;
}

// Catalog backed by an in-memory contract book. Prices each room type for
// the full stay from the contract's negotiated terms. Doubles as the
// substitutable fake for orchestrator tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    contracts: Vec<Contract>,
}

impl InMemoryCatalog {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts }
    }

    // A contract qualifies only when it covers the whole stay.
    fn covers(contract: &Contract, stay: &StayWindow) -> bool {
        contract.start_date <= stay.check_in && contract.end_date >= stay.check_out()
    }

    // price_per_person * (1 + markup%) * nights, rounded to cents.
    fn price_for_stay(price_per_person: f64, markup_percentage: f64, nights: u32) -> f64 {
        let total = price_per_person * (1.0 + markup_percentage / 100.0) * f64::from(nights);
        (total * 100.0).round() / 100.0
    }
}

#[async_trait]
impl RoomTypeCatalog for InMemoryCatalog {
    async fn fetch_availability(
        &self,
        stay: &StayWindow,
    ) -> Result<Vec<HotelAvailability>, CatalogError> {
        let mut hotels = Vec::new();

        for contract in self.contracts.iter().filter(|c| Self::covers(c, stay)) {
            let offers: Vec<RoomTypeOffer> = contract
                .room_types
                .iter()
                .map(|rt| RoomTypeOffer {
                    name: rt.name.clone(),
                    max_adults: rt.max_adults,
                    total_price: Self::price_for_stay(
                        rt.price_per_person,
                        contract.markup_percentage,
                        stay.nights,
                    ),
                    available_rooms: rt.number_of_rooms,
                })
                .collect();

            if !offers.is_empty() {
                hotels.push(HotelAvailability {
                    hotel_name: contract.hotel.name.clone(),
                    offers,
                });
            }
        }

        Ok(hotels)
    }
}
