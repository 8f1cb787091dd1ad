// Search orchestrator: fetches per-hotel availability once, runs the
// allocation engine for each hotel, and assembles the response in catalog
// order. The engine is pure, so hotels are evaluated concurrently.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::allocation::{allocate_with_policy, CapacityPolicy};
use crate::catalog::{CatalogError, RoomTypeCatalog};
use crate::model::{HotelSearchResult, SearchRequest};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub capacity_policy: CapacityPolicy,
    pub max_concurrent_hotels: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            capacity_policy: CapacityPolicy::UnlimitedReuse,
            max_concurrent_hotels: 16,
        }
    }
}

pub struct SearchEngine {
    catalog: Arc<dyn RoomTypeCatalog>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(catalog: Arc<dyn RoomTypeCatalog>, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<HotelSearchResult>, SearchError> {
        if request.room_requests.is_empty() {
            debug!("search with no room requests, skipping catalog fetch");
            return Ok(Vec::new());
        }

        let hotels = self.catalog.fetch_availability(&request.stay).await?;
        debug!(hotels = hotels.len(), requests = request.room_requests.len(), "allocating");

        let policy = self.config.capacity_policy;
        let results: Vec<HotelSearchResult> = stream::iter(hotels)
            .map(|hotel| {
                let room_requests = &request.room_requests;
                async move {
                    let allocation = allocate_with_policy(room_requests, &hotel.offers, policy);
                    HotelSearchResult {
                        hotel_name: hotel.hotel_name,
                        available_room_types: hotel.offers,
                        assigned_rooms: allocation.assigned,
                        total_price: allocation.total_price,
                    }
                }
            })
            // buffered keeps catalog response order in the output
            .buffered(self.config.max_concurrent_hotels.max(1))
            .collect()
            .await;

        debug!(
            satisfied_hotels = results.iter().filter(|r| !r.assigned_rooms.is_empty()).count(),
            "search complete"
        );
        Ok(results)
    }
}
