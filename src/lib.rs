// Main library file for the stay search engine

// Allocation core plus the supply-side collaborators around it
pub mod allocation;
pub mod cache;
pub mod catalog;
pub mod client;
pub mod model;
pub mod search;

// Re-export key types for convenience
pub use allocation::{allocate, allocate_with_policy, Allocation, CapacityPolicy};
pub use cache::{CacheConfig, CacheStatsReport, CachedCatalog};
pub use catalog::{CatalogError, InMemoryCatalog, RoomTypeCatalog};
pub use client::{ClientConfig, ClientError, RestCatalog, RetryConfig};
pub use model::{
    AssignedRoom, Contract, ContractRoomType, Hotel, HotelAvailability, HotelSearchResult,
    RoomRequest, RoomTypeOffer, SearchRequest, StayWindow,
};
pub use search::{SearchConfig, SearchEngine, SearchError};
