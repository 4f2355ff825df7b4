//! Warehouse inventory domain.
//!
//! Articles live in storage locations, which a stock groups under a
//! temperature constraint. Everything here is deterministic, in-memory
//! domain logic (no IO, no storage).

pub mod article;
pub mod config;
pub mod location;
pub mod stock;
pub mod store;

pub use article::{Article, ArticleRecord};
pub use config::StockConfig;
pub use location::{StorageLocation, StorageLocationId, StorageLocationRecord};
pub use stock::Stock;
pub use store::LocationStore;
