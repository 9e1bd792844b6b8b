// Service exports
pub mod cache;
pub mod catalog;
pub mod documents;

pub use cache::{CacheKey, SnapshotCache};
pub use catalog::{Catalog, CatalogError};
pub use documents::DocumentClient;
