//! Core utilities for the name battle engine
//!
//! - `catalog`: rarity-weighted pool of curated opponents
//! - `paths`: catalog/database locations and soft-fail file reading
//! - `rng`: the injected, seedable random source

pub mod catalog;
pub mod paths;
pub mod rng;

// Re-export commonly used items for convenience
pub use catalog::{load_pool, Catalog, CatalogEntry, CatalogIssue, RarityClass};
pub use paths::{catalog_path, database_path, try_read_to_string};
pub use rng::GameRng;
