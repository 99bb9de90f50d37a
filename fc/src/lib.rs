//! FoodCatalog - static nutrition lookup table
//!
//! Maps food identifiers to per-unit nutrition values (calories, protein,
//! carbs, fat). Loaded once at session start from a JSONL source and
//! read-only thereafter; every conversation session shares one catalog.
//!
//! # On-disk format
//!
//! ```text
//! catalog.jsonl
//! {"id":"oatmeal","name":"Oatmeal","calories":150.0,"protein":5.0,...}
//! {"id":"chicken_breast","name":"Chicken Breast",...}
//! ```
//!
//! # Example
//!
//! ```ignore
//! use foodcatalog::FoodCatalog;
//!
//! let catalog = FoodCatalog::load("catalog.jsonl");
//! if let Some(entry) = catalog.lookup("Chicken Breast") {
//!     println!("{} kcal per {}", entry.calories, entry.unit);
//! }
//! ```

mod catalog;

pub use catalog::{FoodCatalog, FoodCatalogEntry, FoodId, normalize_key};

/// Default unit label when a catalog row omits one
pub const DEFAULT_UNIT: &str = "serving";
