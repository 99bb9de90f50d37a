//! Core FoodCatalog implementation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Unique identifier for a catalog entry
pub type FoodId = String;

/// Per-unit nutritional profile for one food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    /// Unique key (normalized form is used for lookup)
    pub id: FoodId,
    /// Display name
    pub name: String,
    /// Calories per one unit (kcal)
    pub calories: f64,
    /// Protein per one unit (g)
    pub protein: f64,
    /// Carbohydrates per one unit (g)
    #[serde(rename = "carbohydrates")]
    pub carbs: f64,
    /// Fat per one unit (g)
    pub fat: f64,
    /// Unit label (e.g. "cup", "serving")
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Upper bound on sensible quantity, if any
    #[serde(default)]
    pub max_quantity: Option<f64>,
    /// Free-form tags (e.g. "vegetarian", "high-protein")
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_unit() -> String {
    crate::DEFAULT_UNIT.to_string()
}

/// Normalize a food name into a catalog key: lowercase, spaces to underscores
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// In-memory catalog, keyed by normalized id
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    entries: HashMap<String, FoodCatalogEntry>,
}

impl FoodCatalog {
    /// Create an empty catalog (every lookup misses)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from pre-constructed entries (used by tests and seeds)
    pub fn from_entries(entries: impl IntoIterator<Item = FoodCatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (normalize_key(&e.id), e))
            .collect();
        Self { entries }
    }

    /// Load a catalog from a JSONL file.
    ///
    /// A missing or unreadable source yields an empty catalog rather than an
    /// error: the planner degrades to zero-nutrition lookups instead of
    /// refusing to start. Malformed lines are skipped with a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Catalog source unreadable, starting empty");
                return Self::empty();
            }
        };

        let mut entries = HashMap::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<FoodCatalogEntry>(line) {
                Ok(entry) => {
                    entries.insert(normalize_key(&entry.id), entry);
                }
                Err(e) => {
                    warn!(path = %path.display(), line = lineno + 1, error = %e, "Skipping malformed catalog row");
                }
            }
        }

        info!(path = %path.display(), count = entries.len(), "Loaded food catalog");
        Self { entries }
    }

    /// Look up a food by name.
    ///
    /// Match order: exact normalized-key match, then case-insensitive match
    /// against display names. First match wins; no fuzzy matching.
    pub fn lookup(&self, food_name: &str) -> Option<&FoodCatalogEntry> {
        let key = normalize_key(food_name);
        if let Some(entry) = self.entries.get(&key) {
            return Some(entry);
        }

        let lowered = food_name.trim().to_lowercase();
        let by_name = self
            .entries
            .values()
            .find(|e| e.name.to_lowercase() == lowered);
        if by_name.is_none() {
            debug!(%food_name, "Catalog miss");
        }
        by_name
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &FoodCatalogEntry> {
        self.entries.values()
    }
}
