//! Tool system for planning sessions
//!
//! Tools are the only mutation path into a session's `MealPlannerState`.
//! Each session gets a `ToolContext` holding its state and a shared,
//! read-only food catalog; the executor dispatches LLM tool calls by name.

mod context;
mod executor;
mod traits;

pub mod builtin;

pub use context::ToolContext;
pub use executor::ToolExecutor;
pub use traits::{Tool, ToolDefinition, ToolResult};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use foodcatalog::{FoodCatalog, FoodCatalogEntry};

    use super::ToolContext;

    fn entry(
        id: &str,
        name: &str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        unit: &str,
        max_quantity: Option<f64>,
    ) -> FoodCatalogEntry {
        FoodCatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            unit: unit.to_string(),
            max_quantity,
            tags: vec![],
        }
    }

    /// A fresh session over a small fixed catalog
    pub(crate) fn test_context() -> ToolContext {
        let catalog = FoodCatalog::from_entries([
            entry("oatmeal", "Oatmeal", 150.0, 5.0, 27.0, 3.0, "cup", None),
            entry(
                "chicken_breast",
                "Chicken Breast",
                165.0,
                31.0,
                0.0,
                3.6,
                "serving",
                None,
            ),
            entry("egg", "Egg", 78.0, 6.0, 0.6, 5.0, "large", Some(6.0)),
        ]);
        ToolContext::new(Arc::new(catalog))
    }
}
