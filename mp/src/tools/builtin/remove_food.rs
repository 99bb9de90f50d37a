//! Remove-food tool

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::MealSlot;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Remove the first matching item from a meal (or from every meal that
/// contains a match when no meal is given)
pub struct RemoveFoodTool;

#[async_trait]
impl Tool for RemoveFoodTool {
    fn name(&self) -> &'static str {
        "remove_food"
    }

    fn description(&self) -> &'static str {
        "Remove a food item by name. Matching is case-insensitive; only the first match per meal is removed."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "food": {
                    "type": "string",
                    "description": "Food name to remove"
                },
                "meal": {
                    "type": "string",
                    "enum": ["breakfast", "lunch", "dinner", "snacks"],
                    "description": "Restrict removal to one meal (optional)"
                }
            },
            "required": ["food"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "RemoveFoodTool::execute: called");
        let Some(food) = input.get("food").and_then(|v| v.as_str()) else {
            return ToolResult::error("Missing required parameter: food");
        };

        let slot = match input.get("meal").and_then(|v| v.as_str()) {
            Some(meal) => match meal.parse::<MealSlot>() {
                Ok(slot) => Some(slot),
                Err(e) => return ToolResult::error(e),
            },
            None => None,
        };

        let mut state = ctx.state.lock().await;
        let outcome = state.remove_item(food, slot, &ctx.catalog);

        if outcome.is_not_found() {
            // Reported no-op, not an error: state is untouched
            return ToolResult::success(format!("No '{}' found in any meal", food));
        }

        let slots: Vec<String> = outcome
            .removed
            .iter()
            .map(|(slot, _)| slot.to_string())
            .collect();
        ToolResult::success(format!(
            "Removed '{}' from {} (phase: {})",
            food,
            slots.join(", "),
            outcome.phase
        ))
    }
}
