//! Clearing tools - one slot or the whole day

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::MealSlot;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Empty one meal slot
pub struct ClearMealTool;

#[async_trait]
impl Tool for ClearMealTool {
    fn name(&self) -> &'static str {
        "clear_meal"
    }

    fn description(&self) -> &'static str {
        "Remove every item from one meal."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "meal": {
                    "type": "string",
                    "enum": ["breakfast", "lunch", "dinner", "snacks"],
                    "description": "Which meal to clear"
                }
            },
            "required": ["meal"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "ClearMealTool::execute: called");
        let Some(meal) = input.get("meal").and_then(|v| v.as_str()) else {
            return ToolResult::error("Missing required parameter: meal");
        };
        let slot: MealSlot = match meal.parse() {
            Ok(slot) => slot,
            Err(e) => return ToolResult::error(e),
        };

        let mut state = ctx.state.lock().await;
        let update = state.clear_slot(slot, &ctx.catalog);
        ToolResult::success(format!("Cleared {} (phase: {})", slot, update.phase))
    }
}

/// Empty all four meal slots and start over
pub struct ClearAllTool;

#[async_trait]
impl Tool for ClearAllTool {
    fn name(&self) -> &'static str {
        "clear_all_meals"
    }

    fn description(&self) -> &'static str {
        "Remove every item from every meal and reset the current meal to breakfast."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "ClearAllTool::execute: called");
        let mut state = ctx.state.lock().await;
        let update = state.clear_all(&ctx.catalog);
        ToolResult::success(format!("Cleared all meals (phase: {})", update.phase))
    }
}
