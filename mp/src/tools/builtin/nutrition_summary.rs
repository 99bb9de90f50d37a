//! Read-only query tools - totals and goal progress

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::MealSlot;
use crate::nutrition::meal_totals;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Current nutrition totals, per meal and for the day
pub struct NutritionSummaryTool;

#[async_trait]
impl Tool for NutritionSummaryTool {
    fn name(&self) -> &'static str {
        "nutrition_summary"
    }

    fn description(&self) -> &'static str {
        "Show current nutrition totals for each meal and the whole day."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "NutritionSummaryTool::execute: called");
        let state = ctx.state.lock().await;

        let mut lines = Vec::new();
        for slot in MealSlot::ALL {
            let items = state.slot(slot);
            if items.is_empty() {
                continue;
            }
            let totals = meal_totals(items, &ctx.catalog);
            let names: Vec<String> = items.iter().map(|i| i.to_string()).collect();
            lines.push(format!("{}: {} - {}", slot, names.join(", "), totals.summary()));
        }
        if lines.is_empty() {
            lines.push("No meals planned yet".to_string());
        }
        lines.push(format!("Daily total - {}", state.nutrition_summary(&ctx.catalog)));
        lines.push(format!("Phase: {}", state.phase));

        ToolResult::success(lines.join("\n"))
    }
}

/// Progress toward the daily goals, per nutrient
pub struct NutritionProgressTool;

#[async_trait]
impl Tool for NutritionProgressTool {
    fn name(&self) -> &'static str {
        "nutrition_progress"
    }

    fn description(&self) -> &'static str {
        "Show progress toward the daily goals as a percentage of each target."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "NutritionProgressTool::execute: called");
        let state = ctx.state.lock().await;

        let Some(progress) = state.progress_to_goals(&ctx.catalog) else {
            return ToolResult::success(
                "No complete nutrition goals set yet - set daily calories and a diet type first",
            );
        };

        let sufficient = state.has_sufficient_nutrition(&ctx.catalog);
        ToolResult::success(format!(
            "Calories: {:.1}% of target, Protein: {:.1}%, Carbs: {:.1}%, Fat: {:.1}%. Within target window: {}",
            progress.calories_pct, progress.protein_pct, progress.carbs_pct, progress.fat_pct, sufficient
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::{AddFoodTool, SetGoalsTool};
    use crate::tools::test_support::test_context;

    #[tokio::test]
    async fn test_summary_empty_plan() {
        let ctx = test_context();
        let result = NutritionSummaryTool.execute(json!({}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.contains("No meals planned yet"));
        assert!(result.content.contains("Daily total - Calories: 0"));
    }

    #[tokio::test]
    async fn test_summary_lists_filled_meals() {
        let ctx = test_context();
        AddFoodTool
            .execute(
                json!({"meal": "breakfast", "food": "oatmeal", "amount": "2", "unit": "cup"}),
                &ctx,
            )
            .await;

        let result = NutritionSummaryTool.execute(json!({}), &ctx).await;
        assert!(result.content.contains("breakfast: 2 cup oatmeal"));
        assert!(result.content.contains("Calories: 300"));
    }

    #[tokio::test]
    async fn test_progress_without_goals() {
        let ctx = test_context();
        let result = NutritionProgressTool.execute(json!({}), &ctx).await;
        assert!(!result.is_error);
        assert!(result.content.contains("No complete nutrition goals"));
    }

    #[tokio::test]
    async fn test_progress_with_goals() {
        let ctx = test_context();
        SetGoalsTool
            .execute(json!({"daily_calories": 600, "diet_type": "balanced"}), &ctx)
            .await;
        AddFoodTool
            .execute(
                json!({"meal": "lunch", "food": "oatmeal", "amount": "2", "unit": "cup"}),
                &ctx,
            )
            .await;

        let result = NutritionProgressTool.execute(json!({}), &ctx).await;
        assert!(!result.is_error);
        // 300 of 600 kcal
        assert!(result.content.contains("Calories: 50.0%"));
    }
}
