//! Goal-setting tool

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{DietType, MacroSplit};
use crate::tools::{Tool, ToolContext, ToolResult};

/// Set (or replace) the session's daily nutrition goals
pub struct SetGoalsTool;

#[async_trait]
impl Tool for SetGoalsTool {
    fn name(&self) -> &'static str {
        "set_nutrition_goals"
    }

    fn description(&self) -> &'static str {
        "Set daily calorie and macro targets from a diet type, or from explicit custom percentages."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "daily_calories": {
                    "type": "integer",
                    "description": "Daily calorie target in kcal"
                },
                "diet_type": {
                    "type": "string",
                    "enum": ["balanced", "high-protein", "low-carb", "keto", "vegetarian", "vegan", "custom"],
                    "description": "Macro-ratio preset (default: balanced)"
                },
                "protein_percent": {
                    "type": "number",
                    "description": "Custom: fraction of calories from protein (0-1)"
                },
                "carb_percent": {
                    "type": "number",
                    "description": "Custom: fraction of calories from carbs (0-1)"
                },
                "fat_percent": {
                    "type": "number",
                    "description": "Custom: fraction of calories from fat (0-1)"
                }
            },
            "required": ["daily_calories"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "SetGoalsTool::execute: called");
        let Some(daily_calories) = input.get("daily_calories").and_then(|v| v.as_u64()) else {
            return ToolResult::error("Missing required parameter: daily_calories");
        };
        let daily_calories = daily_calories as u32;

        let diet_type = input
            .get("diet_type")
            .and_then(|v| v.as_str())
            .map(DietType::from_name)
            .unwrap_or_default();

        let percents = [
            input.get("protein_percent").and_then(|v| v.as_f64()),
            input.get("carb_percent").and_then(|v| v.as_f64()),
            input.get("fat_percent").and_then(|v| v.as_f64()),
        ];
        let custom = match percents {
            [Some(protein), Some(carbs), Some(fat)] => Some(MacroSplit { protein, carbs, fat }),
            [None, None, None] => None,
            _ => {
                return ToolResult::error(
                    "Custom macros require all three of protein_percent, carb_percent, fat_percent",
                );
            }
        };

        let mut state = ctx.state.lock().await;
        match state.set_goals(daily_calories, diet_type, custom, &ctx.catalog) {
            Ok(update) => {
                let goals = state.goals().cloned();
                drop(state);
                match goals {
                    Some(goals) if goals.is_complete() => ToolResult::success(format!(
                        "Goals set: {} kcal/day, {} diet. Targets: protein {:.0}g, carbs {:.0}g, fat {:.0}g (phase: {})",
                        goals.daily_calories,
                        goals.diet_type,
                        goals.protein_target_g.unwrap_or(0.0),
                        goals.carb_target_g.unwrap_or(0.0),
                        goals.fat_target_g.unwrap_or(0.0),
                        update.phase
                    )),
                    _ => ToolResult::success(format!(
                        "Goals recorded without gram targets - daily calories were zero (phase: {})",
                        update.phase
                    )),
                }
            }
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
