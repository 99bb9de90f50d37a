//! Profile-update tool

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::ProfileUpdate;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Record user preferences. Partial update: fields the LLM omits keep
/// their current values.
pub struct UpdateProfileTool;

#[async_trait]
impl Tool for UpdateProfileTool {
    fn name(&self) -> &'static str {
        "update_profile"
    }

    fn description(&self) -> &'static str {
        "Record dietary restrictions, cuisines, cooking-time preference, or health goals. Omitted fields are preserved."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "dietary_restrictions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "e.g. [\"vegetarian\", \"gluten-free\"]"
                },
                "preferred_cuisines": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "cooking_time": {
                    "type": "string",
                    "enum": ["quick", "moderate", "extensive"]
                },
                "health_goals": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "UpdateProfileTool::execute: called");
        let update: ProfileUpdate = match serde_json::from_value(input) {
            Ok(update) => update,
            Err(e) => return ToolResult::error(format!("Invalid profile fields: {}", e)),
        };
        if update.is_empty() {
            return ToolResult::error("No profile fields supplied");
        }

        let mut state = ctx.state.lock().await;
        let result = state.update_profile(update, &ctx.catalog);

        let profile = &state.profile;
        let mut parts = Vec::new();
        if !profile.dietary_restrictions.is_empty() {
            parts.push(format!(
                "restrictions: {}",
                profile
                    .dietary_restrictions
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        if !profile.preferred_cuisines.is_empty() {
            parts.push(format!("cuisines: {}", profile.preferred_cuisines.join(", ")));
        }
        if let Some(cooking_time) = profile.cooking_time {
            parts.push(format!("cooking time: {}", cooking_time));
        }
        if !profile.health_goals.is_empty() {
            parts.push(format!("goals: {}", profile.health_goals.join(", ")));
        }

        ToolResult::success(format!(
            "Profile updated ({}) (phase: {})",
            parts.join("; "),
            result.phase
        ))
    }
}
