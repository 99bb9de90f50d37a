//! ToolExecutor - manages tool execution for a session

use std::collections::HashMap;

use serde_json::Value;

use super::builtin::{
    AddFoodTool, AddFoodsTool, ClearAllTool, ClearMealTool, NutritionProgressTool,
    NutritionSummaryTool, RemoveFoodTool, SetGoalsTool, UpdateProfileTool,
};
use super::{Tool, ToolContext, ToolDefinition, ToolResult};

/// Manages tool execution for a planning session
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with the standard planning tools
    pub fn standard() -> Self {
        let mut tools: HashMap<String, Box<dyn Tool>> = HashMap::new();

        // Meal mutations
        tools.insert("add_food".into(), Box::new(AddFoodTool));
        tools.insert("add_foods".into(), Box::new(AddFoodsTool));
        tools.insert("remove_food".into(), Box::new(RemoveFoodTool));
        tools.insert("clear_meal".into(), Box::new(ClearMealTool));
        tools.insert("clear_all_meals".into(), Box::new(ClearAllTool));

        // Profile and goals
        tools.insert("update_profile".into(), Box::new(UpdateProfileTool));
        tools.insert("set_nutrition_goals".into(), Box::new(SetGoalsTool));

        // Read-only queries
        tools.insert("nutrition_summary".into(), Box::new(NutritionSummaryTool));
        tools.insert("nutrition_progress".into(), Box::new(NutritionProgressTool));

        Self { tools }
    }

    /// Create an empty executor (for testing)
    pub fn empty() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions for the LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Execute a tool call by name
    pub async fn execute(&self, name: &str, input: Value, ctx: &ToolContext) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input, ctx).await,
            None => ToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::test_context;
    use serde_json::json;

    #[test]
    fn test_standard_executor_has_planning_tools() {
        let executor = ToolExecutor::standard();

        assert!(executor.has_tool("add_food"));
        assert!(executor.has_tool("add_foods"));
        assert!(executor.has_tool("remove_food"));
        assert!(executor.has_tool("clear_meal"));
        assert!(executor.has_tool("clear_all_meals"));
        assert!(executor.has_tool("update_profile"));
        assert!(executor.has_tool("set_nutrition_goals"));
        assert!(executor.has_tool("nutrition_summary"));
        assert!(executor.has_tool("nutrition_progress"));
    }

    #[test]
    fn test_definitions_returns_all_tools() {
        let executor = ToolExecutor::standard();
        let defs = executor.definitions();

        assert_eq!(defs.len(), 9);
        assert!(defs.iter().any(|d| d.name == "add_food"));
        assert!(defs.iter().all(|d| !d.description.is_empty()));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let executor = ToolExecutor::standard();
        let ctx = test_context();

        let result = executor.execute("unknown_tool", json!({}), &ctx).await;
        assert!(result.is_error);
        assert!(result.content.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_execute_dispatches_by_name() {
        let executor = ToolExecutor::standard();
        let ctx = test_context();

        let result = executor
            .execute(
                "add_food",
                json!({"meal": "breakfast", "food": "oatmeal"}),
                &ctx,
            )
            .await;
        assert!(!result.is_error);

        let summary = executor.execute("nutrition_summary", json!({}), &ctx).await;
        assert!(summary.content.contains("oatmeal"));
    }
}
