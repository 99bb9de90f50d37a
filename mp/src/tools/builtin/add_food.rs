//! Add-food tools - single item and atomic batch

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{MealItem, MealSlot};
use crate::quantity::parse_amount;
use crate::tools::{Tool, ToolContext, ToolResult};

/// One item in an add request
#[derive(Debug, Clone, Deserialize)]
struct ItemSpec {
    food: String,
    #[serde(default = "default_amount")]
    amount: String,
    #[serde(default = "default_unit")]
    unit: String,
}

fn default_amount() -> String {
    "1".to_string()
}

fn default_unit() -> String {
    foodcatalog::DEFAULT_UNIT.to_string()
}

impl ItemSpec {
    fn into_item(self) -> MealItem {
        MealItem::new(self.food, self.amount).with_unit(self.unit)
    }
}

/// Catalog-facing caveats for a single item: unknown foods and quantities
/// past the catalog's max bound are reported, never rejected.
fn item_notes(item: &MealItem, ctx: &ToolContext) -> Vec<String> {
    match ctx.catalog.lookup(&item.food) {
        None => vec![format!(
            "'{}' is not in the food catalog and contributes no nutrition",
            item.food
        )],
        Some(entry) => {
            let quantity = parse_amount(&item.amount);
            match entry.max_quantity {
                Some(max) if quantity > max => vec![format!(
                    "{} {} exceeds the usual maximum of {} {} for {}",
                    item.amount, item.unit, max, entry.unit, entry.name
                )],
                _ => vec![],
            }
        }
    }
}

fn render(message: String, notes: Vec<String>) -> ToolResult {
    if notes.is_empty() {
        ToolResult::success(message)
    } else {
        ToolResult::success(format!("{} (note: {})", message, notes.join("; ")))
    }
}

/// Add one food item to a meal slot
pub struct AddFoodTool;

#[async_trait]
impl Tool for AddFoodTool {
    fn name(&self) -> &'static str {
        "add_food"
    }

    fn description(&self) -> &'static str {
        "Add a food item to a meal. Quantities may be fractions like '1 1/2'."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "meal": {
                    "type": "string",
                    "enum": ["breakfast", "lunch", "dinner", "snacks"],
                    "description": "Which meal to add to"
                },
                "food": {
                    "type": "string",
                    "description": "Food name"
                },
                "amount": {
                    "type": "string",
                    "description": "Quantity, e.g. '2', '0.5', '1 1/2' (default: 1)"
                },
                "unit": {
                    "type": "string",
                    "description": "Unit label (default: serving)"
                }
            },
            "required": ["meal", "food"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "AddFoodTool::execute: called");
        let Some(meal) = input.get("meal").and_then(|v| v.as_str()) else {
            return ToolResult::error("Missing required parameter: meal");
        };
        let slot: MealSlot = match meal.parse() {
            Ok(slot) => slot,
            Err(e) => return ToolResult::error(e),
        };
        let Some(food) = input.get("food").and_then(|v| v.as_str()) else {
            return ToolResult::error("Missing required parameter: food");
        };
        let amount = input
            .get("amount")
            .and_then(|v| v.as_str())
            .unwrap_or("1")
            .to_string();
        let unit = input
            .get("unit")
            .and_then(|v| v.as_str())
            .unwrap_or(foodcatalog::DEFAULT_UNIT)
            .to_string();

        let item = MealItem::new(food, amount).with_unit(unit);
        let notes = item_notes(&item, ctx);

        let mut state = ctx.state.lock().await;
        let update = state.add_item(slot, item.clone(), &ctx.catalog);

        render(
            format!("Added {} to {} (phase: {})", item, slot, update.phase),
            notes,
        )
    }
}

/// Add a batch of items to a meal slot atomically
pub struct AddFoodsTool;

#[async_trait]
impl Tool for AddFoodsTool {
    fn name(&self) -> &'static str {
        "add_foods"
    }

    fn description(&self) -> &'static str {
        "Add several food items to one meal in a single atomic step."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "meal": {
                    "type": "string",
                    "enum": ["breakfast", "lunch", "dinner", "snacks"],
                    "description": "Which meal to add to"
                },
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "food": { "type": "string" },
                            "amount": { "type": "string" },
                            "unit": { "type": "string" }
                        },
                        "required": ["food"]
                    },
                    "description": "Items to append; all of them land or none do"
                }
            },
            "required": ["meal", "items"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "AddFoodsTool::execute: called");
        let Some(meal) = input.get("meal").and_then(|v| v.as_str()) else {
            return ToolResult::error("Missing required parameter: meal");
        };
        let slot: MealSlot = match meal.parse() {
            Ok(slot) => slot,
            Err(e) => return ToolResult::error(e),
        };

        // Validate the whole batch before touching state: no partial append
        let specs: Vec<ItemSpec> = match input.get("items") {
            Some(items) => match serde_json::from_value(items.clone()) {
                Ok(specs) => specs,
                Err(e) => return ToolResult::error(format!("Invalid items array: {}", e)),
            },
            None => return ToolResult::error("Missing required parameter: items"),
        };
        if specs.is_empty() {
            return ToolResult::error("items must not be empty");
        }

        let items: Vec<MealItem> = specs.into_iter().map(ItemSpec::into_item).collect();
        let notes: Vec<String> = items.iter().flat_map(|item| item_notes(item, ctx)).collect();

        let mut state = ctx.state.lock().await;
        let count = items.len();
        let update = state.add_items(slot, items, &ctx.catalog);

        render(
            format!("Added {} items to {} (phase: {})", count, slot, update.phase),
            notes,
        )
    }
}
