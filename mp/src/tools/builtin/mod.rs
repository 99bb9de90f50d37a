//! Built-in tools for planning sessions

mod add_food;
mod clear_meals;
mod nutrition_summary;
mod remove_food;
mod set_goals;
mod update_profile;

pub use add_food::{AddFoodTool, AddFoodsTool};
pub use clear_meals::{ClearAllTool, ClearMealTool};
pub use nutrition_summary::{NutritionProgressTool, NutritionSummaryTool};
pub use remove_food::RemoveFoodTool;
pub use set_goals::SetGoalsTool;
pub use update_profile::UpdateProfileTool;
