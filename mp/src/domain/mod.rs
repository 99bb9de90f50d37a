//! Domain types for the meal planner
//!
//! Value types shared across the state engine and the tool surface:
//! meal slots/items, nutrition totals, user profile, goals, and the
//! planning phase enum.

mod goals;
mod meal;
mod nutrition_info;
mod phase;
mod profile;

pub use goals::{
    CAL_PER_GRAM_CARBS, CAL_PER_GRAM_FAT, CAL_PER_GRAM_PROTEIN, DietType, GoalError,
    MACRO_SUM_TOLERANCE, MacroSplit, NutritionGoals,
};
pub use meal::{MealItem, MealSlot};
pub use nutrition_info::NutritionInfo;
pub use phase::PlanningPhase;
pub use profile::{CookingTime, ProfileUpdate, UserProfile};
