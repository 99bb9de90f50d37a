//! MealPlanner - deterministic core for a conversational meal-planning agent
//!
//! The LLM drives the conversation; this crate owns everything that must be
//! exact: quantity parsing, nutrition arithmetic, goal derivation, the
//! per-session plan aggregate, and the planning-phase state machine. All
//! mutation flows through the tool layer, so the orchestration above only
//! ever sees validated state transitions.
//!
//! # Modules
//!
//! - [`quantity`] - lenient amount parsing ("2", "0.5", "1 1/2")
//! - [`nutrition`] - totals and goal progress, recomputed from scratch
//! - [`domain`] - value types: meal slots, items, profile, goals, phases
//! - [`state`] - the `MealPlannerState` aggregate and phase transitions
//! - [`tools`] - the LLM-facing tool trait, builtins, and executor
//! - [`config`] - YAML configuration and lookup chain
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod nutrition;
pub mod quantity;
pub mod state;
pub mod tools;

// Re-export commonly used types
pub use config::Config;
pub use domain::{
    DietType, GoalError, MacroSplit, MealItem, MealSlot, NutritionGoals, NutritionInfo,
    PlanningPhase, UserProfile,
};
pub use nutrition::{NutritionProgress, daily_totals, item_nutrition, meal_totals, progress_to_goals};
pub use quantity::parse_amount;
pub use state::{MealPlannerState, RemoveOutcome, StateUpdate};
pub use tools::{Tool, ToolContext, ToolDefinition, ToolExecutor, ToolResult};
