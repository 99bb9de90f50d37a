//! Session state and the planning-phase state machine

mod phase;
mod planner;

pub use phase::{SUFFICIENCY_TOLERANCE, advance_phase, has_sufficient_nutrition, meals_with_items};
pub use planner::{MealPlannerState, RemoveOutcome, StateUpdate};
