//! Planning-phase state machine
//!
//! Pure functions over a post-mutation state snapshot. No speculative
//! state copies: mutations apply first, then ask where the phase should
//! move. Every transition is total - when no rule fires the phase stays
//! put, and nothing ever moves backward.

use foodcatalog::FoodCatalog;
use tracing::debug;

use crate::domain::{MealSlot, PlanningPhase};
use crate::nutrition::daily_totals;
use crate::state::MealPlannerState;

/// Consumed calories must fall within +-10% of the daily target
pub const SUFFICIENCY_TOLERANCE: f64 = 0.10;

/// Count of non-empty main-meal slots (breakfast/lunch/dinner). Snacks
/// never count toward phase advancement.
pub fn meals_with_items(state: &MealPlannerState) -> usize {
    MealSlot::MAIN
        .iter()
        .filter(|slot| !state.slot(**slot).is_empty())
        .count()
}

/// Sufficiency: goals are set with a positive calorie target and the
/// current daily total lands inside the +-10% window. Absent goals,
/// sufficiency is always false.
pub fn has_sufficient_nutrition(state: &MealPlannerState, catalog: &FoodCatalog) -> bool {
    let Some(goals) = state.goals() else {
        return false;
    };
    if goals.daily_calories == 0 {
        return false;
    }

    let consumed = daily_totals(state, catalog).calories;
    let ratio = consumed / f64::from(goals.daily_calories);
    (1.0 - SUFFICIENCY_TOLERANCE..=1.0 + SUFFICIENCY_TOLERANCE).contains(&ratio)
}

/// Decide the next phase from the current phase and the already-applied
/// state snapshot.
///
/// Rules, in priority order:
/// 1. gathering_info with goals set -> building_meals
/// 2. setting_goals -> building_meals (unconditional once goals fired)
/// 3. building_meals + sufficient nutrition -> optimizing
/// 4. optimizing + sufficient nutrition -> complete
/// 5. Override from gathering_info/setting_goals: one filled main meal
///    forces building_meals, two force optimizing - users who build meals
///    before stating goals skip ahead. Intended behavior, not a defect.
pub fn advance_phase(
    current: PlanningPhase,
    state: &MealPlannerState,
    catalog: &FoodCatalog,
) -> PlanningPhase {
    let base = match current {
        PlanningPhase::GatheringInfo if state.goals().is_some() => PlanningPhase::BuildingMeals,
        PlanningPhase::SettingGoals => PlanningPhase::BuildingMeals,
        PlanningPhase::BuildingMeals if has_sufficient_nutrition(state, catalog) => {
            PlanningPhase::Optimizing
        }
        PlanningPhase::Optimizing if has_sufficient_nutrition(state, catalog) => {
            PlanningPhase::Complete
        }
        other => other,
    };

    // Rule 5: the meals-built override, keyed on the pre-transition phase
    let next = if matches!(current, PlanningPhase::GatheringInfo | PlanningPhase::SettingGoals) {
        match meals_with_items(state) {
            0 => base,
            1 => base.max(PlanningPhase::BuildingMeals),
            _ => PlanningPhase::Optimizing,
        }
    } else {
        base
    };

    if next != current {
        debug!(%current, %next, "Phase transition");
    }
    next
}
