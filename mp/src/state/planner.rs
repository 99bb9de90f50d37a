//! MealPlannerState - the aggregate root for one conversation session
//!
//! Owns the four meal-slot lists, the user profile, the optional goals,
//! and the planning phase. One instance per session, mutated only from
//! that session's (sequential) tool calls; cross-session isolation is by
//! construction. Slot updates are pure replace - a mutation builds the new
//! list and swaps it in, so before/after snapshots are easy to reason
//! about and the state never passes through a partial shape.

use chrono::Utc;
use foodcatalog::FoodCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    DietType, GoalError, MacroSplit, MealItem, MealSlot, NutritionGoals, NutritionInfo,
    PlanningPhase, ProfileUpdate, UserProfile,
};
use crate::nutrition::{self, NutritionProgress};
use crate::state::phase::{advance_phase, has_sufficient_nutrition, meals_with_items};

/// Unix milliseconds
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// The changed fields a mutation reports back to the orchestration layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdate {
    /// Phase after re-evaluation
    pub phase: PlanningPhase,
    /// Whether this mutation moved the phase
    pub phase_changed: bool,
    /// Which slot was last touched
    pub current_meal: MealSlot,
}

/// Result of a remove operation. An empty `removed` list means nothing
/// matched and the state was left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveOutcome {
    /// (slot, item) pairs actually removed - at most one per slot
    pub removed: Vec<(MealSlot, MealItem)>,
    pub phase: PlanningPhase,
}

impl RemoveOutcome {
    /// True when no slot contained a matching item
    pub fn is_not_found(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Aggregate state for one meal-planning conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlannerState {
    /// Session identifier
    pub id: String,

    breakfast: Vec<MealItem>,
    lunch: Vec<MealItem>,
    dinner: Vec<MealItem>,
    snacks: Vec<MealItem>,

    /// Preferences gathered over the conversation
    pub profile: UserProfile,

    /// Daily targets; None until the first goal-setting call
    goals: Option<NutritionGoals>,

    /// Slot last touched, for UI/prompt context
    pub current_meal: MealSlot,

    /// Conversation stage
    pub phase: PlanningPhase,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last mutation timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Default for MealPlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlannerState {
    /// Fresh state for a new session
    pub fn new() -> Self {
        Self::with_id(Uuid::now_v7().to_string())
    }

    /// Create with a specific ID (for testing or session recovery)
    pub fn with_id(id: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: id.into(),
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
            snacks: Vec::new(),
            profile: UserProfile::default(),
            goals: None,
            current_meal: MealSlot::Breakfast,
            phase: PlanningPhase::GatheringInfo,
            created_at: now,
            updated_at: now,
        }
    }

    // === Read-only views ===

    /// Items in one slot, in insertion order
    pub fn slot(&self, slot: MealSlot) -> &[MealItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Current goals, if any have been set
    pub fn goals(&self) -> Option<&NutritionGoals> {
        self.goals.as_ref()
    }

    /// Count of non-empty main-meal slots
    pub fn meals_with_items(&self) -> usize {
        meals_with_items(self)
    }

    /// Today's totals, recomputed from the current item lists
    pub fn current_totals(&self, catalog: &FoodCatalog) -> NutritionInfo {
        nutrition::daily_totals(self, catalog)
    }

    /// Display string for the current totals
    pub fn nutrition_summary(&self, catalog: &FoodCatalog) -> String {
        self.current_totals(catalog).summary()
    }

    /// Percent-of-target per nutrient; None until complete goals exist
    pub fn progress_to_goals(&self, catalog: &FoodCatalog) -> Option<NutritionProgress> {
        let goals = self.goals.as_ref()?;
        nutrition::progress_to_goals(self.current_totals(catalog), goals)
    }

    /// Whether the day's calories sit inside the goal window
    pub fn has_sufficient_nutrition(&self, catalog: &FoodCatalog) -> bool {
        has_sufficient_nutrition(self, catalog)
    }

    // === Mutations ===
    //
    // Each applies a pure-replace update, bumps updated_at, then re-runs
    // the phase machine on the post-mutation snapshot.

    /// Append one item to a slot
    pub fn add_item(&mut self, slot: MealSlot, item: MealItem, catalog: &FoodCatalog) -> StateUpdate {
        debug!(session = %self.id, %slot, item = %item, "MealPlannerState::add_item: called");
        self.add_items(slot, vec![item], catalog)
    }

    /// Append a batch of items to a slot. All-or-nothing: MealItem
    /// construction is pure, so the whole batch lands at once.
    pub fn add_items(
        &mut self,
        slot: MealSlot,
        items: Vec<MealItem>,
        catalog: &FoodCatalog,
    ) -> StateUpdate {
        debug!(session = %self.id, %slot, count = items.len(), "MealPlannerState::add_items: called");
        let mut list = self.slot(slot).to_vec();
        list.extend(items);
        self.replace_slot(slot, list);
        self.current_meal = slot;
        self.finish_mutation(catalog)
    }

    /// Remove the first case-insensitive name match from the given slot,
    /// or from every slot containing a match when no slot is given.
    /// No match leaves the state byte-for-byte untouched.
    pub fn remove_item(
        &mut self,
        food: &str,
        slot: Option<MealSlot>,
        catalog: &FoodCatalog,
    ) -> RemoveOutcome {
        debug!(session = %self.id, %food, ?slot, "MealPlannerState::remove_item: called");
        let slots: &[MealSlot] = match slot {
            Some(ref s) => std::slice::from_ref(s),
            None => &MealSlot::ALL,
        };

        let mut removed = Vec::new();
        for &target in slots {
            let items = self.slot(target);
            if let Some(index) = items.iter().position(|item| item.matches_name(food)) {
                let mut list = items.to_vec();
                let item = list.remove(index);
                self.replace_slot(target, list);
                removed.push((target, item));
            }
        }

        if removed.is_empty() {
            debug!(session = %self.id, %food, "remove_item: not found, no-op");
            return RemoveOutcome {
                removed,
                phase: self.phase,
            };
        }

        let update = self.finish_mutation(catalog);
        RemoveOutcome {
            removed,
            phase: update.phase,
        }
    }

    /// Empty one slot
    pub fn clear_slot(&mut self, slot: MealSlot, catalog: &FoodCatalog) -> StateUpdate {
        debug!(session = %self.id, %slot, "MealPlannerState::clear_slot: called");
        self.replace_slot(slot, Vec::new());
        self.finish_mutation(catalog)
    }

    /// Empty all four slots and reset the current meal to breakfast
    pub fn clear_all(&mut self, catalog: &FoodCatalog) -> StateUpdate {
        debug!(session = %self.id, "MealPlannerState::clear_all: called");
        for slot in MealSlot::ALL {
            self.replace_slot(slot, Vec::new());
        }
        self.current_meal = MealSlot::Breakfast;
        self.finish_mutation(catalog)
    }

    /// Partial profile update - absent fields are preserved
    pub fn update_profile(&mut self, update: ProfileUpdate, catalog: &FoodCatalog) -> StateUpdate {
        debug!(session = %self.id, "MealPlannerState::update_profile: called");
        self.profile.apply(update);
        self.finish_mutation(catalog)
    }

    /// Derive and replace the goals object wholesale.
    ///
    /// A validation failure rejects the operation and leaves the state
    /// unchanged - no partial goals object is committed.
    pub fn set_goals(
        &mut self,
        daily_calories: u32,
        diet_type: DietType,
        custom: Option<MacroSplit>,
        catalog: &FoodCatalog,
    ) -> Result<StateUpdate, GoalError> {
        debug!(session = %self.id, daily_calories, %diet_type, "MealPlannerState::set_goals: called");
        let goals = NutritionGoals::derive(daily_calories, diet_type, custom)?;
        self.goals = Some(goals);
        Ok(self.finish_mutation(catalog))
    }

    /// Pure-replace slot assignment
    fn replace_slot(&mut self, slot: MealSlot, items: Vec<MealItem>) {
        match slot {
            MealSlot::Breakfast => self.breakfast = items,
            MealSlot::Lunch => self.lunch = items,
            MealSlot::Dinner => self.dinner = items,
            MealSlot::Snacks => self.snacks = items,
        }
    }

    /// Bump the timestamp, re-run the phase machine, report what changed
    fn finish_mutation(&mut self, catalog: &FoodCatalog) -> StateUpdate {
        self.updated_at = now_ms();
        let previous = self.phase;
        self.phase = advance_phase(previous, self, catalog);
        StateUpdate {
            phase: self.phase,
            phase_changed: self.phase != previous,
            current_meal: self.current_meal,
        }
    }
}

#[cfg(test)]
impl MealPlannerState {
    /// Test-only: place items in a slot without running the phase machine
    pub(crate) fn set_slot_for_test(&mut self, slot: MealSlot, items: Vec<MealItem>) {
        self.replace_slot(slot, items);
    }

    /// Test-only: install goals without running the phase machine
    pub(crate) fn set_goals_for_test(&mut self, goals: NutritionGoals) {
        self.goals = Some(goals);
    }
}
