//! Meal slots and meal items

use serde::{Deserialize, Serialize};

/// One of the four meal slots in a day's plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// All slots, in display order
    pub const ALL: [MealSlot; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Main meals only (snacks excluded) - the slots that count toward
    /// phase-advancement heuristics
    pub const MAIN: [MealSlot; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// True for breakfast/lunch/dinner, false for snacks
    pub fn is_main(&self) -> bool {
        !matches!(self, Self::Snacks)
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snacks => write!(f, "snacks"),
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snacks),
            other => Err(format!("Unknown meal slot: {}", other)),
        }
    }
}

/// One food entry inside a meal slot.
///
/// Value type: never mutated in place. Removal filters it out of the slot
/// list, updates replace it. The amount keeps the user-facing string form
/// ("1 1/2") so fraction notation survives round trips through the LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Food name as the user/LLM gave it (not required to match the catalog)
    pub food: String,
    /// Quantity in string form, fractions allowed
    pub amount: String,
    /// Unit label
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    foodcatalog::DEFAULT_UNIT.to_string()
}

impl MealItem {
    /// Create an item with the default "serving" unit
    pub fn new(food: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            food: food.into(),
            amount: amount.into(),
            unit: default_unit(),
        }
    }

    /// Builder method to set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Case-insensitive name match, used by removal
    pub fn matches_name(&self, food: &str) -> bool {
        self.food.trim().to_lowercase() == food.trim().to_lowercase()
    }
}

impl std::fmt::Display for MealItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.amount, self.unit, self.food)
    }
}
