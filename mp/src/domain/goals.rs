//! Nutrition goals and macro-split derivation

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// kcal per gram of protein
pub const CAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const CAL_PER_GRAM_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const CAL_PER_GRAM_FAT: f64 = 9.0;

/// Allowed deviation when validating that custom percentages sum to 1.0
pub const MACRO_SUM_TOLERANCE: f64 = 0.01;

/// Errors rejected at goal construction. The operation fails; no partial
/// goals object is ever committed to the planner state.
#[derive(Debug, Error, PartialEq)]
pub enum GoalError {
    #[error("macro percentages must sum to 1.0 (got {sum:.2})")]
    InvalidMacroSplit { sum: f64 },

    #[error("custom diet type requires explicit macro percentages")]
    MissingCustomSplit,
}

/// Named macro-ratio preset, or custom with explicit percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    #[default]
    Balanced,
    HighProtein,
    LowCarb,
    Keto,
    Vegetarian,
    Vegan,
    Custom,
}

impl DietType {
    /// Parse a diet name leniently. Unrecognized names fall back to
    /// balanced, matching the goal deriver's fallback row.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "balanced" => Self::Balanced,
            "high-protein" => Self::HighProtein,
            "low-carb" => Self::LowCarb,
            "keto" => Self::Keto,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            "custom" => Self::Custom,
            other => {
                debug!(diet = %other, "Unrecognized diet type, using balanced");
                Self::Balanced
            }
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::HighProtein => write!(f, "high-protein"),
            Self::LowCarb => write!(f, "low-carb"),
            Self::Keto => write!(f, "keto"),
            Self::Vegetarian => write!(f, "vegetarian"),
            Self::Vegan => write!(f, "vegan"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Fraction of daily calories assigned to each macro. Each field is in
/// [0, 1]; a valid split sums to 1.0 within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    /// Fixed preset table. Custom has no table row; callers must supply an
    /// explicit split for it.
    pub fn for_diet(diet: DietType) -> Option<MacroSplit> {
        let split = match diet {
            DietType::Balanced | DietType::Vegetarian | DietType::Vegan => MacroSplit {
                protein: 0.20,
                carbs: 0.50,
                fat: 0.30,
            },
            DietType::HighProtein => MacroSplit {
                protein: 0.30,
                carbs: 0.40,
                fat: 0.30,
            },
            DietType::LowCarb => MacroSplit {
                protein: 0.25,
                carbs: 0.20,
                fat: 0.55,
            },
            DietType::Keto => MacroSplit {
                protein: 0.20,
                carbs: 0.05,
                fat: 0.75,
            },
            DietType::Custom => return None,
        };
        Some(split)
    }

    /// Sum of the three fractions
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// True when the split sums to 1.0 within tolerance
    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() <= MACRO_SUM_TOLERANCE
    }
}

/// Daily nutrition targets.
///
/// Created whole by [`NutritionGoals::derive`] and immutable afterwards; a
/// new goal-setting call replaces the object wholesale. Gram targets are
/// always derived from calories and percentages, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Daily calorie target (kcal). Zero leaves gram targets unset.
    pub daily_calories: u32,
    pub diet_type: DietType,
    /// Fraction of calories from each macro
    pub macros: MacroSplit,
    /// Derived gram targets; None when daily_calories is zero
    pub protein_target_g: Option<f64>,
    pub carb_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
}

impl NutritionGoals {
    /// Derive goals from a calorie target and diet type.
    ///
    /// A supplied custom split forces the diet type to custom and must sum
    /// to 1.0 within [`MACRO_SUM_TOLERANCE`]. A custom diet type without an
    /// explicit split is rejected. Other diet types use the preset table.
    pub fn derive(
        daily_calories: u32,
        diet_type: DietType,
        custom: Option<MacroSplit>,
    ) -> Result<NutritionGoals, GoalError> {
        debug!(daily_calories, %diet_type, ?custom, "NutritionGoals::derive: called");

        let (diet_type, macros) = match custom {
            Some(split) => {
                if !split.is_valid() {
                    return Err(GoalError::InvalidMacroSplit { sum: split.sum() });
                }
                (DietType::Custom, split)
            }
            None => match MacroSplit::for_diet(diet_type) {
                Some(split) => (diet_type, split),
                None => return Err(GoalError::MissingCustomSplit),
            },
        };

        let targets = (daily_calories > 0).then(|| {
            let calories = f64::from(daily_calories);
            (
                calories * macros.protein / CAL_PER_GRAM_PROTEIN,
                calories * macros.carbs / CAL_PER_GRAM_CARBS,
                calories * macros.fat / CAL_PER_GRAM_FAT,
            )
        });

        Ok(NutritionGoals {
            daily_calories,
            diet_type,
            macros,
            protein_target_g: targets.map(|t| t.0),
            carb_target_g: targets.map(|t| t.1),
            fat_target_g: targets.map(|t| t.2),
        })
    }

    /// True when gram targets were derivable (positive calorie target).
    /// Incomplete goals must not drive progress calculations.
    pub fn is_complete(&self) -> bool {
        self.protein_target_g.is_some()
    }
}
