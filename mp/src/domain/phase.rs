//! PlanningPhase - the conversation's stage in the meal-planning workflow

use serde::{Deserialize, Serialize};

/// Stages of a planning conversation.
///
/// Ordered in the common path but not strictly linear: the phase machine
/// may jump ahead when preconditions are already satisfied (e.g. the user
/// builds two meals before stating any goals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanningPhase {
    /// Learning preferences and restrictions
    #[default]
    GatheringInfo,
    /// Establishing calorie and macro targets
    SettingGoals,
    /// Filling meal slots
    BuildingMeals,
    /// Adjusting toward the calorie target
    Optimizing,
    /// Plan meets the target window
    Complete,
}

impl PlanningPhase {
    /// True once the plan has reached the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for PlanningPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GatheringInfo => write!(f, "gathering_info"),
            Self::SettingGoals => write!(f, "setting_goals"),
            Self::BuildingMeals => write!(f, "building_meals"),
            Self::Optimizing => write!(f, "optimizing"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
