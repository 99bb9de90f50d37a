//! UserProfile and partial profile updates

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// How much time the user wants to spend cooking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingTime {
    Quick,
    Moderate,
    Extensive,
}

impl std::fmt::Display for CookingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Moderate => write!(f, "moderate"),
            Self::Extensive => write!(f, "extensive"),
        }
    }
}

impl std::str::FromStr for CookingTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "moderate" => Ok(Self::Moderate),
            "extensive" => Ok(Self::Extensive),
            other => Err(format!("Unknown cooking time preference: {}", other)),
        }
    }
}

/// Dietary preferences gathered over the conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Free-text restrictions (e.g. "vegetarian", "gluten-free")
    pub dietary_restrictions: BTreeSet<String>,
    /// Preferred cuisines, in the order the user mentioned them
    pub preferred_cuisines: Vec<String>,
    /// Cooking-time preference, unset until stated
    pub cooking_time: Option<CookingTime>,
    /// Health goals (e.g. "lose weight", "build muscle")
    pub health_goals: Vec<String>,
}

/// Partial update: only supplied fields overwrite the profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub dietary_restrictions: Option<BTreeSet<String>>,
    pub preferred_cuisines: Option<Vec<String>>,
    pub cooking_time: Option<CookingTime>,
    pub health_goals: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.dietary_restrictions.is_none()
            && self.preferred_cuisines.is_none()
            && self.cooking_time.is_none()
            && self.health_goals.is_none()
    }
}

impl UserProfile {
    /// Apply a partial update. Absent fields are preserved.
    pub fn apply(&mut self, update: ProfileUpdate) {
        debug!(?update, "UserProfile::apply: called");
        if let Some(restrictions) = update.dietary_restrictions {
            self.dietary_restrictions = restrictions;
        }
        if let Some(cuisines) = update.preferred_cuisines {
            self.preferred_cuisines = cuisines;
        }
        if let Some(cooking_time) = update.cooking_time {
            self.cooking_time = Some(cooking_time);
        }
        if let Some(goals) = update.health_goals {
            self.health_goals = goals;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_preserves_absent_fields() {
        let mut profile = UserProfile {
            dietary_restrictions: ["vegetarian".to_string()].into(),
            preferred_cuisines: vec!["italian".to_string()],
            cooking_time: Some(CookingTime::Quick),
            health_goals: vec![],
        };

        profile.apply(ProfileUpdate {
            preferred_cuisines: Some(vec!["thai".to_string(), "mexican".to_string()]),
            ..Default::default()
        });

        // Updated
        assert_eq!(profile.preferred_cuisines, vec!["thai", "mexican"]);
        // Preserved
        assert!(profile.dietary_restrictions.contains("vegetarian"));
        assert_eq!(profile.cooking_time, Some(CookingTime::Quick));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut profile = UserProfile::default();
        profile.dietary_restrictions.insert("gluten-free".to_string());
        let before = profile.clone();

        let update = ProfileUpdate::default();
        assert!(update.is_empty());
        profile.apply(update);

        assert_eq!(profile, before);
    }

    #[test]
    fn test_cooking_time_parse() {
        assert_eq!("Quick".parse::<CookingTime>().unwrap(), CookingTime::Quick);
        assert!("instant".parse::<CookingTime>().is_err());
    }
}
