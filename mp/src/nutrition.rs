//! Nutrition computation
//!
//! Totals are a pure function of the current item lists plus the food
//! catalog. Every call recomputes from scratch - there is no incremental
//! path to get out of sync with the meals that produced it. O(items) per
//! call, which is fine at conversational-turn data volumes.

use foodcatalog::FoodCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{MealItem, MealSlot, NutritionGoals, NutritionInfo};
use crate::quantity::parse_amount;
use crate::state::MealPlannerState;

/// Nutrition contributed by one meal item.
///
/// Foods missing from the catalog contribute zero rather than erroring;
/// the tool layer surfaces the miss to the user.
pub fn item_nutrition(item: &MealItem, catalog: &FoodCatalog) -> NutritionInfo {
    let Some(entry) = catalog.lookup(&item.food) else {
        debug!(food = %item.food, "Unknown food, zero contribution");
        return NutritionInfo::ZERO;
    };

    let multiplier = parse_amount(&item.amount);
    NutritionInfo {
        calories: entry.calories,
        protein: entry.protein,
        carbs: entry.carbs,
        fat: entry.fat,
    }
    .scaled(multiplier)
}

/// Field-wise sum across one meal's item list
pub fn meal_totals(items: &[MealItem], catalog: &FoodCatalog) -> NutritionInfo {
    items.iter().map(|item| item_nutrition(item, catalog)).sum()
}

/// Field-wise sum across all four meal slots
pub fn daily_totals(state: &MealPlannerState, catalog: &FoodCatalog) -> NutritionInfo {
    MealSlot::ALL
        .iter()
        .map(|slot| meal_totals(state.slot(*slot), catalog))
        .sum()
}

/// Percent-of-target per nutrient, for goal-progress prompts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProgress {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Progress toward goals as percentages of each target.
///
/// None when goals are absent or incomplete (no gram targets derived).
pub fn progress_to_goals(totals: NutritionInfo, goals: &NutritionGoals) -> Option<NutritionProgress> {
    if !goals.is_complete() {
        return None;
    }
    let pct = |consumed: f64, target: f64| {
        if target > 0.0 { consumed / target * 100.0 } else { 0.0 }
    };
    Some(NutritionProgress {
        calories_pct: pct(totals.calories, f64::from(goals.daily_calories)),
        protein_pct: pct(totals.protein, goals.protein_target_g?),
        carbs_pct: pct(totals.carbs, goals.carb_target_g?),
        fat_pct: pct(totals.fat, goals.fat_target_g?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DietType;
    use foodcatalog::FoodCatalogEntry;

    fn oatmeal_catalog() -> FoodCatalog {
        FoodCatalog::from_entries([FoodCatalogEntry {
            id: "oatmeal".to_string(),
            name: "Oatmeal".to_string(),
            calories: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
            unit: "cup".to_string(),
            max_quantity: None,
            tags: vec![],
        }])
    }

    #[test]
    fn test_item_nutrition_scales_by_amount() {
        let catalog = oatmeal_catalog();
        let item = MealItem::new("oatmeal", "2").with_unit("cup");

        let n = item_nutrition(&item, &catalog);
        assert_eq!(n.calories, 300.0);
        assert_eq!(n.protein, 10.0);
        assert_eq!(n.carbs, 54.0);
        assert_eq!(n.fat, 6.0);
    }

    #[test]
    fn test_item_nutrition_fraction_amount() {
        let catalog = oatmeal_catalog();
        let item = MealItem::new("oatmeal", "1/2").with_unit("cup");
        assert_eq!(item_nutrition(&item, &catalog).calories, 75.0);
    }

    #[test]
    fn test_unknown_food_contributes_zero() {
        let catalog = oatmeal_catalog();
        let item = MealItem::new("unicorn_dust", "3");
        assert_eq!(item_nutrition(&item, &catalog), NutritionInfo::ZERO);
    }

    #[test]
    fn test_meal_totals_sums_items() {
        let catalog = oatmeal_catalog();
        let items = vec![
            MealItem::new("oatmeal", "1").with_unit("cup"),
            MealItem::new("oatmeal", "1").with_unit("cup"),
            MealItem::new("unicorn_dust", "5"),
        ];
        let totals = meal_totals(&items, &catalog);
        assert_eq!(totals.calories, 300.0);
        assert_eq!(totals.protein, 10.0);
    }

    #[test]
    fn test_progress_to_goals() {
        let goals = NutritionGoals::derive(2000, DietType::HighProtein, None).unwrap();
        let totals = NutritionInfo {
            calories: 1000.0,
            protein: 75.0,
            carbs: 100.0,
            fat: 33.0,
        };

        let progress = progress_to_goals(totals, &goals).unwrap();
        assert_eq!(progress.calories_pct, 50.0);
        assert_eq!(progress.protein_pct, 50.0); // target 150g
        assert_eq!(progress.carbs_pct, 50.0); // target 200g
    }

    #[test]
    fn test_progress_requires_complete_goals() {
        let goals = NutritionGoals::derive(0, DietType::Balanced, None).unwrap();
        assert!(progress_to_goals(NutritionInfo::ZERO, &goals).is_none());
    }
}
