//! NutritionInfo value type

use serde::{Deserialize, Serialize};

/// Totals for calories and the three macros.
///
/// Purely derived: always recomputed from the item lists that produced it,
/// never stored or incrementally maintained. Values are unrounded; rounding
/// happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
}

impl NutritionInfo {
    /// The all-zero contribution, used for catalog misses
    pub const ZERO: NutritionInfo = NutritionInfo {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    /// Scale every field by a quantity multiplier
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Display string, rounded to whole numbers
    pub fn summary(&self) -> String {
        format!(
            "Calories: {:.0}, Protein: {:.0}g, Carbs: {:.0}g, Fat: {:.0}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

impl std::ops::Add for NutritionInfo {
    type Output = NutritionInfo;

    fn add(self, rhs: NutritionInfo) -> NutritionInfo {
        NutritionInfo {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl std::ops::AddAssign for NutritionInfo {
    fn add_assign(&mut self, rhs: NutritionInfo) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

impl std::iter::Sum for NutritionInfo {
    fn sum<I: Iterator<Item = NutritionInfo>>(iter: I) -> NutritionInfo {
        iter.fold(NutritionInfo::ZERO, |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        let n = NutritionInfo {
            calories: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
        };
        let doubled = n.scaled(2.0);
        assert_eq!(doubled.calories, 300.0);
        assert_eq!(doubled.protein, 10.0);
        assert_eq!(doubled.carbs, 54.0);
        assert_eq!(doubled.fat, 6.0);
    }

    #[test]
    fn test_sum() {
        let parts = vec![
            NutritionInfo {
                calories: 100.0,
                protein: 10.0,
                carbs: 5.0,
                fat: 2.0,
            },
            NutritionInfo {
                calories: 350.0,
                protein: 10.0,
                carbs: 50.0,
                fat: 10.0,
            },
        ];
        let total: NutritionInfo = parts.into_iter().sum();
        assert_eq!(total.calories, 450.0);
        assert_eq!(total.protein, 20.0);
    }

    #[test]
    fn test_summary_rounds_at_display() {
        let n = NutritionInfo {
            calories: 450.4,
            protein: 20.0,
            carbs: 55.0,
            fat: 12.0,
        };
        assert_eq!(n.summary(), "Calories: 450, Protein: 20g, Carbs: 55g, Fat: 12g");
    }
}
