use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// The four-component macro-nutrient vector.
///
/// Used for per-item nutrition, targets, achieved totals, and per-macro
/// objective weights. Wire names follow the menu feed (`g_protein` etc.).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroVector {
    pub calories: f64,

    #[serde(rename = "g_protein")]
    pub protein: f64,

    #[serde(rename = "g_carbs")]
    pub carbs: f64,

    #[serde(rename = "g_fat")]
    pub fat: f64,
}

impl MacroVector {
    pub const ZERO: MacroVector = MacroVector {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Uniform weight vector (the default objective weighting).
    pub fn ones() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// All components finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.as_array()
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }

    /// Weighted squared Euclidean distance to `other`.
    pub fn weighted_sq_dist(&self, other: &MacroVector, weights: &MacroVector) -> f64 {
        let a = self.as_array();
        let b = other.as_array();
        let w = weights.as_array();
        (0..4).map(|i| w[i] * (a[i] - b[i]) * (a[i] - b[i])).sum()
    }

    /// Copy with every component rounded to two decimals, for display only.
    pub fn rounded(&self) -> Self {
        fn round2(v: f64) -> f64 {
            (v * 100.0).round() / 100.0
        }
        Self::new(
            round2(self.calories),
            round2(self.protein),
            round2(self.carbs),
            round2(self.fat),
        )
    }
}

impl Add for MacroVector {
    type Output = MacroVector;

    fn add(self, rhs: MacroVector) -> MacroVector {
        MacroVector::new(
            self.calories + rhs.calories,
            self.protein + rhs.protein,
            self.carbs + rhs.carbs,
            self.fat + rhs.fat,
        )
    }
}

impl AddAssign for MacroVector {
    fn add_assign(&mut self, rhs: MacroVector) {
        *self = *self + rhs;
    }
}

impl Sub for MacroVector {
    type Output = MacroVector;

    fn sub(self, rhs: MacroVector) -> MacroVector {
        MacroVector::new(
            self.calories - rhs.calories,
            self.protein - rhs.protein,
            self.carbs - rhs.carbs,
            self.fat - rhs.fat,
        )
    }
}

impl Mul<f64> for MacroVector {
    type Output = MacroVector;

    fn mul(self, rhs: f64) -> MacroVector {
        MacroVector::new(
            self.calories * rhs,
            self.protein * rhs,
            self.carbs * rhs,
            self.fat * rhs,
        )
    }
}
