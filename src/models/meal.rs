use serde::{Deserialize, Serialize};

use crate::models::{MacroVector, MenuItem};
use crate::solver::SolveOutcome;

/// One selected item in the solved meal: the original catalog record plus
/// the chosen serving multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(flatten)]
    pub item: MenuItem,

    pub servings: f64,
}

/// The output record: target, achieved totals (rounded for display), and
/// the selected items in engine selection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvedMeal {
    pub goal: MacroVector,
    pub totals: MacroVector,
    pub meal: Vec<MealEntry>,
}

impl SolvedMeal {
    /// Map an engine outcome back onto the catalog records.
    ///
    /// Trusts the selection invariant: every choice points at an eligible
    /// catalog item and a multiplier from the allowed set. Totals are
    /// rounded to two decimals here; the engine's totals stay exact.
    pub fn assemble(menu: &[MenuItem], goal: MacroVector, outcome: &SolveOutcome) -> Self {
        let meal = outcome
            .selection
            .iter()
            .map(|choice| MealEntry {
                item: menu[choice.item_index].clone(),
                servings: choice.multiplier,
            })
            .collect();

        Self {
            goal,
            totals: outcome.totals.rounded(),
            meal,
        }
    }
}
