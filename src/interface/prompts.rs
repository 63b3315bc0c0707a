use dialoguer::Input;
use strsim::jaro_winkler;

use crate::error::{Result, SolverError};
use crate::models::{MacroVector, MenuItem};

fn prompt_macro(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| SolverError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(SolverError::InvalidInput(
            "Macro targets must be non-negative".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for the four macro targets.
pub fn prompt_target() -> Result<MacroVector> {
    let calories = prompt_macro("Target calories", "2000")?;
    let protein = prompt_macro("Target protein (g)", "150")?;
    let carbs = prompt_macro("Target carbs (g)", "250")?;
    let fat = prompt_macro("Target fat (g)", "65")?;

    Ok(MacroVector::new(calories, protein, carbs, fat))
}

/// Resolve user-supplied item names to catalog ids.
///
/// Tries an exact case-insensitive match first, then falls back to the
/// closest Jaro-Winkler match above 0.7.
pub fn resolve_item_names(names: &[String], menu: &[MenuItem]) -> Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(names.len());

    for name in names {
        let wanted = name.to_lowercase();

        if let Some(item) = menu.iter().find(|i| i.name.to_lowercase() == wanted) {
            ids.push(item.id);
            continue;
        }

        let best = menu
            .iter()
            .map(|item| (item, jaro_winkler(&item.name.to_lowercase(), &wanted)))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((item, _)) => {
                println!("Matched '{}' -> '{}'", name, item.name);
                ids.push(item.id);
            }
            None => return Err(SolverError::ItemNotFound(name.clone())),
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_menu() -> Vec<MenuItem> {
        serde_json::from_value(json!([
            {"id": 0, "name": "Grilled Chicken Breast"},
            {"id": 1, "name": "Brown Rice"},
            {"id": 2, "name": "Steamed Broccoli"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let menu = sample_menu();
        let ids = resolve_item_names(&["brown rice".to_string()], &menu).unwrap();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_fuzzy_match() {
        let menu = sample_menu();
        let ids = resolve_item_names(&["grilled chicken".to_string()], &menu).unwrap();
        assert_eq!(ids, vec![0]);
    }

    #[test]
    fn test_no_match_is_error() {
        let menu = sample_menu();
        let err = resolve_item_names(&["pepperoni pizza".to_string()], &menu).unwrap_err();
        assert!(matches!(err, SolverError::ItemNotFound(_)));
    }
}
