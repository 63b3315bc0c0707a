use std::path::Path;

use crate::error::Result;
use crate::models::SolvedMeal;

/// Write the solved meal as CSV, one row per entry with servings-scaled
/// macros.
pub fn write_meal_csv<P: AsRef<Path>>(path: P, solved: &SolvedMeal) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "id",
        "name",
        "section",
        "servings",
        "calories",
        "g_protein",
        "g_carbs",
        "g_fat",
    ])?;

    for entry in &solved.meal {
        let scaled = entry
            .item
            .macros()
            .map(|m| m * entry.servings)
            .unwrap_or_default();

        writer.write_record([
            entry.item.id.to_string(),
            entry.item.name.clone(),
            entry.item.section.clone().unwrap_or_default(),
            format!("{}", entry.servings),
            format!("{:.2}", scaled.calories),
            format!("{:.2}", scaled.protein),
            format!("{:.2}", scaled.carbs),
            format!("{:.2}", scaled.fat),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
