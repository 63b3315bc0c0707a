use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SolverError};
use crate::models::{MenuItem, SolvedMeal};

/// Load an extracted menu file.
///
/// Accepts either a flat item list or a sectioned map of
/// `{section_name: [items]}`; sectioned menus are flattened with each item
/// stamped with its section. Items are deduplicated by id, last occurrence
/// wins, first-seen position kept.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    let items = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(sections) => flatten_sections(sections)?,
        _ => {
            return Err(SolverError::InvalidInput(
                "menu file must be a JSON array or a sectioned object".to_string(),
            ))
        }
    };

    Ok(dedup_by_id(items))
}

/// Flatten a sectioned menu into a single list, stamping each item with its
/// section name.
pub fn flatten_sections(sections: serde_json::Map<String, Value>) -> Result<Vec<MenuItem>> {
    let mut flat = Vec::new();
    for (section, items) in sections {
        let mut items: Vec<MenuItem> = serde_json::from_value(items)?;
        for item in &mut items {
            item.section = Some(section.clone());
        }
        flat.extend(items);
    }
    Ok(flat)
}

fn dedup_by_id(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<MenuItem> = Vec::with_capacity(items.len());
    for item in items {
        match positions.get(&item.id) {
            Some(&pos) => out[pos] = item,
            None => {
                positions.insert(item.id, out.len());
                out.push(item);
            }
        }
    }
    out
}

/// Write a solved meal to disk as pretty JSON.
pub fn save_meal<P: AsRef<Path>>(path: P, meal: &SolvedMeal) -> Result<()> {
    let json = serde_json::to_string_pretty(meal)?;
    fs::write(path, json)?;
    Ok(())
}
