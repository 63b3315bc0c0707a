use crate::models::{MenuItem, SolvedMeal};

/// Display a solved meal as a formatted table plus a per-macro summary.
pub fn display_meal(solved: &SolvedMeal) {
    if solved.meal.is_empty() {
        println!("No items selected (empty eligible menu or zero target).");
    } else {
        println!();
        println!("=== Meal ===");
        println!();

        let max_name_len = solved
            .meal
            .iter()
            .map(|e| e.item.name.len())
            .max()
            .unwrap_or(10);

        for (i, entry) in solved.meal.iter().enumerate() {
            let scaled = entry
                .item
                .macros()
                .map(|m| m * entry.servings)
                .unwrap_or_default();
            let section = entry
                .item
                .section
                .as_deref()
                .map(|s| format!("  [{s}]"))
                .unwrap_or_default();

            println!(
                "{:>3}. {:<width$} x{:<4} - {:>6.0} cal, P:{:.1} C:{:.1} F:{:.1}{}",
                i + 1,
                entry.item.name,
                entry.servings,
                scaled.calories,
                scaled.protein,
                scaled.carbs,
                scaled.fat,
                section,
                width = max_name_len
            );
        }
    }

    println!();
    println!("--- Macro Results ---");
    let labels = ["Calories", "Protein (g)", "Carbs (g)", "Fat (g)"];
    let actual = solved.totals.as_array();
    let goal = solved.goal.as_array();
    for i in 0..4 {
        println!(
            "{:<12}: {:.2} (goal: {:.2}, diff: {:+.2})",
            labels[i],
            actual[i],
            goal[i],
            actual[i] - goal[i]
        );
    }
    println!();
}

/// Display catalog items with section and eligibility.
pub fn display_menu(menu: &[MenuItem]) {
    if menu.is_empty() {
        println!("Menu is empty.");
        return;
    }

    println!();
    println!("=== Menu ({} items) ===", menu.len());
    println!();

    for item in menu {
        let section = item.section.as_deref().unwrap_or("-");
        match item.macros() {
            Some(m) => println!(
                "  [{:>4}] {} ({}) - {:.0} cal, P:{:.1} C:{:.1} F:{:.1}",
                item.id, item.name, section, m.calories, m.protein, m.carbs, m.fat
            ),
            None => println!(
                "  [{:>4}] {} ({}) - no usable nutrition",
                item.id, item.name, section
            ),
        }
    }

    println!();
}
