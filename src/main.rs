use std::time::Duration;

use clap::Parser;

use macro_meal_solver_rs::cli::{Cli, Command, SolveArgs};
use macro_meal_solver_rs::error::Result;
use macro_meal_solver_rs::interface::{
    display_meal, display_menu, prompt_target, resolve_item_names, write_meal_csv,
};
use macro_meal_solver_rs::menu::{load_menu, save_meal};
use macro_meal_solver_rs::models::{MacroVector, SolvedMeal};
use macro_meal_solver_rs::solver::{solve, SolverConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve(args) => cmd_solve(&cli.menu, args),
        Command::Inspect => cmd_inspect(&cli.menu),
    }
}

/// Solve a meal for the given menu and targets.
fn cmd_solve(menu_path: &str, args: SolveArgs) -> Result<()> {
    let menu = load_menu(menu_path)?;
    println!("Loaded {} menu items", menu.len());

    let goal = match (args.calories, args.protein, args.carbs, args.fat) {
        (Some(calories), Some(protein), Some(carbs), Some(fat)) => {
            MacroVector::new(calories, protein, carbs, fat)
        }
        _ => prompt_target()?,
    };

    let mut config = SolverConfig::default();
    if let Some(max_items) = args.max_items {
        config.max_items = max_items;
    }
    if let Some(max_nodes) = args.max_nodes {
        config.max_nodes = max_nodes;
    }
    if let Some(ms) = args.time_limit_ms {
        config.time_limit = Some(Duration::from_millis(ms));
    }
    if !args.require.is_empty() {
        config.required = resolve_item_names(&args.require, &menu)?;
    }

    let outcome = solve(&menu, goal, &config)?;

    if !outcome.skipped.is_empty() {
        println!(
            "Skipped {} items without usable nutrition",
            outcome.skipped.len()
        );
    }
    if !outcome.proven_optimal {
        println!(
            "Search budget exhausted after {} nodes; showing the best meal found, not proven optimal.",
            outcome.nodes_explored
        );
    }

    let solved = SolvedMeal::assemble(&menu, goal, &outcome);
    display_meal(&solved);

    if let Some(out) = &args.out {
        save_meal(out, &solved)?;
        println!("Wrote {}", out.display());
    }
    if let Some(csv_path) = &args.csv {
        write_meal_csv(csv_path, &solved)?;
        println!("Wrote {}", csv_path.display());
    }

    Ok(())
}

/// List the menu with eligibility information.
fn cmd_inspect(menu_path: &str) -> Result<()> {
    let menu = load_menu(menu_path)?;
    display_menu(&menu);

    let eligible = menu.iter().filter(|i| i.is_eligible()).count();
    println!("{} of {} items have usable nutrition", eligible, menu.len());

    Ok(())
}
