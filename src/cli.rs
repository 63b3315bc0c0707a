use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// MacroMealSolver — picks menu items and serving sizes to hit macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_solver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the extracted menu JSON file.
    #[arg(short, long, default_value = "menu.json")]
    pub menu: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a meal against macro targets.
    Solve(SolveArgs),

    /// List menu items with section and eligibility.
    Inspect,
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve(SolveArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct SolveArgs {
    /// Target calories. Prompted for when any target flag is missing.
    #[arg(long)]
    pub calories: Option<f64>,

    /// Target protein in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Target carbs in grams.
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Target fat in grams.
    #[arg(long)]
    pub fat: Option<f64>,

    /// Maximum number of items in the meal.
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Node budget for the search.
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Wall-clock limit in milliseconds.
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Item names that must appear in the meal (fuzzy matched).
    #[arg(long = "require")]
    pub require: Vec<String>,

    /// Write the solved meal JSON here.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write a CSV of the meal here.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
