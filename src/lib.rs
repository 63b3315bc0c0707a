pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod solver;

pub use error::{Result, SolverError};
pub use models::{MacroVector, MealEntry, MenuItem, SolvedMeal};
pub use solver::{solve, ItemChoice, SolveOutcome, SolverConfig};
