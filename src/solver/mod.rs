pub mod config;
pub mod engine;
mod greedy;

pub use config::SolverConfig;
pub use engine::{solve, ItemChoice, SolveOutcome};
