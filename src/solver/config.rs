use std::time::Duration;

use crate::error::{Result, SolverError};
use crate::models::MacroVector;

/// Serving multipliers a selected item may take, matching the portions a
/// dining hall realistically serves.
pub const DEFAULT_MULTIPLIERS: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// Default cap on how many distinct items make up a meal.
pub const DEFAULT_MAX_ITEMS: usize = 6;

/// Default node budget for the branch-and-bound search.
pub const DEFAULT_MAX_NODES: u64 = 5_000_000;

/// Default number of randomized greedy restarts used to seed the incumbent.
pub const DEFAULT_RESTARTS: usize = 8;

/// Configuration for a single solve invocation.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Allowed serving multipliers. Never zero: "no serving" is modeled as
    /// not selecting the item.
    pub multipliers: Vec<f64>,

    /// Maximum number of selected items.
    pub max_items: usize,

    /// Per-macro objective weights. Uniform by default.
    pub weights: MacroVector,

    /// Node budget for the search. When exhausted the best incumbent is
    /// returned with `proven_optimal` unset.
    pub max_nodes: u64,

    /// Optional wall-clock budget, checked periodically during the search.
    pub time_limit: Option<Duration>,

    /// Item ids that must appear in the meal.
    pub required: Vec<i64>,

    /// Randomized greedy restarts for incumbent seeding.
    pub restarts: usize,

    /// Seed for the randomized restarts; fixed seed means reproducible runs.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            max_items: DEFAULT_MAX_ITEMS,
            weights: MacroVector::ones(),
            max_nodes: DEFAULT_MAX_NODES,
            time_limit: None,
            required: Vec::new(),
            restarts: DEFAULT_RESTARTS,
            seed: 42,
        }
    }
}

impl SolverConfig {
    /// Fail fast on a malformed configuration, before any solve attempt.
    pub fn validate(&self) -> Result<()> {
        if self.multipliers.is_empty() {
            return Err(SolverError::InvalidConfiguration(
                "allowed multiplier set is empty".to_string(),
            ));
        }
        if self
            .multipliers
            .iter()
            .any(|m| !m.is_finite() || *m <= 0.0)
        {
            return Err(SolverError::InvalidConfiguration(
                "multipliers must be finite and positive".to_string(),
            ));
        }
        if self.max_items == 0 {
            return Err(SolverError::InvalidConfiguration(
                "max_items must be positive".to_string(),
            ));
        }
        if !self.weights.is_valid() {
            return Err(SolverError::InvalidConfiguration(
                "macro weights must be finite and non-negative".to_string(),
            ));
        }
        if self.max_nodes == 0 {
            return Err(SolverError::InvalidConfiguration(
                "node budget must be positive".to_string(),
            ));
        }
        if self.required.len() > self.max_items {
            return Err(SolverError::InvalidConfiguration(format!(
                "{} required items exceed max_items of {}",
                self.required.len(),
                self.max_items
            )));
        }
        Ok(())
    }

    /// Largest allowed multiplier; used by the relaxation bound.
    pub fn max_multiplier(&self) -> f64 {
        self.multipliers.iter().copied().fold(0.0, f64::max)
    }
}
