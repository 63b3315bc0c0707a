use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search ended with no feasible incumbent. The empty (or
    /// pinned-only) selection is always feasible and always seeded, so this
    /// indicates an implementation or configuration defect, not bad data.
    #[error("Solver found no feasible selection: {0}")]
    Infeasible(String),

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
