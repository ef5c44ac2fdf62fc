use thiserror::Error;

use crate::models::{Macronutrient, MacronutrientProfile};

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Invalid input: {nutrient} must be a finite, non-negative amount of grams (got {value})")]
    InvalidInput { nutrient: Macronutrient, value: f64 },

    #[error("Energy out of range for {0}")]
    EnergyOverflow(MacronutrientProfile),

    #[error("Invalid servings: {0}")]
    InvalidServings(f64),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BalanceError>;

/// Caller-facing status an error maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    BadRequest,
    NotFound,
    Internal,
}

impl ErrorStatus {
    /// Process exit code used by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorStatus::BadRequest => 2,
            ErrorStatus::NotFound => 3,
            ErrorStatus::Internal => 1,
        }
    }
}

impl BalanceError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            BalanceError::InvalidInput { .. }
            | BalanceError::EnergyOverflow(_)
            | BalanceError::InvalidServings(_) => ErrorStatus::BadRequest,
            BalanceError::FoodNotFound(_) => ErrorStatus::NotFound,
            BalanceError::Io(_) | BalanceError::Json(_) | BalanceError::Csv(_) => {
                ErrorStatus::Internal
            }
        }
    }
}
