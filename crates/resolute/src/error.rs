//! Error types for resolute

use thiserror::Error;

/// Errors raised while turning input formulas into clauses.
///
/// Running out of resources during the search is not an error; it is reported
/// as an outcome of the proof attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid formula: {reason}")]
    InvalidFormula { reason: String },

    #[error("Skolem symbol {name} collides with an existing symbol")]
    SkolemCollision { name: String },

    #[error("Normalization failed: {reason}")]
    Normalization { reason: String },
}

impl Error {
    pub fn invalid_formula(reason: impl Into<String>) -> Self {
        Error::InvalidFormula {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
