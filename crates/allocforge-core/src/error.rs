//! Error types for AllocForge

use thiserror::Error;

/// Main error type for AllocForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocForgeError {
    /// A precondition on capacity or items was violated.
    ///
    /// Reported before any accumulation begins; no partial result exists.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputViolation),

    /// A post-condition check failed (only raised in full assert mode)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AllocForgeError {
    /// Returns `true` if this error describes malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AllocForgeError::InvalidInput(_))
    }

    /// Returns the input violation, if this is an `InvalidInput` error.
    pub fn violation(&self) -> Option<&InputViolation> {
        match self {
            AllocForgeError::InvalidInput(v) => Some(v),
            AllocForgeError::Internal(_) => None,
        }
    }
}

/// The precise precondition an input failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputViolation {
    #[error("item {index} has non-positive weight {weight}")]
    NonPositiveWeight { index: usize, weight: f64 },

    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: f64 },

    #[error("capacity {0} is negative")]
    NegativeCapacity(f64),

    #[error("item {index} has non-finite weight {weight}")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("item {index} has non-finite value {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("capacity {0} is not finite")]
    NonFiniteCapacity(f64),

    #[error("{weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },
}

/// Result type alias for AllocForge operations
pub type Result<T> = std::result::Result<T, AllocForgeError>;
