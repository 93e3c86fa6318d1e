//! Error types for Lucky Jewels

use thiserror::Error;

/// Identity field that collided during registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Phone,
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Core error type
#[derive(Error, Debug)]
pub enum LjError {
    #[error("Duplicate {0}: already registered")]
    Duplicate(DuplicateField),

    #[error("Could not generate a unique ticket number after {0} attempts")]
    TicketGeneration(u32),

    #[error("Unknown prize category: {0}")]
    UnknownCategory(String),

    #[error("All prizes in category '{0}' have been awarded")]
    CategoryExhausted(String),

    #[error("No eligible participants remaining")]
    NoEligibleParticipants,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LjError {
    /// True for the expected draw gates (exhausted category, empty pool)
    /// as opposed to faults
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::CategoryExhausted(_) | Self::NoEligibleParticipants
        )
    }
}

/// Result type alias
pub type LjResult<T> = Result<T, LjError>;
