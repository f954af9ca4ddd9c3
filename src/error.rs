//! Error types for field construction, coder construction and decoding

use thiserror::Error;

/// Errors produced by the Galois-field engine and the cyclic coder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FecError {
    /// Field degree outside the supported range [2, 16]
    #[error("Invalid field degree M={m}: must be between 2 and 16")]
    InvalidFieldDegree { m: u32 },

    /// No built-in primitive polynomial is registered for this degree
    #[error("No built-in primitive polynomial registered for M={m}")]
    UnsupportedFieldDegree { m: u32 },

    /// The supplied polynomial does not generate the full multiplicative group
    #[error("Polynomial {polynomial:#x} is not primitive for GF(2^{m})")]
    NonPrimitivePolynomial { m: u32, polynomial: u32 },

    /// (n, k, t) do not describe a code over the given field
    #[error("Invalid code parameters: {0}")]
    InvalidCodeParameters(String),

    /// Input block has the wrong number of symbols
    #[error("Invalid input length: expected {expected}, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Decode mode and options cannot be honoured for this input
    #[error("Invalid decode options: {0}")]
    InvalidDecodeOptions(String),

    /// More errors occurred than the code can correct
    #[error("Uncorrectable block: {reason}")]
    Uncorrectable { reason: String },
}

impl FecError {
    /// True for the expected runtime outcome of decoding a block with too many
    /// errors, false for contract violations.
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, FecError::Uncorrectable { .. })
    }

    pub(crate) fn uncorrectable(reason: impl Into<String>) -> Self {
        FecError::Uncorrectable {
            reason: reason.into(),
        }
    }
}

/// Type alias for results of FEC operations
pub type FecResult<T> = Result<T, FecError>;
