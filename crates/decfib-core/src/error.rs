//! Error type shared by big-number construction, arithmetic, and generation.

use std::collections::TryReserveError;

/// Error type for big-number operations.
#[derive(Debug, thiserror::Error)]
pub enum BigNumError {
    /// Backing storage for a digit chain could not be grown.
    ///
    /// The value that was being grown is left unmodified; anything allocated
    /// for the failing operation has already been released.
    #[error("allocation failure while growing digit chain: {0}")]
    Allocation(#[from] TryReserveError),

    /// An operand was absent or malformed where a decimal value is required.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// Restricted subtraction was invoked with minuend < subtrahend.
    #[error("subtraction precondition violated: minuend is smaller than subtrahend")]
    PreconditionViolation,
}
