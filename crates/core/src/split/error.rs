//! Split error types.
//!
//! Every variant is a caller-input validation failure, detected before any
//! share is computed. None of them is retryable with the same input.

use evensplit_shared::AppError;
use evensplit_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while allocating an expense across participants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Total amount is zero, negative, or rounds to zero minor units.
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// No participants were supplied.
    #[error("At least one participant is required")]
    EmptyParticipants,

    /// The payer is not one of the participants.
    #[error("Payer {0} is not a participant")]
    PayerNotParticipant(UserId),

    /// A participant appears more than once.
    #[error("Participant {0} is listed more than once")]
    DuplicateParticipant(UserId),

    /// A per-participant amount or percentage is negative or finer than the
    /// currency's minor unit.
    #[error("Invalid share {value} for participant {participant}")]
    InvalidShare {
        /// Participant the share belongs to.
        participant: UserId,
        /// Offending value.
        value: Decimal,
    },

    /// Exact amounts do not add up to the total.
    #[error("Exact amounts sum to {actual}, expected {expected}")]
    ExactSumMismatch {
        /// Rounded expense total.
        expected: Decimal,
        /// Sum of the supplied amounts.
        actual: Decimal,
    },

    /// Percentages do not add up to 100.
    #[error("Percentages sum to {0}, expected 100")]
    PercentageSumMismatch(Decimal),
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        Self::Validation(err.to_string())
    }
}
