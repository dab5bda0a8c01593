//! Verification error types.

use evensplit_shared::AppError;
use evensplit_shared::types::UserId;
use thiserror::Error;

/// Verification-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The user is neither the payer nor a participant of the expense.
    #[error("User {0} is not involved in this expense")]
    NotInvolved(UserId),
}

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
