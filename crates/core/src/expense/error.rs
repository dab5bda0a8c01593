//! Expense request error types.

use evensplit_shared::AppError;
use thiserror::Error;

use crate::split::SplitError;

/// Errors raised while building a create-expense request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Title is empty or whitespace.
    #[error("Title is required")]
    MissingTitle,

    /// Nobody besides the creator was selected to share the expense.
    #[error("Select at least one person to split with")]
    NoMembersSelected,

    /// The split itself is invalid.
    #[error(transparent)]
    Split(#[from] SplitError),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        Self::Validation(err.to_string())
    }
}
