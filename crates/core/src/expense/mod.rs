//! Create-expense request building.
//!
//! Validates a new expense, runs the split allocator, and packages the
//! result into the payload the expense service accepts.

pub mod error;
pub mod request;

pub use error::ExpenseError;
pub use request::{CreateExpenseRequest, NewExpense, SplitEntry};
