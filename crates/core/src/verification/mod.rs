//! Per-participant expense verification.
//!
//! Every user involved in an expense confirms it. The payer accepts
//! implicitly; the expense is approved once everyone has accepted, and a
//! single rejection blocks approval.

pub mod error;
pub mod types;

pub use error::VerificationError;
pub use types::{ExpenseVerification, VerificationStatus};
