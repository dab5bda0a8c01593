//! Expense split allocation.
//!
//! Turns an expense total into per-participant shares whose sum equals the
//! total exactly, to the minor unit.
//!
//! # Modules
//!
//! - `types` - Split domain types (SplitAllocation, Share, SplitType)
//! - `error` - Split-specific error types
//! - `equal` - Equal split with a configurable remainder policy
//! - `weighted` - Exact-amount and percentage splits

pub mod equal;
pub mod error;
pub mod types;
pub mod weighted;

#[cfg(test)]
mod props;

pub use equal::{EqualSplitAllocator, allocate};
pub use error::SplitError;
pub use evensplit_shared::types::RemainderPolicy;
pub use types::{Share, SplitAllocation, SplitType};
pub use weighted::{allocate_by_percentage, allocate_exact};
