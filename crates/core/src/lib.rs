//! Core expense-splitting logic for EvenSplit.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Money is only ever divided as whole minor units, never as floats.
//!
//! # Modules
//!
//! - `split` - Equal, exact, and percentage allocation of an expense
//! - `expense` - Create-expense request building on top of `split`
//! - `verification` - Per-participant expense acceptance and approval

pub mod expense;
pub mod split;
pub mod verification;
