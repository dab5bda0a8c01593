//! Shared types, errors, and configuration for EvenSplit.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and minor-unit conversion
//! - Typed IDs for type-safe user, expense, and group references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
