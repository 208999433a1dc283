//! Core Kernel - Foundational types shared by the theater statement crates
//!
//! This crate provides the building blocks the domain crates depend on:
//! - Money held as integer minor units (cents) with an ISO 4217 currency
//! - The currency formatting capability used when rendering statements
//! - Common error types

pub mod money;
pub mod format;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use format::{CurrencyFormatter, LocaleFormatter};
pub use error::CoreError;
