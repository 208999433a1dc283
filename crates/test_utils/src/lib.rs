//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! theater statement test suite.
//!
//! # Modules
//!
//! - `fixtures`: The sample catalog and invoices used across tests
//! - `builders`: Builder patterns for test invoices and catalogs
//! - `assertions`: Custom assertion helpers for statement data
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
