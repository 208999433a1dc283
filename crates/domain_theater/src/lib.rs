//! Theater Billing Domain
//!
//! This crate prices invoices of theatrical performances and renders the
//! customer statement.
//!
//! # Flow
//!
//! ```text
//! Invoice ──> Catalog::resolve ──> Play::genre ──┬──> PricingPolicy::price
//!                                                └──> CreditPolicy::credits
//!                       StatementCalculator::aggregate ──> StatementRenderer
//! ```
//!
//! A performance whose play is missing from the catalog, or whose play type
//! is neither tragedy nor comedy, aborts the whole statement.
//!
//! # Example
//!
//! ```rust
//! use domain_theater::{render, Catalog, Genre, Invoice, Performance, Play};
//!
//! let catalog = Catalog::new().with_play("hamlet", Play::new("Hamlet", Genre::Tragedy));
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let text = render(&invoice, &catalog)?;
//! assert!(text.contains("Hamlet: $650.00 (55 seats)"));
//! # Ok::<(), domain_theater::StatementError>(())
//! ```

pub mod play;
pub mod catalog;
pub mod invoice;
pub mod pricing;
pub mod credits;
pub mod statement;
pub mod render;
pub mod error;

pub use play::{Play, PlayId, Genre};
pub use catalog::Catalog;
pub use invoice::{Invoice, Performance};
pub use pricing::{PricingPolicy, TragedyTariff, ComedyTariff};
pub use credits::CreditPolicy;
pub use statement::{StatementCalculator, StatementData, StatementLine, Tariff};
pub use render::{render, StatementRenderer};
pub use error::StatementError;
