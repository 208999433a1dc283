//! Pre-built Test Fixtures
//!
//! Provides the sample catalog and invoices used throughout the statement
//! tests. Values are consistent and predictable.

use domain_theater::{Catalog, Genre, Invoice, Performance, Play};
use once_cell::sync::Lazy;

static SAMPLE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new()
        .with_play("hamlet", Play::new("Hamlet", Genre::Tragedy))
        .with_play("as-like", Play::new("As You Like It", Genre::Comedy))
        .with_play("othello", Play::new("Othello", Genre::Tragedy))
});

/// Fixture for play catalogs
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Hamlet and Othello (tragedies) and As You Like It (comedy)
    pub fn sample() -> &'static Catalog {
        &SAMPLE_CATALOG
    }

    /// The sample catalog plus a play of unknown type under `henry-v`
    pub fn with_unknown_genre() -> Catalog {
        SAMPLE_CATALOG
            .clone()
            .with_play("henry-v", Play::with_type("Henry V", "history"))
    }
}

/// Fixture for invoices
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// Hamlet to 55 and As You Like It to 35
    pub fn bigco() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ],
        )
    }

    /// The classic three-line invoice: Hamlet 55, As You Like It 35, Othello 40
    pub fn bigco_full() -> Invoice {
        let mut invoice = Self::bigco();
        invoice.performances.push(Performance::new("othello", 40));
        invoice
    }

    /// Statement text for [`InvoiceFixtures::bigco_full`]
    pub fn bigco_full_statement() -> &'static str {
        "Statement for BigCo\n\
         \x20 Hamlet: $650.00 (55 seats)\n\
         \x20 As You Like It: $580.00 (35 seats)\n\
         \x20 Othello: $500.00 (40 seats)\n\
         Amount owed is $1,730.00\n\
         You earned 47 credits\n"
    }
}
