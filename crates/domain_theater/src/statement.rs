//! Statement aggregation
//!
//! [`StatementCalculator`] resolves each performance against the catalog,
//! classifies its play once, and prices and credits it from that single
//! classification. Every per-performance and total figure goes through the
//! same path, so the lines and the totals cannot disagree.

use core_kernel::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::credits::CreditPolicy;
use crate::error::StatementError;
use crate::invoice::{Invoice, Performance};
use crate::play::{Genre, Play};
use crate::pricing::PricingPolicy;

/// Pricing and credit rules applied together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub pricing: PricingPolicy,
    pub credits: CreditPolicy,
}

impl Tariff {
    pub fn standard() -> Self {
        Self::default()
    }
}

/// One priced performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_name: String,
    pub genre: Genre,
    pub audience: u32,
    pub amount: Money,
    pub credits: u64,
}

/// Everything a statement shows, before formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount: Money,
    pub total_credits: u64,
}

/// Prices invoices against a catalog
#[derive(Debug, Clone, Copy)]
pub struct StatementCalculator<'a> {
    catalog: &'a Catalog,
    tariff: Tariff,
}

impl<'a> StatementCalculator<'a> {
    /// Creates a calculator using the standard tariff
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_tariff(catalog, Tariff::standard())
    }

    pub fn with_tariff(catalog: &'a Catalog, tariff: Tariff) -> Self {
        Self { catalog, tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Returns the play a performance refers to
    pub fn play_for(&self, performance: &Performance) -> Result<&'a Play, StatementError> {
        self.catalog.resolve(&performance.play_id)
    }

    /// Amount charged for a single performance
    pub fn amount_for(&self, performance: &Performance) -> Result<Money, StatementError> {
        Ok(self.line_for(performance)?.amount)
    }

    /// Volume credits earned by a single performance
    pub fn credits_for(&self, performance: &Performance) -> Result<u64, StatementError> {
        Ok(self.line_for(performance)?.credits)
    }

    /// Prices and credits a single performance
    ///
    /// # Errors
    ///
    /// - `StatementError::UnresolvedPlay` if the play id is not in the catalog
    /// - `StatementError::UnrecognizedGenre` if the play's type is unknown
    pub fn line_for(&self, performance: &Performance) -> Result<StatementLine, StatementError> {
        let play = self.play_for(performance)?;
        let genre = play.genre()?;
        let amount = self.tariff.pricing.price(genre, performance.audience)?;
        let credits = self.tariff.credits.credits(genre, performance.audience);

        debug!(
            play = %play.name(),
            %genre,
            audience = performance.audience,
            amount_minor = amount.minor_units(),
            credits,
            "Priced performance"
        );

        Ok(StatementLine {
            play_name: play.name().to_string(),
            genre,
            audience: performance.audience,
            amount,
            credits,
        })
    }

    /// Builds the statement data for an invoice in one pass
    ///
    /// Stops at the first performance that fails to resolve or classify;
    /// no statement data is returned in that case.
    pub fn aggregate(&self, invoice: &Invoice) -> Result<StatementData, StatementError> {
        let currency = self.tariff.pricing.currency;
        let mut lines = Vec::with_capacity(invoice.performances.len());
        let mut total_amount = Money::zero(currency);
        let mut total_credits: u64 = 0;

        for performance in &invoice.performances {
            let line = self.line_for(performance).inspect_err(|err| {
                warn!(customer = %invoice.customer, play_id = %performance.play_id, error = %err, "Statement aborted");
            })?;
            total_amount = total_amount.checked_add(&line.amount)?;
            total_credits = total_credits.saturating_add(line.credits);
            lines.push(line);
        }

        debug!(
            customer = %invoice.customer,
            lines = lines.len(),
            total_minor = total_amount.minor_units(),
            total_credits,
            "Aggregated statement"
        );

        Ok(StatementData {
            customer: invoice.customer.clone(),
            lines,
            total_amount,
            total_credits,
        })
    }

    /// Total amount owed for an invoice
    pub fn total_amount(&self, invoice: &Invoice) -> Result<Money, StatementError> {
        Ok(self.aggregate(invoice)?.total_amount)
    }

    /// Total volume credits earned by an invoice
    pub fn total_credits(&self, invoice: &Invoice) -> Result<u64, StatementError> {
        Ok(self.aggregate(invoice)?.total_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_play("hamlet", Play::new("Hamlet", Genre::Tragedy))
            .with_play("as-like", Play::new("As You Like It", Genre::Comedy))
            .with_play("henry-v", Play::with_type("Henry V", "history"))
    }

    #[test]
    fn test_bigco_scenario() {
        let catalog = catalog();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
        );

        let data = StatementCalculator::new(&catalog).aggregate(&invoice).unwrap();

        assert_eq!(data.customer, "BigCo");
        assert_eq!(data.lines[0].amount.minor_units(), 65_000);
        assert_eq!(data.lines[1].amount.minor_units(), 58_000);
        assert_eq!(data.total_amount.minor_units(), 123_000);
        assert_eq!(data.total_credits, 37);
    }

    #[test]
    fn test_empty_invoice_totals_zero() {
        let catalog = catalog();
        let data = StatementCalculator::new(&catalog)
            .aggregate(&Invoice::new("Nobody", vec![]))
            .unwrap();

        assert!(data.lines.is_empty());
        assert!(data.total_amount.is_zero());
        assert_eq!(data.total_credits, 0);
    }

    #[test]
    fn test_per_performance_accessors_agree_with_lines() {
        let catalog = catalog();
        let calculator = StatementCalculator::new(&catalog);
        let performance = Performance::new("as-like", 35);

        assert_eq!(calculator.play_for(&performance).unwrap().name(), "As You Like It");
        assert_eq!(calculator.amount_for(&performance).unwrap().minor_units(), 58_000);
        assert_eq!(calculator.credits_for(&performance).unwrap(), 12);
    }

    #[test]
    fn test_missing_play_aborts() {
        let catalog = catalog();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("lear", 10)],
        );

        assert_eq!(
            StatementCalculator::new(&catalog).aggregate(&invoice),
            Err(StatementError::unresolved_play("lear"))
        );
    }

    #[test]
    fn test_unknown_genre_aborts() {
        let catalog = catalog();
        let invoice = Invoice::new("BigCo", vec![Performance::new("henry-v", 10)]);

        assert_eq!(
            StatementCalculator::new(&catalog).total_amount(&invoice),
            Err(StatementError::unrecognized_genre("history", "Henry V"))
        );
    }
}
