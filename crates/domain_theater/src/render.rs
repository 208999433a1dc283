//! Plain-text statement rendering
//!
//! ```text
//! Statement for BigCo
//!   Hamlet: $650.00 (55 seats)
//!   As You Like It: $580.00 (35 seats)
//! Amount owed is $1,230.00
//! You earned 37 credits
//! ```

use core_kernel::{CurrencyFormatter, LocaleFormatter, Money};

use crate::catalog::Catalog;
use crate::error::StatementError;
use crate::invoice::Invoice;
use crate::statement::{StatementCalculator, StatementData};

/// Renders statements with an injected currency formatter
pub struct StatementRenderer {
    formatter: Box<dyn CurrencyFormatter>,
}

impl Default for StatementRenderer {
    fn default() -> Self {
        Self::new(LocaleFormatter::us())
    }
}

impl StatementRenderer {
    pub fn new(formatter: impl CurrencyFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    /// Formats an amount the way statement lines show it
    pub fn format_amount(&self, amount: &Money) -> String {
        self.formatter.format(amount)
    }

    /// Renders already aggregated statement data
    pub fn render_data(&self, data: &StatementData) -> String {
        let mut result = format!("Statement for {}\n", data.customer);

        for line in &data.lines {
            result.push_str(&format!(
                "  {}: {} ({} seats)\n",
                line.play_name,
                self.format_amount(&line.amount),
                line.audience
            ));
        }

        result.push_str(&format!("Amount owed is {}\n", self.format_amount(&data.total_amount)));
        result.push_str(&format!("You earned {} credits\n", data.total_credits));
        result
    }

    /// Aggregates and renders an invoice
    ///
    /// # Errors
    ///
    /// Any [`StatementError`] from aggregation; no text is produced.
    pub fn render(&self, invoice: &Invoice, calculator: &StatementCalculator<'_>) -> Result<String, StatementError> {
        let data = calculator.aggregate(invoice)?;
        Ok(self.render_data(&data))
    }
}

/// Renders a statement with the standard tariff and US formatting
pub fn render(invoice: &Invoice, catalog: &Catalog) -> Result<String, StatementError> {
    StatementRenderer::default().render(invoice, &StatementCalculator::new(catalog))
}
