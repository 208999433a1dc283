//! Test Data Builders
//!
//! Builder patterns for constructing invoices and catalogs with sensible
//! defaults, so tests only spell out the fields they care about.

use domain_theater::{Catalog, Genre, Invoice, Performance, Play, PlayId};
use fake::faker::company::en::CompanyName;
use fake::Fake;

/// Builder for test invoices
pub struct TestInvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder with a generated company name and no performances
    pub fn new() -> Self {
        Self {
            customer: CompanyName().fake(),
            performances: Vec::new(),
        }
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Appends a performance
    pub fn with_performance(mut self, play_id: impl Into<PlayId>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        Invoice::new(self.customer, self.performances)
    }
}

/// Builder for test catalogs
#[derive(Default)]
pub struct TestCatalogBuilder {
    catalog: Catalog,
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tragedy named after its id
    pub fn tragedy(self, id: &str) -> Self {
        self.play(id, Play::new(id, Genre::Tragedy))
    }

    /// Adds a comedy named after its id
    pub fn comedy(self, id: &str) -> Self {
        self.play(id, Play::new(id, Genre::Comedy))
    }

    /// Adds an arbitrary play
    pub fn play(mut self, id: &str, play: Play) -> Self {
        self.catalog = self.catalog.with_play(id, play);
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_builder_defaults_to_generated_customer() {
        let invoice = TestInvoiceBuilder::new().build();
        assert!(!invoice.customer.is_empty());
        assert!(invoice.performances.is_empty());
    }

    #[test]
    fn test_catalog_builder_names_plays_after_ids() {
        let catalog = TestCatalogBuilder::new().tragedy("lear").comedy("twelfth-night").build();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&"lear".into()).map(Play::name), Some("lear"));
    }
}
