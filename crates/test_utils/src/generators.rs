//! Property-Based Test Generators
//!
//! Provides proptest strategies for genres, performances and invoices that
//! always resolve against [`CatalogFixtures::sample`](crate::CatalogFixtures::sample).

use domain_theater::{Genre, Invoice, Performance};
use proptest::prelude::*;

/// Play ids present in the sample catalog
pub const SAMPLE_PLAY_IDS: [&str; 3] = ["hamlet", "as-like", "othello"];

/// Strategy for generating genres
pub fn genre_strategy() -> impl Strategy<Value = Genre> {
    prop_oneof![Just(Genre::Tragedy), Just(Genre::Comedy)]
}

/// Strategy for audience sizes, covering both sides of every threshold
pub fn audience_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

/// Strategy for performances of plays in the sample catalog
pub fn sample_performance_strategy() -> impl Strategy<Value = Performance> {
    (prop::sample::select(SAMPLE_PLAY_IDS.to_vec()), audience_strategy())
        .prop_map(|(id, audience)| Performance::new(id, audience))
}

/// Strategy for invoices against the sample catalog
pub fn sample_invoice_strategy() -> impl Strategy<Value = Invoice> {
    ("[A-Z][a-z]{2,12}", prop::collection::vec(sample_performance_strategy(), 0..12))
        .prop_map(|(customer, performances)| Invoice::new(customer, performances))
}
