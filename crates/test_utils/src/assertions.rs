//! Custom Test Assertions
//!
//! Assertion helpers for statement data that give more useful failure
//! messages than a bare `assert_eq!` on the whole structure.

use core_kernel::Money;
use domain_theater::StatementData;

/// Asserts that the footer totals equal the sum of the statement lines
///
/// # Panics
///
/// Panics if either total differs from the sum of its lines
pub fn assert_totals_match_lines(data: &StatementData) {
    let amounts: Vec<Money> = data.lines.iter().map(|line| line.amount).collect();
    let line_sum = Money::checked_sum(data.total_amount.currency(), &amounts)
        .unwrap_or_else(|err| panic!("Statement lines do not sum: {err}"));
    assert_eq!(
        data.total_amount, line_sum,
        "Total amount {} does not equal sum of lines {}",
        data.total_amount, line_sum
    );

    let credit_sum: u64 = data.lines.iter().map(|line| line.credits).sum();
    assert_eq!(
        data.total_credits, credit_sum,
        "Total credits {} does not equal sum of lines {}",
        data.total_credits, credit_sum
    );
}

/// Asserts an amount in minor units
pub fn assert_minor_units(actual: &Money, expected_minor: i64) {
    assert_eq!(
        actual.minor_units(),
        expected_minor,
        "Expected {} minor units, got {} ({})",
        expected_minor,
        actual.minor_units(),
        actual
    );
}
