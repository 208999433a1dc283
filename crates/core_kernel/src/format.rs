//! Currency formatting
//!
//! Rendering a statement needs money as text. The renderer receives a
//! [`CurrencyFormatter`] rather than a fixed locale, so calculations can be
//! tested on minor units and formatting can be tested on its own.

use crate::money::Money;

/// Capability that turns an amount into display text
pub trait CurrencyFormatter: Send + Sync {
    /// Formats the amount, including the currency symbol
    fn format(&self, money: &Money) -> String;
}

/// Formats amounts as `<sign><symbol><grouped whole>.<fraction>`
///
/// The fraction always has the currency's number of decimal places, so
/// `Money::from_minor(123456, Currency::USD)` becomes `$1,234.56` with the
/// US separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormatter {
    grouping_separator: char,
    decimal_separator: char,
}

impl LocaleFormatter {
    /// Creates a formatter with explicit separators
    pub fn new(grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            grouping_separator,
            decimal_separator,
        }
    }

    /// US conventions: `,` between thousands and `.` before cents
    pub fn us() -> Self {
        Self::new(',', '.')
    }

    fn group_thousands(&self, whole: u64) -> String {
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::us()
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, money: &Money) -> String {
        let currency = money.currency();
        let dp = currency.decimal_places() as usize;
        let per_major = currency.minor_per_major().unsigned_abs();
        let minor = money.minor_units().unsigned_abs();

        let sign = if money.is_negative() { "-" } else { "" };
        let whole = self.group_thousands(minor / per_major);

        if dp == 0 {
            format!("{sign}{}{whole}", currency.symbol())
        } else {
            format!(
                "{sign}{}{whole}{}{:0dp$}",
                currency.symbol(),
                self.decimal_separator,
                minor % per_major,
                dp = dp
            )
        }
    }
}
