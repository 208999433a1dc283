//! Performance pricing
//!
//! Each genre carries its own tariff as data. All amounts are in minor units
//! of the policy currency and every step is integer arithmetic.
//!
//! # Tariffs
//!
//! ```text
//! tragedy: base + (audience > threshold ? (audience - threshold) * over_rate : 0)
//! comedy:  base + (audience > threshold ? surcharge + (audience - threshold) * over_rate : 0)
//!               + per_seat * audience
//! ```

use core_kernel::{CoreError, Currency, Money, MoneyError};
use serde::{Deserialize, Serialize};

use crate::error::StatementError;
use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Base charge for a tragedy, in cents
pub const TRAGEDY_BASE_AMOUNT: i64 = 40_000;
/// Seats included in the tragedy base charge
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
/// Charge per seat above the tragedy threshold, in cents
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 1_000;

/// Base charge for a comedy, in cents
pub const COMEDY_BASE_AMOUNT: i64 = 30_000;
/// Seats included in the comedy base charge
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
/// One-off surcharge once a comedy exceeds its threshold, in cents
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: i64 = 10_000;
/// Charge per seat above the comedy threshold, in cents
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 500;
/// Charge for every comedy seat, in cents
pub const COMEDY_AMOUNT_PER_AUDIENCE: i64 = 300;

/// Tragedy tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TragedyTariff {
    pub base: i64,
    pub audience_threshold: u32,
    pub over_threshold_per_seat: i64,
}

/// Comedy tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComedyTariff {
    pub base: i64,
    pub audience_threshold: u32,
    pub over_threshold_surcharge: i64,
    pub over_threshold_per_seat: i64,
    /// Applies to every seat, independent of the threshold
    pub per_seat: i64,
}

/// The pricing table for all genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub currency: Currency,
    pub tragedy: TragedyTariff,
    pub comedy: ComedyTariff,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl PricingPolicy {
    /// The house tariff, in USD cents
    pub fn standard() -> Self {
        Self {
            currency: Currency::USD,
            tragedy: TragedyTariff {
                base: TRAGEDY_BASE_AMOUNT,
                audience_threshold: TRAGEDY_AUDIENCE_THRESHOLD,
                over_threshold_per_seat: TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON,
            },
            comedy: ComedyTariff {
                base: COMEDY_BASE_AMOUNT,
                audience_threshold: COMEDY_AUDIENCE_THRESHOLD,
                over_threshold_surcharge: COMEDY_OVER_BASE_CAPACITY_AMOUNT,
                over_threshold_per_seat: COMEDY_OVER_BASE_CAPACITY_PER_PERSON,
                per_seat: COMEDY_AMOUNT_PER_AUDIENCE,
            },
        }
    }

    /// Same tariff figures, billed in another currency's cents
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` for a currency without two decimal places,
    /// since the tariff figures are hundredths of the major unit.
    pub fn try_in_currency(mut self, currency: Currency) -> Result<Self, CoreError> {
        if currency.decimal_places() != 2 {
            return Err(CoreError::validation(format!(
                "tariff is quoted in cents; {currency} has {} decimal places",
                currency.decimal_places()
            )));
        }
        self.currency = currency;
        Ok(self)
    }

    /// Prices `audience` seats of a performance of the given genre
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` if the tariff figures overflow `i64`.
    pub fn price(&self, genre: Genre, audience: u32) -> Result<Money, MoneyError> {
        match genre {
            Genre::Tragedy => self.tragedy.price(self.currency, audience),
            Genre::Comedy => self.comedy.price(self.currency, audience),
        }
    }

    /// Amount charged for one performance of `play`
    ///
    /// # Errors
    ///
    /// `StatementError::UnrecognizedGenre` for a play of unknown type, or
    /// `StatementError::Money` on overflow.
    pub fn amount_for(&self, play: &Play, performance: &Performance) -> Result<Money, StatementError> {
        Ok(self.price(play.genre()?, performance.audience)?)
    }
}

impl TragedyTariff {
    fn price(&self, currency: Currency, audience: u32) -> Result<Money, MoneyError> {
        let base = Money::from_minor(self.base, currency);
        if audience <= self.audience_threshold {
            return Ok(base);
        }

        let extra_seats = i64::from(audience - self.audience_threshold);
        let over = Money::from_minor(self.over_threshold_per_seat, currency).checked_times(extra_seats)?;
        base.checked_add(&over)
    }
}

impl ComedyTariff {
    fn price(&self, currency: Currency, audience: u32) -> Result<Money, MoneyError> {
        let mut amount = Money::from_minor(self.base, currency);

        if audience > self.audience_threshold {
            let extra_seats = i64::from(audience - self.audience_threshold);
            let over = Money::from_minor(self.over_threshold_per_seat, currency).checked_times(extra_seats)?;
            amount = amount
                .checked_add(&Money::from_minor(self.over_threshold_surcharge, currency))?
                .checked_add(&over)?;
        }

        let seats = Money::from_minor(self.per_seat, currency).checked_times(i64::from(audience))?;
        amount.checked_add(&seats)
    }
}
