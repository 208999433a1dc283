//! Volume credits
//!
//! Every seat above the threshold earns one credit; comedies add a bonus of
//! one credit per `comedy_extra_credit_divisor` seats.

use serde::{Deserialize, Serialize};

use crate::error::StatementError;
use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Seats per performance that earn no base credit
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
/// Comedy attendees per bonus credit
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

/// Credit rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditPolicy {
    pub volume_credit_threshold: u32,
    /// A divisor of zero disables the comedy bonus
    pub comedy_extra_credit_divisor: u32,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl CreditPolicy {
    pub fn standard() -> Self {
        Self {
            volume_credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
            comedy_extra_credit_divisor: COMEDY_EXTRA_VOLUME_FACTOR,
        }
    }

    /// Credits earned by `audience` seats of the given genre
    pub fn credits(&self, genre: Genre, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(self.volume_credit_threshold));
        let bonus = match genre {
            Genre::Comedy => audience
                .checked_div(self.comedy_extra_credit_divisor)
                .map(u64::from)
                .unwrap_or(0),
            Genre::Tragedy => 0,
        };
        base + bonus
    }

    /// Credits earned by one performance of `play`
    ///
    /// # Errors
    ///
    /// `StatementError::UnrecognizedGenre` for a play of unknown type.
    pub fn credits_for(&self, play: &Play, performance: &Performance) -> Result<u64, StatementError> {
        Ok(self.credits(play.genre()?, performance.audience))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credits_at_or_below_threshold_for_tragedy() {
        let policy = CreditPolicy::standard();
        assert_eq!(policy.credits(Genre::Tragedy, 0), 0);
        assert_eq!(policy.credits(Genre::Tragedy, 30), 0);
        assert_eq!(policy.credits(Genre::Tragedy, 55), 25);
    }

    #[test]
    fn test_comedy_bonus_is_floored() {
        let policy = CreditPolicy::standard();
        assert_eq!(policy.credits(Genre::Comedy, 4), 0);
        assert_eq!(policy.credits(Genre::Comedy, 9), 1);
        assert_eq!(policy.credits(Genre::Comedy, 35), 5 + 7);
    }

    #[test]
    fn test_zero_divisor_disables_bonus() {
        let policy = CreditPolicy {
            volume_credit_threshold: 30,
            comedy_extra_credit_divisor: 0,
        };
        assert_eq!(policy.credits(Genre::Comedy, 35), 5);
    }

    #[test]
    fn test_credits_for_rejects_unknown_type() {
        let play = Play::with_type("Pericles", "romance");
        let err = CreditPolicy::standard()
            .credits_for(&play, &Performance::new("pericles", 40))
            .unwrap_err();
        assert_eq!(err, StatementError::unrecognized_genre("romance", "Pericles"));
    }
}
