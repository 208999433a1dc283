//! Statement domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that abort a statement computation
///
/// None of these are recovered from: the invoice as a whole produces no
/// statement once one is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play id that is not in the catalog
    #[error("Unknown play id: {play_id}")]
    UnresolvedPlay {
        play_id: String,
    },

    /// A play's type is neither tragedy nor comedy
    #[error("unknown type: {genre} (play: {play_name})")]
    UnrecognizedGenre {
        genre: String,
        play_name: String,
    },

    /// Amount arithmetic failed
    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}

impl StatementError {
    /// Creates an unresolved play reference error
    pub fn unresolved_play(play_id: impl std::fmt::Display) -> Self {
        StatementError::UnresolvedPlay {
            play_id: play_id.to_string(),
        }
    }

    /// Creates an unrecognized genre error
    pub fn unrecognized_genre(genre: impl Into<String>, play_name: impl Into<String>) -> Self {
        StatementError::UnrecognizedGenre {
            genre: genre.into(),
            play_name: play_name.into(),
        }
    }
}
