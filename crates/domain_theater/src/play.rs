//! Plays and their genres

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StatementError;

/// Catalog key for a play (e.g. `"hamlet"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The two genres the tariff knows how to price
///
/// The set is closed. Adding a genre means adding a variant here and a
/// tariff arm in pricing and credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Parses a genre name; only the exact lowercase names are recognized
    pub fn parse(raw: &str) -> Option<Genre> {
        match raw {
            "tragedy" => Some(Genre::Tragedy),
            "comedy" => Some(Genre::Comedy),
            _ => None,
        }
    }

    /// Lowercase name as it appears in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A play as described in the catalog
///
/// The type is kept exactly as loaded so that an unrecognized value can be
/// reported verbatim when the play is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    name: String,
    #[serde(rename = "type")]
    play_type: String,
}

impl Play {
    /// Creates a play of a known genre
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self::with_type(name, genre.as_str())
    }

    /// Creates a play from a raw type string, as a loader would
    pub fn with_type(name: impl Into<String>, play_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type string as loaded
    pub fn play_type(&self) -> &str {
        &self.play_type
    }

    /// Classifies the play
    ///
    /// This is the single point where the type string becomes a [`Genre`];
    /// pricing and credits both go through it.
    ///
    /// # Errors
    ///
    /// `StatementError::UnrecognizedGenre` when the type is neither
    /// tragedy nor comedy.
    pub fn genre(&self) -> Result<Genre, StatementError> {
        Genre::parse(&self.play_type)
            .ok_or_else(|| StatementError::unrecognized_genre(&self.play_type, &self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parse_is_exact() {
        assert_eq!(Genre::parse("tragedy"), Some(Genre::Tragedy));
        assert_eq!(Genre::parse("comedy"), Some(Genre::Comedy));
        assert_eq!(Genre::parse("Comedy"), None);
        assert_eq!(Genre::parse("TRAGEDY"), None);
        assert_eq!(Genre::parse(" tragedy"), None);
        assert_eq!(Genre::parse("history"), None);
        assert_eq!(Genre::parse(""), None);
    }

    #[test]
    fn test_play_genre_classification() {
        assert_eq!(Play::new("Hamlet", Genre::Tragedy).genre(), Ok(Genre::Tragedy));
        assert_eq!(Play::with_type("As You Like It", "comedy").genre(), Ok(Genre::Comedy));
        assert_eq!(
            Play::with_type("As You Like It", "COMEDY").genre(),
            Err(StatementError::unrecognized_genre("COMEDY", "As You Like It"))
        );
    }

    #[test]
    fn test_unknown_type_names_type_and_play() {
        let play = Play::with_type("Henry V", "history");
        let err = play.genre().unwrap_err();

        assert_eq!(err, StatementError::unrecognized_genre("history", "Henry V"));
        assert!(err.to_string().contains("unknown type: history"));
    }

    #[test]
    fn test_play_deserializes_type_field() {
        let play: Play = serde_json::from_str(r#"{"name":"Othello","type":"tragedy"}"#).unwrap();
        assert_eq!(play.name(), "Othello");
        assert_eq!(play.play_type(), "tragedy");
    }
}
