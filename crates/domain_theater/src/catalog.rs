//! Play catalog
//!
//! Read-only mapping from play id to [`Play`]. Statements only ever look
//! plays up; nothing in a statement computation mutates the catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::StatementError;
use crate::play::{Play, PlayId};

/// Plays keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play, replacing any earlier entry with the same id
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.plays.insert(id.into(), play);
        self
    }

    /// Returns the play for `id`, if present
    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Returns the play for `id`
    ///
    /// # Errors
    ///
    /// `StatementError::UnresolvedPlay` naming the id when it is missing.
    pub fn resolve(&self, id: &PlayId) -> Result<&Play, StatementError> {
        self.get(id).ok_or_else(|| StatementError::unresolved_play(id))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Genre;

    #[test]
    fn test_resolve_known_and_missing() {
        let catalog = Catalog::new().with_play("hamlet", Play::new("Hamlet", Genre::Tragedy));

        assert_eq!(catalog.resolve(&"hamlet".into()).unwrap().name(), "Hamlet");
        assert_eq!(
            catalog.resolve(&"lear".into()),
            Err(StatementError::unresolved_play("lear"))
        );
    }

    #[test]
    fn test_catalog_deserializes_from_object() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"hamlet":{"name":"Hamlet","type":"tragedy"},"as-like":{"name":"As You Like It","type":"comedy"}}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&"as-like".into()).map(Play::name), Some("As You Like It"));
    }

    #[test]
    fn test_catalog_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
