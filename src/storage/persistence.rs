// ABOUTME: Deck persistence on top of a key-value slot
// Saves the whole card collection as one JSON array and restores it on startup

use super::{KeyValueStore, StorageError};
use crate::models::{default_deck, Card};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Fixed key the deck is stored under.
pub const STORAGE_KEY: &str = "smartFlashcards.v1";

/// Decode a saved deck. Anything other than a non-empty JSON array of cards is rejected.
/// Cards repeating an earlier id are dropped.
pub fn decode_deck(raw: &str) -> Option<Vec<Card>> {
    match serde_json::from_str::<Vec<Card>>(raw) {
        Ok(cards) if !cards.is_empty() => Some(dedup_ids(cards)),
        Ok(_) => None,
        Err(e) => {
            warn!("Ignoring malformed saved deck: {}", e);
            None
        }
    }
}

fn dedup_ids(cards: Vec<Card>) -> Vec<Card> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| {
            let first = seen.insert(card.id.clone());
            if !first {
                warn!("Dropping saved card with duplicate id {}", card.id);
            }
            first
        })
        .collect()
}

/// Load the saved deck, falling back to the built-in default deck.
pub fn load_deck(store: &dyn KeyValueStore) -> Vec<Card> {
    let saved = match store.get(STORAGE_KEY) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Failed to read saved deck: {}", e);
            None
        }
    };

    if let Some(cards) = saved.as_deref().and_then(decode_deck) {
        info!("Loaded {} saved cards", cards.len());
        return cards;
    }

    info!("No usable saved deck, starting from the default deck");
    default_deck()
}

/// Overwrite the saved deck with `cards`.
pub fn save_deck(store: &mut dyn KeyValueStore, cards: &[Card]) -> Result<(), StorageError> {
    let json = serde_json::to_string(cards)?;
    store.set(STORAGE_KEY, &json)?;
    debug!("Saved {} cards", cards.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_value_falls_back_to_default() {
        let store = MemoryStore::new();
        assert_eq!(load_deck(&store), default_deck());
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        for raw in ["not json", "{\"id\":\"c1\"}", "[]", "[{\"id\":1}]", "null"] {
            let mut store = MemoryStore::new();
            store.set(STORAGE_KEY, raw).unwrap();
            assert_eq!(load_deck(&store), default_deck(), "input: {}", raw);
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let cards = vec![Card::new("c1", "F", "B")];
        save_deck(&mut store, &cards).unwrap();

        assert_eq!(
            store.get(STORAGE_KEY).unwrap().as_deref(),
            Some(r#"[{"id":"c1","front":"F","back":"B"}]"#)
        );
        assert_eq!(load_deck(&store), cards);
    }

    #[test]
    fn test_duplicate_ids_keep_first_card() {
        let mut store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"[{"id":"x","front":"A","back":"1"},{"id":"y","front":"B","back":"2"},{"id":"x","front":"C","back":"3"}]"#,
            )
            .unwrap();

        assert_eq!(
            load_deck(&store),
            vec![Card::new("x", "A", "1"), Card::new("y", "B", "2")]
        );
    }

    #[test]
    fn test_read_error_falls_back_to_default() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| {
            Err(StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        });

        assert_eq!(load_deck(&store), default_deck());
    }

    #[test]
    fn test_save_writes_under_fixed_key() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .withf(|key, value| key == STORAGE_KEY && value.starts_with('['))
            .times(1)
            .returning(|_, _| Ok(()));

        save_deck(&mut store, &default_deck()).unwrap();
    }
}
