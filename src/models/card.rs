// ABOUTME: Card data model representing a single front/back study unit
// plus the built-in starter deck used when nothing has been saved yet

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    /// Create a card with a freshly generated id that does not collide with `existing`.
    pub fn with_unique_id(front: String, back: String, existing: &[Card]) -> Self {
        let mut id = generate_id();
        while existing.iter().any(|c| c.id == id) {
            id = generate_id();
        }
        Self { id, front, back }
    }

    /// Back text shortened for list previews.
    pub fn back_preview(&self, max_chars: usize) -> String {
        if self.back.chars().count() > max_chars {
            let head: String = self.back.chars().take(max_chars).collect();
            format!("{}…", head)
        } else {
            self.back.clone()
        }
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// The three cards shown on first launch.
pub fn default_deck() -> Vec<Card> {
    vec![
        Card::new("c1", "What is 2 + 2?", "4"),
        Card::new("c2", "Capital of France?", "Paris"),
        Card::new("c3", "Derivative of x^2?", "2x"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_contents() {
        let deck = default_deck();
        let fronts: Vec<&str> = deck.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(
            fronts,
            vec!["What is 2 + 2?", "Capital of France?", "Derivative of x^2?"]
        );
        assert_eq!(deck[0].id, "c1");
        assert_eq!(deck[2].back, "2x");
    }

    #[test]
    fn test_unique_id_avoids_existing() {
        let deck = default_deck();
        let card = Card::with_unique_id("Q".into(), "A".into(), &deck);
        assert!(deck.iter().all(|c| c.id != card.id));
        assert!(!card.id.is_empty());
    }

    #[test]
    fn test_back_preview_truncates_long_text() {
        let card = Card::new("x", "front", "a".repeat(50));
        let preview = card.back_preview(40);
        assert_eq!(preview.chars().count(), 41);
        assert!(preview.ends_with('…'));

        let short = Card::new("y", "front", "short");
        assert_eq!(short.back_preview(40), "short");
    }

    #[test]
    fn test_card_json_shape() {
        let card = Card::new("c1", "F", "B");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":"c1","front":"F","back":"B"}"#);
    }
}
