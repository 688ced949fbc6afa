// ABOUTME: Study session controller owning the deck, the selection, the reveal flag
// and the add-card form, and writing the deck back to storage after every change

use crate::models::Card;
use crate::storage::{load_deck, save_deck, KeyValueStore};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Front,
    Back,
}

/// Pending values of the add-card form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub front: String,
    pub back: String,
    pub focus: Option<FormField>,
}

impl CardForm {
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus? {
            FormField::Front => Some(&mut self.front),
            FormField::Back => Some(&mut self.back),
        }
    }

    fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }
}

pub struct StudySession {
    cards: Vec<Card>,
    selected_id: Option<String>,
    revealed: bool,
    sidebar_open: bool,
    form: CardForm,
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for StudySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudySession")
            .field("cards", &self.cards)
            .field("selected_id", &self.selected_id)
            .field("revealed", &self.revealed)
            .field("sidebar_open", &self.sidebar_open)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

impl StudySession {
    /// Load the deck from `store` (or the default deck) and select the first card.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let cards = load_deck(store.as_ref());
        let selected_id = cards.first().map(|c| c.id.clone());
        info!("Study session started with {} cards", cards.len());

        Self {
            cards,
            selected_id,
            revealed: false,
            sidebar_open: true,
            form: CardForm::default(),
            store,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Index of the selected card; 0 when nothing valid is selected.
    pub fn selected_index(&self) -> usize {
        self.selected_id
            .as_deref()
            .and_then(|id| self.cards.iter().position(|c| c.id == id))
            .unwrap_or(0)
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.selected_index())
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// `"3/10"`, or `"0/0"` for an empty deck.
    pub fn position_label(&self) -> String {
        if self.cards.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.selected_index() + 1, self.cards.len())
        }
    }

    pub fn can_prev(&self) -> bool {
        !self.cards.is_empty() && self.selected_index() > 0
    }

    pub fn can_next(&self) -> bool {
        !self.cards.is_empty() && self.selected_index() + 1 < self.cards.len()
    }

    pub fn can_reveal(&self) -> bool {
        self.current().is_some()
    }

    pub fn select_by_index(&mut self, index: isize) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        let clamped = usize::try_from(index.max(0)).unwrap_or(0).min(last);
        self.selected_id = Some(self.cards[clamped].id.clone());
        self.revealed = false;
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.select_by_index(self.signed_index() - 1);
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.select_by_index(self.signed_index() + 1);
        }
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.selected_index()).unwrap_or(isize::MAX)
    }

    pub fn toggle_reveal(&mut self) {
        if self.can_reveal() {
            self.revealed = !self.revealed;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        // The form lives in the sidebar
        if !self.sidebar_open {
            self.form.focus = None;
        }
    }

    /// Prepend a new card built from the trimmed inputs. Returns `None` when either side is blank.
    pub fn add_card(&mut self, front: &str, back: &str) -> Option<&Card> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            debug!("Rejected card with empty front or back");
            return None;
        }

        let card = Card::with_unique_id(front.to_string(), back.to_string(), &self.cards);
        debug!("Adding card {}", card.id);
        self.selected_id = Some(card.id.clone());
        self.cards.insert(0, card);
        self.revealed = false;
        self.form.clear();
        self.form.focus = Some(FormField::Front);
        self.commit();

        self.cards.first()
    }

    /// Submit the add-card form with its pending values.
    pub fn submit_form(&mut self) -> bool {
        let front = self.form.front.clone();
        let back = self.form.back.clone();
        self.add_card(&front, &back).is_some()
    }

    pub fn delete_card(&mut self, id: &str) {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return;
        }
        debug!("Deleted card {}", id);
        self.commit();
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.current().map(|c| c.id.clone()) {
            self.delete_card(&id);
        }
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.form.focus = Some(field);
    }

    pub fn blur_form(&mut self) {
        self.form.focus = None;
    }

    pub fn cycle_focus(&mut self) {
        self.form.focus = match self.form.focus {
            Some(FormField::Front) => Some(FormField::Back),
            Some(FormField::Back) => Some(FormField::Front),
            None => None,
        };
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(text) = self.form.focused_text() {
            text.push(ch);
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        if let Some(text) = self.form.focused_text() {
            text.extend(s.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.form.focused_text() {
            text.pop();
        }
    }

    /// Runs after every collection change: repair the selection, then persist.
    fn commit(&mut self) {
        self.repair_selection();
        if let Err(e) = save_deck(self.store.as_mut(), &self.cards) {
            warn!("Failed to save deck: {}", e);
        }
    }

    fn repair_selection(&mut self) {
        let valid = self
            .selected_id
            .as_deref()
            .is_some_and(|id| self.cards.iter().any(|c| c.id == id));
        if !valid {
            self.selected_id = self.cards.first().map(|c| c.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_deck;
    use crate::storage::{MemoryStore, MockKeyValueStore, StorageError, STORAGE_KEY};
    use pretty_assertions::assert_eq;

    fn default_session() -> StudySession {
        StudySession::load(Box::new(MemoryStore::new()))
    }

    fn session_with(cards: &[Card]) -> StudySession {
        let mut store = MemoryStore::new();
        store
            .set(STORAGE_KEY, &serde_json::to_string(cards).unwrap())
            .unwrap();
        StudySession::load(Box::new(store))
    }

    fn saved_cards(session: &StudySession) -> Vec<Card> {
        let raw = session.store().get(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_default_load() {
        let session = default_session();
        assert_eq!(session.cards(), default_deck().as_slice());
        assert_eq!(session.selected_id(), Some("c1"));
        assert!(!session.is_revealed());
        assert!(session.is_sidebar_open());
        assert_eq!(session.form(), &CardForm::default());
    }

    #[test]
    fn test_select_by_index_clamps() {
        let mut session = default_session();
        for (input, expected) in [(-5, "c1"), (0, "c1"), (1, "c2"), (2, "c3"), (3, "c3"), (isize::MAX, "c3"), (isize::MIN, "c1")] {
            session.select_by_index(input);
            assert_eq!(session.selected_id(), Some(expected), "index {}", input);
        }
    }

    #[test]
    fn test_select_resets_reveal() {
        let mut session = default_session();
        session.toggle_reveal();
        assert!(session.is_revealed());
        session.select_by_index(2);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_next_at_last_card_is_noop() {
        let mut session = default_session();
        session.select_by_index(2);
        assert!(!session.can_next());
        session.next();
        assert_eq!(session.selected_id(), Some("c3"));
        assert_eq!(session.position_label(), "3/3");
    }

    #[test]
    fn test_prev_at_first_card_is_noop() {
        let mut session = default_session();
        assert!(!session.can_prev());
        assert!(session.can_next());
        session.toggle_reveal();
        session.prev();
        assert_eq!(session.selected_id(), Some("c1"));
        assert!(session.is_revealed());
    }

    #[test]
    fn test_prev_next_walk() {
        let mut session = default_session();
        session.next();
        session.next();
        assert_eq!(session.selected_id(), Some("c3"));
        session.prev();
        assert_eq!(session.selected_id(), Some("c2"));
    }

    #[test]
    fn test_add_card_rejects_blank_sides() {
        let mut session = default_session();
        for (front, back) in [("", "x"), ("x", ""), ("  ", "  "), ("\t", "ok")] {
            assert!(session.add_card(front, back).is_none());
        }
        assert_eq!(session.cards(), default_deck().as_slice());
        assert_eq!(session.store().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_card_prepends_and_selects() {
        let mut session = default_session();
        session.toggle_reveal();
        let id = session.add_card("  Q ", " A  ").unwrap().id.clone();

        assert_eq!(session.len(), 4);
        assert_eq!(session.cards()[0], Card::new(id.clone(), "Q", "A"));
        assert_eq!(session.selected_id(), Some(id.as_str()));
        assert!(!session.is_revealed());
        assert_eq!(session.form().focus, Some(FormField::Front));
        assert_eq!(saved_cards(&session), session.cards());
    }

    #[test]
    fn test_submit_form_clears_fields() {
        let mut session = default_session();
        session.focus_field(FormField::Front);
        session.insert_str("Question");
        session.cycle_focus();
        session.insert_char('!');
        session.backspace();
        session.insert_str("Ans\nwer");

        assert!(session.submit_form());
        assert_eq!(session.cards()[0].front, "Question");
        assert_eq!(session.cards()[0].back, "Answer");
        assert!(session.form().front.is_empty());
        assert!(session.form().back.is_empty());
    }

    #[test]
    fn test_submit_form_keeps_fields_when_rejected() {
        let mut session = default_session();
        session.focus_field(FormField::Front);
        session.insert_str("Only a front");

        assert!(!session.submit_form());
        assert_eq!(session.form().front, "Only a front");
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_delete_selected_first_card_reselects_next() {
        let mut session = default_session();
        session.delete_card("c1");
        assert_eq!(session.selected_id(), Some("c2"));
        assert_eq!(session.selected_index(), 0);
        assert_eq!(saved_cards(&session).len(), 2);
    }

    #[test]
    fn test_repair_keeps_reveal_flag() {
        let mut session = default_session();
        session.toggle_reveal();
        session.delete_selected();
        assert_eq!(session.selected_id(), Some("c2"));
        assert!(session.is_revealed());
    }

    #[test]
    fn test_delete_unselected_card_keeps_selection() {
        let mut session = default_session();
        session.select_by_index(2);
        session.toggle_reveal();
        session.delete_card("c1");
        assert_eq!(session.selected_id(), Some("c3"));
        assert!(session.is_revealed());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut session = default_session();
        session.delete_card("missing");
        assert_eq!(session.len(), 3);
        assert_eq!(session.store().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_delete_all_clears_selection() {
        let mut session = session_with(&[Card::new("only", "F", "B")]);
        session.delete_selected();
        assert!(session.is_empty());
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.current(), None);
        assert_eq!(session.position_label(), "0/0");
        assert!(!session.can_prev());
        assert!(!session.can_next());

        session.toggle_reveal();
        assert!(!session.is_revealed());
        session.select_by_index(0);
        assert_eq!(session.selected_id(), None);

        // Empty deck is saved as-is; the next load falls back to defaults
        assert_eq!(saved_cards(&session), Vec::<Card>::new());
    }

    #[test]
    fn test_add_after_emptying_deck() {
        let mut session = session_with(&[Card::new("only", "F", "B")]);
        session.delete_selected();
        let id = session.add_card("Q", "A").unwrap().id.clone();
        assert_eq!(session.selected_id(), Some(id.as_str()));
        assert_eq!(session.position_label(), "1/1");
    }

    #[test]
    fn test_toggle_sidebar_leaves_cards_alone() {
        let mut session = default_session();
        session.toggle_sidebar();
        assert!(!session.is_sidebar_open());
        assert_eq!(session.selected_id(), Some("c1"));
        session.toggle_sidebar();
        assert!(session.is_sidebar_open());
    }

    #[test]
    fn test_closing_sidebar_blurs_form() {
        let mut session = default_session();
        session.focus_field(FormField::Back);
        session.toggle_sidebar();
        assert_eq!(session.form().focus, None);
    }

    #[test]
    fn test_typing_without_focus_is_ignored() {
        let mut session = default_session();
        session.insert_char('x');
        session.insert_str("yz");
        session.backspace();
        session.cycle_focus();
        assert_eq!(session.form(), &CardForm::default());
    }

    #[test]
    fn test_every_mutation_saves_once() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .withf(|key, _| key == STORAGE_KEY)
            .times(2)
            .returning(|_, _| Ok(()));

        let mut session = StudySession::load(Box::new(store));
        session.next();
        session.toggle_reveal();
        session.add_card("Q", "A");
        session.add_card("", "rejected");
        session.delete_card("c2");
        session.delete_card("missing");
    }

    #[test]
    fn test_save_failure_keeps_mutation() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_set().returning(|_, _| {
            Err(StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        });

        let mut session = StudySession::load(Box::new(store));
        session.add_card("Q", "A");
        assert_eq!(session.len(), 4);
    }
}
