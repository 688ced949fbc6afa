// ABOUTME: Application state wrapping the study session with app-level flags

use crate::app::StudySession;
use crate::storage::{KeyValueStore, MemoryStore};
use tracing::info;

pub const DEFAULT_SIDEBAR_KEY: char = 'b';

#[derive(Debug)]
pub struct AppState {
    pub session: StudySession,
    pub should_quit: bool,
    pub help_visible: bool,
    /// Letter that toggles the sidebar, matched case-insensitively.
    pub sidebar_key: char,
}

impl Default for AppState {
    /// A fresh state over an in-memory store holding the default deck.
    fn default() -> Self {
        Self::new(StudySession::load(Box::new(MemoryStore::new())))
    }
}

impl AppState {
    pub fn new(session: StudySession) -> Self {
        Self {
            session,
            should_quit: false,
            help_visible: false,
            sidebar_key: DEFAULT_SIDEBAR_KEY,
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether keystrokes currently go to a text field instead of the study bindings.
    pub fn is_editing(&self) -> bool {
        self.session.form().focus.is_some()
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let session = StudySession::load(store);
        info!("Loaded study session at {}", session.position_label());
        Self {
            state: AppState::new(session),
        }
    }

    pub fn with_sidebar_key(mut self, key: char) -> Self {
        self.state.sidebar_key = key.to_ascii_lowercase();
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}
