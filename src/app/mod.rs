// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod session;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use session::{CardForm, FormField, StudySession};
pub use state::{App, AppState};
