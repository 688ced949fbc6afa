// ABOUTME: Event handling system for keyboard, mouse and paste input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::app::{AppState, FormField};
use crate::components::HitMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    PrevCard,
    NextCard,
    ToggleReveal,
    ToggleSidebar,
    SelectCard(usize),
    DeleteCard(String),
    DeleteSelected,
    // Add-card form events
    OpenAddForm,
    FocusField(FormField),
    BlurForm,
    CycleFocus,
    InputChar(char),
    InputBackspace,
    Paste(String),
    SubmitForm,
}

impl AppEvent {
    /// Pointer actions on study controls move focus away from the add form.
    pub fn takes_focus_from_form(&self) -> bool {
        matches!(
            self,
            Self::PrevCard
                | Self::NextCard
                | Self::ToggleReveal
                | Self::ToggleSidebar
                | Self::SelectCard(_)
                | Self::DeleteCard(_)
                | Self::DeleteSelected
        )
    }
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        // Typing in the form must not trigger study shortcuts
        if state.is_editing() {
            return Self::handle_form_keys(key_event);
        }

        match key_event.code {
            KeyCode::Left => Some(AppEvent::PrevCard),
            KeyCode::Right => Some(AppEvent::NextCard),
            KeyCode::Char(' ') | KeyCode::Enter => Some(AppEvent::ToggleReveal),
            KeyCode::Char(ch) if ch.to_ascii_lowercase() == state.sidebar_key => Some(AppEvent::ToggleSidebar),
            KeyCode::Char('a') => Some(AppEvent::OpenAddForm),
            KeyCode::Char('d') | KeyCode::Delete => Some(AppEvent::DeleteSelected),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_form_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::BlurForm),
            KeyCode::Enter => Some(AppEvent::SubmitForm),
            KeyCode::Tab | KeyCode::BackTab => Some(AppEvent::CycleFocus),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(AppEvent::InputChar(ch))
            }
            _ => None,
        }
    }

    /// Map a left click onto whatever was rendered under the pointer.
    pub fn handle_mouse_event(mouse: MouseEvent, state: &AppState, hits: &HitMap) -> Option<AppEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        if state.help_visible {
            return Some(AppEvent::ToggleHelp);
        }

        match hits.event_at(mouse.column, mouse.row) {
            Some(event) => Some(event.clone()),
            None if state.is_editing() => Some(AppEvent::BlurForm),
            None => None,
        }
    }

    pub fn handle_paste(text: String, state: &AppState) -> Option<AppEvent> {
        if state.is_editing() {
            Some(AppEvent::Paste(text))
        } else {
            None
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing {:?}", event);
        if event.takes_focus_from_form() {
            state.session.blur_form();
        }
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::PrevCard => state.session.prev(),
            AppEvent::NextCard => state.session.next(),
            AppEvent::ToggleReveal => state.session.toggle_reveal(),
            AppEvent::ToggleSidebar => state.session.toggle_sidebar(),
            AppEvent::SelectCard(index) => {
                state.session.select_by_index(isize::try_from(index).unwrap_or(isize::MAX));
            }
            AppEvent::DeleteCard(id) => state.session.delete_card(&id),
            AppEvent::DeleteSelected => state.session.delete_selected(),
            AppEvent::OpenAddForm => {
                if !state.session.is_sidebar_open() {
                    state.session.toggle_sidebar();
                }
                state.session.focus_field(FormField::Front);
            }
            AppEvent::FocusField(field) => state.session.focus_field(field),
            AppEvent::BlurForm => state.session.blur_form(),
            AppEvent::CycleFocus => state.session.cycle_focus(),
            AppEvent::InputChar(ch) => state.session.insert_char(ch),
            AppEvent::InputBackspace => state.session.backspace(),
            AppEvent::Paste(text) => state.session.insert_str(&text),
            AppEvent::SubmitForm => {
                state.session.submit_form();
            }
        }
    }
}
