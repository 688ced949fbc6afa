// ABOUTME: Add-card form with front and back text inputs and a submit button

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::HitMap;
use crate::app::{AppEvent, AppState, FormField};

/// Rows taken by the form including its border.
pub const FORM_HEIGHT: u16 = 10;

const ADD_BUTTON: &str = "[ Add ]";

pub struct AddCardFormComponent;

impl AddCardFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
        let form = state.session.form();

        let block = Block::default()
            .title("Add a card")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Front input
                Constraint::Length(3), // Back input
                Constraint::Length(1), // Add button
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        for (field, text, placeholder, chunk) in [
            (FormField::Front, &form.front, "Front (question)", chunks[0]),
            (FormField::Back, &form.back, "Back (answer)", chunks[1]),
        ] {
            let focused = form.focus == Some(field);
            self.render_input(frame, chunk, text, placeholder, focused);
            hits.register(chunk, AppEvent::FocusField(field));
        }

        let button_width = (ADD_BUTTON.len() as u16).min(chunks[2].width);
        let button = Rect::new(chunks[2].x, chunks[2].y, button_width, chunks[2].height);
        frame.render_widget(
            Paragraph::new(ADD_BUTTON)
                .style(Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)),
            button,
        );
        hits.register(button, AppEvent::SubmitForm);

        let hint_key = state.sidebar_key.to_ascii_uppercase();
        let hint = Paragraph::new(format!(
            "Left/Right to navigate, Space to flip, {} toggles sidebar.",
            hint_key
        ))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, chunks[3]);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, text: &str, placeholder: &str, focused: bool) {
        let border_color = if focused { Color::Green } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);

        let input = if text.is_empty() {
            Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            // Keep the end of long input visible
            let visible = inner.width.saturating_sub(1) as usize;
            let skip = text.chars().count().saturating_sub(visible);
            let tail: String = text.chars().skip(skip).collect();
            Paragraph::new(tail).style(Style::default().fg(Color::White))
        };
        frame.render_widget(input.block(block), area);

        if focused && inner.width > 0 {
            let typed = text.chars().count().min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor(inner.x + typed, inner.y);
        }
    }
}

impl Default for AddCardFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
