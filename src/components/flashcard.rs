// ABOUTME: Main study pane showing the current card's front or back with navigation controls

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::HitMap;
use crate::app::{AppEvent, AppState};

pub struct FlashcardComponent;

impl FlashcardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
        let session = &state.session;

        let Some(card) = session.current() else {
            self.render_empty(frame, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Card
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let (label, text, accent) = if session.is_revealed() {
            ("Back", card.back.as_str(), Color::Green)
        } else {
            ("Front", card.front.as_str(), Color::Yellow)
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Min(1),
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body[1],
        );
        frame.render_widget(
            Paragraph::new("Click to flip")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            body[2],
        );
        hits.register(chunks[0], AppEvent::ToggleReveal);

        self.render_controls(frame, chunks[1], state, hits);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
        if area.height == 0 {
            return;
        }
        let session = &state.session;
        let reveal_label = if session.is_revealed() { "[ Hide ]" } else { "[ Reveal ]" };

        let buttons = [
            (" ◀ ", session.can_prev(), AppEvent::PrevCard),
            (reveal_label, session.can_reveal(), AppEvent::ToggleReveal),
            (" ▶ ", session.can_next(), AppEvent::NextCard),
        ];

        let gap = 2u16;
        let total: u16 = buttons
            .iter()
            .map(|(label, _, _)| label.chars().count() as u16)
            .sum::<u16>()
            + gap * (buttons.len() as u16 - 1);
        let row = area.y + area.height / 2;
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for (label, enabled, event) in buttons {
            let width = (label.chars().count() as u16).min(area.right().saturating_sub(x));
            let button = Rect::new(x, row, width, 1);
            let style = if enabled {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(Paragraph::new(label).style(style), button);
            if enabled {
                hits.register(button, event);
            }
            x = x.saturating_add(width + gap);
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new("No cards to study")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new("Add one using the sidebar.")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[2],
        );
    }
}

impl Default for FlashcardComponent {
    fn default() -> Self {
        Self::new()
    }
}
