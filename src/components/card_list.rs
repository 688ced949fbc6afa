// ABOUTME: Sidebar card list showing each card's front with a short preview of its back

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::HitMap;
use crate::app::{AppEvent, AppState};

const PREVIEW_CHARS: usize = 40;
const ITEM_HEIGHT: u16 = 2;
const TRASH: &str = " ✕ ";

pub struct CardListComponent {
    list_state: ListState,
}

impl Default for CardListComponent {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl CardListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
        let session = &state.session;

        let block = Block::default()
            .title(format!("Flashcards · {} cards", session.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);

        if session.is_empty() {
            self.list_state.select(None);
            let empty = Paragraph::new("No cards yet.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.list_state.select(Some(session.selected_index()));

        let items: Vec<ListItem> = session
            .cards()
            .iter()
            .map(|card| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        card.front.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", card.back_preview(PREVIEW_CHARS)),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);

        self.render_row_targets(frame, inner, state, hits);
    }

    /// Register a select target per visible row and draw its delete button.
    fn render_row_targets(&self, frame: &mut Frame, inner: Rect, state: &AppState, hits: &mut HitMap) {
        let trash_width = TRASH.chars().count() as u16;
        let visible_rows = (inner.height / ITEM_HEIGHT) as usize;
        let offset = self.list_state.offset();

        for (slot, (index, card)) in state
            .session
            .cards()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .enumerate()
        {
            let y = inner.y + slot as u16 * ITEM_HEIGHT;
            let row = Rect::new(inner.x, y, inner.width, ITEM_HEIGHT);
            hits.register(row, AppEvent::SelectCard(index));

            if inner.width > trash_width {
                let trash = Rect::new(inner.right() - trash_width, y, trash_width, 1);
                frame.render_widget(
                    Paragraph::new(TRASH).style(Style::default().fg(Color::Red)),
                    trash,
                );
                hits.register(trash, AppEvent::DeleteCard(card.id.clone()));
            }
        }
    }
}
