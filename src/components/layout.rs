// ABOUTME: Main layout component arranging top bar, collapsible sidebar, study pane and key hint bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Modifier, Style},
};

use crate::app::{AppEvent, AppState};
use super::{AddCardFormComponent, CardListComponent, FlashcardComponent, HelpComponent, HitMap};
use super::add_card_form::FORM_HEIGHT;

const HAMBURGER: &str = " ☰ ";

pub struct LayoutComponent {
    card_list: CardListComponent,
    add_card_form: AddCardFormComponent,
    flashcard: FlashcardComponent,
    help: HelpComponent,
    hits: HitMap,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            card_list: CardListComponent::new(),
            add_card_form: AddCardFormComponent::new(),
            flashcard: FlashcardComponent::new(),
            help: HelpComponent::new(),
            hits: HitMap::new(),
        }
    }

    /// Click targets from the last render.
    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        self.hits.clear();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Top bar
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom key hints
            ])
            .split(frame.size());

        self.render_top_bar(frame, main_chunks[0], state);

        let study_area = if state.session.is_sidebar_open() {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(40),  // Sidebar
                    Constraint::Percentage(60),  // Study pane
                ])
                .split(main_chunks[1]);
            self.render_sidebar(frame, content_chunks[0], state);
            content_chunks[1]
        } else {
            main_chunks[1]
        };

        self.flashcard.render(frame, study_area, state, &mut self.hits);

        self.render_menu_bar(frame, main_chunks[2], state);

        if state.help_visible {
            self.help.render(frame, frame.size(), state.sidebar_key);
        }
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),               // Card list
                Constraint::Length(FORM_HEIGHT),  // Add form
            ])
            .split(area);

        self.card_list.render(frame, chunks[0], state, &mut self.hits);
        self.add_card_form.render(frame, chunks[1], state, &mut self.hits);
    }

    fn render_top_bar(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(HAMBURGER.chars().count() as u16),
                Constraint::Length(14),  // Logo
                Constraint::Min(0),      // Title and position
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(HAMBURGER).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            chunks[0],
        );
        self.hits.register(chunks[0], AppEvent::ToggleSidebar);

        let logo = Line::from(vec![
            Span::styled(" FLASH", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" cards", Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(logo), chunks[1]);

        let title = Line::from(vec![
            Span::styled("Study  ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(state.session.position_label(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[2]);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let menu_text = if state.is_editing() {
            "[Tab]switch field [Enter]add card [Esc]done".to_string()
        } else {
            format!(
                "[←/→]navigate [Space]flip [{}]sidebar [a]dd [d]elete [?]help [q]uit",
                state.sidebar_key
            )
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
