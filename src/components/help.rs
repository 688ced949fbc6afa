// ABOUTME: Help overlay component displaying keyboard shortcuts and mouse actions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, sidebar_key: char) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Study:").style(heading),
            ListItem::new("  ←          Previous card"),
            ListItem::new("  →          Next card"),
            ListItem::new("  Space/Enter Reveal or hide the answer"),
            ListItem::new(format!("  {}          Toggle sidebar", sidebar_key)),
            ListItem::new(""),
            ListItem::new("Cards:").style(heading),
            ListItem::new("  a          Add a card"),
            ListItem::new("  d/Del      Delete current card"),
            ListItem::new(""),
            ListItem::new("Add form:").style(heading),
            ListItem::new("  Tab        Switch front/back field"),
            ListItem::new("  Enter      Add the card"),
            ListItem::new("  Esc        Leave the form"),
            ListItem::new(""),
            ListItem::new("Mouse:").style(heading),
            ListItem::new("  Click a card in the list to open it, ✕ to delete"),
            ListItem::new("  Click the card to flip it"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press ? or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
