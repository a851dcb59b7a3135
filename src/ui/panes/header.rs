//! Banner shown above the menus

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by the banner: the double box, the tagline and a blank line
pub const HEADER_HEIGHT: u16 = 6;

/// Render the boxed title with the tagline below it
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(DEFAULT_THEME.header));

    let banner = Paragraph::new(format!("\n{}", title))
        .block(block)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.header)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(banner, rows[0]);

    let tagline = Paragraph::new(subtitle)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.subtitle)
                .add_modifier(Modifier::ITALIC),
        );
    frame.render_widget(tagline, rows[1]);
}
