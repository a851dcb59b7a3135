//! Retro menu box

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Height of a box holding `line_count` lines
pub fn menu_box_height(line_count: usize) -> u16 {
    u16::try_from(line_count).unwrap_or(u16::MAX).saturating_add(2)
}

/// Render a titled box of menu lines, highlighting `selected` if given
pub fn render_menu_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    selected: Option<usize>,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(DEFAULT_THEME.box_border)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.box_border))
        .padding(Padding::new(1, 1, 0, 0));

    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if selected == Some(i) {
                Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.highlight)),
                    Span::styled(
                        line.as_str(),
                        Style::default()
                            .fg(DEFAULT_THEME.box_text)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(line.as_str(), Style::default().fg(DEFAULT_THEME.box_text)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(text).block(block), area);
}
