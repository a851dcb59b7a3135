//! Event log pane rendering

use super::utils::{border_style, clamp_scroll};
use crate::session::EventLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the log of every message the session has produced
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &EventLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Event Log ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = log.lines();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));
        let visible_height = clamp_scroll(lines.len(), area, scroll_offset);

        let visible_items: Vec<ListItem> = lines
            .into_iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .map(|(text, tone)| {
                ListItem::new(text).style(Style::default().fg(DEFAULT_THEME.tone(tone)))
            })
            .collect();

        frame.render_widget(List::new(visible_items).block(block), area);
    }
}
