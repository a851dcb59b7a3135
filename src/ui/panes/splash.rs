//! Progress gauge and farewell message

use crate::ui::effects::Progress;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Render `progress` as a bordered gauge captioned with its message
pub fn render_progress(frame: &mut Frame, area: Rect, progress: &Progress, now: Instant) {
    let block = Block::default()
        .title(format!(" {} ", progress.message()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.success)
                .bg(DEFAULT_THEME.current_line_bg),
        )
        .ratio(progress.ratio(now))
        .label(format!("{}%", progress.percent(now)));

    frame.render_widget(gauge, area);
}

/// Render the farewell line; blank while a blink hides it
pub fn render_farewell_message(frame: &mut Frame, area: Rect, text: &str, visible: bool) {
    let shown = if visible { text } else { "" };
    let paragraph = Paragraph::new(shown).alignment(Alignment::Center).style(
        Style::default()
            .fg(DEFAULT_THEME.subtitle)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}
