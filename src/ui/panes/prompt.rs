//! Single-line input prompt

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render `label` followed by what has been typed so far.
///
/// A block cursor follows the input while `is_editing` is set.
pub fn render_prompt_line(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &str,
    is_editing: bool,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {}", label),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ];
    if is_editing {
        spans.push(Span::styled("█", Style::default().fg(DEFAULT_THEME.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
