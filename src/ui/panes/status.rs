//! Status bar rendering with keybindings and state indicators

use crate::session::Tone;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Mode shown at the right edge of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Input,
    Playing,
    Done,
}

pub struct StatusRenderData<'a> {
    /// Screen badge at the left edge, e.g. `MENU` or `STACK`
    pub badge: &'a str,
    pub message: &'a str,
    pub tone: Tone,
    /// Key and description pairs
    pub hints: &'a [(&'a str, &'a str)],
    pub indicator: Option<Indicator>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.badge),
            Style::default()
                .bg(match data.tone {
                    Tone::Error => DEFAULT_THEME.error,
                    Tone::Warning => DEFAULT_THEME.warning,
                    Tone::Info | Tone::Success => DEFAULT_THEME.primary,
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.tone(data.tone)),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, description)) in data.hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", description), desc_style));
    }

    let indicator = match data.indicator {
        Some(Indicator::Input) => Some((" ⌨ INPUT ", DEFAULT_THEME.secondary)),
        Some(Indicator::Playing) => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        Some(Indicator::Done) => Some((" DONE ", DEFAULT_THEME.success)),
        None => None,
    };
    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
