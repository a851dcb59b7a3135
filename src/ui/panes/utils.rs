//! Shared utility functions for pane rendering
//!
//! All functions in this module are `pub(super)`, making them accessible only
//! within the panes module.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
};

/// Border style for a pane that can take focus
pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page of `total_lines` stays in view.
///
/// Returns the number of content rows inside a bordered `area`.
pub(super) fn clamp_scroll(total_lines: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    visible_height
}

#[cfg(test)]
pub(super) fn plain(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
