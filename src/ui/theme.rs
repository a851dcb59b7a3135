use crate::session::Tone;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub warning: Color,   // Yellow
    pub error: Color,     // Red
    pub header: Color,    // Magenta banner
    pub subtitle: Color,  // Cyan
    pub box_border: Color,
    pub box_text: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub list_node: Color,  // Cyan linked-list nodes
    pub cell: Color,       // Yellow stack cells and queue slots
    pub tree_node: Color,  // Green tree nodes
    pub visited: Color,    // Nodes already visited by a traversal
    pub highlight: Color,  // Node being visited right now
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    warning: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),
    header: Color::Rgb(203, 166, 247),         // Mauve for the banner
    subtitle: Color::Rgb(137, 220, 235),       // Sky for the tagline
    box_border: Color::Rgb(249, 226, 175),     // Yellow box frame
    box_text: Color::Rgb(205, 214, 244),       // White box contents
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    list_node: Color::Rgb(137, 220, 235),      // Cyan chain
    cell: Color::Rgb(249, 226, 175),           // Yellow cells
    tree_node: Color::Rgb(166, 227, 161),      // Green nodes
    visited: Color::Rgb(148, 226, 213),        // Teal for visited nodes
    highlight: Color::Rgb(245, 194, 231),      // Pink for the current node
};

impl Theme {
    /// Foreground for a message of the given tone
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Info => self.fg,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Error => self.error,
        }
    }
}
