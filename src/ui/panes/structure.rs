//! Visualization pane
//!
//! Draws the live structure, or the state captured by the current playback
//! step, followed by the step's caption and traversal trails.
//!
//! | Structure | Layout |
//! |-|-|
//! | linked list | `[a] -> [b] -> NULL` |
//! | stack | boxed cells top to bottom, `← TOP` beside the topmost |
//! | queue | `FRONT → [a] → [b] ← REAR` |
//! | binary tree | rotated 90°, right subtree on top, five columns per level |

use super::utils::{border_style, clamp_scroll};
use crate::session::{Focus, PlaybackStep, Structure, Trail};
use crate::structures::{BinarySearchTree, LinkedList, Queue, Stack};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// What the visualization pane draws
pub struct StructureRenderData<'a> {
    /// The session's live structure
    pub structure: &'a Structure,
    /// Playback step being shown, if an animation is running
    pub step: Option<&'a PlaybackStep>,
}

/// Render the visualization pane
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    data: &StructureRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let shown = data
        .step
        .and_then(|step| step.snapshot.as_ref())
        .unwrap_or(data.structure);
    let no_focus = Focus::None;
    let focus = data.step.map_or(&no_focus, |step| &step.focus);

    let mut lines = structure_lines(shown, focus);
    if let Some(step) = data.step {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            step.caption.clone(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        let chain = matches!(shown, Structure::LinkedList(_));
        lines.extend(step.trails.iter().map(|trail| trail_line(trail, chain)));
    }

    let block = Block::default()
        .title(format!(" {} Visualization ", shown.kind().name()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    clamp_scroll(lines.len(), area, scroll_offset);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Lines drawing `structure`, with `focus` highlighted
pub fn structure_lines(structure: &Structure, focus: &Focus) -> Vec<Line<'static>> {
    match structure {
        Structure::LinkedList(list) => list_lines(list, focus),
        Structure::Stack(stack) => stack_lines(stack),
        Structure::Queue(queue) => queue_lines(queue),
        Structure::BinaryTree(tree) => tree_lines(tree, focus),
    }
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )
}

fn footnote(text: String) -> Line<'static> {
    Line::styled(text, Style::default().fg(DEFAULT_THEME.comment))
}

fn highlighted() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.highlight)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn list_lines(list: &LinkedList, focus: &Focus) -> Vec<Line<'static>> {
    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    let mut chain = Vec::with_capacity(list.len() * 2 + 1);

    for (index, value) in list.iter().enumerate() {
        let style = if *focus == Focus::Position(index) {
            highlighted()
        } else {
            Style::default().fg(DEFAULT_THEME.list_node)
        };
        chain.push(Span::styled(format!("[{}]", value), style));
        chain.push(Span::styled(" -> ", arrow));
    }
    chain.push(Span::styled("NULL", Style::default().fg(DEFAULT_THEME.error)));

    vec![
        heading("Linked List Visualization:"),
        Line::from(""),
        Line::from(chain),
        Line::from(""),
        footnote(format!("Nodes: {}", list.len())),
    ]
}

pub fn stack_lines(stack: &Stack) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(DEFAULT_THEME.comment);
    let cell_style = Style::default().fg(DEFAULT_THEME.cell);

    // Cells fit the widest value, and never narrower than a five digit number
    let width = stack
        .iter()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(0)
        .max(5)
        + 2;
    let rule = "─".repeat(width);

    let mut lines = vec![
        heading("Stack Visualization (Top to Bottom):"),
        Line::from(""),
        Line::styled(format!("┌{}┐", rule), frame_style),
    ];

    for (i, value) in stack.iter().enumerate() {
        if i > 0 {
            lines.push(Line::styled(format!("├{}┤", rule), frame_style));
        }
        let mut cell = vec![
            Span::styled("│", frame_style),
            Span::styled(format!("{:>w$} ", value, w = width - 1), cell_style),
            Span::styled("│", frame_style),
        ];
        if i == 0 {
            cell.push(Span::styled(
                "  ← TOP",
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(cell));
    }

    lines.push(Line::styled(format!("└{}┘", rule), frame_style));
    if stack.is_empty() {
        lines.push(footnote("(empty)".to_string()));
    }
    lines.push(Line::from(""));
    lines.push(footnote(format!(
        "Size: {}/{}",
        stack.len(),
        stack.capacity()
    )));
    lines
}

pub fn queue_lines(queue: &Queue) -> Vec<Line<'static>> {
    let marker = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let arrow = Style::default().fg(DEFAULT_THEME.comment);

    let contents = if queue.is_empty() {
        Line::styled("[EMPTY QUEUE]", Style::default().fg(DEFAULT_THEME.comment))
    } else {
        let mut spans = vec![Span::styled("FRONT", marker), Span::styled(" → ", arrow)];
        for (i, value) in queue.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", arrow));
            }
            spans.push(Span::styled(
                format!("[{}]", value),
                Style::default().fg(DEFAULT_THEME.cell),
            ));
        }
        spans.push(Span::styled(" ← ", arrow));
        spans.push(Span::styled("REAR", marker));
        Line::from(spans)
    };

    let cursor = |index: Option<usize>| index.map_or("-".to_string(), |i| i.to_string());
    vec![
        heading("Queue Visualization:"),
        Line::from(""),
        contents,
        Line::from(""),
        footnote(format!(
            "Size: {}/{}  front: {}  rear: {}",
            queue.len(),
            queue.capacity(),
            cursor(queue.front_index()),
            cursor(queue.rear_index())
        )),
    ]
}

pub fn tree_lines(tree: &BinarySearchTree, focus: &Focus) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Current Binary Tree Structure:"), Line::from("")];

    if tree.is_empty() {
        lines.push(footnote("(empty tree)".to_string()));
        return lines;
    }

    let (visited, current) = match focus {
        Focus::Nodes { order, visited } => {
            let mut walk = tree.traverse(*order);
            let seen: FxHashSet<i32> = walk.by_ref().take(*visited).collect();
            (seen, walk.next())
        }
        _ => (FxHashSet::default(), None),
    };

    for row in tree.sideways() {
        let style = if current == Some(row.value) {
            highlighted()
        } else if visited.contains(&row.value) {
            Style::default().fg(DEFAULT_THEME.visited)
        } else {
            Style::default().fg(DEFAULT_THEME.tree_node)
        };
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(row.indent())),
            Span::styled(format!("[{}]", row.value), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(footnote(format!(
        "Nodes: {}  Height: {}",
        tree.len(),
        tree.height()
    )));
    lines
}

/// `Label: [1] -> [2]` for chains, `Label: 1 2` otherwise
pub fn trail_line(trail: &Trail, chain: bool) -> Line<'static> {
    let mut text = if chain {
        trail
            .revealed()
            .iter()
            .map(|v| format!("[{}]", v))
            .collect::<Vec<_>>()
            .join(" -> ")
    } else {
        trail
            .revealed()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    if chain && trail.complete {
        if !text.is_empty() {
            text.push_str(" -> ");
        }
        text.push_str("NULL");
    }

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let values_style = if trail.complete {
        Style::default().fg(DEFAULT_THEME.success)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    Line::from(vec![
        Span::styled(format!("{}: ", trail.label), label_style),
        Span::styled(text, values_style),
    ])
}
