//! # Introduction
//!
//! dsconsole is an interactive terminal playground for four textbook data
//! structures. Each demonstration owns one live instance, applies the
//! operations picked from its menu and animates traversals in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Layers
//!
//! ```text
//! Key events → App → Session → Structure → Outcome / Playback → Panes
//! ```
//!
//! 1. [`structures`]: the engines. A singly linked list, a fixed-capacity
//!    stack, a circular queue and an unbalanced binary search tree. They
//!    never print or sleep.
//! 2. [`session`]: menus, operand parsing, result messages, the event log
//!    and precomputed animation scripts.
//! 3. [`config`]: command-line options.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Boundary behaviour
//!
//! Pushing onto a full stack, enqueueing into a full queue, deleting a value
//! that is not in the list and inserting a duplicate into the tree all leave
//! the structure unchanged and are reported with a `bool`. Popping or
//! dequeuing from an empty structure returns `None`.

pub mod config;
pub mod session;
pub mod structures;
pub mod ui;
