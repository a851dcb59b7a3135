//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`header`]: Boxed banner with its tagline
//! - [`menu`]: Retro boxes for the main and operation menus
//! - [`splash`]: Progress gauges and the farewell message
//! - [`structure`]: Text visualization of the live structure and playback steps
//! - [`log`]: Every message the session has produced
//! - [`prompt`]: The value entry line
//! - [`status`]: Status bar with keybindings and mode indicator
//! - `utils`: Border and scroll helpers shared by the panes
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*()` function. Panes that can
//! take focus receive `is_focused` and a mutable scroll offset, which they
//! clamp to their content.

mod utils;

pub mod header;
pub mod log;
pub mod menu;
pub mod prompt;
pub mod splash;
pub mod status;
pub mod structure;

// Re-export render functions for convenience
pub use header::{render_header, HEADER_HEIGHT};
pub use log::render_log_pane;
pub use menu::{menu_box_height, render_menu_box};
pub use prompt::render_prompt_line;
pub use splash::{render_farewell_message, render_progress};
pub use status::{render_status_bar, Indicator, StatusRenderData};
pub use structure::{render_structure_pane, structure_lines, StructureRenderData};
