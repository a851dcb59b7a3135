//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: screen state, keyboard event loop, pane focus, value input mode
//! - **[`effects`]**: typewriter, progress and blink effects driven by elapsed time
//! - **[`panes`]**: stateless render functions for each visible pane (banner, menus,
//!   visualization, event log, prompt, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Config`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod effects;
pub mod panes;
pub mod theme;

pub use app::App;
