//! Application shell logic
//!
//! A [`Session`] owns the single live structure of one demonstration and is
//! the only thing the presentation layer talks to. It is deliberately free of
//! terminal code so it can be driven from tests.
//!
//! - [`kind`]: The four demonstrations, their menus and operations
//! - [`engine`]: [`Session`], the live [`Structure`] and operation outcomes
//! - [`log`]: Event log of messages produced by operations
//! - [`playback`]: Pre-computed animation scripts replayed by the UI
//! - [`errors`]: Operand parsing errors
//!
//! # Operation Flow
//!
//! ```text
//! menu digit → Operation → Session::select → Step::Prompt ─→ Session::submit → Outcome
//!                                           └ Step::Done(Outcome)
//!                                           └ Step::Leave
//! ```

pub mod engine;
pub mod errors;
pub mod kind;
pub mod log;
pub mod playback;

pub use engine::{Outcome, Session, Step, Structure};
pub use errors::{parse_value, InputError};
pub use kind::{main_menu_lines, Operation, StructureKind};
pub use log::{EventLog, LogEntry, Tone};
pub use playback::{Focus, Playback, PlaybackStep, Trail};
