//! Main TUI application state and logic

use crate::config::Config;
use crate::session::{
    main_menu_lines, Operation, Outcome, Playback, Session, Step, StructureKind, Tone,
};
use crate::ui::effects::{
    Flash, Progress, Typewriter, EXIT_DURATION, FLASH_DELAY, FLASH_TIMES, LOADING_DURATION,
    SUBTITLE_CHAR_DELAY, TITLE_CHAR_DELAY,
};
use crate::ui::panes::{self, Indicator, StatusRenderData, StructureRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

pub const TITLE: &str = "ADVANCED DATA STRUCTURES CONSOLE APPLICATION";
pub const SUBTITLE: &str = "Eat Code Coode Coooode Sleep!";
pub const FAREWELL: &str = "Thank you for using Data Structures Console Application!";

/// Number of main-menu entries: the four demonstrations and exit
const MAIN_MENU_ENTRIES: usize = 5;

const MAIN_MENU_HINTS: [(&str, &str); 4] = [
    ("↑/↓", "select"),
    ("↵", "open"),
    ("0-4", "choose"),
    ("q", "quit"),
];
const OPERATION_HINTS: [(&str, &str); 4] = [
    ("0-9", "choose"),
    ("tab", "focus"),
    ("↑/↓", "scroll"),
    ("esc", "back"),
];
const INPUT_HINTS: [(&str, &str); 3] = [("↵", "submit"), ("⌫", "delete"), ("esc", "cancel")];
const PLAYING_HINTS: [(&str, &str); 1] = [("↵/⎵/esc", "skip")];
const DONE_HINTS: [(&str, &str); 1] = [("any key", "continue")];

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    /// Progress bar before a demonstration opens
    Loading(StructureKind),
    /// A demonstration with its session
    Structure,
    /// Farewell message and exit progress bar
    Farewell,
}

/// Which pane of the structure screen is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Visualization,
    Log,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Visualization => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Visualization,
        }
    }

    pub fn prev(self) -> Self {
        // Only two panes
        self.next()
    }
}

/// What keystrokes on the structure screen edit
#[derive(Debug, Clone)]
enum InputMode {
    Menu,
    Value {
        operation: Operation,
        prompt: &'static str,
        buffer: String,
    },
}

/// A playback being replayed, with the time its next step is due
#[derive(Debug)]
struct ActivePlayback {
    playback: Playback,
    next_step_at: Instant,
}

/// The main application state
pub struct App {
    pub config: Config,

    /// Current screen
    pub screen: Screen,

    /// The demonstration in progress, if any
    pub session: Option<Session>,

    /// Currently focused pane on the structure screen
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub structure_scroll: usize,
    pub log_scroll: usize,

    /// Highlighted main-menu entry
    pub menu_selection: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_tone: Tone,

    input: InputMode,
    playback: Option<ActivePlayback>,
    title: Typewriter,
    subtitle: Typewriter,
    progress: Option<Progress>,
    flash: Option<Flash>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (title, subtitle) = header_effects(config.animations, Instant::now());

        App {
            config,
            screen: Screen::MainMenu,
            session: None,
            focused_pane: FocusedPane::Visualization,
            structure_scroll: 0,
            log_scroll: 0,
            menu_selection: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_tone: Tone::Info,
            input: InputMode::Menu,
            playback: None,
            title,
            subtitle,
            progress: None,
            flash: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout so animations keep moving without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// What the user is typing, if a value prompt is open
    pub fn input_buffer(&self) -> Option<&str> {
        match &self.input {
            InputMode::Value { buffer, .. } => Some(buffer.as_str()),
            InputMode::Menu => None,
        }
    }

    /// The playback being shown, if any
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref().map(|active| &active.playback)
    }

    /// Advance timed state: loading, playback steps and the farewell sequence
    pub fn tick(&mut self, now: Instant) {
        match self.screen {
            Screen::MainMenu => {}
            Screen::Loading(kind) => {
                if self.progress.as_ref().map_or(true, |p| p.is_done(now)) {
                    self.open_session(kind);
                }
            }
            Screen::Structure => {
                if let Some(active) = self.playback.as_mut() {
                    if !active.playback.is_finished() && now >= active.next_step_at {
                        active.playback.advance();
                        let delay = active
                            .playback
                            .current()
                            .map_or(Duration::ZERO, |s| s.delay);
                        active.next_step_at = now + delay;
                    }
                }
            }
            Screen::Farewell => match self.flash.as_ref().map(|f| f.is_done(now)) {
                Some(true) => {
                    self.flash = None;
                    self.progress = Some(Progress::new(
                        "Exiting program",
                        scaled(self.config.animations, EXIT_DURATION),
                        now,
                    ));
                }
                Some(false) => {}
                None => {
                    if self.progress.as_ref().map_or(true, |p| p.is_done(now)) {
                        self.should_quit = true;
                    }
                }
            },
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        match self.screen {
            Screen::MainMenu => self.render_main_menu(frame, now),
            Screen::Loading(kind) => self.render_loading(frame, kind, now),
            Screen::Structure => self.render_structure(frame),
            Screen::Farewell => self.render_farewell(frame, now),
        }
    }

    fn render_main_menu(&mut self, frame: &mut Frame, now: Instant) {
        let lines = main_menu_lines();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(panes::HEADER_HEIGHT),
                Constraint::Length(panes::menu_box_height(lines.len())),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        panes::render_header(
            frame,
            rows[0],
            self.title.visible(now),
            self.subtitle.visible(now),
        );
        panes::render_menu_box(frame, rows[1], "Main Menu", &lines, Some(self.menu_selection));
        panes::render_prompt_line(frame, rows[2], "Enter your choice (0-4): ", "", false);
        panes::render_status_bar(
            frame,
            rows[4],
            &StatusRenderData {
                badge: "MENU",
                message: &self.status_message,
                tone: self.status_tone,
                hints: &MAIN_MENU_HINTS,
                indicator: None,
            },
        );
    }

    fn render_loading(&mut self, frame: &mut Frame, kind: StructureKind, now: Instant) {
        let intro: Vec<String> = kind.intro().lines().map(str::to_string).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(panes::HEADER_HEIGHT),
                Constraint::Length(panes::menu_box_height(intro.len())),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(frame.area());

        panes::render_header(frame, rows[0], TITLE, SUBTITLE);
        panes::render_menu_box(frame, rows[1], &kind.title(), &intro, None);
        if let Some(progress) = &self.progress {
            panes::render_progress(frame, rows[2], progress, now);
        }
    }

    fn render_structure(&mut self, frame: &mut Frame) {
        let session = match &self.session {
            Some(session) => session,
            None => return,
        };
        let kind = session.kind();
        let menu = kind.menu_lines();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(panes::menu_box_height(menu.len())),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        panes::render_menu_box(frame, rows[0], &kind.title(), &menu, None);

        let step = self.playback.as_ref().and_then(|active| active.playback.current());
        panes::render_structure_pane(
            frame,
            columns[0],
            &StructureRenderData {
                structure: session.structure(),
                step,
            },
            self.focused_pane == FocusedPane::Visualization,
            &mut self.structure_scroll,
        );

        panes::render_log_pane(
            frame,
            columns[1],
            session.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        let finished = self.playback.as_ref().map(|active| active.playback.is_finished());
        let (label, input, editing) = match (&self.input, finished) {
            (_, Some(false)) => ("Press Enter to skip the animation", "", false),
            (_, Some(true)) => ("Press any key to continue...", "", false),
            (InputMode::Value { prompt, buffer, .. }, None) => (*prompt, buffer.as_str(), true),
            (InputMode::Menu, None) => ("Enter operation choice: ", "", false),
        };
        panes::render_prompt_line(frame, rows[2], label, input, editing);

        let (hints, indicator) = match (&self.input, finished) {
            (_, Some(false)) => (&PLAYING_HINTS[..], Some(Indicator::Playing)),
            (_, Some(true)) => (&DONE_HINTS[..], Some(Indicator::Done)),
            (InputMode::Value { .. }, None) => (&INPUT_HINTS[..], Some(Indicator::Input)),
            (InputMode::Menu, None) => (&OPERATION_HINTS[..], None),
        };
        let badge = kind.name().to_uppercase();
        panes::render_status_bar(
            frame,
            rows[3],
            &StatusRenderData {
                badge: &badge,
                message: &self.status_message,
                tone: self.status_tone,
                hints,
                indicator,
            },
        );
    }

    fn render_farewell(&mut self, frame: &mut Frame, now: Instant) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(panes::HEADER_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(frame.area());

        panes::render_header(frame, rows[0], TITLE, SUBTITLE);
        let visible = self.flash.as_ref().map_or(true, |flash| flash.is_visible(now));
        panes::render_farewell_message(frame, rows[1], FAREWELL, visible);
        if let Some(progress) = &self.progress {
            panes::render_progress(frame, rows[2], progress, now);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match self.screen {
            Screen::MainMenu => self.handle_main_menu_key(key, now),
            // Any key skips the loading bar
            Screen::Loading(kind) => self.open_session(kind),
            Screen::Structure => self.handle_structure_key(key, now),
            Screen::Farewell => self.should_quit = true,
        }
    }

    fn handle_main_menu_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.begin_farewell(now),
            KeyCode::Char(c) => {
                if let Some(choice) = c.to_digit(10) {
                    self.choose_main_entry(choice, now);
                }
            }
            KeyCode::Up => {
                self.menu_selection =
                    (self.menu_selection + MAIN_MENU_ENTRIES - 1) % MAIN_MENU_ENTRIES;
            }
            KeyCode::Down => {
                self.menu_selection = (self.menu_selection + 1) % MAIN_MENU_ENTRIES;
            }
            KeyCode::Enter => {
                // The exit entry is listed last but numbered 0
                let choice = if self.menu_selection + 1 < MAIN_MENU_ENTRIES {
                    self.menu_selection as u32 + 1
                } else {
                    0
                };
                self.choose_main_entry(choice, now);
            }
            _ => {}
        }
    }

    fn choose_main_entry(&mut self, choice: u32, now: Instant) {
        if choice == 0 {
            self.begin_farewell(now);
            return;
        }
        match StructureKind::from_choice(choice) {
            Some(kind) => {
                self.menu_selection = kind.choice() as usize - 1;
                self.enter_structure(kind, now);
            }
            None => self.set_status(Tone::Error, "Invalid choice! Please try again."),
        }
    }

    fn handle_structure_key(&mut self, key: KeyEvent, now: Instant) {
        match self.playback.as_ref().map(|active| active.playback.is_finished()) {
            Some(true) => {
                self.playback = None;
                return;
            }
            Some(false) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
                    if let Some(active) = self.playback.as_mut() {
                        active.playback.finish();
                    }
                }
                return;
            }
            None => {}
        }

        if self.input_buffer().is_some() {
            match key.code {
                KeyCode::Enter => self.submit_value(now),
                KeyCode::Esc => {
                    self.input = InputMode::Menu;
                    self.set_status(Tone::Info, "Cancelled");
                }
                code => self.edit_value(code),
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.leave_session(now),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Visualization => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1);
                }
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Visualization => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1);
                }
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_add(1),
            },
            KeyCode::Char(c) => {
                if let Some(choice) = c.to_digit(10) {
                    self.choose_operation(choice, now);
                }
            }
            _ => {}
        }
    }

    fn choose_operation(&mut self, choice: u32, now: Instant) {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return,
        };
        let operation = match session.kind().operation_for(choice) {
            Some(operation) => operation,
            None => {
                self.set_status(Tone::Error, "Invalid choice!");
                return;
            }
        };

        match session.select(operation) {
            Step::Prompt(prompt) => {
                self.input = InputMode::Value {
                    operation,
                    prompt,
                    buffer: String::new(),
                };
                self.set_status(Tone::Info, operation.label());
            }
            Step::Done(outcome) => self.show_outcome(outcome, now),
            Step::Leave => self.leave_session(now),
        }
    }

    /// Digits and a leading sign are accepted; everything else is ignored
    fn edit_value(&mut self, code: KeyCode) {
        if let InputMode::Value { buffer, .. } = &mut self.input {
            match code {
                KeyCode::Char(c) if c.is_ascii_digit() => buffer.push(c),
                KeyCode::Char(c @ ('-' | '+')) if buffer.is_empty() => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                _ => {}
            }
        }
    }

    fn submit_value(&mut self, now: Instant) {
        let (operation, buffer) = match std::mem::replace(&mut self.input, InputMode::Menu) {
            InputMode::Value {
                operation, buffer, ..
            } => (operation, buffer),
            InputMode::Menu => return,
        };
        let outcome = match self.session.as_mut() {
            Some(session) => session.submit(operation, &buffer),
            None => return,
        };
        self.show_outcome(outcome, now);
    }

    fn show_outcome(&mut self, outcome: Outcome, now: Instant) {
        // Multi-line results are shown in full in the log
        let headline = outcome.message.lines().next().unwrap_or_default();
        self.set_status(outcome.tone, headline);
        // Auto-scroll log to bottom
        self.log_scroll = usize::MAX;

        if let Some(mut playback) = outcome.playback {
            if !self.config.animations {
                playback.finish();
            }
            let delay = playback.current().map_or(Duration::ZERO, |s| s.delay);
            self.structure_scroll = 0;
            self.playback = Some(ActivePlayback {
                playback,
                next_step_at: now + delay,
            });
        }
    }

    fn enter_structure(&mut self, kind: StructureKind, now: Instant) {
        if self.config.animations {
            self.progress = Some(Progress::new(kind.loading_message(), LOADING_DURATION, now));
            self.screen = Screen::Loading(kind);
        } else {
            self.open_session(kind);
        }
    }

    fn open_session(&mut self, kind: StructureKind) {
        self.progress = None;
        match Session::new(kind, self.config.capacity) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Structure;
                self.input = InputMode::Menu;
                self.playback = None;
                self.focused_pane = FocusedPane::Visualization;
                self.structure_scroll = 0;
                self.log_scroll = 0;
                self.set_status(Tone::Info, "Ready!");
            }
            Err(e) => {
                self.screen = Screen::MainMenu;
                self.set_status(Tone::Error, e.to_string());
            }
        }
    }

    /// Release the structure and return to the main menu
    fn leave_session(&mut self, now: Instant) {
        self.session = None;
        self.playback = None;
        self.input = InputMode::Menu;
        self.screen = Screen::MainMenu;
        self.restart_header(now);
        self.set_status(Tone::Info, "Ready!");
    }

    fn begin_farewell(&mut self, now: Instant) {
        if self.config.animations {
            self.screen = Screen::Farewell;
            self.flash = Some(Flash::new(FLASH_TIMES, FLASH_DELAY, now));
        } else {
            self.should_quit = true;
        }
    }

    fn restart_header(&mut self, now: Instant) {
        (self.title, self.subtitle) = header_effects(self.config.animations, now);
    }

    fn set_status(&mut self, tone: Tone, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_tone = tone;
    }
}

/// `duration`, or zero when animations are off
fn scaled(animations: bool, duration: Duration) -> Duration {
    if animations {
        duration
    } else {
        Duration::ZERO
    }
}

/// Typewriters for the banner; the tagline starts once the title is written
fn header_effects(animations: bool, now: Instant) -> (Typewriter, Typewriter) {
    let title = Typewriter::new(TITLE, scaled(animations, TITLE_CHAR_DELAY), now);
    let subtitle = Typewriter::new(
        SUBTITLE,
        scaled(animations, SUBTITLE_CHAR_DELAY),
        title.finishes_at(),
    );
    (title, subtitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FocusedPane::Visualization.next(), FocusedPane::Log);
        assert_eq!(FocusedPane::Log.next(), FocusedPane::Visualization);
        assert_eq!(FocusedPane::Log.prev(), FocusedPane::Visualization);
    }

    #[test]
    fn test_loading_opens_session_when_done() {
        let mut app = App::new(Config::default());
        let start = Instant::now();
        app.enter_structure(StructureKind::Stack, start);
        assert_eq!(app.screen, Screen::Loading(StructureKind::Stack));

        app.tick(start + Duration::from_millis(100));
        assert!(app.session.is_none());

        app.tick(start + LOADING_DURATION);
        assert_eq!(app.screen, Screen::Structure);
        assert_eq!(app.session.as_ref().map(Session::kind), Some(StructureKind::Stack));
    }

    #[test]
    fn test_playback_advances_on_schedule() {
        let mut app = App::new(Config::default());
        let start = Instant::now();
        app.open_session(StructureKind::LinkedList);
        for digit in ['1', '5'] {
            app.choose_operation(1, start);
            assert_eq!(app.input_buffer(), Some(""));
            if let InputMode::Value { buffer, .. } = &mut app.input {
                buffer.push(digit);
            }
            app.submit_value(start);
        }

        app.choose_operation(3, start);
        assert_eq!(app.playback().map(Playback::position), Some(0));

        // Intro step waits its delay before the first node is shown
        app.tick(start + Duration::from_millis(10));
        assert_eq!(app.playback().map(Playback::position), Some(0));
        app.tick(start + Duration::from_millis(300));
        assert_eq!(app.playback().map(Playback::position), Some(1));
    }

    #[test]
    fn test_farewell_sequence() {
        let mut app = App::new(Config::default());
        let start = Instant::now();
        app.begin_farewell(start);
        assert_eq!(app.screen, Screen::Farewell);

        let blink_end = start + FLASH_DELAY * FLASH_TIMES * 2;
        app.tick(blink_end);
        assert!(!app.should_quit);

        app.tick(blink_end + EXIT_DURATION);
        assert!(app.should_quit);
    }
}
