// Event log for operation messages

/// How a message should read to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

/// A single logged message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub tone: Tone,
}

/// Append-only record of what a session's operations reported
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.entries.push(LogEntry {
            text: text.into(),
            tone,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as display lines, splitting multi-line messages
    pub fn lines(&self) -> Vec<(&str, Tone)> {
        self.entries
            .iter()
            .flat_map(|entry| entry.text.lines().map(move |line| (line, entry.tone)))
            .collect()
    }
}
