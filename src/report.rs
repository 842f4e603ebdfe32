/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

/// Sink for human-readable status messages.
pub trait Reporter {
    fn message(&mut self, level: Level, text: &str);

    fn info(&mut self, text: &str) {
        self.message(Level::Info, text);
    }

    fn success(&mut self, text: &str) {
        self.message(Level::Success, text);
    }

    fn warn(&mut self, text: &str) {
        self.message(Level::Warn, text);
    }

    fn error(&mut self, text: &str) {
        self.message(Level::Error, text);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn message(&mut self, level: Level, text: &str) {
        (**self).message(level, text);
    }
}

/// Writes info and success messages to stdout, warnings and errors to
/// stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn message(&mut self, level: Level, text: &str) {
        match level {
            Level::Info if self.quiet => {}
            Level::Info | Level::Success => println!("{text}"),
            Level::Warn | Level::Error => eprintln!("{text}"),
        }
    }
}

/// Collects messages in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryReporter {
    pub messages: Vec<(Level, String)>,
}

impl MemoryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// All messages at `level`, in order.
    #[must_use]
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Whether any message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, text)| text.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn message(&mut self, level: Level, text: &str) {
        self.messages.push((level, text.to_string()));
    }
}
