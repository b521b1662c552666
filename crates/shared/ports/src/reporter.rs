use log::Level;
use parking_lot::Mutex;

/// Reporting collaborator, passed explicitly to every pipeline stage
/// instead of living in ambient state.
pub trait Reporter: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }
}

/// Reporter that forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "parley", level, "{message}");
    }
}

/// Reporter that records entries for later inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().clone()
    }

    /// Messages recorded at the given level.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn log(&self, level: Level, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}
