use docquery::screen::Screen;
use std::sync::Mutex;

/// Screen that remembers every alert and the current results content.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    alerts: Mutex<Vec<String>>,
    results: Mutex<Option<String>>,
    results_writes: Mutex<usize>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn results(&self) -> Option<String> {
        self.results.lock().unwrap().clone()
    }

    pub fn results_writes(&self) -> usize {
        *self.results_writes.lock().unwrap()
    }
}

impl Screen for RecordingScreen {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn set_results(&self, content: &str) {
        *self.results.lock().unwrap() = Some(content.to_string());
        *self.results_writes.lock().unwrap() += 1;
    }
}
