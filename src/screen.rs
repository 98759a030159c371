use crate::Error;
use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};
use tracing::warn;

/// Where handler output lands: the blocking notification and the results
/// container.
pub trait Screen: Send + Sync {
    /// Shows `message` to the user and returns once it has been shown.
    fn alert(&self, message: &str);

    /// Replaces the whole content of the results container.
    fn set_results(&self, content: &str);

    fn report_error(&self, error: &Error) {
        self.alert(&format!("Error: {}", error));
    }
}

/// Writes alerts and results as lines to one writer and errors to another,
/// usually stdout and stderr.
pub struct TerminalScreen<W, E> {
    out: Mutex<W>,
    err: Mutex<E>,
}

impl TerminalScreen<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write + Send, E: Write + Send> TerminalScreen<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn into_inner(self) -> (W, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }
}

fn write_line<T: Write>(target: &Mutex<T>, text: &str) {
    let mut target = target.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = writeln!(target, "{}", text).and_then(|_| target.flush()) {
        warn!("Failed to write to terminal: {}", e);
    }
}

impl<W: Write + Send, E: Write + Send> Screen for TerminalScreen<W, E> {
    fn alert(&self, message: &str) {
        write_line(&self.out, message);
    }

    fn set_results(&self, content: &str) {
        write_line(&self.out, content);
    }

    fn report_error(&self, error: &Error) {
        write_line(&self.err, &format!("Error: {}", error));
    }
}
