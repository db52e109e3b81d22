//! Terminal notices.

use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use tracing::warn;

use crate::domain::notice::Notice;
use crate::ports::notifier::Notifier;

/// Prints notices to a writer (stdout in the binary).
pub struct TerminalNotifier<Out: Write + Send + 'static> {
    out: Mutex<Out>,
}

impl<Out: Write + Send + 'static> TerminalNotifier<Out> {
    /// Notifier writing to `out`.
    pub const fn new(out: Out) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> Out {
        self.out.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TerminalNotifier<std::io::Stdout> {
    /// Notifier writing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<Out: Write + Send + 'static> Notifier for TerminalNotifier<Out> {
    fn notify(&self, notice: Notice) {
        let marker = if notice.is_error() { "!" } else { "*" };
        let line = format!("[{}] {marker} {notice}", Local::now().format("%H:%M:%S"));

        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, %notice, "Failed to print notice");
        }
    }
}
