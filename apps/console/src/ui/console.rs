use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use dataholders::UiSurface;
use shared::domain::HolderKind;
use tracing::warn;

/// Renders display regions and notices as lines of text.
pub struct ConsoleSurface<W> {
    out: Mutex<W>,
}

impl ConsoleSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{line}") {
            warn!(error = %err, "failed to render console line");
        }
        if let Err(err) = out.flush() {
            warn!(error = %err, "failed to flush console output");
        }
    }
}

impl<W: Write + Send> UiSurface for ConsoleSurface<W> {
    fn set_text(&self, region: HolderKind, text: &str) {
        self.write_line(format_args!("[{}] {text}", region.label()));
    }

    fn notify(&self, message: &str) {
        self.write_line(format_args!("(toast) {message}"));
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
