//! Clipboard access and the transient "Copied!" indicator.

use std::io::{self, IsTerminal, Stdout, Write};
use std::time::{Duration, Instant};

use base64::Engine;
use thiserror::Error;

use crate::snippet::Strategy;

/// How long a strategy shows as copied.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

/// Error type for clipboard writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The environment refused the write (permissions, no focus, ...).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    /// No clipboard is available at all.
    #[error("clipboard unavailable")]
    Unavailable,
}

/// Write-only system clipboard.
pub trait Clipboard {
    /// `navigator.clipboard.writeText(text)`
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the host refuses the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard holding the last written text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard: sends text as an OSC 52 escape sequence, which the
/// terminal emulator places on the system clipboard.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
    terminal: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Write escape sequences to `out`. Writes are refused with
    /// [`ClipboardError::Unavailable`] unless `terminal` is true.
    #[must_use]
    pub const fn new(out: W, terminal: bool) -> Self {
        Self { out, terminal }
    }

    /// The underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard over standard output, available when it is a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let out = io::stdout();
        let terminal = out.is_terminal();
        Self::new(out, terminal)
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.terminal {
            return Err(ClipboardError::Unavailable);
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{encoded}\x07")
            .and_then(|()| self.out.flush())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

/// Which strategy was copied last and until when it shows as copied.
///
/// The reset is a deadline checked against the caller's clock rather than a
/// detached timer, so [`CopyFeedback::cancel`] on teardown leaves nothing
/// pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    active: Option<(Strategy, Instant)>,
}

impl CopyFeedback {
    /// Show `strategy` as copied for [`COPIED_INDICATOR`] from `now`.
    /// A newer copy replaces the previous indicator and restarts the window.
    pub fn mark(&mut self, strategy: Strategy, now: Instant) {
        self.active = Some((strategy, now + COPIED_INDICATOR));
    }

    /// The strategy currently shown as copied.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<Strategy> {
        self.active
            .filter(|&(_, deadline)| now < deadline)
            .map(|(strategy, _)| strategy)
    }

    /// Clear the indicator if its window has passed. Returns true when this
    /// call cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self.active.is_some_and(|(_, deadline)| now >= deadline);
        if expired {
            self.active = None;
        }
        expired
    }

    /// Whether a reset is still scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any pending reset.
    pub const fn cancel(&mut self) {
        self.active = None;
    }
}
