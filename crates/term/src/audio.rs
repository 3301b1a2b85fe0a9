//! Audio cues through the terminal bell.

use std::io::{self, Write};

use crate::core::AudioSink;
use crate::types::Cue;

/// Rings the terminal bell: once for food, twice for a crash.
///
/// Write errors are logged and dropped; a missing bell never stalls a tick.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        let bells: &[u8] = match cue {
            Cue::Eat => b"\x07",
            Cue::GameOver => b"\x07\x07",
        };
        let res = self.out.write_all(bells).and_then(|_| self.out.flush());
        if let Err(err) = res {
            tracing::debug!(%err, ?cue, "bell failed");
        }
    }
}
