//! Structured event stream.
//!
//! Each record is serialized as a single JSON line and flushed immediately,
//! so a consumer reading the pipe can render every step as it happens.

use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::automaton::{Packet, StackSymbol, State};
use crate::error::HandshakePdaError;

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A record emitted during a scenario run.
///
/// Tagged with `"type"` when serialized. `Init` and `Step` form the default
/// stream; `PacketStart` and `Done` appear only when lifecycle records are
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Scenario loaded; emitted once, before any packet.
    Init {
        /// Scenario description.
        desc: &'static str,
    },

    /// One packet consumed by a transition.
    #[serde(rename_all = "camelCase")]
    Step {
        /// State after the transition.
        state: State,
        /// Packet that was consumed.
        packet: Packet,
        /// One-line log text.
        desc: &'static str,
        /// Protocol-theoretic explanation.
        analysis: &'static str,
        /// Stack top after any stack operation.
        stack_top: StackSymbol,
        /// Whether the step is flagged as an attack.
        is_attack: bool,
    },

    /// A packet is about to be fed to the automaton.
    #[serde(rename_all = "camelCase")]
    PacketStart {
        /// Packet about to be consumed.
        packet: Packet,
        /// State before the transition.
        state: State,
        /// Stack top before the transition.
        stack_top: StackSymbol,
    },

    /// The run has finished.
    Done {
        /// Final state.
        state: State,
        /// Overall verdict.
        verdict: Verdict,
        /// Number of step records emitted.
        steps: usize,
    },
}

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Session opened and closed cleanly.
    Validated,
    /// The automaton trapped.
    Violation,
    /// The feed ran out before a terminal state.
    Incomplete,
}

impl Verdict {
    /// Derives the verdict from the final state.
    #[must_use]
    pub const fn from_state(state: State) -> Self {
        match state {
            State::Closed => Self::Validated,
            State::Trap => Self::Violation,
            State::Listen | State::Active => Self::Incomplete,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Scenario name.
    pub scenario: &'static str,
    /// Final observable state.
    pub final_state: State,
    /// Number of packets consumed.
    pub steps: usize,
    /// Number of steps flagged as attacks.
    pub attacks: usize,
    /// Overall verdict.
    pub verdict: Verdict,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// JSONL event writer.
///
/// Every [`emit`](Self::emit) writes one line and flushes. Write failures
/// are returned; a vanished consumer ends the run.
pub struct EventEmitter {
    writer: BufWriter<Box<dyn Write + Send>>,
    count: u64,
}

// Box<dyn Write> is not Debug.
impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl EventEmitter {
    /// Creates an emitter that writes to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            count: 0,
        }
    }

    /// Creates an emitter that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Emits an event as a single JSONL line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the line cannot be written or flushed, or a
    /// JSON error if the event cannot be serialized.
    pub fn emit(&mut self, event: &Event) -> Result<(), HandshakePdaError> {
        let line = serde_json::to_string(event)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        self.count += 1;
        Ok(())
    }

    /// Returns the number of events emitted so far.
    #[must_use]
    pub const fn event_count(&self) -> u64 {
        self.count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
