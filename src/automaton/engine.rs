//! Pushdown automaton engine.
//!
//! The `PushdownAutomaton` owns the current phase, the stack, and the
//! half-open abort counter. That is the whole of its memory: each call to
//! [`step`](PushdownAutomaton::step) consumes one packet and forgets it.

use tracing::{debug, warn};

use crate::error::EngineError;

use super::packet::Packet;
use super::stack::{Stack, StackOp, StackSymbol};
use super::state::{Phase, State};
use super::table::{self, HALF_OPEN_SCAN_THRESHOLD, HANDSHAKE_TABLE, Transition};

/// Rule name reported when repeated half-open aborts redirect into `Trap`.
pub const HALF_OPEN_SCAN_RULE: &str = "half-open-scan";

/// Result of consuming one packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Observable state after the transition.
    pub state: State,
    /// Internal phase after the transition.
    pub phase: Phase,
    /// Stack operation that was applied.
    pub op: StackOp,
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Stack top after the operation.
    pub stack_top: StackSymbol,
}

/// Pushdown automaton over the handshake packet vocabulary.
#[derive(Debug, Clone)]
pub struct PushdownAutomaton {
    table: &'static [Transition],
    phase: Phase,
    stack: Stack,
    half_open: u8,
}

impl PushdownAutomaton {
    /// Creates an automaton over the built-in handshake table, in `Listen`
    /// with `Z0` on the stack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(HANDSHAKE_TABLE)
    }

    /// Creates an automaton over an arbitrary transition table.
    #[must_use]
    pub fn with_table(table: &'static [Transition]) -> Self {
        Self {
            table,
            phase: Phase::Listen,
            stack: Stack::new(),
            half_open: 0,
        }
    }

    /// Returns the observable state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.phase.observable()
    }

    /// Returns the internal phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the stack.
    #[must_use]
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Returns the number of half-open aborts seen so far.
    #[must_use]
    pub const fn half_open_aborts(&self) -> u8 {
        self.half_open
    }

    /// Whether the automaton has reached `Closed` or `Trap`.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.state().is_terminal()
    }

    /// Consumes one packet.
    ///
    /// Looks up the first matching row, applies its stack operation, and
    /// moves to its phase. A half-open abort that reaches
    /// [`HALF_OPEN_SCAN_THRESHOLD`] is redirected into `Trap` instead of
    /// returning to `Listen`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Terminated`] if the automaton is already in a
    ///   terminal state.
    /// - [`EngineError::NoTransition`] if no row matches (only possible with
    ///   a table that lacks a wildcard row).
    /// - [`EngineError::StackViolation`] if the row's stack operation is
    ///   inconsistent with the stack.
    pub fn step(&mut self, packet: Packet) -> Result<Outcome, EngineError> {
        if self.is_terminated() {
            return Err(EngineError::Terminated {
                state: self.state(),
            });
        }

        let stack_top = self.stack.top();
        let transition = table::lookup(self.table, self.phase, stack_top, packet).ok_or(
            EngineError::NoTransition {
                phase: self.phase,
                stack_top,
                packet,
            },
        )?;

        // Half-open rows never carry a stack op, so the op applies unchanged
        // when a scan redirects the row into Trap.
        self.stack.apply(transition.op)?;

        let mut next = transition.next;
        let mut rule = transition.rule;
        if transition.half_open {
            self.half_open = self.half_open.saturating_add(1);
            if self.half_open >= HALF_OPEN_SCAN_THRESHOLD {
                next = Phase::Trap;
                rule = HALF_OPEN_SCAN_RULE;
            }
        }

        debug!(
            %packet,
            rule,
            from = ?self.phase,
            to = ?next,
            op = ?transition.op,
            stack_top = %self.stack.top(),
            "transition"
        );
        if next == Phase::Trap {
            warn!(%packet, rule, from = ?self.phase, "automaton trapped");
        }

        self.phase = next;

        Ok(Outcome {
            state: next.observable(),
            phase: next,
            op: transition.op,
            rule,
            stack_top: self.stack.top(),
        })
    }
}

impl Default for PushdownAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
