//! Observable automaton states and the engine-internal phases that refine them.

use std::fmt;

use serde::{Serialize, Serializer};

/// Externally observable automaton state.
///
/// The numeric codes are part of the output contract: they index the four
/// nodes the consumer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// Waiting for (or partway through) a three-way handshake.
    Listen = 0,
    /// Session established; the stack holds `SESSION`.
    Active = 1,
    /// Session torn down cleanly. Terminal.
    Closed = 2,
    /// Protocol violation or detected attack. Terminal and absorbing.
    Trap = 3,
}

impl State {
    /// Returns the wire code for this state.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether no further transitions are accepted from this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Trap)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listen => write!(f, "q0 (Listen)"),
            Self::Active => write!(f, "q1 (Active)"),
            Self::Closed => write!(f, "q2 (Closed)"),
            Self::Trap => write!(f, "TRAP"),
        }
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Engine-internal control phase.
///
/// `Listen` is split into three phases so the engine only needs to remember
/// how far the current connection attempt has progressed. All three report
/// [`State::Listen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Awaiting a SYN.
    Listen,
    /// SYN seen, awaiting SYN-ACK.
    SynReceived,
    /// SYN-ACK seen, awaiting the final ACK.
    SynAckReceived,
    /// Handshake complete.
    Established,
    /// Session closed.
    Closed,
    /// Rejected.
    Trap,
}

impl Phase {
    /// Maps the phase onto the observable state it refines.
    #[must_use]
    pub const fn observable(self) -> State {
        match self {
            Self::Listen | Self::SynReceived | Self::SynAckReceived => State::Listen,
            Self::Established => State::Active,
            Self::Closed => State::Closed,
            Self::Trap => State::Trap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes() {
        assert_eq!(State::Listen.code(), 0);
        assert_eq!(State::Active.code(), 1);
        assert_eq!(State::Closed.code(), 2);
        assert_eq!(State::Trap.code(), 3);
    }

    #[test]
    fn only_closed_and_trap_are_terminal() {
        assert!(!State::Listen.is_terminal());
        assert!(!State::Active.is_terminal());
        assert!(State::Closed.is_terminal());
        assert!(State::Trap.is_terminal());
    }

    #[test]
    fn state_serializes_as_code() {
        assert_eq!(serde_json::to_string(&State::Trap).unwrap(), "3");
    }

    #[test]
    fn listen_refinements_are_observably_listen() {
        for phase in [Phase::Listen, Phase::SynReceived, Phase::SynAckReceived] {
            assert_eq!(phase.observable(), State::Listen);
        }
        assert_eq!(Phase::Established.observable(), State::Active);
    }
}
