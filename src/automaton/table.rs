//! The transition table, as data.
//!
//! Rows are evaluated in order and the first match wins, so specific rows
//! come before the trap rows and the wildcard row is last. The same table
//! drives every scenario; scenarios differ only in the packets they feed.

use serde::{Serialize, Serializer};

use super::packet::Packet;
use super::stack::{StackOp, StackSymbol};
use super::state::Phase;

/// Number of half-open aborts (SYN answered by RST) that constitutes a scan.
pub const HALF_OPEN_SCAN_THRESHOLD: u8 = 2;

/// Pattern over a single component of the transition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<T> {
    /// Matches exactly this value.
    Exactly(T),
    /// Matches anything.
    Any,
}

impl<T: PartialEq> Match<T> {
    /// Whether `value` satisfies this pattern.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Exactly(expected) => expected == value,
            Self::Any => true,
        }
    }
}

// Wildcards render as "*" in the `table` listing.
impl<T: Serialize> Serialize for Match<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Exactly(value) => value.serialize(serializer),
            Self::Any => serializer.serialize_str("*"),
        }
    }
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Short rule name, used for tracing and the `table` listing.
    pub rule: &'static str,
    /// Phase the engine must be in.
    pub phase: Match<Phase>,
    /// Required stack top.
    pub stack_top: Match<StackSymbol>,
    /// Required input packet.
    pub packet: Match<Packet>,
    /// Phase entered when the row fires.
    pub next: Phase,
    /// Stack operation applied when the row fires.
    pub op: StackOp,
    /// Whether firing this row counts as a half-open abort.
    pub half_open: bool,
}

impl Transition {
    /// Whether this row applies to the given configuration.
    #[must_use]
    pub fn matches(&self, phase: Phase, stack_top: StackSymbol, packet: Packet) -> bool {
        self.phase.matches(&phase)
            && self.stack_top.matches(&stack_top)
            && self.packet.matches(&packet)
    }
}

const fn row(
    rule: &'static str,
    phase: Phase,
    stack_top: StackSymbol,
    packet: Packet,
    next: Phase,
    op: StackOp,
) -> Transition {
    Transition {
        rule,
        phase: Match::Exactly(phase),
        stack_top: Match::Exactly(stack_top),
        packet: Match::Exactly(packet),
        next,
        op,
        half_open: false,
    }
}

const fn abort(rule: &'static str, phase: Phase) -> Transition {
    Transition {
        half_open: true,
        ..row(rule, phase, StackSymbol::Z0, Packet::Rst, Phase::Listen, StackOp::None)
    }
}

const fn trap_on(rule: &'static str, phase: Phase, packet: Packet) -> Transition {
    Transition {
        rule,
        phase: Match::Exactly(phase),
        stack_top: Match::Any,
        packet: Match::Exactly(packet),
        next: Phase::Trap,
        op: StackOp::None,
        half_open: false,
    }
}

/// The built-in handshake automaton.
pub static HANDSHAKE_TABLE: &[Transition] = &[
    row(
        "syn",
        Phase::Listen,
        StackSymbol::Z0,
        Packet::Syn,
        Phase::SynReceived,
        StackOp::None,
    ),
    row(
        "syn-ack",
        Phase::SynReceived,
        StackSymbol::Z0,
        Packet::SynAck,
        Phase::SynAckReceived,
        StackOp::None,
    ),
    row(
        "handshake-ack",
        Phase::SynAckReceived,
        StackSymbol::Z0,
        Packet::Ack,
        Phase::Established,
        StackOp::PushSession,
    ),
    abort("syn-rst", Phase::SynReceived),
    abort("syn-ack-rst", Phase::SynAckReceived),
    row(
        "data-ack",
        Phase::Established,
        StackSymbol::Session,
        Packet::Ack,
        Phase::Established,
        StackOp::None,
    ),
    row(
        "data-psh",
        Phase::Established,
        StackSymbol::Session,
        Packet::Psh,
        Phase::Established,
        StackOp::None,
    ),
    row(
        "fin",
        Phase::Established,
        StackSymbol::Session,
        Packet::Fin,
        Phase::Closed,
        StackOp::PopSession,
    ),
    row(
        "fin-ack",
        Phase::Established,
        StackSymbol::Session,
        Packet::FinAck,
        Phase::Closed,
        StackOp::PopSession,
    ),
    row(
        "reset",
        Phase::Established,
        StackSymbol::Session,
        Packet::Rst,
        Phase::Closed,
        StackOp::PopSession,
    ),
    trap_on("ack-without-syn", Phase::Listen, Packet::Ack),
    trap_on("ack-without-syn-ack", Phase::SynReceived, Packet::Ack),
    Transition {
        rule: "no-matching-rule",
        phase: Match::Any,
        stack_top: Match::Any,
        packet: Match::Any,
        next: Phase::Trap,
        op: StackOp::None,
        half_open: false,
    },
];

/// Finds the first row matching the configuration.
#[must_use]
pub fn lookup(
    table: &'static [Transition],
    phase: Phase,
    stack_top: StackSymbol,
    packet: Packet,
) -> Option<&'static Transition> {
    table.iter().find(|t| t.matches(phase, stack_top, packet))
}
