//! TCP handshake pushdown automaton
//!
//! Packet vocabulary, states, the Z0/SESSION stack, the transition table,
//! and the engine that walks it one packet at a time.

pub mod engine;
pub mod packet;
pub mod stack;
pub mod state;
pub mod table;

pub use engine::{HALF_OPEN_SCAN_RULE, Outcome, PushdownAutomaton};
pub use packet::Packet;
pub use stack::{Stack, StackOp, StackSymbol};
pub use state::{Phase, State};
pub use table::{HALF_OPEN_SCAN_THRESHOLD, HANDSHAKE_TABLE, Match, Transition};
