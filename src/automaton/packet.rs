//! Packet vocabulary consumed by the automaton.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single input symbol: the flag set carried by one TCP segment.
///
/// The vocabulary is closed. Combined flag sets that matter to the handshake
/// (`SYN-ACK`, `FIN-ACK`) are symbols of their own rather than bit unions,
/// since the transition table matches on whole packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packet {
    /// Connection request.
    Syn,
    /// Server's answer to a SYN.
    SynAck,
    /// Acknowledgement.
    Ack,
    /// Abortive reset.
    Rst,
    /// Graceful close request.
    Fin,
    /// Close request piggybacked on an acknowledgement.
    FinAck,
    /// Data segment (push).
    Psh,
    /// Out-of-band probe that no rule accepts.
    Probe,
}

impl Packet {
    /// Every packet symbol, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Syn,
        Self::SynAck,
        Self::Ack,
        Self::Rst,
        Self::Fin,
        Self::FinAck,
        Self::Psh,
        Self::Probe,
    ];

    /// Returns the wire label used in emitted records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syn => "SYN",
            Self::SynAck => "SYN-ACK",
            Self::Ack => "ACK",
            Self::Rst => "RST",
            Self::Fin => "FIN",
            Self::FinAck => "FIN-ACK",
            Self::Psh => "PSH",
            Self::Probe => "PROBE",
        }
    }

    /// Whether this packet closes an established session.
    #[must_use]
    pub const fn is_close(self) -> bool {
        matches!(self, Self::Fin | Self::FinAck | Self::Rst)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Packet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
