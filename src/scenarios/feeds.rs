//! Static packet feeds for the built-in scenarios.
//!
//! Feeds may carry packets past the point where the automaton terminates;
//! those are never consumed and never reported.

use crate::automaton::Packet;

use super::FeedEntry;

pub(super) static WEB_BROWSING: &[FeedEntry] = &[
    FeedEntry::benign(
        Packet::Syn,
        "Client SYN to port 80: connection requested.",
        "SYN read in q0 with Z0 on top. The engine notes the open attempt and waits for SYN-ACK; the stack is unchanged.",
    ),
    FeedEntry::benign(
        Packet::SynAck,
        "Server answers with SYN-ACK.",
        "SYN-ACK matches the pending SYN. Still q0, now awaiting the final ACK; stack remains Z0.",
    ),
    FeedEntry::benign(
        Packet::Ack,
        "Client ACK: handshake complete.",
        "ACK completes the handshake; the stack now holds a SESSION token representing the established state. q0 -> q1.",
    ),
    FeedEntry::benign(
        Packet::Psh,
        "HTTP GET / sent over the session.",
        "Data segment read in q1. Stack top is SESSION, so traffic is inside an established session; remain in q1.",
    ),
    FeedEntry::benign(
        Packet::Ack,
        "Server acknowledges the request.",
        "In-session ACK. The token stays on the stack; no state change.",
    ),
    FeedEntry::benign(
        Packet::Psh,
        "HTTP 200 response with the page body.",
        "Response data read in q1 with SESSION on top; remain in q1.",
    ),
    FeedEntry::benign(
        Packet::Fin,
        "Client closes the connection.",
        "FIN with SESSION on top: pop the token and move to q2. The stack is back to Z0 and the run is accepted.",
    ),
];

pub(super) static SSH_SESSION: &[FeedEntry] = &[
    FeedEntry::benign(
        Packet::Syn,
        "Client SYN to port 22.",
        "SYN read in q0 with Z0 on top. Awaiting SYN-ACK; no stack operation.",
    ),
    FeedEntry::benign(
        Packet::SynAck,
        "sshd answers with SYN-ACK.",
        "SYN-ACK follows the SYN. Still q0, awaiting ACK; stack remains Z0.",
    ),
    FeedEntry::benign(
        Packet::Ack,
        "Client ACK: TCP session established.",
        "Final ACK of the three-way handshake. Push SESSION; q0 -> q1.",
    ),
    FeedEntry::benign(
        Packet::Psh,
        "Version banner and key exchange.",
        "Key-exchange payload in q1. The SESSION token vouches for the connection; remain in q1.",
    ),
    FeedEntry::benign(
        Packet::Psh,
        "Encrypted command sent.",
        "Encrypted data inside the established session. Stack top SESSION verified; remain in q1.",
    ),
    FeedEntry::benign(
        Packet::Ack,
        "Server acknowledges the command output.",
        "In-session ACK; the stack is unchanged.",
    ),
    FeedEntry::benign(
        Packet::FinAck,
        "Client logs out: FIN-ACK.",
        "FIN-ACK with SESSION on top: pop the token and move to q2. Clean teardown.",
    ),
];

pub(super) static SESSION_HIJACK: &[FeedEntry] = &[
    FeedEntry::benign(
        Packet::Syn,
        "Victim SYN to port 22.",
        "SYN read in q0. A legitimate open attempt is pending; the engine awaits SYN-ACK.",
    ),
    FeedEntry::malicious(
        Packet::Ack,
        "Spoofed ACK with a predicted sequence number.",
        "ACK received with no matching SYN-ACK: sequence-prediction/hijack signature. No rule accepts it; q0 -> TRAP, and SESSION was never pushed.",
    ),
    FeedEntry::malicious(
        Packet::Psh,
        "Injected root command.",
        "Data from the hijacker. Never reached: the automaton is already in TRAP.",
    ),
];

pub(super) static NMAP_SCAN: &[FeedEntry] = &[
    FeedEntry::malicious(
        Packet::Syn,
        "Scanner SYN probe to port 22.",
        "SYN read in q0. On its own this is a normal open attempt; the engine awaits SYN-ACK.",
    ),
    FeedEntry::benign(
        Packet::SynAck,
        "Port 22 open: server answers SYN-ACK.",
        "SYN-ACK follows the SYN. Still q0, awaiting the final ACK.",
    ),
    FeedEntry::malicious(
        Packet::Rst,
        "Scanner resets instead of completing the handshake.",
        "RST where the final ACK belongs: a half-open abort. Back to q0 with Z0 alone on the stack; one abort recorded.",
    ),
    FeedEntry::malicious(
        Packet::Syn,
        "Scanner SYN probe to port 80.",
        "Another bare SYN immediately after an abort. The engine awaits SYN-ACK.",
    ),
    FeedEntry::malicious(
        Packet::Rst,
        "Scanner resets again.",
        "Second SYN immediately followed by RST: repeated half-open aborts are the scan signature. q0 -> TRAP.",
    ),
    FeedEntry::malicious(
        Packet::Syn,
        "Scanner SYN probe to port 443.",
        "Never reached: the scan was trapped on the previous packet.",
    ),
];
