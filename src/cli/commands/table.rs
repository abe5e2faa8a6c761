//! Transition table command
//!
//! Prints the built-in transition table in evaluation order.

use std::fmt;
use std::io::{self, Write};

use crate::automaton::{
    HALF_OPEN_SCAN_RULE, HALF_OPEN_SCAN_THRESHOLD, HANDSHAKE_TABLE, Match, StackOp,
};
use crate::cli::args::{OutputFormat, TableArgs};
use crate::error::HandshakePdaError;

struct Cell<'a, T>(&'a Match<T>);

impl<T: fmt::Display> fmt::Display for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Match::Exactly(value) => f.pad(&value.to_string()),
            Match::Any => f.pad("*"),
        }
    }
}

const fn op_label(op: StackOp) -> &'static str {
    match op {
        StackOp::None => "",
        StackOp::PushSession => "push SESSION",
        StackOp::PopSession => "pop SESSION",
    }
}

/// Print the transition table.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn run(args: &TableArgs) -> Result<(), HandshakePdaError> {
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(HANDSHAKE_TABLE)?)?;
        }
        OutputFormat::Human => {
            writeln!(
                out,
                "{:<3} {:<20} {:<16} {:<8} {:<8} {:<16} {}",
                "#", "RULE", "PHASE", "TOP", "PACKET", "NEXT", "STACK"
            )?;
            for (i, t) in HANDSHAKE_TABLE.iter().enumerate() {
                let phase = match t.phase {
                    Match::Exactly(p) => format!("{p:?}"),
                    Match::Any => "*".to_owned(),
                };
                let next = format!("{:?}", t.next);
                let note = if t.half_open {
                    "half-open abort"
                } else {
                    op_label(t.op)
                };
                writeln!(
                    out,
                    "{:<3} {:<20} {:<16} {:<8} {:<8} {:<16} {}",
                    i + 1,
                    t.rule,
                    phase,
                    Cell(&t.stack_top),
                    Cell(&t.packet),
                    next,
                    note,
                )?;
            }
            writeln!(
                out,
                "\nHalf-open abort #{HALF_OPEN_SCAN_THRESHOLD} diverts to Trap (rule {HALF_OPEN_SCAN_RULE})."
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
