//! Scenario run command
//!
//! Resolves the selector, then streams the scenario's records to stdout.

use std::io::{self, BufRead};

use tracing::debug;

use crate::cli::args::RunArgs;
use crate::config::RunConfig;
use crate::error::HandshakePdaError;
use crate::observability::EventEmitter;
use crate::orchestrator::run_scenario;
use crate::scenarios;

/// Run one scenario.
///
/// The selector comes from the argument when present, otherwise from the
/// first non-blank line of stdin.
///
/// # Errors
///
/// Returns a selector error before anything is written to stdout, or an
/// I/O error if stdout is closed mid-run.
pub fn run(args: &RunArgs) -> Result<(), HandshakePdaError> {
    let selector = match &args.selector {
        Some(selector) => selector.clone(),
        None => read_selector(io::stdin().lock())?,
    };

    let scenario = scenarios::resolve(&selector)?;
    let config = RunConfig::from_args(args);
    debug!(?config, scenario = scenario.name, "resolved run");

    let mut emitter = EventEmitter::stdout();
    let summary = run_scenario(scenario, &mut emitter, &config)?;
    debug!(records = emitter.event_count(), ?summary.verdict, "run complete");

    Ok(())
}

/// Reads the selector from `reader`, skipping blank lines.
///
/// Returns an empty string at end of input; resolution rejects it.
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_selector<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(String::new());
        }
        if !line.trim().is_empty() {
            return Ok(line.trim().to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_line() {
        assert_eq!(read_selector("3\n4\n".as_bytes()).unwrap(), "3");
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        assert_eq!(read_selector("\n  \n  nmap-scan \n".as_bytes()).unwrap(), "nmap-scan");
    }

    #[test]
    fn accepts_missing_newline() {
        assert_eq!(read_selector("2".as_bytes()).unwrap(), "2");
    }

    #[test]
    fn empty_input_yields_empty_selector() {
        assert_eq!(read_selector("".as_bytes()).unwrap(), "");
        assert_eq!(read_selector("\n\n".as_bytes()).unwrap(), "");
    }
}
