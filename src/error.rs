//! Error types for `handshake-pda`
//!
//! A small hierarchy: selector problems are user-facing, engine errors are
//! contract violations in the transition table or the orchestrator, and I/O
//! errors mean the consumer on the other end of stdout has gone away.

use thiserror::Error;

use crate::automaton::{Packet, Phase, StackSymbol, State};

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes.
///
/// These codes follow Unix conventions; `USAGE_ERROR` matches `EX_USAGE`.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution (run reached `Closed`, `Trap`, or fed every packet)
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Invalid or missing scenario selector
    pub const SELECTOR_ERROR: i32 = 2;

    /// I/O error (event consumer gone, stdin unreadable)
    pub const IO_ERROR: i32 = 3;

    /// Transition engine contract violation
    pub const ENGINE_ERROR: i32 = 5;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `handshake-pda` operations.
#[derive(Debug, Error)]
pub enum HandshakePdaError {
    /// Scenario selection failed
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// Transition engine contract violation
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HandshakePdaError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Scenario(_) => ExitCode::SELECTOR_ERROR,
            Self::Engine(_) => ExitCode::ENGINE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Scenario Errors
// ============================================================================

/// Scenario selector errors.
///
/// The engine never falls back to a default scenario; any selector that does
/// not name one of the built-ins is refused.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Selector did not name a built-in scenario
    #[error("unknown scenario '{input}'{}", suggestion_hint(.suggestion.as_deref()))]
    UnknownSelector {
        /// The selector as provided
        input: String,
        /// Closest scenario name, if any is near enough
        suggestion: Option<String>,
    },

    /// No selector was provided on the command line or stdin
    #[error("no scenario selector provided (expected 1-4 or a scenario name)")]
    MissingSelector,
}

fn suggestion_hint(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

// ============================================================================
// Engine Errors
// ============================================================================

/// Transition engine contract violations.
///
/// All scenario feeds are static, so every one of these is a bug in the
/// table or the orchestrator rather than a runtime condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `step` was called after the automaton reached a terminal state
    #[error("automaton already terminated in {state}")]
    Terminated {
        /// The terminal state that was reached
        state: State,
    },

    /// No row of the transition table matched
    #[error("no transition for {packet} in phase {phase:?} with stack top {stack_top}")]
    NoTransition {
        /// Phase the engine was in
        phase: Phase,
        /// Stack top at the time
        stack_top: StackSymbol,
        /// Packet that could not be consumed
        packet: Packet,
    },

    /// A stack operation would break the Z0/SESSION discipline
    #[error("stack violation: {0}")]
    StackViolation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping() {
        let cases: Vec<(HandshakePdaError, i32)> = vec![
            (
                ScenarioError::MissingSelector.into(),
                ExitCode::SELECTOR_ERROR,
            ),
            (
                EngineError::Terminated {
                    state: State::Trap,
                }
                .into(),
                ExitCode::ENGINE_ERROR,
            ),
            (
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }

    #[test]
    fn unknown_selector_includes_suggestion() {
        let err = ScenarioError::UnknownSelector {
            input: "nmap-scna".to_owned(),
            suggestion: Some("nmap-scan".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "unknown scenario 'nmap-scna' (did you mean 'nmap-scan'?)"
        );
    }

    #[test]
    fn unknown_selector_without_suggestion() {
        let err = ScenarioError::UnknownSelector {
            input: "9".to_owned(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown scenario '9'");
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::NoTransition {
            phase: Phase::Listen,
            stack_top: StackSymbol::Z0,
            packet: Packet::Probe,
        };
        assert_eq!(
            err.to_string(),
            "no transition for PROBE in phase Listen with stack top Z0"
        );
    }
}
