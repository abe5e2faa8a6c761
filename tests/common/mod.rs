//! Shared integration-test harness for running the `handshake-pda` binary as
//! a child process and decoding its JSON-lines output.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Finished `handshake-pda` invocation.
pub struct HandshakePdaProcess;

impl HandshakePdaProcess {
    /// Runs the binary with `args`, feeding `stdin` and waiting for exit.
    ///
    /// Run-shaping environment variables are cleared so the host cannot
    /// change the output under test.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(args: &[&str], stdin: &str) -> Output {
        let bin = env!("CARGO_BIN_EXE_handshake-pda");
        let mut child = Command::new(bin)
            .args(args)
            .env_remove("HANDSHAKE_PDA_STEP_DELAY_MS")
            .env_remove("HANDSHAKE_PDA_LIFECYCLE")
            .env_remove("HANDSHAKE_PDA_LOG_LEVEL")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn handshake-pda");

        {
            // Commands that never read stdin may exit first; EPIPE is fine.
            let mut pipe = child.stdin.take().expect("stdin not captured");
            let _ = pipe.write_all(stdin.as_bytes());
        }

        child.wait_with_output().expect("failed to wait for handshake-pda")
    }

    /// Runs a command that takes no stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::run(args, "")
    }

    /// Runs a scenario by writing `selector` to stdin, the way front-ends do.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_scenario(selector: &str) -> Output {
        Self::run(&["--quiet"], &format!("{selector}\n"))
    }
}

/// Decodes every stdout line as a JSON record.
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn records(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("invalid JSON record: {e}\nline: {line}"))
        })
        .collect()
}

/// Only the `step` records.
#[must_use]
pub fn steps(records: &[Value]) -> Vec<&Value> {
    records.iter().filter(|r| r["type"] == "step").collect()
}

/// Whether a record's `stackTop` reports a session token.
#[must_use]
pub fn has_session(record: &Value) -> bool {
    record["stackTop"].as_str().is_some_and(|top| top.contains('S'))
}
