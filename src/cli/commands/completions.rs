//! Shell completion generation
//!
//! Generates shell completion scripts for supported shells.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell as ClapShell;

use crate::cli::args::{Cli, CompletionsArgs, Shell};
use crate::error::HandshakePdaError;

/// Generate and print a shell completion script to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be flushed.
pub fn run(args: &CompletionsArgs) -> Result<(), HandshakePdaError> {
    let shell = match args.shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    let mut cmd = Cli::command();
    let mut out = io::stdout().lock();
    clap_complete::generate(shell, &mut cmd, "handshake-pda", &mut out);
    out.flush()?;
    Ok(())
}
