//! CLI argument definitions
//!
//! All Clap derive structs for `handshake-pda` command-line parsing.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::scenarios::ScenarioCategory;

// ============================================================================
// Root CLI
// ============================================================================

/// TCP three-way handshake as a pushdown automaton.
///
/// Without a subcommand, runs a scenario; the selector is read from stdin
/// when it is not given as an argument.
#[derive(Parser, Debug)]
#[command(name = "handshake-pda", author, version, about)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the implicit `run`.
    #[command(flatten)]
    pub run: RunArgs,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all diagnostics.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control for diagnostics.
    #[arg(long, default_value = "auto", global = true, env = "HANDSHAKE_PDA_COLOR")]
    pub color: ColorChoice,

    /// Diagnostic log format (stderr).
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a scenario and stream its records as JSON lines on stdout.
    Run(RunArgs),

    /// List the built-in scenarios.
    List(ListArgs),

    /// Print the transition table.
    Table(TableArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Run / List / Table
// ============================================================================

/// Arguments for `run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Scenario id (1-4) or name. Read from stdin when omitted.
    pub selector: Option<String>,

    /// Pause between packets, in milliseconds.
    #[arg(long, default_value_t = 0, env = "HANDSHAKE_PDA_STEP_DELAY_MS")]
    pub step_delay_ms: u64,

    /// Also emit `packet_start` and `done` records.
    #[arg(long, env = "HANDSHAKE_PDA_LIFECYCLE")]
    pub lifecycle: bool,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list scenarios in this category.
    #[arg(long)]
    pub category: Option<ScenarioCategory>,

    /// Filter by tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `table`.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
