//! Logging initialization.
//!
//! Diagnostics go through `tracing` to stderr in human-readable or JSON
//! form. Stdout is reserved for the event stream, so nothing here may
//! write to it.
//!
//! Verbosity flags raise the level for this crate's own targets only;
//! dependencies stay at `warn`. `HANDSHAKE_PDA_LOG_LEVEL` replaces the
//! computed filter entirely.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "HANDSHAKE_PDA_LOG_LEVEL";

/// Target prefix of every span and event this crate emits.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Builds the filter directive for a `-v` count.
///
/// Zero keeps everything at `warn`, which still surfaces trap entries.
/// Each `-v` raises only the engine's targets: info shows run start and
/// finish, debug every transition, trace everything.
#[must_use]
pub fn filter_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_owned(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,{CRATE_TARGET}={level}")
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    // Targets are shown from -vv up.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(use_ansi(color)).try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_default_is_global_warn() {
        assert_eq!(filter_directive(0), "warn");
    }

    #[test]
    fn verbosity_scopes_to_engine_target() {
        assert_eq!(filter_directive(1), "warn,handshake_pda=info");
        assert_eq!(filter_directive(2), "warn,handshake_pda=debug");
        assert_eq!(filter_directive(3), "warn,handshake_pda=trace");
        assert_eq!(filter_directive(u8::MAX), "warn,handshake_pda=trace");
    }

    #[test]
    fn directives_parse_as_filters() {
        for verbosity in 0..=3 {
            assert!(EnvFilter::try_new(filter_directive(verbosity)).is_ok());
        }
    }

    #[test]
    fn explicit_color_choices() {
        assert!(use_ansi(ColorChoice::Always));
        assert!(!use_ansi(ColorChoice::Never));
    }
}
