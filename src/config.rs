//! Run configuration.
//!
//! Settings that shape a run without changing what it computes. The
//! defaults produce exactly the boundary record stream: no pacing and no
//! lifecycle records.

use std::time::Duration;

use crate::cli::args::RunArgs;

/// Options for a single scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Pause between consumed packets. Affects timing only, never output.
    pub step_delay: Duration,

    /// Emit `packet_start` before each packet and `done` after the run.
    pub lifecycle_events: bool,
}

impl RunConfig {
    /// Builds a configuration from `run` arguments.
    #[must_use]
    pub const fn from_args(args: &RunArgs) -> Self {
        Self {
            step_delay: Duration::from_millis(args.step_delay_ms),
            lifecycle_events: args.lifecycle,
        }
    }
}
