//! Observability module
//!
//! The JSONL event stream consumed by front-ends, and `tracing`-based
//! diagnostics on stderr.

pub mod events;
pub mod logging;

pub use events::{Event, EventEmitter, RunSummary, Verdict};
pub use logging::{LogFormat, init_logging};
