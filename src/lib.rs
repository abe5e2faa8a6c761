//! `handshake-pda` - TCP three-way handshake as a pushdown automaton
//!
//! A deterministic engine that feeds scripted packet sequences through a
//! handshake automaton with a `Z0`/`SESSION` stack, flags attack steps, and
//! streams one JSON record per step for visual front-ends.

pub mod automaton;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod orchestrator;
pub mod scenarios;
