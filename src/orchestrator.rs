//! Scenario orchestration.
//!
//! Drives one scenario feed through a fresh automaton, classifying and
//! emitting each consumed packet, and stops at the first terminal state.

use std::thread;

use tracing::{debug, info};

use crate::automaton::PushdownAutomaton;
use crate::classifier::classify;
use crate::config::RunConfig;
use crate::error::HandshakePdaError;
use crate::observability::{Event, EventEmitter, RunSummary, Verdict};
use crate::scenarios::BuiltinScenario;

/// Runs `scenario` and writes its records to `emitter`.
///
/// Emits one `init` record, then one `step` record per consumed packet.
/// Feeding stops once the automaton reaches `Closed` or `Trap`; remaining
/// packets are left unconsumed and unreported.
///
/// # Errors
///
/// Returns an error if the emitter cannot write (the consumer is gone) or if
/// the engine rejects a step, which indicates a broken transition table.
pub fn run_scenario(
    scenario: &'static BuiltinScenario,
    emitter: &mut EventEmitter,
    config: &RunConfig,
) -> Result<RunSummary, HandshakePdaError> {
    info!(
        scenario = scenario.name,
        id = scenario.id,
        packets = scenario.feed.len(),
        "starting scenario"
    );

    emitter.emit(&Event::Init {
        desc: scenario.description,
    })?;

    let mut pda = PushdownAutomaton::new();
    let mut steps = 0;
    let mut attacks = 0;

    for (index, entry) in scenario.feed.iter().enumerate() {
        if index > 0 && !config.step_delay.is_zero() {
            thread::sleep(config.step_delay);
        }

        if config.lifecycle_events {
            emitter.emit(&Event::PacketStart {
                packet: entry.packet,
                state: pda.state(),
                stack_top: pda.stack().top(),
            })?;
        }

        let outcome = pda.step(entry.packet)?;
        let is_attack = classify(scenario, outcome.state, index);

        emitter.emit(&Event::Step {
            state: outcome.state,
            packet: entry.packet,
            desc: entry.desc,
            analysis: entry.analysis,
            stack_top: outcome.stack_top,
            is_attack,
        })?;

        steps += 1;
        if is_attack {
            attacks += 1;
        }

        if pda.is_terminated() {
            debug!(
                remaining = scenario.feed.len() - steps,
                "terminal state reached; remaining packets dropped"
            );
            break;
        }
    }

    let final_state = pda.state();
    let verdict = Verdict::from_state(final_state);

    if config.lifecycle_events {
        emitter.emit(&Event::Done {
            state: final_state,
            verdict,
            steps,
        })?;
    }

    info!(
        scenario = scenario.name,
        final_state = %final_state,
        steps,
        attacks,
        ?verdict,
        "scenario finished"
    );

    Ok(RunSummary {
        scenario: scenario.name,
        final_state,
        steps,
        attacks,
        verdict,
    })
}
