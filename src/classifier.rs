//! Attack classification for emitted steps.

use crate::automaton::State;
use crate::scenarios::BuiltinScenario;

/// Decides whether a step is flagged as an attack.
///
/// A step is an attack when it lands in `Trap`, or when the scenario is
/// adversarial and the packet at `step_index` is one of its designated
/// hostile packets.
#[must_use]
pub fn classify(scenario: &BuiltinScenario, next_state: State, step_index: usize) -> bool {
    if next_state == State::Trap {
        return true;
    }

    scenario.is_adversarial() && scenario.entry(step_index).is_some_and(|e| e.malicious)
}
