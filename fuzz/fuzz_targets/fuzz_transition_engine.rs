#![no_main]

use handshake_pda::automaton::{Packet, PushdownAutomaton, StackSymbol, State};
use handshake_pda::error::EngineError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut pda = PushdownAutomaton::new();

    for byte in data {
        let packet = Packet::ALL[usize::from(*byte) % Packet::ALL.len()];
        let was_terminal = pda.is_terminated();
        let before = pda.state();

        match pda.step(packet) {
            Ok(outcome) => {
                assert!(!was_terminal);
                assert_eq!(outcome.state, pda.state());
                if pda.stack().has_session() {
                    assert!(
                        outcome.state == State::Active
                            || (outcome.state == State::Trap && before == State::Active)
                    );
                }
            }
            Err(EngineError::Terminated { state }) => {
                assert!(was_terminal);
                assert_eq!(state, pda.state());
            }
            Err(e) => panic!("built-in table violated its contract: {e}"),
        }

        let stack = pda.stack();
        assert_eq!(stack.symbols()[0], StackSymbol::Z0);
        assert!(matches!(stack.depth(), 1 | 2));
        if pda.state() == State::Active {
            assert!(stack.has_session());
        }
    }
});
