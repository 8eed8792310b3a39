//! Property-based tests: dice conservation survives any message sequence.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::player::PlayerId;
use crate::domain::rules::{GameRules, DICE_PER_PLAYER};
use crate::domain::state::GameState;

#[derive(Debug, Clone, Copy)]
enum Op {
    Join,
    Leave(usize),
    Roll(usize),
    Select(usize, usize),
    Pass(usize),
    Reveal,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Join),
        (0..8usize).prop_map(Op::Leave),
        (0..8usize).prop_map(Op::Roll),
        ((0..8usize), (0..6usize)).prop_map(|(p, i)| Op::Select(p, i)),
        (0..8usize).prop_map(Op::Pass),
        Just(Op::Reveal),
    ]
}

/// Pick a seated player from an arbitrary selector, if anyone is seated.
fn pick(state: &GameState, sel: usize) -> Option<PlayerId> {
    let players = state.players();
    if players.is_empty() {
        None
    } else {
        Some(players[sel % players.len()].id)
    }
}

proptest! {
    #[test]
    fn dice_conservation_holds_across_any_sequence(
        ops in proptest::collection::vec(op_strategy(), 1..200),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(GameRules::default());

        for op in ops {
            match op {
                Op::Join => {
                    let _ = state.join();
                    state.maybe_start_mission();
                }
                Op::Leave(sel) => {
                    if let Some(id) = pick(&state, sel) {
                        state.leave(id);
                    }
                }
                Op::Roll(sel) => {
                    if let Some(id) = pick(&state, sel) {
                        let _ = state.roll(id, &mut rng);
                    }
                }
                Op::Select(sel, index) => {
                    if let Some(id) = pick(&state, sel) {
                        let _ = state.select_die(id, index);
                    }
                }
                Op::Pass(sel) => {
                    if let Some(id) = pick(&state, sel) {
                        let _ = state.pass(id);
                    }
                }
                Op::Reveal => {
                    state.reveal_mission();
                }
            }

            for player in state.players() {
                prop_assert_eq!(player.dice_total(), DICE_PER_PLAYER);
            }
            prop_assert!(state.players_count() <= state.rules().max_players);
            if state.players_count() > 0 {
                prop_assert!(state.active_player().is_some());
            }
        }
    }
}
