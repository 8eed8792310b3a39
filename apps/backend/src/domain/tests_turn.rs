//! Roll/select/pass protocol tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{GameRules, DICE_PER_PLAYER};
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

fn seated(n: usize) -> GameState {
    let mut state = GameState::new(GameRules::default());
    for _ in 0..n {
        state.join().expect("seat available");
        state.maybe_start_mission();
    }
    state
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(99)
}

fn assert_conserved(state: &GameState) {
    for player in state.players() {
        assert_eq!(player.dice_total(), DICE_PER_PLAYER, "{}", player.name);
    }
}

#[test]
fn roll_moves_the_whole_reserve_into_pending() {
    let mut state = seated(2);
    let outcome = state.roll(1, &mut rng()).expect("active player rolls");

    assert_eq!(outcome.roller, "Player 1");
    assert_eq!(outcome.choices.len(), 4);

    let roller = state.player(1).expect("seated");
    assert!(roller.reserve.is_empty());
    assert_eq!(roller.pending, outcome.choices);
    assert_conserved(&state);
}

#[test]
fn rolling_from_a_non_active_player_mutates_nothing() {
    let mut state = seated(2);
    let before = state.clone();

    let err = state.roll(2, &mut rng()).expect_err("not their turn");
    assert!(matches!(err, DomainError::TurnViolation(_)));
    assert_eq!(state, before);
}

#[test]
fn rolling_twice_is_rejected() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("first roll");
    let before = state.clone();

    let err = state.roll(1, &mut rng()).expect_err("roll already open");
    assert!(matches!(err, DomainError::EmptyAction(_)));
    assert_eq!(state, before);
}

#[test]
fn rolling_with_an_empty_reserve_is_rejected() {
    let mut state = seated(2);
    let mut rng = rng();
    state.roll(1, &mut rng).expect("first roll");
    state.pass(1).expect("pass with open roll");
    state.pass(2).expect("second player passes");

    // Player 1 is active again, but every die is spent.
    let err = state.roll(1, &mut rng).expect_err("nothing to roll");
    assert!(matches!(err, DomainError::EmptyAction(_)));
    assert_conserved(&state);
}

#[test]
fn selecting_commits_one_die_and_keeps_the_turn() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("roll");

    let outcome = state.select_die(1, 0).expect("valid index");
    assert!(!outcome.turn_advanced);
    assert_eq!(outcome.remaining.len(), 3);

    let roller = state.player(1).expect("seated");
    assert_eq!(roller.pending.len(), 3);
    assert_eq!(roller.committed.len(), 1);
    assert!(state.is_active(1));
    assert_conserved(&state);
}

#[test]
fn committing_the_last_pending_die_advances_the_turn() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("roll");

    for remaining in (0..4).rev() {
        let outcome = state.select_die(1, 0).expect("valid index");
        assert_eq!(outcome.remaining.len(), remaining);
        assert_eq!(outcome.turn_advanced, remaining == 0);
    }

    assert!(state.is_active(2));
    let roller = state.player(1).expect("seated");
    assert_eq!(roller.committed.len(), 4);
    assert_conserved(&state);
}

#[test]
fn out_of_range_selection_mutates_nothing() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("roll");
    let before = state.clone();

    let err = state.select_die(1, 4).expect_err("index past the end");
    assert!(matches!(err, DomainError::InvalidSelection(_)));
    assert_eq!(state, before);
}

#[test]
fn selecting_without_an_open_roll_is_invalid() {
    let mut state = seated(2);
    let err = state.select_die(1, 0).expect_err("nothing pending");
    assert!(matches!(err, DomainError::InvalidSelection(_)));
}

#[test]
fn selecting_from_a_non_active_player_mutates_nothing() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("roll");
    let before = state.clone();

    let err = state.select_die(2, 0).expect_err("not their turn");
    assert!(matches!(err, DomainError::TurnViolation(_)));
    assert_eq!(state, before);
}

#[test]
fn passing_forfeits_open_dice_to_spent() {
    let mut state = seated(2);
    state.roll(1, &mut rng()).expect("roll");
    state.select_die(1, 0).expect("commit one");

    let outcome = state.pass(1).expect("pass");
    assert_eq!(outcome.player, "Player 1");

    let passer = state.player(1).expect("seated");
    assert!(passer.pending.is_empty());
    assert_eq!(passer.spent.len(), 3);
    assert_eq!(passer.committed.len(), 1);
    assert!(state.is_active(2));
    assert_conserved(&state);
}

#[test]
fn passing_without_an_open_roll_still_advances() {
    let mut state = seated(2);
    state.pass(1).expect("pass");
    assert!(state.is_active(2));

    let passer = state.player(1).expect("seated");
    assert_eq!(passer.reserve.len(), 4);
    assert!(passer.spent.is_empty());
}

#[test]
fn passing_from_a_non_active_player_mutates_nothing() {
    let mut state = seated(2);
    let before = state.clone();

    let err = state.pass(2).expect_err("not their turn");
    assert!(matches!(err, DomainError::TurnViolation(_)));
    assert_eq!(state, before);
}
