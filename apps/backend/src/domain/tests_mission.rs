//! Mission reveal tests: scoring, dice return, and contribution order.

use crate::domain::dice::{DieColor, RolledDie};
use crate::domain::mission::MissionOutcome;
use crate::domain::rules::{GameRules, DICE_PER_PLAYER};
use crate::domain::state::GameState;

fn seated(n: usize, rules: GameRules) -> GameState {
    let mut state = GameState::new(rules);
    for _ in 0..n {
        state.join().expect("seat available");
        state.maybe_start_mission();
    }
    state
}

fn die(value: i8, face_id: &'static str, color: DieColor) -> RolledDie {
    RolledDie {
        color,
        value,
        face_id,
    }
}

/// Move one reserve die of the right color into `committed` with the given
/// face, keeping the conservation sum intact.
fn commit(state: &mut GameState, player_idx: usize, rolled: RolledDie) {
    let player = &mut state.players[player_idx];
    let pos = player
        .reserve
        .iter()
        .position(|&c| c == rolled.color)
        .expect("reserve die of that color");
    player.reserve.remove(pos);
    player.committed.push(rolled);
}

#[test]
fn sum_meeting_the_difficulty_succeeds() {
    let mut state = seated(2, GameRules::default());
    commit(&mut state, 0, die(2, "blue_+2", DieColor::Blue));
    commit(&mut state, 0, die(2, "blue_+2", DieColor::Blue));
    commit(&mut state, 1, die(1, "red_+1", DieColor::Red));

    let report = state.reveal_mission();
    assert_eq!(report.total_sum, 5);
    assert_eq!(report.outcome, MissionOutcome::Success);
}

#[test]
fn sum_below_the_difficulty_fails() {
    let mut state = seated(2, GameRules::default());
    commit(&mut state, 0, die(-1, "blue_-1", DieColor::Blue));
    commit(&mut state, 1, die(2, "blue_+2", DieColor::Blue));

    let report = state.reveal_mission();
    assert_eq!(report.total_sum, 1);
    assert_eq!(report.outcome, MissionOutcome::Failure);
}

#[test]
fn sum_one_short_of_the_difficulty_fails() {
    let mut state = seated(2, GameRules::default());
    commit(&mut state, 0, die(2, "blue_+2", DieColor::Blue));
    commit(&mut state, 1, die(2, "blue_+2", DieColor::Blue));

    let report = state.reveal_mission();
    assert_eq!(report.total_sum, 4);
    assert_eq!(report.outcome, MissionOutcome::Failure);
}

#[test]
fn difficulty_is_configurable() {
    let rules = GameRules {
        mission_difficulty: 3,
        ..GameRules::default()
    };
    let mut state = seated(2, rules);
    commit(&mut state, 0, die(2, "blue_+2", DieColor::Blue));
    commit(&mut state, 1, die(1, "red_+1", DieColor::Red));

    let report = state.reveal_mission();
    assert_eq!(report.outcome, MissionOutcome::Success);
}

#[test]
fn reveal_returns_committed_dice_to_their_owners_reserves() {
    let mut state = seated(2, GameRules::default());
    commit(&mut state, 0, die(4, "blue_+4", DieColor::Blue));
    commit(&mut state, 0, die(-2, "red_-2", DieColor::Red));
    commit(&mut state, 1, die(3, "red_+3", DieColor::Red));

    state.reveal_mission();

    for player in state.players() {
        assert!(player.committed.is_empty());
        assert_eq!(player.reserve.len(), 4);
        assert_eq!(player.dice_total(), DICE_PER_PLAYER);
        // Colors survive the round trip.
        let blues = player
            .reserve
            .iter()
            .filter(|&&c| c == DieColor::Blue)
            .count();
        assert_eq!(blues, 2);
    }
}

#[test]
fn contributions_come_in_roster_then_commit_order() {
    let mut state = seated(3, GameRules::default());
    commit(&mut state, 1, die(1, "red_+1", DieColor::Red));
    commit(&mut state, 0, die(2, "blue_+2", DieColor::Blue));
    commit(&mut state, 0, die(-1, "red_-1", DieColor::Red));

    let report = state.reveal_mission();
    let order: Vec<(&str, i8)> = report
        .results
        .iter()
        .map(|c| (c.name.as_str(), c.value))
        .collect();
    assert_eq!(
        order,
        vec![("Player 1", 2), ("Player 1", -1), ("Player 2", 1)]
    );
}

#[test]
fn reveal_with_nothing_committed_scores_zero() {
    let mut state = seated(2, GameRules::default());
    let report = state.reveal_mission();
    assert_eq!(report.total_sum, 0);
    assert_eq!(report.outcome, MissionOutcome::Failure);
    assert!(report.results.is_empty());
}

#[test]
fn repeated_reveals_keep_dice_reusable() {
    let mut state = seated(2, GameRules::default());
    commit(&mut state, 0, die(4, "blue_+4", DieColor::Blue));
    state.reveal_mission();

    // The same die is back in stock and can be committed again.
    commit(&mut state, 0, die(4, "blue_+4", DieColor::Blue));
    let report = state.reveal_mission();
    assert_eq!(report.total_sum, 4);
    assert_conservation(&state);
}

fn assert_conservation(state: &GameState) {
    for player in state.players() {
        assert_eq!(player.dice_total(), DICE_PER_PLAYER);
    }
}
