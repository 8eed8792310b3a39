//! Fixed table constants and the tunable rule set.

use crate::domain::dice::DieColor;

/// Seats at the table.
pub const MAX_PLAYERS: usize = 5;

/// Committed die values must reach this sum for a mission to succeed.
pub const MISSION_DIFFICULTY: i32 = 5;

/// The mission phase starts automatically once this many players are seated.
/// Deliberately below the seat count so a table can start without filling up.
pub const MISSION_START_THRESHOLD: usize = 2;

/// Every player owns exactly four dice for the lifetime of the session.
pub const DICE_PER_PLAYER: usize = 4;

/// Reserve handed to a freshly seated player: two blue, two red.
pub fn starting_reserve() -> Vec<DieColor> {
    vec![DieColor::Blue, DieColor::Blue, DieColor::Red, DieColor::Red]
}

/// Tunable session rules. Defaults match the table constants; the config
/// layer may override them from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_players: usize,
    pub mission_difficulty: i32,
    pub mission_start_threshold: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            mission_difficulty: MISSION_DIFFICULTY,
            mission_start_threshold: MISSION_START_THRESHOLD,
        }
    }
}
