//! Domain layer: pure game logic, no I/O.

pub mod dice;
pub mod mission;
pub mod player;
pub mod rules;
pub mod state;
pub mod turn;

#[cfg(test)]
mod tests_mission;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use dice::{roll_crisis_pair, roll_skill_die, CrisisDraw, DieColor, RolledDie};
pub use mission::{DieContribution, MissionOutcome, MissionReport};
pub use player::{Player, PlayerId};
pub use rules::GameRules;
pub use state::{GameState, Phase};
