//! Mission resolution: the one action that reads every player's dice.

use serde::Serialize;

use crate::domain::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionOutcome {
    Success,
    Failure,
}

/// One committed die in a mission reveal, attributed to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DieContribution {
    pub name: String,
    pub value: i8,
    pub face_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    pub total_sum: i32,
    pub outcome: MissionOutcome,
    pub results: Vec<DieContribution>,
}

impl GameState {
    /// Reveal and score the mission.
    ///
    /// Sums every committed die across all players, in roster order then
    /// per-player commit order. Success means the sum reached the difficulty
    /// threshold. Committed dice go back to their owners' reserves, so they
    /// can be rolled again in later rounds; revealing with nothing committed
    /// is legal and scores 0.
    pub fn reveal_mission(&mut self) -> MissionReport {
        let mut total_sum = 0i32;
        let mut results = Vec::new();

        for player in &mut self.players {
            for die in player.committed.drain(..) {
                total_sum += i32::from(die.value);
                results.push(DieContribution {
                    name: player.name.clone(),
                    value: die.value,
                    face_id: die.face_id,
                });
                player.reserve.push(die.color);
            }
        }

        let outcome = if total_sum >= self.rules().mission_difficulty {
            MissionOutcome::Success
        } else {
            MissionOutcome::Failure
        };

        MissionReport {
            total_sum,
            outcome,
            results,
        }
    }
}
