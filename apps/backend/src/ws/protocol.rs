//! Client/server message types for the game channel.
//!
//! Both directions are tagged unions discriminated by a `type` field; the
//! wire keeps SCREAMING_SNAKE_CASE tags and camelCase field names.

use serde::{Deserialize, Serialize};

use crate::domain::dice::RolledDie;
use crate::domain::mission::{DieContribution, MissionOutcome};
use crate::domain::player::PlayerId;
use crate::domain::state::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMsg {
    /// Roll every reserve die. Active player only.
    PlayerRolls,
    /// Commit the pending die at `index`. Active player only.
    PlayerSelectsDie { index: usize },
    /// Forfeit any open pending dice and hand the turn on. Active player
    /// only.
    PassTurn,
    /// Resolve the mission. Not turn-gated.
    RevealDice,
    /// Roll two of the four crisis dice. Not turn-gated.
    RollCrisisDice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMsg {
    /// Seat assignment, sent to the new player only.
    #[serde(rename_all = "camelCase")]
    Init {
        player_id: PlayerId,
        player_name: String,
        players_count: usize,
    },

    #[serde(rename_all = "camelCase")]
    PlayerJoined {
        player_name: String,
        players_count: usize,
        active_player: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    PlayerLeft {
        player_name: String,
        players_count: usize,
    },

    #[serde(rename_all = "camelCase")]
    GameStateChange {
        state: Phase,
        active_player: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    NextTurn { active_player: String },

    /// Bucket summary for the player whose turn begins, sent to that player
    /// only.
    #[serde(rename_all = "camelCase")]
    PlayerStateUpdate {
        active_count: usize,
        used_count: usize,
        used_dice_list: Vec<RolledDie>,
    },

    /// The rolled values, for the roller's eyes only.
    ShowRollChoices { choices: Vec<RolledDie> },

    RollAccepted,

    #[serde(rename_all = "camelCase")]
    MissionResult {
        total_sum: i32,
        outcome: MissionOutcome,
        results: Vec<DieContribution>,
    },

    CrisisRollResult { results: [String; 2] },

    Status { message: String },

    Error { message: String },
}
