//! Turn-order manager: the roster, the active index, and the session phase.

use serde::Serialize;

use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::GameRules;
use crate::errors::domain::DomainError;

/// Overall session phases.
///
/// `CrisisPhase` is named but no transition ever enters it; crisis rolls are
/// a global action available in every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    WaitingForPlayers,
    MissionPhase,
    CrisisPhase,
}

/// Summary of a completed `join`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedPlayer {
    pub id: PlayerId,
    pub name: String,
}

/// Summary of a completed `leave`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    pub name: String,
    /// True when the departed player held the turn and the turn was handed
    /// to whoever now occupies that roster slot.
    pub active_reassigned: bool,
}

/// The one shared session: roster in join order (= turn order), the index of
/// the player whose turn it is, and the phase.
///
/// All mutation goes through the methods here and in the turn/mission
/// modules; callers are expected to serialize access (one inbound message is
/// fully processed before the next starts).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) active: usize,
    pub(crate) phase: Phase,
    next_player_id: PlayerId,
    rules: GameRules,
}

impl GameState {
    pub fn new(rules: GameRules) -> Self {
        Self {
            players: Vec::new(),
            active: 0,
            phase: Phase::WaitingForPlayers,
            next_player_id: 1,
            rules,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player currently holding the turn. `None` only while the roster is
    /// empty.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active)
    }

    pub fn is_active(&self, id: PlayerId) -> bool {
        self.active_player().is_some_and(|p| p.id == id)
    }

    /// Seat a new player with a fresh 2+2 reserve.
    ///
    /// Player ids are never reused, even after disconnects.
    pub fn join(&mut self) -> Result<JoinedPlayer, DomainError> {
        if self.players.len() >= self.rules.max_players {
            return Err(DomainError::capacity("The game is full."));
        }
        let id = self.next_player_id;
        self.next_player_id += 1;
        let player = Player::new(id);
        let joined = JoinedPlayer {
            id,
            name: player.name.clone(),
        };
        self.players.push(player);
        Ok(joined)
    }

    /// Enter the mission phase the first time the roster reaches the
    /// configured threshold. Returns true on the transition.
    pub fn maybe_start_mission(&mut self) -> bool {
        if self.phase == Phase::WaitingForPlayers
            && self.players.len() >= self.rules.mission_start_threshold
        {
            self.phase = Phase::MissionPhase;
            self.active = 0;
            return true;
        }
        false
    }

    /// Remove a player from the roster.
    ///
    /// Removal ahead of the active index shifts the index down so the same
    /// player keeps the turn. Removing the active player re-pins the index
    /// modulo the shorter roster, which hands the turn to whoever now
    /// occupies that slot. No re-roll, no turn restart.
    pub fn leave(&mut self, id: PlayerId) -> Option<LeaveOutcome> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        let removed = self.players.remove(idx);
        let was_active = idx == self.active;

        if self.players.is_empty() {
            self.active = 0;
        } else if idx < self.active {
            self.active -= 1;
        } else if was_active {
            self.active %= self.players.len();
        }

        Some(LeaveOutcome {
            name: removed.name,
            active_reassigned: was_active && !self.players.is_empty(),
        })
    }

    /// Hand the turn to the next player in roster order.
    pub(crate) fn advance_turn(&mut self) {
        if !self.players.is_empty() {
            self.active = (self.active + 1) % self.players.len();
        }
    }

    /// Mutable access to the sender's player record, gated on the turn.
    pub(crate) fn require_active_mut(
        &mut self,
        id: PlayerId,
    ) -> Result<&mut Player, DomainError> {
        if !self.is_active(id) {
            return Err(DomainError::turn_violation("It is not your turn."));
        }
        Ok(&mut self.players[self.active])
    }
}
