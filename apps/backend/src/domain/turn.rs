//! The per-turn roll/select/pass protocol.
//!
//! All three operations are valid only for the player holding the turn and
//! leave the session untouched on failure. Rolled values stay behind the
//! screen: outcomes carry them back to the roller, never to the table.

use rand::Rng;

use crate::domain::dice::{self, DieColor, RolledDie};
use crate::domain::player::PlayerId;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    pub roller: String,
    /// The freshly rolled pending set, for the roller's eyes only.
    pub choices: Vec<RolledDie>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub roller: String,
    /// Pending dice still awaiting a choice or a pass.
    pub remaining: Vec<RolledDie>,
    /// Set when the last pending die was committed and the turn moved on.
    pub turn_advanced: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassOutcome {
    pub player: String,
}

impl GameState {
    /// Roll every reserve die at once and park the results in `pending`.
    ///
    /// Fails without mutation when a roll is already open or the reserve is
    /// empty.
    pub fn roll(
        &mut self,
        player_id: PlayerId,
        rng: &mut impl Rng,
    ) -> Result<RollOutcome, DomainError> {
        let player = self.require_active_mut(player_id)?;
        if player.has_open_roll() {
            return Err(DomainError::empty_action(
                "You already have rolled dice waiting to be placed.",
            ));
        }
        if player.reserve.is_empty() {
            return Err(DomainError::empty_action(
                "You have no reserve dice left to roll.",
            ));
        }

        let colors: Vec<DieColor> = player.reserve.drain(..).collect();
        player.pending = colors
            .into_iter()
            .map(|color| dice::roll_skill_die(rng, color))
            .collect();

        Ok(RollOutcome {
            roller: player.name.clone(),
            choices: player.pending.clone(),
        })
    }

    /// Commit one pending die, addressed by its index in the roller's own
    /// pending sequence. Committing the last pending die hands the turn on.
    pub fn select_die(
        &mut self,
        player_id: PlayerId,
        index: usize,
    ) -> Result<SelectOutcome, DomainError> {
        let player = self.require_active_mut(player_id)?;
        if index >= player.pending.len() {
            return Err(DomainError::invalid_selection("Invalid die selection."));
        }

        let die = player.pending.remove(index);
        player.committed.push(die);

        let roller = player.name.clone();
        let remaining = player.pending.clone();
        let turn_advanced = remaining.is_empty();
        if turn_advanced {
            self.advance_turn();
        }

        Ok(SelectOutcome {
            roller,
            remaining,
            turn_advanced,
        })
    }

    /// Give up the turn. Any open pending dice are forfeited to `spent`;
    /// they never return to the reserve and never reach the mission.
    pub fn pass(&mut self, player_id: PlayerId) -> Result<PassOutcome, DomainError> {
        let player = self.require_active_mut(player_id)?;

        let leftovers: Vec<RolledDie> = player.pending.drain(..).collect();
        player.spent.extend(leftovers);
        let name = player.name.clone();
        self.advance_turn();

        Ok(PassOutcome { player: name })
    }
}
