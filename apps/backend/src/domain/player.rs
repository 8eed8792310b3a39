//! Per-player die state: the four conservation buckets.

use crate::domain::dice::{DieColor, RolledDie};
use crate::domain::rules;

pub type PlayerId = u32;

/// A seated player and their dice.
///
/// Dice move between the four buckets but are never created or destroyed:
/// `reserve` holds unrolled colors, `pending` holds rolled results visible
/// only to this player, `committed` holds dice submitted to the mission, and
/// `spent` holds dice unavailable for the rest of the round.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub reserve: Vec<DieColor>,
    pub pending: Vec<RolledDie>,
    pub committed: Vec<RolledDie>,
    pub spent: Vec<RolledDie>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {id}"),
            reserve: rules::starting_reserve(),
            pending: Vec::new(),
            committed: Vec::new(),
            spent: Vec::new(),
        }
    }

    /// Sum across all four buckets. Always `DICE_PER_PLAYER`.
    pub fn dice_total(&self) -> usize {
        self.reserve.len() + self.pending.len() + self.committed.len() + self.spent.len()
    }

    pub fn has_open_roll(&self) -> bool {
        !self.pending.is_empty()
    }
}
