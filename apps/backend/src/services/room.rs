//! The game-session orchestrator.
//!
//! `GameRoom` owns the whole shared session: the domain state, the
//! connection-to-player side table, and the die RNG. Every inbound event is
//! one synchronous call that returns the outbound traffic it produced as
//! routed envelopes; the room itself never touches a socket. The hub actor
//! that owns the room processes one event at a time, which is the session's
//! entire concurrency contract.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::domain::dice;
use crate::domain::player::PlayerId;
use crate::domain::rules::GameRules;
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;
use crate::ws::protocol::{ClientMsg, ServerMsg};

pub type ConnId = Uuid;

/// Where one outbound message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    To(ConnId),
    Broadcast,
    BroadcastExcept(ConnId),
}

/// One outbound message plus its routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub route: Route,
    pub msg: ServerMsg,
}

impl Envelope {
    fn to(conn_id: ConnId, msg: ServerMsg) -> Self {
        Self {
            route: Route::To(conn_id),
            msg,
        }
    }

    fn broadcast(msg: ServerMsg) -> Self {
        Self {
            route: Route::Broadcast,
            msg,
        }
    }

    fn broadcast_except(conn_id: ConnId, msg: ServerMsg) -> Self {
        Self {
            route: Route::BroadcastExcept(conn_id),
            msg,
        }
    }
}

pub struct GameRoom {
    state: GameState,
    /// Connection handle → player id. Connections are transport-level and
    /// never used as map keys anywhere else.
    seats: HashMap<ConnId, PlayerId>,
    rng: ChaCha8Rng,
}

impl GameRoom {
    pub fn new(rules: GameRules) -> Self {
        Self::with_rng(rules, ChaCha8Rng::from_os_rng())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_rng(rules: GameRules, rng: ChaCha8Rng) -> Self {
        Self {
            state: GameState::new(rules),
            seats: HashMap::new(),
            rng,
        }
    }

    pub fn players_count(&self) -> usize {
        self.state.players_count()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seat the connection as a new player.
    ///
    /// On success the envelopes carry the INIT for the joiner, the join
    /// broadcast for everyone else, and, when this join starts the mission
    /// phase, the phase-change broadcast plus the first player's bucket
    /// summary. A capacity error leaves the roster untouched.
    pub fn connect(&mut self, conn_id: ConnId) -> Result<Vec<Envelope>, DomainError> {
        let joined = self.state.join()?;
        self.seats.insert(conn_id, joined.id);

        let players_count = self.state.players_count();
        let active_player = self.state.active_player().map(|p| p.name.clone());

        let mut out = vec![
            Envelope::to(
                conn_id,
                ServerMsg::Init {
                    player_id: joined.id,
                    player_name: joined.name.clone(),
                    players_count,
                },
            ),
            Envelope::broadcast_except(
                conn_id,
                ServerMsg::PlayerJoined {
                    player_name: joined.name,
                    players_count,
                    active_player,
                },
            ),
        ];

        if self.state.maybe_start_mission() {
            out.push(Envelope::broadcast(ServerMsg::GameStateChange {
                state: self.state.phase(),
                active_player: self.state.active_player().map(|p| p.name.clone()),
            }));
            out.extend(self.active_state_update());
        }

        Ok(out)
    }

    /// Unseat a dropped connection.
    ///
    /// Works without any further message from the departed player: if they
    /// held the turn it moves to whoever now occupies their roster slot.
    pub fn disconnect(&mut self, conn_id: ConnId) -> Vec<Envelope> {
        let Some(player_id) = self.seats.remove(&conn_id) else {
            return Vec::new();
        };
        let Some(outcome) = self.state.leave(player_id) else {
            return Vec::new();
        };

        let mut out = vec![Envelope::broadcast(ServerMsg::PlayerLeft {
            player_name: outcome.name,
            players_count: self.state.players_count(),
        })];

        if outcome.active_reassigned {
            out.extend(self.turn_envelopes());
        }
        out
    }

    /// Process one parsed client message from a seated connection.
    pub fn handle(&mut self, conn_id: ConnId, msg: ClientMsg) -> Vec<Envelope> {
        let Some(&player_id) = self.seats.get(&conn_id) else {
            return Vec::new();
        };

        let result = match msg {
            ClientMsg::PlayerRolls => self.roll(conn_id, player_id),
            ClientMsg::PlayerSelectsDie { index } => self.select_die(conn_id, player_id, index),
            ClientMsg::PassTurn => self.pass(player_id),
            ClientMsg::RevealDice => Ok(self.reveal()),
            ClientMsg::RollCrisisDice => Ok(self.roll_crisis()),
        };

        result.unwrap_or_else(|err| vec![Envelope::to(conn_id, reply_for(&err))])
    }

    fn roll(
        &mut self,
        conn_id: ConnId,
        player_id: PlayerId,
    ) -> Result<Vec<Envelope>, DomainError> {
        let outcome = self.state.roll(player_id, &mut self.rng)?;
        Ok(vec![
            Envelope::to(
                conn_id,
                ServerMsg::ShowRollChoices {
                    choices: outcome.choices,
                },
            ),
            Envelope::broadcast_except(
                conn_id,
                ServerMsg::Status {
                    message: format!("{} rolls their dice behind the screen.", outcome.roller),
                },
            ),
        ])
    }

    fn select_die(
        &mut self,
        conn_id: ConnId,
        player_id: PlayerId,
        index: usize,
    ) -> Result<Vec<Envelope>, DomainError> {
        let outcome = self.state.select_die(player_id, index)?;

        let mut out = vec![
            Envelope::to(conn_id, ServerMsg::RollAccepted),
            Envelope::broadcast_except(
                conn_id,
                ServerMsg::Status {
                    message: format!("{} places a die on the board.", outcome.roller),
                },
            ),
        ];

        if outcome.turn_advanced {
            out.extend(self.turn_envelopes());
        } else {
            out.push(Envelope::to(
                conn_id,
                ServerMsg::ShowRollChoices {
                    choices: outcome.remaining,
                },
            ));
        }
        Ok(out)
    }

    fn pass(&mut self, player_id: PlayerId) -> Result<Vec<Envelope>, DomainError> {
        let outcome = self.state.pass(player_id)?;

        let mut out = vec![Envelope::broadcast(ServerMsg::Status {
            message: format!("{} passes and hands over the turn.", outcome.player),
        })];
        out.extend(self.turn_envelopes());
        Ok(out)
    }

    fn reveal(&mut self) -> Vec<Envelope> {
        let report = self.state.reveal_mission();
        vec![Envelope::broadcast(ServerMsg::MissionResult {
            total_sum: report.total_sum,
            outcome: report.outcome,
            results: report.results,
        })]
    }

    fn roll_crisis(&mut self) -> Vec<Envelope> {
        let draws = dice::roll_crisis_pair(&mut self.rng);
        vec![Envelope::broadcast(ServerMsg::CrisisRollResult {
            results: [draws[0].label(), draws[1].label()],
        })]
    }

    /// Next-turn broadcast plus the new active player's bucket summary.
    fn turn_envelopes(&self) -> Vec<Envelope> {
        let mut out = Vec::new();
        if let Some(active) = self.state.active_player() {
            out.push(Envelope::broadcast(ServerMsg::NextTurn {
                active_player: active.name.clone(),
            }));
        }
        out.extend(self.active_state_update());
        out
    }

    fn active_state_update(&self) -> Option<Envelope> {
        let player = self.state.active_player()?;
        let conn_id = self.conn_of(player.id)?;
        Some(Envelope::to(
            conn_id,
            ServerMsg::PlayerStateUpdate {
                active_count: player.reserve.len(),
                used_count: player.spent.len(),
                used_dice_list: player.spent.clone(),
            },
        ))
    }

    fn conn_of(&self, player_id: PlayerId) -> Option<ConnId> {
        self.seats
            .iter()
            .find(|(_, &id)| id == player_id)
            .map(|(&conn_id, _)| conn_id)
    }
}

/// Map an error class onto its player-facing reply. Turn violations and
/// empty actions are soft status notices; bad selections and capacity
/// rejections are errors.
fn reply_for(err: &DomainError) -> ServerMsg {
    match err {
        DomainError::TurnViolation(_) | DomainError::EmptyAction(_) => ServerMsg::Status {
            message: err.to_string(),
        },
        DomainError::InvalidSelection(_) | DomainError::Capacity(_) => ServerMsg::Error {
            message: err.to_string(),
        },
    }
}
