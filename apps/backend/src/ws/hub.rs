//! The hub actor: single owner of the shared session.
//!
//! Every connect, disconnect, and client command lands in this actor's
//! mailbox, so the room processes exactly one message to completion before
//! the next one starts. Outbound fan-out is fire-and-forget per recipient;
//! a dead session cannot block or undo anything.

use std::collections::HashMap;

use actix::{Actor, Context, Handler, Message, MessageResult, Recipient};
use tracing::info;
use uuid::Uuid;

use crate::domain::state::Phase;
use crate::services::room::{ConnId, Envelope, GameRoom, Route};
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// One serialized server message on its way to a session actor.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

#[derive(Message)]
#[rtype(result = "ConnectReply")]
pub struct Connect {
    pub addr: Recipient<Outbound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectReply {
    Accepted { conn_id: ConnId },
    /// Every seat is taken; the session should report the error and close.
    Full,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Inbound {
    pub conn_id: ConnId,
    pub msg: ClientMsg,
}

/// Occupancy snapshot for the health endpoint.
#[derive(Message)]
#[rtype(result = "SessionStats")]
pub struct Stats;

#[derive(Debug, Clone, Copy)]
pub struct SessionStats {
    pub players_count: usize,
    pub phase: Phase,
}

pub struct GameHub {
    room: GameRoom,
    connections: HashMap<ConnId, Recipient<Outbound>>,
}

impl GameHub {
    pub fn new(room: GameRoom) -> Self {
        Self {
            room,
            connections: HashMap::new(),
        }
    }

    fn dispatch(&self, envelopes: Vec<Envelope>) {
        for envelope in envelopes {
            match envelope.route {
                Route::To(conn_id) => {
                    if let Some(addr) = self.connections.get(&conn_id) {
                        addr.do_send(Outbound(envelope.msg));
                    }
                }
                Route::Broadcast => {
                    for addr in self.connections.values() {
                        addr.do_send(Outbound(envelope.msg.clone()));
                    }
                }
                Route::BroadcastExcept(skip) => {
                    for (conn_id, addr) in &self.connections {
                        if *conn_id != skip {
                            addr.do_send(Outbound(envelope.msg.clone()));
                        }
                    }
                }
            }
        }
    }
}

impl Actor for GameHub {
    type Context = Context<Self>;
}

impl Handler<Connect> for GameHub {
    type Result = MessageResult<Connect>;

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        let conn_id = Uuid::new_v4();
        match self.room.connect(conn_id) {
            Ok(envelopes) => {
                self.connections.insert(conn_id, msg.addr);
                info!(
                    conn_id = %conn_id,
                    players = self.room.players_count(),
                    "[HUB] player seated"
                );
                self.dispatch(envelopes);
                MessageResult(ConnectReply::Accepted { conn_id })
            }
            Err(err) => {
                info!(error = %err, "[HUB] connection rejected, table is full");
                MessageResult(ConnectReply::Full)
            }
        }
    }
}

impl Handler<Disconnect> for GameHub {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) {
        self.connections.remove(&msg.conn_id);
        let envelopes = self.room.disconnect(msg.conn_id);
        if !envelopes.is_empty() {
            info!(
                conn_id = %msg.conn_id,
                players = self.room.players_count(),
                "[HUB] player left"
            );
        }
        self.dispatch(envelopes);
    }
}

impl Handler<Inbound> for GameHub {
    type Result = ();

    fn handle(&mut self, msg: Inbound, _ctx: &mut Self::Context) {
        let envelopes = self.room.handle(msg.conn_id, msg.msg);
        self.dispatch(envelopes);
    }
}

impl Handler<Stats> for GameHub {
    type Result = MessageResult<Stats>;

    fn handle(&mut self, _msg: Stats, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(SessionStats {
            players_count: self.room.players_count(),
            phase: self.room.phase(),
        })
    }
}
