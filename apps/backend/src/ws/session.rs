//! Per-connection websocket actor.
//!
//! The session is a thin transport edge: it keeps the socket alive with
//! ping/pong, parses inbound JSON into `ClientMsg`, forwards commands to the
//! hub, and renders the hub's `Outbound` messages back onto the socket. All
//! game decisions happen in the hub.

use std::time::{Duration, Instant};

use actix::{
    Actor, ActorContext, ActorFutureExt, Addr, AsyncContext, ContextFutureSpawner, Handler,
    StreamHandler, WrapFuture,
};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};

use crate::services::room::ConnId;
use crate::state::app_state::AppState;
use crate::ws::hub::{Connect, ConnectReply, Disconnect, GameHub, Inbound, Outbound};
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(app_state.hub.clone());
    ws::start(session, &req, stream)
}

pub struct WsSession {
    hub: Addr<GameHub>,
    /// Assigned by the hub once the player is seated.
    conn_id: Option<ConnId>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(hub: Addr<GameHub>) -> Self {
        Self {
            hub,
            conn_id: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    conn_id = ?actor.conn_id,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.start_heartbeat(ctx);

        // Seat the player before touching any stream input; capacity
        // rejection is the one error that closes the connection.
        let addr = ctx.address();
        self.hub
            .send(Connect {
                addr: addr.recipient(),
            })
            .into_actor(self)
            .map(|res, actor, ctx| match res {
                Ok(ConnectReply::Accepted { conn_id }) => {
                    actor.conn_id = Some(conn_id);
                    info!(conn_id = %conn_id, "[WS SESSION] started");
                }
                Ok(ConnectReply::Full) => {
                    Self::send_json(
                        ctx,
                        &ServerMsg::Error {
                            message: "The game is full.".to_string(),
                        },
                    );
                    ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                    ctx.stop();
                }
                Err(err) => {
                    warn!(error = %err, "[WS SESSION] hub unreachable");
                    ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                    ctx.stop();
                }
            })
            .wait(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(conn_id) = self.conn_id.take() {
            self.hub.do_send(Disconnect { conn_id });
            info!(conn_id = %conn_id, "[WS SESSION] stopped");
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                match parsed {
                    Ok(cmd) => {
                        if let Some(conn_id) = self.conn_id {
                            self.hub.do_send(Inbound { conn_id, msg: cmd });
                        }
                    }
                    Err(_) => Self::send_json(
                        ctx,
                        &ServerMsg::Error {
                            message: "Malformed message.".to_string(),
                        },
                    ),
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::send_json(
                    ctx,
                    &ServerMsg::Error {
                        message: "Binary frames are not supported.".to_string(),
                    },
                );
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = ?self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
