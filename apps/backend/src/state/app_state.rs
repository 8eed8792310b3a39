use actix::Addr;

use crate::ws::hub::GameHub;

/// Application state shared with every actix handler. The hub address is the
/// only route to the session; handlers never touch game state directly.
#[derive(Clone)]
pub struct AppState {
    pub hub: Addr<GameHub>,
}

impl AppState {
    pub fn new(hub: Addr<GameHub>) -> Self {
        Self { hub }
    }
}
