pub mod room;

pub use room::{ConnId, Envelope, GameRoom, Route};
