use actix_web::web;

use crate::{health, ws};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health))
        .route("/ws", web::get().to(ws::session::upgrade));
}
