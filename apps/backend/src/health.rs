use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::state::Phase;
use crate::state::app_state::AppState;
use crate::ws::hub::Stats;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().body("Hello from Exodus Backend! 🎲")
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    players_count: usize,
    phase: Phase,
    time: String,
}

pub async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let stats = app_state
        .hub
        .send(Stats)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        players_count: stats.players_count,
        phase: stats.phase,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}
