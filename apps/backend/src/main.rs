use actix::Actor;
use actix_web::{web, App, HttpServer};
use backend::config::game::game_rules_from_env;
use backend::routes;
use backend::services::room::GameRoom;
use backend::state::app_state::AppState;
use backend::ws::hub::GameHub;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let rules = game_rules_from_env();

    println!("🚀 Starting Exodus Backend on http://{}:{}", host, port);

    let hub = GameHub::new(GameRoom::new(rules)).start();
    let data = web::Data::new(AppState::new(hub));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
