//! Environment-driven rule overrides.
//!
//! Environment variables must be set by the runtime environment (compose
//! env_file, `docker run --env-file`, or sourced env files in local dev).

use tracing::warn;

use crate::domain::rules::GameRules;

const ENV_MAX_PLAYERS: &str = "GAME_MAX_PLAYERS";
const ENV_MISSION_DIFFICULTY: &str = "GAME_MISSION_DIFFICULTY";
const ENV_MISSION_START_THRESHOLD: &str = "GAME_MISSION_START_THRESHOLD";

/// Build the rule set from the environment, falling back to the defaults
/// for anything unset or unparseable.
pub fn game_rules_from_env() -> GameRules {
    let defaults = GameRules::default();
    GameRules {
        max_players: env_parsed(ENV_MAX_PLAYERS, defaults.max_players),
        mission_difficulty: env_parsed(ENV_MISSION_DIFFICULTY, defaults.mission_difficulty),
        mission_start_threshold: env_parsed(
            ENV_MISSION_START_THRESHOLD,
            defaults.mission_start_threshold,
        ),
    }
}

fn env_parsed<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable game setting");
            default
        }),
        Err(_) => default,
    }
}
