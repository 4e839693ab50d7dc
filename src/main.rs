use std::env;
use chrono::Utc;
use color_eyre::eyre::eyre;
use database::PlayerLoader;
use env_logger::Env;
use fantasy_core::{AutoSquadPicker, LineupComposer, LineupValidator, Player, PlayerPosition, SquadRules};
use log::{debug, info, warn};
use serde_json::json;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let league_id = env::var("LEAGUE_ID").unwrap_or_else(|_| String::from("demo"));

    let rules = if env::var("SQUAD_PROFILE") == Ok(String::from("ONBOARDING")) {
        info!("using onboarding squad rules");
        SquadRules::onboarding()
    } else {
        SquadRules::competitive()
    };

    let preferred: Vec<String> = env::var("PREFERRED")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let pool = match env::var("PLAYER_POOL") {
        Ok(path) => PlayerLoader::load_from_path(path)?,
        Err(_) => PlayerLoader::load()?,
    };

    let pool = PlayerLoader::for_league(pool, &league_id);

    info!("league {}: {} players in pool", league_id, pool.len());

    for position in [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ] {
        debug!("{}: {} available", position.get_name(), pool.with_position(position).len());
    }

    let squad = AutoSquadPicker::pick_with_rules(&pool.players, &rules)?;

    info!(
        "auto-picked {} players in {} for {:.1}",
        squad.player_ids.len(),
        squad.formation,
        squad.total_price
    );

    if squad.used_budget_fallback() {
        warn!("squad exceeds the budget cap of {:.1}", rules.budget_cap);
    }

    let squad_players: Vec<Player> = squad
        .player_ids
        .iter()
        .map(|id| {
            pool.by_id(id)
                .cloned()
                .ok_or_else(|| eyre!("auto-picked player {} missing from pool", id))
        })
        .collect::<color_eyre::Result<_>>()?;

    let lineup = LineupComposer::compose_at(&league_id, &squad_players, &preferred, &rules, Utc::now())?;
    let verdict = LineupValidator::validate(&lineup, &pool.index());

    if !verdict.is_valid() {
        warn!("composed lineup rejected: {}", verdict.reason.as_deref().unwrap_or_default());
    }

    let output = json!({
        "squad": squad,
        "picks": squad.to_picks(&squad_players)?,
        "lineup": lineup,
        "verdict": verdict,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
