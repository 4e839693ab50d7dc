use fantasy_core::{Player, PlayerCollection};
use log::{debug, info};
use std::path::Path;
use thiserror::Error;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read player pool: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed player pool: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct PlayerLoader;

impl PlayerLoader {
    /// Loads the bundled demo pool.
    pub fn load() -> Result<PlayerCollection, LoaderError> {
        let players = Self::parse(STATIC_PLAYERS_JSON)?;

        debug!("loaded {} bundled players", players.len());

        Ok(players)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<PlayerCollection, LoaderError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let players = Self::parse(&raw)?;

        info!("loaded {} players from {}", players.len(), path.display());

        Ok(players)
    }

    pub fn parse(raw: &str) -> Result<PlayerCollection, LoaderError> {
        let players: Vec<Player> = serde_json::from_str(raw)?;
        Ok(PlayerCollection::from(players))
    }

    /// Keeps only players registered in `league_id`. An empty id keeps everyone.
    pub fn for_league(players: PlayerCollection, league_id: &str) -> PlayerCollection {
        if league_id.is_empty() {
            return players;
        }

        players
            .players
            .into_iter()
            .filter(|p| p.league_id == league_id)
            .collect::<Vec<_>>()
            .into()
    }
}
