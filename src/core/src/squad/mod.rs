mod composer;
mod formation;
mod picker;
mod ranking;
mod search;
mod selector;
mod validator;

pub use composer::*;
pub use formation::*;
pub use picker::*;
pub use ranking::*;
pub use search::*;
pub use selector::*;
pub use validator::*;

use crate::error::SquadResult;
use crate::lineup::Lineup;
use crate::player::Player;
use std::collections::HashMap;

/// Ids of a legal 15-player squad under the competitive rules
pub fn pick_auto_squad(players: &[Player]) -> SquadResult<Vec<String>> {
    AutoSquadPicker::pick(players).map(|squad| squad.player_ids)
}

pub fn compose_lineup(
    league_id: &str,
    players: &[Player],
    preferred_starter_ids: &[String],
) -> SquadResult<Lineup> {
    LineupComposer::compose(league_id, players, preferred_starter_ids)
}

pub fn validate_lineup(lineup: &Lineup, players_by_id: &HashMap<String, Player>) -> LineupVerdict {
    LineupValidator::validate(lineup, players_by_id)
}
