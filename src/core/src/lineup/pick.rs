use crate::player::{Player, PlayerPosition};
use serde::{Deserialize, Serialize};

/// Denormalized snapshot of a squad member, as handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPick {
    pub player_id: String,
    pub club_id: String,
    pub position: PlayerPosition,
    pub price: f64,
}

impl SquadPick {
    pub fn from_player(player: &Player) -> Self {
        SquadPick {
            player_id: player.id.clone(),
            club_id: player.club.clone(),
            position: player.position,
            price: player.price,
        }
    }
}

impl From<&Player> for SquadPick {
    fn from(player: &Player) -> Self {
        SquadPick::from_player(player)
    }
}
