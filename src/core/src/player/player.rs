use crate::player::builder::PlayerBuilder;
use crate::player::PlayerPosition;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub league_id: String,
    pub name: String,
    pub club: String,
    pub position: PlayerPosition,
    pub price: f64,
    pub form: f64,
    pub projected_points: f64,
    #[serde(default)]
    pub is_injured: bool,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Projected points per unit of price, with price floored at 0.1
    pub fn value_score(&self) -> f64 {
        self.projected_points / self.price.max(MIN_VALUE_PRICE)
    }

    pub fn is_available(&self) -> bool {
        !self.is_injured
    }
}

pub const MIN_VALUE_PRICE: f64 = 0.1;

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {}, {:.1})", self.name, self.position, self.club, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(price: f64, projected_points: f64) -> Player {
        Player::builder()
            .id("p1")
            .league_id("l1")
            .name("Test Player")
            .club("Club")
            .position(PlayerPosition::Midfielder)
            .price(price)
            .projected_points(projected_points)
            .build()
            .unwrap()
    }

    #[test]
    fn test_value_score_divides_by_price() {
        assert_eq!(player(5.0, 10.0).value_score(), 2.0);
    }

    #[test]
    fn test_value_score_floors_price() {
        assert_eq!(player(0.0, 1.0).value_score(), 10.0);
        assert_eq!(player(0.05, 1.0).value_score(), 10.0);
    }

    #[test]
    fn test_players_equal_by_id() {
        let a = player(5.0, 10.0);
        let mut b = player(9.0, 1.0);
        assert_eq!(a, b);

        b.id = "p2".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "id": "p9",
            "leagueId": "epl",
            "name": "Keeper",
            "club": "Town",
            "position": "GK",
            "price": 4.5,
            "form": 3.2,
            "projectedPoints": 4.1
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();

        assert_eq!(player.id, "p9");
        assert_eq!(player.position, PlayerPosition::Goalkeeper);
        assert_eq!(player.projected_points, 4.1);
        assert!(!player.is_injured);
    }
}
