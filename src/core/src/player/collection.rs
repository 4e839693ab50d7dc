use crate::player::{Player, PlayerPosition};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn with_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    /// Lookup table keyed by player id, as expected by the lineup validator
    pub fn index(&self) -> HashMap<String, Player> {
        self.players
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<Vec<Player>> for PlayerCollection {
    fn from(players: Vec<Player>) -> Self {
        PlayerCollection::new(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, position: PlayerPosition) -> Player {
        Player::builder()
            .id(id)
            .club("Club")
            .position(position)
            .price(5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_and_filter() {
        let collection = PlayerCollection::new(vec![
            player("g1", PlayerPosition::Goalkeeper),
            player("d1", PlayerPosition::Defender),
            player("d2", PlayerPosition::Defender),
        ]);

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.by_id("d2").map(|p| p.position), Some(PlayerPosition::Defender));
        assert!(collection.by_id("x").is_none());
        assert_eq!(collection.with_position(PlayerPosition::Defender).len(), 2);

        let index = collection.index();
        assert_eq!(index.len(), 3);
        assert!(index.contains_key("g1"));
    }
}
