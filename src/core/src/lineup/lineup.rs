use crate::player::PlayerPosition;
use crate::squad::Formation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub league_id: String,
    pub goalkeeper_id: String,
    pub defender_ids: Vec<String>,
    pub midfielder_ids: Vec<String>,
    pub forward_ids: Vec<String>,
    pub substitute_ids: Vec<String>,
    pub captain_id: String,
    pub vice_captain_id: String,
    pub updated_at: DateTime<Utc>,
}

impl Lineup {
    /// Goalkeeper followed by defenders, midfielders and forwards. The goalkeeper slot
    /// is always listed, even when blank.
    pub fn starters(&self) -> Vec<&str> {
        let mut starters = Vec::with_capacity(
            1 + self.defender_ids.len() + self.midfielder_ids.len() + self.forward_ids.len(),
        );

        starters.push(self.goalkeeper_id.as_str());
        starters.extend(self.defender_ids.iter().map(String::as_str));
        starters.extend(self.midfielder_ids.iter().map(String::as_str));
        starters.extend(self.forward_ids.iter().map(String::as_str));

        starters
    }

    /// Starters followed by substitutes
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = self.starters();
        ids.extend(self.substitute_ids.iter().map(String::as_str));
        ids
    }

    /// Starting slots paired with the position each slot demands
    pub fn starter_slots(&self) -> Vec<(&str, PlayerPosition)> {
        let mut slots = vec![(self.goalkeeper_id.as_str(), PlayerPosition::Goalkeeper)];

        for (ids, position) in [
            (&self.defender_ids, PlayerPosition::Defender),
            (&self.midfielder_ids, PlayerPosition::Midfielder),
            (&self.forward_ids, PlayerPosition::Forward),
        ] {
            slots.extend(ids.iter().map(|id| (id.as_str(), position)));
        }

        slots
    }

    pub fn formation(&self) -> Formation {
        Formation::new(
            self.defender_ids.len(),
            self.midfielder_ids.len(),
            self.forward_ids.len(),
        )
    }

    pub fn has_goalkeeper(&self) -> bool {
        !self.goalkeeper_id.is_empty()
    }

    pub fn is_starter(&self, player_id: &str) -> bool {
        self.starters().contains(&player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn lineup() -> Lineup {
        Lineup {
            league_id: "l1".to_string(),
            goalkeeper_id: "g1".to_string(),
            defender_ids: ids(&["d1", "d2", "d3", "d4"]),
            midfielder_ids: ids(&["m1", "m2", "m3", "m4"]),
            forward_ids: ids(&["f1", "f2"]),
            substitute_ids: ids(&["g2", "d5", "m5", "f3"]),
            captain_id: "m1".to_string(),
            vice_captain_id: "f1".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_starters_are_ordered_by_line() {
        let lineup = lineup();

        assert_eq!(
            lineup.starters(),
            vec!["g1", "d1", "d2", "d3", "d4", "m1", "m2", "m3", "m4", "f1", "f2"]
        );
        assert_eq!(lineup.all_ids().len(), 15);
        assert!(lineup.is_starter("m4"));
        assert!(!lineup.is_starter("m5"));
    }

    #[test]
    fn test_formation_counts_lines() {
        assert_eq!(lineup().formation().to_string(), "4-4-2");
    }

    #[test]
    fn test_blank_goalkeeper_keeps_its_slot() {
        let mut lineup = lineup();
        lineup.goalkeeper_id = String::new();

        assert!(!lineup.has_goalkeeper());
        assert_eq!(lineup.starters().len(), 11);
        assert_eq!(lineup.starters()[0], "");
        assert_eq!(lineup.starter_slots()[0], ("", PlayerPosition::Goalkeeper));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(lineup()).unwrap();

        assert_eq!(json["goalkeeperId"], "g1");
        assert_eq!(json["viceCaptainId"], "f1");
        assert_eq!(json["substituteIds"].as_array().map(|a| a.len()), Some(4));
    }
}
