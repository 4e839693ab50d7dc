use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPosition {
    pub const OUTFIELD: [PlayerPosition; 3] = [
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DEF",
            PlayerPosition::Midfielder => "MID",
            PlayerPosition::Forward => "FWD",
        }
    }

    /// Slot label used in validation messages
    pub fn get_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::Defender => "Defender",
            PlayerPosition::Midfielder => "Midfielder",
            PlayerPosition::Forward => "Forward",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPosition::Goalkeeper
    }

    pub fn is_outfield(&self) -> bool {
        !self.is_goalkeeper()
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_matches_display() {
        for position in [
            PlayerPosition::Goalkeeper,
            PlayerPosition::Defender,
            PlayerPosition::Midfielder,
            PlayerPosition::Forward,
        ] {
            assert_eq!(position.to_string(), position.get_short_name());
        }
        assert_eq!(PlayerPosition::Forward.get_name(), "Forward");
    }

    #[test]
    fn test_serializes_as_short_name() {
        let json = serde_json::to_string(&PlayerPosition::Midfielder).unwrap();
        assert_eq!(json, "\"MID\"");

        let parsed: PlayerPosition = serde_json::from_str("\"GK\"").unwrap();
        assert_eq!(parsed, PlayerPosition::Goalkeeper);
    }
}
