use crate::player::PlayerPosition;
use crate::rules::{position_bounds, OUTFIELD_SIZE};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::ops::RangeInclusive;

/// Outfield shape of a starting eleven; the single goalkeeper is implied
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl Formation {
    pub fn new(defenders: usize, midfielders: usize, forwards: usize) -> Self {
        Formation {
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Parses labels such as "4-4-2"
    pub fn parse(label: &str) -> Option<Formation> {
        let counts: Vec<usize> = label
            .split('-')
            .map(|part| part.trim().parse::<usize>().ok())
            .collect::<Option<Vec<_>>>()?;

        match counts.as_slice() {
            [defenders, midfielders, forwards] => {
                Some(Formation::new(*defenders, *midfielders, *forwards))
            }
            _ => None,
        }
    }

    pub fn outfield_total(&self) -> usize {
        self.defenders + self.midfielders + self.forwards
    }

    pub fn count(&self, position: PlayerPosition) -> usize {
        match position {
            PlayerPosition::Goalkeeper => 1,
            PlayerPosition::Defender => self.defenders,
            PlayerPosition::Midfielder => self.midfielders,
            PlayerPosition::Forward => self.forwards,
        }
    }

    /// Outfield quotas in fill order
    pub fn quotas(&self) -> [(PlayerPosition, usize); 3] {
        [
            (PlayerPosition::Defender, self.defenders),
            (PlayerPosition::Midfielder, self.midfielders),
            (PlayerPosition::Forward, self.forwards),
        ]
    }
}

impl Display for Formation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormationBounds {
    pub outfield_total: usize,
    pub defenders: RangeInclusive<usize>,
    pub midfielders: RangeInclusive<usize>,
    pub forwards: RangeInclusive<usize>,
}

impl FormationBounds {
    /// Search profile for the best-scoring starting eleven. Looser than the
    /// validator on defenders and midfielders.
    pub fn starting() -> Self {
        FormationBounds {
            outfield_total: OUTFIELD_SIZE,
            defenders: 2..=5,
            midfielders: 2..=5,
            forwards: 1..=3,
        }
    }

    /// Profile used when auto-picking a full squad
    pub fn full_squad() -> Self {
        FormationBounds {
            outfield_total: OUTFIELD_SIZE,
            defenders: position_bounds(PlayerPosition::Defender),
            midfielders: position_bounds(PlayerPosition::Midfielder),
            forwards: position_bounds(PlayerPosition::Forward),
        }
    }

    pub fn contains(&self, formation: &Formation) -> bool {
        formation.outfield_total() == self.outfield_total
            && self.defenders.contains(&formation.defenders)
            && self.midfielders.contains(&formation.midfielders)
            && self.forwards.contains(&formation.forwards)
    }
}

pub struct FormationEnumerator;

impl FormationEnumerator {
    /// All formations within bounds, defenders outermost and forwards innermost,
    /// each ascending
    pub fn enumerate(bounds: &FormationBounds) -> Vec<Formation> {
        iproduct!(
            bounds.defenders.clone(),
            bounds.midfielders.clone(),
            bounds.forwards.clone()
        )
        .map(|(defenders, midfielders, forwards)| Formation::new(defenders, midfielders, forwards))
        .filter(|formation| bounds.contains(formation))
        .collect()
    }
}
