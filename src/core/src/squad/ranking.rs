use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

/// Deterministic player orderings. Every chain ends on the player id so that two
/// distinct players never compare equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ranking {
    /// projected points desc, form desc, price asc, id asc
    ProjectedThenPrice,
    /// projected points per price desc, then `ProjectedThenPrice`
    ValueThenProjected,
}

impl Ranking {
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            Ranking::ProjectedThenPrice => by_projected_then_price(a, b),
            Ranking::ValueThenProjected => by_value_then_projected(a, b),
        }
    }

    pub fn sort<'p>(&self, players: &[&'p Player]) -> Vec<&'p Player> {
        let mut sorted = players.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

impl Display for Ranking {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Ranking::ProjectedThenPrice => write!(f, "projected-then-price"),
            Ranking::ValueThenProjected => write!(f, "value-then-projected"),
        }
    }
}

pub fn by_projected_then_price(a: &Player, b: &Player) -> Ordering {
    b.projected_points
        .total_cmp(&a.projected_points)
        .then_with(|| b.form.total_cmp(&a.form))
        .then_with(|| a.price.total_cmp(&b.price))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn by_value_then_projected(a: &Player, b: &Player) -> Ordering {
    b.value_score()
        .total_cmp(&a.value_score())
        .then_with(|| by_projected_then_price(a, b))
}

/// Orders `players` with every preferred id first, in the order given by
/// `preferred`, followed by everyone else sorted by `ranking`. Ids repeated in
/// `preferred` keep their first position; ids absent from the pool are ignored.
pub fn rank_with_preference<'p>(
    players: &[&'p Player],
    preferred: &[String],
    ranking: Ranking,
) -> Vec<&'p Player> {
    let mut priorities: HashMap<&str, usize> = HashMap::with_capacity(preferred.len());
    for (index, id) in preferred.iter().enumerate() {
        priorities.entry(id.as_str()).or_insert(index);
    }

    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| {
        match (priorities.get(a.id.as_str()), priorities.get(b.id.as_str())) {
            (Some(pa), Some(pb)) => pa.cmp(pb).then_with(|| ranking.compare(a, b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => ranking.compare(a, b),
        }
    });

    ranked
}
