use crate::player::{Player, PlayerPosition};
use crate::rules::{SquadRules, SQUAD_MINIMUMS};
use crate::squad::{Formation, FormationBounds, FormationEnumerator, Ranking, RankedSelector};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

/// One way of running the greedy search: the ordering candidates are scanned in and
/// whether the budget cap applies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadStrategy {
    pub ranking: Ranking,
    pub enforce_budget: bool,
}

impl SquadStrategy {
    pub const fn new(ranking: Ranking, enforce_budget: bool) -> Self {
        SquadStrategy {
            ranking,
            enforce_budget,
        }
    }
}

impl Display for SquadStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.enforce_budget {
            write!(f, "{} (budget enforced)", self.ranking)
        } else {
            write!(f, "{} (no budget)", self.ranking)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult<'p> {
    pub players: Vec<&'p Player>,
    pub formation: Formation,
}

impl SearchResult<'_> {
    pub fn total_price(&self) -> f64 {
        self.players.iter().map(|p| p.price).sum()
    }
}

/// Working set of a single search call
#[derive(Debug, Default)]
struct SearchState<'p> {
    selected: Vec<&'p Player>,
    club_counts: HashMap<String, usize>,
    spent: f64,
}

/// Saved copy of a `SearchState`, restored when a formation attempt fails
#[derive(Debug)]
struct SearchCheckpoint<'p> {
    selected: Vec<&'p Player>,
    club_counts: HashMap<String, usize>,
    spent: f64,
}

impl<'p> SearchState<'p> {
    fn contains(&self, player_id: &str) -> bool {
        self.selected.iter().any(|p| p.id == player_id)
    }

    /// `pending` holds players already taken by the quota being filled but not yet
    /// committed
    fn can_pick(
        &self,
        player: &Player,
        pending: &[&Player],
        rules: &SquadRules,
        enforce_budget: bool,
    ) -> bool {
        if self.contains(&player.id) || pending.iter().any(|p| p.id == player.id) {
            return false;
        }

        let club_count = self.club_counts.get(&player.club).copied().unwrap_or(0)
            + pending.iter().filter(|p| p.club == player.club).count();

        if club_count >= rules.max_per_club {
            return false;
        }

        if enforce_budget {
            let pending_cost: f64 = pending.iter().map(|p| p.price).sum();
            return rules.within_budget(self.spent + pending_cost + player.price);
        }

        true
    }

    fn commit(&mut self, players: &[&'p Player]) {
        for &player in players {
            *self.club_counts.entry(player.club.clone()).or_insert(0) += 1;
            self.spent += player.price;
            self.selected.push(player);
        }
    }

    fn checkpoint(&self) -> SearchCheckpoint<'p> {
        SearchCheckpoint {
            selected: self.selected.clone(),
            club_counts: self.club_counts.clone(),
            spent: self.spent,
        }
    }

    fn restore(&mut self, checkpoint: SearchCheckpoint<'p>) {
        self.selected = checkpoint.selected;
        self.club_counts = checkpoint.club_counts;
        self.spent = checkpoint.spent;
    }

    fn count(&self, position: PlayerPosition) -> usize {
        self.selected
            .iter()
            .filter(|p| p.position == position)
            .count()
    }
}

pub struct GreedySquadSearch;

impl GreedySquadSearch {
    /// Builds a full squad: a goalkeeper, the outfield of the first full-squad
    /// formation that can be filled, then the best remaining players of any position
    /// up to `rules.squad_size`. Returns `None` unless the squad is complete and legal.
    pub fn run<'p>(
        players: &[&'p Player],
        strategy: SquadStrategy,
        rules: &SquadRules,
    ) -> Option<SearchResult<'p>> {
        let sorted = strategy.ranking.sort(players);
        let pools: HashMap<PlayerPosition, Vec<&'p Player>> =
            sorted.iter().copied().into_group_map_by(|p| p.position);

        let mut state = SearchState::default();

        let goalkeepers = Self::pool(&pools, PlayerPosition::Goalkeeper);
        let keeper = RankedSelector::select_where(goalkeepers, 1, |candidate, pending| {
            state.can_pick(candidate, pending, rules, strategy.enforce_budget)
        });

        match keeper {
            Some(keeper) => state.commit(&keeper),
            None => {
                debug!("{}: no goalkeeper fits", strategy);
                return None;
            }
        }

        let mut committed = None;

        for formation in FormationEnumerator::enumerate(&FormationBounds::full_squad()) {
            let checkpoint = state.checkpoint();

            if Self::fill_formation(&mut state, &pools, formation, rules, strategy.enforce_budget) {
                debug!("{}: formation {} filled, spent {:.1}", strategy, formation, state.spent);
                committed = Some(formation);
                break;
            }

            debug!("{}: formation {} rejected", strategy, formation);
            state.restore(checkpoint);
        }

        let formation = committed?;

        for &candidate in &sorted {
            if state.selected.len() >= rules.squad_size {
                break;
            }

            if state.can_pick(candidate, &[], rules, strategy.enforce_budget) {
                state.commit(&[candidate]);
            }
        }

        if !Self::is_complete(&state, rules, strategy.enforce_budget) {
            debug!(
                "{}: squad incomplete with {} of {} players",
                strategy,
                state.selected.len(),
                rules.squad_size
            );
            return None;
        }

        Some(SearchResult {
            players: state.selected,
            formation,
        })
    }

    fn fill_formation<'p>(
        state: &mut SearchState<'p>,
        pools: &HashMap<PlayerPosition, Vec<&'p Player>>,
        formation: Formation,
        rules: &SquadRules,
        enforce_budget: bool,
    ) -> bool {
        for (position, count) in formation.quotas() {
            let picked = RankedSelector::select_where(
                Self::pool(pools, position),
                count,
                |candidate, pending| state.can_pick(candidate, pending, rules, enforce_budget),
            );

            match picked {
                Some(picked) => state.commit(&picked),
                None => return false,
            }
        }

        true
    }

    fn is_complete(state: &SearchState<'_>, rules: &SquadRules, enforce_budget: bool) -> bool {
        if state.selected.len() != rules.squad_size {
            return false;
        }

        let minimums_met = SQUAD_MINIMUMS
            .iter()
            .all(|(position, minimum)| state.count(*position) >= *minimum);

        minimums_met && (!enforce_budget || rules.within_budget(state.spent))
    }

    fn pool<'a, 'p>(
        pools: &'a HashMap<PlayerPosition, Vec<&'p Player>>,
        position: PlayerPosition,
    ) -> &'a [&'p Player] {
        pools.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }
}
