use crate::error::{SquadError, SquadResult};
use crate::lineup::Lineup;
use crate::player::{Player, PlayerPosition};
use crate::rules::{SquadRules, BENCH_SIZE};
use crate::squad::{
    rank_with_preference, Formation, FormationBounds, FormationEnumerator, Ranking,
    RankedSelector,
};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Outfield lines chosen for one formation, with the score used to compare it
/// against the other feasible formations
struct FormationCandidate<'p> {
    formation: Formation,
    lines: [Vec<&'p Player>; 3],
    preferred_count: usize,
    projected_points: f64,
}

impl FormationCandidate<'_> {
    /// Preferred players kept outranks raw projection
    fn beats(&self, other: &FormationCandidate<'_>) -> bool {
        self.preferred_count
            .cmp(&other.preferred_count)
            .then_with(|| self.projected_points.total_cmp(&other.projected_points))
            == Ordering::Greater
    }
}

pub struct LineupComposer;

impl LineupComposer {
    pub fn compose(
        league_id: &str,
        players: &[Player],
        preferred_starter_ids: &[String],
    ) -> SquadResult<Lineup> {
        Self::compose_at(
            league_id,
            players,
            preferred_starter_ids,
            &SquadRules::default(),
            Utc::now(),
        )
    }

    pub fn compose_at(
        league_id: &str,
        players: &[Player],
        preferred_starter_ids: &[String],
        rules: &SquadRules,
        updated_at: DateTime<Utc>,
    ) -> SquadResult<Lineup> {
        let candidates: Vec<&Player> = players
            .iter()
            .filter(|p| !rules.skip_injured || p.is_available())
            .collect();

        let ranked = rank_with_preference(
            &candidates,
            preferred_starter_ids,
            Ranking::ProjectedThenPrice,
        );
        let pools: HashMap<PlayerPosition, Vec<&Player>> =
            ranked.iter().copied().into_group_map_by(|p| p.position);

        let goalkeeper = pools
            .get(&PlayerPosition::Goalkeeper)
            .and_then(|keepers| keepers.first().copied())
            .ok_or(SquadError::NoGoalkeeper)?;

        let preferred: HashSet<&str> = preferred_starter_ids.iter().map(String::as_str).collect();
        let mut best: Option<FormationCandidate> = None;

        for formation in FormationEnumerator::enumerate(&FormationBounds::starting()) {
            let Some(candidate) = Self::fill_formation(goalkeeper, &pools, formation, &preferred)
            else {
                debug!("Formation {} cannot be filled", formation);
                continue;
            };

            debug!(
                "Formation {} scores {:.1} with {} preferred players",
                formation, candidate.projected_points, candidate.preferred_count
            );

            let replace = match &best {
                Some(current) => candidate.beats(current),
                None => true,
            };

            if replace {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(SquadError::NoFeasibleFormation)?;
        let [defenders, midfielders, forwards] = best.lines;

        let starters: Vec<&Player> = std::iter::once(goalkeeper)
            .chain(defenders.iter().copied())
            .chain(midfielders.iter().copied())
            .chain(forwards.iter().copied())
            .collect();

        let bench = Self::select_bench(&ranked, &starters);
        if bench.len() < BENCH_SIZE {
            warn!("Bench has only {} of {} players", bench.len(), BENCH_SIZE);
        }

        let (captain_id, vice_captain_id) = Self::select_captains(&starters);

        info!(
            "Composed {} lineup for league {}, captain {}",
            best.formation, league_id, captain_id
        );

        Ok(Lineup {
            league_id: league_id.to_string(),
            goalkeeper_id: goalkeeper.id.clone(),
            defender_ids: Self::ids(&defenders),
            midfielder_ids: Self::ids(&midfielders),
            forward_ids: Self::ids(&forwards),
            substitute_ids: Self::ids(&bench),
            captain_id,
            vice_captain_id,
            updated_at,
        })
    }

    fn fill_formation<'p>(
        goalkeeper: &'p Player,
        pools: &HashMap<PlayerPosition, Vec<&'p Player>>,
        formation: Formation,
        preferred: &HashSet<&str>,
    ) -> Option<FormationCandidate<'p>> {
        let mut used: HashSet<&str> = HashSet::from([goalkeeper.id.as_str()]);
        let mut lines: [Vec<&'p Player>; 3] = Default::default();

        for (line, (position, count)) in lines.iter_mut().zip(formation.quotas()) {
            let pool = pools.get(&position).map(Vec::as_slice).unwrap_or(&[]);
            let picked = RankedSelector::select_first_available(pool, count, &used)?;

            used.extend(picked.iter().map(|p| p.id.as_str()));
            *line = picked;
        }

        let outfield = lines.iter().flatten();

        Some(FormationCandidate {
            formation,
            preferred_count: outfield
                .clone()
                .filter(|p| preferred.contains(p.id.as_str()))
                .count(),
            projected_points: outfield.map(|p| p.projected_points).sum(),
            lines,
        })
    }

    /// Best remaining goalkeeper first, then the next ranked outfield players
    fn select_bench<'p>(ranked: &[&'p Player], starters: &[&Player]) -> Vec<&'p Player> {
        let remaining: Vec<&'p Player> = ranked
            .iter()
            .copied()
            .filter(|p| !starters.iter().any(|s| s.id == p.id))
            .collect();

        let mut bench: Vec<&'p Player> = Vec::with_capacity(BENCH_SIZE);

        if let Some(keeper) = remaining.iter().copied().find(|p| p.position.is_goalkeeper()) {
            bench.push(keeper);
        }

        let outfield_slots = BENCH_SIZE - bench.len();
        bench.extend(
            remaining
                .iter()
                .copied()
                .filter(|p| p.position.is_outfield())
                .take(outfield_slots),
        );

        bench
    }

    fn select_captains(starters: &[&Player]) -> (String, String) {
        let ranked = Ranking::ProjectedThenPrice.sort(starters);

        let captain = ranked.first().map(|p| p.id.clone()).unwrap_or_default();
        let vice_captain = ranked
            .iter()
            .find(|p| p.id != captain)
            .map(|p| p.id.clone())
            .unwrap_or_default();

        (captain, vice_captain)
    }

    fn ids(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerPosition::*;
    use chrono::TimeZone;

    fn player(id: &str, position: PlayerPosition, projected: f64) -> Player {
        Player::builder()
            .id(id)
            .league_id("l1")
            .club("Club")
            .position(position)
            .price(5.0)
            .projected_points(projected)
            .build()
            .unwrap()
    }

    fn pool() -> Vec<Player> {
        let mut players = vec![player("g1", Goalkeeper, 4.0), player("g2", Goalkeeper, 3.0)];
        players.extend((1..=6).map(|i| player(&format!("d{}", i), Defender, 5.0 - i as f64 * 0.5)));
        players.extend((1..=6).map(|i| player(&format!("m{}", i), Midfielder, 7.0 - i as f64 * 0.5)));
        players.extend((1..=4).map(|i| player(&format!("f{}", i), Forward, 8.0 - i as f64)));
        players
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 16, 19, 0, 0).unwrap()
    }

    fn compose(players: &[Player], preferred: &[String]) -> SquadResult<Lineup> {
        LineupComposer::compose_at("l1", players, preferred, &SquadRules::default(), fixed_time())
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_picks_highest_scoring_formation() {
        // Forwards score 7, 6, 5, 4; midfielders 6.5..4.0; defenders 4.5..2.0
        let lineup = compose(&pool(), &[]).unwrap();

        assert_eq!(lineup.formation(), Formation::new(2, 5, 3));
        assert_eq!(lineup.goalkeeper_id, "g1");
        assert_eq!(lineup.forward_ids, strings(&["f1", "f2", "f3"]));
        assert_eq!(lineup.starters().len(), 11);
        assert_eq!(lineup.updated_at, fixed_time());
    }

    #[test]
    fn test_bench_keeps_one_goalkeeper() {
        let lineup = compose(&pool(), &[]).unwrap();

        assert_eq!(lineup.substitute_ids.len(), BENCH_SIZE);
        assert_eq!(lineup.substitute_ids[0], "g2");
        for id in &lineup.substitute_ids {
            assert!(!lineup.is_starter(id));
        }
    }

    #[test]
    fn test_captain_is_top_projected_starter() {
        let lineup = compose(&pool(), &[]).unwrap();

        assert_eq!(lineup.captain_id, "f1");
        assert_eq!(lineup.vice_captain_id, "m1");
        assert_ne!(lineup.captain_id, lineup.vice_captain_id);
    }

    #[test]
    fn test_preferred_eleven_are_kept() {
        let preferred = strings(&[
            "g2", "d3", "d4", "d5", "d6", "m3", "m4", "m5", "m6", "f3", "f4",
        ]);

        let lineup = compose(&pool(), &preferred).unwrap();

        let starters: HashSet<&str> = lineup.starters().into_iter().collect();
        let expected: HashSet<&str> = preferred.iter().map(String::as_str).collect();
        assert_eq!(starters, expected);
        assert_eq!(lineup.formation(), Formation::new(4, 4, 2));
        assert_eq!(lineup.substitute_ids[0], "g1");
    }

    #[test]
    fn test_preferred_order_drives_line_order() {
        let preferred = strings(&["d6", "d5"]);

        let lineup = compose(&pool(), &preferred).unwrap();

        assert_eq!(lineup.defender_ids[..2], strings(&["d6", "d5"])[..]);
    }

    #[test]
    fn test_fails_without_goalkeeper() {
        let players: Vec<Player> = pool().into_iter().filter(|p| p.position != Goalkeeper).collect();

        assert_eq!(compose(&players, &[]), Err(SquadError::NoGoalkeeper));
    }

    #[test]
    fn test_fails_without_feasible_formation() {
        let players: Vec<Player> = pool()
            .into_iter()
            .filter(|p| p.position != Forward)
            .collect();

        assert_eq!(compose(&players, &[]), Err(SquadError::NoFeasibleFormation));
    }

    #[test]
    fn test_short_bench_is_tolerated() {
        let players: Vec<Player> = pool()
            .into_iter()
            .filter(|p| !matches!(p.id.as_str(), "g2" | "d3" | "d4" | "d5" | "d6" | "m6"))
            .collect();

        let lineup = compose(&players, &[]).unwrap();

        // Only 2-5-3 fits; f4 is the sole player left over
        assert_eq!(lineup.substitute_ids, strings(&["f4"]));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let preferred = strings(&["m6", "d1"]);
        let mut shuffled = pool();
        shuffled.reverse();

        let first = compose(&pool(), &preferred).unwrap();
        let second = compose(&shuffled, &preferred).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_skip_injured_keeper() {
        let mut players = pool();
        players[0].is_injured = true;

        let rules = SquadRules::default().with_skip_injured(true);
        let lineup = LineupComposer::compose_at("l1", &players, &[], &rules, fixed_time()).unwrap();

        assert_eq!(lineup.goalkeeper_id, "g2");
        assert!(!lineup.substitute_ids.contains(&"g1".to_string()));
    }
}
