use crate::lineup::Lineup;
use crate::player::{Player, PlayerPosition};
use crate::rules::{position_bounds, BENCH_SIZE, STARTER_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupVerdict {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LineupVerdict {
    pub fn valid() -> Self {
        LineupVerdict {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        LineupVerdict {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<Result<(), LineupViolation>> for LineupVerdict {
    fn from(result: Result<(), LineupViolation>) -> Self {
        match result {
            Ok(()) => LineupVerdict::valid(),
            Err(violation) => LineupVerdict::invalid(violation.to_string()),
        }
    }
}

/// First rule a lineup breaks; the message is the verdict reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupViolation {
    #[error("Starting lineup has no goalkeeper")]
    MissingGoalkeeper,

    #[error("Starting lineup must have {expected} players, found {found}")]
    StarterCount { expected: usize, found: usize },

    #[error("Starting lineup lists player {0} more than once")]
    DuplicateStarter(String),

    #[error("Substitutes must have {expected} players, found {found}")]
    SubstituteCount { expected: usize, found: usize },

    #[error("Substitutes must not include starter {0}")]
    SubstituteIsStarter(String),

    #[error("Squad lists player {0} more than once")]
    DuplicatePlayer(String),

    #[error("{} count must be between {} and {}, found {}", .position.get_name(), .min, .max, .found)]
    LineCount {
        position: PlayerPosition,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error("Captain {0} must be one of the starters")]
    CaptainNotStarter(String),

    #[error("Vice-captain {0} must be one of the starters")]
    ViceCaptainNotStarter(String),

    #[error("Captain and vice-captain must be different players")]
    SameCaptains,

    #[error("Unknown player {0}")]
    UnknownPlayer(String),

    #[error("{} slot holds {}, who is a {}", .slot.get_name(), .player_id, .found)]
    WrongPosition {
        player_id: String,
        slot: PlayerPosition,
        found: PlayerPosition,
    },

    #[error("Substitutes must include exactly one goalkeeper, found {0}")]
    BenchGoalkeepers(usize),
}

pub struct LineupValidator;

impl LineupValidator {
    /// Runs every rule in order and reports the first one broken. Never panics.
    pub fn validate(lineup: &Lineup, players_by_id: &HashMap<String, Player>) -> LineupVerdict {
        Self::check(lineup, players_by_id).into()
    }

    pub fn check(
        lineup: &Lineup,
        players_by_id: &HashMap<String, Player>,
    ) -> Result<(), LineupViolation> {
        if !lineup.has_goalkeeper() {
            return Err(LineupViolation::MissingGoalkeeper);
        }

        let starters = lineup.starters();

        Self::check_starters(&starters)?;
        Self::check_substitutes(lineup, &starters)?;
        Self::check_lines(lineup)?;
        Self::check_captains(lineup, &starters)?;

        let resolved = Self::resolve(lineup, players_by_id)?;

        Self::check_slot_positions(lineup, &resolved)?;
        Self::check_bench_goalkeeper(lineup, &resolved)
    }

    fn check_starters(starters: &[&str]) -> Result<(), LineupViolation> {
        if starters.len() != STARTER_SIZE {
            return Err(LineupViolation::StarterCount {
                expected: STARTER_SIZE,
                found: starters.len(),
            });
        }

        Self::first_duplicate(starters)
            .map_or(Ok(()), |id| Err(LineupViolation::DuplicateStarter(id.to_string())))
    }

    fn check_substitutes(lineup: &Lineup, starters: &[&str]) -> Result<(), LineupViolation> {
        let substitutes = &lineup.substitute_ids;

        if substitutes.len() != BENCH_SIZE {
            return Err(LineupViolation::SubstituteCount {
                expected: BENCH_SIZE,
                found: substitutes.len(),
            });
        }

        if let Some(id) = substitutes.iter().find(|id| starters.contains(&id.as_str())) {
            return Err(LineupViolation::SubstituteIsStarter(id.clone()));
        }

        Self::first_duplicate(&lineup.all_ids())
            .map_or(Ok(()), |id| Err(LineupViolation::DuplicatePlayer(id.to_string())))
    }

    fn check_lines(lineup: &Lineup) -> Result<(), LineupViolation> {
        let formation = lineup.formation();

        for position in PlayerPosition::OUTFIELD {
            let bounds = position_bounds(position);
            let found = formation.count(position);

            if !bounds.contains(&found) {
                return Err(LineupViolation::LineCount {
                    position,
                    min: *bounds.start(),
                    max: *bounds.end(),
                    found,
                });
            }
        }

        Ok(())
    }

    fn check_captains(lineup: &Lineup, starters: &[&str]) -> Result<(), LineupViolation> {
        if !starters.contains(&lineup.captain_id.as_str()) {
            return Err(LineupViolation::CaptainNotStarter(lineup.captain_id.clone()));
        }

        if !starters.contains(&lineup.vice_captain_id.as_str()) {
            return Err(LineupViolation::ViceCaptainNotStarter(
                lineup.vice_captain_id.clone(),
            ));
        }

        if lineup.captain_id == lineup.vice_captain_id {
            return Err(LineupViolation::SameCaptains);
        }

        Ok(())
    }

    fn resolve<'a>(
        lineup: &'a Lineup,
        players_by_id: &'a HashMap<String, Player>,
    ) -> Result<HashMap<&'a str, &'a Player>, LineupViolation> {
        lineup
            .all_ids()
            .into_iter()
            .map(|id| {
                players_by_id
                    .get(id)
                    .map(|player| (id, player))
                    .ok_or_else(|| LineupViolation::UnknownPlayer(id.to_string()))
            })
            .collect()
    }

    /// Goalkeeper slot first, then defenders, midfielders and forwards
    fn check_slot_positions(
        lineup: &Lineup,
        resolved: &HashMap<&str, &Player>,
    ) -> Result<(), LineupViolation> {
        for (player_id, slot) in lineup.starter_slots() {
            let Some(player) = resolved.get(player_id) else {
                return Err(LineupViolation::UnknownPlayer(player_id.to_string()));
            };

            if player.position != slot {
                return Err(LineupViolation::WrongPosition {
                    player_id: player_id.to_string(),
                    slot,
                    found: player.position,
                });
            }
        }

        Ok(())
    }

    fn check_bench_goalkeeper(
        lineup: &Lineup,
        resolved: &HashMap<&str, &Player>,
    ) -> Result<(), LineupViolation> {
        let goalkeepers = lineup
            .substitute_ids
            .iter()
            .filter_map(|id| resolved.get(id.as_str()))
            .filter(|p| p.position.is_goalkeeper())
            .count();

        if goalkeepers != 1 {
            return Err(LineupViolation::BenchGoalkeepers(goalkeepers));
        }

        Ok(())
    }

    fn first_duplicate<'a>(ids: &[&'a str]) -> Option<&'a str> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter().copied().find(|id| !seen.insert(*id))
    }
}
