use crate::player::PlayerPosition;
use std::ops::RangeInclusive;

pub const STARTER_SIZE: usize = 11;
pub const OUTFIELD_SIZE: usize = STARTER_SIZE - 1;
pub const BENCH_SIZE: usize = 4;
pub const SQUAD_SIZE: usize = STARTER_SIZE + BENCH_SIZE;

/// Budget cap of the competitive squad flow
pub const BUDGET_CAP: f64 = 100.0;

/// Budget cap of the onboarding flow. Kept apart from `BUDGET_CAP` until product
/// settles on a single value.
pub const ONBOARDING_BUDGET_CAP: f64 = 150.0;

pub const MAX_PLAYERS_PER_CLUB: usize = 3;

/// Slack applied when comparing summed prices against a cap
pub const PRICE_TOLERANCE: f64 = 1e-9;

/// Per-position bounds of an accepted starting lineup
pub const POSITION_BOUNDS: [(PlayerPosition, RangeInclusive<usize>); 4] = [
    (PlayerPosition::Goalkeeper, 1..=1),
    (PlayerPosition::Defender, 3..=5),
    (PlayerPosition::Midfielder, 3..=5),
    (PlayerPosition::Forward, 1..=3),
];

pub fn position_bounds(position: PlayerPosition) -> RangeInclusive<usize> {
    POSITION_BOUNDS
        .iter()
        .find(|(p, _)| *p == position)
        .map(|(_, bounds)| bounds.clone())
        .unwrap_or(0..=0)
}

/// Minimum count per position a full auto-picked squad must hold
pub const SQUAD_MINIMUMS: [(PlayerPosition, usize); 4] = [
    (PlayerPosition::Goalkeeper, 1),
    (PlayerPosition::Defender, 3),
    (PlayerPosition::Midfielder, 3),
    (PlayerPosition::Forward, 1),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SquadRules {
    pub squad_size: usize,
    pub budget_cap: f64,
    pub max_per_club: usize,
    pub skip_injured: bool,
}

impl SquadRules {
    pub fn competitive() -> Self {
        SquadRules {
            squad_size: SQUAD_SIZE,
            budget_cap: BUDGET_CAP,
            max_per_club: MAX_PLAYERS_PER_CLUB,
            skip_injured: false,
        }
    }

    pub fn onboarding() -> Self {
        SquadRules {
            budget_cap: ONBOARDING_BUDGET_CAP,
            ..Self::competitive()
        }
    }

    pub fn with_skip_injured(mut self, skip_injured: bool) -> Self {
        self.skip_injured = skip_injured;
        self
    }

    pub fn within_budget(&self, total: f64) -> bool {
        total <= self.budget_cap + PRICE_TOLERANCE
    }
}

impl Default for SquadRules {
    fn default() -> Self {
        Self::competitive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_are_consistent() {
        assert_eq!(STARTER_SIZE, 11);
        assert_eq!(OUTFIELD_SIZE, 10);
        assert_eq!(BENCH_SIZE, 4);
        assert_eq!(SQUAD_SIZE, 15);
    }

    #[test]
    fn test_position_bounds_lookup() {
        assert_eq!(position_bounds(PlayerPosition::Goalkeeper), 1..=1);
        assert_eq!(position_bounds(PlayerPosition::Defender), 3..=5);
        assert_eq!(position_bounds(PlayerPosition::Midfielder), 3..=5);
        assert_eq!(position_bounds(PlayerPosition::Forward), 1..=3);
    }

    #[test]
    fn test_profiles_differ_only_by_cap() {
        let competitive = SquadRules::competitive();
        let onboarding = SquadRules::onboarding();

        assert_eq!(competitive, SquadRules::default());
        assert_eq!(competitive.budget_cap, 100.0);
        assert_eq!(onboarding.budget_cap, 150.0);
        assert_eq!(onboarding.squad_size, competitive.squad_size);
        assert_eq!(onboarding.max_per_club, competitive.max_per_club);
    }

    #[test]
    fn test_within_budget_tolerates_float_noise() {
        let rules = SquadRules::competitive();
        let total: f64 = std::iter::repeat(0.1).take(1000).sum();

        assert!(rules.within_budget(total));
        assert!(rules.within_budget(100.0));
        assert!(!rules.within_budget(100.1));
    }
}
