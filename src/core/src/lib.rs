pub mod error;
pub mod lineup;
pub mod player;
pub mod rules;
pub mod squad;

pub use error::{SquadError, SquadResult};

pub use lineup::{Lineup, SquadPick};

pub use player::{Player, PlayerBuilder, PlayerCollection, PlayerPosition};

pub use rules::{
    SquadRules, BENCH_SIZE, BUDGET_CAP, MAX_PLAYERS_PER_CLUB, ONBOARDING_BUDGET_CAP,
    OUTFIELD_SIZE, POSITION_BOUNDS, SQUAD_SIZE, STARTER_SIZE,
};

pub use squad::{
    compose_lineup, pick_auto_squad, validate_lineup,
    AutoSquad, AutoSquadPicker, AUTO_PICK_STRATEGIES,
    Formation, FormationBounds, FormationEnumerator,
    GreedySquadSearch, SearchResult, SquadStrategy,
    LineupComposer, LineupValidator, LineupVerdict, LineupViolation,
    Ranking, RankedSelector, rank_with_preference,
};
