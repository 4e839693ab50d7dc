use crate::error::{SquadError, SquadResult};
use crate::lineup::SquadPick;
use crate::player::Player;
use crate::rules::{SquadRules, STARTER_SIZE};
use crate::squad::{Formation, GreedySquadSearch, Ranking, SquadStrategy};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Strategies tried in order until one yields a legal squad. The last one drops the
/// budget cap.
pub const AUTO_PICK_STRATEGIES: [SquadStrategy; 3] = [
    SquadStrategy::new(Ranking::ProjectedThenPrice, true),
    SquadStrategy::new(Ranking::ValueThenProjected, true),
    SquadStrategy::new(Ranking::ProjectedThenPrice, false),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSquad {
    /// Goalkeeper, then the formation's defenders, midfielders and forwards, then
    /// the remaining squad members in ranking order
    pub player_ids: Vec<String>,
    pub formation: Formation,
    pub strategy: SquadStrategy,
    pub total_price: f64,
}

impl AutoSquad {
    /// The goalkeeper and outfield players the formation was built from
    pub fn core_ids(&self) -> &[String] {
        &self.player_ids[..STARTER_SIZE.min(self.player_ids.len())]
    }

    pub fn used_budget_fallback(&self) -> bool {
        !self.strategy.enforce_budget
    }

    pub fn to_picks(&self, players: &[Player]) -> SquadResult<Vec<SquadPick>> {
        self.player_ids
            .iter()
            .map(|id| {
                players
                    .iter()
                    .find(|p| p.id == *id)
                    .map(SquadPick::from_player)
                    .ok_or_else(|| SquadError::UnknownPlayer(id.clone()))
            })
            .collect()
    }
}

pub struct AutoSquadPicker;

impl AutoSquadPicker {
    pub fn pick(players: &[Player]) -> SquadResult<AutoSquad> {
        Self::pick_with_rules(players, &SquadRules::default())
    }

    pub fn pick_with_rules(players: &[Player], rules: &SquadRules) -> SquadResult<AutoSquad> {
        let candidates: Vec<&Player> = players
            .iter()
            .filter(|p| !rules.skip_injured || p.is_available())
            .collect();

        debug!(
            "Auto-picking {} players from a pool of {} (cap {:.1})",
            rules.squad_size,
            candidates.len(),
            rules.budget_cap
        );

        for strategy in AUTO_PICK_STRATEGIES {
            debug!("Trying strategy: {}", strategy);

            let Some(result) = GreedySquadSearch::run(&candidates, strategy, rules) else {
                warn!("Strategy {} could not build a squad", strategy);
                continue;
            };

            if !strategy.enforce_budget {
                warn!(
                    "Squad built without budget cap, total price {:.1}",
                    result.total_price()
                );
            }

            info!(
                "Auto-picked squad with formation {} via {} (total {:.1})",
                result.formation,
                strategy,
                result.total_price()
            );

            return Ok(AutoSquad {
                player_ids: result.players.iter().map(|p| p.id.clone()).collect(),
                formation: result.formation,
                strategy,
                total_price: result.total_price(),
            });
        }

        Err(SquadError::AutoPickFailed {
            attempts: AUTO_PICK_STRATEGIES.len(),
        })
    }
}
