use thiserror::Error;

/// Hard failures of the squad and lineup builders. The input pool cannot yield a
/// legal outcome; callers retry with a different pool.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquadError {
    #[error("no goalkeeper available")]
    NoGoalkeeper,

    #[error("no feasible starting formation")]
    NoFeasibleFormation,

    #[error("unable to auto-pick a valid squad ({attempts} strategies tried)")]
    AutoPickFailed { attempts: usize },

    #[error("unknown player: {0}")]
    UnknownPlayer(String),
}

pub type SquadResult<T> = Result<T, SquadError>;
