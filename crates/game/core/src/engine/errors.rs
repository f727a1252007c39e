//! Typed errors for the turn orchestrator.
//!
//! Illegal actions are rejected synchronously and mutate nothing; the
//! transport layer surfaces them verbatim to the acting player and decides
//! whether to re-prompt. Nothing here is retried by the engine.

use crate::state::{InstanceId, PlayerId};

/// Errors surfaced by [`GameEngine::play_card`](crate::engine::GameEngine::play_card).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayError {
    #[error("the match is already over")]
    MatchOver,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("card {0} is not in hand")]
    CardNotInHand(InstanceId),

    #[error("insufficient energy: need {need}, have {have}")]
    InsufficientEnergy { need: u32, have: u32 },
}

/// Errors surfaced by [`GameEngine::end_turn`](crate::engine::GameEngine::end_turn).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("the match is already over")]
    MatchOver,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
}
