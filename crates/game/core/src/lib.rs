//! Deterministic duel rules and data types shared across clients.
//!
//! `eclipse-core` defines the canonical rules of a two-player card duel:
//! the phase rotation, the turn and energy economy, the effect resolution
//! pipeline, momentum combos, overdrive transformation, and face-down
//! secrets. All state mutation flows through [`engine::GameEngine`]; card
//! content is supplied by the caller through the [`catalog::CardCatalog`]
//! trait and never lives in this crate.
//!
//! The crate is deterministic by construction: no clocks, no OS RNG. Deck
//! shuffles derive from the match seed, and history records carry turn and
//! sequence numbers.

pub mod catalog;
pub mod config;
pub mod effect;
pub mod engine;
pub mod momentum;
pub mod overdrive;
pub mod phase;
pub mod resolve;
pub mod rng;
pub mod state;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CardCatalog, CardDefId, CardDefinition, PhaseBonus};
pub use config::GameConfig;
pub use effect::{Condition, Effect, EffectKind, SecretTrigger, Target, Trigger};
pub use engine::{GameEngine, PlayError, TurnError};
pub use momentum::{MomentumCounters, MomentumTable};
pub use phase::{Phase, PhaseSchedule, PhaseTick};
pub use resolve::{EffectContext, ResolveOutcome};
pub use state::{
    ActiveEffect, CardInstance, CardKind, CardRarity, DamageOutcome, EffectRecord, Game,
    InitError, InstanceId, MatchHistory, MatchId, PendingSecret, PlayedCardRecord, PlayerId,
    PlayerIdentity, PlayerState,
};
pub use view::{CardView, OpponentSideView, OwnSideView, PlayerView, player_view};
