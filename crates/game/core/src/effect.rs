//! Card effect catalog.
//!
//! Effects form a closed tagged union: the resolver matches exhaustively, so
//! adding a new effect type is a compile-time-checked change everywhere it
//! matters. Externally supplied card data may still carry types this engine
//! does not recognize; those map to [`EffectKind::Custom`] and are skipped
//! with a warning at resolution time instead of corrupting the turn.

use crate::phase::Phase;
use crate::state::card::CardKind;

/// Effect type tag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    /// Damage absorbed by shields first.
    Damage,
    /// Damage that bypasses shields entirely.
    Pierce,
    /// Healing, capped at max health.
    Heal,
    /// Shield gain.
    Shield,
    /// Draw cards from the owner's deck.
    Draw,
    /// Target discards cards from hand (oldest first).
    Discard,
    /// Primary energy gain, capped.
    GainEnergy,
    /// Moves energy from the target to the source, never below zero.
    StealEnergy,
    /// Damage the target and heal the source; feeds overdrive charge.
    Leech,
    /// Direct overdrive charge gain.
    Harvest,
    /// Buff own battlefield cards of the source card's kind.
    Empower,
    /// Debuff all enemy battlefield cards, floored at zero.
    Weaken,
    /// Deep-copy the source card onto the owner's battlefield.
    Clone,
    /// Move the newest enemy battlefield card to the owner's battlefield.
    MindControl,
    /// Force the active phase to the effect's phase argument.
    ForcePhase,
    /// Lock the phase schedule for `magnitude` turn boundaries.
    PhaseLock,
    /// Reduce card costs: as an aura while duration > 0, otherwise
    /// permanently for cards currently in hand.
    CostReduction,
    /// Damage-over-time ticked at the target's turn start.
    Burn,
    /// Unrecognized externally-defined effect; logged and skipped.
    Custom(u16),
}

/// Who an effect applies to, relative to the card's owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    #[default]
    Owner,
    Opponent,
    Both,
}

/// When an effect is eligible to resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Resolves when the card is played.
    #[default]
    OnPlay,
    /// Resolves each turn start while registered as an active effect.
    OnTurnStart,
    /// Continuous; consulted by derived computations (e.g. effective cost).
    Aura,
}

/// Gate evaluated before an effect resolves. Unmet conditions abort the
/// effect silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Target player's health is at or below the value.
    HealthAtMost(u32),
    /// Source player's overdrive charge is at or above the value.
    ChargeAtLeast(u32),
    /// The active phase matches.
    PhaseIs(Phase),
}

/// A single card effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger: Trigger,
    /// Remaining duration in turns; 0 means instantaneous.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
    /// Phase argument (scope or [`EffectKind::ForcePhase`] destination).
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: Option<Phase>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<Condition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Target,
}

impl Effect {
    /// Instantaneous on-play effect with the default (owner) target.
    pub fn instant(kind: EffectKind, magnitude: u32) -> Self {
        Self {
            kind,
            magnitude,
            trigger: Trigger::OnPlay,
            duration: 0,
            phase: None,
            condition: None,
            target: Target::Owner,
        }
    }

    pub fn targeting(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn lasting(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn gated(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// Trigger predicate for a face-down secret card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecretTrigger {
    /// Fires when the opponent plays a card of this kind.
    KindPlayed(CardKind),
    /// Fires when the opponent plays a card with base cost at or above this.
    CostAtLeast(u32),
}

impl SecretTrigger {
    /// Evaluates the predicate against a just-played card.
    pub fn matches(&self, kind: CardKind, base_cost: u32) -> bool {
        match *self {
            SecretTrigger::KindPlayed(k) => k == kind,
            SecretTrigger::CostAtLeast(cost) => base_cost >= cost,
        }
    }
}
