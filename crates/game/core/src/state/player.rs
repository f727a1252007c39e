//! Per-player state and the resource ledger.
//!
//! The ledger methods are the only place health, energy, surge, and shields
//! are mutated. All of them clamp: health to `[0, max_health]`, energy and
//! surge to `[0, max]`, shields to `>= 0`. Crossing health zero is reported
//! to the caller as a lethal outcome; the ledger itself never ends a match.

use crate::config::GameConfig;
use crate::effect::EffectKind;
use crate::state::card::CardInstance;
use crate::state::common::PlayerId;

/// Runtime residue of a durable effect attached to a player.
///
/// Decremented once per qualifying turn start and removed at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub magnitude: u32,
    pub remaining: u32,
}

/// Result of a damage application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Portion absorbed by shields.
    pub absorbed: u32,
    /// Portion dealt to health.
    pub dealt: u32,
    /// Health crossed zero.
    pub lethal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,

    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    /// Secondary pool, spendable only while in overdrive.
    pub surge: u32,
    pub max_surge: u32,
    pub shields: u32,

    pub overdrive: bool,
    pub overdrive_turns_left: u32,
    /// Charge toward the next overdrive activation.
    pub charge: u32,

    pub active_effects: Vec<ActiveEffect>,

    // Zones. Each card instance is owned by exactly one of these.
    pub deck: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
    pub discard: Vec<CardInstance>,
    pub battlefield: Vec<CardInstance>,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            id,
            name: name.into(),
            health: config.starting_health,
            max_health: config.starting_health,
            energy: config.starting_energy,
            max_energy: config.max_energy,
            surge: 0,
            max_surge: config.max_surge,
            shields: 0,
            overdrive: false,
            overdrive_turns_left: 0,
            charge: 0,
            active_effects: Vec::new(),
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            battlefield: Vec::new(),
        }
    }

    // ===== resource ledger =====

    /// Pays `amount` from primary energy, or from primary-then-surge while
    /// in overdrive. Returns false (and mutates nothing) if unaffordable.
    pub fn pay_cost(&mut self, amount: u32) -> bool {
        let available = if self.overdrive {
            self.energy + self.surge
        } else {
            self.energy
        };
        if available < amount {
            return false;
        }
        let from_energy = amount.min(self.energy);
        self.energy -= from_energy;
        self.surge -= amount - from_energy;
        true
    }

    /// Applies damage, shields first; remainder hits health.
    pub fn apply_damage(&mut self, amount: u32) -> DamageOutcome {
        let absorbed = self.shields.min(amount);
        self.shields -= absorbed;
        let dealt = (amount - absorbed).min(self.health);
        self.health -= dealt;
        DamageOutcome {
            absorbed,
            dealt,
            lethal: self.health == 0 && dealt > 0,
        }
    }

    /// Damage that bypasses shields entirely.
    pub fn apply_pierce(&mut self, amount: u32) -> DamageOutcome {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        DamageOutcome {
            absorbed: 0,
            dealt,
            lethal: self.health == 0 && dealt > 0,
        }
    }

    /// Heals up to max health; returns the amount actually restored.
    pub fn apply_healing(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    pub fn grant_shields(&mut self, amount: u32) {
        self.shields += amount;
    }

    /// Grants primary energy, capped; returns the amount actually granted.
    pub fn grant_energy(&mut self, amount: u32) -> u32 {
        let granted = amount.min(self.max_energy - self.energy);
        self.energy += granted;
        granted
    }

    /// Grants surge energy, capped.
    pub fn grant_surge(&mut self, amount: u32) -> u32 {
        let granted = amount.min(self.max_surge - self.surge);
        self.surge += granted;
        granted
    }

    /// Registers a durable effect, refreshing an existing record of the
    /// same kind instead of stacking a duplicate.
    pub fn register_active_effect(&mut self, kind: EffectKind, magnitude: u32, duration: u32) {
        if let Some(existing) = self.active_effects.iter_mut().find(|e| e.kind == kind) {
            existing.magnitude = magnitude;
            existing.remaining = duration;
        } else {
            self.active_effects.push(ActiveEffect {
                kind,
                magnitude,
                remaining: duration,
            });
        }
    }

    /// Sum of active cost-reduction aura magnitudes.
    pub fn cost_reduction(&self) -> u32 {
        self.active_effects
            .iter()
            .filter(|e| e.kind == EffectKind::CostReduction)
            .map(|e| e.magnitude)
            .sum()
    }

    // ===== zone queries =====

    pub fn hand_index(&self, instance: crate::state::common::InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.instance == instance)
    }
}

/// Moves `min(source energy, requested)` from `from` to `to`, capped at the
/// receiver's maximum. Never drives energy negative.
pub fn steal_energy(from: &mut PlayerState, to: &mut PlayerState, requested: u32) -> u32 {
    let moved = from.energy.min(requested);
    from.energy -= moved;
    to.grant_energy(moved);
    moved
}
