//! Live card instances.
//!
//! A [`CardInstance`] is the mutable in-game incarnation of a catalog
//! [`CardDefinition`](crate::catalog::CardDefinition). Exactly one zone owns
//! an instance at any time; moving a card between zones moves ownership.
//! Only clone-style effects copy an instance, and a copy always receives a
//! fresh [`InstanceId`] with deep-copied mutable fields.

use crate::catalog::{CardDefId, CardDefinition, PhaseBonus};
use crate::effect::{Effect, SecretTrigger};
use crate::phase::Phase;
use crate::state::common::InstanceId;

/// Card category. Doubles as the momentum combo category.
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
pub enum CardKind {
    Sun,
    Moon,
    Eclipse,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Sun, CardKind::Moon, CardKind::Eclipse];
}

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
pub enum CardRarity {
    Common,
    Rare,
    Legendary,
}

impl CardRarity {
    /// Copies of a card included when building a deck.
    pub fn deck_copies(&self) -> u32 {
        match self {
            CardRarity::Common => 2,
            CardRarity::Rare | CardRarity::Legendary => 1,
        }
    }
}

/// A live card owned by exactly one zone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInstance {
    pub instance: InstanceId,
    pub definition: CardDefId,
    pub name: String,
    pub kind: CardKind,
    pub rarity: CardRarity,

    // Base stats, fixed at spawn.
    pub base_attack: u32,
    pub base_health: u32,
    pub base_cost: u32,

    // Current stats, mutated by empower/weaken style effects.
    pub attack: u32,
    pub health: u32,
    /// Base cost adjustments applied directly to this instance
    /// (permanent cost reduction), floored at zero.
    pub cost: u32,

    /// Primary-energy yield applied when the card is played. Negative
    /// values steal from the opponent.
    pub energy_yield: i32,
    /// Per-phase stat/cost adjustments, read at resolution time.
    pub phase_bonus: Vec<(Phase, PhaseBonus)>,
    /// Effects resolved when the card is played.
    pub effects: Vec<Effect>,
    /// Effects resolved once per overdrive activation.
    pub overdrive_effects: Vec<Effect>,
    /// Present on face-down trap cards.
    pub secret_trigger: Option<SecretTrigger>,
    /// Set when this card's overdrive effects have fired during the
    /// current activation.
    pub transformed: bool,
}

impl CardInstance {
    /// Card catalog adapter: instantiates a definition as a live card.
    ///
    /// Fresh identity, current stats initialized from base stats, effect
    /// lists copied so later instance mutation never aliases the catalog.
    pub fn from_definition(instance: InstanceId, def: &CardDefinition) -> Self {
        Self {
            instance,
            definition: def.id.clone(),
            name: def.name.clone(),
            kind: def.kind,
            rarity: def.rarity,
            base_attack: def.attack,
            base_health: def.health,
            base_cost: def.cost,
            attack: def.attack,
            health: def.health,
            cost: def.cost,
            energy_yield: def.energy_yield,
            phase_bonus: def.phase_bonus.clone(),
            effects: def.effects.clone(),
            overdrive_effects: def.overdrive_effects.clone(),
            secret_trigger: def.secret_trigger,
            transformed: false,
        }
    }

    /// Deep copy under a new identity, for clone-style effects.
    pub fn duplicate(&self, instance: InstanceId) -> Self {
        let mut copy = self.clone();
        copy.instance = instance;
        copy
    }

    /// Phase adjustment table lookup.
    pub fn bonus_for(&self, phase: Phase) -> PhaseBonus {
        self.phase_bonus
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, b)| *b)
            .unwrap_or_default()
    }

    /// Cost after the active phase's adjustment, floored at zero.
    /// Cost-reduction auras are applied on top by the orchestrator.
    pub fn phase_adjusted_cost(&self, phase: Phase) -> u32 {
        let delta = self.bonus_for(phase).cost;
        self.cost.saturating_add_signed(delta)
    }

    /// Attack after the active phase's adjustment.
    pub fn effective_attack(&self, phase: Phase) -> u32 {
        self.attack.saturating_add_signed(self.bonus_for(phase).attack)
    }

    /// Health after the active phase's adjustment.
    pub fn effective_health(&self, phase: Phase) -> u32 {
        self.health.saturating_add_signed(self.bonus_for(phase).health)
    }

    /// Whether the card persists on the battlefield when played.
    /// Zero-health cards are spells and go straight to discard.
    pub fn is_persistent(&self) -> bool {
        self.base_health > 0
    }

    pub fn is_secret(&self) -> bool {
        self.secret_trigger.is_some()
    }
}
