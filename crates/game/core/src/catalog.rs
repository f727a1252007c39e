//! Card catalog interface.
//!
//! The catalog is read-only content supplied by the caller at match
//! initialization; it never appears in game state. Concrete catalogs live
//! outside the engine (see the content crate) and implement [`CardCatalog`].

use crate::effect::{Effect, SecretTrigger};
use crate::phase::Phase;
use crate::state::card::{CardKind, CardRarity};
use std::fmt;

/// Catalog-facing card identifier, e.g. `"sun_herald"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardDefId(pub String);

impl CardDefId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardDefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stat/cost adjustments a card receives while a phase is active.
///
/// Read at resolution time, never baked into stored stats, so a later phase
/// change is reflected immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseBonus {
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: i32,
    /// Adjustment to the card's on-play energy yield.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy: i32,
}

/// External card-definition record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDefinition {
    pub id: CardDefId,
    pub name: String,
    pub kind: CardKind,
    pub rarity: CardRarity,
    pub attack: u32,
    pub health: u32,
    pub cost: u32,
    /// Primary energy applied when played; negative steals from the opponent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_yield: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase_bonus: Vec<(Phase, PhaseBonus)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overdrive_effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secret_trigger: Option<SecretTrigger>,
}

/// Read-only card content lookup.
///
/// Implementations must return definitions in a stable order from
/// [`CardCatalog::definitions`]; deck construction depends on it for
/// deterministic replays.
pub trait CardCatalog {
    fn definition(&self, id: &CardDefId) -> Option<&CardDefinition>;

    /// All definitions in stable (insertion) order.
    fn definitions(&self) -> &[CardDefinition];
}
