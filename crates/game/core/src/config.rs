//! Match configuration: tunable rules parameters and the combo table.

use crate::effect::{Effect, EffectKind, Target};
use crate::state::card::CardKind;

/// Rules parameters fixed at match creation.
///
/// Stored on the [`Game`](crate::state::Game) aggregate so every operation
/// reads the same rules without ambient globals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub starting_health: u32,
    pub max_energy: u32,
    pub starting_energy: u32,
    /// Primary energy granted to the new active player each turn.
    pub energy_income: u32,
    pub max_surge: u32,
    pub starting_hand: usize,

    /// Turns each phase lasts before the rotation advances.
    pub phase_duration: u32,
    /// Surge granted to both players on a scheduled phase change; doubled
    /// when the new phase is `Eclipse`.
    pub phase_change_surge: u32,

    /// Consecutive same-kind plays required to fire a combo.
    pub momentum_threshold: u32,
    /// Overdrive charge required to transform.
    pub overdrive_threshold: u32,
    /// Turns an overdrive activation lasts.
    pub overdrive_duration: u32,
    /// Surge granted when overdrive activates.
    pub overdrive_surge_grant: u32,
}

impl GameConfig {
    /// Rolling effect-history capacity.
    pub const HISTORY_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self {
            starting_health: 20,
            max_energy: 10,
            starting_energy: 1,
            energy_income: 2,
            max_surge: 10,
            starting_hand: 5,
            phase_duration: 3,
            phase_change_surge: 1,
            momentum_threshold: 3,
            overdrive_threshold: 5,
            overdrive_duration: 3,
            overdrive_surge_grant: 3,
        }
    }

    /// Combo effect fired when a kind's momentum reaches the threshold.
    ///
    /// The mapping is configuration, not mechanism: sun streaks burn the
    /// opponent over time, moon streaks shield the player, eclipse streaks
    /// steal energy.
    pub fn combo_effect(&self, kind: CardKind) -> Effect {
        match kind {
            CardKind::Sun => Effect::instant(EffectKind::Burn, 2)
                .targeting(Target::Opponent)
                .lasting(2),
            CardKind::Moon => Effect::instant(EffectKind::Shield, 3),
            CardKind::Eclipse => {
                Effect::instant(EffectKind::StealEnergy, 2).targeting(Target::Opponent)
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
