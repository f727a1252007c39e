//! Rolling match history.
//!
//! Two bounded records: the last few resolved effects (shared, capped at
//! [`GameConfig::HISTORY_LIMIT`](crate::config::GameConfig::HISTORY_LIMIT),
//! oldest evicted) and the cards played in the current and previous turn.
//! The engine has no clock, so records carry `(turn, sequence)` instead of
//! wall-clock timestamps.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::effect::EffectKind;
use crate::state::card::CardKind;
use crate::state::common::{InstanceId, PlayerId};

/// One resolved effect, as shown to both players.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectRecord {
    pub kind: EffectKind,
    pub magnitude: u32,
    pub source_card: InstanceId,
    pub source_name: String,
    pub target: PlayerId,
    pub turn: u32,
    /// Monotonic per-match sequence number.
    pub sequence: u64,
}

/// One played card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayedCardRecord {
    pub card: InstanceId,
    pub name: String,
    pub kind: CardKind,
    pub player: PlayerId,
    pub turn: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchHistory {
    effects: VecDeque<EffectRecord>,
    next_sequence: u64,
    /// Cards played since the last turn handoff.
    pub current_turn_plays: Vec<PlayedCardRecord>,
    /// Cards played during the previous turn.
    pub previous_turn_plays: Vec<PlayedCardRecord>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an effect record, evicting the oldest past the cap.
    pub fn record_effect(&mut self, mut record: EffectRecord) {
        record.sequence = self.next_sequence;
        self.next_sequence += 1;
        self.effects.push_back(record);
        while self.effects.len() > GameConfig::HISTORY_LIMIT {
            self.effects.pop_front();
        }
    }

    pub fn record_play(&mut self, record: PlayedCardRecord) {
        self.current_turn_plays.push(record);
    }

    /// Rolls the current turn's plays into the previous-turn slot.
    pub fn archive_turn(&mut self) {
        self.previous_turn_plays = std::mem::take(&mut self.current_turn_plays);
    }

    /// Most recent effects, oldest first.
    pub fn recent_effects(&self) -> impl Iterator<Item = &EffectRecord> {
        self.effects.iter()
    }
}
