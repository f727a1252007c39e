//! Momentum combo tracking.
//!
//! Momentum is exclusive: each player accumulates a counter only for the
//! card kind they played most recently, and switching kinds zeroes every
//! other counter. Reaching the threshold fires that kind's combo exactly
//! once and resets the streak.

use crate::state::card::CardKind;
use crate::state::common::PlayerId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumCounters {
    pub sun: u32,
    pub moon: u32,
    pub eclipse: u32,
}

impl MomentumCounters {
    pub fn get(&self, kind: CardKind) -> u32 {
        match kind {
            CardKind::Sun => self.sun,
            CardKind::Moon => self.moon,
            CardKind::Eclipse => self.eclipse,
        }
    }

    fn get_mut(&mut self, kind: CardKind) -> &mut u32 {
        match kind {
            CardKind::Sun => &mut self.sun,
            CardKind::Moon => &mut self.moon,
            CardKind::Eclipse => &mut self.eclipse,
        }
    }
}

/// Per-player momentum table for a two-player match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumTable {
    entries: [(PlayerId, MomentumCounters); 2],
}

impl MomentumTable {
    pub fn new(first: PlayerId, second: PlayerId) -> Self {
        Self {
            entries: [
                (first, MomentumCounters::default()),
                (second, MomentumCounters::default()),
            ],
        }
    }

    pub fn counters(&self, player: PlayerId) -> MomentumCounters {
        self.entries
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, c)| *c)
            .unwrap_or_default()
    }

    /// Records a play: increments the played kind, zeroes the others, and
    /// returns the kind whose combo fires when the streak reaches
    /// `threshold` (resetting that counter to zero).
    pub fn record_play(
        &mut self,
        player: PlayerId,
        kind: CardKind,
        threshold: u32,
    ) -> Option<CardKind> {
        let counters = self
            .entries
            .iter_mut()
            .find(|(id, _)| *id == player)
            .map(|(_, c)| c)?;

        for other in CardKind::ALL {
            if other != kind {
                *counters.get_mut(other) = 0;
            }
        }

        let streak = counters.get_mut(kind);
        *streak += 1;
        if *streak >= threshold {
            *streak = 0;
            return Some(kind);
        }
        None
    }
}
