//! Phase state machine.
//!
//! The match-wide phase rotates on a fixed schedule and gates card bonuses.
//! Rotation is evaluated strictly at turn boundaries: a phase can never
//! change in the middle of an effect resolution pass. Card effects may force
//! a phase or lock the schedule in place; a locked schedule refuses every
//! change, forced or scheduled, until the lock expires.

/// Match-wide phase. `Sunlight` is the neutral phase; `Moonlight` and
/// `Eclipse` strengthen the corresponding card kinds.
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
pub enum Phase {
    Sunlight,
    Moonlight,
    Eclipse,
}

impl Phase {
    /// Canonical rotation order.
    pub const ROTATION: [Phase; 3] = [Phase::Sunlight, Phase::Moonlight, Phase::Eclipse];
}

/// Outcome of a turn-boundary schedule evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseTick {
    /// Nothing happened at this boundary.
    Idle,
    /// A lock was active; any due rotation was suppressed.
    Suppressed,
    /// The phase rotated to the contained value.
    Rotated(Phase),
}

/// Rotation/lock schedule owning the active phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseSchedule {
    current: Phase,
    /// Number of completed phase changes (scheduled and forced).
    pub change_counter: u32,
    /// One-shot flag raised by a phase change and consumed by the next
    /// effect resolution pass.
    just_changed: bool,
    locked: bool,
    lock_remaining: u32,
}

impl PhaseSchedule {
    pub fn new() -> Self {
        Self {
            current: Phase::ROTATION[0],
            change_counter: 0,
            just_changed: false,
            locked: false,
            lock_remaining: 0,
        }
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock_remaining(&self) -> u32 {
        self.lock_remaining
    }

    /// Returns the one-shot change flag without consuming it.
    pub fn just_changed(&self) -> bool {
        self.just_changed
    }

    /// Consumes the one-shot change flag.
    pub fn take_just_changed(&mut self) -> bool {
        std::mem::take(&mut self.just_changed)
    }

    /// Locks the schedule for `duration` turn boundaries.
    pub fn lock(&mut self, duration: u32) {
        if duration == 0 {
            return;
        }
        self.locked = true;
        self.lock_remaining = duration;
    }

    /// Forces the active phase, bypassing the rotation counter.
    ///
    /// Refused while locked: no effect may switch a locked phase. Returns
    /// whether the phase actually changed.
    pub fn force(&mut self, phase: Phase) -> bool {
        if self.locked || self.current == phase {
            return false;
        }
        self.current = phase;
        self.change_counter += 1;
        self.just_changed = true;
        true
    }

    /// Evaluates the schedule at a turn boundary.
    ///
    /// A lock active when the boundary is reached covers it: the countdown
    /// decrements and any due rotation is suppressed, even at the boundary
    /// where the countdown hits zero. The next due boundary after expiry
    /// rotates normally. `turn_count` is the counter *after* the turn
    /// handoff; a rotation is due every `phase_duration` turns.
    pub fn tick_boundary(&mut self, turn_count: u32, phase_duration: u32) -> PhaseTick {
        // Stale one-shot flag from the previous boundary expires here if no
        // resolution pass consumed it.
        self.just_changed = false;

        if self.locked {
            self.lock_remaining = self.lock_remaining.saturating_sub(1);
            if self.lock_remaining == 0 {
                self.locked = false;
            }
            return PhaseTick::Suppressed;
        }

        if phase_duration == 0 || turn_count % phase_duration != 0 {
            return PhaseTick::Idle;
        }

        let order = Phase::ROTATION;
        let idx = order.iter().position(|&p| p == self.current).unwrap_or(0);
        self.current = order[(idx + 1) % order.len()];
        self.change_counter += 1;
        self.just_changed = true;
        PhaseTick::Rotated(self.current)
    }
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self::new()
    }
}
