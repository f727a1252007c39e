//! Charge-triggered overdrive transformation.
//!
//! Qualifying effects (leech, harvest) feed a per-player charge counter.
//! Crossing the threshold flips the player into overdrive for a fixed
//! number of turns: charge resets, surge is granted, and every eligible
//! card in hand or on the battlefield has its transformation-only effects
//! resolved exactly once per activation. Expiry clears the mode without
//! reverting anything already applied.

use crate::effect::Effect;
use crate::resolve::{EffectContext, resolve};
use crate::state::Game;

/// Activates overdrive for the player if their charge crossed the
/// threshold. Safe to call after every resolved effect.
pub fn check_activation(game: &mut Game, idx: usize) {
    let threshold = game.config.overdrive_threshold;
    let player = &mut game.players[idx];
    if player.overdrive || player.charge < threshold {
        return;
    }

    player.overdrive = true;
    player.overdrive_turns_left = game.config.overdrive_duration;
    player.charge = 0;
    let surge = game.config.overdrive_surge_grant;
    player.grant_surge(surge);
    tracing::debug!(player = %player.id, "overdrive activated");

    sweep_transformations(game, idx);
}

/// Resolves transformation effects for cards that have not fired during
/// the current activation. Idempotent per activation via the per-card
/// flag; select-then-apply so resolution never mutates a zone
/// mid-iteration.
pub fn sweep_transformations(game: &mut Game, idx: usize) {
    let mut pending: Vec<(EffectContext, Vec<Effect>)> = Vec::new();
    {
        let player = &mut game.players[idx];
        for card in player.hand.iter_mut().chain(player.battlefield.iter_mut()) {
            if card.transformed || card.overdrive_effects.is_empty() {
                continue;
            }
            card.transformed = true;
            pending.push((
                EffectContext {
                    source: idx,
                    card: card.instance,
                    card_name: card.name.clone(),
                    card_kind: card.kind,
                },
                card.overdrive_effects.clone(),
            ));
        }
    }

    for (ctx, effects) in pending {
        for effect in &effects {
            if resolve(game, &ctx, effect).lethal {
                return;
            }
        }
    }
}

/// Decrements the countdown at the owner's turn start. Expiry clears the
/// mode and re-arms transformation flags for the next activation.
pub fn tick_countdown(game: &mut Game, idx: usize) {
    let player = &mut game.players[idx];
    if !player.overdrive {
        return;
    }
    player.overdrive_turns_left = player.overdrive_turns_left.saturating_sub(1);
    if player.overdrive_turns_left > 0 {
        return;
    }

    player.overdrive = false;
    tracing::debug!(player = %player.id, "overdrive expired");
    for card in player
        .hand
        .iter_mut()
        .chain(player.battlefield.iter_mut())
        .chain(player.deck.iter_mut())
        .chain(player.discard.iter_mut())
    {
        card.transformed = false;
    }
}
