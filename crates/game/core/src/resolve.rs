//! Effect resolution pipeline.
//!
//! Resolves one effect at a time against the match state: condition gate,
//! exhaustive dispatch on the effect kind, durable-effect registration,
//! history recording, and the overdrive re-check for the acting player.
//! Effects within one card's list resolve in declaration order with no
//! interleaving; phase transitions are turn-boundary-only, so the active
//! phase is stable for the whole pass.

use crate::effect::{Condition, Effect, EffectKind, Target};
use crate::state::card::CardKind;
use crate::state::history::EffectRecord;
use crate::state::player::steal_energy;
use crate::state::{Game, InstanceId};

/// Identity of the card an effect originates from.
///
/// Carried by value: the card itself may move zones (or be consumed) while
/// its effect list is still resolving.
#[derive(Clone, Debug)]
pub struct EffectContext {
    /// Index of the acting player.
    pub source: usize,
    pub card: InstanceId,
    pub card_name: String,
    pub card_kind: CardKind,
}

/// Outcome of one resolution step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Some player's health crossed zero; the caller must stop resolving
    /// and settle the match.
    pub lethal: bool,
}

/// Resolves a single effect. Never fails: unmet conditions and
/// unrecognized kinds skip silently (the latter with a warning).
pub fn resolve(game: &mut Game, ctx: &EffectContext, effect: &Effect) -> ResolveOutcome {
    let targets = select_targets(ctx.source, effect.target);

    if !condition_met(game, ctx, effect, targets[0]) {
        tracing::debug!(
            kind = %effect.kind,
            card = %ctx.card,
            "effect condition unmet, skipping"
        );
        return ResolveOutcome::default();
    }

    if let EffectKind::Custom(tag) = effect.kind {
        tracing::warn!(tag, card = %ctx.card, "unrecognized effect type, skipping");
        return ResolveOutcome::default();
    }

    tracing::debug!(
        kind = %effect.kind,
        magnitude = effect.magnitude,
        card = %ctx.card,
        "resolving effect"
    );

    for &target in &targets {
        apply(game, ctx, effect, target);
    }

    // Durable effects leave an active-effect record on each target;
    // end-of-turn bookkeeping decrements and removes them.
    if effect.duration > 0 {
        for &target in &targets {
            game.players[target].register_active_effect(
                effect.kind,
                effect.magnitude,
                effect.duration,
            );
        }
    }

    record(game, ctx, effect, targets[0]);
    crate::overdrive::check_activation(game, ctx.source);

    ResolveOutcome {
        lethal: game.players.iter().any(|p| p.health == 0),
    }
}

fn select_targets(source: usize, target: Target) -> Vec<usize> {
    let opponent = Game::opponent_index(source);
    match target {
        Target::Owner => vec![source],
        Target::Opponent => vec![opponent],
        Target::Both => vec![source, opponent],
    }
}

fn condition_met(game: &Game, ctx: &EffectContext, effect: &Effect, target: usize) -> bool {
    match effect.condition {
        None => true,
        Some(Condition::HealthAtMost(limit)) => game.players[target].health <= limit,
        Some(Condition::ChargeAtLeast(limit)) => game.players[ctx.source].charge >= limit,
        Some(Condition::PhaseIs(phase)) => game.phase.current() == phase,
    }
}

fn apply(game: &mut Game, ctx: &EffectContext, effect: &Effect, target: usize) {
    let magnitude = effect.magnitude;
    match effect.kind {
        EffectKind::Damage => {
            game.players[target].apply_damage(magnitude);
        }
        EffectKind::Pierce => {
            game.players[target].apply_pierce(magnitude);
        }
        EffectKind::Heal => {
            game.players[target].apply_healing(magnitude);
        }
        EffectKind::Shield => {
            game.players[target].grant_shields(magnitude);
        }
        EffectKind::Draw => {
            game.draw_cards(target, magnitude as usize);
        }
        EffectKind::Discard => {
            for _ in 0..magnitude {
                if game.players[target].hand.is_empty() {
                    break;
                }
                let card = game.players[target].hand.remove(0);
                game.players[target].discard.push(card);
            }
        }
        EffectKind::GainEnergy => {
            game.players[target].grant_energy(magnitude);
        }
        EffectKind::StealEnergy => {
            if target != ctx.source {
                let (source, victim) = game.pair_mut(ctx.source);
                steal_energy(victim, source, magnitude);
            }
        }
        EffectKind::Leech => {
            game.players[ctx.source].charge += 1;
            game.players[ctx.source].grant_energy(1);
            if target == ctx.source {
                // Self-leech degenerates to plain healing.
                game.players[target].apply_healing(magnitude);
            } else {
                game.players[target].apply_damage(magnitude);
                game.players[ctx.source].apply_healing(magnitude);
            }
        }
        EffectKind::Harvest => {
            let source = &mut game.players[ctx.source];
            source.charge += magnitude;
            source.grant_energy(1);
        }
        EffectKind::Empower => {
            let kind = ctx.card_kind;
            for card in game.players[ctx.source].battlefield.iter_mut() {
                if card.kind == kind {
                    card.attack += magnitude;
                    card.health += magnitude;
                }
            }
        }
        EffectKind::Weaken => {
            for card in game.players[target].battlefield.iter_mut() {
                card.attack = card.attack.saturating_sub(magnitude);
                card.health = card.health.saturating_sub(magnitude);
            }
        }
        EffectKind::Clone => {
            let original = game.players[ctx.source]
                .battlefield
                .iter()
                .find(|c| c.instance == ctx.card)
                .cloned();
            match original {
                Some(card) => {
                    let id = game.allocate_instance();
                    game.players[ctx.source].battlefield.push(card.duplicate(id));
                }
                None => {
                    tracing::debug!(card = %ctx.card, "clone source left the battlefield, skipping");
                }
            }
        }
        EffectKind::MindControl => {
            let opponent = Game::opponent_index(ctx.source);
            if let Some(stolen) = game.players[opponent].battlefield.pop() {
                game.players[ctx.source].battlefield.push(stolen);
            }
        }
        EffectKind::ForcePhase => match effect.phase {
            Some(phase) => {
                if !game.phase.force(phase) {
                    tracing::debug!(%phase, "phase force refused (locked or already active)");
                }
            }
            None => {
                tracing::warn!(card = %ctx.card, "force_phase effect without a phase argument");
            }
        },
        EffectKind::PhaseLock => {
            game.phase.lock(magnitude);
        }
        EffectKind::CostReduction => {
            // Duration > 0 acts as an aura via the active-effect record;
            // instantaneous reduction permanently discounts cards in hand.
            if effect.duration == 0 {
                for card in game.players[target].hand.iter_mut() {
                    card.cost = card.cost.saturating_sub(magnitude);
                }
            }
        }
        EffectKind::Burn => {
            // Durable burns only tick at turn starts; an instantaneous burn
            // is a one-shot damage application.
            if effect.duration == 0 {
                game.players[target].apply_damage(magnitude);
            }
        }
        EffectKind::Custom(_) => unreachable!("custom effects are filtered before dispatch"),
    }
}

fn record(game: &mut Game, ctx: &EffectContext, effect: &Effect, target: usize) {
    let target_id = game.players[target].id;
    let turn = game.turn_count;
    game.history.record_effect(EffectRecord {
        kind: effect.kind,
        magnitude: effect.magnitude,
        source_card: ctx.card,
        source_name: ctx.card_name.clone(),
        target: target_id,
        turn,
        sequence: 0,
    });
}
