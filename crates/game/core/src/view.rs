//! Per-player snapshots.
//!
//! A [`PlayerView`] is a read-only projection of [`Game`] for one player:
//! their own hand is revealed, the opponent is reduced to counts and public
//! stats. Card stats are projected through the active phase, so the view
//! always shows effective numbers. The transport layer serializes views;
//! raw [`Game`] state never leaves the engine.

use crate::catalog::CardDefId;
use crate::momentum::MomentumCounters;
use crate::phase::Phase;
use crate::state::card::{CardInstance, CardKind, CardRarity};
use crate::state::history::{EffectRecord, PlayedCardRecord};
use crate::state::player::{ActiveEffect, PlayerState};
use crate::state::{Game, InstanceId, MatchId, PlayerId};

/// One card as shown to a player, with phase-effective stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardView {
    pub instance: InstanceId,
    pub definition: CardDefId,
    pub name: String,
    pub kind: CardKind,
    pub rarity: CardRarity,
    pub attack: u32,
    pub health: u32,
    pub cost: u32,
    pub transformed: bool,
}

impl CardView {
    fn project(card: &CardInstance, phase: Phase) -> Self {
        Self {
            instance: card.instance,
            definition: card.definition.clone(),
            name: card.name.clone(),
            kind: card.kind,
            rarity: card.rarity,
            attack: card.effective_attack(phase),
            health: card.effective_health(phase),
            cost: card.phase_adjusted_cost(phase),
            transformed: card.transformed,
        }
    }
}

/// The viewing player's own side, fully revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnSideView {
    pub id: PlayerId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub surge: u32,
    pub shields: u32,
    pub overdrive: bool,
    pub overdrive_turns_left: u32,
    pub charge: u32,
    pub hand: Vec<CardView>,
    pub battlefield: Vec<CardView>,
    /// The viewer's own face-down cards, revealed to them only.
    pub secrets: Vec<CardView>,
    pub deck_count: usize,
    pub discard_count: usize,
    pub active_effects: Vec<ActiveEffect>,
    pub momentum: MomentumCounters,
}

/// The opposing side: public stats and zone counts, hand hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentSideView {
    pub id: PlayerId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub surge: u32,
    pub shields: u32,
    pub overdrive: bool,
    pub charge: u32,
    pub hand_count: usize,
    pub battlefield: Vec<CardView>,
    pub secret_count: usize,
    pub deck_count: usize,
    pub discard_count: usize,
    pub active_effects: Vec<ActiveEffect>,
    pub momentum: MomentumCounters,
}

/// Snapshot of one match from one player's seat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub match_id: MatchId,
    pub turn: u32,
    pub phase: Phase,
    pub phase_locked: bool,
    pub phase_just_changed: bool,
    pub your_turn: bool,
    pub you: OwnSideView,
    pub opponent: OpponentSideView,
    pub recent_effects: Vec<EffectRecord>,
    pub current_turn_plays: Vec<PlayedCardRecord>,
    pub previous_turn_plays: Vec<PlayedCardRecord>,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Builds the snapshot for `player`, or `None` if they are not seated in
/// this match.
pub fn player_view(game: &Game, player: PlayerId) -> Option<PlayerView> {
    let idx = game.index_of(player)?;
    let opp_idx = Game::opponent_index(idx);
    let phase = game.phase.current();

    let own = &game.players[idx];
    let opp = &game.players[opp_idx];
    let project_zone =
        |zone: &[CardInstance]| zone.iter().map(|c| CardView::project(c, phase)).collect();

    let own_secrets: Vec<CardView> = game
        .secrets
        .iter()
        .filter(|s| s.owner == player)
        .map(|s| CardView::project(&s.card, phase))
        .collect();
    let opp_secret_count = game.secrets.iter().filter(|s| s.owner == opp.id).count();

    Some(PlayerView {
        match_id: game.id,
        turn: game.turn_count,
        phase,
        phase_locked: game.phase.is_locked(),
        phase_just_changed: game.phase.just_changed(),
        your_turn: game.active == idx,
        you: OwnSideView {
            id: own.id,
            name: own.name.clone(),
            health: own.health,
            max_health: own.max_health,
            energy: own.energy,
            surge: own.surge,
            shields: own.shields,
            overdrive: own.overdrive,
            overdrive_turns_left: own.overdrive_turns_left,
            charge: own.charge,
            hand: project_zone(&own.hand),
            battlefield: project_zone(&own.battlefield),
            secrets: own_secrets,
            deck_count: own.deck.len(),
            discard_count: own.discard.len(),
            active_effects: own.active_effects.clone(),
            momentum: game.momentum.counters(own.id),
        },
        opponent: opponent_side(game, opp, opp_secret_count, phase),
        recent_effects: game.history.recent_effects().cloned().collect(),
        current_turn_plays: game.history.current_turn_plays.clone(),
        previous_turn_plays: game.history.previous_turn_plays.clone(),
        game_over: game.game_over,
        winner: game.winner,
    })
}

fn opponent_side(
    game: &Game,
    opp: &PlayerState,
    secret_count: usize,
    phase: Phase,
) -> OpponentSideView {
    OpponentSideView {
        id: opp.id,
        name: opp.name.clone(),
        health: opp.health,
        max_health: opp.max_health,
        energy: opp.energy,
        surge: opp.surge,
        shields: opp.shields,
        overdrive: opp.overdrive,
        charge: opp.charge,
        hand_count: opp.hand.len(),
        battlefield: opp
            .battlefield
            .iter()
            .map(|c| CardView::project(c, phase))
            .collect(),
        secret_count,
        deck_count: opp.deck.len(),
        discard_count: opp.discard.len(),
        active_effects: opp.active_effects.clone(),
        momentum: game.momentum.counters(opp.id),
    }
}
