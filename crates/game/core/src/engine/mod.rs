//! Turn orchestration.
//!
//! [`GameEngine`] is the authoritative reducer for [`Game`]: every player
//! action flows through `play_card` or `end_turn`, and all "over time"
//! behavior (effect durations, phase rotation, overdrive countdowns) is
//! driven synchronously by `end_turn`. Illegal actions fail before the
//! first state write, so a rejected action leaves the match untouched.

mod errors;

pub use errors::{PlayError, TurnError};

use crate::effect::Trigger;
use crate::overdrive;
use crate::phase::{Phase, PhaseTick};
use crate::resolve::{EffectContext, resolve};
use crate::state::history::PlayedCardRecord;
use crate::state::{Game, InstanceId, PendingSecret, PlayerId};

/// Game engine that executes player actions against one match.
pub struct GameEngine<'a> {
    game: &'a mut Game,
}

impl<'a> GameEngine<'a> {
    pub fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    /// Plays a card from the active player's hand.
    ///
    /// Sequencing: cost check → payment → zone move → momentum → effect
    /// resolution → lethal check → secret triggers. All validation happens
    /// before the first mutation; failures are all-or-nothing.
    pub fn play_card(&mut self, player: PlayerId, card: InstanceId) -> Result<(), PlayError> {
        let game = &mut *self.game;
        if game.game_over {
            return Err(PlayError::MatchOver);
        }
        let idx = game
            .index_of(player)
            .ok_or(PlayError::UnknownPlayer(player))?;
        if idx != game.active {
            return Err(PlayError::NotYourTurn(player));
        }
        let hand_idx = game.players[idx]
            .hand_index(card)
            .ok_or(PlayError::CardNotInHand(card))?;

        let phase = game.phase.current();
        let acting = &game.players[idx];
        let played = &acting.hand[hand_idx];

        // Effective cost: phase adjustment, then active cost-reduction
        // auras, floored at zero.
        let cost = played
            .phase_adjusted_cost(phase)
            .saturating_sub(acting.cost_reduction());
        let available = if acting.overdrive {
            acting.energy + acting.surge
        } else {
            acting.energy
        };
        if available < cost {
            return Err(PlayError::InsufficientEnergy {
                need: cost,
                have: available,
            });
        }

        // Past this point the play cannot fail.
        let paid = game.players[idx].pay_cost(cost);
        debug_assert!(paid, "affordability was checked above");

        let mut played = game.players[idx].hand.remove(hand_idx);
        let ctx = EffectContext {
            source: idx,
            card: played.instance,
            card_name: played.name.clone(),
            card_kind: played.kind,
        };
        let played_kind = played.kind;
        let played_base_cost = played.base_cost;
        let energy_yield = played.energy_yield + played.bonus_for(phase).energy;
        let effects = played.effects.clone();

        tracing::debug!(player = %player, card = %ctx.card, name = %ctx.card_name, "card played");

        // Face-down secrets wait on their trigger; nothing else happens.
        if played.is_secret() {
            game.secrets.push(PendingSecret {
                owner: player,
                card: played,
            });
            return Ok(());
        }

        // Played while the owner is transformed: the card's overdrive
        // effects fire once this play, whichever zone it lands in. Marked
        // before the move so a later sweep never refires it.
        let overdrive_effects = if game.players[idx].overdrive && !played.transformed {
            played.transformed = true;
            played.overdrive_effects.clone()
        } else {
            Vec::new()
        };

        if played.is_persistent() {
            game.players[idx].battlefield.push(played);
        } else {
            game.players[idx].discard.push(played);
        }

        game.history.record_play(PlayedCardRecord {
            card: ctx.card,
            name: ctx.card_name.clone(),
            kind: played_kind,
            player,
            turn: game.turn_count,
        });

        // On-play energy yield; negative values steal from the opponent.
        if energy_yield > 0 {
            game.players[idx].grant_energy(energy_yield as u32);
        } else if energy_yield < 0 {
            let (acting, opponent) = game.pair_mut(idx);
            crate::state::player::steal_energy(opponent, acting, energy_yield.unsigned_abs());
        }

        // Momentum before effect resolution; a combo resolves through the
        // same pipeline as card effects.
        let threshold = game.config.momentum_threshold;
        if let Some(combo_kind) = game.momentum.record_play(player, played_kind, threshold) {
            tracing::debug!(player = %player, kind = %combo_kind, "momentum combo fired");
            let combo = game.config.combo_effect(combo_kind);
            if resolve(game, &ctx, &combo).lethal {
                return Ok(self.settle_lethal());
            }
        }

        for effect in &effects {
            // Turn-start effects only tick once registered; they do not
            // resolve on play.
            if effect.trigger == Trigger::OnTurnStart {
                continue;
            }
            if resolve(game, &ctx, effect).lethal {
                return Ok(self.settle_lethal());
            }
        }

        for effect in &overdrive_effects {
            if resolve(game, &ctx, effect).lethal {
                return Ok(self.settle_lethal());
            }
        }

        // Other cards (e.g. drawn during resolution) still transform via
        // the sweep.
        if game.players[idx].overdrive {
            overdrive::sweep_transformations(game, idx);
            if game.players.iter().any(|p| p.health == 0) {
                return Ok(self.settle_lethal());
            }
        }

        // The first resolution pass after a phase change consumes the
        // one-shot flag.
        self.game.phase.take_just_changed();

        self.fire_secrets(idx, played_kind, played_base_cost);
        Ok(())
    }

    /// Ends the active player's turn and prepares the next one.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<(), TurnError> {
        let game = &mut *self.game;
        if game.game_over {
            return Err(TurnError::MatchOver);
        }
        let idx = game
            .index_of(player)
            .ok_or(TurnError::UnknownPlayer(player))?;
        if idx != game.active {
            return Err(TurnError::NotYourTurn(player));
        }

        game.history.archive_turn();
        game.active = Game::opponent_index(idx);
        game.turn_count += 1;

        match game
            .phase
            .tick_boundary(game.turn_count, game.config.phase_duration)
        {
            PhaseTick::Rotated(new_phase) => {
                // Phase changes energize both players.
                let base = game.config.phase_change_surge;
                let grant = if new_phase == Phase::Eclipse {
                    base * 2
                } else {
                    base
                };
                for p in game.players.iter_mut() {
                    p.grant_surge(grant);
                }
                tracing::debug!(phase = %new_phase, turn = game.turn_count, "phase rotated");
            }
            PhaseTick::Suppressed | PhaseTick::Idle => {}
        }

        let next = game.active;
        game.draw_cards(next, 1);
        let income = game.config.energy_income;
        game.players[next].grant_energy(income);

        self.tick_active_effects(next);
        if self.game.game_over {
            return Ok(());
        }
        overdrive::tick_countdown(self.game, next);
        Ok(())
    }

    /// Applies and ages the player's active effects at their turn start.
    /// Two-phase: snapshot the records, apply ticks, then decrement and
    /// drop expired entries.
    fn tick_active_effects(&mut self, idx: usize) {
        use crate::effect::EffectKind;

        let ticks: Vec<(EffectKind, u32)> = self.game.players[idx]
            .active_effects
            .iter()
            .map(|e| (e.kind, e.magnitude))
            .collect();

        for (kind, magnitude) in ticks {
            if kind == EffectKind::Burn {
                let outcome = self.game.players[idx].apply_damage(magnitude);
                tracing::debug!(player = %self.game.players[idx].id, magnitude, "burn tick");
                if outcome.lethal {
                    self.game.finish_with_loser(idx);
                    return;
                }
            }
        }

        let player = &mut self.game.players[idx];
        for effect in player.active_effects.iter_mut() {
            effect.remaining = effect.remaining.saturating_sub(1);
        }
        player.active_effects.retain(|e| e.remaining > 0);
    }

    /// Evaluates pending secrets against the card just played: all
    /// currently-matching secrets fire oldest-registered first, then move
    /// to their owner's discard. Secrets fired here never chain into other
    /// secrets from the same action.
    fn fire_secrets(&mut self, acting_idx: usize, kind: crate::state::CardKind, base_cost: u32) {
        let game = &mut *self.game;
        let acting_id = game.players[acting_idx].id;

        // Select, then apply: firing mutates the secret list, so matching
        // indices are collected up front.
        let matching: Vec<usize> = game
            .secrets
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                s.owner != acting_id
                    && s.card
                        .secret_trigger
                        .map(|t| t.matches(kind, base_cost))
                        .unwrap_or(false)
            })
            .map(|(i, _)| i)
            .collect();

        // Remove back-to-front so earlier indices stay valid; fire in
        // registration order.
        let mut fired: Vec<PendingSecret> = Vec::with_capacity(matching.len());
        for &i in matching.iter().rev() {
            fired.push(game.secrets.remove(i));
        }
        fired.reverse();

        let mut fired = fired.into_iter();
        while let Some(secret) = fired.next() {
            let owner_idx = match game.index_of(secret.owner) {
                Some(i) => i,
                None => continue,
            };
            tracing::debug!(owner = %secret.owner, card = %secret.card.instance, "secret triggered");
            let ctx = EffectContext {
                source: owner_idx,
                card: secret.card.instance,
                card_name: secret.card.name.clone(),
                card_kind: secret.card.kind,
            };
            let effects = secret.card.effects.clone();
            game.players[owner_idx].discard.push(secret.card);

            for effect in &effects {
                if effect.trigger == Trigger::OnTurnStart {
                    continue;
                }
                if resolve(game, &ctx, effect).lethal {
                    // Unresolved secrets stay spent: their cards still
                    // reach their owners' discard.
                    for leftover in fired {
                        if let Some(i) = game.index_of(leftover.owner) {
                            game.players[i].discard.push(leftover.card);
                        }
                    }
                    self.settle_lethal();
                    return;
                }
            }
        }
    }

    /// Ends the match against whichever player's health reached zero.
    fn settle_lethal(&mut self) {
        if let Some(loser) = self.game.players.iter().position(|p| p.health == 0) {
            self.game.finish_with_loser(loser);
            tracing::debug!(winner = ?self.game.winner, "match over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Effect, EffectKind, SecretTrigger, Target};
    use crate::state::CardKind;
    use crate::testing::{fixture_game, minion};

    const ALICE: PlayerId = PlayerId(0);
    const BOB: PlayerId = PlayerId(1);

    /// Puts a zero-cost card into the player's hand and returns its id.
    fn stage(game: &mut Game, idx: usize, mut card: crate::state::CardInstance) -> InstanceId {
        card.cost = 0;
        card.base_cost = 0;
        let id = card.instance;
        game.players[idx].hand.push(card);
        id
    }

    #[test]
    fn rejects_out_of_turn_and_unknown_players() {
        let mut game = fixture_game();
        let card = minion(&mut game, CardKind::Sun, 1, 1);
        let id = stage(&mut game, 1, card);

        let mut engine = GameEngine::new(&mut game);
        assert_eq!(
            engine.play_card(BOB, id).unwrap_err(),
            PlayError::NotYourTurn(BOB)
        );
        assert_eq!(
            engine.play_card(PlayerId(99), id).unwrap_err(),
            PlayError::UnknownPlayer(PlayerId(99))
        );
        assert_eq!(
            engine.end_turn(BOB).unwrap_err(),
            TurnError::NotYourTurn(BOB)
        );
    }

    #[test]
    fn insufficient_energy_mutates_nothing() {
        let mut game = fixture_game();
        let mut card = minion(&mut game, CardKind::Sun, 1, 1);
        card.cost = 2;
        let id = card.instance;
        game.players[0].hand.push(card);
        game.players[0].energy = 1;

        let mut engine = GameEngine::new(&mut game);
        assert_eq!(
            engine.play_card(ALICE, id).unwrap_err(),
            PlayError::InsufficientEnergy { need: 2, have: 1 }
        );
        assert_eq!(game.players[0].energy, 1);
        assert_eq!(game.players[0].hand.len(), 1);
        assert!(game.history.current_turn_plays.is_empty());
    }

    #[test]
    fn persistent_cards_land_on_the_battlefield_spells_in_discard() {
        let mut game = fixture_game();
        let card = minion(&mut game, CardKind::Sun, 2, 2);
        let body = stage(&mut game, 0, card);
        let mut spell = minion(&mut game, CardKind::Moon, 0, 0);
        spell.effects = vec![Effect::instant(EffectKind::Damage, 3).targeting(Target::Opponent)];
        let spell_id = stage(&mut game, 0, spell);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, body).unwrap();
        engine.play_card(ALICE, spell_id).unwrap();

        assert_eq!(game.players[0].battlefield.len(), 1);
        assert_eq!(game.players[0].discard.len(), 1);
        assert_eq!(game.players[1].health, 17);
        assert_eq!(game.history.current_turn_plays.len(), 2);
    }

    #[test]
    fn effect_cost_is_paid_and_discounted_by_phase() {
        let mut game = fixture_game();
        let mut card = minion(&mut game, CardKind::Sun, 1, 1);
        card.cost = 2;
        card.base_cost = 2;
        card.phase_bonus = vec![(
            crate::phase::Phase::Sunlight,
            crate::catalog::PhaseBonus {
                cost: -1,
                ..Default::default()
            },
        )];
        let id = card.instance;
        game.players[0].hand.push(card);
        game.players[0].energy = 1;

        // Sunlight is active at match start, so the effective cost is 1.
        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].energy, 0);
    }

    #[test]
    fn overdrive_surge_covers_the_cost_shortfall() {
        let mut game = fixture_game();
        let mut card = minion(&mut game, CardKind::Eclipse, 1, 1);
        card.cost = 3;
        let id = card.instance;
        game.players[0].hand.push(card);
        game.players[0].energy = 1;
        game.players[0].surge = 4;
        game.players[0].overdrive = true;
        game.players[0].overdrive_turns_left = 2;

        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].energy, 0);
        assert_eq!(game.players[0].surge, 2);
    }

    #[test]
    fn third_same_kind_play_fires_the_combo_once() {
        let mut game = fixture_game();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let card = minion(&mut game, CardKind::Moon, 0, 0);
            ids.push(stage(&mut game, 0, card));
        }

        let mut engine = GameEngine::new(&mut game);
        for id in ids {
            engine.play_card(ALICE, id).unwrap();
        }

        // Moon combo shields the streaking player; counters reset after.
        assert_eq!(game.players[0].shields, 3);
        assert_eq!(game.momentum.counters(ALICE).moon, 0);
    }

    #[test]
    fn off_kind_play_breaks_the_streak() {
        let mut game = fixture_game();
        let card = minion(&mut game, CardKind::Moon, 0, 0);
        let a = stage(&mut game, 0, card);
        let card = minion(&mut game, CardKind::Moon, 0, 0);
        let b = stage(&mut game, 0, card);
        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let off = stage(&mut game, 0, card);
        let card = minion(&mut game, CardKind::Moon, 0, 0);
        let c = stage(&mut game, 0, card);

        let mut engine = GameEngine::new(&mut game);
        for id in [a, b, off, c] {
            engine.play_card(ALICE, id).unwrap();
        }
        assert_eq!(game.players[0].shields, 0);
        assert_eq!(game.momentum.counters(ALICE).moon, 1);
    }

    #[test]
    fn negative_energy_yield_steals_from_the_opponent() {
        let mut game = fixture_game();
        let mut card = minion(&mut game, CardKind::Eclipse, 0, 0);
        card.energy_yield = -2;
        let id = stage(&mut game, 0, card);
        game.players[0].energy = 0;
        game.players[1].energy = 1;

        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].energy, 1);
        assert_eq!(game.players[1].energy, 0);
    }

    #[test]
    fn lethal_on_play_settles_and_blocks_further_actions() {
        let mut game = fixture_game();
        game.players[1].health = 2;
        let mut spell = minion(&mut game, CardKind::Sun, 0, 0);
        spell.effects = vec![Effect::instant(EffectKind::Damage, 5).targeting(Target::Opponent)];
        let id = stage(&mut game, 0, spell);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, id).unwrap();
        assert!(game.game_over);
        assert_eq!(game.winner, Some(ALICE));

        let mut engine = GameEngine::new(&mut game);
        assert_eq!(engine.end_turn(ALICE).unwrap_err(), TurnError::MatchOver);
    }

    #[test]
    fn end_turn_hands_over_draws_and_grants_income() {
        let mut game = fixture_game();
        let bob_hand = game.players[1].hand.len();
        game.players[1].energy = 0;

        GameEngine::new(&mut game).end_turn(ALICE).unwrap();
        assert_eq!(game.active, 1);
        assert_eq!(game.turn_count, 2);
        assert_eq!(game.players[1].hand.len(), bob_hand + 1);
        assert_eq!(game.players[1].energy, game.config.energy_income);
    }

    #[test]
    fn phase_rotates_on_schedule_and_grants_surge() {
        let mut game = fixture_game();
        let mut engine = GameEngine::new(&mut game);
        engine.end_turn(ALICE).unwrap();
        assert_eq!(game.phase.current(), Phase::Sunlight);

        // Turn 3 is the first scheduled boundary.
        GameEngine::new(&mut game).end_turn(BOB).unwrap();
        assert_eq!(game.phase.current(), Phase::Moonlight);
        assert!(game.phase.just_changed());
        assert_eq!(game.players[0].surge, game.config.phase_change_surge);
        assert_eq!(game.players[1].surge, game.config.phase_change_surge);

        // The first resolution pass after the change consumes the flag.
        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let id = stage(&mut game, 0, card);
        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert!(!game.phase.just_changed());
    }

    #[test]
    fn burn_ticks_at_the_owners_turn_start_and_can_be_lethal() {
        let mut game = fixture_game();
        game.players[1].register_active_effect(EffectKind::Burn, 2, 2);
        game.players[1].health = 5;

        GameEngine::new(&mut game).end_turn(ALICE).unwrap();
        assert_eq!(game.players[1].health, 3);
        assert_eq!(game.players[1].active_effects[0].remaining, 1);

        game.players[1].health = 2;
        GameEngine::new(&mut game).end_turn(BOB).unwrap();
        GameEngine::new(&mut game).end_turn(ALICE).unwrap();
        assert!(game.game_over);
        assert_eq!(game.winner, Some(ALICE));
    }

    #[test]
    fn secret_waits_face_down_and_fires_on_the_opponents_matching_play() {
        let mut game = fixture_game();
        let mut trap = minion(&mut game, CardKind::Moon, 0, 0);
        trap.secret_trigger = Some(SecretTrigger::KindPlayed(CardKind::Sun));
        trap.effects = vec![Effect::instant(EffectKind::Damage, 3).targeting(Target::Opponent)];
        let trap_id = stage(&mut game, 0, trap);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, trap_id).unwrap();
        assert_eq!(game.secrets.len(), 1);
        assert!(game.players[0].discard.is_empty());

        GameEngine::new(&mut game).end_turn(ALICE).unwrap();
        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let bait = stage(&mut game, 1, card);
        GameEngine::new(&mut game).play_card(BOB, bait).unwrap();

        // The trap targets the opponent of its owner.
        assert_eq!(game.players[1].health, 17);
        assert!(game.secrets.is_empty());
        assert_eq!(game.players[0].discard.len(), 1);
    }

    #[test]
    fn own_plays_never_spring_own_secrets() {
        let mut game = fixture_game();
        let mut trap = minion(&mut game, CardKind::Moon, 0, 0);
        trap.secret_trigger = Some(SecretTrigger::KindPlayed(CardKind::Sun));
        trap.effects = vec![Effect::instant(EffectKind::Damage, 3).targeting(Target::Opponent)];
        let trap_id = stage(&mut game, 0, trap);
        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let own_sun = stage(&mut game, 0, card);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, trap_id).unwrap();
        engine.play_card(ALICE, own_sun).unwrap();
        assert_eq!(game.secrets.len(), 1);
        assert_eq!(game.players[1].health, 20);
    }

    #[test]
    fn matching_secrets_fire_in_registration_order() {
        let mut game = fixture_game();
        let mut first = minion(&mut game, CardKind::Moon, 0, 0);
        first.name = "first".to_string();
        first.secret_trigger = Some(SecretTrigger::KindPlayed(CardKind::Sun));
        first.effects = vec![Effect::instant(EffectKind::Shield, 1)];
        let mut second = minion(&mut game, CardKind::Moon, 0, 0);
        second.name = "second".to_string();
        second.secret_trigger = Some(SecretTrigger::CostAtLeast(0));
        second.effects = vec![Effect::instant(EffectKind::Shield, 2)];
        let first_id = stage(&mut game, 0, first);
        let second_id = stage(&mut game, 0, second);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, first_id).unwrap();
        engine.play_card(ALICE, second_id).unwrap();
        engine.end_turn(ALICE).unwrap();

        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let bait = stage(&mut game, 1, card);
        GameEngine::new(&mut game).play_card(BOB, bait).unwrap();

        assert!(game.secrets.is_empty());
        let names: Vec<&str> = game.players[0]
            .discard
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(game.players[0].shields, 3);
    }

    #[test]
    fn cards_played_while_transformed_fire_overdrive_effects() {
        let mut game = fixture_game();
        game.players[0].overdrive = true;
        game.players[0].overdrive_turns_left = 2;
        let mut card = minion(&mut game, CardKind::Eclipse, 1, 1);
        card.overdrive_effects = vec![Effect::instant(EffectKind::Shield, 4)];
        let id = stage(&mut game, 0, card);

        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].shields, 4);
        assert!(game.players[0].battlefield[0].transformed);
    }

    #[test]
    fn spells_played_while_transformed_fire_overdrive_effects_from_discard() {
        let mut game = fixture_game();
        game.players[0].overdrive = true;
        game.players[0].overdrive_turns_left = 2;
        let mut spell = minion(&mut game, CardKind::Eclipse, 0, 0);
        spell.overdrive_effects = vec![Effect::instant(EffectKind::Shield, 4)];
        let id = stage(&mut game, 0, spell);

        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].shields, 4);
        assert!(game.players[0].discard[0].transformed);
    }

    #[test]
    fn cost_reduction_aura_discounts_the_effective_cost() {
        let mut game = fixture_game();
        let ctx = EffectContext {
            source: 0,
            card: InstanceId(500),
            card_name: "Quartermaster".to_string(),
            card_kind: CardKind::Moon,
        };
        resolve(
            &mut game,
            &ctx,
            &Effect::instant(EffectKind::CostReduction, 1).lasting(2),
        );
        assert_eq!(game.players[0].cost_reduction(), 1);

        let mut card = minion(&mut game, CardKind::Sun, 1, 1);
        card.cost = 2;
        let id = card.instance;
        game.players[0].hand.push(card);
        game.players[0].energy = 1;

        // Effective cost 2 − 1 = 1, payable with the single energy.
        GameEngine::new(&mut game).play_card(ALICE, id).unwrap();
        assert_eq!(game.players[0].energy, 0);
    }

    #[test]
    fn lethal_secret_still_spends_the_remaining_fired_secrets() {
        let mut game = fixture_game();
        game.players[1].health = 3;
        let mut killer = minion(&mut game, CardKind::Moon, 0, 0);
        killer.name = "killer".to_string();
        killer.secret_trigger = Some(SecretTrigger::KindPlayed(CardKind::Sun));
        killer.effects = vec![Effect::instant(EffectKind::Damage, 5).targeting(Target::Opponent)];
        let mut bystander = minion(&mut game, CardKind::Moon, 0, 0);
        bystander.name = "bystander".to_string();
        bystander.secret_trigger = Some(SecretTrigger::KindPlayed(CardKind::Sun));
        bystander.effects = vec![Effect::instant(EffectKind::Shield, 2)];
        let killer_id = stage(&mut game, 0, killer);
        let bystander_id = stage(&mut game, 0, bystander);

        let mut engine = GameEngine::new(&mut game);
        engine.play_card(ALICE, killer_id).unwrap();
        engine.play_card(ALICE, bystander_id).unwrap();
        engine.end_turn(ALICE).unwrap();

        let card = minion(&mut game, CardKind::Sun, 0, 0);
        let bait = stage(&mut game, 1, card);
        GameEngine::new(&mut game).play_card(BOB, bait).unwrap();

        assert!(game.game_over);
        assert_eq!(game.winner, Some(ALICE));
        assert!(game.secrets.is_empty());
        // The second secret never resolved, but its card was not lost.
        assert_eq!(game.players[0].shields, 0);
        let names: Vec<&str> = game.players[0]
            .discard
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["killer", "bystander"]);
    }

    #[test]
    fn overdrive_expires_after_its_countdown() {
        let mut game = fixture_game();
        game.players[0].overdrive = true;
        game.players[0].overdrive_turns_left = 1;

        GameEngine::new(&mut game).end_turn(ALICE).unwrap();
        assert!(game.players[0].overdrive, "opponent turn start does not tick it");
        GameEngine::new(&mut game).end_turn(BOB).unwrap();
        assert!(!game.players[0].overdrive);
    }
}
