//! Authoritative match state.
//!
//! [`Game`] is the aggregate for one match: two players, the phase
//! schedule, momentum, pending secrets, and rolling history. It is created
//! once at match start and mutated exclusively through
//! [`GameEngine`](crate::engine::GameEngine) and its delegates. Matches
//! never share mutable data.

pub mod card;
pub mod common;
pub mod history;
pub mod player;

pub use card::{CardInstance, CardKind, CardRarity};
pub use common::{InstanceId, MatchId, PlayerId};
pub use history::{EffectRecord, MatchHistory, PlayedCardRecord};
pub use player::{ActiveEffect, DamageOutcome, PlayerState};

use crate::catalog::CardCatalog;
use crate::config::GameConfig;
use crate::momentum::MomentumTable;
use crate::phase::PhaseSchedule;
use crate::rng::{PcgRng, compute_seed};

/// Identity record supplied by the caller at match creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerIdentity {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Errors surfaced while creating a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("a match requires exactly two players (got {0})")]
    NotTwoPlayers(usize),

    #[error("player ids must be distinct")]
    DuplicatePlayerId,

    #[error("card catalog is empty")]
    EmptyCatalog,
}

/// A face-down card waiting on its trigger. Oldest-registered first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingSecret {
    pub owner: PlayerId,
    pub card: CardInstance,
}

/// Canonical state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub id: MatchId,
    pub config: GameConfig,
    pub players: [PlayerState; 2],
    /// Index into `players` of the player to act.
    pub active: usize,
    pub phase: PhaseSchedule,
    /// 1-based turn counter.
    pub turn_count: u32,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub momentum: MomentumTable,
    pub secrets: Vec<PendingSecret>,
    pub history: MatchHistory,

    /// RNG seed fixed at creation; combined with `shuffle_nonce` for each
    /// deterministic shuffle.
    seed: u64,
    shuffle_nonce: u64,
    /// Sequential card-instance allocator. Never reused.
    next_instance: u32,
}

impl Game {
    /// Creates a match: builds both decks from the catalog, shuffles them
    /// deterministically from `seed`, and draws opening hands.
    pub fn initialize(
        catalog: &dyn CardCatalog,
        config: GameConfig,
        identities: &[PlayerIdentity],
        seed: u64,
    ) -> Result<Self, InitError> {
        let [first, second] = identities else {
            return Err(InitError::NotTwoPlayers(identities.len()));
        };
        if first.id == second.id {
            return Err(InitError::DuplicatePlayerId);
        }
        if catalog.definitions().is_empty() {
            return Err(InitError::EmptyCatalog);
        }

        let starting_hand = config.starting_hand;
        let mut game = Self {
            id: MatchId(seed),
            players: [
                PlayerState::new(first.id, first.name.clone(), &config),
                PlayerState::new(second.id, second.name.clone(), &config),
            ],
            config,
            active: 0,
            phase: PhaseSchedule::new(),
            turn_count: 1,
            game_over: false,
            winner: None,
            momentum: MomentumTable::new(first.id, second.id),
            secrets: Vec::new(),
            history: MatchHistory::new(),
            seed,
            shuffle_nonce: 0,
            next_instance: 1,
        };

        for idx in 0..2 {
            let mut deck = Vec::new();
            for def in catalog.definitions() {
                for _ in 0..def.rarity.deck_copies() {
                    let id = game.allocate_instance();
                    deck.push(CardInstance::from_definition(id, def));
                }
            }
            game.shuffle(&mut deck);
            game.players[idx].deck = deck;
            game.draw_cards(idx, starting_hand);
        }

        Ok(game)
    }

    /// Allocates a new unique card-instance id.
    pub fn allocate_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    fn shuffle(&mut self, cards: &mut [CardInstance]) {
        let mut rng = PcgRng::new(compute_seed(self.seed, self.shuffle_nonce, 0));
        self.shuffle_nonce += 1;
        rng.shuffle(cards);
    }

    /// Draws up to `count` cards, reshuffling the discard pile into the
    /// deck when it runs dry. Draws nothing once both are empty.
    pub fn draw_cards(&mut self, idx: usize, count: usize) {
        for _ in 0..count {
            if self.players[idx].deck.is_empty() && !self.players[idx].discard.is_empty() {
                let mut recycled = std::mem::take(&mut self.players[idx].discard);
                self.shuffle(&mut recycled);
                self.players[idx].deck = recycled;
            }
            match self.players[idx].deck.pop() {
                Some(card) => self.players[idx].hand.push(card),
                None => break,
            }
        }
    }

    // ===== lookups =====

    pub fn index_of(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player)
    }

    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == player)
    }

    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.active]
    }

    /// Mutable references to a player and their opponent.
    pub fn pair_mut(&mut self, idx: usize) -> (&mut PlayerState, &mut PlayerState) {
        let (left, right) = self.players.split_at_mut(1);
        if idx == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        }
    }

    pub fn opponent_index(idx: usize) -> usize {
        1 - idx
    }

    /// Marks the match over with the opponent of `loser_idx` as winner.
    pub fn finish_with_loser(&mut self, loser_idx: usize) {
        self.game_over = true;
        self.winner = Some(self.players[Self::opponent_index(loser_idx)].id);
    }
}
