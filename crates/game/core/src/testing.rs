//! Shared fixtures for unit tests.

use crate::catalog::{CardCatalog, CardDefId, CardDefinition};
use crate::config::GameConfig;
use crate::state::card::{CardInstance, CardKind, CardRarity};
use crate::state::{Game, PlayerId, PlayerIdentity};

/// In-memory catalog backed by a plain `Vec`.
pub struct FixtureCatalog {
    definitions: Vec<CardDefinition>,
}

impl FixtureCatalog {
    pub fn new(definitions: Vec<CardDefinition>) -> Self {
        Self { definitions }
    }
}

impl CardCatalog for FixtureCatalog {
    fn definition(&self, id: &CardDefId) -> Option<&CardDefinition> {
        self.definitions.iter().find(|d| &d.id == id)
    }

    fn definitions(&self) -> &[CardDefinition] {
        &self.definitions
    }
}

/// Bare definition with no effects; tests attach what they need.
pub fn plain_definition(id: &str, kind: CardKind, attack: u32, health: u32) -> CardDefinition {
    CardDefinition {
        id: CardDefId::new(id),
        name: id.to_string(),
        kind,
        rarity: CardRarity::Common,
        attack,
        health,
        cost: 1,
        energy_yield: 0,
        phase_bonus: vec![],
        effects: vec![],
        overdrive_effects: vec![],
        secret_trigger: None,
    }
}

/// Two-player match with default rules, empty opening hands, and a small
/// filler deck, so tests can stage hands and battlefields explicitly.
pub fn fixture_game() -> Game {
    let catalog = FixtureCatalog::new(vec![plain_definition("filler", CardKind::Sun, 1, 1)]);
    let config = GameConfig {
        starting_hand: 0,
        ..GameConfig::new()
    };
    let identities = [
        PlayerIdentity::new(PlayerId(0), "alice"),
        PlayerIdentity::new(PlayerId(1), "bob"),
    ];
    Game::initialize(&catalog, config, &identities, 7).expect("fixture initialization")
}

/// Spawns a battlefield-ready card with a fresh instance id. The caller
/// pushes it into whichever zone the test needs.
pub fn minion(game: &mut Game, kind: CardKind, attack: u32, health: u32) -> CardInstance {
    let def = plain_definition("fixture_minion", kind, attack, health);
    let id = game.allocate_instance();
    CardInstance::from_definition(id, &def)
}
