//! Card set loader.

use std::path::Path;

use eclipse_core::CardDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Card set structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub cards: Vec<CardDefinition>,
}

/// Loader for card sets from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load a card set from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CardDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a card set from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<CardDefinition>> {
        let set: CardSet = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card set RON: {}", e))?;
        Ok(set.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eclipse_core::{CardCatalog, CardDefId, CardKind, EffectKind, Target};

    #[test]
    fn parses_a_minimal_card() {
        let cards = CardLoader::parse(
            r#"(cards: [(
                id: "ember",
                name: "Ember",
                kind: Sun,
                rarity: Common,
                attack: 0,
                health: 0,
                cost: 1,
                effects: [(kind: Damage, magnitude: 2, target: Opponent)],
            )])"#,
        )
        .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, CardDefId::new("ember"));
        assert_eq!(cards[0].effects[0].kind, EffectKind::Damage);
        assert_eq!(cards[0].effects[0].target, Target::Opponent);
        // Omitted optional fields take their defaults.
        assert_eq!(cards[0].energy_yield, 0);
        assert!(cards[0].secret_trigger.is_none());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(CardLoader::parse("(cards: [(id: 42)])").is_err());
    }

    #[test]
    fn builtin_set_loads_and_is_well_formed() {
        let catalog = crate::StaticCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());

        let mut seen = std::collections::HashSet::new();
        for def in catalog.definitions() {
            assert!(seen.insert(def.id.clone()), "duplicate id {}", def.id);
            assert!(!def.name.is_empty());
        }
        // The starter set covers every kind and includes at least one secret.
        for kind in CardKind::ALL {
            assert!(catalog.definitions().iter().any(|d| d.kind == kind));
        }
        assert!(
            catalog
                .definitions()
                .iter()
                .any(|d| d.secret_trigger.is_some())
        );
    }
}
