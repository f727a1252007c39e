//! In-memory card catalog.

use std::collections::HashMap;

use eclipse_core::{CardCatalog, CardDefId, CardDefinition};

/// Immutable catalog backed by a definition list with an id index.
///
/// Definitions keep their insertion order, which deck construction relies
/// on for deterministic replays. Duplicate ids keep the first occurrence.
pub struct StaticCatalog {
    definitions: Vec<CardDefinition>,
    index: HashMap<CardDefId, usize>,
}

impl StaticCatalog {
    pub fn new(definitions: Vec<CardDefinition>) -> Self {
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            index.entry(def.id.clone()).or_insert(i);
        }
        Self { definitions, index }
    }

    /// The built-in starter card set.
    #[cfg(feature = "loaders")]
    pub fn builtin() -> crate::loaders::LoadResult<Self> {
        let definitions = crate::loaders::CardLoader::parse(include_str!("../data/cards.ron"))?;
        Ok(Self::new(definitions))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl CardCatalog for StaticCatalog {
    fn definition(&self, id: &CardDefId) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.definitions[i])
    }

    fn definitions(&self) -> &[CardDefinition] {
        &self.definitions
    }
}
