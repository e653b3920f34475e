//! Symbol catalog for definition lookup.
//!
//! The `SymbolCatalog` stores every symbol definition available to a game
//! and provides fast lookup by `SymbolId`. The default catalog is the fixed
//! set of eight ancient-Egyptian symbols.

use rustc_hash::FxHashMap;

use super::definition::{SymbolDefinition, SymbolId};

/// Registry of symbol definitions.
///
/// ## Example
///
/// ```
/// use concentration::cards::{SymbolCatalog, SymbolDefinition, SymbolId};
///
/// let mut catalog = SymbolCatalog::new();
/// catalog.register(SymbolDefinition::new(
///     SymbolId::new(1),
///     "Ankh",
///     "images/ankh.jpg",
///     "Eternal life.",
/// ));
///
/// let found = catalog.get(SymbolId::new(1)).unwrap();
/// assert_eq!(found.name, "Ankh");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolCatalog {
    symbols: FxHashMap<SymbolId, SymbolDefinition>,
}

impl SymbolCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default catalog: eight ancient-Egyptian symbols.
    #[must_use]
    pub fn egyptian() -> Self {
        let mut catalog = Self::new();
        let entries: [(u32, &str, &str, &str); 8] = [
            (
                1,
                "Ankh",
                "images/ankh.jpg",
                "The ankh represents the concept of eternal life. It frequently appears in \
                 Egyptian tomb paintings and other art.",
            ),
            (
                2,
                "Djed",
                "images/djed.jpg",
                "Djed is for stability. It was primarily associated with themes of rebirth \
                 and regeneration.",
            ),
            (
                3,
                "Wadjet Eye",
                "images/wadjet-eye.jpg",
                "It was known as a slogan to protect against envy, disease, harmful animals \
                 and evil spirits.",
            ),
            (
                4,
                "Was Sceptre",
                "images/was-sceptre.jpg",
                "It was the symbol of power in ancient Egyptian culture. It also represented \
                 the dominion of gods.",
            ),
            (
                5,
                "Feather Of Maat",
                "images/feather-of-maat.jpg",
                "Named after the goddess Maat who represented justice in Egyptian culture.",
            ),
            (
                6,
                "Egyptian Ouroboros",
                "images/ouroboros.jpg",
                "One of the symbols of the sun, as it represented the journeys of Aten, the \
                 solar disk in Egyptian mythology.",
            ),
            (
                7,
                "BA symbol",
                "images/ba-symbol.jpg",
                "Human personality in the spirit world. Conceived in the form of a bird with \
                 a human head carrying the features of the deceased person and spirit where \
                 she leaves the body after death to the sky where she lives in the stars.",
            ),
            (
                8,
                "Amenta",
                "images/amenta.jpg",
                "Amenta symbol represents the land of the dead (the earthly world).",
            ),
        ];

        for (id, name, image, meaning) in entries {
            catalog.register(SymbolDefinition::new(SymbolId::new(id), name, image, meaning));
        }
        catalog
    }

    /// Register a symbol definition.
    ///
    /// Panics if a symbol with the same ID already exists.
    pub fn register(&mut self, symbol: SymbolDefinition) {
        if self.symbols.contains_key(&symbol.id) {
            panic!("Symbol with ID {:?} already registered", symbol.id);
        }
        self.symbols.insert(symbol.id, symbol);
    }

    /// Get a symbol definition by ID.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&SymbolDefinition> {
        self.symbols.get(&id)
    }

    /// Get a symbol definition by ID, panicking if not found.
    ///
    /// Use for symbols known to be on the board - a miss is a
    /// construction bug, not a runtime condition.
    #[must_use]
    pub fn get_unchecked(&self, id: SymbolId) -> &SymbolDefinition {
        self.symbols.get(&id).expect("Symbol not found in catalog")
    }

    /// Check if a symbol ID is registered.
    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.symbols.contains_key(&id)
    }

    /// Number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all symbol definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.values()
    }

    /// All symbol IDs in ascending order.
    ///
    /// Dealing iterates in this order so that a seed fully determines a deal
    /// regardless of registration order.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<SymbolId> {
        let mut ids: Vec<_> = self.symbols.keys().copied().collect();
        ids.sort();
        ids
    }
}
