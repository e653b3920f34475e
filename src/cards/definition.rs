//! Symbol definitions - static card data.
//!
//! `SymbolDefinition` holds the immutable properties of a symbol: its
//! display name, image reference, and meaning text. The board carries two
//! card instances per symbol - instance-specific data (`matched`,
//! `selected`, position) lives in `CardInstance`, never here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a symbol definition.
///
/// Identifies the symbol itself (e.g. "Ankh"), not a placed card;
/// the two cards of a matching pair share one `SymbolId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Static symbol definition.
///
/// Loaded into the catalog at startup and never mutated.
///
/// ## Example
///
/// ```
/// use concentration::cards::{SymbolDefinition, SymbolId};
///
/// let ankh = SymbolDefinition::new(
///     SymbolId::new(1),
///     "Ankh",
///     "images/ankh.jpg",
///     "The ankh represents the concept of eternal life.",
/// );
///
/// assert_eq!(ankh.name, "Ankh");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    /// Unique identifier for this symbol.
    pub id: SymbolId,

    /// Display name.
    pub name: String,

    /// Display-asset reference (image path or URL).
    pub image: String,

    /// Descriptive text shown in the meaning panel after a match.
    pub meaning: String,
}

impl SymbolDefinition {
    /// Create a new symbol definition.
    #[must_use]
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        image: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            meaning: meaning.into(),
        }
    }
}
