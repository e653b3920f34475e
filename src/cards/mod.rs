//! Card system: symbol definitions, catalog, and placed instances.
//!
//! ## Key Types
//!
//! - `SymbolId`: Identifier for symbol definitions
//! - `SymbolDefinition`: Static symbol data (name, image, meaning)
//! - `SymbolCatalog`: Symbol definition lookup, with the default
//!   eight-symbol Egyptian set
//! - `CardInstance`: One placed card (symbol ref, position,
//!   `matched`/`selected` flags)
//!
//! Two instances share each symbol - that shared ID is what the turn
//! machine compares when a pair is revealed.

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::SymbolCatalog;
pub use definition::{SymbolDefinition, SymbolId};
pub use instance::CardInstance;
