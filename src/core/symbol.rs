//! Symbol identifiers.
//!
//! A symbol is whatever picture is printed on a card face. The core never
//! interprets it; it only compares two symbols for equality.

use serde::{Deserialize, Serialize};

/// Identifier of the symbol pictured on a card.
///
/// Not unique per card: exactly two cards in a deck share each symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub String);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the symbol name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SymbolId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
