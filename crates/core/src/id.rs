//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Handle to a stock entry inside a registry.
///
/// Entries are only ever appended, so the position an entry was stored at
/// stays valid for the lifetime of the registry. Unlike a borrowed reference,
/// a handle can be held across registry mutations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockEntryId(usize);

impl StockEntryId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for StockEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<StockEntryId> for usize {
    fn from(value: StockEntryId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(StockEntryId::from_index(3).to_string(), "#3");
    }

    #[test]
    fn handles_order_by_insertion_position() {
        assert!(StockEntryId::from_index(0) < StockEntryId::from_index(1));
    }
}
