use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use shopsim_core::{DomainError, DomainResult, Entity, StockEntryId};

use crate::product::Product;

/// A product together with the number of units on hand.
///
/// Quantities change only through [`StockRegistry::set_quantity`] and
/// [`StockRegistry::take`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    id: StockEntryId,
    product: Product,
    quantity: u32,
}

impl StockEntry {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn unit_price(&self) -> Decimal {
        self.product.unit_price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of everything on hand for this entry (`unit_price * quantity`).
    pub fn stock_value(&self) -> DomainResult<Decimal> {
        self.product.price_for(self.quantity)
    }
}

impl Entity for StockEntry {
    type Id = StockEntryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Authoritative set of products and their available quantities.
///
/// Entries are append-only. Duplicate product names are accepted and stored as
/// separate entries; every lookup by name resolves to the first one added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockRegistry {
    entries: Vec<StockEntry>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry built from raw fields.
    #[instrument(skip(self))]
    pub fn add_product(
        &mut self,
        name: &str,
        unit_price: Decimal,
        quantity: u32,
    ) -> DomainResult<StockEntryId> {
        let product = Product::new(name, unit_price)?;
        Ok(self.add(product, quantity))
    }

    /// Append a new entry for an already-built product.
    pub fn add(&mut self, product: Product, quantity: u32) -> StockEntryId {
        let id = StockEntryId::from_index(self.entries.len());
        if self.find(product.name()).is_some() {
            debug!(
                name = product.name(),
                %id,
                "duplicate product name; lookups keep resolving to the first entry"
            );
        }
        debug!(name = product.name(), %id, quantity, "stock entry added");
        self.entries.push(StockEntry {
            id,
            product,
            quantity,
        });
        id
    }

    /// Handle of the first entry whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<StockEntryId> {
        self.find_product(name).map(|entry| entry.id())
    }

    /// First entry whose name matches exactly.
    pub fn find_product(&self, name: &str) -> Option<&StockEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn get(&self, id: StockEntryId) -> Option<&StockEntry> {
        self.entries.get(id.index())
    }

    /// Overwrite the on-hand quantity of an entry.
    #[instrument(skip(self), fields(entry = %id))]
    pub fn set_quantity(&mut self, id: StockEntryId, quantity: u32) -> DomainResult<()> {
        let entry = self
            .entries
            .get_mut(id.index())
            .ok_or_else(|| DomainError::not_found(format!("stock entry {id}")))?;
        debug!(
            name = entry.name(),
            from = entry.quantity,
            to = quantity,
            "stock quantity set"
        );
        entry.quantity = quantity;
        Ok(())
    }

    /// Take up to `quantity` units from the first entry named `name`.
    ///
    /// Stock stops at zero. Returns the entry handle with the quantity before
    /// and after, or `None` when no entry carries that name.
    #[instrument(skip(self))]
    pub fn take(&mut self, name: &str, quantity: u32) -> Option<(StockEntryId, u32, u32)> {
        let entry = self.entries.iter_mut().find(|entry| entry.name() == name)?;
        let before = entry.quantity;
        entry.quantity = before.saturating_sub(quantity);
        debug!(entry = %entry.id, from = before, to = entry.quantity, "stock taken");
        Some((entry.id, before, entry.quantity))
    }

    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of [`StockEntry::stock_value`] over every entry.
    pub fn total_value(&self) -> DomainResult<Decimal> {
        self.entries.iter().try_fold(Decimal::ZERO, |sum, entry| {
            sum.checked_add(entry.stock_value()?)
                .ok_or_else(|| DomainError::overflow("stock value"))
        })
    }
}
