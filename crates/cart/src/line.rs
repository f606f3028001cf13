use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopsim_core::{DomainError, DomainResult, ValueObject};
use shopsim_inventory::Product;

/// Cart line: product name, unit price captured at add-time, quantity.
///
/// The price is a snapshot. Later changes to the stock entry do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Snapshot `product` for `quantity` units.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self::new(product.name(), product.unit_price(), quantity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> DomainResult<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| DomainError::overflow(format!("{} x {}", self.quantity, self.name)))
    }
}

impl ValueObject for CartLine {}
