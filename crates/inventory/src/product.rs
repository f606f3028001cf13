use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopsim_core::{DomainError, DomainResult, ValueObject};

/// A named product with a unit price.
///
/// The name is the lookup key inside a registry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit_price: Decimal,
}

/// Largest accepted unit price: `max_unit_price() * u32::MAX` is exactly
/// `Decimal::MAX`, so the value of any single quantity always fits.
pub fn max_unit_price() -> Decimal {
    (Decimal::MAX / Decimal::from(u32::MAX)).trunc()
}

impl Product {
    /// Build a product, rejecting negative prices and prices above
    /// [`max_unit_price`].
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> DomainResult<Self> {
        let name = name.into();
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "unit price of {name} cannot be negative ({unit_price})"
            )));
        }
        if unit_price > max_unit_price() {
            return Err(DomainError::validation(format!(
                "unit price of {name} exceeds {} ({unit_price})",
                max_unit_price()
            )));
        }
        Ok(Self { name, unit_price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Price of `quantity` units.
    pub fn price_for(&self, quantity: u32) -> DomainResult<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| DomainError::overflow(format!("{} x {}", quantity, self.name)))
    }
}

impl ValueObject for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        let err = Product::new("monitor", Decimal::new(-1, 0)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("monitor") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let product = Product::new("sample", Decimal::ZERO).unwrap();
        assert_eq!(product.price_for(10), Ok(Decimal::ZERO));
    }

    #[test]
    fn price_for_multiplies_exactly() {
        let product = Product::new("cable", Decimal::new(1999, 2)).unwrap();
        assert_eq!(product.price_for(3), Ok(Decimal::new(5997, 2)));
    }

    #[test]
    fn price_above_cap_is_rejected() {
        let err = Product::new("yacht", Decimal::MAX).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("yacht") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn capped_price_times_any_quantity_fits() {
        let product = Product::new("yacht", max_unit_price()).unwrap();
        assert_eq!(product.price_for(u32::MAX), Ok(Decimal::MAX));
    }
}
