//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a `Product { name: "monitor", unit_price: 500 }`
///   captured into a cart line is interchangeable with any other equal copy)
/// - **Entity**: has identity (two stock entries for "telefone" are different
///   entries even when their fields match)
///
/// Value objects are **immutable**. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Product {
///     name: String,
///     unit_price: Decimal,
/// }
///
/// impl ValueObject for Product {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
