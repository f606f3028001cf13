//! Stock domain module.
//!
//! This crate owns the authoritative product stock: which products exist, at
//! what unit price, and how many units are on hand. Pure in-memory logic (no
//! IO, no terminal, no storage).

pub mod product;
pub mod stock;

pub use product::{Product, max_unit_price};
pub use stock::{StockEntry, StockRegistry};
