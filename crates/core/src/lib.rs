//! `shopsim-core` — building blocks shared by the stock and cart crates.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::StockEntryId;
pub use value_object::ValueObject;
