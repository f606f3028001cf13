//! Shopping cart domain module.
//!
//! Accumulates purchase lines against a [`shopsim_inventory::StockRegistry`]
//! and applies them to stock on checkout. Pure in-memory logic (no IO).

pub mod cart;
pub mod line;
pub mod receipt;

pub use cart::{Cart, CartState};
pub use line::CartLine;
pub use receipt::{AppliedLine, CheckoutReceipt};
