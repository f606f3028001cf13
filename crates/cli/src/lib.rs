//! Console driver for the stock/cart simulator.
//!
//! The driver stays thin: [`menu`] turns text into [`shop::Command`]s,
//! [`shop::Shop`] runs them against the domain crates, and [`session`] wires
//! both to a reader/writer pair.

pub mod config;
pub mod menu;
pub mod seed;
pub mod session;
pub mod shop;

pub use config::Config;
pub use menu::MenuOption;
pub use session::{Session, write_stock_listing};
pub use shop::{Command, Outcome, Shop};
