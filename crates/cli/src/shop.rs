//! Parsed commands and their dispatch onto the stock registry and cart.

use rust_decimal::Decimal;
use shopsim_cart::{Cart, CartLine, CheckoutReceipt};
use shopsim_core::DomainError;
use shopsim_inventory::StockRegistry;
use tracing::{debug, info, warn};

/// A menu operation with its inputs already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddItem { name: String, quantity: u32 },
    Total,
    Checkout,
    Exit,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(CartLine),
    /// `NotFound` or `InsufficientStock`; nothing was changed.
    Rejected(DomainError),
    Total(Decimal),
    /// The command could not produce a result (e.g. a total out of range).
    Failed(DomainError),
    CheckedOut(CheckoutReceipt),
    Exit,
}

/// Stock plus the single cart operating on it.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    registry: StockRegistry,
    cart: Cart,
}

impl Shop {
    pub fn new(registry: StockRegistry) -> Self {
        Self {
            registry,
            cart: Cart::new(),
        }
    }

    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(?command, "executing");
        match command {
            Command::AddItem { name, quantity } => {
                match self.cart.add_item(&self.registry, &name, quantity) {
                    Ok(line) => Outcome::Added(line.clone()),
                    Err(err) if err.is_add_rejection() => {
                        info!(%err, "add to cart rejected");
                        Outcome::Rejected(err)
                    }
                    Err(err) => Outcome::Failed(err),
                }
            }
            Command::Total => match self.cart.total() {
                Ok(total) => Outcome::Total(total),
                Err(err) => {
                    warn!(%err, "cart total unavailable");
                    Outcome::Failed(err)
                }
            },
            Command::Checkout => Outcome::CheckedOut(self.cart.checkout(&mut self.registry)),
            Command::Exit => Outcome::Exit,
        }
    }
}
