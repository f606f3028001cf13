use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use shopsim_core::{DomainError, DomainResult, Entity};
use shopsim_inventory::StockRegistry;

use crate::line::CartLine;
use crate::receipt::{AppliedLine, CheckoutReceipt};

/// Cart lifecycle: `Empty ⇄ HasItems --checkout--> Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Empty,
    HasItems,
}

/// Pending purchase lines, applied to stock on checkout.
///
/// The cart reads the registry when adding items and writes to it only during
/// [`Cart::checkout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::HasItems
        }
    }

    /// Add `quantity` units of `name` to the cart.
    ///
    /// Fails with [`DomainError::NotFound`] when no stock entry carries that
    /// name and with [`DomainError::InsufficientStock`] when the first matching
    /// entry holds fewer units than requested. Neither the cart nor the
    /// registry is modified on failure, and stock is never modified here.
    #[instrument(skip(self, registry))]
    pub fn add_item(
        &mut self,
        registry: &StockRegistry,
        name: &str,
        quantity: u32,
    ) -> DomainResult<&CartLine> {
        let entry = registry.find_product(name).ok_or_else(|| {
            debug!("product not in stock");
            DomainError::not_found(name)
        })?;

        if quantity > entry.quantity() {
            debug!(available = entry.quantity(), "insufficient stock");
            return Err(DomainError::insufficient_stock(
                name,
                quantity,
                entry.quantity(),
            ));
        }

        let line = CartLine::from_product(entry.product(), quantity);
        debug!(entry = %entry.id(), unit_price = %line.unit_price(), "line added");
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Sum of `unit_price * quantity` over every line; zero when empty.
    ///
    /// Fails with [`DomainError::Overflow`] when the sum leaves the decimal
    /// range.
    pub fn total(&self) -> DomainResult<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |sum, line| {
            sum.checked_add(line.line_total()?)
                .ok_or_else(|| DomainError::overflow("cart total"))
        })
    }

    /// Apply every line to stock, then empty the cart.
    ///
    /// Each line decrements the first stock entry with its name. Lines whose
    /// product no longer has an entry are skipped without error. Stock
    /// saturates at zero when several lines for one product add up to more
    /// than is on hand; only then does an entry drop by less than the line
    /// quantity, and the receipt reports the difference as a shortfall. The
    /// cart is cleared after all lines are processed, whatever happened to
    /// them.
    #[instrument(skip_all, fields(lines = self.lines.len()))]
    pub fn checkout(&mut self, registry: &mut StockRegistry) -> CheckoutReceipt {
        let total = self.total();
        if let Err(err) = &total {
            warn!(%err, "cart total not representable");
        }
        let mut receipt = CheckoutReceipt::new(total.ok());

        for line in &self.lines {
            let Some((id, before, after)) = registry.take(line.name(), line.quantity()) else {
                debug!(name = line.name(), "product vanished from stock; line skipped");
                receipt.record_skipped(line.name());
                continue;
            };
            debug!(name = line.name(), entry = %id, "line applied");

            let applied = AppliedLine {
                name: line.name().to_owned(),
                quantity: line.quantity(),
                stock_before: before,
                stock_after: after,
            };
            if applied.shortfall() > 0 {
                warn!(
                    name = line.name(),
                    requested = line.quantity(),
                    available = before,
                    "stock exhausted during checkout"
                );
            }
            receipt.record_applied(applied);
        }

        self.lines.clear();
        info!(
            applied = receipt.applied().len(),
            skipped = receipt.skipped().len(),
            total = ?receipt.total(),
            "checkout completed"
        );
        receipt
    }
}
