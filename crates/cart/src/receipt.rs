use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line as it was applied against stock during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedLine {
    pub name: String,
    pub quantity: u32,
    pub stock_before: u32,
    pub stock_after: u32,
}

impl AppliedLine {
    /// Units the stock could not cover. Stock never drops below zero, so any
    /// excess over `stock_before` is reported here instead.
    pub fn shortfall(&self) -> u32 {
        let covered = self.stock_before.saturating_sub(self.stock_after);
        self.quantity.saturating_sub(covered)
    }
}

/// Summary of a completed checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    applied: Vec<AppliedLine>,
    skipped: Vec<String>,
    total: Option<Decimal>,
}

impl CheckoutReceipt {
    pub(crate) fn new(total: Option<Decimal>) -> Self {
        Self {
            applied: Vec::new(),
            skipped: Vec::new(),
            total,
        }
    }

    pub(crate) fn record_applied(&mut self, line: AppliedLine) {
        self.applied.push(line);
    }

    pub(crate) fn record_skipped(&mut self, name: impl Into<String>) {
        self.skipped.push(name.into());
    }

    pub fn applied(&self) -> &[AppliedLine] {
        &self.applied
    }

    /// Names of lines whose product had no stock entry at checkout time.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Cart total at the moment of checkout; `None` when it exceeded the
    /// decimal range.
    pub fn total(&self) -> Option<Decimal> {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.skipped.is_empty()
    }

    pub fn has_shortfall(&self) -> bool {
        self.applied.iter().any(|line| line.shortfall() > 0)
    }
}
