//! Initial stock: the built-in demo data or a JSON seed file.

use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use shopsim_core::DomainResult;
use shopsim_inventory::StockRegistry;
use tracing::info;

/// One stock entry as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Demo stock. "telefone" appears twice on purpose; lookups only ever see the
/// first one.
const DEMO_STOCK: [(&str, i64, u32); 4] = [
    ("monitor", 500, 50),
    ("telefone", 150, 30),
    ("teclado", 70, 50),
    ("telefone", 50, 30),
];

pub fn demo_registry() -> DomainResult<StockRegistry> {
    let mut registry = StockRegistry::new();
    for (name, price, quantity) in DEMO_STOCK {
        registry.add_product(name, Decimal::from(price), quantity)?;
    }
    Ok(registry)
}

/// Build a registry from seed entries, keeping their order.
pub fn build_registry(entries: &[SeedEntry]) -> DomainResult<StockRegistry> {
    let mut registry = StockRegistry::new();
    for entry in entries {
        registry.add_product(&entry.name, entry.price, entry.quantity)?;
    }
    Ok(registry)
}

pub fn registry_from_json(json: &str) -> anyhow::Result<StockRegistry> {
    let entries: Vec<SeedEntry> =
        serde_json::from_str(json).context("seed must be a JSON array of {name, price, quantity}")?;
    Ok(build_registry(&entries)?)
}

pub fn load_registry(path: &Path) -> anyhow::Result<StockRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stock file {}", path.display()))?;
    let registry = registry_from_json(&json)
        .with_context(|| format!("invalid stock file {}", path.display()))?;
    info!(path = %path.display(), entries = registry.len(), "stock loaded");
    Ok(registry)
}
