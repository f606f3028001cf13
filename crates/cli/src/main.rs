use std::io;

use anyhow::Context;
use clap::Parser;

use shopsim_cli::{Config, Session, write_stock_listing};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    shopsim_observability::init(&config.log_config());

    let registry = config.load_registry()?;
    tracing::info!(products = registry.len(), "stock ready");

    let stdout = io::stdout();
    if config.list {
        write_stock_listing(&registry, &mut stdout.lock())
            .context("failed to write stock listing")?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(registry, stdin.lock(), stdout.lock());
    session.run().context("menu loop failed")?;
    Ok(())
}
