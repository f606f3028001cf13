//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::Parser;
use shopsim_inventory::StockRegistry;
use shopsim_observability::{LogConfig, LogFormat};

use crate::seed;

#[derive(Debug, Clone, Parser)]
#[command(name = "shopsim")]
#[command(version, about = "Console stock and shopping-cart simulator")]
pub struct Config {
    /// JSON file with the initial stock (array of {name, price, quantity})
    #[arg(long, env = "SHOPSIM_STOCK_FILE", value_name = "PATH")]
    pub stock_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "SHOPSIM_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log line format (json or pretty)
    #[arg(long, env = "SHOPSIM_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Print the stock and exit
    #[arg(long)]
    pub list: bool,
}

impl Config {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    /// Stock from `--stock-file` when given, otherwise the built-in demo stock.
    pub fn load_registry(&self) -> anyhow::Result<StockRegistry> {
        match &self.stock_file {
            Some(path) => seed::load_registry(path),
            None => Ok(seed::demo_registry()?),
        }
    }
}
