//! Interactive menu loop over any reader/writer pair.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use shopsim_core::{DomainError, DomainResult, Entity};
use shopsim_inventory::StockRegistry;
use tracing::{debug, info};

use crate::menu::{self, MenuOption};
use crate::shop::{Command, Outcome, Shop};

/// Runs the menu against `input`, writing prompts and results to `output`.
pub struct Session<R, W> {
    shop: Shop,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(registry: StockRegistry, input: R, output: W) -> Self {
        Self {
            shop: Shop::new(registry),
            input,
            output,
        }
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn into_parts(self) -> (Shop, W) {
        (self.shop, self.output)
    }

    /// Loop until the user picks Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        info!(products = self.shop.registry().len(), "session started");
        loop {
            writeln!(self.output, "{}", menu::MENU)?;
            write!(self.output, "{}", menu::PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed");
                break;
            };

            let command = match MenuOption::parse(&line) {
                Some(MenuOption::AddItem) => match self.read_add_item()? {
                    Some(command) => command,
                    None => {
                        writeln!(self.output)?;
                        continue;
                    }
                },
                Some(MenuOption::Total) => Command::Total,
                Some(MenuOption::Checkout) => Command::Checkout,
                Some(MenuOption::Exit) => Command::Exit,
                None => {
                    writeln!(self.output, "\nInvalid option. Try again.")?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            let outcome = self.shop.execute(command);
            self.render(&outcome)?;
            writeln!(self.output)?;
            if matches!(outcome, Outcome::Exit) {
                break;
            }
        }
        self.output.flush()?;
        info!(lines_in_cart = self.shop.cart().len(), "session ended");
        Ok(())
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for product name and quantity. `None` when the add is abandoned.
    fn read_add_item(&mut self) -> io::Result<Option<Command>> {
        write!(self.output, "Product name: ")?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(None);
        };

        write!(self.output, "Quantity: ")?;
        self.output.flush()?;
        let Some(raw_quantity) = self.read_line()? else {
            return Ok(None);
        };

        match menu::parse_quantity(&raw_quantity) {
            Some(quantity) => Ok(Some(Command::AddItem { name, quantity })),
            None => {
                writeln!(self.output, "Invalid quantity.")?;
                Ok(None)
            }
        }
    }

    fn render(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Added(line) => {
                writeln!(self.output, "Added {} x {}.", line.quantity(), line.name())
            }
            Outcome::Rejected(DomainError::NotFound(_)) => {
                writeln!(self.output, "Product not found in stock.")
            }
            Outcome::Rejected(DomainError::InsufficientStock { .. }) => {
                writeln!(self.output, "Insufficient stock quantity.")
            }
            Outcome::Rejected(other) => writeln!(self.output, "{other}"),
            Outcome::Total(total) => writeln!(self.output, "\nCart total: {total}"),
            Outcome::Failed(err) => writeln!(self.output, "\n{err}"),
            Outcome::CheckedOut(_) => writeln!(self.output, "\n\nCheckout completed.\n"),
            Outcome::Exit => writeln!(self.output, "\nExiting..."),
        }
    }
}

/// One line per stock entry followed by the value of everything on hand.
pub fn write_stock_listing(registry: &StockRegistry, out: &mut impl Write) -> io::Result<()> {
    for entry in registry.iter() {
        writeln!(
            out,
            "{:<4} {:<20} {:>10} x {:<6} = {}",
            entry.id(),
            entry.name(),
            entry.unit_price(),
            entry.quantity(),
            display_amount(entry.stock_value())
        )?;
    }
    writeln!(out, "Stock value: {}", display_amount(registry.total_value()))
}

fn display_amount(amount: DomainResult<Decimal>) -> String {
    match amount {
        Ok(amount) => amount.to_string(),
        Err(_) => "out of range".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_registry;

    fn run(input: &str) -> (Shop, String) {
        let mut session = Session::new(demo_registry().unwrap(), input.as_bytes(), Vec::new());
        session.run().unwrap();
        let (shop, output) = session.into_parts();
        (shop, String::from_utf8(output).unwrap())
    }

    #[test]
    fn exit_stops_the_loop() {
        let (_, output) = run("4\n2\n");
        assert!(output.contains("Exiting..."));
        assert_eq!(output.matches(menu::PROMPT).count(), 1);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (shop, output) = run("1\nmonitor\n2\n");
        assert_eq!(output.matches(menu::PROMPT).count(), 2);
        assert_eq!(shop.cart().len(), 1);
    }

    #[test]
    fn invalid_option_keeps_looping() {
        let (_, output) = run("9\n4\n");
        assert!(output.contains("Invalid option. Try again."));
        assert_eq!(output.matches(menu::PROMPT).count(), 2);
    }

    #[test]
    fn product_names_may_contain_spaces() {
        let mut registry = StockRegistry::new();
        registry
            .add_product("mouse pad", Decimal::from(15), 4)
            .unwrap();
        let mut session = Session::new(registry, "1\nmouse pad\n2\n4\n".as_bytes(), Vec::new());
        session.run().unwrap();
        assert_eq!(session.shop().cart().lines()[0].name(), "mouse pad");
    }

    #[test]
    fn unparsable_quantity_abandons_the_add() {
        let (shop, output) = run("1\nmonitor\nten\n4\n");
        assert!(output.contains("Invalid quantity."));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn stock_listing_survives_value_out_of_range() {
        let mut registry = StockRegistry::new();
        registry
            .add_product("yacht", shopsim_inventory::max_unit_price(), u32::MAX)
            .unwrap();
        registry.add_product("dinghy", Decimal::ONE, 1).unwrap();

        let mut out = Vec::new();
        write_stock_listing(&registry, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&Decimal::MAX.to_string()));
        assert!(text.ends_with("Stock value: out of range\n"));
    }

    #[test]
    fn stock_listing_shows_every_entry_and_total_value() {
        let mut out = Vec::new();
        write_stock_listing(&demo_registry().unwrap(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.matches("telefone").count(), 2);
        assert!(text.ends_with("Stock value: 34500\n"));
    }
}
