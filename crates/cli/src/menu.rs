//! Menu text and option parsing.

pub const MENU: &str = "      ===== Menu =====
1. Add item to cart
2. Compute cart total
3. Checkout
4. Exit
================================";

pub const PROMPT: &str = "Choose an option: ";

/// The four numbered menu entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    AddItem,
    Total,
    Checkout,
    Exit,
}

impl MenuOption {
    /// Map a line of user input to a menu entry. Anything but `1`..`4` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::Total),
            "3" => Some(Self::Checkout),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Quantity as typed by the user: a non-negative integer.
pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
