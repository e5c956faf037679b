//! The numbered main menu.

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    UpdateStock,
    DeleteItem,
    RecordSale,
    LowStock,
    Report,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddItem,
        MenuChoice::UpdateStock,
        MenuChoice::DeleteItem,
        MenuChoice::RecordSale,
        MenuChoice::LowStock,
        MenuChoice::Report,
        MenuChoice::Quit,
    ];

    /// The number typed to pick this entry.
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::UpdateStock => 2,
            MenuChoice::DeleteItem => 3,
            MenuChoice::RecordSale => 4,
            MenuChoice::LowStock => 5,
            MenuChoice::Report => 6,
            MenuChoice::Quit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Add item",
            MenuChoice::UpdateStock => "Update stock",
            MenuChoice::DeleteItem => "Delete item",
            MenuChoice::RecordSale => "Record sale",
            MenuChoice::LowStock => "Low-stock check",
            MenuChoice::Report => "Report",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| trimmed.parse::<u8>() == Ok(choice.number()))
            .ok_or_else(|| format!("Invalid choice: {}", trimmed))
    }
}
