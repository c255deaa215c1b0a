//! Menu catalog types: prices, categories, and the immutable items
//! the café offers.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A currency amount in whole cents.
///
/// Cart totals must be exact, so prices are fixed-point integers;
/// rounding only ever happens in the two-decimal display, which is
/// itself exact because the unit is cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Menu sections offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    SignatureCoffee,
    SpecialtyDrinks,
    FreshPastries,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SignatureCoffee,
        Category::SpecialtyDrinks,
        Category::FreshPastries,
    ];

    /// Human-readable section heading.
    pub fn label(self) -> &'static str {
        match self {
            Category::SignatureCoffee => "Signature Coffee",
            Category::SpecialtyDrinks => "Specialty Drinks",
            Category::FreshPastries => "Fresh Pastries",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Type-safe identifier for menu items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MenuItemId(pub u64);

impl From<u64> for MenuItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// An entry in the menu catalog.
///
/// Items are seeded once at startup and never change afterwards; the
/// catalog actor rejects update requests outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub popular: bool,
}

/// Everything needed to seed one menu item.
#[derive(Debug, Clone)]
pub struct MenuItemSpec {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub popular: bool,
}
