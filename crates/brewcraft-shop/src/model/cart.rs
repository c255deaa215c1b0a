//! The order draft: cart lines, the in-progress item selection, and
//! the payment choice.
//!
//! All transitions here are pure, synchronous methods on [`Cart`]; the
//! cart actor merely dispatches its actions onto them. That keeps the
//! whole state machine testable without a runtime, and gives rendering
//! a single read-only projection ([`CartView`]) instead of reaching
//! into mutable state.

use crate::cart_actor::CartError;
use crate::model::menu::{MenuItem, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a visitor's cart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CartId(pub u64);

impl From<u64> for CartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Identity of a single accepted cart line.
///
/// Minted from a per-cart monotonic counter, so two lines never share
/// an id — not within one confirmation, not across rapid successive
/// ones. (A wall-clock scheme can collide under a coarse clock; a
/// counter cannot.)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LineId(pub u64);

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// One unit of a menu item accepted into the order.
///
/// Carries a copy of the item's name, price, and image as they were at
/// confirmation time; later catalog changes never reach back into the
/// cart. Lines are never edited in place — only added and removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// The at-most-one in-progress item configuration.
#[derive(Debug, Clone)]
pub struct DraftSelection {
    pub item: MenuItem,
    pub quantity: u32,
    pub instructions: String,
}

/// How the visitor intends to pay. A pure UI selection; nothing
/// downstream validates or charges it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Credit,
    Debit,
    Paypal,
    Apple,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Credit,
        PaymentMethod::Debit,
        PaymentMethod::Paypal,
        PaymentMethod::Apple,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Debit => "Debit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Apple => "Apple Pay",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only projection of a cart for rendering.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub payment: PaymentMethod,
    pub checkout_open: bool,
    pub draft: Option<DraftSelection>,
}

/// Snapshot produced by submitting an order.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub payment: PaymentMethod,
}

/// A visitor's order draft.
///
/// State machine: `{no draft}` ⇄ `{draft open}` → `{no draft, lines
/// appended}`. Checkout visibility is an independent boolean and never
/// depends on cart content.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    lines: Vec<CartLine>,
    draft: Option<DraftSelection>,
    payment: PaymentMethod,
    checkout_open: bool,
    next_line: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            draft: None,
            payment: PaymentMethod::default(),
            checkout_open: false,
            next_line: 1,
        }
    }

    // --- Transitions ---

    /// Starts configuring `item`: quantity 1, empty instructions.
    /// Replaces any draft already open.
    pub fn open_draft(&mut self, item: MenuItem) {
        self.draft = Some(DraftSelection {
            item,
            quantity: 1,
            instructions: String::new(),
        });
    }

    /// Sets the draft quantity, clamping below the minimum of 1.
    pub fn set_draft_quantity(&mut self, quantity: u32) -> Result<(), CartError> {
        let draft = self.draft.as_mut().ok_or(CartError::NoDraftOpen)?;
        draft.quantity = quantity.max(1);
        Ok(())
    }

    /// Increments the draft quantity. No upper bound.
    pub fn increment_draft(&mut self) -> Result<(), CartError> {
        let draft = self.draft.as_mut().ok_or(CartError::NoDraftOpen)?;
        draft.quantity += 1;
        Ok(())
    }

    /// Decrements the draft quantity, clamping at 1 rather than
    /// erroring.
    pub fn decrement_draft(&mut self) -> Result<(), CartError> {
        let draft = self.draft.as_mut().ok_or(CartError::NoDraftOpen)?;
        draft.quantity = draft.quantity.saturating_sub(1).max(1);
        Ok(())
    }

    /// Replaces the draft's special instructions. Free text, never
    /// validated, never read downstream.
    pub fn set_draft_instructions(&mut self, text: String) -> Result<(), CartError> {
        let draft = self.draft.as_mut().ok_or(CartError::NoDraftOpen)?;
        draft.instructions = text;
        Ok(())
    }

    /// Accepts the draft: appends exactly `quantity` lines, each with
    /// a fresh id and a copy of the item's name, price, and image.
    /// Clears the draft. Returns the number of lines added.
    pub fn confirm_draft(&mut self) -> Result<usize, CartError> {
        let draft = self.draft.take().ok_or(CartError::NoDraftOpen)?;
        for _ in 0..draft.quantity {
            self.lines.push(CartLine {
                id: LineId(self.next_line),
                name: draft.item.name.clone(),
                price: draft.item.price,
                image: draft.item.image.clone(),
            });
            self.next_line += 1;
        }
        Ok(draft.quantity as usize)
    }

    /// Discards the draft without touching the lines.
    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Removes the line with that id. A no-op, not an error, when no
    /// such line exists.
    pub fn remove_line(&mut self, id: LineId) {
        self.lines.retain(|line| line.id != id);
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    pub fn set_checkout_open(&mut self, open: bool) {
        self.checkout_open = open;
    }

    /// Finalizes the order: returns a receipt for the current lines
    /// and resets the cart to its initial state. Line ids keep
    /// counting up, so ids stay unique across the cart's lifetime.
    pub fn submit(&mut self) -> Result<OrderReceipt, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyOrder);
        }
        let lines = std::mem::take(&mut self.lines);
        let total = lines.iter().map(|l| l.price).sum();
        let receipt = OrderReceipt {
            lines,
            total,
            payment: self.payment,
        };
        self.draft = None;
        self.payment = PaymentMethod::default();
        self.checkout_open = false;
        Ok(receipt)
    }

    // --- Projections ---

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn draft(&self) -> Option<&DraftSelection> {
        self.draft.as_ref()
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    /// Exact sum of all line prices.
    pub fn total(&self) -> Price {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Total formatted to two decimals; `"0.00"` for an empty cart.
    pub fn total_display(&self) -> String {
        self.total().to_string()
    }

    /// Number of lines whose copied name equals `name`.
    pub fn quantity_of(&self, name: &str) -> usize {
        self.lines.iter().filter(|line| line.name == name).count()
    }

    /// The full read-only projection handed to rendering.
    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            total: self.total(),
            payment: self.payment,
            checkout_open: self.checkout_open,
            draft: self.draft.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::{Category, MenuItemId};
    use std::collections::HashSet;

    fn item(id: u64, name: &str, cents: u64) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            description: String::new(),
            image: format!("/images/{name}.svg"),
            category: Category::SignatureCoffee,
            popular: false,
        }
    }

    fn cart() -> Cart {
        Cart::new(CartId(1))
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart().total_display(), "0.00");
    }

    #[test]
    fn confirm_appends_quantity_lines_with_snapshot_prices() {
        let mut cart = cart();
        cart.open_draft(item(1, "Artisan Espresso", 450));
        cart.set_draft_quantity(2).unwrap();
        let added = cart.confirm_draft().unwrap();
        assert_eq!(added, 2);

        cart.open_draft(item(2, "Vanilla Latte", 525));
        cart.confirm_draft().unwrap();

        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.total_display(), "14.25");
        assert_eq!(cart.quantity_of("Artisan Espresso"), 2);
        assert_eq!(cart.quantity_of("Vanilla Latte"), 1);
        assert!(cart.lines().iter().all(|l| l.price.cents() > 0));
    }

    #[test]
    fn line_ids_are_distinct_across_successive_confirms() {
        let mut cart = cart();
        for _ in 0..2 {
            cart.open_draft(item(1, "Cold Brew", 425));
            cart.set_draft_quantity(5).unwrap();
            cart.confirm_draft().unwrap();
        }
        let ids: HashSet<LineId> = cart.lines().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn remove_line_then_cart_is_empty_again() {
        let mut cart = cart();
        cart.open_draft(item(3, "Croissant", 325));
        cart.confirm_draft().unwrap();
        let id = cart.lines()[0].id;

        cart.remove_line(id);
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_display(), "0.00");
    }

    #[test]
    fn remove_missing_line_is_a_no_op() {
        let mut cart = cart();
        cart.open_draft(item(3, "Croissant", 325));
        cart.confirm_draft().unwrap();

        cart.remove_line(LineId(999));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_display(), "3.25");
    }

    #[test]
    fn cancel_leaves_cart_untouched() {
        let mut cart = cart();
        cart.open_draft(item(1, "Matcha Latte", 550));
        cart.set_draft_quantity(4).unwrap();
        cart.cancel_draft();

        assert!(cart.draft().is_none());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_display(), "0.00");
    }

    #[test]
    fn quantity_clamps_below_one() {
        let mut cart = cart();
        cart.open_draft(item(1, "Chai Tea Latte", 475));
        cart.decrement_draft().unwrap();
        cart.decrement_draft().unwrap();
        assert_eq!(cart.draft().unwrap().quantity, 1);

        cart.set_draft_quantity(0).unwrap();
        assert_eq!(cart.draft().unwrap().quantity, 1);

        cart.increment_draft().unwrap();
        assert_eq!(cart.draft().unwrap().quantity, 2);
    }

    #[test]
    fn reopening_a_draft_replaces_it() {
        let mut cart = cart();
        cart.open_draft(item(1, "Hot Chocolate", 425));
        cart.set_draft_quantity(3).unwrap();
        cart.open_draft(item(2, "Iced Mocha", 525));

        let draft = cart.draft().unwrap();
        assert_eq!(draft.item.name, "Iced Mocha");
        assert_eq!(draft.quantity, 1);
        assert!(draft.instructions.is_empty());
    }

    #[test]
    fn draft_operations_require_an_open_draft() {
        let mut cart = cart();
        assert!(matches!(cart.confirm_draft(), Err(CartError::NoDraftOpen)));
        assert!(matches!(
            cart.set_draft_quantity(2),
            Err(CartError::NoDraftOpen)
        ));
        assert!(matches!(cart.increment_draft(), Err(CartError::NoDraftOpen)));
    }

    #[test]
    fn payment_methods_enumerate_each_option_once() {
        assert_eq!(PaymentMethod::ALL.len(), 4);
        let mut labels: Vec<_> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 4);
        assert_eq!(PaymentMethod::ALL[0], PaymentMethod::default());
    }

    #[test]
    fn checkout_visibility_is_independent_of_content() {
        let mut cart = cart();
        cart.set_checkout_open(true);
        assert!(cart.is_checkout_open());
        assert_eq!(cart.line_count(), 0);
        cart.set_checkout_open(false);
        assert!(!cart.is_checkout_open());
    }

    #[test]
    fn submit_yields_receipt_and_resets_cart() {
        let mut cart = cart();
        cart.open_draft(item(1, "Artisan Espresso", 450));
        cart.set_draft_quantity(2).unwrap();
        cart.confirm_draft().unwrap();
        cart.select_payment(PaymentMethod::Paypal);
        cart.set_checkout_open(true);

        let receipt = cart.submit().unwrap();
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total.to_string(), "9.00");
        assert_eq!(receipt.payment, PaymentMethod::Paypal);

        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_display(), "0.00");
        assert_eq!(cart.payment(), PaymentMethod::Credit);
        assert!(!cart.is_checkout_open());
    }

    #[test]
    fn submitting_an_empty_cart_is_an_error() {
        let mut cart = cart();
        assert!(matches!(cart.submit(), Err(CartError::EmptyOrder)));
    }

    #[test]
    fn line_ids_stay_unique_across_submit() {
        let mut cart = cart();
        cart.open_draft(item(1, "Cold Brew", 425));
        cart.confirm_draft().unwrap();
        let first = cart.lines()[0].id;
        cart.submit().unwrap();

        cart.open_draft(item(1, "Cold Brew", 425));
        cart.confirm_draft().unwrap();
        assert_ne!(cart.lines()[0].id, first);
    }
}
