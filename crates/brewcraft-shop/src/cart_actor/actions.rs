//! Action set of the cart actor: every order-draft operation a
//! visitor can trigger, plus the read-only projections.

use crate::model::{CartView, LineId, OrderReceipt, PaymentMethod};

/// Operations on a single cart.
#[derive(Debug)]
pub enum CartAction {
    /// Start configuring the named menu item (quantity 1, empty
    /// instructions). Replaces any draft already open.
    OpenDraft { item_name: String },
    /// Set the draft quantity; values below 1 clamp to 1.
    SetDraftQuantity(u32),
    /// Stepper increment; unbounded.
    IncrementDraft,
    /// Stepper decrement; clamps at 1.
    DecrementDraft,
    /// Replace the draft's special instructions.
    SetDraftInstructions(String),
    /// Accept the draft into the cart.
    ConfirmDraft,
    /// Discard the draft, leaving the cart untouched.
    CancelDraft,
    /// Remove one line; a no-op when the id does not exist.
    RemoveLine(LineId),
    /// Choose how to pay.
    SelectPayment(PaymentMethod),
    /// Show or hide the checkout view. Independent of cart content.
    SetCheckoutOpen(bool),
    /// Formatted total of all lines.
    TotalPrice,
    /// How many lines carry the given item name.
    QuantityInCart(String),
    /// Full read-only projection for rendering.
    View,
    /// Finalize the order: receipt out, cart reset.
    SubmitOrder,
}

/// Results paired with [`CartAction`] variants.
#[derive(Debug)]
pub enum CartActionResult {
    Done,
    /// Number of lines appended by a confirm.
    LinesAdded(usize),
    /// Two-decimal total, `"0.00"` when empty.
    Total(String),
    /// Line count for a queried item name.
    Count(usize),
    View(CartView),
    Receipt(OrderReceipt),
}
