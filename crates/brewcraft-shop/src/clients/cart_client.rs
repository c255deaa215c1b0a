//! High-level API for the cart actor.
//!
//! Wraps the generic [`EntityClient`] so callers work with typed
//! domain methods (`confirm_draft`, `total_price`, …) instead of
//! matching on [`CartActionResult`] at every call site.

use crate::cart_actor::{CartAction, CartActionResult, CartCreate, CartError};
use crate::model::{Cart, CartId, CartView, LineId, OrderReceipt, PaymentMethod};
use async_trait::async_trait;
use brewcraft_actors::{ActorError, EntityClient, EntityHandle};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: EntityClient<Cart>,
}

impl CartClient {
    pub fn new(inner: EntityClient<Cart>) -> Self {
        Self { inner }
    }

    fn communication(e: ActorError) -> CartError {
        CartError::ActorCommunication(e.to_string())
    }

    /// Each action returns its paired result variant; anything else
    /// means the other end of the channel is not the real cart actor.
    fn mismatch(other: CartActionResult) -> CartError {
        CartError::ActorCommunication(format!("unexpected action result: {other:?}"))
    }

    async fn act(&self, cart: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(cart, action)
            .await
            .map_err(Self::communication)
    }

    /// Sends an action whose only interesting outcome is success.
    async fn act_done(&self, cart: CartId, action: CartAction) -> Result<(), CartError> {
        match self.act(cart, action).await? {
            CartActionResult::Done => Ok(()),
            other => Err(Self::mismatch(other)),
        }
    }

    /// Opens an empty cart for a new visitor session.
    #[instrument(skip(self))]
    pub async fn begin_session(&self) -> Result<CartId, CartError> {
        debug!("sending request");
        self.inner
            .create(CartCreate)
            .await
            .map_err(Self::communication)
    }

    /// Starts configuring the named item: quantity 1, empty
    /// instructions.
    #[instrument(skip(self))]
    pub async fn open_draft(&self, cart: CartId, item_name: &str) -> Result<(), CartError> {
        self.act_done(
            cart,
            CartAction::OpenDraft {
                item_name: item_name.to_string(),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_draft_quantity(&self, cart: CartId, quantity: u32) -> Result<(), CartError> {
        self.act_done(cart, CartAction::SetDraftQuantity(quantity))
            .await
    }

    #[instrument(skip(self))]
    pub async fn increment_draft(&self, cart: CartId) -> Result<(), CartError> {
        self.act_done(cart, CartAction::IncrementDraft).await
    }

    #[instrument(skip(self))]
    pub async fn decrement_draft(&self, cart: CartId) -> Result<(), CartError> {
        self.act_done(cart, CartAction::DecrementDraft).await
    }

    #[instrument(skip(self))]
    pub async fn set_draft_instructions(
        &self,
        cart: CartId,
        text: &str,
    ) -> Result<(), CartError> {
        self.act_done(cart, CartAction::SetDraftInstructions(text.to_string()))
            .await
    }

    /// Accepts the draft; returns how many lines were added.
    #[instrument(skip(self))]
    pub async fn confirm_draft(&self, cart: CartId) -> Result<usize, CartError> {
        match self.act(cart, CartAction::ConfirmDraft).await? {
            CartActionResult::LinesAdded(n) => Ok(n),
            other => Err(Self::mismatch(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel_draft(&self, cart: CartId) -> Result<(), CartError> {
        self.act_done(cart, CartAction::CancelDraft).await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, cart: CartId, line: LineId) -> Result<(), CartError> {
        self.act_done(cart, CartAction::RemoveLine(line)).await
    }

    #[instrument(skip(self))]
    pub async fn select_payment(
        &self,
        cart: CartId,
        method: PaymentMethod,
    ) -> Result<(), CartError> {
        self.act_done(cart, CartAction::SelectPayment(method)).await
    }

    #[instrument(skip(self))]
    pub async fn set_checkout_open(&self, cart: CartId, open: bool) -> Result<(), CartError> {
        self.act_done(cart, CartAction::SetCheckoutOpen(open)).await
    }

    /// Formatted total of all lines; `"0.00"` when the cart is empty.
    #[instrument(skip(self))]
    pub async fn total_price(&self, cart: CartId) -> Result<String, CartError> {
        match self.act(cart, CartAction::TotalPrice).await? {
            CartActionResult::Total(total) => Ok(total),
            other => Err(Self::mismatch(other)),
        }
    }

    /// Number of lines carrying the given item name.
    #[instrument(skip(self))]
    pub async fn quantity_in_cart(&self, cart: CartId, name: &str) -> Result<usize, CartError> {
        match self
            .act(cart, CartAction::QuantityInCart(name.to_string()))
            .await?
        {
            CartActionResult::Count(n) => Ok(n),
            other => Err(Self::mismatch(other)),
        }
    }

    /// Read-only projection for rendering.
    #[instrument(skip(self))]
    pub async fn view(&self, cart: CartId) -> Result<CartView, CartError> {
        match self.act(cart, CartAction::View).await? {
            CartActionResult::View(view) => Ok(view),
            other => Err(Self::mismatch(other)),
        }
    }

    /// Finalizes the order and resets the cart.
    #[instrument(skip(self))]
    pub async fn submit_order(&self, cart: CartId) -> Result<OrderReceipt, CartError> {
        match self.act(cart, CartAction::SubmitOrder).await? {
            CartActionResult::Receipt(receipt) => Ok(receipt),
            other => Err(Self::mismatch(other)),
        }
    }
}

#[async_trait]
impl EntityHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &EntityClient<Cart> {
        &self.inner
    }

    fn map_error(e: ActorError) -> Self::Error {
        CartError::ActorCommunication(e.to_string())
    }
}
