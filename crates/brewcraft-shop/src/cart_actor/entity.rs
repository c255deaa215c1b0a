//! [`Entity`] implementation for [`Cart`].
//!
//! The actor layer stays thin: each action dispatches onto the pure
//! transition methods in [`crate::model::cart`]. The one asynchronous
//! step is `OpenDraft`, which resolves the item name against the
//! catalog actor injected as context — the draft then carries a full
//! copy of the item, so confirmation later needs no further lookup.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::CatalogClient;
use crate::model::{Cart, CartId};
use async_trait::async_trait;
use brewcraft_actors::Entity;

/// Payload for opening a new cart. Carts start empty; there is
/// nothing to configure.
#[derive(Debug)]
pub struct CartCreate;

#[async_trait]
impl Entity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CatalogClient;
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &CatalogClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        catalog: &CatalogClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::OpenDraft { item_name } => {
                let item = catalog
                    .find_by_name(&item_name)
                    .await
                    .map_err(|e| CartError::Catalog(e.to_string()))?
                    .ok_or_else(|| CartError::UnknownItem(item_name.clone()))?;
                self.open_draft(item);
                Ok(CartActionResult::Done)
            }
            CartAction::SetDraftQuantity(quantity) => {
                self.set_draft_quantity(quantity)?;
                Ok(CartActionResult::Done)
            }
            CartAction::IncrementDraft => {
                self.increment_draft()?;
                Ok(CartActionResult::Done)
            }
            CartAction::DecrementDraft => {
                self.decrement_draft()?;
                Ok(CartActionResult::Done)
            }
            CartAction::SetDraftInstructions(text) => {
                self.set_draft_instructions(text)?;
                Ok(CartActionResult::Done)
            }
            CartAction::ConfirmDraft => {
                let added = self.confirm_draft()?;
                Ok(CartActionResult::LinesAdded(added))
            }
            CartAction::CancelDraft => {
                self.cancel_draft();
                Ok(CartActionResult::Done)
            }
            CartAction::RemoveLine(id) => {
                self.remove_line(id);
                Ok(CartActionResult::Done)
            }
            CartAction::SelectPayment(method) => {
                self.select_payment(method);
                Ok(CartActionResult::Done)
            }
            CartAction::SetCheckoutOpen(open) => {
                self.set_checkout_open(open);
                Ok(CartActionResult::Done)
            }
            CartAction::TotalPrice => Ok(CartActionResult::Total(self.total_display())),
            CartAction::QuantityInCart(name) => {
                Ok(CartActionResult::Count(self.quantity_of(&name)))
            }
            CartAction::View => Ok(CartActionResult::View(self.view())),
            CartAction::SubmitOrder => {
                let receipt = self.submit()?;
                Ok(CartActionResult::Receipt(receipt))
            }
        }
    }
}
