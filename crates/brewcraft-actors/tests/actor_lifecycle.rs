use async_trait::async_trait;
use brewcraft_actors::{Entity, EntityActor};

// --- Test entity: a prepaid gift card ---

#[derive(Clone, Debug, PartialEq)]
struct GiftCard {
    id: u64,
    owner: String,
    balance_cents: u64,
}

#[derive(Debug)]
struct GiftCardCreate {
    owner: String,
    balance_cents: u64,
}

#[derive(Debug)]
struct GiftCardUpdate {
    owner: Option<String>,
}

#[derive(Debug)]
enum GiftCardAction {
    Redeem(u64),
    Balance,
}

#[derive(Debug, thiserror::Error)]
enum GiftCardError {
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u64, need: u64 },
}

#[async_trait]
impl Entity for GiftCard {
    type Id = u64;
    type Create = GiftCardCreate;
    type Update = GiftCardUpdate;
    type Action = GiftCardAction;
    type ActionResult = u64;
    type Context = ();
    type Error = GiftCardError;

    fn from_create_params(id: u64, params: GiftCardCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            owner: params.owner,
            balance_cents: params.balance_cents,
        })
    }

    async fn on_update(
        &mut self,
        update: GiftCardUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(owner) = update.owner {
            self.owner = owner;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: GiftCardAction,
        _ctx: &Self::Context,
    ) -> Result<u64, Self::Error> {
        match action {
            GiftCardAction::Redeem(amount) => {
                if amount > self.balance_cents {
                    return Err(GiftCardError::InsufficientBalance {
                        have: self.balance_cents,
                        need: amount,
                    });
                }
                self.balance_cents -= amount;
                Ok(self.balance_cents)
            }
            GiftCardAction::Balance => Ok(self.balance_cents),
        }
    }
}

#[tokio::test]
async fn full_lifecycle() {
    let (actor, client) = EntityActor::<GiftCard>::new(8);
    tokio::spawn(actor.run(()));

    // Create: ids are minted from 1.
    let id = client
        .create(GiftCardCreate {
            owner: "Alice".into(),
            balance_cents: 2_000,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // Action mutates state and returns the new balance.
    let remaining = client
        .perform_action(id, GiftCardAction::Redeem(450))
        .await
        .unwrap();
    assert_eq!(remaining, 1_550);

    // Over-redeeming is a domain error, not a panic.
    let result = client
        .perform_action(id, GiftCardAction::Redeem(10_000))
        .await;
    assert!(result.is_err());
    let untouched = client
        .perform_action(id, GiftCardAction::Balance)
        .await
        .unwrap();
    assert_eq!(untouched, 1_550);

    // Update through the generic path.
    let updated = client
        .update(
            id,
            GiftCardUpdate {
                owner: Some("Bob".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.owner, "Bob");

    // Delete, then the card is gone.
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn list_returns_creation_order() {
    let (actor, client) = EntityActor::<GiftCard>::new(8);
    tokio::spawn(actor.run(()));

    for owner in ["Alice", "Bob", "Carol"] {
        client
            .create(GiftCardCreate {
                owner: owner.into(),
                balance_cents: 1_000,
            })
            .await
            .unwrap();
    }

    let cards = client.list().await.unwrap();
    let owners: Vec<_> = cards.iter().map(|c| c.owner.as_str()).collect();
    assert_eq!(owners, ["Alice", "Bob", "Carol"]);
}
