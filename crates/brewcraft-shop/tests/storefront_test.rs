//! End-to-end tests with all real actors, driven through the
//! storefront orchestrator.

use brewcraft_actors::EntityHandle;
use brewcraft_shop::model::{Category, ContactMessageCreate, LineId, PaymentMethod};
use brewcraft_shop::storefront::Storefront;

#[tokio::test]
async fn menu_is_seeded_and_filterable() {
    let shop = Storefront::open().await.expect("storefront failed to open");

    let full_menu = shop.catalog.menu().await.unwrap();
    assert_eq!(full_menu.len(), 12);

    for category in Category::ALL {
        let items = shop.catalog.items_in(category).await.unwrap();
        assert_eq!(items.len(), 4, "each category carries four items");
        assert!(items.iter().all(|item| item.category == category));
    }

    let espresso = shop
        .catalog
        .find_by_name("Artisan Espresso")
        .await
        .unwrap()
        .expect("espresso is on the menu");
    assert_eq!(espresso.price.to_string(), "4.50");
    assert!(espresso.popular);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn drafting_and_totals_follow_the_menu_prices() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    // Two espressos at 4.50 plus one latte at 5.25.
    shop.carts.open_draft(cart, "Artisan Espresso").await.unwrap();
    shop.carts.set_draft_quantity(cart, 2).await.unwrap();
    let added = shop.carts.confirm_draft(cart).await.unwrap();
    assert_eq!(added, 2);

    shop.carts.open_draft(cart, "Vanilla Latte").await.unwrap();
    shop.carts.confirm_draft(cart).await.unwrap();

    assert_eq!(shop.carts.total_price(cart).await.unwrap(), "14.25");
    assert_eq!(
        shop.carts
            .quantity_in_cart(cart, "Artisan Espresso")
            .await
            .unwrap(),
        2
    );

    let view = shop.carts.view(cart).await.unwrap();
    assert_eq!(view.lines.len(), 3);
    let mut ids: Vec<_> = view.lines.iter().map(|l| l.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "line ids are pairwise distinct");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn removing_the_only_line_empties_the_cart() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    shop.carts.open_draft(cart, "Croissant").await.unwrap();
    shop.carts.confirm_draft(cart).await.unwrap();
    assert_eq!(shop.carts.total_price(cart).await.unwrap(), "3.25");

    let view = shop.carts.view(cart).await.unwrap();
    shop.carts.remove_line(cart, view.lines[0].id).await.unwrap();

    assert_eq!(shop.carts.total_price(cart).await.unwrap(), "0.00");
    assert_eq!(shop.carts.view(cart).await.unwrap().lines.len(), 0);

    // Removing an id that no longer exists is a quiet no-op.
    shop.carts.remove_line(cart, LineId(999)).await.unwrap();
    assert_eq!(shop.carts.total_price(cart).await.unwrap(), "0.00");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn cancelling_a_draft_leaves_the_cart_unchanged() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    shop.carts.open_draft(cart, "Matcha Latte").await.unwrap();
    shop.carts.set_draft_quantity(cart, 4).await.unwrap();
    shop.carts.cancel_draft(cart).await.unwrap();

    let view = shop.carts.view(cart).await.unwrap();
    assert!(view.lines.is_empty());
    assert!(view.draft.is_none());
    assert_eq!(shop.carts.total_price(cart).await.unwrap(), "0.00");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn opening_a_draft_for_an_unknown_item_fails() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    let result = shop.carts.open_draft(cart, "Flat White").await;
    assert!(result.is_err(), "item is not on the menu");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn submit_resets_the_cart_and_returns_a_receipt() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    shop.carts.open_draft(cart, "Blueberry Muffin").await.unwrap();
    shop.carts.set_draft_quantity(cart, 2).await.unwrap();
    shop.carts.confirm_draft(cart).await.unwrap();
    shop.carts
        .select_payment(cart, PaymentMethod::Paypal)
        .await
        .unwrap();
    shop.carts.set_checkout_open(cart, true).await.unwrap();

    let receipt = shop.carts.submit_order(cart).await.unwrap();
    assert_eq!(receipt.lines.len(), 2);
    assert_eq!(receipt.total.to_string(), "7.50");
    assert_eq!(receipt.payment, PaymentMethod::Paypal);

    let view = shop.carts.view(cart).await.unwrap();
    assert!(view.lines.is_empty());
    assert_eq!(view.payment, PaymentMethod::Credit);
    assert!(!view.checkout_open);

    // A second submit has nothing to finalize.
    assert!(shop.carts.submit_order(cart).await.is_err());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_visibility_is_orthogonal_to_content() {
    let shop = Storefront::open().await.unwrap();
    let cart = shop.carts.begin_session().await.unwrap();

    shop.carts.set_checkout_open(cart, true).await.unwrap();
    let view = shop.carts.view(cart).await.unwrap();
    assert!(view.checkout_open);
    assert!(view.lines.is_empty());

    shop.carts.set_checkout_open(cart, false).await.unwrap();
    assert!(!shop.carts.view(cart).await.unwrap().checkout_open);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn sessions_are_isolated_from_each_other() {
    let shop = Storefront::open().await.unwrap();

    let alice = shop.carts.begin_session().await.unwrap();
    let bob = shop.carts.begin_session().await.unwrap();
    assert_ne!(alice, bob);

    shop.carts.open_draft(alice, "Cold Brew").await.unwrap();
    shop.carts.set_draft_quantity(alice, 3).await.unwrap();
    shop.carts.confirm_draft(alice).await.unwrap();

    shop.carts.open_draft(bob, "Avocado Toast").await.unwrap();
    shop.carts.confirm_draft(bob).await.unwrap();

    assert_eq!(shop.carts.total_price(alice).await.unwrap(), "12.75");
    assert_eq!(shop.carts.total_price(bob).await.unwrap(), "8.50");
    assert_eq!(
        shop.carts.quantity_in_cart(bob, "Cold Brew").await.unwrap(),
        0
    );

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn catalog_rejects_updates() {
    let shop = Storefront::open().await.unwrap();

    let espresso = shop
        .catalog
        .find_by_name("Artisan Espresso")
        .await
        .unwrap()
        .unwrap();
    let result = shop.catalog.inner().update(espresso.id, ()).await;
    assert!(result.is_err(), "menu entries are immutable");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn contact_messages_accumulate_in_order() {
    let shop = Storefront::open().await.unwrap();

    for (name, subject) in [("Sarah", "Wifi"), ("Emily", "Private events")] {
        shop.contact
            .leave_message(ContactMessageCreate {
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
                subject: subject.into(),
                body: "Hello!".into(),
            })
            .await
            .unwrap();
    }

    let messages = shop.contact.messages().await.unwrap();
    let subjects: Vec<_> = messages.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, ["Wifi", "Private events"]);

    shop.shutdown().await.unwrap();
}
