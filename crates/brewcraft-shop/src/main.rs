//! Demo binary: walks one visitor session through the whole shop —
//! browsing the menu, drafting and confirming items, editing the
//! cart, picking a payment method, and submitting the order.

use brewcraft_actors::telemetry::init_telemetry;
use brewcraft_shop::content;
use brewcraft_shop::model::{Category, PaymentMethod};
use brewcraft_shop::storefront::Storefront;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry();

    info!(shop = content::SHOP_PROFILE.name, "opening storefront");
    let shop = Storefront::open().await?;

    // Browse the menu, one category at a time.
    for category in Category::ALL {
        let items = shop.catalog.items_in(category).await?;
        for item in &items {
            info!(
                category = %category,
                name = %item.name,
                price = %item.price,
                popular = item.popular,
                "menu item"
            );
        }
    }

    for testimonial in content::TESTIMONIALS {
        info!(
            name = testimonial.name,
            rating = testimonial.rating,
            quote = testimonial.text,
            "testimonial"
        );
    }

    let cart = shop.carts.begin_session().await?;
    info!(%cart, "visitor session started");

    // Two espressos, configured through the draft dialog.
    let span = tracing::info_span!("order_drafting", %cart);
    async {
        shop.carts.open_draft(cart, "Artisan Espresso").await?;
        shop.carts.increment_draft(cart).await?;
        shop.carts
            .set_draft_instructions(cart, "extra hot, oat milk")
            .await?;
        let added = shop.carts.confirm_draft(cart).await?;
        info!(added, "espressos in the cart");

        // A latte, confirmed with the default quantity.
        shop.carts.open_draft(cart, "Vanilla Latte").await?;
        shop.carts.confirm_draft(cart).await?;

        // A cookie the visitor thinks better of.
        shop.carts.open_draft(cart, "Chocolate Chip Cookie").await?;
        shop.carts.cancel_draft(cart).await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let total = shop.carts.total_price(cart).await?;
    let espressos = shop.carts.quantity_in_cart(cart, "Artisan Espresso").await?;
    info!(total, espressos, "cart before checkout");

    // Checkout: drop one espresso, pick a payment method, submit.
    shop.carts.set_checkout_open(cart, true).await?;
    let view = shop.carts.view(cart).await?;
    let first_line = view.lines[0].id;
    shop.carts.remove_line(cart, first_line).await?;
    for method in PaymentMethod::ALL {
        info!(option = %method, "payment option");
    }
    shop.carts
        .select_payment(cart, PaymentMethod::Apple)
        .await?;

    let receipt = shop.carts.submit_order(cart).await?;
    info!(
        lines = receipt.lines.len(),
        total = %receipt.total,
        payment = %receipt.payment,
        "order submitted"
    );

    // Leave a note through the contact form.
    let message_id = shop
        .contact
        .leave_message(brewcraft_shop::model::ContactMessageCreate {
            name: "Mike Chen".into(),
            email: "mike@example.com".into(),
            subject: "Catering".into(),
            body: "Do you cater office events?".into(),
        })
        .await?;
    info!(%message_id, "contact message left");

    shop.shutdown().await?;
    Ok(())
}
