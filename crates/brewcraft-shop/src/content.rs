//! Static marketing and catalog content.
//!
//! Menu data, testimonials, and the shop profile are configuration,
//! not logic: plain immutable tables consumed by the catalog seeding
//! and the rendering layer.

use crate::model::{Category, MenuItemSpec, Price};

/// A customer quote shown on the landing page.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

/// Location, hours, and contact details shown in the footer.
#[derive(Debug, Clone, Copy)]
pub struct ShopProfile {
    pub name: &'static str,
    pub address: &'static str,
    pub weekday_hours: &'static str,
    pub weekend_hours: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const SHOP_PROFILE: ShopProfile = ShopProfile {
    name: "BrewCraft",
    address: "123 Coffee Street, Downtown District, City 12345",
    weekday_hours: "Monday - Friday: 6:00 AM - 8:00 PM",
    weekend_hours: "Saturday - Sunday: 7:00 AM - 9:00 PM",
    phone: "(555) 123-4567",
    email: "hello@brewcraft.com",
};

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        title: "Digital Designer",
        rating: 5,
        text: "The best coffee in town! The atmosphere is perfect for working and the staff is incredibly friendly.",
        image: "/images/testimonials/sarah.svg",
    },
    Testimonial {
        name: "Mike Chen",
        title: "Software Engineer",
        rating: 5,
        text: "Amazing quality and the online ordering system is so convenient. My morning routine just got better!",
        image: "/images/testimonials/mike.svg",
    },
    Testimonial {
        name: "Emily Davis",
        title: "Content Creator",
        rating: 5,
        text: "Love the cozy ambiance and the pastries are to die for. This place has become my second home.",
        image: "/images/testimonials/emily.svg",
    },
];

/// The full standard menu, one spec per item, in display order.
pub fn standard_menu() -> Vec<MenuItemSpec> {
    fn spec(
        name: &str,
        cents: u64,
        description: &str,
        category: Category,
        popular: bool,
    ) -> MenuItemSpec {
        MenuItemSpec {
            name: name.to_string(),
            price: Price::from_cents(cents),
            description: description.to_string(),
            image: format!(
                "/images/menu/{}.svg",
                name.to_lowercase().replace(' ', "-")
            ),
            category,
            popular,
        }
    }

    use Category::*;
    vec![
        spec(
            "Artisan Espresso",
            450,
            "Rich, bold espresso with notes of chocolate and caramel",
            SignatureCoffee,
            true,
        ),
        spec(
            "Vanilla Latte",
            525,
            "Smooth espresso with steamed milk and vanilla syrup",
            SignatureCoffee,
            false,
        ),
        spec(
            "Caramel Macchiato",
            575,
            "Espresso with vanilla, steamed milk, and caramel drizzle",
            SignatureCoffee,
            true,
        ),
        spec(
            "Cold Brew",
            425,
            "Smooth, refreshing cold-brewed coffee served over ice",
            SignatureCoffee,
            false,
        ),
        spec(
            "Matcha Latte",
            550,
            "Premium matcha powder with steamed milk",
            SpecialtyDrinks,
            false,
        ),
        spec(
            "Chai Tea Latte",
            475,
            "Spiced chai blend with steamed milk and honey",
            SpecialtyDrinks,
            true,
        ),
        spec(
            "Hot Chocolate",
            425,
            "Rich Belgian chocolate with whipped cream",
            SpecialtyDrinks,
            false,
        ),
        spec(
            "Iced Mocha",
            525,
            "Espresso, chocolate, and milk served over ice",
            SpecialtyDrinks,
            false,
        ),
        spec(
            "Croissant",
            325,
            "Buttery, flaky French pastry",
            FreshPastries,
            false,
        ),
        spec(
            "Blueberry Muffin",
            375,
            "Fresh blueberries in a tender muffin",
            FreshPastries,
            true,
        ),
        spec(
            "Chocolate Chip Cookie",
            250,
            "Warm, gooey chocolate chip cookie",
            FreshPastries,
            false,
        ),
        spec(
            "Avocado Toast",
            850,
            "Smashed avocado on artisan bread with sea salt",
            FreshPastries,
            true,
        ),
    ]
}
