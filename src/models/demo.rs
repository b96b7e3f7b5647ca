//! Hard-coded sample catalog, loaded once when a page mounts.

use rust_decimal::Decimal;

use super::cart::CartItem;
use super::dish::Dish;
use super::profile::{NotificationPreferences, OrderOutcome, PastOrder, SavedAddress, SavedCard, UserProfile};
use super::restaurant::{MenuCategory, Restaurant, RestaurantMenu};
use crate::routes::Route;

fn unsplash(photo: &str, width: u32, height: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w={}&h={}&q=80",
        photo, width, height
    )
}

pub const CUISINES: [&str; 10] = [
    "Pizza", "Burgers", "Sushi", "Mexican", "Italian", "Chinese", "Indian", "Vegan", "Desserts", "Breakfast",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PromoSlide {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cta_text: &'static str,
    pub cta_route: Route,
    pub image_url: String,
}

pub fn promo_slides() -> Vec<PromoSlide> {
    vec![
        PromoSlide {
            id: "promo1",
            title: "Weekend Feast Special!",
            description: "Get 20% off on all orders above $50 this weekend.",
            cta_text: "Order Now",
            cta_route: Route::listing(),
            image_url: unsplash("1504674900247-0877df9cc836", 1200, 450),
        },
        PromoSlide {
            id: "promo2",
            title: "Featured: The Gourmet Place",
            description: "Modern European plates made with local ingredients.",
            cta_text: "View Menu",
            cta_route: Route::RestaurantMenu {
                slug: Some("the-gourmet-place".to_string()),
            },
            image_url: unsplash("1565299624946-b28f40a0ae38", 1200, 450),
        },
        PromoSlide {
            id: "promo3",
            title: "Free delivery on your first order",
            description: "Use code YUMMY10 at checkout for an extra 10% off.",
            cta_text: "Browse Restaurants",
            cta_route: Route::listing(),
            image_url: unsplash("1540189549336-e6e99c3679fe", 1200, 450),
        },
    ]
}

pub fn featured_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("1", "pizza-palace-downtown", "Pizza Palace Downtown", &["Italian", "Pizza", "Pasta"], 4.7, "25-35 min")
            .with_image(&unsplash("1513104890138-7c749659a591", 800, 600))
            .with_promotion("20% Off"),
        Restaurant::new("2", "the-burger-joint", "The Burger Joint", &["American", "Burgers", "Fries"], 4.5, "20-30 min")
            .with_image(&unsplash("1568901346375-23c9450c58cd", 800, 600)),
        Restaurant::new("3", "sushi-heaven", "Sushi Heaven", &["Japanese", "Sushi", "Seafood"], 4.9, "30-40 min")
            .with_image(&unsplash("1579871494447-9811cf80d66c", 800, 600))
            .with_promotion("Free Edamame"),
        Restaurant::new("4", "el-taco-loco", "El Taco Loco", &["Mexican", "Tacos", "Burritos"], 4.4, "25-35 min")
            .with_image(&unsplash("1552332386-f8dd00dc2f85", 800, 600)),
    ]
}

pub fn listing_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("1", "pizza-paradise", "Pizza Paradise", &["Pizza", "Italian"], 4.5, "25-35 min")
            .with_image(&unsplash("1513104890138-7c749659a591", 400, 300))
            .with_promotion("20% OFF")
            .with_flags(true, false),
        Restaurant::new("2", "sushi-central", "Sushi Central", &["Sushi", "Japanese"], 4.8, "30-40 min")
            .with_image(&unsplash("1579871494447-9811cf80d66c", 400, 300))
            .with_flags(false, true),
        Restaurant::new("3", "burger-bliss", "Burger Bliss", &["Burgers", "American", "Fast Food"], 4.2, "20-30 min")
            .with_image(&unsplash("1568901346375-23c9450c58cd", 400, 300))
            .with_promotion("Free Fries")
            .with_flags(true, true),
        Restaurant::new("4", "taco-town", "Taco Town", &["Mexican", "Tacos"], 4.6, "25-35 min")
            .with_image(&unsplash("1552332386-f8dd00dc2f85", 400, 300))
            .with_flags(true, false),
        Restaurant::new("5", "curry-corner", "Curry Corner", &["Indian", "Curry"], 4.7, "35-45 min")
            .with_image(&unsplash("1585937421612-70a058387cc6", 400, 300))
            .with_promotion("Family Deal")
            .with_flags(false, false),
        Restaurant::new("6", "pasta-place", "Pasta Place", &["Italian", "Pasta"], 4.3, "30-40 min")
            .with_image(&unsplash("1551183053-bf91a1d81141", 400, 300))
            .with_flags(true, true),
        Restaurant::new("7", "healthy-habits", "Healthy Habits", &["Salads", "Healthy", "Smoothies"], 4.9, "15-25 min")
            .with_image(&unsplash("1490645935967-10de6ba17061", 400, 300))
            .with_flags(true, false),
        Restaurant::new("8", "dragon-wok", "Dragon Wok", &["Chinese", "Asian"], 4.1, "30-40 min")
            .with_image(&unsplash("1585032226651-759b368d7246", 400, 300))
            .with_promotion("Lunch Special")
            .with_flags(false, true),
        Restaurant::new("9", "veg-delight", "Veg Delight", &["Vegetarian", "Vegan", "Healthy"], 4.4, "25-30 min")
            .with_image(&unsplash("1540420773420-3366772f4999", 400, 300))
            .with_flags(true, false),
        Restaurant::new("10", "sea-feast", "Sea Feast", &["Seafood", "Grill"], 4.6, "40-50 min")
            .with_image(&unsplash("1519708227418-c8fd9a32b7a2", 400, 300))
            .with_flags(true, false),
    ]
}

/// The single mock restaurant every menu slug resolves to
pub fn restaurant_menu() -> RestaurantMenu {
    let dish = |id: &str, name: &str, cents: i64, photo: &str, description: &str| {
        Dish::new(id, name, cents, description).with_image(&unsplash(photo, 400, 300))
    };

    RestaurantMenu {
        slug: "the-gourmet-place".to_string(),
        name: "The Gourmet Place".to_string(),
        image_url: unsplash("1555396273-367ea4eb4db5", 1074, 600),
        cuisine_types: vec!["Modern European".into(), "Fine Dining".into(), "Local Ingredients".into()],
        rating: 4.7,
        delivery_time: "30-45 min".to_string(),
        address: "123 Foodie Lane, Flavor Town, FT 54321".to_string(),
        description: "Modern European cuisine crafted with the freshest local ingredients.".to_string(),
        categories: vec![
            MenuCategory {
                id: "appetizers".into(),
                name: "Appetizers".into(),
                icon: "🍴".into(),
                dishes: vec![
                    dish("dish1", "Seared Scallops", 1850, "1580959375474-6572278345f7", "Pan-seared jumbo scallops with a lemon-butter herb sauce.")
                        .with_tags(&["Gluten-Free"]),
                    dish("dish2", "Caprese Skewers", 1200, "1565299624946-b28f40a0ae38", "Cherry tomatoes, fresh mozzarella and basil with balsamic glaze.")
                        .with_tags(&["Vegetarian", "Gluten-Free"]),
                ],
            },
            MenuCategory {
                id: "main-courses".into(),
                name: "Main Courses".into(),
                icon: "👨‍🍳".into(),
                dishes: vec![
                    dish("dish3", "Filet Mignon", 3500, "1608879099060-92f73d0f01dd", "8oz center-cut filet with potato gratin and asparagus.")
                        .with_tags(&["High-Protein"]),
                    dish("dish4", "Lobster Risotto", 2875, "1598515213692-5f282438d333", "Creamy Arborio risotto with lobster and a touch of saffron.")
                        .unavailable(),
                    dish("dish5", "Vegan Mushroom Bourguignon", 2200, "1607528985040-81c97f8700e2", "Mushrooms, root vegetables and red wine over polenta.")
                        .with_tags(&["Vegan", "Plant-Based"]),
                ],
            },
            MenuCategory {
                id: "desserts".into(),
                name: "Desserts".into(),
                icon: "🍪".into(),
                dishes: vec![
                    dish("dish6", "Chocolate Lava Cake", 1050, "1587314168485-3236d6710814", "Warm dark chocolate cake with a molten center.")
                        .with_tags(&["Vegetarian"]),
                ],
            },
            MenuCategory {
                id: "drinks".into(),
                name: "Drinks".into(),
                icon: "☕".into(),
                dishes: vec![
                    dish("dish7", "Artisan Coffee", 500, "1511920183353-321f1f5e599f", "Freshly brewed single-origin coffee.")
                        .with_tags(&["Vegan"]),
                    dish("dish8", "Sparkling Elderflower Presse", 650, "1600271823054-0aad5050512b", "Sparkling elderflower with a hint of lemon.")
                        .with_tags(&["Vegan", "Non-Alcoholic"]),
                ],
            },
        ],
    }
}

/// Cart contents at session start
pub fn initial_cart() -> Vec<CartItem> {
    vec![
        CartItem::new(
            Dish::new("cart-pizza", "Spicy Pepperoni Pizza", 1599, "Classic pepperoni pizza with a spicy kick.")
                .with_image(&unsplash("1565299624946-b28f40a0ae38", 200, 200)),
            1,
        ),
        CartItem::new(
            Dish::new("cart-salad", "Chicken Caesar Salad", 1050, "Fresh salad with grilled chicken and Caesar dressing.")
                .with_image(&unsplash("1550304943-4f24f54ddde9", 200, 200)),
            2,
        ),
        CartItem::new(
            Dish::new("cart-cake", "Chocolate Lava Cake", 725, "Warm chocolate cake with a molten center.")
                .with_image(&unsplash("1506068270147-aa9c0fc01353", 200, 200)),
            1,
        ),
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        phone: "555-0101".to_string(),
        avatar_url: "https://i.pravatar.cc/150?u=alexjohnson".to_string(),
    }
}

pub fn saved_addresses() -> Vec<SavedAddress> {
    let address = |id: &str, label: &str, street: &str, zip: &str, is_default: bool| SavedAddress {
        id: id.to_string(),
        label: label.to_string(),
        street: street.to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: zip.to_string(),
        is_default,
    };

    vec![
        address("addr1", "Home", "123 Willow Lane", "62704", true),
        address("addr2", "Work", "456 Oak Street, Suite 300", "62701", false),
    ]
}

pub fn saved_cards() -> Vec<SavedCard> {
    vec![
        SavedCard { id: "pm_1".into(), brand: "Visa".into(), last4: "4242".into(), expiry: "12/2027".into() },
        SavedCard { id: "pm_2".into(), brand: "Mastercard".into(), last4: "5555".into(), expiry: "08/2028".into() },
    ]
}

pub fn order_history() -> Vec<PastOrder> {
    let order = |id: &str, date: &str, restaurant: &str, items: u32, cents: i64, status: OrderOutcome| PastOrder {
        id: id.to_string(),
        date: date.to_string(),
        restaurant: restaurant.to_string(),
        items,
        total: Decimal::new(cents, 2),
        status,
    };

    vec![
        order("ORDER789", "2024-07-15", "Pizza Paradise", 3, 3599, OrderOutcome::Delivered),
        order("ORDER790", "2024-07-10", "Sushi Central", 2, 2250, OrderOutcome::Delivered),
        order("ORDER791", "2024-07-02", "Burger Bliss", 1, 1875, OrderOutcome::Cancelled),
    ]
}

pub fn notification_preferences() -> NotificationPreferences {
    NotificationPreferences::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_listing_ids_are_unique() {
        let restaurants = listing_restaurants();
        let ids: HashSet<_> = restaurants.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), restaurants.len());
        assert!(restaurants.iter().all(|r| r.delivery_minutes().is_some()));
    }

    #[test]
    fn test_menu_has_one_unavailable_dish() {
        let menu = restaurant_menu();
        assert_eq!(menu.dish_count(), 8);
        assert!(!menu.find_dish("dish4").unwrap().is_available);
        assert!(menu.find_dish("dish9").is_none());
    }

    #[test]
    fn test_exactly_one_default_address() {
        assert_eq!(saved_addresses().iter().filter(|a| a.is_default).count(), 1);
    }
}
