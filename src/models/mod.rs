pub mod cart;
pub mod checkout;
pub mod demo;
pub mod dish;
pub mod order_status;
pub mod profile;
pub mod restaurant;

pub use cart::{CartItem, CartTotals, PromoCode};
pub use checkout::{AddressInput, AddressKind, CardDetails, CheckoutForm, NewAddress, PaymentInput, PaymentKind};
pub use dish::Dish;
pub use order_status::{DeliveryPhase, MapPhase, StatusStep, StatusTimeline, Transition};
pub use profile::{AddressBook, NotificationPreferences, PastOrder, SavedAddress, SavedCard, UserProfile};
pub use restaurant::{MenuCategory, Restaurant, RestaurantMenu};
