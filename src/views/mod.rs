pub mod cart;
pub mod checkout;
pub mod home;
pub mod not_found;
pub mod order_tracking;
pub mod restaurant_listing;
pub mod restaurant_menu;
pub mod user_profile;

pub use cart::CartView;
pub use checkout::CheckoutView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use order_tracking::OrderTrackingView;
pub use restaurant_listing::RestaurantListingView;
pub use restaurant_menu::RestaurantMenuView;
pub use user_profile::UserProfileView;
