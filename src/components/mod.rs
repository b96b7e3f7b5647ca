pub mod add_to_cart_dialog;
pub mod app;
pub mod cuisine_pills;
pub mod dish_card;
pub mod footer;
pub mod header;
pub mod link;
pub mod order_summary;
pub mod order_tracker_map;
pub mod pagination;
pub mod promo_banner;
pub mod restaurant_card;
pub mod status_timeline;
pub mod toast_area;

pub use add_to_cart_dialog::AddToCartDialog;
pub use app::App;
pub use cuisine_pills::CuisinePills;
pub use dish_card::DishCard;
pub use footer::Footer;
pub use header::Header;
pub use link::Link;
pub use order_summary::OrderSummary;
pub use order_tracker_map::OrderTrackerMap;
pub use pagination::Pagination;
pub use promo_banner::PromoBanner;
pub use restaurant_card::RestaurantCard;
pub use status_timeline::StatusTimelineView;
pub use toast_area::ToastArea;
