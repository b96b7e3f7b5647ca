pub mod order_service;
pub mod profile_service;
pub mod ticker;

pub use order_service::{new_order_id, place_order, OrderConfirmation};
pub use profile_service::{save_notification_preferences, save_profile};
pub use ticker::{IntervalTicker, TickHandle, Ticker};
