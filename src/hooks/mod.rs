pub mod cart_context;
pub mod toast_context;
pub mod use_checkout_form;
pub mod use_listing;
pub mod use_order_tracking;
pub mod use_route;

pub use cart_context::{use_cart, CartContext, CartProvider};
pub use toast_context::{use_toast, ToastContext, ToastProvider, UseToastHandle};
pub use use_checkout_form::{use_checkout_form, UseCheckoutFormHandle};
pub use use_listing::{use_listing, UseListingHandle};
pub use use_order_tracking::use_order_tracking;
pub use use_route::{use_navigator, use_route};
