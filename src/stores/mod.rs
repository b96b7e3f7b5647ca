pub mod cart_store;
pub mod toast_store;

pub use cart_store::{CartAction, CartStore};
pub use toast_store::{Toast, ToastAction, ToastKind, ToastQueue};
