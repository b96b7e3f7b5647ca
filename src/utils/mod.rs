// Shared formatting helpers

pub mod format;

pub use format::{format_discount, format_price, format_rating};
