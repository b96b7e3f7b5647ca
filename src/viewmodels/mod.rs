pub mod listing_viewmodel;
pub mod tracking_viewmodel;

pub use listing_viewmodel::{filter_and_sort, paginate, ListingQuery, ListingState, Page, SortKey};
pub use tracking_viewmodel::{local_clock, StatusSimulator};
