//! Pure in-memory query layer shared by the browse and shop views.
//!
//! Nothing here does I/O: every function takes the already-fetched listing
//! slice and returns a fresh vector, leaving the input untouched.

pub mod search;
pub mod shop_filter;

pub use search::{filter_and_search, search};
pub use shop_filter::{ShopCategory, count_by_shop_category, filter_by_shop_category};
