//! Data core for the dealership's catalog site.
//!
//! Two halves:
//! - [`api`] fetches listings, promotional content, and brand assets from
//!   the dealership backend and normalizes the loosely structured records
//!   into [`model::Listing`]s, failing soft on every transport problem;
//! - [`catalog`] answers the browse and shop views' questions (category
//!   buckets, keyword search) as pure functions over the fetched set.
//!
//! [`fallback`] carries a bundled seed catalog for when the backend is dark,
//! and [`cache`] adds per-endpoint revalidation windows so page rebuilds do
//! not hammer the backend.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod fallback;
pub mod model;
pub mod utils;

pub use api::{ApiClient, CatalogSource};
pub use cache::CachedClient;
pub use catalog::ShopCategory;
pub use config::AppConfig;
pub use model::{BrandAssets, Category, Listing, VideoItem};
