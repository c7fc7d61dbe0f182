//! Fetch/normalize layer: REST client, wire DTOs, raw→display transform.

pub mod client;
pub mod raw;
pub mod traits;
pub mod transform;

pub use client::ApiClient;
pub use traits::CatalogSource;
