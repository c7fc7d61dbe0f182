use crate::model::{BrandAssets, Listing, VideoItem};

/// Seam over the backend's collection endpoints. [`super::ApiClient`] is the
/// live implementation; the memo wrapper in [`crate::cache`] accepts anything
/// that fetches, which is also how tests substitute canned sources.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_listings(&self) -> Vec<Listing>;
    async fn fetch_third_party_listings(&self) -> Vec<Listing>;
    async fn fetch_promotional_content(&self) -> Vec<VideoItem>;
    async fn fetch_brand_assets(&self) -> BrandAssets;
}
