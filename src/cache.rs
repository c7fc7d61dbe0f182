//! Time-bounded memoization over a [`CatalogSource`].
//!
//! Pages rebuild far more often than the inventory changes, so each
//! collection endpoint gets a small revalidation window. Staleness is policy
//! here, not correctness: an empty refresh result is cached like any other,
//! and the seed fallback handles emptiness downstream.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::api::CatalogSource;
use crate::api::transform::merge_listings;
use crate::model::{BrandAssets, Listing, VideoItem};

/// Revalidation window for the listing feeds.
pub const LISTINGS_TTL: Duration = Duration::from_secs(60);
/// Revalidation window for promotional content.
pub const CONTENT_TTL: Duration = Duration::from_secs(300);
/// Revalidation window for brand logos, which rarely change.
pub const LOGOS_TTL: Duration = Duration::from_secs(3600);

/// One cached value plus its refresh stamp.
pub struct TtlCell<T> {
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// The cached value while it is younger than `ttl`, else the result of
    /// awaiting `refresh`, stored with a fresh stamp. Concurrent callers
    /// serialize on the cell, so one stale window means one refresh.
    pub async fn get_or_refresh<F>(&self, ttl: Duration, refresh: F) -> T
    where
        F: Future<Output = T>,
    {
        let mut slot = self.slot.lock().await;
        if let Some((stamp, value)) = slot.as_ref() {
            if stamp.elapsed() < ttl {
                return value.clone();
            }
        }
        let value = refresh.await;
        *slot = Some((Instant::now(), value.clone()));
        value
    }
}

impl<T: Clone> Default for TtlCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`CatalogSource`] wrapped with one [`TtlCell`] per collection endpoint.
pub struct CachedClient<S> {
    source: S,
    listings: TtlCell<Vec<Listing>>,
    third_party: TtlCell<Vec<Listing>>,
    content: TtlCell<Vec<VideoItem>>,
    logos: TtlCell<BrandAssets>,
}

impl<S: CatalogSource> CachedClient<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            listings: TtlCell::new(),
            third_party: TtlCell::new(),
            content: TtlCell::new(),
            logos: TtlCell::new(),
        }
    }

    /// The wrapped source, for operations that bypass the cache (the
    /// single-listing lookup is deliberately uncached).
    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn listings(&self) -> Vec<Listing> {
        self.listings
            .get_or_refresh(LISTINGS_TTL, self.source.fetch_listings())
            .await
    }

    pub async fn third_party_listings(&self) -> Vec<Listing> {
        self.third_party
            .get_or_refresh(LISTINGS_TTL, self.source.fetch_third_party_listings())
            .await
    }

    /// Merged primary + third-party set over the cached feeds. The two feeds
    /// revalidate independently; the merge itself is recomputed every call.
    pub async fn all_listings(&self) -> Vec<Listing> {
        let (primary, third_party) = futures::join!(self.listings(), self.third_party_listings());
        merge_listings(primary, third_party)
    }

    pub async fn promotional_content(&self) -> Vec<VideoItem> {
        self.content
            .get_or_refresh(CONTENT_TTL, self.source.fetch_promotional_content())
            .await
    }

    pub async fn brand_assets(&self) -> BrandAssets {
        self.logos
            .get_or_refresh(LOGOS_TTL, self.source.fetch_brand_assets())
            .await
    }
}
