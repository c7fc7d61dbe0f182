//! REST client for the dealership backend.
//!
//! Every public fetch operation is fail-soft: it logs the failure class and
//! returns an empty or placeholder value instead of an error. Presentation
//! code never has to branch on transport problems; it only checks for
//! emptiness and substitutes the bundled seed data.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::raw::{ContentEnvelope, ListingEnvelope, LogoEnvelope, RawListing};
use crate::api::traits::CatalogSource;
use crate::api::transform::{listing_from_raw, mark_third_party, merge_listings};
use crate::config::AppConfig;
use crate::model::{ApiError, BrandAssets, Category, Listing, PLACEHOLDER_LOGO, VideoItem};
use crate::utils::public_url;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    /// GET a JSON document from `{base}/{path}`. The body is read as text
    /// first so decode failures are distinguishable from transport ones.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// All primary listings, normalized, in feed order. Empty on any failure.
    pub async fn fetch_listings(&self) -> Vec<Listing> {
        match self.get_json::<ListingEnvelope>("api/cars").await {
            Ok(envelope) => {
                let listings: Vec<Listing> = envelope
                    .data
                    .into_iter()
                    .map(|raw| listing_from_raw(raw, &self.base_url))
                    .collect();
                info!("✅ Fetched {} listings", listings.len());
                listings
            }
            Err(err) => {
                warn!("❌ Listing fetch failed: {err}");
                Vec::new()
            }
        }
    }

    /// One listing by backend id. `None` when unknown or on any failure.
    pub async fn fetch_listing_by_id(&self, id: &str) -> Option<Listing> {
        match self.get_json::<RawListing>(&format!("api/cars/{id}")).await {
            Ok(raw) => Some(listing_from_raw(raw, &self.base_url)),
            Err(err) => {
                warn!("❌ Listing {id} fetch failed: {err}");
                None
            }
        }
    }

    /// The backend cannot filter, so this fetches the full set and filters
    /// client-side.
    pub async fn fetch_listings_by_category(&self, category: Category) -> Vec<Listing> {
        let mut listings = self.fetch_listings().await;
        listings.retain(|l| l.category == category);
        listings
    }

    /// Third-party inventory feed. The endpoint is not provisioned on every
    /// deployment, so a non-2xx status is an expected condition here, not a
    /// failure.
    pub async fn fetch_third_party_listings(&self) -> Vec<Listing> {
        match self.get_json::<ListingEnvelope>("api/third-party").await {
            Ok(envelope) => {
                let listings: Vec<Listing> = envelope
                    .data
                    .into_iter()
                    .map(|raw| mark_third_party(listing_from_raw(raw, &self.base_url)))
                    .collect();
                info!("✅ Fetched {} third-party listings", listings.len());
                listings
            }
            Err(ApiError::Status(status)) => {
                info!("Third-party feed not provisioned (status {status})");
                Vec::new()
            }
            Err(err) => {
                warn!("❌ Third-party fetch failed: {err}");
                Vec::new()
            }
        }
    }

    /// Primary and third-party feeds fetched concurrently and merged by id,
    /// third-party records overriding primary ones.
    pub async fn fetch_all_listings(&self) -> Vec<Listing> {
        let (primary, third_party) =
            futures::join!(self.fetch_listings(), self.fetch_third_party_listings());
        merge_listings(primary, third_party)
    }

    /// Promotional video reel. Empty on any failure.
    pub async fn fetch_promotional_content(&self) -> Vec<VideoItem> {
        match self.get_json::<ContentEnvelope>("api/content").await {
            Ok(envelope) => {
                let videos: Vec<VideoItem> = envelope
                    .data
                    .into_iter()
                    .map(|raw| VideoItem {
                        id: raw.content_id.to_string(),
                        title: raw.content_name.unwrap_or_default(),
                        video_url: public_url(
                            &self.base_url,
                            &raw.content_video.unwrap_or_default(),
                        ),
                        duration: raw.duration.filter(|d| !d.is_empty()),
                    })
                    .collect();
                info!("✅ Fetched {} promotional videos", videos.len());
                videos
            }
            Err(err) => {
                warn!("❌ Promotional content fetch failed: {err}");
                Vec::new()
            }
        }
    }

    /// Light and dark brand logos, matched by substring in the asset name.
    /// A missing side, or any failure, yields the placeholder.
    pub async fn fetch_brand_assets(&self) -> BrandAssets {
        match self.get_json::<LogoEnvelope>("api/logos").await {
            Ok(envelope) => {
                let url_for = |needle: &str| {
                    envelope
                        .data
                        .iter()
                        .find(|logo| logo.name.as_deref().is_some_and(|n| n.contains(needle)))
                        .and_then(|logo| logo.path.as_deref())
                        .map(|path| public_url(&self.base_url, path))
                        .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string())
                };
                BrandAssets {
                    light: url_for("light"),
                    dark: url_for("dark"),
                }
            }
            Err(err) => {
                warn!("❌ Brand asset fetch failed: {err}");
                BrandAssets::default()
            }
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_listings(&self) -> Vec<Listing> {
        ApiClient::fetch_listings(self).await
    }

    async fn fetch_third_party_listings(&self) -> Vec<Listing> {
        ApiClient::fetch_third_party_listings(self).await
    }

    async fn fetch_promotional_content(&self) -> Vec<VideoItem> {
        ApiClient::fetch_promotional_content(self).await
    }

    async fn fetch_brand_assets(&self) -> BrandAssets {
        ApiClient::fetch_brand_assets(self).await
    }
}
