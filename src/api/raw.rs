//! Wire-shape DTOs for the backend's JSON envelopes.
//!
//! Everything the backend has ever omitted or nulled is an `Option` here;
//! normalization into the display model happens in [`super::transform`].
//! Timestamps (`created_at`/`updated_at`) are deliberately not modeled.

use serde::Deserialize;

/// `{ "data": [...] }` envelope around car records.
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    pub data: Vec<RawListing>,
}

/// Untrusted car record as `/api/cars` and `/api/third-party` return it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub car_id: i64,
    pub car_name: Option<String>,
    #[serde(default)]
    pub car_pic: Option<Vec<String>>,
    pub car_price: Option<String>,
    pub car_description: Option<String>,
    pub category: Option<String>,
}

/// `{ "data": [...] }` envelope around promotional content records.
#[derive(Debug, Deserialize)]
pub struct ContentEnvelope {
    pub data: Vec<RawContent>,
}

/// Untrusted content record from `/api/content`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContent {
    #[serde(rename = "contentID")]
    pub content_id: i64,
    pub content_name: Option<String>,
    pub content_video: Option<String>,
    pub duration: Option<String>,
}

/// `{ "data": [...] }` envelope around logo records.
#[derive(Debug, Deserialize)]
pub struct LogoEnvelope {
    pub data: Vec<RawLogo>,
}

/// Untrusted logo record from `/api/logos`; `name` decides light vs. dark.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLogo {
    pub id: i64,
    pub name: Option<String>,
    pub path: Option<String>,
}
