// Core structs: Listing, VideoItem, BrandAssets + the fetch-layer error taxonomy.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel image path used when a listing arrives without any pictures.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Sentinel logo path used when a brand asset is missing or the endpoint fails.
pub const PLACEHOLDER_LOGO: &str = "/placeholder-logo.svg";

/// Literal token prepended to descriptions of listings sourced from the
/// third-party feed. The shop filter keys on it.
pub const THIRD_PARTY_MARKER: &str = "[THIRD_PARTY]";

/// Display category of a listing. Unknown source tags map to `TopSelling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TopSelling,
    ComingSoon,
    SoldOut,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TopSelling => "top-selling",
            Category::ComingSoon => "coming-soon",
            Category::SoldOut => "sold-out",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle listing as the presentation layer consumes it: normalized, with
/// every invariant the raw feed does not guarantee already enforced.
/// Immutable snapshot; rebuilt from the backend (or the seed data) per load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    /// Display name with the leading model-year token stripped.
    pub name: String,
    /// Model year; the current calendar year when the feed carries none.
    pub year: i32,
    pub price: String,
    /// Primary image URL, the exterior front shot when the feed has one.
    pub image: String,
    /// All image URLs in feed order; never empty.
    pub images: Vec<String>,
    pub category: Category,
    pub mileage: Option<String>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub engine_size: Option<String>,
    pub color: Option<String>,
    pub seats: Option<u8>,
    pub doors: Option<u8>,
    pub drive: Option<String>,
    pub features: Vec<String>,
    /// Raw description text, kept verbatim; carries the third-party marker
    /// when the listing came from the secondary feed.
    pub description: String,
}

/// Promotional video entry from the content endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub duration: Option<String>,
}

/// Light/dark brand logo URLs for the header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAssets {
    pub light: String,
    pub dark: String,
}

impl Default for BrandAssets {
    fn default() -> Self {
        Self {
            light: PLACEHOLDER_LOGO.to_string(),
            dark: PLACEHOLDER_LOGO.to_string(),
        }
    }
}

/// What went wrong talking to the backend. Public fetch operations collapse
/// all of these into the documented empty/placeholder result; the variants
/// exist so log lines can name the failure class.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}
