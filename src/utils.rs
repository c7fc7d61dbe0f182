// Utility functions
use chrono::{Datelike, Utc};

/// Joins a backend-relative asset path onto the host, through the fixed
/// `/public/` prefix the backend serves files under.
pub fn public_url(base_url: &str, path: &str) -> String {
    format!("{}/public/{}", base_url.trim_end_matches('/'), path)
}

/// Current calendar year, the default model year for unlabeled listings.
pub fn current_year() -> i32 {
    Utc::now().year()
}
