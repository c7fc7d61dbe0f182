//! Keyword search over normalized listings.

use crate::model::Listing;

use super::shop_filter::{ShopCategory, filter_by_shop_category};

/// The lowercased text a query is matched against. Absent fuel and
/// transmission contribute empty segments, never a literal "None".
fn haystack(listing: &Listing) -> String {
    format!(
        "{} {} {} {} {}",
        listing.name,
        listing.year,
        listing.fuel.as_deref().unwrap_or_default(),
        listing.transmission.as_deref().unwrap_or_default(),
        listing.description,
    )
    .to_lowercase()
}

/// Case-insensitive substring search across name, year, fuel, transmission
/// and description. A blank query is the identity, not "no results".
pub fn search(listings: &[Listing], query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings.to_vec();
    }
    listings
        .iter()
        .filter(|l| haystack(l).contains(&needle))
        .cloned()
        .collect()
}

/// Category bucket first, then keyword search over the survivors, which is
/// the one composition both the browse and shop views use.
pub fn filter_and_search(
    listings: &[Listing],
    category: ShopCategory,
    query: &str,
) -> Vec<Listing> {
    search(&filter_by_shop_category(listings, category), query)
}
