//! Pseudo-category buckets for the shop view.
//!
//! Buckets are presentation-side heuristics over listing names, independent
//! of the stored [`crate::model::Category`]: a listing may sit in several
//! buckets or in none of them.

use crate::model::{Listing, THIRD_PARTY_MARKER};

/// Name keywords that place a listing in the SUV bucket.
const SUV_KEYWORDS: [&str; 6] = [
    "CRUISER",
    "FORTUNER",
    "RANGER",
    "FORESTER",
    "HARRIER",
    "RANGE ROVER",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCategory {
    All,
    Suv,
    Trucks,
    ThirdParty,
}

impl ShopCategory {
    /// Tab order as the shop view presents it.
    pub const TABS: [ShopCategory; 4] = [
        ShopCategory::All,
        ShopCategory::Suv,
        ShopCategory::Trucks,
        ShopCategory::ThirdParty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShopCategory::All => "All Vehicles",
            ShopCategory::Suv => "SUV",
            ShopCategory::Trucks => "Trucks",
            ShopCategory::ThirdParty => "Third Party",
        }
    }

    /// Whether a listing belongs in this bucket.
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            ShopCategory::All => true,
            ShopCategory::Suv => {
                let name = listing.name.to_uppercase();
                SUV_KEYWORDS.iter().any(|kw| name.contains(kw))
            }
            ShopCategory::Trucks => listing.name.to_uppercase().contains("TRUCK"),
            ShopCategory::ThirdParty => listing
                .description
                .to_uppercase()
                .contains(THIRD_PARTY_MARKER),
        }
    }
}

/// Listings belonging to `category`, input order preserved.
pub fn filter_by_shop_category(listings: &[Listing], category: ShopCategory) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| category.matches(l))
        .cloned()
        .collect()
}

/// Tab-badge count; always agrees with [`filter_by_shop_category`].
pub fn count_by_shop_category(listings: &[Listing], category: ShopCategory) -> usize {
    listings.iter().filter(|l| category.matches(l)).count()
}
