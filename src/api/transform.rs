//! Raw backend records → normalized [`Listing`]s.
//!
//! The feed is loosely structured, so every step here salvages what it can
//! and falls back to a documented default: a placeholder image, the current
//! model year, the `TopSelling` category, a "Contact for price" price.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::raw::RawListing;
use crate::model::{Category, Listing, PLACEHOLDER_IMAGE, THIRD_PARTY_MARKER};
use crate::utils::{current_year, public_url};

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{4})").unwrap());
static YEAR_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}\s+").unwrap());
static TRANSMISSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Transmission\s*:\s*([^\r\n]+)").unwrap());
static FUEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Fuel\s*:\s*([^\r\n]+)").unwrap());
static MILEAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mileage\s*:\s*([^\r\n]+)").unwrap());
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Colou?r\s*:\s*([^\r\n]+)").unwrap());

/// Optional display attributes pulled out of a free-text description.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DescriptionAttrs {
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub mileage: Option<String>,
    pub color: Option<String>,
}

/// Best-effort `Label: value` extraction over semi-structured description
/// text. There is no schema, so an absent or misspelled label simply leaves
/// that field unset. First match wins, captured up to end of line, trimmed.
pub fn extract_description_attrs(description: &str) -> DescriptionAttrs {
    let capture = |re: &Regex| {
        re.captures(description)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };
    DescriptionAttrs {
        transmission: capture(&TRANSMISSION_RE),
        fuel: capture(&FUEL_RE),
        mileage: capture(&MILEAGE_RE),
        color: capture(&COLOR_RE),
    }
}

/// Picks the primary image path: the exterior front shot when present
/// (`front.jpeg` / `front .jpeg`, skipping `front_seats` interior shots and
/// `*_front` variants), else the first picture in the feed.
fn pick_front_image(pics: &[String]) -> Option<&String> {
    pics.iter()
        .find(|p| {
            let lower = p.to_lowercase();
            (lower.contains("/front.jp") || lower.contains("/front .jp"))
                && !lower.contains("seats")
                && !lower.contains("_front")
        })
        .or_else(|| pics.first())
}

/// Splits a leading "YYYY " token off the raw name. The year defaults to the
/// current calendar year when no token is present. The token is only stripped
/// from the display name when whitespace follows it.
fn split_year_name(raw_name: &str) -> (i32, String) {
    let year = YEAR_RE
        .captures(raw_name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_else(current_year);
    let name = YEAR_STRIP_RE.replace(raw_name, "").into_owned();
    (year, name)
}

/// Maps the source category tag (or, when untagged, description hints) onto
/// the three display categories. SUVs are banded by model year.
fn map_category(tag: Option<&str>, description: &str, year: i32) -> Category {
    if let Some(tag) = tag {
        return match tag.to_uppercase().as_str() {
            "TRUCKS" => Category::ComingSoon,
            "SUV" => {
                if year >= 2023 {
                    Category::TopSelling
                } else if year >= 2015 {
                    Category::ComingSoon
                } else {
                    Category::SoldOut
                }
            }
            "SOLD" | "SOLD-OUT" => Category::SoldOut,
            _ => Category::TopSelling,
        };
    }
    let lower = description.to_lowercase();
    if lower.contains("sold") {
        Category::SoldOut
    } else if lower.contains("coming soon") {
        Category::ComingSoon
    } else {
        Category::TopSelling
    }
}

/// Normalizes one raw record into a [`Listing`], enforcing every invariant
/// the feed does not: non-empty images, a year, a category, a price.
pub fn listing_from_raw(raw: RawListing, base_url: &str) -> Listing {
    let pics = raw.car_pic.unwrap_or_default();
    let image = match pick_front_image(&pics) {
        Some(p) if !p.is_empty() => public_url(base_url, p),
        _ => PLACEHOLDER_IMAGE.to_string(),
    };
    let images = if pics.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        pics.iter().map(|p| public_url(base_url, p)).collect()
    };

    let raw_name = match raw.car_name {
        Some(n) if !n.is_empty() => n,
        _ => "Unknown Car".to_string(),
    };
    let (year, name) = split_year_name(&raw_name);

    let description = raw.car_description.unwrap_or_default();
    let tag = raw.category.as_deref().filter(|t| !t.is_empty());
    let category = map_category(tag, &description, year);
    let attrs = extract_description_attrs(&description);

    let price = match raw.car_price {
        Some(p) if !p.is_empty() => p,
        _ => "Contact for price".to_string(),
    };

    Listing {
        id: raw.car_id.to_string(),
        name,
        year,
        price,
        image,
        images,
        category,
        mileage: attrs.mileage,
        transmission: attrs.transmission,
        fuel: attrs.fuel,
        engine_size: None,
        color: attrs.color,
        seats: None,
        doors: None,
        drive: None,
        features: Vec::new(),
        description,
    }
}

/// Re-tags a normalized record as third-party inventory: forced into the
/// coming-soon section, marker token prepended for the shop filter.
pub fn mark_third_party(mut listing: Listing) -> Listing {
    listing.category = Category::ComingSoon;
    listing.description = format!("{THIRD_PARTY_MARKER} {}", listing.description);
    listing
}

/// Last-write-wins union keyed by listing id: override records replace
/// primary ones in place, new ids append in feed order.
pub fn merge_listings(primary: Vec<Listing>, overrides: Vec<Listing>) -> Vec<Listing> {
    let mut merged = primary;
    for listing in overrides {
        match merged.iter_mut().find(|l| l.id == listing.id) {
            Some(slot) => *slot = listing,
            None => merged.push(listing),
        }
    }
    merged
}
