//! Single-shot page render against the live backend: home sections, shop
//! tab counts, and an optional keyword search given as the first argument.

use tracing::info;
use tracing_subscriber::EnvFilter;

use showroom::api::ApiClient;
use showroom::cache::CachedClient;
use showroom::catalog::{self, ShopCategory};
use showroom::config::AppConfig;
use showroom::fallback;
use showroom::model::{BrandAssets, Category, Listing, PLACEHOLDER_IMAGE, VideoItem};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showroom=info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("🚗 Showroom catalog against {}", config.api_base_url);

    let client = CachedClient::new(ApiClient::new(&config));
    let (listings, videos, logos) = futures::join!(
        client.all_listings(),
        client.promotional_content(),
        client.brand_assets(),
    );
    let listings = fallback::or_seed(listings);

    render_home(&listings, &videos, &logos);
    let query = std::env::args().nth(1);
    render_shop(&listings, query.as_deref());
}

fn render_home(listings: &[Listing], videos: &[VideoItem], logos: &BrandAssets) {
    let hero = listings
        .iter()
        .find(|l| l.category == Category::TopSelling)
        .map(|l| l.image.as_str())
        .unwrap_or(PLACEHOLDER_IMAGE);

    println!("=== Home ===");
    println!("Hero image: {hero}");
    println!("Logos: light {} | dark {}", logos.light, logos.dark);

    for (title, category) in [
        ("Top Selling", Category::TopSelling),
        ("Coming Soon", Category::ComingSoon),
        ("Sold Out", Category::SoldOut),
    ] {
        println!("\n--- {title} ---");
        for listing in listings.iter().filter(|l| l.category == category) {
            println!("  {} ({}) - {}", listing.name, listing.year, listing.price);
        }
    }

    if !videos.is_empty() {
        println!("\n--- Videos ---");
        for video in videos {
            match &video.duration {
                Some(duration) => println!("  {} [{duration}] {}", video.title, video.video_url),
                None => println!("  {} {}", video.title, video.video_url),
            }
        }
    }
}

fn render_shop(listings: &[Listing], query: Option<&str>) {
    println!("\n=== Shop ===");
    for category in ShopCategory::TABS {
        println!(
            "  {}: {}",
            category.label(),
            catalog::count_by_shop_category(listings, category)
        );
    }

    if let Some(query) = query {
        let hits = catalog::filter_and_search(listings, ShopCategory::All, query);
        println!("\nSearch \"{query}\": {} result(s)", hits.len());
        for listing in &hits {
            println!("  {} ({}) - {}", listing.name, listing.year, listing.price);
        }
    }
}
