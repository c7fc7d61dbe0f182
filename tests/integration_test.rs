//! End-to-end tests: the real client against a local stub backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use showroom::api::ApiClient;
use showroom::cache::CachedClient;
use showroom::catalog::{ShopCategory, filter_by_shop_category};
use showroom::config::AppConfig;
use showroom::fallback;
use showroom::model::{Category, PLACEHOLDER_IMAGE, PLACEHOLDER_LOGO, THIRD_PARTY_MARKER};

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&AppConfig {
        api_base_url: format!("http://{addr}"),
        http_timeout_secs: 5,
    })
}

/// Two primary records: one fully populated, one as sparse as the backend
/// actually gets. Timestamp fields are present to prove they are ignored.
fn cars_payload() -> Value {
    json!({
        "data": [
            {
                "car_id": 1,
                "car_name": "2024 Toyota Land Cruiser",
                "car_pic": ["x/back.jpeg", "x/front.jpeg"],
                "car_price": "375,000,000 TZS",
                "car_description": "Transmission : Automatic\nFuel : Petrol",
                "category": "SUV",
                "created_at": "2024-05-01T08:00:00Z",
                "updated_at": "2024-05-01T08:00:00Z"
            },
            {
                "car_id": 5,
                "car_name": "2019 Nissan Patrol",
                "car_pic": [],
                "car_price": "",
                "car_description": "",
                "category": "",
                "created_at": "2024-05-01T08:00:00Z",
                "updated_at": "2024-05-01T08:00:00Z"
            }
        ]
    })
}

fn third_party_payload() -> Value {
    json!({
        "data": [
            {
                "car_id": 5,
                "car_name": "2019 Mazda BT-50",
                "car_pic": ["tp/front.jpeg"],
                "car_price": "95,000,000 TZS",
                "car_description": "Fuel : Diesel",
                "category": "SUV"
            }
        ]
    })
}

#[tokio::test]
async fn listings_round_trip_normalizes_the_feed() {
    let app = Router::new().route("/api/cars", get(|| async { Json(cars_payload()) }));
    let addr = serve(app).await;

    let listings = client_for(addr).fetch_listings().await;
    assert_eq!(listings.len(), 2);

    let cruiser = &listings[0];
    assert_eq!(cruiser.id, "1");
    assert_eq!(cruiser.name, "Toyota Land Cruiser");
    assert_eq!(cruiser.year, 2024);
    assert_eq!(cruiser.category, Category::TopSelling);
    assert_eq!(cruiser.image, format!("http://{addr}/public/x/front.jpeg"));
    assert_eq!(cruiser.images.len(), 2);
    assert_eq!(cruiser.transmission.as_deref(), Some("Automatic"));
    assert_eq!(cruiser.fuel.as_deref(), Some("Petrol"));

    let patrol = &listings[1];
    assert_eq!(patrol.id, "5");
    assert_eq!(patrol.name, "Nissan Patrol");
    assert_eq!(patrol.price, "Contact for price");
    assert_eq!(patrol.image, PLACEHOLDER_IMAGE);
    assert_eq!(patrol.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    assert_eq!(patrol.category, Category::TopSelling);
}

#[tokio::test]
async fn third_party_records_override_primary_ones() {
    let app = Router::new()
        .route("/api/cars", get(|| async { Json(cars_payload()) }))
        .route("/api/third-party", get(|| async { Json(third_party_payload()) }));
    let addr = serve(app).await;

    let merged = client_for(addr).fetch_all_listings().await;
    let ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["1", "5"]);

    let imported = &merged[1];
    assert_eq!(imported.name, "Mazda BT-50");
    assert_eq!(imported.category, Category::ComingSoon);
    assert!(imported.description.starts_with(THIRD_PARTY_MARKER));
    assert_eq!(imported.fuel.as_deref(), Some("Diesel"));

    // The override is what the shop view's third-party tab picks up.
    let tab = filter_by_shop_category(&merged, ShopCategory::ThirdParty);
    assert_eq!(tab.len(), 1);
    assert_eq!(tab[0].id, "5");
}

#[tokio::test]
async fn third_party_absence_is_not_an_error() {
    let app = Router::new()
        .route("/api/cars", get(|| async { Json(cars_payload()) }))
        .route("/api/third-party", get(|| async { StatusCode::NOT_FOUND }));
    let addr = serve(app).await;

    let client = client_for(addr);
    assert!(client.fetch_third_party_listings().await.is_empty());
    assert_eq!(client.fetch_all_listings().await.len(), 2);
}

#[tokio::test]
async fn server_errors_collapse_to_the_seed_fallback() {
    let app = Router::new()
        .route("/api/cars", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/third-party", get(|| async { StatusCode::NOT_FOUND }));
    let addr = serve(app).await;

    let merged = client_for(addr).fetch_all_listings().await;
    assert!(merged.is_empty());

    let listings = fallback::or_seed(merged);
    assert_eq!(listings.len(), 10);
    let count = |category: Category| listings.iter().filter(|l| l.category == category).count();
    assert_eq!(count(Category::TopSelling), 3);
    assert_eq!(count(Category::ComingSoon), 4);
    assert_eq!(count(Category::SoldOut), 3);
}

#[tokio::test]
async fn malformed_json_yields_an_empty_set() {
    let app = Router::new().route("/api/cars", get(|| async { "definitely not json" }));
    let addr = serve(app).await;

    assert!(client_for(addr).fetch_listings().await.is_empty());
}

#[tokio::test]
async fn unreachable_backend_yields_an_empty_set() {
    // Bind a port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    assert!(client_for(addr).fetch_listings().await.is_empty());
    assert!(client_for(addr).fetch_listing_by_id("1").await.is_none());
}

#[tokio::test]
async fn single_listing_lookup_is_soft_on_unknown_ids() {
    let app = Router::new().route(
        "/api/cars/{id}",
        get(|Path(id): Path<String>| async move {
            if id == "7" {
                Json(json!({
                    "car_id": 7,
                    "car_name": "2007 Toyota Harrier",
                    "car_pic": ["h/front.jpeg"],
                    "car_price": "37,500,000 TZS",
                    "car_description": "Mileage : 47,518 km",
                    "category": "SUV"
                }))
                .into_response()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }),
    );
    let addr = serve(app).await;

    let client = client_for(addr);
    let harrier = client.fetch_listing_by_id("7").await.unwrap();
    assert_eq!(harrier.name, "Toyota Harrier");
    assert_eq!(harrier.year, 2007);
    assert_eq!(harrier.category, Category::SoldOut);
    assert_eq!(harrier.mileage.as_deref(), Some("47,518 km"));

    assert!(client.fetch_listing_by_id("99").await.is_none());
}

#[tokio::test]
async fn category_fetch_filters_client_side() {
    let app = Router::new().route("/api/cars", get(|| async { Json(cars_payload()) }));
    let addr = serve(app).await;

    let top = client_for(addr)
        .fetch_listings_by_category(Category::TopSelling)
        .await;
    assert_eq!(top.len(), 2);
    let sold = client_for(addr)
        .fetch_listings_by_category(Category::SoldOut)
        .await;
    assert!(sold.is_empty());
}

#[tokio::test]
async fn logo_sides_match_by_name_substring() {
    let app = Router::new().route(
        "/api/logos",
        get(|| async {
            Json(json!({
                "data": [
                    { "id": 1, "name": "brand-dark-2024", "path": "logos/dark.png" },
                    { "id": 2, "name": "brand-light-2024", "path": "logos/light.png" }
                ]
            }))
        }),
    );
    let addr = serve(app).await;

    let assets = client_for(addr).fetch_brand_assets().await;
    assert_eq!(assets.light, format!("http://{addr}/public/logos/light.png"));
    assert_eq!(assets.dark, format!("http://{addr}/public/logos/dark.png"));
}

#[tokio::test]
async fn missing_logo_side_gets_the_placeholder() {
    let app = Router::new().route(
        "/api/logos",
        get(|| async {
            Json(json!({
                "data": [
                    { "id": 1, "name": "brand-light", "path": "logos/light.png" }
                ]
            }))
        }),
    );
    let addr = serve(app).await;

    let assets = client_for(addr).fetch_brand_assets().await;
    assert_eq!(assets.light, format!("http://{addr}/public/logos/light.png"));
    assert_eq!(assets.dark, PLACEHOLDER_LOGO);
}

#[tokio::test]
async fn content_duration_normalizes_blank_to_absent() {
    let app = Router::new().route(
        "/api/content",
        get(|| async {
            Json(json!({
                "data": [
                    { "contentID": 1, "content_name": "Walkaround", "content_video": "videos/walk.mp4", "duration": "01:30" },
                    { "contentID": 2, "content_name": "Night Drive", "content_video": "videos/night.mp4", "duration": "" },
                    { "contentID": 3, "content_name": "Teaser", "content_video": "videos/teaser.mp4", "duration": null }
                ]
            }))
        }),
    );
    let addr = serve(app).await;

    let videos = client_for(addr).fetch_promotional_content().await;
    assert_eq!(videos.len(), 3);
    assert_eq!(videos[0].id, "1");
    assert_eq!(videos[0].title, "Walkaround");
    assert_eq!(
        videos[0].video_url,
        format!("http://{addr}/public/videos/walk.mp4")
    );
    assert_eq!(videos[0].duration.as_deref(), Some("01:30"));
    assert_eq!(videos[1].duration, None);
    assert_eq!(videos[2].duration, None);
}

#[tokio::test]
async fn cached_client_suppresses_repeat_fetches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let route_hits = hits.clone();
    let app = Router::new()
        .route(
            "/api/cars",
            get(move || {
                let hits = route_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(cars_payload())
                }
            }),
        )
        .route("/api/third-party", get(|| async { StatusCode::NOT_FOUND }));
    let addr = serve(app).await;

    let client = CachedClient::new(client_for(addr));
    for _ in 0..3 {
        assert_eq!(client.all_listings().await.len(), 2);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
