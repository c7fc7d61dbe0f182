//! Bundled seed catalog, served whenever the backend yields no listings.
//!
//! A snapshot of the dealership's own stock. Its categories partition
//! exactly into the three display sections, so every section of the home
//! view stays populated even with the backend down.

use crate::model::{Category, Listing};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

/// The full ten-car seed catalog, in display order.
pub fn catalog() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".into(),
            name: "Toyota Land Cruiser ZX".into(),
            year: 2024,
            price: "375,000,000 TZS".into(),
            image: "/cars/2024 TOYOTA LANDCRUISER ZX/Front.jpeg".into(),
            images: strings(&[
                "/cars/2024 TOYOTA LANDCRUISER ZX/Front.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/Back.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/side.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/interior.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/Interior2.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/Engine.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER ZX/Transmission.jpeg",
            ]),
            category: Category::TopSelling,
            mileage: Some("0km (Brand New)".into()),
            transmission: Some("Automatic 10 Speed".into()),
            fuel: Some("Petrol".into()),
            engine_size: Some("3,500cc Twin Turbo".into()),
            color: Some("Pearl White".into()),
            seats: Some(7),
            doors: Some(5),
            drive: Some("4WD".into()),
            features: strings(&[
                "Sunroof",
                "Leather Seats",
                "Power Folding Third Row Seats",
                "12.3 Inch Touchscreen",
                "JBL Audio System",
            ]),
            description: "Brand New 2024 TOYOTA LANDCRUISER ZX 3.5L Twin Turbo Petrol. \
                Experience unmatched luxury and off-road capability with this brand new \
                Land Cruiser ZX featuring a powerful twin turbo engine, premium interior, \
                and advanced technology."
                .into(),
        },
        Listing {
            id: "2".into(),
            name: "Range Rover Sport Autobiography".into(),
            year: 2024,
            price: "520,000,000 TZS".into(),
            image: "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/front.jpeg".into(),
            images: strings(&[
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/front.jpeg",
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/back .jpeg",
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/side .jpeg",
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/interior.jpeg",
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/interior2.jpeg",
                "/cars/2024 RANGE ROVER SPORTS AUTOBIOGRAPHY/sunroof.jpeg",
            ]),
            category: Category::TopSelling,
            mileage: Some("4,700 km".into()),
            transmission: Some("Automatic 8 Speed".into()),
            fuel: Some("Diesel".into()),
            engine_size: Some("3,000cc".into()),
            color: Some("Carpathian Gray".into()),
            seats: Some(5),
            doors: None,
            drive: Some("AWD".into()),
            features: strings(&[
                "13.1 TouchScreen",
                "Wireless CarPlay",
                "3D Surround Camera",
                "Panoramic Sunroof",
                "Meridian Sound System",
            ]),
            description: "2024 RANGE ROVER SPORTS AUTOBIOGRAPHY 3.0 Diesel. The pinnacle \
                of British luxury SUVs with commanding presence, exceptional performance, \
                and world-class craftsmanship."
                .into(),
        },
        Listing {
            id: "3".into(),
            name: "Toyota Land Cruiser Sahara".into(),
            year: 2024,
            price: "395,000,000 TZS".into(),
            image: "/cars/2024 TOYOTA LANDCRUISER SAHARA/front .jpeg".into(),
            images: strings(&[
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/front .jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/back .jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/Dashboard.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/Interior.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/front_seats.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/Back_seats.jpeg",
                "/cars/2024 TOYOTA LANDCRUISER SAHARA/Engine.jpeg",
            ]),
            category: Category::TopSelling,
            mileage: Some("22,000 km".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Diesel".into()),
            engine_size: Some("3,300cc Twin Turbo".into()),
            color: None,
            seats: Some(5),
            doors: Some(5),
            drive: Some("4WD".into()),
            features: strings(&[
                "12.3 Inch Infotainment Screen",
                "360 Camera",
                "Wireless Charger",
                "Alloy Wheels",
                "Cruise Control",
                "Leather Seats",
                "Daylight LED",
            ]),
            description: "2024 TOYOTA LANDCRUISER SAHARA ZX 3.3L Twin Turbo Diesel. \
                Desert-proven durability meets modern sophistication in this legendary \
                SUV with advanced features."
                .into(),
        },
        Listing {
            id: "4".into(),
            name: "Ford Ranger Wildtrack".into(),
            year: 2023,
            price: "155,000,000 TZS".into(),
            image: "/cars/2023 FORD RANGER WILDTRACK/front.jpeg".into(),
            images: strings(&[
                "/cars/2023 FORD RANGER WILDTRACK/front.jpeg",
                "/cars/2023 FORD RANGER WILDTRACK/back.jpeg",
                "/cars/2023 FORD RANGER WILDTRACK/side.jpeg",
                "/cars/2023 FORD RANGER WILDTRACK/Interior.jpeg",
            ]),
            category: Category::ComingSoon,
            mileage: Some("Low Mileage".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Diesel".into()),
            engine_size: Some("2,000cc".into()),
            color: Some("White".into()),
            seats: Some(5),
            doors: None,
            drive: None,
            features: strings(&[
                "Daylight LED",
                "Leather Seats",
                "Push Start",
                "Alloy Wheels",
                "Android",
                "CarPlay",
            ]),
            description: "2023 FORD RANGER WILDTRACK. Adventure awaits with this rugged \
                pickup featuring advanced tech and bold styling for those who demand more."
                .into(),
        },
        Listing {
            id: "5".into(),
            name: "Toyota Fortuner".into(),
            year: 2023,
            price: "165,000,000 TZS".into(),
            image: "/cars/2023 TOYOTA FORTUNER/Front.jpeg".into(),
            images: strings(&[
                "/cars/2023 TOYOTA FORTUNER/Front.jpeg",
                "/cars/2023 TOYOTA FORTUNER/Back.jpeg",
                "/cars/2023 TOYOTA FORTUNER/interior.jpeg",
            ]),
            category: Category::ComingSoon,
            mileage: Some("Low Mileage".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Diesel".into()),
            engine_size: Some("2,400cc".into()),
            color: Some("White".into()),
            seats: Some(7),
            doors: Some(5),
            drive: Some("4WD".into()),
            features: strings(&[
                "Leather Seats",
                "Alloy Wheels",
                "Daylight Running Lights",
                "Push Start",
            ]),
            description: "2023 TOYOTA FORTUNER 2.4L Diesel 4x4. The versatile family SUV \
                that conquers any terrain with spacious seating for 7."
                .into(),
        },
        Listing {
            id: "6".into(),
            name: "Scania Dump Truck 94C-300".into(),
            year: 2003,
            price: "185,000,000 TZS".into(),
            image: "/cars/2003 SCANIA DUMP TRUCK 94C - 300/Front.jpeg".into(),
            images: strings(&[
                "/cars/2003 SCANIA DUMP TRUCK 94C - 300/Front.jpeg",
                "/cars/2003 SCANIA DUMP TRUCK 94C - 300/back .jpeg",
                "/cars/2003 SCANIA DUMP TRUCK 94C - 300/side.jpeg",
            ]),
            category: Category::ComingSoon,
            mileage: None,
            transmission: Some("Manual".into()),
            fuel: Some("Diesel".into()),
            engine_size: None,
            color: Some("Orange".into()),
            seats: None,
            doors: None,
            drive: None,
            features: strings(&["Driver Bed", "FM Radio", "Fog Lights", "AC", "Sports Lights"]),
            description: "2003 SCANIA DUMP TRUCK 94C-300. Heavy-duty 8x4 dump truck with \
                25-ton carrying capacity. Built for serious construction work."
                .into(),
        },
        Listing {
            id: "7".into(),
            name: "Scania Dump Truck 124C-380".into(),
            year: 2004,
            price: "185,000,000 TZS".into(),
            image: "/cars/2004 SCANIA DUMP TRUCK 124c - 380/Front.jpeg".into(),
            images: strings(&[
                "/cars/2004 SCANIA DUMP TRUCK 124c - 380/Front.jpeg",
                "/cars/2004 SCANIA DUMP TRUCK 124c - 380/back.jpeg",
                "/cars/2004 SCANIA DUMP TRUCK 124c - 380/side.jpeg",
            ]),
            category: Category::ComingSoon,
            mileage: None,
            transmission: Some("Manual".into()),
            fuel: Some("Diesel".into()),
            engine_size: None,
            color: Some("Multi".into()),
            seats: None,
            doors: None,
            drive: None,
            features: strings(&["Driver Bed", "FM Radio", "Fog Lights", "AC", "Sports Lights"]),
            description: "2004 SCANIA DUMP TRUCK 124C-380. Powerful 8x4 dump truck with \
                25-ton carrying capacity. Perfect for construction and mining operations."
                .into(),
        },
        Listing {
            id: "8".into(),
            name: "Subaru Forester SJ5".into(),
            year: 2015,
            price: "37,500,000 TZS".into(),
            image: "/cars/2015 SUBARU FORESTER SJ5/Front.jpeg".into(),
            images: strings(&[
                "/cars/2015 SUBARU FORESTER SJ5/Front.jpeg",
                "/cars/2015 SUBARU FORESTER SJ5/back.jpeg",
                "/cars/2015 SUBARU FORESTER SJ5/Side.jpeg",
                "/cars/2015 SUBARU FORESTER SJ5/interior.jpeg",
                "/cars/2015 SUBARU FORESTER SJ5/Engine.jpeg",
                "/cars/2015 SUBARU FORESTER SJ5/boot.jpeg",
            ]),
            category: Category::SoldOut,
            mileage: Some("58,000 km".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Petrol".into()),
            engine_size: Some("2,000cc".into()),
            color: Some("Pearl White".into()),
            seats: Some(5),
            doors: None,
            drive: Some("AWD".into()),
            features: strings(&[
                "Push Start",
                "Alloy Wheels",
                "Fog Lights",
                "Daylight LED",
                "Roof Rails",
                "Rear Spoiler",
            ]),
            description: "2015 SUBARU FORESTER SJ5 2.0L Petrol. Reliable all-wheel drive \
                performance with low mileage. Perfect for city driving and weekend \
                adventures."
                .into(),
        },
        Listing {
            id: "9".into(),
            name: "Toyota Harrier 240G".into(),
            year: 2007,
            price: "37,500,000 TZS".into(),
            image: "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Front.jpeg".into(),
            images: strings(&[
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Front.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Back.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Side.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Interior.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Seats.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Seats2.jpeg",
                "/cars/2007 TOYOTA Harrier 240G L PACKAGECBA-ACU30W/Engine.jpeg",
            ]),
            category: Category::SoldOut,
            mileage: Some("47,518 km".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Petrol".into()),
            engine_size: Some("2,360cc".into()),
            color: Some("Pearl".into()),
            seats: Some(5),
            doors: Some(5),
            drive: Some("2WD".into()),
            features: Vec::new(),
            description: "2007 TOYOTA Harrier 240G L Package. Classic crossover SUV with \
                premium features and low mileage. Comfortable, economical, and built to \
                last."
                .into(),
        },
        Listing {
            id: "10".into(),
            name: "Toyota Land Cruiser ZX".into(),
            year: 2011,
            price: "152,500,000 TZS".into(),
            image: "/cars/2011 TOYOTA LANDCRUISER ZX/Front.jpeg".into(),
            images: strings(&[
                "/cars/2011 TOYOTA LANDCRUISER ZX/Front.jpeg",
                "/cars/2011 TOYOTA LANDCRUISER ZX/Back.jpeg",
                "/cars/2011 TOYOTA LANDCRUISER ZX/interior.jpeg",
            ]),
            category: Category::SoldOut,
            mileage: Some("Low Mileage".into()),
            transmission: Some("Automatic".into()),
            fuel: Some("Petrol".into()),
            engine_size: None,
            color: Some("Pearl".into()),
            seats: Some(7),
            doors: None,
            drive: Some("4x4".into()),
            features: strings(&[
                "Leather Seats",
                "Alloy Wheels",
                "Fog Lights",
                "Daylight LED",
                "Push Start",
            ]),
            description: "2011 TOYOTA LANDCRUISER ZX. Timeless Land Cruiser design with \
                powerful 1UR petrol engine. Built for those who value durability and \
                comfort."
                .into(),
        },
    ]
}

/// Seed listings for the top-selling section.
pub fn top_selling() -> Vec<Listing> {
    section(Category::TopSelling)
}

/// Seed listings for the coming-soon section.
pub fn coming_soon() -> Vec<Listing> {
    section(Category::ComingSoon)
}

/// Seed listings for the sold-out section.
pub fn sold_out() -> Vec<Listing> {
    section(Category::SoldOut)
}

fn section(category: Category) -> Vec<Listing> {
    catalog()
        .into_iter()
        .filter(|l| l.category == category)
        .collect()
}

/// The fetched listings when there are any, the seed catalog otherwise.
pub fn or_seed(fetched: Vec<Listing>) -> Vec<Listing> {
    if fetched.is_empty() { catalog() } else { fetched }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_partitions_into_the_three_sections() {
        assert_eq!(catalog().len(), 10);
        assert_eq!(top_selling().len(), 3);
        assert_eq!(coming_soon().len(), 4);
        assert_eq!(sold_out().len(), 3);
    }

    #[test]
    fn seed_ids_are_unique_and_images_populated() {
        let seed = catalog();
        let mut ids: Vec<&str> = seed.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.len());
        for listing in &seed {
            assert!(!listing.image.is_empty(), "{}", listing.name);
            assert!(!listing.images.is_empty(), "{}", listing.name);
        }
    }

    #[test]
    fn or_seed_substitutes_only_for_an_empty_fetch() {
        assert_eq!(or_seed(Vec::new()).len(), 10);
        let fetched = vec![catalog().remove(4)];
        assert_eq!(or_seed(fetched.clone()), fetched);
    }
}
