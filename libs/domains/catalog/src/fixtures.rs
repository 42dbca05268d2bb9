//! Fixture data used to pre-seed the in-memory repositories for demos and
//! tests. Entity values and ordering are part of the contract: tests assert
//! on both.

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

use crate::models::{Brand, Category, Product, Review};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn specs(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The fixture categories: a two-level tree of ten entries.
pub fn test_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, description: &str, parent: Option<&str>, slug: &str| {
        Category {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
            parent_id: parent.map(Into::into),
            image_url: Some(format!("/categories/{}.jpg", slug)),
            slug: Some(slug.into()),
        }
    };

    vec![
        category(
            "cat-1",
            "Electronics",
            "Electronic devices and accessories",
            None,
            "electronics",
        ),
        category(
            "cat-2",
            "Smartphones",
            "Mobile phones and accessories",
            Some("cat-1"),
            "smartphones",
        ),
        category("cat-3", "Laptops", "Portable computers", Some("cat-1"), "laptops"),
        category(
            "cat-4",
            "Audio",
            "Headphones, speakers, and audio equipment",
            Some("cat-1"),
            "audio",
        ),
        category("cat-5", "Fashion", "Clothing and accessories", None, "fashion"),
        category(
            "cat-6",
            "Men's Clothing",
            "Apparel for men",
            Some("cat-5"),
            "mens-clothing",
        ),
        category(
            "cat-7",
            "Women's Clothing",
            "Apparel for women",
            Some("cat-5"),
            "womens-clothing",
        ),
        category(
            "cat-8",
            "Home & Garden",
            "Home decor and garden supplies",
            None,
            "home-garden",
        ),
        category(
            "cat-9",
            "Sports & Outdoors",
            "Athletic and outdoor equipment",
            None,
            "sports-outdoors",
        ),
        category(
            "cat-10",
            "Books",
            "Physical and digital books",
            None,
            "books",
        ),
    ]
}

/// The fixture brands.
pub fn test_brands() -> Vec<Brand> {
    let brand = |id: &str, name: &str, description: &str, slug: &str| Brand {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
        logo_url: Some(format!("/brands/{}.svg", slug)),
        website: Some(format!("https://{}.example.com", slug)),
        slug: Some(slug.into()),
    };

    vec![
        brand("brand-1", "TechPro", "Premium electronics manufacturer", "techpro"),
        brand("brand-2", "StyleCo", "Fashion and lifestyle brand", "styleco"),
        brand("brand-3", "SoundWave", "Audio equipment specialist", "soundwave"),
        brand("brand-4", "ActiveGear", "Sports and outdoor equipment", "activegear"),
        brand("brand-5", "HomeEssentials", "Quality home products", "homeessentials"),
        brand("brand-6", "ReadMore", "Publishing house", "readmore"),
        brand("brand-7", "GigaTech", "Computing solutions", "gigatech"),
        brand("brand-8", "UrbanStyle", "Contemporary fashion", "urbanstyle"),
    ]
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    price_cents: i64,
    description: &'static str,
    category_id: &'static str,
    brand_id: &'static str,
    images: &'static [&'static str],
    stock: i32,
    rating: f64,
    review_count: i32,
    tags: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
}

impl From<&ProductSeed> for Product {
    fn from(seed: &ProductSeed) -> Self {
        Product {
            id: seed.id.into(),
            name: seed.name.into(),
            price_cents: seed.price_cents,
            description: Some(seed.description.into()),
            category_id: Some(seed.category_id.into()),
            brand_id: Some(seed.brand_id.into()),
            images: strings(seed.images),
            stock: Some(seed.stock),
            rating: Some(seed.rating),
            review_count: Some(seed.review_count),
            tags: strings(seed.tags),
            specifications: specs(seed.specifications),
        }
    }
}

/// The fixture products: 52 entries, ids `"1"`-`"52"`, in this order.
pub fn test_products() -> Vec<Product> {
    PRODUCT_SEEDS.iter().map(Product::from).collect()
}

const PRODUCT_SEEDS: &[ProductSeed] = &[
    // Electronics - Smartphones (10 products)
    ProductSeed {
        id: "1",
        name: "TechPro X1 Smartphone",
        price_cents: 79999,
        description: "Flagship smartphone with 6.7\" OLED display, 5G connectivity, and 108MP camera",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-1.jpg", "/products/phone-1-2.jpg"],
        stock: 50,
        rating: 4.8,
        review_count: 245,
        tags: &["5G", "OLED", "Premium"],
        specifications: &[
            ("Screen Size", "6.7\""),
            ("Camera", "108MP"),
            ("Battery", "5000mAh"),
            ("Storage", "256GB"),
        ],
    },
    ProductSeed {
        id: "2",
        name: "TechPro Mini Phone",
        price_cents: 49999,
        description: "Compact smartphone with powerful performance",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-2.jpg"],
        stock: 75,
        rating: 4.5,
        review_count: 180,
        tags: &["Compact", "Budget-friendly"],
        specifications: &[
            ("Screen Size", "5.4\""),
            ("Camera", "48MP"),
            ("Battery", "3500mAh"),
            ("Storage", "128GB"),
        ],
    },
    ProductSeed {
        id: "3",
        name: "GigaTech Z9 Pro",
        price_cents: 89999,
        description: "Ultra-premium smartphone with cutting-edge features",
        category_id: "cat-2",
        brand_id: "brand-7",
        images: &[
            "/products/phone-3.jpg",
            "/products/phone-3-2.jpg",
            "/products/phone-3-3.jpg",
        ],
        stock: 30,
        rating: 4.9,
        review_count: 312,
        tags: &["5G", "Premium", "AI Camera"],
        specifications: &[
            ("Screen Size", "6.9\""),
            ("Camera", "200MP"),
            ("Battery", "6000mAh"),
            ("Storage", "512GB"),
        ],
    },
    ProductSeed {
        id: "4",
        name: "TechPro Budget Phone",
        price_cents: 19999,
        description: "Affordable smartphone for everyday use",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-4.jpg"],
        stock: 120,
        rating: 4.2,
        review_count: 95,
        tags: &["Budget", "Essential"],
        specifications: &[
            ("Screen Size", "6.1\""),
            ("Camera", "13MP"),
            ("Battery", "4000mAh"),
            ("Storage", "64GB"),
        ],
    },
    ProductSeed {
        id: "5",
        name: "GigaTech Fold Max",
        price_cents: 149999,
        description: "Revolutionary foldable smartphone",
        category_id: "cat-2",
        brand_id: "brand-7",
        images: &["/products/phone-5.jpg", "/products/phone-5-2.jpg"],
        stock: 15,
        rating: 4.7,
        review_count: 89,
        tags: &["Foldable", "Premium", "Innovation"],
        specifications: &[
            ("Screen Size", "7.6\" unfolded"),
            ("Camera", "50MP"),
            ("Battery", "4500mAh"),
            ("Storage", "512GB"),
        ],
    },
    ProductSeed {
        id: "6",
        name: "TechPro Camera Phone",
        price_cents: 69999,
        description: "Photography-focused smartphone",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-6.jpg"],
        stock: 60,
        rating: 4.6,
        review_count: 156,
        tags: &["Camera", "Photography"],
        specifications: &[
            ("Screen Size", "6.5\""),
            ("Camera", "64MP Triple"),
            ("Battery", "4800mAh"),
            ("Storage", "256GB"),
        ],
    },
    ProductSeed {
        id: "7",
        name: "GigaTech Gaming Phone",
        price_cents: 79999,
        description: "Mobile gaming powerhouse",
        category_id: "cat-2",
        brand_id: "brand-7",
        images: &["/products/phone-7.jpg"],
        stock: 40,
        rating: 4.7,
        review_count: 203,
        tags: &["Gaming", "Performance"],
        specifications: &[
            ("Screen Size", "6.8\""),
            ("Camera", "64MP"),
            ("Battery", "6500mAh"),
            ("Storage", "512GB"),
        ],
    },
    ProductSeed {
        id: "8",
        name: "TechPro Senior Phone",
        price_cents: 14999,
        description: "Easy-to-use phone for seniors",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-8.jpg"],
        stock: 90,
        rating: 4.4,
        review_count: 67,
        tags: &["Senior-friendly", "Simple"],
        specifications: &[
            ("Screen Size", "5.5\""),
            ("Camera", "8MP"),
            ("Battery", "3000mAh"),
            ("Storage", "32GB"),
        ],
    },
    ProductSeed {
        id: "9",
        name: "GigaTech Rugged Phone",
        price_cents: 39999,
        description: "Waterproof and shockproof smartphone",
        category_id: "cat-2",
        brand_id: "brand-7",
        images: &["/products/phone-9.jpg"],
        stock: 55,
        rating: 4.5,
        review_count: 112,
        tags: &["Rugged", "Waterproof"],
        specifications: &[
            ("Screen Size", "6.3\""),
            ("Camera", "48MP"),
            ("Battery", "5500mAh"),
            ("Storage", "128GB"),
        ],
    },
    ProductSeed {
        id: "10",
        name: "TechPro Eco Phone",
        price_cents: 44999,
        description: "Environmentally friendly smartphone",
        category_id: "cat-2",
        brand_id: "brand-1",
        images: &["/products/phone-10.jpg"],
        stock: 70,
        rating: 4.3,
        review_count: 88,
        tags: &["Eco-friendly", "Sustainable"],
        specifications: &[
            ("Screen Size", "6.2\""),
            ("Camera", "50MP"),
            ("Battery", "4200mAh"),
            ("Storage", "128GB"),
        ],
    },
    // Laptops (10 products)
    ProductSeed {
        id: "11",
        name: "GigaTech UltraBook Pro",
        price_cents: 129999,
        description: "15.6\" laptop with Intel i7, 16GB RAM, 512GB SSD",
        category_id: "cat-3",
        brand_id: "brand-7",
        images: &["/products/laptop-1.jpg"],
        stock: 35,
        rating: 4.7,
        review_count: 198,
        tags: &["Professional", "Performance"],
        specifications: &[
            ("Processor", "Intel Core i7"),
            ("RAM", "16GB"),
            ("Storage", "512GB SSD"),
            ("Screen", "15.6\" Full HD"),
        ],
    },
    ProductSeed {
        id: "12",
        name: "TechPro Gaming Laptop",
        price_cents: 179999,
        description: "High-performance gaming laptop with RTX graphics",
        category_id: "cat-3",
        brand_id: "brand-1",
        images: &["/products/laptop-2.jpg", "/products/laptop-2-2.jpg"],
        stock: 25,
        rating: 4.8,
        review_count: 234,
        tags: &["Gaming", "RTX", "High-end"],
        specifications: &[
            ("Processor", "Intel Core i9"),
            ("RAM", "32GB"),
            ("Storage", "1TB SSD"),
            ("Screen", "17.3\" 144Hz"),
            ("GPU", "RTX 4070"),
        ],
    },
    ProductSeed {
        id: "13",
        name: "GigaTech Slim Notebook",
        price_cents: 79999,
        description: "Lightweight laptop perfect for students",
        category_id: "cat-3",
        brand_id: "brand-7",
        images: &["/products/laptop-3.jpg"],
        stock: 60,
        rating: 4.5,
        review_count: 145,
        tags: &["Portable", "Student"],
        specifications: &[
            ("Processor", "Intel Core i5"),
            ("RAM", "8GB"),
            ("Storage", "256GB SSD"),
            ("Screen", "14\" Full HD"),
        ],
    },
    ProductSeed {
        id: "14",
        name: "TechPro Workstation",
        price_cents: 249999,
        description: "Professional workstation for creators",
        category_id: "cat-3",
        brand_id: "brand-1",
        images: &["/products/laptop-4.jpg"],
        stock: 15,
        rating: 4.9,
        review_count: 176,
        tags: &["Professional", "Creator", "Workstation"],
        specifications: &[
            ("Processor", "Intel Xeon"),
            ("RAM", "64GB"),
            ("Storage", "2TB SSD"),
            ("Screen", "15.6\" 4K"),
            ("GPU", "Quadro RTX"),
        ],
    },
    ProductSeed {
        id: "15",
        name: "GigaTech Budget Laptop",
        price_cents: 44999,
        description: "Affordable laptop for basic tasks",
        category_id: "cat-3",
        brand_id: "brand-7",
        images: &["/products/laptop-5.jpg"],
        stock: 80,
        rating: 4.2,
        review_count: 92,
        tags: &["Budget", "Basic"],
        specifications: &[
            ("Processor", "Intel Celeron"),
            ("RAM", "4GB"),
            ("Storage", "128GB SSD"),
            ("Screen", "14\" HD"),
        ],
    },
    ProductSeed {
        id: "16",
        name: "TechPro 2-in-1 Convertible",
        price_cents: 109999,
        description: "Versatile laptop and tablet in one",
        category_id: "cat-3",
        brand_id: "brand-1",
        images: &["/products/laptop-6.jpg", "/products/laptop-6-2.jpg"],
        stock: 45,
        rating: 4.6,
        review_count: 167,
        tags: &["2-in-1", "Touchscreen", "Versatile"],
        specifications: &[
            ("Processor", "Intel Core i7"),
            ("RAM", "16GB"),
            ("Storage", "512GB SSD"),
            ("Screen", "13.3\" Touchscreen"),
        ],
    },
    ProductSeed {
        id: "17",
        name: "GigaTech Business Pro",
        price_cents: 139999,
        description: "Enterprise-grade laptop with security features",
        category_id: "cat-3",
        brand_id: "brand-7",
        images: &["/products/laptop-7.jpg"],
        stock: 30,
        rating: 4.7,
        review_count: 189,
        tags: &["Business", "Security", "Enterprise"],
        specifications: &[
            ("Processor", "Intel Core i7"),
            ("RAM", "16GB"),
            ("Storage", "512GB SSD"),
            ("Screen", "14\" Full HD"),
            ("Features", "TPM 2.0, Fingerprint"),
        ],
    },
    ProductSeed {
        id: "18",
        name: "TechPro Ultra Thin",
        price_cents: 149999,
        description: "Ultra-thin premium laptop",
        category_id: "cat-3",
        brand_id: "brand-1",
        images: &["/products/laptop-8.jpg"],
        stock: 40,
        rating: 4.8,
        review_count: 221,
        tags: &["Premium", "Thin", "Lightweight"],
        specifications: &[
            ("Processor", "Intel Core i7"),
            ("RAM", "16GB"),
            ("Storage", "1TB SSD"),
            ("Screen", "13.3\" 4K"),
            ("Weight", "0.99 kg"),
        ],
    },
    ProductSeed {
        id: "19",
        name: "GigaTech Chromebook",
        price_cents: 34999,
        description: "Fast and secure Chromebook",
        category_id: "cat-3",
        brand_id: "brand-7",
        images: &["/products/laptop-9.jpg"],
        stock: 95,
        rating: 4.4,
        review_count: 134,
        tags: &["Chromebook", "Fast", "Affordable"],
        specifications: &[
            ("Processor", "Intel Celeron"),
            ("RAM", "8GB"),
            ("Storage", "64GB eMMC"),
            ("Screen", "14\" HD"),
        ],
    },
    ProductSeed {
        id: "20",
        name: "TechPro Creator Laptop",
        price_cents: 199999,
        description: "Optimized for content creation",
        category_id: "cat-3",
        brand_id: "brand-1",
        images: &["/products/laptop-10.jpg"],
        stock: 20,
        rating: 4.9,
        review_count: 156,
        tags: &["Creator", "Video Editing", "Premium"],
        specifications: &[
            ("Processor", "AMD Ryzen 9"),
            ("RAM", "32GB"),
            ("Storage", "1TB SSD"),
            ("Screen", "16\" 4K OLED"),
            ("GPU", "RTX 4060"),
        ],
    },
    // Audio Equipment (10 products)
    ProductSeed {
        id: "21",
        name: "SoundWave Elite Headphones",
        price_cents: 34999,
        description: "Premium noise-canceling headphones",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/headphones-1.jpg"],
        stock: 85,
        rating: 4.8,
        review_count: 312,
        tags: &["Wireless", "Noise-Canceling", "Premium"],
        specifications: &[
            ("Type", "Over-ear"),
            ("Battery", "30 hours"),
            ("Connectivity", "Bluetooth 5.0"),
            ("Features", "ANC, Hi-Res Audio"),
        ],
    },
    ProductSeed {
        id: "22",
        name: "SoundWave Sport Earbuds",
        price_cents: 12999,
        description: "Waterproof earbuds for active lifestyle",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/earbuds-1.jpg"],
        stock: 150,
        rating: 4.6,
        review_count: 245,
        tags: &["Sport", "Waterproof", "Wireless"],
        specifications: &[
            ("Type", "In-ear"),
            ("Battery", "8 hours"),
            ("Rating", "IPX7"),
            ("Connectivity", "Bluetooth 5.2"),
        ],
    },
    ProductSeed {
        id: "23",
        name: "TechPro Studio Monitor",
        price_cents: 89999,
        description: "Professional studio monitor speakers (pair)",
        category_id: "cat-4",
        brand_id: "brand-1",
        images: &["/products/speakers-1.jpg"],
        stock: 30,
        rating: 4.9,
        review_count: 87,
        tags: &["Professional", "Studio", "High-fidelity"],
        specifications: &[
            ("Type", "Active Monitors"),
            ("Power", "150W"),
            ("Frequency", "40Hz-20kHz"),
            ("Size", "8 inch woofer"),
        ],
    },
    ProductSeed {
        id: "24",
        name: "SoundWave Portable Speaker",
        price_cents: 19999,
        description: "Compact Bluetooth speaker with powerful sound",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/speaker-2.jpg"],
        stock: 120,
        rating: 4.7,
        review_count: 289,
        tags: &["Portable", "Bluetooth", "Waterproof"],
        specifications: &[
            ("Type", "Portable"),
            ("Battery", "12 hours"),
            ("Rating", "IPX7"),
            ("Power", "20W"),
        ],
    },
    ProductSeed {
        id: "25",
        name: "TechPro Wireless Earbuds Pro",
        price_cents: 24999,
        description: "Premium wireless earbuds with ANC",
        category_id: "cat-4",
        brand_id: "brand-1",
        images: &["/products/earbuds-2.jpg", "/products/earbuds-2-2.jpg"],
        stock: 95,
        rating: 4.8,
        review_count: 401,
        tags: &["Premium", "ANC", "Wireless"],
        specifications: &[
            ("Type", "In-ear"),
            ("Battery", "6 hours (24 with case)"),
            ("Features", "ANC, Transparency"),
            ("Connectivity", "Bluetooth 5.3"),
        ],
    },
    ProductSeed {
        id: "26",
        name: "SoundWave Gaming Headset",
        price_cents: 14999,
        description: "Immersive gaming headset with mic",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/headset-1.jpg"],
        stock: 75,
        rating: 4.6,
        review_count: 178,
        tags: &["Gaming", "RGB", "Microphone"],
        specifications: &[
            ("Type", "Over-ear"),
            ("Connectivity", "USB/3.5mm"),
            ("Features", "7.1 Surround, RGB"),
            ("Microphone", "Detachable"),
        ],
    },
    ProductSeed {
        id: "27",
        name: "TechPro Soundbar",
        price_cents: 44999,
        description: "Premium soundbar with subwoofer",
        category_id: "cat-4",
        brand_id: "brand-1",
        images: &["/products/soundbar-1.jpg"],
        stock: 40,
        rating: 4.7,
        review_count: 156,
        tags: &["Soundbar", "Home Theater", "Wireless"],
        specifications: &[
            ("Type", "3.1 Channel"),
            ("Power", "300W"),
            ("Connectivity", "HDMI ARC, Bluetooth"),
            ("Features", "Dolby Atmos"),
        ],
    },
    ProductSeed {
        id: "28",
        name: "SoundWave Budget Earbuds",
        price_cents: 5999,
        description: "Affordable wireless earbuds",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/earbuds-3.jpg"],
        stock: 200,
        rating: 4.3,
        review_count: 312,
        tags: &["Budget", "Wireless", "Compact"],
        specifications: &[
            ("Type", "In-ear"),
            ("Battery", "5 hours"),
            ("Connectivity", "Bluetooth 5.0"),
            ("Charging", "USB-C"),
        ],
    },
    ProductSeed {
        id: "29",
        name: "TechPro Studio Headphones",
        price_cents: 59999,
        description: "Professional studio headphones",
        category_id: "cat-4",
        brand_id: "brand-1",
        images: &["/products/headphones-2.jpg"],
        stock: 50,
        rating: 4.9,
        review_count: 124,
        tags: &["Professional", "Studio", "Hi-Res"],
        specifications: &[
            ("Type", "Over-ear"),
            ("Impedance", "250 Ohm"),
            ("Frequency", "5Hz-35kHz"),
            ("Cable", "3m coiled"),
        ],
    },
    ProductSeed {
        id: "30",
        name: "SoundWave Party Speaker",
        price_cents: 39999,
        description: "Large Bluetooth speaker with RGB lights",
        category_id: "cat-4",
        brand_id: "brand-3",
        images: &["/products/speaker-3.jpg"],
        stock: 55,
        rating: 4.5,
        review_count: 201,
        tags: &["Party", "RGB", "Powerful"],
        specifications: &[
            ("Type", "Party Speaker"),
            ("Battery", "18 hours"),
            ("Power", "100W"),
            ("Features", "RGB, Karaoke"),
        ],
    },
    // Fashion - Men's Clothing (8 products)
    ProductSeed {
        id: "31",
        name: "StyleCo Classic T-Shirt",
        price_cents: 2999,
        description: "Premium cotton t-shirt in various colors",
        category_id: "cat-6",
        brand_id: "brand-2",
        images: &["/products/tshirt-1.jpg"],
        stock: 250,
        rating: 4.7,
        review_count: 567,
        tags: &["Casual", "Cotton", "Basic"],
        specifications: &[
            ("Material", "100% Cotton"),
            ("Fit", "Regular"),
            ("Care", "Machine wash"),
            ("Sizes", "S-XXL"),
        ],
    },
    ProductSeed {
        id: "32",
        name: "UrbanStyle Denim Jeans",
        price_cents: 7999,
        description: "Modern fit denim jeans",
        category_id: "cat-6",
        brand_id: "brand-8",
        images: &["/products/jeans-1.jpg", "/products/jeans-1-2.jpg"],
        stock: 180,
        rating: 4.6,
        review_count: 423,
        tags: &["Denim", "Casual", "Durable"],
        specifications: &[
            ("Material", "Denim"),
            ("Fit", "Slim"),
            ("Wash", "Dark blue"),
            ("Sizes", "28-40"),
        ],
    },
    ProductSeed {
        id: "33",
        name: "StyleCo Formal Shirt",
        price_cents: 4999,
        description: "Business formal dress shirt",
        category_id: "cat-6",
        brand_id: "brand-2",
        images: &["/products/shirt-1.jpg"],
        stock: 150,
        rating: 4.5,
        review_count: 234,
        tags: &["Formal", "Business", "Professional"],
        specifications: &[
            ("Material", "Cotton blend"),
            ("Fit", "Slim fit"),
            ("Collar", "Point collar"),
            ("Sizes", "S-XXL"),
        ],
    },
    ProductSeed {
        id: "34",
        name: "UrbanStyle Hoodie",
        price_cents: 5999,
        description: "Comfortable pullover hoodie",
        category_id: "cat-6",
        brand_id: "brand-8",
        images: &["/products/hoodie-1.jpg"],
        stock: 200,
        rating: 4.8,
        review_count: 389,
        tags: &["Casual", "Warm", "Comfortable"],
        specifications: &[
            ("Material", "Cotton/Polyester blend"),
            ("Fit", "Regular"),
            ("Features", "Kangaroo pocket"),
            ("Sizes", "S-XXL"),
        ],
    },
    ProductSeed {
        id: "35",
        name: "StyleCo Chinos",
        price_cents: 6999,
        description: "Versatile chino pants",
        category_id: "cat-6",
        brand_id: "brand-2",
        images: &["/products/chinos-1.jpg"],
        stock: 160,
        rating: 4.6,
        review_count: 298,
        tags: &["Smart Casual", "Versatile"],
        specifications: &[
            ("Material", "Cotton twill"),
            ("Fit", "Tapered"),
            ("Style", "Flat front"),
            ("Sizes", "28-40"),
        ],
    },
    ProductSeed {
        id: "36",
        name: "UrbanStyle Bomber Jacket",
        price_cents: 12999,
        description: "Trendy bomber jacket",
        category_id: "cat-6",
        brand_id: "brand-8",
        images: &["/products/jacket-1.jpg"],
        stock: 90,
        rating: 4.7,
        review_count: 167,
        tags: &["Outerwear", "Trendy", "Warm"],
        specifications: &[
            ("Material", "Polyester"),
            ("Fit", "Regular"),
            ("Features", "Ribbed cuffs"),
            ("Sizes", "S-XXL"),
        ],
    },
    ProductSeed {
        id: "37",
        name: "StyleCo Sneakers",
        price_cents: 8999,
        description: "Comfortable casual sneakers",
        category_id: "cat-6",
        brand_id: "brand-2",
        images: &["/products/sneakers-1.jpg"],
        stock: 140,
        rating: 4.5,
        review_count: 456,
        tags: &["Footwear", "Casual", "Comfortable"],
        specifications: &[
            ("Material", "Canvas/Rubber"),
            ("Sole", "Rubber"),
            ("Closure", "Lace-up"),
            ("Sizes", "7-13"),
        ],
    },
    ProductSeed {
        id: "38",
        name: "UrbanStyle Leather Belt",
        price_cents: 3999,
        description: "Genuine leather belt",
        category_id: "cat-6",
        brand_id: "brand-8",
        images: &["/products/belt-1.jpg"],
        stock: 220,
        rating: 4.6,
        review_count: 178,
        tags: &["Accessory", "Leather", "Classic"],
        specifications: &[
            ("Material", "Genuine leather"),
            ("Width", "1.5 inches"),
            ("Buckle", "Metal"),
            ("Sizes", "30-44"),
        ],
    },
    // Fashion - Women's Clothing (6 products)
    ProductSeed {
        id: "39",
        name: "StyleCo Summer Dress",
        price_cents: 5999,
        description: "Light and breezy summer dress",
        category_id: "cat-7",
        brand_id: "brand-2",
        images: &["/products/dress-1.jpg", "/products/dress-1-2.jpg"],
        stock: 120,
        rating: 4.7,
        review_count: 289,
        tags: &["Summer", "Casual", "Feminine"],
        specifications: &[
            ("Material", "Cotton/Linen"),
            ("Length", "Midi"),
            ("Style", "A-line"),
            ("Sizes", "XS-XL"),
        ],
    },
    ProductSeed {
        id: "40",
        name: "UrbanStyle Yoga Pants",
        price_cents: 4999,
        description: "High-waisted yoga leggings",
        category_id: "cat-7",
        brand_id: "brand-8",
        images: &["/products/yoga-1.jpg"],
        stock: 200,
        rating: 4.8,
        review_count: 512,
        tags: &["Activewear", "Comfortable", "Stretchy"],
        specifications: &[
            ("Material", "Spandex/Polyester"),
            ("Fit", "High-waisted"),
            ("Features", "Moisture-wicking"),
            ("Sizes", "XS-XL"),
        ],
    },
    ProductSeed {
        id: "41",
        name: "StyleCo Blouse",
        price_cents: 4499,
        description: "Elegant office blouse",
        category_id: "cat-7",
        brand_id: "brand-2",
        images: &["/products/blouse-1.jpg"],
        stock: 150,
        rating: 4.6,
        review_count: 198,
        tags: &["Professional", "Elegant", "Office"],
        specifications: &[
            ("Material", "Silk blend"),
            ("Fit", "Regular"),
            ("Collar", "V-neck"),
            ("Sizes", "XS-XL"),
        ],
    },
    ProductSeed {
        id: "42",
        name: "UrbanStyle Cardigan",
        price_cents: 6999,
        description: "Cozy knit cardigan",
        category_id: "cat-7",
        brand_id: "brand-8",
        images: &["/products/cardigan-1.jpg"],
        stock: 130,
        rating: 4.7,
        review_count: 234,
        tags: &["Warm", "Comfortable", "Layering"],
        specifications: &[
            ("Material", "Acrylic/Wool blend"),
            ("Fit", "Relaxed"),
            ("Features", "Button front"),
            ("Sizes", "XS-XL"),
        ],
    },
    ProductSeed {
        id: "43",
        name: "StyleCo High Heels",
        price_cents: 9999,
        description: "Classic elegant high heels",
        category_id: "cat-7",
        brand_id: "brand-2",
        images: &["/products/heels-1.jpg"],
        stock: 80,
        rating: 4.5,
        review_count: 167,
        tags: &["Footwear", "Elegant", "Formal"],
        specifications: &[
            ("Material", "Synthetic leather"),
            ("Heel Height", "3 inches"),
            ("Style", "Closed toe"),
            ("Sizes", "5-11"),
        ],
    },
    ProductSeed {
        id: "44",
        name: "UrbanStyle Handbag",
        price_cents: 11999,
        description: "Stylish everyday handbag",
        category_id: "cat-7",
        brand_id: "brand-8",
        images: &["/products/handbag-1.jpg"],
        stock: 95,
        rating: 4.6,
        review_count: 223,
        tags: &["Accessory", "Fashion", "Practical"],
        specifications: &[
            ("Material", "Vegan leather"),
            ("Dimensions", "12\" x 10\" x 5\""),
            ("Features", "Multiple compartments"),
            ("Closure", "Zipper"),
        ],
    },
    // Home & Garden (3 products)
    ProductSeed {
        id: "45",
        name: "HomeEssentials Vacuum Cleaner",
        price_cents: 29999,
        description: "Powerful cordless vacuum cleaner",
        category_id: "cat-8",
        brand_id: "brand-5",
        images: &["/products/vacuum-1.jpg"],
        stock: 60,
        rating: 4.7,
        review_count: 289,
        tags: &["Appliance", "Cordless", "Powerful"],
        specifications: &[
            ("Type", "Cordless stick"),
            ("Battery", "60 minutes"),
            ("Filter", "HEPA"),
            ("Weight", "2.5 kg"),
        ],
    },
    ProductSeed {
        id: "46",
        name: "HomeEssentials Coffee Maker",
        price_cents: 14999,
        description: "Programmable drip coffee maker",
        category_id: "cat-8",
        brand_id: "brand-5",
        images: &["/products/coffee-1.jpg"],
        stock: 100,
        rating: 4.6,
        review_count: 412,
        tags: &["Kitchen", "Coffee", "Programmable"],
        specifications: &[
            ("Capacity", "12 cups"),
            ("Features", "Auto-brew, Keep warm"),
            ("Filter", "Permanent"),
            ("Power", "900W"),
        ],
    },
    ProductSeed {
        id: "47",
        name: "HomeEssentials Bed Sheets Set",
        price_cents: 7999,
        description: "Luxury Egyptian cotton bed sheets",
        category_id: "cat-8",
        brand_id: "brand-5",
        images: &["/products/sheets-1.jpg"],
        stock: 150,
        rating: 4.8,
        review_count: 567,
        tags: &["Bedding", "Cotton", "Luxury"],
        specifications: &[
            ("Material", "Egyptian cotton"),
            ("Thread Count", "800"),
            ("Set Includes", "Fitted, flat, pillowcases"),
            ("Sizes", "Twin-King"),
        ],
    },
    // Sports & Outdoors (3 products)
    ProductSeed {
        id: "48",
        name: "ActiveGear Running Shoes",
        price_cents: 12999,
        description: "High-performance running shoes",
        category_id: "cat-9",
        brand_id: "brand-4",
        images: &["/products/running-shoes-1.jpg"],
        stock: 110,
        rating: 4.8,
        review_count: 398,
        tags: &["Running", "Athletic", "Breathable"],
        specifications: &[
            ("Type", "Running"),
            ("Cushioning", "Air sole"),
            ("Upper", "Breathable mesh"),
            ("Sizes", "6-14"),
        ],
    },
    ProductSeed {
        id: "49",
        name: "ActiveGear Yoga Mat",
        price_cents: 4999,
        description: "Non-slip eco-friendly yoga mat",
        category_id: "cat-9",
        brand_id: "brand-4",
        images: &["/products/yoga-mat-1.jpg"],
        stock: 180,
        rating: 4.7,
        review_count: 456,
        tags: &["Yoga", "Fitness", "Eco-friendly"],
        specifications: &[
            ("Material", "TPE"),
            ("Thickness", "6mm"),
            ("Dimensions", "72\" x 24\""),
            ("Features", "Non-slip, carrying strap"),
        ],
    },
    ProductSeed {
        id: "50",
        name: "ActiveGear Water Bottle",
        price_cents: 2999,
        description: "Insulated stainless steel water bottle",
        category_id: "cat-9",
        brand_id: "brand-4",
        images: &["/products/bottle-1.jpg"],
        stock: 250,
        rating: 4.6,
        review_count: 678,
        tags: &["Hydration", "Insulated", "Durable"],
        specifications: &[
            ("Capacity", "750ml"),
            ("Material", "Stainless steel"),
            ("Insulation", "Double-wall vacuum"),
            ("Features", "Leak-proof lid"),
        ],
    },
    // Books (2 products)
    ProductSeed {
        id: "51",
        name: "JavaScript: The Complete Guide",
        price_cents: 4999,
        description: "Comprehensive JavaScript programming book",
        category_id: "cat-10",
        brand_id: "brand-6",
        images: &["/products/book-1.jpg"],
        stock: 120,
        rating: 4.9,
        review_count: 234,
        tags: &["Programming", "Education", "JavaScript"],
        specifications: &[
            ("Pages", "856"),
            ("Publisher", "ReadMore Publishing"),
            ("Language", "English"),
            ("Format", "Paperback"),
        ],
    },
    ProductSeed {
        id: "52",
        name: "Design Patterns for Modern Apps",
        price_cents: 5999,
        description: "Essential guide to software design patterns",
        category_id: "cat-10",
        brand_id: "brand-6",
        images: &["/products/book-2.jpg"],
        stock: 90,
        rating: 4.8,
        review_count: 178,
        tags: &["Programming", "Design", "Architecture"],
        specifications: &[
            ("Pages", "512"),
            ("Publisher", "ReadMore Publishing"),
            ("Language", "English"),
            ("Format", "Hardcover"),
        ],
    },
];

/// The fixture reviews. Exactly two belong to product `"1"`.
pub fn test_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "rev-1".into(),
            product_id: "1".into(),
            user_id: "user-1".into(),
            user_name: "John Smith".into(),
            rating: 5,
            title: Some("Amazing phone!".into()),
            comment: Some(
                "Best smartphone I've ever owned. The camera quality is outstanding and battery lasts all day."
                    .into(),
            ),
            created_at: date(2024, 1, 15),
            verified: Some(true),
            helpful: Some(42),
        },
        Review {
            id: "rev-2".into(),
            product_id: "1".into(),
            user_id: "user-2".into(),
            user_name: "Sarah Johnson".into(),
            rating: 4,
            title: Some("Great but expensive".into()),
            comment: Some("Excellent features and performance, but the price is quite high.".into()),
            created_at: date(2024, 1, 20),
            verified: Some(true),
            helpful: Some(28),
        },
        Review {
            id: "rev-3".into(),
            product_id: "12".into(),
            user_id: "user-3".into(),
            user_name: "Mike Chen".into(),
            rating: 5,
            title: Some("Perfect for gaming".into()),
            comment: Some(
                "Runs all my games at max settings smoothly. The cooling system is impressive.".into(),
            ),
            created_at: date(2024, 2, 1),
            verified: Some(true),
            helpful: Some(67),
        },
        Review {
            id: "rev-4".into(),
            product_id: "21".into(),
            user_id: "user-4".into(),
            user_name: "Emma Wilson".into(),
            rating: 5,
            title: Some("Best headphones ever".into()),
            comment: Some("The noise cancellation is incredible. Perfect for long flights.".into()),
            created_at: date(2024, 2, 10),
            verified: Some(true),
            helpful: Some(89),
        },
        Review {
            id: "rev-5".into(),
            product_id: "31".into(),
            user_id: "user-5".into(),
            user_name: "David Brown".into(),
            rating: 4,
            title: Some("Good quality, comfortable".into()),
            comment: Some("Nice fabric and fits well. Would recommend.".into()),
            created_at: date(2024, 2, 15),
            verified: Some(false),
            helpful: Some(12),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_count_and_order() {
        let products = test_products();
        assert_eq!(products.len(), 52);

        let ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        let expected: Vec<String> = (1..=52).map(|n| n.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_category_tree_references_resolve() {
        let categories = test_categories();
        assert_eq!(categories.len(), 10);

        // Every parent_id in the fixture set points at an existing category
        for category in &categories {
            if let Some(parent_id) = &category.parent_id {
                assert!(
                    categories.iter().any(|c| &c.id == parent_id),
                    "dangling parent {} on {}",
                    parent_id,
                    category.id
                );
            }
        }
    }

    #[test]
    fn test_product_foreign_keys_resolve() {
        let categories = test_categories();
        let brands = test_brands();

        for product in test_products() {
            let category_id = product.category_id.expect("fixture products carry a category");
            let brand_id = product.brand_id.expect("fixture products carry a brand");
            assert!(categories.iter().any(|c| c.id == category_id));
            assert!(brands.iter().any(|b| b.id == brand_id));
        }
    }

    #[test]
    fn test_exactly_two_reviews_for_product_1() {
        let reviews = test_reviews();
        assert_eq!(reviews.len(), 5);
        assert_eq!(reviews.iter().filter(|r| r.product_id == "1").count(), 2);
    }
}
