// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use freetown_app::Category;

const NAME_PREFIXES: [&str; 12] = [
    "Salone", "Krio", "Lion", "Kola", "Palm", "Cotton", "Atlantic", "Baobab", "Harbour",
    "Savanna", "Mango", "Lumley",
];

const FINTECH_STEMS: [&str; 3] = ["Pay", "Wallet", "Cash"];
const HEALTH_STEMS: [&str; 3] = ["Care", "Health", "Clinic"];
const EDUCATION_STEMS: [&str; 3] = ["Learn", "Academy", "Tutors"];
const TRANSPORT_STEMS: [&str; 3] = ["Rides", "Express", "Wheels"];
const ECOMMERCE_STEMS: [&str; 3] = ["Market", "Shop", "Traders"];
const TECH_STEMS: [&str; 3] = ["Labs", "Systems", "Digital"];
const AGRICULTURE_STEMS: [&str; 3] = ["Farms", "Harvest", "Agro"];
const TOURISM_STEMS: [&str; 3] = ["Tours", "Travel", "Escapes"];

const FINTECH_SERVICES: [&str; 5] = [
    "Mobile money transfers",
    "Merchant payments",
    "Micro-savings",
    "Bill payments",
    "Agent banking",
];
const HEALTH_SERVICES: [&str; 4] = [
    "Telemedicine consultations",
    "Pharmacy delivery",
    "Health records",
    "Ambulance dispatch",
];
const EDUCATION_SERVICES: [&str; 4] = [
    "Exam prep courses",
    "Digital literacy training",
    "Tutoring",
    "School management tools",
];
const TRANSPORT_SERVICES: [&str; 4] = [
    "Ride hailing",
    "Parcel delivery",
    "Fleet tracking",
    "Airport shuttles",
];
const ECOMMERCE_SERVICES: [&str; 4] = [
    "Grocery delivery",
    "Marketplace storefronts",
    "Cash on delivery",
    "Order tracking",
];
const TECH_SERVICES: [&str; 5] = [
    "Software development",
    "IT consulting",
    "Fintech consulting",
    "Cloud hosting",
    "Device repair",
];
const AGRICULTURE_SERVICES: [&str; 4] = [
    "Farm logistics",
    "Crop advisory",
    "Cold storage",
    "Market pricing data",
];
const TOURISM_SERVICES: [&str; 4] = [
    "Beach excursions",
    "City tours",
    "Hotel bookings",
    "Event planning",
];

const REVIEWER_FIRST_NAMES: [&str; 12] = [
    "Fatmata", "Mohamed", "Isata", "Abdul", "Mariama", "Sahr", "Adama", "Ibrahim", "Kadiatu",
    "Foday", "Aminata", "Sorie",
];
const REVIEWER_LAST_NAMES: [&str; 8] = [
    "Kamara", "Sesay", "Koroma", "Bangura", "Conteh", "Turay", "Jalloh", "Mansaray",
];

const REVIEW_COMMENTS: [&str; 8] = [
    "Quick and reliable service",
    "Friendly staff and fair prices",
    "Took longer than promised",
    "Exactly what my business needed",
    "Great support over the phone",
    "Would recommend to anyone",
    "Still waiting on a callback",
    "Smooth experience from start to finish",
];

const HOURS: [&str; 5] = ["8am - 6pm", "9am - 5pm", "24 hours", "7am - 7pm", "10am - 8pm"];

const STREETS: [&str; 10] = [
    "Siaka Stevens St",
    "Wilkinson Rd",
    "Circular Rd",
    "Pademba Rd",
    "Sani Abacha St",
    "Kissy Rd",
    "Aberdeen Rd",
    "Spur Rd",
    "Wallace Johnson St",
    "Howe St",
];

const DESCRIPTION_OPENERS: [&str; 4] = [
    "Serving customers across Freetown with",
    "A growing team focused on",
    "Founded to bring Sierra Leone",
    "Local specialists in",
];
const DESCRIPTION_CLOSERS: [&str; 4] = [
    "with support in Krio and English.",
    "trusted by hundreds of customers.",
    "built for low-bandwidth connections.",
    "operating since 2021.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupSeed {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub services: Vec<String>,
    pub hours: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSeed {
    pub author: String,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Deterministic generator of plausible directory entries for tests. Same
/// seed, same sequence.
#[derive(Debug, Clone)]
pub struct DirectoryFaker {
    rng: DeterministicRng,
}

impl DirectoryFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(if seed == 0 { 1 } else { seed }),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn startup_seed(&mut self) -> StartupSeed {
        let category = Category::ALL[self.rng.int_n(Category::ALL.len())];
        self.startup_seed_for_category(category)
    }

    pub fn startup_seed_for_category(&mut self, category: Category) -> StartupSeed {
        let prefix = self.pick(&NAME_PREFIXES);
        let stem = self.pick(name_stems(category));
        let name = format!("{prefix} {stem}");

        let pool = service_pool(category);
        let count = 1 + self.rng.int_n(pool.len().min(3));
        let mut services = Vec::with_capacity(count);
        let offset = self.rng.int_n(pool.len());
        for index in 0..count {
            services.push(pool[(offset + index) % pool.len()].to_owned());
        }

        let slug = name.to_lowercase().replace(' ', "");
        let website = if self.rng.bool() {
            format!("https://{slug}.sl")
        } else {
            String::new()
        };

        StartupSeed {
            email: format!("hello@{slug}.sl"),
            phone: format!(
                "+232 {:02} {:03} {:03}",
                76 + self.rng.int_n(4),
                100 + self.rng.int_n(900),
                100 + self.rng.int_n(900),
            ),
            website,
            address: format!("{} {}, Freetown", 1 + self.rng.int_n(80), self.pick(&STREETS)),
            hours: self.pick(&HOURS).to_owned(),
            description: format!(
                "{} {} {}",
                self.pick(&DESCRIPTION_OPENERS),
                services[0].to_lowercase(),
                self.pick(&DESCRIPTION_CLOSERS),
            ),
            name,
            category,
            services,
        }
    }

    pub fn review_seed(&mut self) -> ReviewSeed {
        let first = self.pick(&REVIEWER_FIRST_NAMES);
        let last = self.pick(&REVIEWER_LAST_NAMES);
        ReviewSeed {
            author: format!("{first} {last}"),
            comment: self.pick(&REVIEW_COMMENTS).to_owned(),
            rating: 1 + self.rng.int_n(5) as i32,
        }
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.int_n(pool.len())]
    }
}

const fn name_stems(category: Category) -> &'static [&'static str] {
    match category {
        Category::Fintech => &FINTECH_STEMS,
        Category::Health => &HEALTH_STEMS,
        Category::Education => &EDUCATION_STEMS,
        Category::Transport => &TRANSPORT_STEMS,
        Category::Ecommerce => &ECOMMERCE_STEMS,
        Category::Tech => &TECH_STEMS,
        Category::Agriculture => &AGRICULTURE_STEMS,
        Category::Tourism => &TOURISM_STEMS,
    }
}

const fn service_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Fintech => &FINTECH_SERVICES,
        Category::Health => &HEALTH_SERVICES,
        Category::Education => &EDUCATION_SERVICES,
        Category::Transport => &TRANSPORT_SERVICES,
        Category::Ecommerce => &ECOMMERCE_SERVICES,
        Category::Tech => &TECH_SERVICES,
        Category::Agriculture => &AGRICULTURE_SERVICES,
        Category::Tourism => &TOURISM_SERVICES,
    }
}
