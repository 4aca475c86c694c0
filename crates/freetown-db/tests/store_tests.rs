// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use freetown_app::{Category, DEFAULT_LOGO_URL, StartupId, directory_stats};
use freetown_db::{NewReview, NewStartup, Store};
use freetown_testkit::DirectoryFaker;
use time::OffsetDateTime;
use time::macros::format_description;

fn new_startup(name: &str, category: Category, services: &[&str]) -> NewStartup {
    NewStartup {
        name: name.to_owned(),
        category,
        description: format!("{name} description"),
        services: services.iter().map(|s| (*s).to_owned()).collect(),
        hours: "8am - 6pm".to_owned(),
        email: format!("hello@{}.sl", name.to_lowercase().replace(' ', "")),
        phone: "+232 78 123 456".to_owned(),
        website: String::new(),
        address: "Freetown".to_owned(),
        logo: String::new(),
    }
}

fn today() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(&format_description!("[year]-[month]-[day]"))
        .expect("format today")
}

#[test]
fn bootstrap_yields_empty_catalogue() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    assert_eq!(store.startup_count()?, 0);
    assert!(store.list_startups()?.is_empty());
    Ok(())
}

#[test]
fn create_assigns_monotonic_ids_and_empty_reviews() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let first = store.create_startup(&new_startup("FinPay", Category::Fintech, &["Payments"]))?;
    let second = store.create_startup(&new_startup("AgriLink", Category::Agriculture, &["Logistics"]))?;
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 2);

    let catalogue = store.list_startups()?;
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue[0].name, "FinPay");
    assert_eq!(catalogue[1].name, "AgriLink");
    assert!(catalogue[0].reviews.is_empty());
    assert!(catalogue[0].is_open);
    Ok(())
}

#[test]
fn missing_logo_falls_back_to_placeholder() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let id = store.create_startup(&new_startup("FinPay", Category::Fintech, &["Payments"]))?;
    assert_eq!(store.get_startup(id)?.logo, DEFAULT_LOGO_URL);

    let mut with_logo = new_startup("AgriLink", Category::Agriculture, &["Logistics"]);
    with_logo.logo = "https://agrilink.sl/logo.png".to_owned();
    let id = store.create_startup(&with_logo)?;
    assert_eq!(store.get_startup(id)?.logo, "https://agrilink.sl/logo.png");
    Ok(())
}

#[test]
fn configured_placeholder_applies_to_later_startups() -> Result<()> {
    let mut store = Store::open_memory()?;
    store.bootstrap()?;
    store.set_default_logo_url("https://cdn.example.org/placeholder.png")?;

    let id = store.create_startup(&new_startup("FinPay", Category::Fintech, &["Payments"]))?;
    assert_eq!(
        store.get_startup(id)?.logo,
        "https://cdn.example.org/placeholder.png"
    );
    Ok(())
}

#[test]
fn blank_and_duplicate_services_are_dropped_on_submission() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let id = store.create_startup(&new_startup(
        "FinPay",
        Category::Fintech,
        &["A", "", "B", "  ", "A"],
    ))?;
    assert_eq!(store.get_startup(id)?.services, vec!["A", "B"]);
    Ok(())
}

#[test]
fn reviews_append_in_order_with_derived_dates() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let id = store.create_startup(&new_startup("FinPay", Category::Fintech, &["Payments"]))?;
    store.append_review(
        id,
        &NewReview {
            author: "Fatmata".to_owned(),
            comment: "Fast transfers".to_owned(),
            rating: 5,
        },
    )?;
    store.append_review(
        id,
        &NewReview {
            author: "Mohamed".to_owned(),
            comment: "Solid but the app is slow".to_owned(),
            rating: 3,
        },
    )?;

    let startup = store.get_startup(id)?;
    assert_eq!(startup.reviews.len(), 2);
    assert_eq!(startup.reviews[0].author, "Fatmata");
    assert_eq!(startup.reviews[1].author, "Mohamed");
    assert!(startup.reviews[0].id < startup.reviews[1].id);
    assert_eq!(startup.reviews[0].date, today());
    Ok(())
}

#[test]
fn review_for_unknown_startup_fails_and_changes_nothing() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.create_startup(&new_startup("FinPay", Category::Fintech, &["Payments"]))?;

    let before = store.list_startups()?;
    let error = store
        .append_review(
            StartupId::new(999),
            &NewReview {
                author: "Amy".to_owned(),
                comment: "Great".to_owned(),
                rating: 5,
            },
        )
        .expect_err("unknown startup should fail");
    assert!(error.to_string().contains("startup 999 not found"));

    assert_eq!(store.list_startups()?, before);
    assert_eq!(store.review_count()?, 0);
    Ok(())
}

#[test]
fn single_review_scenario_updates_aggregates() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let id = store.create_startup(&new_startup("Acme", Category::Tech, &["Consulting"]))?;
    let review_id = store.append_review(
        id,
        &NewReview {
            author: "Amy".to_owned(),
            comment: "Great".to_owned(),
            rating: 5,
        },
    )?;
    assert_eq!(review_id.get(), 1);

    let catalogue = store.list_startups()?;
    assert_eq!(catalogue.len(), 1);
    let review = &catalogue[0].reviews[0];
    assert_eq!(review.author, "Amy");
    assert_eq!(review.comment, "Great");
    assert_eq!(review.rating, 5);
    assert_eq!(review.date, today());

    let stats = directory_stats(&catalogue);
    assert_eq!(stats.total_reviews, 1);
    assert_eq!(stats.average_rating, 5.0);
    Ok(())
}

#[test]
fn demo_seed_populates_a_browsable_catalogue() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.seed_demo_data()?;

    let catalogue = store.list_startups()?;
    assert!(catalogue.len() >= 5);
    assert!(catalogue.iter().any(|s| s.category == Category::Fintech));
    assert!(catalogue.iter().any(|s| !s.reviews.is_empty()));
    assert!(catalogue.iter().any(|s| s.reviews.is_empty()));
    assert!(catalogue.iter().all(|s| !s.services.is_empty()));
    assert!(catalogue.iter().all(|s| s.logo == DEFAULT_LOGO_URL));

    let stats = directory_stats(&catalogue);
    assert_eq!(stats.total_startups, catalogue.len());
    assert!(stats.total_reviews > 0);
    Ok(())
}

#[test]
fn faked_catalogue_preserves_insertion_order() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let mut faker = DirectoryFaker::new(7);
    let mut created = Vec::new();
    for _ in 0..12 {
        let seed = faker.startup_seed();
        let id = store.create_startup(&NewStartup {
            name: seed.name.clone(),
            category: seed.category,
            description: seed.description,
            services: seed.services,
            hours: seed.hours,
            email: seed.email,
            phone: seed.phone,
            website: seed.website,
            address: seed.address,
            logo: String::new(),
        })?;
        created.push((id, seed.name));
    }

    let catalogue = store.list_startups()?;
    assert_eq!(catalogue.len(), created.len());
    for (startup, (id, name)) in catalogue.iter().zip(&created) {
        assert_eq!(startup.id, *id);
        assert_eq!(&startup.name, name);
    }
    Ok(())
}

#[test]
fn get_startup_matches_listed_entry() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.seed_demo_data()?;

    for listed in store.list_startups()? {
        let fetched = store.get_startup(listed.id)?;
        assert_eq!(fetched, listed);
    }
    Ok(())
}
