// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::{Category, Review, Startup};

pub const ALL_CATEGORIES_LABEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_CATEGORIES_LABEL {
            return Some(Self::All);
        }
        Category::parse(value).map(Self::Only)
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[0]),
            Self::Only(category) => {
                let index = Category::ALL
                    .iter()
                    .position(|entry| *entry == category)
                    .unwrap_or(0);
                match Category::ALL.get(index + 1) {
                    Some(following) => Self::Only(*following),
                    None => Self::All,
                }
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[Category::ALL.len() - 1]),
            Self::Only(category) => {
                let index = Category::ALL
                    .iter()
                    .position(|entry| *entry == category)
                    .unwrap_or(0);
                match index.checked_sub(1) {
                    Some(preceding) => Self::Only(Category::ALL[preceding]),
                    None => Self::All,
                }
            }
        }
    }
}

/// Selects the subsequence of the catalogue matching the search text and
/// category filter, preserving catalogue order. An entry matches when its
/// category passes the filter and the search text occurs case-insensitively
/// in its name or any of its services; empty search text matches everything.
pub fn filter_startups(
    catalogue: &[Startup],
    search_text: &str,
    category: CategoryFilter,
) -> Vec<Startup> {
    let needle = search_text.to_lowercase();
    catalogue
        .iter()
        .filter(|startup| matches_category(startup, category) && matches_search(startup, &needle))
        .cloned()
        .collect()
}

fn matches_category(startup: &Startup, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => startup.category == category,
    }
}

fn matches_search(startup: &Startup, needle: &str) -> bool {
    startup.name.to_lowercase().contains(needle)
        || startup
            .services
            .iter()
            .any(|service| service.to_lowercase().contains(needle))
}

/// Mean rating over an entry's reviews; 0 with no reviews, in which case the
/// presentation layer suppresses the rating badge entirely.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: i64 = reviews.iter().map(|review| i64::from(review.rating)).sum();
    total as f64 / reviews.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectoryStats {
    pub total_startups: usize,
    pub total_categories: usize,
    pub total_reviews: usize,
    pub average_rating: f64,
}

/// Dashboard statistics over the full catalogue. `total_categories` counts
/// the declared taxonomy, not the categories present in the data. The
/// directory-wide rating is the unweighted mean of per-entry averages, so an
/// entry with one review counts the same as one with fifty; an empty
/// catalogue yields 0 rather than dividing by zero.
pub fn directory_stats(catalogue: &[Startup]) -> DirectoryStats {
    let total_reviews = catalogue
        .iter()
        .map(|startup| startup.reviews.len())
        .sum::<usize>();

    let average = if catalogue.is_empty() {
        0.0
    } else {
        let summed: f64 = catalogue
            .iter()
            .map(|startup| average_rating(&startup.reviews))
            .sum();
        summed / catalogue.len() as f64
    };

    DirectoryStats {
        total_startups: catalogue.len(),
        total_categories: Category::ALL.len(),
        total_reviews,
        average_rating: average,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CategoryFilter, average_rating, directory_stats, filter_startups,
    };
    use crate::{Category, ContactInfo, Review, ReviewId, Startup, StartupId};

    fn startup(id: i64, name: &str, category: Category, services: &[&str]) -> Startup {
        Startup {
            id: StartupId::new(id),
            name: name.to_owned(),
            category,
            description: String::new(),
            services: services.iter().map(|s| (*s).to_owned()).collect(),
            hours: "8am - 6pm".to_owned(),
            contact: ContactInfo {
                email: "hello@example.com".to_owned(),
                phone: "+232 78 123 456".to_owned(),
                website: String::new(),
                address: "Siaka Stevens St, Freetown".to_owned(),
            },
            logo: String::new(),
            is_open: true,
            reviews: Vec::new(),
        }
    }

    fn review(id: i64, rating: i32) -> Review {
        Review {
            id: ReviewId::new(id),
            author: "Amy".to_owned(),
            comment: "Great".to_owned(),
            rating,
            date: "2026-08-06".to_owned(),
        }
    }

    #[test]
    fn category_filter_round_trips_and_cycles_through_all() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Fintech"),
            Some(CategoryFilter::Only(Category::Fintech))
        );
        assert_eq!(CategoryFilter::parse("fintech"), None);

        let mut filter = CategoryFilter::All;
        for _ in 0..=Category::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);

        assert_eq!(
            CategoryFilter::All.prev(),
            CategoryFilter::Only(Category::Tourism)
        );
        assert_eq!(
            CategoryFilter::Only(Category::Fintech).prev(),
            CategoryFilter::All
        );
    }

    #[test]
    fn empty_search_with_all_returns_catalogue_unchanged() {
        let catalogue = vec![
            startup(1, "FinPay", Category::Fintech, &["Mobile money"]),
            startup(2, "AgriLink", Category::Agriculture, &["Farm logistics"]),
        ];
        let filtered = filter_startups(&catalogue, "", CategoryFilter::All);
        assert_eq!(filtered, catalogue);
    }

    #[test]
    fn search_matches_name_or_service_case_insensitively() {
        let catalogue = vec![
            startup(1, "FinPay", Category::Fintech, &["Mobile money"]),
            startup(2, "BuildRight", Category::Tech, &["Fintech consulting"]),
            startup(3, "MediCare", Category::Health, &["Telemedicine"]),
        ];

        let filtered = filter_startups(&catalogue, "fin", CategoryFilter::All);
        let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FinPay", "BuildRight"]);
    }

    #[test]
    fn category_and_search_predicates_both_apply() {
        let catalogue = vec![
            startup(1, "FinPay", Category::Fintech, &["Mobile money"]),
            startup(2, "BuildRight", Category::Tech, &["Fintech consulting"]),
        ];

        let filtered = filter_startups(
            &catalogue,
            "fin",
            CategoryFilter::Only(Category::Tech),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "BuildRight");
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let catalogue = vec![
            startup(3, "Cab Connect", Category::Transport, &["Ride hailing"]),
            startup(1, "FinPay", Category::Fintech, &["Mobile money"]),
            startup(2, "PayLink", Category::Fintech, &["Payments"]),
        ];

        let first = filter_startups(&catalogue, "pay", CategoryFilter::All);
        let second = filter_startups(&catalogue, "pay", CategoryFilter::All);
        assert_eq!(first, second);

        let names: Vec<&str> = first.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FinPay", "PayLink"]);
    }

    #[test]
    fn no_match_yields_empty_output() {
        let catalogue = vec![startup(1, "FinPay", Category::Fintech, &["Mobile money"])];
        assert!(filter_startups(&catalogue, "zzz", CategoryFilter::All).is_empty());
        assert!(
            filter_startups(&catalogue, "", CategoryFilter::Only(Category::Tourism)).is_empty()
        );
    }

    #[test]
    fn average_rating_is_zero_without_reviews() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_rating_of_five_three_four_is_exactly_four() {
        let reviews = vec![review(1, 5), review(2, 3), review(3, 4)];
        assert_eq!(average_rating(&reviews), 4.0);
    }

    #[test]
    fn stats_on_empty_catalogue_fall_back_to_zero() {
        let stats = directory_stats(&[]);
        assert_eq!(stats.total_startups, 0);
        assert_eq!(stats.total_categories, Category::ALL.len());
        assert_eq!(stats.total_reviews, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn directory_average_weighs_entries_equally() {
        let mut highly_reviewed = startup(1, "FinPay", Category::Fintech, &[]);
        highly_reviewed.reviews = vec![review(1, 5), review(2, 5), review(3, 5), review(4, 5)];
        let mut single_review = startup(2, "AgriLink", Category::Agriculture, &[]);
        single_review.reviews = vec![review(5, 1)];

        let stats = directory_stats(&[highly_reviewed, single_review]);
        assert_eq!(stats.total_reviews, 5);
        // Average of per-entry averages (5.0 and 1.0), not of all five ratings.
        assert_eq!(stats.average_rating, 3.0);
    }

    #[test]
    fn unreviewed_entries_drag_the_directory_average_down() {
        let mut reviewed = startup(1, "FinPay", Category::Fintech, &[]);
        reviewed.reviews = vec![review(1, 4)];
        let unreviewed = startup(2, "AgriLink", Category::Agriculture, &[]);

        let stats = directory_stats(&[reviewed, unreviewed]);
        assert_eq!(stats.average_rating, 2.0);
    }
}
