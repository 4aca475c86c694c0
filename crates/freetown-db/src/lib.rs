// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use freetown_app::{
    Category, ContactInfo, DEFAULT_LOGO_URL, Review, ReviewId, Startup, StartupId,
};
use rusqlite::{Connection, params};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub const APP_NAME: &str = "freetown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStartup {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub services: Vec<String>,
    pub hours: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    // Empty means "use the directory's placeholder logo".
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub author: String,
    pub comment: String,
    pub rating: i32,
}

/// Session catalogue of startup records. Always backed by an in-memory
/// SQLite database: the catalogue lives for the process and is discarded on
/// exit, so there is no file path, no migration story, and no cross-session
/// state. Ids are SQLite rowids, monotonic regardless of catalogue size.
pub struct Store {
    conn: Connection,
    default_logo_url: String,
}

impl Store {
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self {
            conn,
            default_logo_url: DEFAULT_LOGO_URL.to_owned(),
        })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        self.conn
            .execute_batch(include_str!("sql/schema.sql"))
            .context("create schema")
    }

    pub fn set_default_logo_url(&mut self, value: &str) -> Result<()> {
        let trimmed = value.trim();
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            bail!("default logo must be an http(s) URL, got {value:?}");
        }
        self.default_logo_url = trimmed.to_owned();
        Ok(())
    }

    pub fn default_logo_url(&self) -> &str {
        &self.default_logo_url
    }

    /// Appends a startup to the catalogue. Service entries are trimmed with
    /// blanks and duplicates dropped; a missing logo falls back to the
    /// placeholder; new entries always start open with no reviews.
    pub fn create_startup(&self, startup: &NewStartup) -> Result<StartupId> {
        let now = now_rfc3339()?;
        let logo = if startup.logo.trim().is_empty() {
            self.default_logo_url.clone()
        } else {
            startup.logo.trim().to_owned()
        };

        let tx = self
            .conn
            .unchecked_transaction()
            .context("begin startup insert")?;
        tx.execute(
            "
            INSERT INTO startups (
              name, category, description, hours,
              email, phone, website, address,
              logo, is_open, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)
            ",
            params![
                startup.name,
                startup.category.as_str(),
                startup.description,
                startup.hours,
                startup.email,
                startup.phone,
                startup.website,
                startup.address,
                logo,
                now,
            ],
        )
        .context("insert startup")?;
        let startup_id = tx.last_insert_rowid();

        for (position, service) in normalize_services(&startup.services).iter().enumerate() {
            tx.execute(
                "INSERT INTO services (startup_id, position, name) VALUES (?, ?, ?)",
                params![startup_id, position as i64, service],
            )
            .with_context(|| format!("insert service {service:?}"))?;
        }

        tx.commit().context("commit startup insert")?;
        Ok(StartupId::new(startup_id))
    }

    /// Appends one review to an existing startup, deriving the review id and
    /// date. An unknown startup id is an error and leaves the catalogue
    /// unchanged.
    pub fn append_review(&self, startup_id: StartupId, review: &NewReview) -> Result<ReviewId> {
        let exists: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM startups WHERE id = ?",
                params![startup_id.get()],
                |row| row.get(0),
            )
            .context("check review target")?;
        if exists == 0 {
            bail!(
                "startup {} not found -- choose an existing startup and retry",
                startup_id.get()
            );
        }

        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO reviews (
                  startup_id, author, comment, rating, review_date, created_at
                ) VALUES (?, ?, ?, ?, ?, ?)
                ",
                params![
                    startup_id.get(),
                    review.author,
                    review.comment,
                    review.rating,
                    today_date_string()?,
                    now,
                ],
            )
            .context("insert review")?;
        Ok(ReviewId::new(self.conn.last_insert_rowid()))
    }

    pub fn get_startup(&self, startup_id: StartupId) -> Result<Startup> {
        let mut startup = self
            .conn
            .query_row(
                "
                SELECT
                  id, name, category, description, hours,
                  email, phone, website, address, logo, is_open
                FROM startups
                WHERE id = ?
                ",
                params![startup_id.get()],
                map_startup_row,
            )
            .with_context(|| format!("load startup {}", startup_id.get()))?;

        startup.services = self.services_for(startup_id)?;
        startup.reviews = self.reviews_for(startup_id)?;
        Ok(startup)
    }

    /// The full catalogue in insertion order, with services and reviews
    /// attached in their own insertion order.
    pub fn list_startups(&self) -> Result<Vec<Startup>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT
                  id, name, category, description, hours,
                  email, phone, website, address, logo, is_open
                FROM startups
                ORDER BY id ASC
                ",
            )
            .context("prepare startups query")?;
        let rows = stmt
            .query_map([], map_startup_row)
            .context("query startups")?;
        let mut startups = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("collect startups")?;

        let mut services = self.all_services()?;
        let mut reviews = self.all_reviews()?;
        for startup in &mut startups {
            startup.services = services.remove(&startup.id.get()).unwrap_or_default();
            startup.reviews = reviews.remove(&startup.id.get()).unwrap_or_default();
        }
        Ok(startups)
    }

    pub fn startup_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM startups", [], |row| row.get(0))
            .context("count startups")?;
        Ok(count as usize)
    }

    pub fn review_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))
            .context("count reviews")?;
        Ok(count as usize)
    }

    /// Seeds the session with a small fixed catalogue so the directory is
    /// browsable at launch. The production seed dataset is supplied by an
    /// external collaborator; this stands in for it the way a demo mode does.
    pub fn seed_demo_data(&self) -> Result<()> {
        for (startup, reviews) in demo_directory() {
            let startup_id = self.create_startup(&startup)?;
            for review in reviews {
                self.append_review(startup_id, &review)?;
            }
        }
        Ok(())
    }

    fn services_for(&self, startup_id: StartupId) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM services WHERE startup_id = ? ORDER BY position ASC")
            .context("prepare services query")?;
        let rows = stmt
            .query_map(params![startup_id.get()], |row| row.get::<_, String>(0))
            .context("query services")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect services")
    }

    fn reviews_for(&self, startup_id: StartupId) -> Result<Vec<Review>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, author, comment, rating, review_date
                FROM reviews
                WHERE startup_id = ?
                ORDER BY id ASC
                ",
            )
            .context("prepare reviews query")?;
        let rows = stmt
            .query_map(params![startup_id.get()], |row| {
                Ok(Review {
                    id: ReviewId::new(row.get(0)?),
                    author: row.get(1)?,
                    comment: row.get(2)?,
                    rating: row.get(3)?,
                    date: row.get(4)?,
                })
            })
            .context("query reviews")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect reviews")
    }

    fn all_services(&self) -> Result<BTreeMap<i64, Vec<String>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT startup_id, name FROM services ORDER BY startup_id ASC, position ASC")
            .context("prepare services query")?;
        let rows = stmt
            .query_map([], |row| {
                let startup_id: i64 = row.get(0)?;
                let name: String = row.get(1)?;
                Ok((startup_id, name))
            })
            .context("query services")?;

        let mut grouped: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for row in rows {
            let (startup_id, name) = row.context("scan service row")?;
            grouped.entry(startup_id).or_default().push(name);
        }
        Ok(grouped)
    }

    fn all_reviews(&self) -> Result<BTreeMap<i64, Vec<Review>>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT startup_id, id, author, comment, rating, review_date
                FROM reviews
                ORDER BY startup_id ASC, id ASC
                ",
            )
            .context("prepare reviews query")?;
        let rows = stmt
            .query_map([], |row| {
                let startup_id: i64 = row.get(0)?;
                let review = Review {
                    id: ReviewId::new(row.get(1)?),
                    author: row.get(2)?,
                    comment: row.get(3)?,
                    rating: row.get(4)?,
                    date: row.get(5)?,
                };
                Ok((startup_id, review))
            })
            .context("query reviews")?;

        let mut grouped: BTreeMap<i64, Vec<Review>> = BTreeMap::new();
        for row in rows {
            let (startup_id, review) = row.context("scan review row")?;
            grouped.entry(startup_id).or_default().push(review);
        }
        Ok(grouped)
    }
}

fn map_startup_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Startup> {
    let category_raw: String = row.get(2)?;
    let category = Category::parse(&category_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unknown category {category_raw}"),
            )),
        )
    })?;
    let is_open: i64 = row.get(10)?;

    Ok(Startup {
        id: StartupId::new(row.get(0)?),
        name: row.get(1)?,
        category,
        description: row.get(3)?,
        hours: row.get(4)?,
        contact: ContactInfo {
            email: row.get(5)?,
            phone: row.get(6)?,
            website: row.get(7)?,
            address: row.get(8)?,
        },
        logo: row.get(9)?,
        is_open: is_open != 0,
        services: Vec::new(),
        reviews: Vec::new(),
    })
}

fn normalize_services(services: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for service in services {
        let trimmed = service.trim();
        if trimmed.is_empty() || seen.iter().any(|entry| entry == trimmed) {
            continue;
        }
        seen.push(trimmed.to_owned());
    }
    seen
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .context("configure sqlite pragmas")
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

fn today_date_string() -> Result<String> {
    OffsetDateTime::now_utc()
        .date()
        .format(&format_description!("[year]-[month]-[day]"))
        .context("format current date")
}

fn demo_directory() -> Vec<(NewStartup, Vec<NewReview>)> {
    let startup = |name: &str,
                   category: Category,
                   description: &str,
                   services: &[&str],
                   hours: &str,
                   email: &str,
                   phone: &str,
                   website: &str,
                   address: &str| NewStartup {
        name: name.to_owned(),
        category,
        description: description.to_owned(),
        services: services.iter().map(|s| (*s).to_owned()).collect(),
        hours: hours.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        website: website.to_owned(),
        address: address.to_owned(),
        logo: String::new(),
    };
    let review = |author: &str, comment: &str, rating: i32| NewReview {
        author: author.to_owned(),
        comment: comment.to_owned(),
        rating,
    };

    vec![
        (
            startup(
                "SaloPay",
                Category::Fintech,
                "Mobile wallet and merchant payments built for market traders across Freetown, \
                 with agent cash-in points in every major market.",
                &["Mobile money transfers", "Merchant payments", "Micro-savings"],
                "8am - 6pm",
                "hello@salopay.sl",
                "+232 76 101 220",
                "https://salopay.sl",
                "14 Siaka Stevens St, Freetown",
            ),
            vec![
                review("Fatmata K.", "Transfers clear in seconds and the agents are everywhere.", 5),
                review("Mohamed S.", "Good service, though the app needs an offline mode.", 4),
            ],
        ),
        (
            startup(
                "Kombra Health",
                Category::Health,
                "Telemedicine consultations and same-day pharmacy delivery connecting patients \
                 with licensed clinicians.",
                &["Telemedicine consultations", "Pharmacy delivery", "Health records"],
                "24 hours",
                "care@kombrahealth.sl",
                "+232 78 455 901",
                "https://kombrahealth.sl",
                "3 Wilkinson Rd, Freetown",
            ),
            vec![review(
                "Isata B.",
                "Spoke to a doctor within ten minutes on a Sunday night.",
                5,
            )],
        ),
        (
            startup(
                "LearnSalone",
                Category::Education,
                "Exam preparation and digital literacy courses delivered over low-bandwidth \
                 mobile lessons for secondary students.",
                &["WASSCE exam prep", "Digital literacy training", "Teacher dashboards"],
                "9am - 5pm",
                "info@learnsalone.sl",
                "+232 77 310 566",
                "",
                "22 Circular Rd, Freetown",
            ),
            vec![],
        ),
        (
            startup(
                "Okada Express",
                Category::Transport,
                "Motorbike ride hailing and parcel delivery with vetted riders and upfront \
                 fares.",
                &["Ride hailing", "Parcel delivery"],
                "6am - 10pm",
                "dispatch@okadaexpress.sl",
                "+232 79 880 143",
                "https://okadaexpress.sl",
                "Lumley Roundabout, Freetown",
            ),
            vec![
                review("Abdul R.", "Rider arrived in five minutes, fair price.", 4),
                review("Mariama T.", "Parcel tracking kept me informed the whole way.", 5),
                review("Sahr L.", "Busy evenings can mean a longer wait.", 3),
            ],
        ),
        (
            startup(
                "Big Market Online",
                Category::Ecommerce,
                "Online storefronts and grocery delivery for Freetown's market women, with \
                 cash-on-delivery support.",
                &["Grocery delivery", "Marketplace storefronts", "Cash on delivery"],
                "8am - 8pm",
                "support@bigmarket.sl",
                "+232 76 204 787",
                "",
                "Sani Abacha St, Freetown",
            ),
            vec![review("Adama J.", "My stall sells to customers I could never reach before.", 5)],
        ),
        (
            startup(
                "Krio Tech Labs",
                Category::Tech,
                "Software studio building custom systems for local businesses, from payroll to \
                 point of sale, plus fintech consulting.",
                &["Software development", "IT consulting", "Fintech consulting"],
                "9am - 6pm",
                "projects@kriotechlabs.sl",
                "+232 78 612 009",
                "https://kriotechlabs.sl",
                "7 Pademba Rd, Freetown",
            ),
            vec![],
        ),
    ]
}
