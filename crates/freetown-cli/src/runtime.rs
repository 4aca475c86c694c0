// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use freetown_app::{FormPayload, Startup};
use freetown_db::{NewReview, NewStartup, Store};

pub struct DirectoryRuntime<'a> {
    store: &'a Store,
}

impl<'a> DirectoryRuntime<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }
}

impl freetown_tui::AppRuntime for DirectoryRuntime<'_> {
    fn load_directory(&mut self) -> Result<Vec<Startup>> {
        self.store.list_startups()
    }

    fn submit_form(&mut self, payload: &FormPayload) -> Result<()> {
        payload.validate()?;

        match payload {
            FormPayload::Startup(form) => {
                let Some(category) = form.category else {
                    bail!("category is required -- choose a category and retry");
                };
                self.store.create_startup(&NewStartup {
                    name: form.name.trim().to_owned(),
                    category,
                    description: form.description.trim().to_owned(),
                    services: form.normalized_services(),
                    hours: form.hours.trim().to_owned(),
                    email: form.email.trim().to_owned(),
                    phone: form.phone.trim().to_owned(),
                    website: form.website.trim().to_owned(),
                    address: form.address.trim().to_owned(),
                    logo: form.logo.trim().to_owned(),
                })?;
            }
            FormPayload::Review(form) => {
                self.store.append_review(
                    form.startup_id,
                    &NewReview {
                        author: form.author.trim().to_owned(),
                        comment: form.comment.trim().to_owned(),
                        rating: form.rating,
                    },
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DirectoryRuntime;
    use anyhow::Result;
    use freetown_app::{
        Category, DEFAULT_LOGO_URL, FormPayload, ReviewFormInput, StartupFormInput, StartupId,
    };
    use freetown_db::Store;
    use freetown_tui::AppRuntime;

    fn startup_input(name: &str) -> StartupFormInput {
        StartupFormInput {
            name: name.to_owned(),
            category: Some(Category::Fintech),
            description: "Mobile payments".to_owned(),
            services: vec!["Payments".to_owned(), String::new(), "Payments".to_owned()],
            hours: "8am - 6pm".to_owned(),
            email: "hello@example.sl".to_owned(),
            phone: "+232 78 123 456".to_owned(),
            website: String::new(),
            address: "Freetown".to_owned(),
            logo: String::new(),
        }
    }

    #[test]
    fn submitting_a_startup_creates_a_normalized_row() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = DirectoryRuntime::new(&store);
        runtime.submit_form(&FormPayload::Startup(startup_input("  FinPay  ")))?;

        let catalogue = store.list_startups()?;
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue[0].name, "FinPay");
        assert_eq!(catalogue[0].services, vec!["Payments"]);
        assert_eq!(catalogue[0].logo, DEFAULT_LOGO_URL);
        assert!(catalogue[0].is_open);
        assert!(catalogue[0].reviews.is_empty());
        Ok(())
    }

    #[test]
    fn invalid_startup_payload_never_reaches_the_store() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut input = startup_input("FinPay");
        input.category = None;
        let mut runtime = DirectoryRuntime::new(&store);
        assert!(runtime.submit_form(&FormPayload::Startup(input)).is_err());
        assert_eq!(store.startup_count()?, 0);
        Ok(())
    }

    #[test]
    fn submitting_a_review_appends_to_the_target_startup() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = DirectoryRuntime::new(&store);
        runtime.submit_form(&FormPayload::Startup(startup_input("FinPay")))?;

        runtime.submit_form(&FormPayload::Review(ReviewFormInput {
            startup_id: StartupId::new(1),
            author: " Amy ".to_owned(),
            comment: "Great".to_owned(),
            rating: 5,
        }))?;

        let startup = store.get_startup(StartupId::new(1))?;
        assert_eq!(startup.reviews.len(), 1);
        assert_eq!(startup.reviews[0].author, "Amy");
        assert_eq!(startup.reviews[0].rating, 5);
        Ok(())
    }

    #[test]
    fn review_for_missing_startup_surfaces_store_error() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = DirectoryRuntime::new(&store);
        let error = runtime
            .submit_form(&FormPayload::Review(ReviewFormInput {
                startup_id: StartupId::new(42),
                author: "Amy".to_owned(),
                comment: "Great".to_owned(),
                rating: 5,
            }))
            .expect_err("missing startup should fail");
        assert!(error.to_string().contains("startup 42 not found"));
        Ok(())
    }
}
