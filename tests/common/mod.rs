#![allow(dead_code)]

use chrono::Duration;
use codev::db::service::DatabaseService;
use codev::utils::token::TokenSigner;
use std::sync::Arc;

pub mod client;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub signer: TokenSigner,
}

impl TestContext {
    /// Fresh in-memory store per test.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            signer: TokenSigner::new(TEST_SECRET, Duration::hours(1)),
        }
    }
}

// Test data helpers
pub mod test_data {
    use codev::types::post::RPostCreate;
    use codev::types::user::RUserRegister;

    pub const PASSWORD: &str = "correct-horse-battery";

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    pub fn sample_post() -> RPostCreate {
        sample_post_titled("Looking for co-devs")
    }

    pub fn sample_post_titled(title: &str) -> RPostCreate {
        RPostCreate {
            title: title.to_string(),
            description: "Building a small collaborative thing.".to_string(),
            team_size: 3,
        }
    }
}
