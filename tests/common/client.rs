use actix_web::{web, App};
use codev::{
    db::service::DatabaseService,
    types::{error::AppError, user::{DBUserCreate, User}},
    utils::{password::hash_password, token::TokenSigner},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub signer: TokenSigner,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>, signer: TokenSigner) -> Self {
        TestClient { db, signer }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.signer.clone()))
            .configure(codev::routes::configure_routes)
    }

    /// Registers a user straight through the store and signs a credential for it.
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(User, String), AppError> {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let user = self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email,
            password_hash: hash_password(super::test_data::PASSWORD)?,
        }).await?;

        let access_token = self.signer.issue(user.id)?;

        Ok((user, access_token))
    }

    #[allow(dead_code)]
    pub async fn create_post_for(&self, author: Uuid) -> Uuid {
        self.db.create_post(author, super::test_data::sample_post())
            .await
            .expect("Failed to create post")
            .id
    }
}
