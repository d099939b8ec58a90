use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, User};
use crate::types::validate::Validate;
use crate::utils::password::hash_password;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("/register")]
async fn register(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<User> {
    body.validate()?;
    let body = body.into_inner();

    let password_hash = hash_password(&body.password)?;
    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
        })
        .await?;

    info!("registered user {}", user.id);
    Ok(ApiResponse::Created(user))
}
