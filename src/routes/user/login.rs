use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserLoginRes};
use crate::types::validate::Validate;
use crate::utils::token::TokenSigner;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::warn;

#[post("/login")]
async fn login(
    db: web::Data<Arc<DatabaseService>>,
    signer: web::Data<TokenSigner>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    body.validate().map_err(|_| AppError::InvalidCredential)?;

    let user = match db.authenticate(&body.email, &body.password).await {
        Ok(user) => user,
        Err(AppError::InvalidCredential) => {
            warn!("failed login attempt");
            return Err(AppError::InvalidCredential);
        }
        Err(e) => return Err(e),
    };

    Ok(ApiResponse::Ok(UserLoginRes {
        token: signer.issue(user.id)?,
    }))
}
