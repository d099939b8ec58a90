use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthUser;
use crate::types::user::User;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
async fn get_user(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    _auth: web::ReqData<AuthUser>,
) -> ApiResult<User> {
    let user = db.get_user(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(user))
}
