use crate::db::service::DatabaseService;
use crate::types::post::{Post, RPostCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthUser;
use actix_web::web;
use std::sync::Arc;

/// Mounted as a guarded resource rather than with a route macro so the
/// access gate can wrap it alone.
pub async fn create_post(
    db: web::Data<Arc<DatabaseService>>,
    auth: web::ReqData<AuthUser>,
    data: web::Json<RPostCreate>,
) -> ApiResult<Post> {
    let post = db.create_post(auth.id, data.into_inner()).await?;
    Ok(ApiResponse::Created(post))
}
