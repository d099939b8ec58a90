use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthUser;
use actix_web::{post, web};
use std::sync::Arc;

/// The caller joins the post; there is no way to add somebody else.
#[post("")]
async fn add_member(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    auth: web::ReqData<AuthUser>,
) -> ApiResult<()> {
    db.add_member(&path.into_inner(), auth.id).await?;
    Ok(ApiResponse::NoContent)
}
