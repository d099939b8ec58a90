use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthUser;
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("")]
async fn remove_member(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    auth: web::ReqData<AuthUser>,
) -> ApiResult<()> {
    db.remove_member(&path.into_inner(), auth.id).await?;
    Ok(ApiResponse::NoContent)
}
