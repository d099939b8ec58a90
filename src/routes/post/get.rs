use crate::db::service::DatabaseService;
use crate::types::post::Post;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
async fn get_post(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<Post> {
    Ok(ApiResponse::Ok(db.get_post(&path.into_inner()).await?))
}
