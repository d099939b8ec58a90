use crate::db::service::DatabaseService;
use crate::types::post::{PageOptions, Post};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list_posts(
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<PageOptions>,
) -> ApiResult<Vec<Post>> {
    let page = query.into_inner().into_page()?;
    Ok(ApiResponse::Ok(db.list_posts(page).await?))
}
