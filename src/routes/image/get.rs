use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/image/{id}")]
async fn get_image(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<()> {
    let image = db.get_image(&path.into_inner()).await?;
    Ok(ApiResponse::Bytes {
        content_type: image.content_type,
        data: image.data,
    })
}
