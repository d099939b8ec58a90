use crate::db::service::DatabaseService;
use crate::types::post::ImageCreateRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthUser;
use actix_web::{http::header, post, web, HttpRequest};
use std::sync::Arc;

#[post("")]
async fn attach_image(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    auth: web::ReqData<AuthUser>,
    body: web::Bytes,
) -> ApiResult<ImageCreateRes> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    let id = db
        .attach_image(&path.into_inner(), auth.id, content_type, body.to_vec())
        .await?;
    Ok(ApiResponse::Created(ImageCreateRes { id }))
}
