use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

#[get("")]
async fn health(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Response> {
    db.ping().await?;
    Ok(ApiResponse::Ok(Response { status: "ok".to_string() }))
}
