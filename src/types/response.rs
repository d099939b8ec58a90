use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header::{self, ContentType}, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    NoContent,
    /// Raw payload served with its stored content type.
    Bytes { content_type: String, data: Vec<u8> },
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created()
                .json(v),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
            ApiResponse::Bytes { content_type, data } => {
                let content_type = content_type
                    .parse()
                    .map(ContentType)
                    .unwrap_or_else(|_| ContentType::octet_stream());
                HttpResponse::Ok()
                    .insert_header(content_type)
                    .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .body(data)
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
