use crate::db::service::DatabaseService;
use crate::types::{error::AppError, member::MemberState};
use crate::utils::password;
use actix_web::mime;
use chrono::Utc;
use entity::post_image::{ActiveModel as ImageActive, Entity as PostImage, Model as ImageModel};
use sea_orm::{EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

pub const MAX_IMAGE_BYTES: usize = 16 << 20;

impl DatabaseService {
    /// Only the author may attach images to a post.
    pub async fn attach_image(
        &self,
        post_id: &str,
        user_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<Uuid, AppError> {
        let id = password::parse_id(post_id).ok_or(AppError::PostNotFound)?;
        let post = self.find_post(id).await?.ok_or(AppError::PostNotFound)?;
        if MemberState::resolve(post.author_id, user_id, false) != MemberState::Author {
            return Err(AppError::Forbidden);
        }
        let content_type = image_content_type(content_type)?;
        if data.is_empty() {
            return Err(AppError::Validation("image payload is empty".into()));
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Validation(format!("image exceeds {MAX_IMAGE_BYTES} bytes")));
        }

        let image_id = password::new_id();
        let size = data.len();
        PostImage::insert(ImageActive {
            id: Set(image_id),
            post_id: Set(post.id),
            content_type: Set(content_type),
            data: Set(data),
            created_at: Set(Utc::now()),
        })
        .exec_without_returning(&self.database_connection)
        .await?;

        info!("attached image {} ({} bytes) to post {}", image_id, size, post.id);
        Ok(image_id)
    }

    pub async fn get_image(&self, id: &str) -> Result<ImageModel, AppError> {
        let id = password::parse_id(id).ok_or(AppError::NotFound)?;
        PostImage::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }
}

/// Only raster image types are stored; images are served back on a public route.
fn image_content_type(raw: &str) -> Result<String, AppError> {
    let parsed: mime::Mime = raw
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid content type {raw:?}")))?;
    if parsed.type_() != mime::IMAGE || parsed.subtype() == mime::SVG {
        return Err(AppError::Validation(format!("content type {} is not an accepted image type", parsed.essence_str())));
    }
    Ok(parsed.essence_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_raster_images_are_accepted() {
        assert_eq!(image_content_type("image/png").unwrap(), "image/png");
        assert_eq!(image_content_type("image/webp; q=1").unwrap(), "image/webp");

        for raw in ["text/html", "text/html; charset=utf-8", "image/svg+xml", "application/octet-stream", "", "image"] {
            assert!(matches!(image_content_type(raw), Err(AppError::Validation(_))), "accepted {raw:?}");
        }
    }
}
