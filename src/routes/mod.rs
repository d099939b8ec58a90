use crate::db::image::MAX_IMAGE_BYTES;
use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod image;
pub mod member;
pub mod post;
pub mod user;

/// Reads (`list`, `get`, images) are public. Everything that mutates or
/// reveals a user goes through the bearer gate.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::with_fn(validate_token);

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api")
            .service(user::register::register)
            .service(user::login::login)
            .service(
                web::scope("/users")
                    .service(user::get::get_user)
                    .wrap(user_auth.clone())
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::scope("/{id}/members")
                            .service(member::add::add_member)
                            .service(member::remove::remove_member)
                            .wrap(user_auth.clone())
                    )
                    .service(
                        web::scope("/{id}/image")
                            .app_data(web::PayloadConfig::new(MAX_IMAGE_BYTES))
                            .service(post::image::attach_image)
                            .wrap(user_auth.clone())
                    )
                    .service(
                        web::resource("")
                            .guard(guard::Post())
                            .route(web::post().to(post::create::create_post))
                            .wrap(user_auth)
                    )
                    .service(post::list::list_posts)
                    .service(post::get::get_post)
            )
            .service(image::get::get_image)
    );
}
