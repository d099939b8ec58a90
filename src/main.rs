use actix_web::{middleware::Logger, web, App, HttpServer};
use codev::config::EnvConfig;
use codev::db::service::DatabaseService;
use codev::routes::configure_routes;
use codev::utils::token::TokenSigner;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = match DatabaseService::new(&config.db_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    let signer = web::Data::new(TokenSigner::new(&config.auth.secret, config.auth.token_ttl));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(signer.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
