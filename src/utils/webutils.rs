use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::{debug, warn};

use crate::types::{error::AppError, token::AuthUser};
use crate::utils::token::TokenSigner;

/// Access gate for every mutating route. A request only gets past this with a
/// valid credential, and leaves with the verified `AuthUser` attached for the
/// handler to pass on explicitly. A missing or unparseable `Authorization`
/// header arrives as `None` and is rejected like any other bad credential.
pub async fn validate_token(req: ServiceRequest, credentials: Option<BearerAuth>) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        warn!("missing bearer credential for {} {}", req.method(), req.path());
        return Err((AppError::Unauthorized.into(), req));
    };
    let Some(signer) = req.app_data::<web::Data<TokenSigner>>().cloned() else {
        return Err((AppError::Internal("token signer not configured".into()).into(), req));
    };

    match signer.verify(credentials.token()) {
        Ok(user_id) => {
            debug!("authenticated user {} for {}", user_id, req.path());
            req.extensions_mut().insert(AuthUser { id: user_id });
            Ok(req)
        }
        Err(err) => {
            warn!("rejected credential for {} {}: {}", req.method(), req.path(), err);
            Err((AppError::Unauthorized.into(), req))
        }
    }
}
