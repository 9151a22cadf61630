//! Shared-secret admin key extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::config::AccessConfig;
use crate::middleware::error::AppError;

/// Header carrying the shared secret on mutating requests.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Proof that the request carried the configured admin key.
///
/// Take it as the first handler argument so the credential is checked
/// before the body is parsed:
/// ```ignore
/// async fn create(_admin: AdminKey, body: web::Json<CreatePostRequest>) -> impl Responder {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

impl AdminKey {
    fn verify(req: &HttpRequest) -> Result<Self, AppError> {
        let access = req.app_data::<web::Data<AccessConfig>>().ok_or_else(|| {
            AppError::Internal("AccessConfig not found in app data".to_string())
        })?;

        let expected = access.admin_key.as_deref().ok_or_else(|| {
            AppError::Misconfigured("Admin key is not configured on the server.".to_string())
        })?;

        let supplied = req
            .headers()
            .get(ADMIN_KEY_HEADER)
            .ok_or(AppError::Unauthorized)?;

        if supplied.as_bytes() != expected.as_bytes() {
            tracing::warn!(path = %req.path(), "Rejected request with invalid admin key");
            return Err(AppError::Forbidden);
        }

        Ok(AdminKey)
    }
}

impl FromRequest for AdminKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::verify(req))
    }
}
