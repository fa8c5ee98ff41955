use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Administrator gate (stage 2 of the access gate).
///
/// Requires claims attached by `RequireAuth` with the administrator flag
/// set. The flag is trusted as signed at issuance; there is no directory
/// re-check here. Absent claims or a false flag both yield 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        ready(match claims {
            Some(claims) if claims.is_admin => Ok(AdminUser(claims)),
            _ => Err(AppError::Forbidden),
        })
    }
}
