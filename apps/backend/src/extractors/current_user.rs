use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// The authenticated caller's identity for the current request.
///
/// Reads the claims stored in request extensions by `RequireAuth`; using
/// this extractor on a route that is not wrapped with the authentication
/// middleware yields 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        ready(
            claims
                .map(CurrentUser)
                .ok_or(AppError::UnauthorizedMissingToken),
        )
    }
}
