//! Authentication middleware (stage 1 of the access gate).
//!
//! Extracts the bearer token from the Authorization header, verifies it, and
//! stores the decoded claims in request extensions for downstream extractors.
//! Routes wrapped with this middleware reject unauthenticated requests with
//! 401 before the handler runs.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_session_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware { service }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();

        let token = match bearer_token(auth_header.as_ref()) {
            Ok(token) => token,
            Err(e) => return Box::pin(async move { Err(e.into()) }),
        };

        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available").into())
                });
            }
        };

        match verify_session_token(&token, &app_state.security) {
            Ok(claims) => {
                // Attach claims BEFORE calling the service so extractors can
                // read them for the rest of this request.
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(e) => Box::pin(async move { Err(e.into()) }),
        }
    }
}

/// Parse `Authorization: Bearer <token>`.
///
/// An absent header, a non-Bearer scheme, and an empty token all report the
/// same "Access token missing." failure.
fn bearer_token(header_value: Option<&header::HeaderValue>) -> Result<String, AppError> {
    let value = header_value.ok_or(AppError::UnauthorizedMissingToken)?;
    let value = value
        .to_str()
        .map_err(|_| AppError::UnauthorizedMissingToken)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::UnauthorizedMissingToken),
    }
}
