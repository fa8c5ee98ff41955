use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::AdminUser;
use crate::middleware::require_auth::RequireAuth;
use crate::repos::users;
use crate::services::login::{login as login_service, UserSummary};
use crate::state::app_state::AppState;
use crate::{db::require_db, entities};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
    pub expires_at: i64,
}

/// Exchange a Google ID token for a session token.
async fn login(
    body: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = body.token.as_deref().unwrap_or("").trim();
    if token.is_empty() {
        return Err(AppError::bad_request("Google ID token is required."));
    }

    let outcome = login_service(&app_state, token).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
        expires_at: outcome.expires_at,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: i64,
    google_sub: String,
    email: String,
    name: String,
    is_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<entities::users::Model> for UserDto {
    fn from(user: entities::users::Model) -> Self {
        Self {
            id: user.id,
            google_sub: user.google_sub,
            email: user.email,
            name: user.name,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct UserListResponse {
    users: Vec<UserDto>,
}

/// Full user directory listing, administrators only.
async fn list_users(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let users = users::list_all(db).await?;

    Ok(HttpResponse::Ok().json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// Placeholder: sessions are stateless, there is nothing to tear down.
async fn logout() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
        .json(json!({ "message": "logout users route not defined" })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .wrap(RequireAuth)
            .route(web::get().to(list_users)),
    );
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(web::resource("/logout").route(web::get().to(logout)));
}
