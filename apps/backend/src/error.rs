use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON body for every failed request: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access token missing.")]
    UnauthorizedMissingToken,
    #[error("Invalid or expired token.")]
    UnauthorizedInvalidToken,
    #[error("Invalid or expired Google token.")]
    UnauthorizedUpstream,
    #[error("You are not authorized to perform this operation")]
    Forbidden,
    #[error("Access denied. Only administrators can log in.")]
    ForbiddenNotAdmin,
    #[error("{detail}")]
    BadRequest { detail: String },
    #[error("{detail}")]
    NotFound { detail: String },
    #[error("{detail}")]
    Conflict { detail: String },
    // `detail` is the caller-facing message; the underlying cause is logged
    // at construction and never leaves the process.
    #[error("{detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal server error.")]
    Internal { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedMissingToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedUpstream => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::ForbiddenNotAdmin => StatusCode::FORBIDDEN,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict {
            detail: detail.into(),
        }
    }

    /// Wrap a database error. `detail` is what the caller sees; the
    /// underlying error is logged here and not echoed to the response.
    pub fn db(detail: impl Into<String>, err: sea_orm::DbErr) -> Self {
        let detail = detail.into();
        tracing::error!(error = %err, "database error: {detail}");
        Self::Db { detail }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!("internal error: {detail}");
        Self::Internal { detail }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db("Internal server error.", e)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
