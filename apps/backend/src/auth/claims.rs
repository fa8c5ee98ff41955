//! Session token claims attached to request extensions by the
//! authentication middleware.

use serde::{Deserialize, Serialize};

/// Claims embedded in backend-issued session tokens.
///
/// The administrator flag is trusted as signed at issuance time and is not
/// re-checked against the directory on each request; a revoked privilege
/// therefore survives until the token's natural expiry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Internal user id (users.id)
    pub uid: i64,
    /// External subject identifier (users.google_sub)
    pub sub: String,
    pub email: String,
    pub is_admin: bool,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
