use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Session tokens are valid for 7 days from issuance.
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Mint a HS256 session token for a verified user.
///
/// Returns the encoded token together with the embedded expiry (seconds
/// since epoch). The caller is responsible for only minting tokens for
/// administrators; this function signs whatever it is given.
pub fn mint_session_token(
    uid: i64,
    sub: &str,
    email: &str,
    is_admin: bool,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<(String, i64), AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let exp = iat + SESSION_TTL_SECS;

    let claims = Claims {
        uid,
        sub: sub.to_string(),
        email: email.to_string(),
        is_admin,
        iat,
        exp,
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

    Ok((token, exp))
}

/// Verify a session token and return its claims.
///
/// A bad signature, malformed token, or passed expiry all collapse into the
/// single "Invalid or expired token." error; the caller learns nothing more.
pub fn verify_session_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(kind = ?e.kind(), "session token rejected");
        AppError::UnauthorizedInvalidToken
    })
}
