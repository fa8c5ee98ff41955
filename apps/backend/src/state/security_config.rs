use jsonwebtoken::Algorithm;

/// Configuration for session token signing and verification
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying session tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Tokens are pinned to HS256; the secret comes from `JWT_SECRET` in
    /// production and from the test fixtures elsewhere.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}
