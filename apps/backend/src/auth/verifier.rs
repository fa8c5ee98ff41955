//! External identity verification.
//!
//! The login flow exchanges a Google ID token for a locally-issued session
//! token. Verification of the Google token lives behind a trait so tests can
//! substitute a scripted verifier instead of calling Google.

use async_trait::async_trait;
use serde::Deserialize;

use crate::AppError;

/// Identity attested by the external provider.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Provider subject identifier (`sub` claim)
    pub sub: String,
    pub email: String,
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Validate an opaque provider token and return the verified identity.
    ///
    /// Any failure (network, malformed token, wrong audience, expiry) maps
    /// to the single upstream-verification error; callers must not attempt a
    /// directory lookup after a failure.
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError>;
}

/// Verifies Google ID tokens against the `tokeninfo` endpoint.
///
/// Google validates the signature and expiry server-side; we additionally
/// check that the token was issued for our OAuth client.
pub struct GoogleVerifier {
    client: reqwest::Client,
    client_id: String,
    endpoint: String,
}

const TOKENINFO_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";

#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    email: String,
    aud: String,
}

impl GoogleVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
            endpoint: TOKENINFO_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "tokeninfo request failed");
                AppError::UnauthorizedUpstream
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Google rejected ID token");
            return Err(AppError::UnauthorizedUpstream);
        }

        let info: TokenInfo = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "malformed tokeninfo response");
            AppError::UnauthorizedUpstream
        })?;

        if info.aud != self.client_id {
            tracing::warn!("ID token audience does not match configured client id");
            return Err(AppError::UnauthorizedUpstream);
        }

        Ok(VerifiedIdentity {
            sub: info.sub,
            email: info.email,
        })
    }
}
