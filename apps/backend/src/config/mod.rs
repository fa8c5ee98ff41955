pub mod db;

use std::env;

/// Deployment runtime environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Dev,
    Test,
    Prod,
}

impl RuntimeEnv {
    pub fn from_env() -> Self {
        match env::var("APP_ENV").unwrap_or_default().to_lowercase().as_str() {
            "prod" | "production" => RuntimeEnv::Prod,
            "test" => RuntimeEnv::Test,
            _ => RuntimeEnv::Dev,
        }
    }
}

/// Fixed identity substituted when a client logs in with the LOCAL_TEST
/// sentinel token instead of a real Google ID token.
#[derive(Debug, Clone)]
pub struct LocalTestIdentity {
    pub google_sub: String,
    pub email: String,
}

/// Read the local-test identity from `LOCAL_TEST_SUB` / `LOCAL_TEST_EMAIL`.
///
/// Refuses to produce an identity in the production environment, so the
/// sentinel bypass is structurally unreachable there regardless of what the
/// environment carries.
pub fn local_test_identity(runtime: RuntimeEnv) -> Option<LocalTestIdentity> {
    if runtime == RuntimeEnv::Prod {
        return None;
    }

    match (env::var("LOCAL_TEST_SUB"), env::var("LOCAL_TEST_EMAIL")) {
        (Ok(google_sub), Ok(email)) if !google_sub.is_empty() && !email.is_empty() => {
            Some(LocalTestIdentity { google_sub, email })
        }
        _ => None,
    }
}
