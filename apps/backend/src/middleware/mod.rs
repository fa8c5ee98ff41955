pub mod cors;
pub mod request_log;
pub mod require_auth;
