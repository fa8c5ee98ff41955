use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware with an explicit configuration:
/// - Origins come from CORS_ALLOWED_ORIGINS (comma-separated)
/// - Only the methods the API actually serves
/// - Falls back to localhost-only when nothing valid is configured
pub fn cors_middleware() -> Cors {
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let allowed_origins: Vec<String> = allowed_raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    let effective_origins: Vec<String> = if allowed_origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        allowed_origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
