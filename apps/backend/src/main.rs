use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::{local_test_identity, RuntimeEnv};
use backend::infra::db::connect_db;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_log::RequestLog;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::GoogleVerifier;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g. set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let google_client_id = match std::env::var("GOOGLE_CLIENT_ID") {
        Ok(id) => id,
        Err(_) => {
            eprintln!("GOOGLE_CLIENT_ID must be set");
            std::process::exit(1);
        }
    };

    let runtime = RuntimeEnv::from_env();
    let profile = match runtime {
        RuntimeEnv::Prod => DbProfile::Prod,
        RuntimeEnv::Test => DbProfile::Test,
        RuntimeEnv::Dev => DbProfile::Dev,
    };

    let db = match connect_db(profile).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to the database: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(env = ?runtime, "database connected");

    let local_test = local_test_identity(runtime);
    if local_test.is_some() {
        tracing::warn!("LOCAL_TEST login sentinel is enabled for this deployment");
    }

    let app_state = AppState::new(
        db,
        security_config,
        Arc::new(GoogleVerifier::new(google_client_id)),
        local_test,
    );

    tracing::info!(%host, %port, "starting wishlist backend");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestLog)
            .wrap(NormalizePath::trim())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
