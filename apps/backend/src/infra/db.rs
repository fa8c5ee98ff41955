use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the directory database with a bounded pool.
///
/// Callers queue on an exhausted pool; a connection that cannot be acquired
/// within the timeout fails the request instead of hanging.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile)?;

    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .map_err(|e| AppError::db("Failed to connect to the database.", e))?;
    Ok(conn)
}
