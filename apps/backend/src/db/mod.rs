use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Centralized helper to access the database connection from AppState.
///
/// Returns a borrowed reference to the DatabaseConnection if available, or a
/// 500-class error when the state was built without a directory.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db
        .as_ref()
        .ok_or_else(|| AppError::internal("Database connection not available"))
}
