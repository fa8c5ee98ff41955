//! User directory lookups. Rows are provisioned out of band; this module
//! only reads them.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::users;
use crate::error::AppError;

/// Find a user by verified subject id, falling back to email.
///
/// The subject id is authoritative; the email fallback exists for rows
/// provisioned by email before the user's first login, when no subject was
/// known yet. Checking the subject first removes the ambiguity of a single
/// OR query matching two different rows.
pub async fn find_by_subject_or_email<C: ConnectionTrait>(
    conn: &C,
    google_sub: &str,
    email: &str,
) -> Result<Option<users::Model>, AppError> {
    let by_sub = users::Entity::find()
        .filter(users::Column::GoogleSub.eq(google_sub))
        .one(conn)
        .await
        .map_err(|e| AppError::db("Internal server error during authentication.", e))?;

    if by_sub.is_some() {
        return Ok(by_sub);
    }

    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
        .map_err(|e| AppError::db("Internal server error during authentication.", e))
}

/// All user records, oldest first.
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<users::Model>, AppError> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
        .map_err(|e| AppError::db("Failed to fetch user list.", e))
}
