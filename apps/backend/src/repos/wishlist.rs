use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use time::OffsetDateTime;

use crate::entities::wishlist_items;
use crate::error::AppError;

/// Validated fields for a create or full update.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub title: String,
    pub description: Option<String>,
    pub category: i32,
    pub active: bool,
}

pub async fn list_newest_first<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<wishlist_items::Model>, AppError> {
    wishlist_items::Entity::find()
        .order_by_desc(wishlist_items::Column::CreatedAt)
        .all(conn)
        .await
        .map_err(|e| {
            AppError::db(
                "Failed to retrieve wishlist items due to a server error.",
                e,
            )
        })
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    fields: ItemFields,
) -> Result<wishlist_items::Model, AppError> {
    let now = OffsetDateTime::now_utc();

    let item = wishlist_items::ActiveModel {
        title: Set(fields.title),
        description: Set(fields.description),
        category: Set(fields.category),
        active: Set(fields.active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    item.insert(conn).await.map_err(map_insert_err)
}

/// Full update of an existing item. Returns `None` when no row has this id.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    fields: ItemFields,
) -> Result<Option<wishlist_items::Model>, AppError> {
    let existing = wishlist_items::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| AppError::db("Failed to update wishlist item due to a server error.", e))?;

    let Some(existing) = existing else {
        return Ok(None);
    };

    let mut item: wishlist_items::ActiveModel = existing.into();
    item.title = Set(fields.title);
    item.description = Set(fields.description);
    item.category = Set(fields.category);
    item.active = Set(fields.active);
    item.updated_at = Set(OffsetDateTime::now_utc());

    let updated = item.update(conn).await.map_err(map_update_err)?;
    Ok(Some(updated))
}

/// Delete by id. Deleting a missing row is not an error.
pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), AppError> {
    wishlist_items::Entity::delete_many()
        .filter(wishlist_items::Column::Id.eq(id))
        .exec(conn)
        .await
        .map_err(|e| AppError::db("Failed to delete wishlist item due to a server error.", e))?;
    Ok(())
}

fn map_insert_err(e: sea_orm::DbErr) -> AppError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        tracing::warn!("attempted to insert duplicate wishlist title");
        return AppError::conflict("A wishlist item with this title already exists.");
    }
    AppError::db("Failed to create wishlist item due to a server error.", e)
}

fn map_update_err(e: sea_orm::DbErr) -> AppError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return AppError::conflict("A wishlist item with this title already exists.");
    }
    AppError::db("Failed to update wishlist item due to a server error.", e)
}
