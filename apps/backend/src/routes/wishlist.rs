use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::entities::wishlist_items;
use crate::error::AppError;
use crate::extractors::{AdminUser, CurrentUser};
use crate::repos::wishlist::{self, ItemFields};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<i32>,
    pub active: Option<bool>,
}

impl ItemPayload {
    /// Title is the only required field; the rest defaults like the store's
    /// column defaults.
    fn validated(self) -> Result<ItemFields, AppError> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }

        Ok(ItemFields {
            title,
            description: self.description,
            category: self.category.unwrap_or(0),
            active: self.active.unwrap_or(false),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemDto {
    id: i64,
    title: String,
    description: Option<String>,
    category: i32,
    active: bool,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<wishlist_items::Model> for ItemDto {
    fn from(item: wishlist_items::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            active: item.active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct ItemListResponse {
    items: Vec<ItemDto>,
}

/// Any authenticated user may read the list.
async fn list_items(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let items = wishlist::list_newest_first(db).await?;

    Ok(HttpResponse::Ok().json(ItemListResponse {
        items: items.into_iter().map(ItemDto::from).collect(),
    }))
}

async fn create_item(
    _admin: AdminUser,
    body: web::Json<ItemPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let fields = body.into_inner().validated()?;
    let db = require_db(&app_state)?;

    let item = wishlist::create(db, fields).await?;
    Ok(HttpResponse::Created().json(ItemDto::from(item)))
}

async fn update_item(
    _admin: AdminUser,
    path: web::Path<i64>,
    body: web::Json<ItemPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let fields = body.into_inner().validated()?;
    let db = require_db(&app_state)?;

    let item = wishlist::update(db, id, fields)
        .await?
        .ok_or_else(|| AppError::not_found("Wishlist item not found."))?;

    Ok(HttpResponse::Ok().json(ItemDto::from(item)))
}

async fn delete_item(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let db = require_db(&app_state)?;

    wishlist::delete(db, id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Wishlist item deleted" })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_items))
            .route(web::post().to(create_item)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::put().to(update_item))
            .route(web::delete().to(delete_item)),
    );
}
