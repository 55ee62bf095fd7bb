//! CRUD handlers for the materials collection.
//!
//! Same handler shape as `listing`, but materials documents carry two JSON
//! list fields (`typesAndPrices`, `listingWebsites`) stored as TEXT columns.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json,
};
use serde_json::json;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::error::{AppError, AppResult, OptionExt};
use crate::state::AppState;
use crate::types::{EntityKind, MaterialsEntry, MaterialsUpsert, SelectQuery, TypeAndPrice};

use super::listing::{assign_unique_url_end, require_name};

const KIND: EntityKind = EntityKind::Materials;
const COLUMNS: &str = "id, name, description, image_url, types_and_prices, listing_websites, url_end, is_active";

pub fn handlers() -> MethodRouter<AppState> {
    get(get_or_list).post(create).put(update).delete(remove)
}

fn decode_list<T: serde::de::DeserializeOwned>(column: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Database(format!("invalid stored {} value: {}", column, e)))
}

fn encode_list<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| AppError::Internal(anyhow::Error::new(e)))
}

fn row_to_entry(row: &SqliteRow) -> AppResult<MaterialsEntry> {
    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::Database(format!("invalid stored id {}: {}", id_str, e)))?;
    let types_raw: String = row.try_get("types_and_prices")?;
    let websites_raw: String = row.try_get("listing_websites")?;
    Ok(MaterialsEntry {
        id,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        types_and_prices: decode_list::<Vec<TypeAndPrice>>("types_and_prices", &types_raw)?,
        listing_websites: decode_list::<Vec<String>>("listing_websites", &websites_raw)?,
        url_end: row.try_get("url_end")?,
        is_active: row.try_get("is_active")?,
    })
}

async fn fetch_by_id(db: &SqlitePool, id: Uuid) -> AppResult<Option<MaterialsEntry>> {
    let sql = format!("SELECT {} FROM materials WHERE id = ?1", COLUMNS);
    let row = sqlx::query(&sql).bind(id.to_string()).fetch_optional(db).await?;
    row.as_ref().map(row_to_entry).transpose()
}

async fn fetch_by_slug(db: &SqlitePool, url_end: &str) -> AppResult<Option<MaterialsEntry>> {
    let sql = format!("SELECT {} FROM materials WHERE url_end = ?1", COLUMNS);
    let row = sqlx::query(&sql).bind(url_end).fetch_optional(db).await?;
    row.as_ref().map(row_to_entry).transpose()
}

async fn get_or_list(
    State(state): State<AppState>,
    Query(q): Query<SelectQuery>,
) -> AppResult<Response> {
    if let Some(id) = q.id {
        let entry = fetch_by_id(&state.db, id).await?.ok_or_not_found(KIND.label())?;
        return Ok(Json(entry).into_response());
    }
    if let Some(url_end) = q.url_end.as_deref() {
        let entry = fetch_by_slug(&state.db, url_end).await?.ok_or_not_found(KIND.label())?;
        return Ok(Json(entry).into_response());
    }
    let sql = format!("SELECT {} FROM materials ORDER BY name", COLUMNS);
    let rows = sqlx::query(&sql).fetch_all(&state.db).await?;
    let items = rows.iter().map(row_to_entry).collect::<AppResult<Vec<_>>>()?;
    Ok(Json(items).into_response())
}

async fn create(State(state): State<AppState>, Json(req): Json<MaterialsUpsert>) -> AppResult<Response> {
    let name = require_name(req.name.as_deref())?;

    let desired = req.url_end.as_deref().map(str::trim).filter(|s| !s.is_empty()).unwrap_or(&name);
    let url_end = assign_unique_url_end(&state, desired).await?;

    let d = &state.config.listing_defaults;
    let entry = MaterialsEntry {
        id: Uuid::new_v4(),
        name,
        description: req.description.unwrap_or_else(|| d.description.clone()),
        image_url: req.image_url.unwrap_or_else(|| d.image_url.clone()),
        types_and_prices: req.types_and_prices.unwrap_or_default(),
        listing_websites: req.listing_websites.unwrap_or_default(),
        url_end,
        is_active: req.is_active.unwrap_or(d.is_active),
    };

    let sql = format!("INSERT INTO materials ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)", COLUMNS);
    sqlx::query(&sql)
        .bind(entry.id.to_string())
        .bind(&entry.name)
        .bind(&entry.description)
        .bind(&entry.image_url)
        .bind(encode_list(&entry.types_and_prices)?)
        .bind(encode_list(&entry.listing_websites)?)
        .bind(&entry.url_end)
        .bind(entry.is_active)
        .execute(&state.db)
        .await?;

    state.metrics.inc_created();
    tracing::info!(kind = "materials", url_end = %entry.url_end, "listing created");
    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

async fn update(
    State(state): State<AppState>,
    Query(q): Query<SelectQuery>,
    Json(req): Json<MaterialsUpsert>,
) -> AppResult<Response> {
    let id = q.id.ok_or_else(|| AppError::BadRequest("_id query parameter is required".to_string()))?;
    let current = fetch_by_id(&state.db, id).await?.ok_or_not_found(KIND.label())?;

    let name = require_name(req.name.as_deref())?;

    let url_end = match req.url_end.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(submitted) if crate::slug::sanitize(submitted) != current.url_end => {
            assign_unique_url_end(&state, submitted).await?
        }
        _ => current.url_end,
    };

    let d = &state.config.listing_defaults;
    let entry = MaterialsEntry {
        id,
        name,
        description: req.description.unwrap_or_else(|| d.description.clone()),
        image_url: req.image_url.unwrap_or_else(|| d.image_url.clone()),
        types_and_prices: req.types_and_prices.unwrap_or_default(),
        listing_websites: req.listing_websites.unwrap_or_default(),
        url_end,
        is_active: req.is_active.unwrap_or(d.is_active),
    };

    let sql = "UPDATE materials SET name = ?1, description = ?2, image_url = ?3, types_and_prices = ?4, \
               listing_websites = ?5, url_end = ?6, is_active = ?7 WHERE id = ?8";
    sqlx::query(sql)
        .bind(&entry.name)
        .bind(&entry.description)
        .bind(&entry.image_url)
        .bind(encode_list(&entry.types_and_prices)?)
        .bind(encode_list(&entry.listing_websites)?)
        .bind(&entry.url_end)
        .bind(entry.is_active)
        .bind(id.to_string())
        .execute(&state.db)
        .await?;

    state.metrics.inc_updated();
    Ok(Json(entry).into_response())
}

async fn remove(State(state): State<AppState>, Query(q): Query<SelectQuery>) -> AppResult<Response> {
    let id = q.id.ok_or_else(|| AppError::BadRequest("_id query parameter is required".to_string()))?;

    let result = sqlx::query("DELETE FROM materials WHERE id = ?1")
        .bind(id.to_string())
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("{} not found", KIND.label())));
    }

    state.metrics.inc_deleted();
    tracing::info!(kind = "materials", %id, "listing deleted");
    Ok(Json(json!({ "message": format!("{} deleted", KIND.label()) })).into_response())
}
