//! CRUD handlers shared by the hauling, properties and equipment collections.
//!
//! The three kinds store the same document shape, so one set of handlers is
//! parameterized over [`EntityKind`]; only the table name differs. Materials
//! has extra list fields and lives in its own module.

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
use crate::slug::{self, SlugProbe};
use crate::state::AppState;
use crate::store;
use crate::types::{EntityKind, ListingEntry, ListingUpsert, SelectQuery};

const COLUMNS: &str = "id, name, description, price, url_end, is_active, image_url";

/// GET/POST/PUT/DELETE for one listing collection. OPTIONS preflight is
/// answered by the CORS layer.
pub fn handlers(kind: EntityKind) -> MethodRouter<AppState> {
    get(move |state: State<AppState>, query: Query<SelectQuery>| get_or_list(state, kind, query))
        .post(move |state: State<AppState>, body: Json<ListingUpsert>| create(state, kind, body))
        .put(move |state: State<AppState>, query: Query<SelectQuery>, body: Json<ListingUpsert>| {
            update(state, kind, query, body)
        })
        .delete(move |state: State<AppState>, query: Query<SelectQuery>| remove(state, kind, query))
}

/// Runs the slug generator against all four collections. Used by the
/// materials handlers as well.
pub(super) async fn assign_unique_url_end(state: &AppState, desired: &str) -> AppResult<String> {
    let probes = store::slug_probes(&state.db);
    let probe_refs: Vec<&dyn SlugProbe> = probes.iter().map(|p| p as &dyn SlugProbe).collect();
    let assigned = slug::generate_unique_url_end(desired, &probe_refs).await?;
    if assigned != slug::sanitize(desired) {
        state.metrics.inc_slug_collisions();
    }
    Ok(assigned)
}

/// Validates the one required document field.
pub(super) fn require_name(name: Option<&str>) -> AppResult<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::ValidationError {
            field: "name".to_string(),
            message: "name is required".to_string(),
        })
}

fn row_to_entry(row: &SqliteRow) -> AppResult<ListingEntry> {
    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::Database(format!("invalid stored id {}: {}", id_str, e)))?;
    Ok(ListingEntry {
        id,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        url_end: row.try_get("url_end")?,
        is_active: row.try_get("is_active")?,
        image_url: row.try_get("image_url")?,
    })
}

async fn fetch_by_id(db: &SqlitePool, kind: EntityKind, id: Uuid) -> AppResult<Option<ListingEntry>> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?1", COLUMNS, kind.table());
    let row = sqlx::query(&sql).bind(id.to_string()).fetch_optional(db).await?;
    row.as_ref().map(row_to_entry).transpose()
}

async fn fetch_by_slug(db: &SqlitePool, kind: EntityKind, url_end: &str) -> AppResult<Option<ListingEntry>> {
    let sql = format!("SELECT {} FROM {} WHERE url_end = ?1", COLUMNS, kind.table());
    let row = sqlx::query(&sql).bind(url_end).fetch_optional(db).await?;
    row.as_ref().map(row_to_entry).transpose()
}

async fn get_or_list(
    State(state): State<AppState>,
    kind: EntityKind,
    Query(q): Query<SelectQuery>,
) -> AppResult<Response> {
    if let Some(id) = q.id {
        let entry = fetch_by_id(&state.db, kind, id).await?.ok_or_not_found(kind.label())?;
        return Ok(Json(entry).into_response());
    }
    if let Some(url_end) = q.url_end.as_deref() {
        let entry = fetch_by_slug(&state.db, kind, url_end).await?.ok_or_not_found(kind.label())?;
        return Ok(Json(entry).into_response());
    }
    let sql = format!("SELECT {} FROM {} ORDER BY name", COLUMNS, kind.table());
    let rows = sqlx::query(&sql).fetch_all(&state.db).await?;
    let items = rows.iter().map(row_to_entry).collect::<AppResult<Vec<_>>>()?;
    Ok(Json(items).into_response())
}

async fn create(
    State(state): State<AppState>,
    kind: EntityKind,
    Json(req): Json<ListingUpsert>,
) -> AppResult<Response> {
    let name = require_name(req.name.as_deref())?;

    // Desired slug: client-supplied urlEnd if present, else derived from name.
    let desired = req.url_end.as_deref().map(str::trim).filter(|s| !s.is_empty()).unwrap_or(&name);
    let url_end = assign_unique_url_end(&state, desired).await?;

    let d = &state.config.listing_defaults;
    let entry = ListingEntry {
        id: Uuid::new_v4(),
        name,
        description: req.description.unwrap_or_else(|| d.description.clone()),
        price: req.price.unwrap_or(d.price),
        url_end,
        is_active: req.is_active.unwrap_or(d.is_active),
        image_url: req.image_url.unwrap_or_else(|| d.image_url.clone()),
    };

    let sql = format!("INSERT INTO {} ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)", kind.table(), COLUMNS);
    sqlx::query(&sql)
        .bind(entry.id.to_string())
        .bind(&entry.name)
        .bind(&entry.description)
        .bind(entry.price)
        .bind(&entry.url_end)
        .bind(entry.is_active)
        .bind(&entry.image_url)
        .execute(&state.db)
        .await?;

    state.metrics.inc_created();
    tracing::info!(kind = kind.table(), url_end = %entry.url_end, "listing created");
    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

async fn update(
    State(state): State<AppState>,
    kind: EntityKind,
    Query(q): Query<SelectQuery>,
    Json(req): Json<ListingUpsert>,
) -> AppResult<Response> {
    let id = q.id.ok_or_else(|| AppError::BadRequest("_id query parameter is required".to_string()))?;
    let current = fetch_by_id(&state.db, kind, id).await?.ok_or_not_found(kind.label())?;

    let name = require_name(req.name.as_deref())?;

    // Only regenerate when the submitted slug actually differs from the
    // stored one; the entity's own slug never counts as a collision.
    let url_end = match req.url_end.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(submitted) if slug::sanitize(submitted) != current.url_end => {
            assign_unique_url_end(&state, submitted).await?
        }
        _ => current.url_end,
    };

    // Full-document semantics: omitted fields fall back to the configured
    // defaults, not to the stored values.
    let d = &state.config.listing_defaults;
    let entry = ListingEntry {
        id,
        name,
        description: req.description.unwrap_or_else(|| d.description.clone()),
        price: req.price.unwrap_or(d.price),
        url_end,
        is_active: req.is_active.unwrap_or(d.is_active),
        image_url: req.image_url.unwrap_or_else(|| d.image_url.clone()),
    };

    let sql = format!(
        "UPDATE {} SET name = ?1, description = ?2, price = ?3, url_end = ?4, is_active = ?5, image_url = ?6 WHERE id = ?7",
        kind.table()
    );
    sqlx::query(&sql)
        .bind(&entry.name)
        .bind(&entry.description)
        .bind(entry.price)
        .bind(&entry.url_end)
        .bind(entry.is_active)
        .bind(&entry.image_url)
        .bind(id.to_string())
        .execute(&state.db)
        .await?;

    state.metrics.inc_updated();
    Ok(Json(entry).into_response())
}

async fn remove(
    State(state): State<AppState>,
    kind: EntityKind,
    Query(q): Query<SelectQuery>,
) -> AppResult<Response> {
    let id = q.id.ok_or_else(|| AppError::BadRequest("_id query parameter is required".to_string()))?;

    let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());
    let result = sqlx::query(&sql).bind(id.to_string()).execute(&state.db).await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("{} not found", kind.label())));
    }

    state.metrics.inc_deleted();
    tracing::info!(kind = kind.table(), %id, "listing deleted");
    Ok(Json(json!({ "message": format!("{} deleted", kind.label()) })).into_response())
}
