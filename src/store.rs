//! Store-access capabilities shared by the handlers.
//!
//! Each entity kind owns one SQLite table; the handlers run their own
//! queries, but slug uniqueness probing is abstracted here so the generator
//! in [`crate::slug`] stays independent of the storage backend.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::slug::SlugProbe;
use crate::types::EntityKind;

/// A [`SlugProbe`] backed by one listing table.
pub struct TableSlugs {
    pool: SqlitePool,
    table: &'static str,
}

impl TableSlugs {
    pub fn new(pool: &SqlitePool, kind: EntityKind) -> Self {
        Self { pool: pool.clone(), table: kind.table() }
    }
}

#[async_trait]
impl SlugProbe for TableSlugs {
    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        // Table names come from EntityKind::table, never from input.
        let sql = format!("SELECT 1 FROM {} WHERE url_end = ?1 LIMIT 1", self.table);
        let row = sqlx::query(&sql).bind(slug).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }
}

/// One probe per collection, in a fixed order. POST/PUT handlers feed these
/// to the slug generator so a candidate is checked against all four tables.
pub fn slug_probes(pool: &SqlitePool) -> Vec<TableSlugs> {
    EntityKind::ALL.iter().map(|kind| TableSlugs::new(pool, *kind)).collect()
}
