use sqlx::SqlitePool;

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance (best-effort, log failures)
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    // One table per entity kind. hauling, properties and equipment share the
    // same shape; materials carries its JSON list columns.
    for table in ["hauling", "properties", "equipment"] {
        let ddl = format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                url_end TEXT NOT NULL,
                is_active INTEGER NOT NULL,
                image_url TEXT NOT NULL
            )"#,
            table
        );
        sqlx::query(&ddl).execute(pool).await?;
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS materials (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT NOT NULL,
            types_and_prices TEXT NOT NULL,
            listing_websites TEXT NOT NULL,
            url_end TEXT NOT NULL,
            is_active INTEGER NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    // Store-level backstop for the slug invariant: the generator checks all
    // four tables before writing, but nothing serializes check and write. A
    // unique index per table turns a lost same-kind race into a database
    // error instead of a silent duplicate.
    for table in ["hauling", "materials", "properties", "equipment"] {
        let idx = format!("CREATE UNIQUE INDEX IF NOT EXISTS idx_{0}_url_end ON {0}(url_end)", table);
        sqlx::query(&idx).execute(pool).await?;
    }

    Ok(())
}
