use crate::db::models::{AcronymSummary, CreatedAcronym, DbAcronym, SearchPage};
use crate::db::schema::SQLITE_INIT;
use crate::error::AcronymsError;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

/// Data-access handle for the `Acronyms` table.
///
/// Cloning is cheap: every clone shares the same connection pool.
#[derive(Clone, Debug)]
pub struct AcronymStore {
    pool: SqlitePool,
}

impl AcronymStore {
    /// Open (creating if missing) the SQLite database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, AcronymsError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        info!(database_url = %database_url, "AcronymStore connected");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes that do not exist yet.
    pub async fn apply_schema(&self) -> Result<(), AcronymsError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        debug!("Acronyms schema applied");
        Ok(())
    }

    /// Page through acronyms whose name contains `search` (all of them when `search` is
    /// absent or empty).
    ///
    /// `from` and `limit` reach SQLite unchanged: a negative `LIMIT` means no cap and a
    /// negative `OFFSET` behaves as zero.
    pub async fn search(
        &self,
        from: Option<i64>,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<SearchPage, AcronymsError> {
        let pattern = search.filter(|s| !s.is_empty());

        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar(
            r#"
        SELECT COUNT(*)
        FROM Acronyms
        WHERE ? IS NULL OR name LIKE '%' || ? || '%'
        "#,
        )
        .bind(pattern)
        .bind(pattern)
        .fetch_one(&mut *tx)
        .await?;

        let rows = sqlx::query_as::<_, AcronymSummary>(
            r#"
        SELECT name, definition
        FROM Acronyms
        WHERE ? IS NULL OR name LIKE '%' || ? || '%'
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
        )
        .bind(pattern)
        .bind(pattern)
        .bind(limit.unwrap_or(-1))
        .bind(from.unwrap_or(0))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            search = ?pattern,
            from = ?from,
            limit = ?limit,
            count,
            returned = rows.len(),
            "Acronym search finished"
        );
        Ok(SearchPage { count, rows })
    }

    pub async fn insert(
        &self,
        name: &str,
        definition: &str,
    ) -> Result<CreatedAcronym, AcronymsError> {
        let now = Utc::now();
        let created = sqlx::query_as::<_, CreatedAcronym>(
            r#"
        INSERT INTO Acronyms (name, definition, createdAt, updatedAt)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, definition
        "#,
        )
        .bind(name)
        .bind(definition)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = created.id, name = %created.name, "Acronym inserted");
        Ok(created)
    }

    /// Overwrite the definition of the first acronym named exactly `name`.
    ///
    /// Lookup and write happen in one statement. `Ok(None)` when nothing matched.
    pub async fn update(
        &self,
        name: &str,
        definition: &str,
    ) -> Result<Option<DbAcronym>, AcronymsError> {
        let updated = sqlx::query_as::<_, DbAcronym>(
            r#"
        UPDATE Acronyms
        SET definition = ?, updatedAt = ?
        WHERE id = (SELECT id FROM Acronyms WHERE name = ? ORDER BY id LIMIT 1)
        RETURNING id, name, definition, createdAt, updatedAt
        "#,
        )
        .bind(definition)
        .bind(Utc::now())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        debug!(name = %name, found = updated.is_some(), "Acronym update finished");
        Ok(updated)
    }

    /// Remove the first acronym named exactly `name`; `false` when nothing matched.
    pub async fn delete(&self, name: &str) -> Result<bool, AcronymsError> {
        let result = sqlx::query(
            r#"
        DELETE FROM Acronyms
        WHERE id = (SELECT id FROM Acronyms WHERE name = ? ORDER BY id LIMIT 1)
        "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        debug!(name = %name, deleted, "Acronym delete finished");
        Ok(deleted)
    }
}
