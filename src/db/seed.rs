//! One-time data seed for the `Acronyms` table.
//!
//! The bundled file is a JSON array of single-entry objects (`{"<name>": "<definition>"}`).
//! Applied seeds are recorded in `SeedMeta`, so [`apply`] inserts at most once per database.

use crate::error::AcronymsError;
use crate::utils::sanitize::escape_html;
use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::info;

/// Name under which the bundled seed is recorded in `SeedMeta`.
pub const SEED_NAME: &str = "acronyms-data";

const SEED_DATA: &str = include_str!("../../data/acronyms.json");

/// Parse the bundled seed into `(name, definition)` pairs, in file order.
pub fn entries() -> Result<Vec<(String, String)>, AcronymsError> {
    parse_entries(SEED_DATA)
}

fn parse_entries(raw: &str) -> Result<Vec<(String, String)>, AcronymsError> {
    let maps: Vec<BTreeMap<String, String>> = serde_json::from_str(raw)?;
    Ok(maps.into_iter().flatten().collect())
}

/// Insert the bundled acronyms unless this database already has them.
///
/// Returns the number of inserted rows; `0` when the seed was applied before.
pub async fn apply(pool: &SqlitePool) -> Result<u64, AcronymsError> {
    let entries = entries()?;
    let mut tx = pool.begin().await?;

    let applied: Option<String> = sqlx::query_scalar("SELECT name FROM SeedMeta WHERE name = ?")
        .bind(SEED_NAME)
        .fetch_optional(&mut *tx)
        .await?;
    if applied.is_some() {
        info!(seed = SEED_NAME, "Seed already applied; skipping");
        return Ok(0);
    }

    let now = Utc::now();
    let mut inserted = 0;
    for (name, definition) in &entries {
        inserted += sqlx::query(
            r#"
        INSERT INTO Acronyms (name, definition, createdAt, updatedAt)
        VALUES (?, ?, ?, ?)
        "#,
        )
        .bind(escape_html(name))
        .bind(definition)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    sqlx::query("INSERT INTO SeedMeta (name, appliedAt) VALUES (?, ?)")
        .bind(SEED_NAME)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(seed = SEED_NAME, inserted, "Seed applied");
    Ok(inserted)
}

/// Remove every acronym and forget the seed so it can be applied again.
///
/// Returns the number of deleted acronym rows.
pub async fn revert(pool: &SqlitePool) -> Result<u64, AcronymsError> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM Acronyms")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    sqlx::query("DELETE FROM SeedMeta WHERE name = ?")
        .bind(SEED_NAME)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(seed = SEED_NAME, deleted, "Seed reverted");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seed_parses_in_file_order() {
        let entries = entries().expect("bundled seed should parse");
        assert!(entries.len() > 20);
        assert_eq!(
            entries.first(),
            Some(&("AAMOF".to_string(), "As a matter of fact".to_string()))
        );
        assert!(entries.iter().any(|(n, d)| n == "IC" && d == "I see"));
    }

    #[test]
    fn parse_entries_rejects_non_string_definitions() {
        let err = parse_entries(r#"[{"IC": 1}]"#).expect_err("numbers are not definitions");
        assert!(matches!(err, AcronymsError::JsonError(_)));
    }
}
