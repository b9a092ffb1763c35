//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `Acronyms` table (one acronym per row; `name` is the lookup key but carries no UNIQUE constraint)
/// - `SeedMeta` table (names of seeds already applied to this database)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Acronyms
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS Acronyms (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    definition TEXT NOT NULL,
    createdAt TEXT NOT NULL, -- RFC3339
    updatedAt TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_acronyms_name ON Acronyms(name);

-- ---------------------------------------------------------------------------
-- Seed bookkeeping
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS SeedMeta (
    name TEXT PRIMARY KEY NOT NULL,
    appliedAt TEXT NOT NULL -- RFC3339
);
"#;
