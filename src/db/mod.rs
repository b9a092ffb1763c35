//! Database module: models, schema, data access and seed data.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and result shapes
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: `AcronymStore`, the pooled data-access handle
//! - `seed.rs`: the bundled one-time acronym seed

pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub use models::{AcronymSummary, CreatedAcronym, DbAcronym, SearchPage};
pub use schema::SQLITE_INIT;
pub use store::AcronymStore;
