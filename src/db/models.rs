use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `Acronyms` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DbAcronym {
    pub id: i64,
    pub name: String,
    pub definition: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Search row: id and timestamps stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct AcronymSummary {
    pub name: String,
    pub definition: String,
}

/// Returned by insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct CreatedAcronym {
    pub id: i64,
    pub name: String,
    pub definition: String,
}

/// One page of search results plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Matches ignoring offset and limit.
    pub count: i64,
    pub rows: Vec<AcronymSummary>,
}

impl SearchPage {
    /// Whether rows exist past `from + limit`.
    ///
    /// Without a limit the page already runs to the end, so there is never more. A negative
    /// limit is compared as given: SQLite returns every row for it, yet the window end can
    /// still fall below `count` and report `true`.
    pub fn more_results_exist(&self, from: Option<i64>, limit: Option<i64>) -> bool {
        match limit {
            Some(limit) => from.unwrap_or(0).saturating_add(limit) < self.count,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: i64) -> SearchPage {
        SearchPage {
            count,
            rows: Vec::new(),
        }
    }

    #[test]
    fn more_results_exist_compares_window_end_with_count() {
        assert!(page(11).more_results_exist(Some(0), Some(10)));
        assert!(!page(10).more_results_exist(Some(0), Some(10)));
        assert!(!page(15).more_results_exist(Some(10), Some(5)));
        assert!(page(16).more_results_exist(Some(10), Some(5)));
    }

    #[test]
    fn more_results_exist_treats_missing_from_as_zero() {
        assert!(page(3).more_results_exist(None, Some(2)));
        assert!(!page(3).more_results_exist(None, None));
        assert!(!page(3).more_results_exist(Some(1), None));
    }

    #[test]
    fn more_results_exist_passes_negative_values_through() {
        assert!(page(3).more_results_exist(Some(0), Some(-1)));
        assert!(!page(3).more_results_exist(Some(i64::MAX), Some(i64::MAX)));
    }
}
