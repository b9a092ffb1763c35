use super::extract::{AcronymName, CreateAcronym, ListQuery, UpdateAcronym};
use crate::error::AcronymsError;
use crate::server::router::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

pub const PAGINATION_TOTAL_RECORDS: HeaderName =
    HeaderName::from_static("pagination-total-records");
pub const PAGINATION_MORE_RESULTS_EXISTS: HeaderName =
    HeaderName::from_static("pagination-more-results-exists");

/// GET /acronym
///
/// 200 with `[{name, definition}]` and pagination headers, or 404 with an empty body when
/// nothing matches.
pub async fn list_acronyms(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Response, AcronymsError> {
    let page = state
        .store
        .search(query.from, query.limit, query.search.as_deref())
        .await?;

    if page.count == 0 {
        return Err(AcronymsError::NotFound);
    }

    let more = page.more_results_exist(query.from, query.limit);
    let headers = [
        (PAGINATION_TOTAL_RECORDS, page.count.to_string()),
        (PAGINATION_MORE_RESULTS_EXISTS, more.to_string()),
    ];
    Ok((headers, Json(page.rows)).into_response())
}

/// POST /acronym
pub async fn create_acronym(
    State(state): State<AppState>,
    body: CreateAcronym,
) -> Result<Response, AcronymsError> {
    let created = state.store.insert(&body.name, &body.definition).await?;
    info!(id = created.id, name = %created.name, "Acronym created");
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// PUT /acronym/{acronym}
pub async fn update_acronym(
    State(state): State<AppState>,
    req: UpdateAcronym,
) -> Result<Response, AcronymsError> {
    let updated = state
        .store
        .update(&req.name, &req.definition)
        .await?
        .ok_or(AcronymsError::NotFound)?;
    info!(id = updated.id, name = %updated.name, "Acronym updated");
    Ok(Json(updated).into_response())
}

/// DELETE /acronym/{acronym}
pub async fn delete_acronym(
    State(state): State<AppState>,
    AcronymName(name): AcronymName,
) -> Result<StatusCode, AcronymsError> {
    if state.store.delete(&name).await? {
        info!(name = %name, "Acronym deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AcronymsError::NotFound)
    }
}
