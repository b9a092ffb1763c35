use crate::server::router::AppState;
use axum::{
    Router,
    routing::{get, put},
};

pub mod extract;
pub mod handlers;

/// Open routes: list/search and create.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/acronym",
        get(handlers::list_acronyms).post(handlers::create_acronym),
    )
}

/// Mutating routes keyed by `{acronym}`; mounted behind the authentication guard.
pub fn guarded_router() -> Router<AppState> {
    Router::new().route(
        "/acronym/{acronym}",
        put(handlers::update_acronym).delete(handlers::delete_acronym),
    )
}
