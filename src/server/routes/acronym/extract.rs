//! Request validation for the acronym routes.
//!
//! Every extractor collects all field violations before rejecting, so a request fails as a
//! whole with one `{"errors": [...]}` body and never reaches the store half-validated.

use crate::error::{AcronymsError, FieldError, Location, ValidationErrors};
use crate::utils::logging::with_pretty_json_debug;
use crate::utils::sanitize::{escape_html, normalize};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::Deserialize;
use serde_json::Value;
use std::ops::RangeInclusive;
use tracing::debug;

const NAME_LEN: RangeInclusive<usize> = 1..=30;
const DEFINITION_LEN: RangeInclusive<usize> = 1..=2000;

/// Validated `GET /acronym` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub from: Option<i64>,
    pub limit: Option<i64>,
    /// Already percent-decoded and entity-escaped.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawListQuery {
    from: Option<String>,
    limit: Option<String>,
    search: Option<String>,
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = AcronymsError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut errors = ValidationErrors::new();

        let Query(raw) = Query::<RawListQuery>::try_from_uri(&parts.uri).map_err(|rejection| {
            debug!(error = %rejection, "Unreadable acronym query string");
            let mut errors = ValidationErrors::new();
            errors.push(FieldError::invalid("query", Location::Query, None));
            errors
        })?;

        let from = parse_int("from", raw.from, &mut errors);
        let limit = parse_int("limit", raw.limit, &mut errors);
        let search = raw
            .search
            .and_then(|s| sanitize_field("search", Location::Query, s, &mut errors));

        errors.into_result()?;
        Ok(Self {
            from,
            limit,
            search,
        })
    }
}

/// Validated `POST /acronym` body. `name` is stored entity-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAcronym {
    pub name: String,
    pub definition: String,
}

impl<S> FromRequest<S> for CreateAcronym
where
    S: Send + Sync,
{
    type Rejection = AcronymsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut errors = ValidationErrors::new();

        let body = read_json_body(req, state, &mut errors).await;
        let name = body
            .as_ref()
            .and_then(|b| body_string(b, "name", &NAME_LEN, &mut errors));
        let definition = body
            .as_ref()
            .and_then(|b| body_string(b, "definition", &DEFINITION_LEN, &mut errors));

        match (name, definition) {
            (Some(name), Some(definition)) if errors.is_empty() => Ok(Self {
                name: escape_html(&name),
                definition,
            }),
            _ => Err(errors.into()),
        }
    }
}

/// Validated `PUT /acronym/{acronym}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAcronym {
    /// Sanitized lookup key.
    pub name: String,
    pub definition: String,
}

impl<S> FromRequest<S> for UpdateAcronym
where
    S: Send + Sync,
{
    type Rejection = AcronymsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut errors = ValidationErrors::new();

        let (mut parts, body) = req.into_parts();
        let name = path_name(&mut parts, state, &mut errors).await;

        let req = Request::from_parts(parts, body);
        let body = read_json_body(req, state, &mut errors).await;
        let definition = body
            .as_ref()
            .and_then(|b| body_string(b, "definition", &DEFINITION_LEN, &mut errors));

        match (name, definition) {
            (Some(name), Some(definition)) if errors.is_empty() => Ok(Self { name, definition }),
            _ => Err(errors.into()),
        }
    }
}

/// Validated `DELETE /acronym/{acronym}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymName(pub String);

impl<S> FromRequestParts<S> for AcronymName
where
    S: Send + Sync,
{
    type Rejection = AcronymsError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut errors = ValidationErrors::new();
        let name = path_name(parts, state, &mut errors).await;

        match name {
            Some(name) if errors.is_empty() => Ok(Self(name)),
            _ => Err(errors.into()),
        }
    }
}

/// Signed 64-bit integer, or `None` when the parameter is absent.
fn parse_int(field: &str, raw: Option<String>, errors: &mut ValidationErrors) -> Option<i64> {
    let raw = raw?;
    match raw.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError::invalid(
                field,
                Location::Query,
                Some(Value::String(raw)),
            ));
            None
        }
    }
}

fn sanitize_field(
    field: &str,
    location: Location,
    raw: String,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match normalize(&raw) {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError::invalid(field, location, Some(Value::String(raw))));
            None
        }
    }
}

fn within(value: &str, len: &RangeInclusive<usize>) -> bool {
    len.contains(&value.chars().count())
}

/// `{acronym}` path segment: length-checked as received, then sanitized.
async fn path_name<S>(parts: &mut Parts, state: &S, errors: &mut ValidationErrors) -> Option<String>
where
    S: Send + Sync,
{
    match Path::<String>::from_request_parts(parts, state).await {
        Ok(Path(raw)) if within(&raw, &NAME_LEN) => {
            sanitize_field("acronym", Location::Params, raw, errors)
        }
        Ok(Path(raw)) => {
            errors.push(FieldError::invalid(
                "acronym",
                Location::Params,
                Some(Value::String(raw)),
            ));
            None
        }
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable acronym path parameter");
            errors.push(FieldError::invalid("acronym", Location::Params, None));
            None
        }
    }
}

async fn read_json_body<S>(req: Request, state: &S, errors: &mut ValidationErrors) -> Option<Value>
where
    S: Send + Sync,
{
    match Json::<Value>::from_request(req, state).await {
        Ok(Json(body)) => {
            with_pretty_json_debug(&body, |pretty_body| {
                debug!(body = %pretty_body, "[Acronym] Extracted request body");
            });
            Some(body)
        }
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable acronym request body");
            errors.push(FieldError::invalid("body", Location::Body, None));
            None
        }
    }
}

/// Required string field of a JSON object body with a length window.
fn body_string(
    body: &Value,
    field: &str,
    len: &RangeInclusive<usize>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) if within(s, len) => Some(s.clone()),
        other => {
            errors.push(FieldError::invalid(field, Location::Body, other.cloned()));
            None
        }
    }
}
