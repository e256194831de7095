//! Axum extractors for store requests
//!
//! - [`ResolvedStore`] resolves `{id}` to a record before the handler runs,
//!   answering 404 when it cannot.
//! - [`JsonObject`] reads the raw body and insists on a JSON object.
//! - [`ListQuery`] reads list parameters without ever rejecting the request.

use super::handlers::AppState;
use crate::core::entity::STORE_ENTITY_TYPE;
use crate::core::{ApiError, EntityError, ListParams, RequestError, Store};
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A store looked up from the `{id}` path segment.
///
/// An identifier that is not a UUID is as unresolvable as an unknown one:
/// both produce 404.
#[derive(Debug, Clone)]
pub struct ResolvedStore(pub Store);

impl FromRequestParts<AppState> for ResolvedStore {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(""))?;

        let id = Uuid::parse_str(&raw_id).map_err(|_| not_found(&raw_id))?;

        state
            .repository
            .find(&id)
            .await?
            .map(ResolvedStore)
            .ok_or_else(|| not_found(&raw_id))
    }
}

fn not_found(id: &str) -> ApiError {
    EntityError::NotFound {
        entity_type: STORE_ENTITY_TYPE.to_string(),
        id: id.to_string(),
    }
    .into()
}

/// List parameters from the query string.
///
/// Repeated keys keep their last value; a query string that cannot be
/// decoded at all is treated as empty.
#[derive(Debug, Clone, Default)]
pub struct ListQuery(pub ListParams);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring undecodable query string");
                Vec::new()
            }
        };
        Ok(ListQuery(ListParams::from_pairs(pairs)))
    }
}

/// Request body parsed as a JSON object.
///
/// The content type is not checked. Malformed JSON and valid JSON that is
/// not an object are both rejected with `Invalid JSON`.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| RequestError::InvalidJson)?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(object)) => Ok(JsonObject(object)),
            _ => Err(RequestError::InvalidJson.into()),
        }
    }
}
