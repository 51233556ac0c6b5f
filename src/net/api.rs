//! REST helpers for the host's floorplan endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`FetchError::Unavailable`], since these
//! endpoints only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All failures surface as [`FetchError`] values. Callers keep last-known-good
//! data on error; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use floorplan::model::FloorSnapshot;

use super::types::{CoordinatesResponse, EntityNames, FloorPlanResponse, snapshot_from_wire};

/// A failed fetch against one of the host endpoints.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (network failure, CORS, abort).
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    /// Fetching is only available in the browser.
    #[error("network requests are not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn floor_plan_endpoint(domain: &str, floor_id: &str) -> String {
    format!("/api/{domain}/floors/{floor_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn coordinates_endpoint(domain: &str) -> String {
    format!("/api/{domain}/coordinates")
}

#[cfg(any(test, feature = "hydrate"))]
fn entity_names_endpoint(domain: &str) -> String {
    format!("/api/{domain}/entity_names")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request { url: url.to_owned(), reason: e.to_string() })?;
    if !resp.ok() {
        return Err(FetchError::Status { url: url.to_owned(), status: resp.status() });
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode { url: url.to_owned(), reason: e.to_string() })
}

/// Fetch the floor plan for one floor.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server answers with a
/// non-success status, or the body doesn't decode.
pub async fn fetch_floor_plan(domain: &str, floor_id: &str) -> Result<FloorPlanResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&floor_plan_endpoint(domain, floor_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (domain, floor_id);
        Err(FetchError::Unavailable)
    }
}

/// Fetch current beacon and entity coordinates across all floors.
///
/// # Errors
///
/// Same failure modes as [`fetch_floor_plan`].
pub async fn fetch_coordinates(domain: &str) -> Result<CoordinatesResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&coordinates_endpoint(domain)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = domain;
        Err(FetchError::Unavailable)
    }
}

/// Fetch the bulk entity-id-to-name map.
///
/// # Errors
///
/// Same failure modes as [`fetch_floor_plan`].
pub async fn fetch_entity_names(domain: &str) -> Result<EntityNames, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&entity_names_endpoint(domain)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = domain;
        Err(FetchError::Unavailable)
    }
}

/// Fetch all three endpoints and merge them into one snapshot.
///
/// # Errors
///
/// Fails fast on the first endpoint that errors; the caller keeps its
/// previous snapshot in that case.
pub async fn fetch_snapshot(domain: &str, floor_id: &str) -> Result<FloorSnapshot, FetchError> {
    let plan = fetch_floor_plan(domain, floor_id).await?;
    let coordinates = fetch_coordinates(domain).await?;
    let names = fetch_entity_names(domain).await?;
    Ok(snapshot_from_wire(plan, coordinates, &names))
}
