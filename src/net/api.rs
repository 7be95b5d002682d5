//! GraphQL mutation helpers for the advertisement boundary.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since mutations are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/`Option` outputs instead of panics so mutation
//! failures degrade UI behavior without crashing hydration. A success
//! body with no `data` envelope maps to `Ok(None)`: nothing to commit,
//! not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdvertisementRecord, CreateAdvertisementVariables, DeleteAdvertisementVariables, UpdateAdvertisementVariables,
};
#[cfg(feature = "hydrate")]
use super::types::{CreateAdvertisementResponse, UpdateAdvertisementResponse};

#[cfg(any(test, feature = "hydrate"))]
const GRAPHQL_ENDPOINT: &str = "/graphql";

#[cfg(any(test, feature = "hydrate"))]
const DELETE_ADVERTISEMENT: &str = "mutation DeleteAdvertisementById($id: ID!) { \
     deleteAdvertisementById(id: $id) { success } }";

#[cfg(any(test, feature = "hydrate"))]
const UPDATE_ADVERTISEMENT: &str = "mutation UpdateAdvertisement($id: ID!, $name: String, $type: AdvertisementType, $startDate: Date, $endDate: Date) { \
     updateAdvertisement(id: $id, name: $name, type: $type, startDate: $startDate, endDate: $endDate) { \
     advertisement { _id name type startDate endDate mediaUrl } } }";

#[cfg(any(test, feature = "hydrate"))]
const CREATE_ADVERTISEMENT: &str = "mutation CreateAdvertisement($organizationId: ID!, $name: String!, $file: String, $type: String!, $startDate: Date!, $endDate: Date!) { \
     createAdvertisement(organizationId: $organizationId, name: $name, file: $file, type: $type, startDate: $startDate, endDate: $endDate) { _id } }";

/// Build the POST body for a GraphQL operation.
#[cfg(any(test, feature = "hydrate"))]
fn request_body<V: serde::Serialize>(query: &str, variables: &V) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "variables": variables,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn mutation_failed_message(status: u16) -> String {
    format!("mutation failed: {status}")
}

/// Send a GraphQL mutation and return the raw response body.
#[cfg(feature = "hydrate")]
async fn post_graphql<V: serde::Serialize>(query: &str, variables: &V) -> Result<serde_json::Value, String> {
    let body = request_body(query, variables);
    let mut request = gloo_net::http::Request::post(GRAPHQL_ENDPOINT);
    if let Some(token) = crate::util::auth::stored_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = request
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(mutation_failed_message(resp.status()));
    }
    resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
}

/// Delete an advertisement by id. The payload is exactly `{ id }`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn delete_advertisement(variables: &DeleteAdvertisementVariables) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_graphql(DELETE_ADVERTISEMENT, variables).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = variables;
        Err("not available on server".to_owned())
    }
}

/// Update an advertisement with the given partial variables.
///
/// Returns `Ok(Some(record))` when the response carries a well-formed
/// `data` payload, `Ok(None)` when the payload is missing or malformed.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn update_advertisement(
    variables: &UpdateAdvertisementVariables,
) -> Result<Option<AdvertisementRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_graphql(UPDATE_ADVERTISEMENT, variables).await?;
        let resp: UpdateAdvertisementResponse = serde_json::from_value(body).unwrap_or(UpdateAdvertisementResponse { data: None });
        Ok(resp.data.map(|d| d.update_advertisement.advertisement))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = variables;
        Err("not available on server".to_owned())
    }
}

/// Create a new advertisement.
///
/// Returns `Ok(Some(id))` for a well-formed response, `Ok(None)` when the
/// `data` payload is missing or malformed.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn create_advertisement(variables: &CreateAdvertisementVariables) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_graphql(CREATE_ADVERTISEMENT, variables).await?;
        let resp: CreateAdvertisementResponse = serde_json::from_value(body).unwrap_or(CreateAdvertisementResponse { data: None });
        Ok(resp.data.map(|d| d.create_advertisement.id))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = variables;
        Err("not available on server".to_owned())
    }
}
