//! HTTP handlers for events, persons and seeding.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;

use rollcall_core::{Event, EventPatch, Person};

use crate::error::Result;
use crate::router::AppState;

pub const WELCOME: &str = "Welcome home!";

/// Decode a JSON request body. Missing fields take their zero values.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn home() -> &'static str {
    WELCOME
}

pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let events = state.store.list_events().await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let event: Event = decode(&body)?;
    let created = state.store.create_event(event).await?;
    tracing::info!(id = %created.id, "Created event");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let person: Person = decode(&body)?;
    let created = state.store.create_person(person).await?;
    tracing::info!(name = %created.name, "Created person");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let event = state.store.get_event(&id).await?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let patch: EventPatch = decode(&body)?;
    let updated = state.store.update_event(&id, patch).await?;
    tracing::info!(id = %id, "Updated event");
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_event(&id).await?;
    tracing::info!(id = %id, "Deleted event");
    Ok(format!("The event with ID {id} has been deleted successfully"))
}

pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let seeded = state.store.seed().await?;
    Ok((StatusCode::CREATED, Json(seeded)))
}
