//! rollcall-api: HTTP API for Rollcall events and attendees.
//!
//! Maps REST verbs onto an `EventStore`, either the Neo4j graph or an
//! in-memory collection, and answers with JSON.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use error::ApiError;
pub use router::{app, AppState};
