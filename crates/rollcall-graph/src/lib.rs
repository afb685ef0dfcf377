//! Rollcall Graph — Neo4j-backed event store.
//!
//! Wraps a pooled neo4rs connection, maps Event and Person entities to
//! graph nodes, and implements `EventStore` on top of parameterized Cypher.

pub mod client;
pub mod mapper;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
