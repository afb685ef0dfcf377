//! rollcall-core: Domain types, seed fixtures, and the store abstraction for Rollcall.
//!
//! This crate provides the pieces shared by every Rollcall component:
//! - Entity types (Event, Person) and the ATTENDED relationship
//! - The `EventStore` trait and its error type
//! - An in-memory store for running without a graph database

pub mod error;
pub mod fixtures;
pub mod memory;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::EventStore;
pub use types::{Attendance, Event, EventListing, EventPatch, Person, RelationshipType};
