//! Store abstraction shared by the HTTP layer and the back ends.
//!
//! Events are addressed by their client-assigned ID, which is not unique.
//! Every ID-scoped operation acts on the first matching event only.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Attendance, Event, EventListing, EventPatch, Person};

/// Persistence backend for events and persons.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, each joined with the persons that attended it.
    async fn list_events(&self) -> Result<Vec<EventListing>>;

    /// Store a new event and return it as stored.
    async fn create_event(&self, event: Event) -> Result<Event>;

    /// Store a new person and return it as stored.
    async fn create_person(&self, person: Person) -> Result<Person>;

    /// The first event with the given ID.
    async fn get_event(&self, id: &str) -> Result<Event>;

    /// Overwrite title and description of the first event with the given ID.
    async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event>;

    /// Remove the first event with the given ID along with its attendances.
    async fn delete_event(&self, id: &str) -> Result<()>;

    /// Wipe the store and write the fixed seed pairs.
    async fn seed(&self) -> Result<Vec<Attendance>>;
}
