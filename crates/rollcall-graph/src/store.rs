//! `EventStore` backed by the Neo4j graph.

use async_trait::async_trait;

use rollcall_core::error::Result;
use rollcall_core::{
    fixtures, Attendance, Event, EventListing, EventPatch, EventStore, Person, StoreError,
};

use crate::client::GraphClient;

#[async_trait]
impl EventStore for GraphClient {
    async fn list_events(&self) -> Result<Vec<EventListing>> {
        Ok(GraphClient::list_events(self).await?)
    }

    async fn create_event(&self, event: Event) -> Result<Event> {
        Ok(GraphClient::create_event(self, &event).await?)
    }

    async fn create_person(&self, person: Person) -> Result<Person> {
        Ok(GraphClient::create_person(self, &person).await?)
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        self.find_event(id)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event> {
        GraphClient::update_event(self, id, &patch)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        if GraphClient::delete_event(self, id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }

    async fn seed(&self) -> Result<Vec<Attendance>> {
        let attendances = fixtures::seed_attendances();
        self.clear().await?;
        for attendance in &attendances {
            self.create_attendance(attendance).await?;
        }
        tracing::info!(pairs = attendances.len(), "Seeded graph");
        Ok(attendances)
    }
}
