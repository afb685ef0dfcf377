//! In-memory `EventStore`, used when no graph database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::fixtures;
use crate::store::EventStore;
use crate::types::{Attendance, Event, EventListing, EventPatch, Person};

/// An event plus the internal key that attendances point at.
///
/// Client IDs can repeat, so attendances cannot reference events by ID.
#[derive(Debug)]
struct Slot {
    key: u64,
    event: Event,
}

#[derive(Debug, Default)]
struct Inner {
    next_key: u64,
    events: Vec<Slot>,
    people: Vec<Person>,
    /// (index into `people`, event key)
    attended: Vec<(usize, u64)>,
}

impl Inner {
    fn push_event(&mut self, event: Event) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.events.push(Slot { key, event });
        key
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|slot| slot.event.id == id)
    }
}

/// Ordered, lock-guarded collection of events and persons.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given events, in order.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut inner = Inner::default();
        for event in events {
            inner.push_event(event);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Start with the single welcome event.
    pub fn with_sample() -> Self {
        Self::with_events([fixtures::welcome_event()])
    }

    /// Number of stored events.
    pub async fn len(&self) -> usize {
        self.inner.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list_events(&self) -> Result<Vec<EventListing>> {
        let inner = self.inner.read().await;
        let listings = inner
            .events
            .iter()
            .map(|slot| EventListing {
                event: slot.event.clone(),
                attendees: inner
                    .attended
                    .iter()
                    .filter(|(_, key)| *key == slot.key)
                    .filter_map(|(person, _)| inner.people.get(*person).cloned())
                    .collect(),
            })
            .collect();
        Ok(listings)
    }

    async fn create_event(&self, event: Event) -> Result<Event> {
        let mut inner = self.inner.write().await;
        inner.push_event(event.clone());
        Ok(event)
    }

    async fn create_person(&self, person: Person) -> Result<Person> {
        let mut inner = self.inner.write().await;
        inner.people.push(person.clone());
        Ok(person)
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        let inner = self.inner.read().await;
        inner
            .position(id)
            .map(|idx| inner.events[idx].event.clone())
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id).ok_or_else(|| StoreError::not_found(id))?;
        let event = &mut inner.events[idx].event;
        event.apply(&patch);
        Ok(event.clone())
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id).ok_or_else(|| StoreError::not_found(id))?;
        let removed = inner.events.remove(idx);
        inner.attended.retain(|(_, key)| *key != removed.key);
        Ok(())
    }

    async fn seed(&self) -> Result<Vec<Attendance>> {
        let attendances = fixtures::seed_attendances();
        let mut inner = self.inner.write().await;
        *inner = Inner::default();
        for attendance in &attendances {
            let key = inner.push_event(attendance.event.clone());
            inner.people.push(attendance.person.clone());
            let person = inner.people.len() - 1;
            inner.attended.push((person, key));
        }
        tracing::info!(pairs = attendances.len(), "Seeded in-memory store");
        Ok(attendances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
        }
    }

    #[tokio::test]
    async fn created_event_is_listed_once() {
        let store = MemoryStore::with_sample();
        store.create_event(event("9", "T")).await.unwrap();

        let listed = store.list_events().await.unwrap();
        let matches = listed.iter().filter(|l| l.event.id == "9").count();
        assert_eq!(matches, 1);
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn get_returns_first_match() {
        let store = MemoryStore::with_events([event("1", "first"), event("1", "second")]);
        let found = store.get_event("1").await.unwrap();
        assert_eq!(found.title, "first");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_event("404").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "404"));
    }

    #[tokio::test]
    async fn update_overwrites_in_place() {
        let store = MemoryStore::with_events([event("1", "a"), event("2", "b"), event("3", "c")]);
        let patch = EventPatch {
            title: "B".to_string(),
            description: "updated".to_string(),
        };

        let updated = store.update_event("2", patch).await.unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.title, "B");

        let ids: Vec<String> = store
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.event.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.get_event("2").await.unwrap().description, "updated");
    }

    #[tokio::test]
    async fn update_missing_leaves_collection_unchanged() {
        let store = MemoryStore::with_events([event("1", "a")]);
        let before = store.list_events().await.unwrap();

        let err = store
            .update_event("7", EventPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.list_events().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_only_first_match() {
        let store = MemoryStore::with_events([event("1", "first"), event("1", "second")]);
        store.delete_event("1").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get_event("1").await.unwrap().title, "second");
    }

    #[tokio::test]
    async fn delete_missing_leaves_collection_unchanged() {
        let store = MemoryStore::with_sample();
        assert!(store.delete_event("missing").await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seed_replaces_contents_with_fixture_pairs() {
        let store = MemoryStore::with_events([event("x", "stale")]);
        store.create_person(Person::default()).await.unwrap();

        let seeded = store.seed().await.unwrap();
        assert_eq!(seeded, fixtures::seed_attendances());

        let listed = store.list_events().await.unwrap();
        assert_eq!(listed.len(), 2);
        for (listing, pair) in listed.iter().zip(&seeded) {
            assert_eq!(listing.event, pair.event);
            assert_eq!(listing.attendees, vec![pair.person.clone()]);
        }
    }

    #[tokio::test]
    async fn deleting_seeded_event_drops_its_attendance() {
        let store = MemoryStore::new();
        store.seed().await.unwrap();
        store.delete_event("1").await.unwrap();
        // A new event reusing the ID must not inherit the old attendee.
        store.create_event(event("1", "again")).await.unwrap();

        let listed = store.list_events().await.unwrap();
        let again = listed.iter().find(|l| l.event.id == "1").unwrap();
        assert!(again.attendees.is_empty());
    }
}
