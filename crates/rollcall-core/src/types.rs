//! Core domain types for Rollcall.
//!
//! Field names on the wire are capitalized (`ID`, `Title`, `Name`, ...).
//! Every field defaults to its zero value when a request body omits it.

use serde::{Deserialize, Serialize};

// ── Entities ──────────────────────────────────────────────────────

/// A scheduled event. The ID is assigned by the client and may repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// A person who may attend events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Person {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: i64,
}

/// The mutable part of an event, as accepted by PATCH.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventPatch {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Event {
    /// Overwrite title and description, keeping the ID.
    pub fn apply(&mut self, patch: &EventPatch) {
        self.title.clone_from(&patch.title);
        self.description.clone_from(&patch.description);
    }
}

// ── Relationships ─────────────────────────────────────────────────

/// Relationship labels used in the graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Person → Event.
    Attended,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attended => "ATTENDED",
        }
    }
}

/// A person together with an event they attended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attendance {
    #[serde(rename = "Person")]
    pub person: Person,
    #[serde(rename = "Event")]
    pub event: Event,
}

/// An event as returned by the listing endpoint, joined with its attendees.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventListing {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "Attendees", default)]
    pub attendees: Vec<Person>,
}

impl From<Event> for EventListing {
    fn from(event: Event) -> Self {
        Self {
            event,
            attendees: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_uses_capitalized_field_names() {
        let event = Event {
            id: "9".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ID":"9","Title":"T","Description":"D"}"#);
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let event: Event = serde_json::from_str(r#"{"Title":"Only a title"}"#).unwrap();
        assert_eq!(event.id, "");
        assert_eq!(event.title, "Only a title");
        assert_eq!(event.description, "");

        let person: Person = serde_json::from_str("{}").unwrap();
        assert_eq!(person, Person::default());
    }

    #[test]
    fn mistyped_age_is_rejected() {
        let result = serde_json::from_str::<Person>(r#"{"Name":"Eve","Age":"old"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_keeps_id() {
        let mut event = Event {
            id: "1".to_string(),
            title: "Old".to_string(),
            description: "Old description".to_string(),
        };
        event.apply(&EventPatch {
            title: "New".to_string(),
            description: "New description".to_string(),
        });
        assert_eq!(event.id, "1");
        assert_eq!(event.title, "New");
        assert_eq!(event.description, "New description");
    }

    #[test]
    fn listing_flattens_event_fields() {
        let listing = EventListing {
            event: Event {
                id: "2".to_string(),
                title: "Graphs".to_string(),
                description: String::new(),
            },
            attendees: vec![Person {
                name: "Bob".to_string(),
                age: 27,
            }],
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["ID"], "2");
        assert_eq!(value["Attendees"][0]["Name"], "Bob");
        assert_eq!(value["Attendees"][0]["Age"], 27);
    }

    #[test]
    fn relationship_serializes_screaming_snake() {
        let json = serde_json::to_string(&RelationshipType::Attended).unwrap();
        assert_eq!(json, "\"ATTENDED\"");
        assert_eq!(RelationshipType::Attended.as_str(), "ATTENDED");
    }
}
