//! Conversion between Rollcall entities and Neo4j node properties.
//!
//! Nodes store lower-case property names (`id`, `title`, `description`,
//! `name`, `age`). Reads are lenient: a missing or mistyped property
//! becomes the zero value for its field.

use neo4rs::{BoltMap, BoltType, Node, Query, Row};

use rollcall_core::{Event, Person};

pub const EVENT_LABEL: &str = "Event";
pub const PERSON_LABEL: &str = "Person";

/// `MATCH` prefix selecting the first event with `$id`, bound as `e`.
///
/// Duplicates are ordered by internal node id so reads and writes agree
/// on which one is first.
pub fn match_first_event() -> String {
    format!("MATCH (e:{EVENT_LABEL} {{id: $id}}) WITH e ORDER BY id(e) LIMIT 1")
}

/// Bind `$id`, `$title` and `$description` from an event.
pub fn bind_event(query: Query, event: &Event) -> Query {
    query
        .param("id", event.id.as_str())
        .param("title", event.title.as_str())
        .param("description", event.description.as_str())
}

/// Bind `$name` and `$age` from a person.
pub fn bind_person(query: Query, person: &Person) -> Query {
    query
        .param("name", person.name.as_str())
        .param("age", person.age)
}

pub fn event_from_node(node: &Node) -> Event {
    Event {
        id: node.get("id").unwrap_or_default(),
        title: node.get("title").unwrap_or_default(),
        description: node.get("description").unwrap_or_default(),
    }
}

pub fn person_from_node(node: &Node) -> Person {
    Person {
        name: node.get("name").unwrap_or_default(),
        age: node.get("age").unwrap_or_default(),
    }
}

/// Decode one `p {.name, .age}` map projection.
pub fn person_from_map(map: &BoltMap) -> Person {
    Person {
        name: map.get("name").unwrap_or_default(),
        age: map.get("age").unwrap_or_default(),
    }
}

/// Decode a collected list of person projections from `row[key]`.
///
/// Each element is decoded on its own, so a bad property only zeroes
/// that field. Elements that are not maps are skipped.
pub fn attendees_from_row(row: &Row, key: &str) -> Vec<Person> {
    let items: Vec<BoltType> = match row.get(key) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(column = key, error = %e, "Failed to decode attendee list");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| match item {
            BoltType::Map(map) => Some(person_from_map(map)),
            other => {
                tracing::warn!(value = %other, "Skipping non-map attendee");
                None
            }
        })
        .collect()
}
