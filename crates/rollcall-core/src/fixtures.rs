//! Fixed data used to seed a store.

use crate::types::{Attendance, Event, Person};

/// The event an in-memory store starts with when preloading is enabled.
pub fn welcome_event() -> Event {
    Event {
        id: "1".to_string(),
        title: "Introduction to Golang".to_string(),
        description: "Come join us for a chance to learn how golang works and get to eventually try it out"
            .to_string(),
    }
}

/// The two Person → Event pairs written by `POST /seeds`.
pub fn seed_attendances() -> Vec<Attendance> {
    vec![
        Attendance {
            person: Person {
                name: "Alice".to_string(),
                age: 34,
            },
            event: welcome_event(),
        },
        Attendance {
            person: Person {
                name: "Bob".to_string(),
                age: 27,
            },
            event: Event {
                id: "2".to_string(),
                title: "Graph Modelling with Neo4j".to_string(),
                description: "Nodes, relationships and a first look at Cypher".to_string(),
            },
        },
    ]
}
