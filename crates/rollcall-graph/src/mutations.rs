//! Write operations for the event graph.
//!
//! Events are matched by their `id` property, which is not unique; every
//! ID-scoped write narrows the match to the same single node that
//! `find_event` reads (see `mapper::match_first_event`).

use neo4rs::query;

use rollcall_core::{Attendance, Event, EventPatch, Person, RelationshipType};

use crate::client::{GraphClient, GraphError};
use crate::mapper::{
    bind_event, bind_person, event_from_node, match_first_event, person_from_node, EVENT_LABEL,
    PERSON_LABEL,
};

impl GraphClient {
    // ── Creates ──────────────────────────────────────────────────

    /// Create an Event node and return it as stored.
    pub async fn create_event(&self, event: &Event) -> Result<Event, GraphError> {
        let cypher = format!(
            "CREATE (e:{EVENT_LABEL} {{id: $id, title: $title, description: $description}})
             RETURN e"
        );

        let row = self
            .query_one(bind_event(query(&cypher), event))
            .await?
            .ok_or_else(|| GraphError::Serialization("CREATE returned no rows".to_string()))?;
        let node: neo4rs::Node = row.get("e").map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize event: {e}"))
        })?;
        Ok(event_from_node(&node))
    }

    /// Create a Person node and return it as stored.
    pub async fn create_person(&self, person: &Person) -> Result<Person, GraphError> {
        let cypher = format!(
            "CREATE (p:{PERSON_LABEL} {{name: $name, age: $age}})
             RETURN p"
        );

        let row = self
            .query_one(bind_person(query(&cypher), person))
            .await?
            .ok_or_else(|| GraphError::Serialization("CREATE returned no rows".to_string()))?;
        let node: neo4rs::Node = row.get("p").map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize person: {e}"))
        })?;
        Ok(person_from_node(&node))
    }

    /// Create a Person, an Event, and the ATTENDED edge between them.
    pub async fn create_attendance(&self, attendance: &Attendance) -> Result<(), GraphError> {
        let cypher = format!(
            "CREATE (p:{PERSON_LABEL} {{name: $name, age: $age}})
                    -[:{rel}]->
                    (e:{EVENT_LABEL} {{id: $id, title: $title, description: $description}})",
            rel = RelationshipType::Attended.as_str(),
        );

        let q = bind_person(query(&cypher), &attendance.person);
        self.run(bind_event(q, &attendance.event)).await
    }

    // ── Updates ──────────────────────────────────────────────────

    /// Overwrite title and description of the first event with the given ID.
    ///
    /// Returns `None` when no event matches.
    pub async fn update_event(
        &self,
        id: &str,
        patch: &EventPatch,
    ) -> Result<Option<Event>, GraphError> {
        let cypher = format!(
            "{}
             SET e.title = $title, e.description = $description
             RETURN e",
            match_first_event()
        );

        let q = query(&cypher)
            .param("id", id)
            .param("title", patch.title.as_str())
            .param("description", patch.description.as_str());

        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("e").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize event: {e}"))
                })?;
                Ok(Some(event_from_node(&node)))
            }
            None => Ok(None),
        }
    }

    // ── Deletes ──────────────────────────────────────────────────

    /// Delete the first event with the given ID and its relationships.
    ///
    /// Returns whether a node was deleted.
    pub async fn delete_event(&self, id: &str) -> Result<bool, GraphError> {
        let cypher = format!(
            "{}
             DETACH DELETE e
             RETURN count(*) AS deleted",
            match_first_event()
        );

        let q = query(&cypher).param("id", id);

        let deleted = match self.query_one(q).await? {
            Some(row) => row.get::<i64>("deleted").unwrap_or(0),
            None => 0,
        };
        Ok(deleted > 0)
    }

    /// Delete every node and relationship in the database.
    pub async fn clear(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }
}
