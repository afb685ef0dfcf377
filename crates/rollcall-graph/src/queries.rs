//! Read operations against the event graph.

use neo4rs::query;

use rollcall_core::{Event, EventListing, RelationshipType};

use crate::client::{GraphClient, GraphError};
use crate::mapper::{
    attendees_from_row, event_from_node, match_first_event, EVENT_LABEL, PERSON_LABEL,
};

impl GraphClient {
    /// List every event joined with the persons that attended it.
    ///
    /// Events without attendees are included with an empty list.
    pub async fn list_events(&self) -> Result<Vec<EventListing>, GraphError> {
        let cypher = format!(
            "MATCH (e:{EVENT_LABEL})
             OPTIONAL MATCH (p:{PERSON_LABEL})-[:{rel}]->(e)
             RETURN e, collect(p {{.name, .age}}) AS attendees
             ORDER BY e.id",
            rel = RelationshipType::Attended.as_str(),
        );

        let rows = self.query_rows(query(&cypher)).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let node: neo4rs::Node = row.get("e").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize event: {e}"))
            })?;
            results.push(EventListing {
                event: event_from_node(&node),
                attendees: attendees_from_row(&row, "attendees"),
            });
        }
        Ok(results)
    }

    /// Find the first event with the given ID.
    pub async fn find_event(&self, id: &str) -> Result<Option<Event>, GraphError> {
        let cypher = format!("{} RETURN e", match_first_event());

        let q = query(&cypher).param("id", id);

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

    /// Count nodes carrying one of the label constants in `mapper`.
    pub async fn count_nodes(&self, label: &'static str) -> Result<i64, GraphError> {
        let cypher = format!("MATCH (n:{label}) RETURN count(n) AS cnt");

        match self.query_one(query(&cypher)).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
