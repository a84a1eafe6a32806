use std::collections::HashMap;

use serde::Deserialize;

use crate::departure::Departure;

// State attributes a transport stop sensor publishes for its entity.
// `departures` can be missing entirely while the sensor is still warming up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopAttributes {
    pub friendly_name: String,
    #[serde(default)]
    pub departures: Vec<Departure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityState {
    pub attributes: StopAttributes,
}

impl EntityState {
    pub fn new(friendly_name: impl Into<String>, departures: Vec<Departure>) -> Self {
        Self {
            attributes: StopAttributes {
                friendly_name: friendly_name.into(),
                departures,
            },
        }
    }
}

/// Snapshot of the host's state store, keyed by entity id.
/// Read-only from the card's perspective; a configured id may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    states: HashMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, state: EntityState) {
        self.states.insert(entity_id.into(), state);
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parses_host_state_json() {
        let json = r##"{
            "sensor.warschauer_strasse": {
                "attributes": {
                    "friendly_name": "S+U Warschauer Str.",
                    "departures": [
                        {
                            "line_name": "U1",
                            "color": "#7dad4c",
                            "direction": "Uhlandstr.",
                            "time": "14:07"
                        }
                    ]
                }
            }
        }"##;

        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        let entity = snapshot.get("sensor.warschauer_strasse").unwrap();
        assert_eq!(entity.attributes.friendly_name, "S+U Warschauer Str.");
        assert_eq!(entity.attributes.departures.len(), 1);
        // `cancelled` omitted by the sensor defaults to false
        assert!(!entity.attributes.departures[0].cancelled);
    }

    #[test]
    fn test_snapshot_allows_missing_departures() {
        let json = r#"{
            "sensor.stop": { "attributes": { "friendly_name": "Stop" } }
        }"#;

        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        let entity = snapshot.get("sensor.stop").unwrap();
        assert!(entity.attributes.departures.is_empty());
    }
}
