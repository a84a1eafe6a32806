use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::config::CardConfig;
use crate::departure::Departure;
use crate::dom::ShadowRoot;
use crate::state::StateSnapshot;

/// Requested display height in host layout units.
pub const CARD_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A configured stop id has no entry in the current state snapshot.
    /// Surfaces to the host unhandled; the host shows its own error UI.
    #[error("entity state unavailable: {0}")]
    EntityUnavailable(String),
}

/// What to do when a configured stop id is missing from the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingStopPolicy {
    /// Abort the whole render, committing nothing.
    #[default]
    FailFast,
    /// Drop the missing stop and keep rendering the others.
    SkipMissing,
}

/// The timetable card widget.
///
/// Lifecycle has exactly two states: unconfigured (after construction,
/// before the first [`set_config`](Self::set_config)) and configured.
/// The host serializes all calls; nothing here is thread-aware.
#[derive(Debug, Default)]
pub struct TimetableCard {
    config: Option<CardConfig>,
    shadow: Option<ShadowRoot>,
    missing_stop_policy: MissingStopPolicy,
}

impl TimetableCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_stop_policy(policy: MissingStopPolicy) -> Self {
        Self {
            missing_stop_policy: policy,
            ..Self::default()
        }
    }

    /// Configuration handler, invoked by the host once per configuration
    /// change. Discards the previous shadow subtree, builds a fresh one
    /// (style block plus empty container) and stores the configuration
    /// for every subsequent render. No field validation happens here;
    /// absent or malformed optional fields fall back to defaults at
    /// render time.
    pub fn set_config(&mut self, config: CardConfig) {
        info!(stops = config.stop_ids().len(), title = ?config.title, "configuring card");
        self.shadow = Some(ShadowRoot::new(config.title.clone()));
        self.config = Some(config);
    }

    /// Render handler, invoked by the host on every state tick.
    ///
    /// Builds the markup for all configured stops in order and commits it
    /// to the container in a single write, so a failed render leaves the
    /// previously committed content untouched.
    ///
    /// # Panics
    ///
    /// Rendering an unconfigured card is a contract violation and panics.
    #[instrument(skip(self, snapshot))]
    pub fn render(&mut self, snapshot: &StateSnapshot) -> Result<(), CardError> {
        let policy = self.missing_stop_policy;
        let (config, shadow) = match (&self.config, &mut self.shadow) {
            (Some(config), Some(shadow)) => (config, shadow),
            _ => panic!("render invoked on an unconfigured card"),
        };

        let max_entries = config.max_entries();
        let show_stop_name = config.show_stop_name();
        let show_cancelled = config.show_cancelled();

        let mut content = String::new();
        let mut rows_total = 0;

        for entity_id in config.stop_ids() {
            let Some(entity) = snapshot.get(entity_id) else {
                match policy {
                    MissingStopPolicy::FailFast => {
                        warn!(entity_id, "entity state unavailable, aborting render");
                        return Err(CardError::EntityUnavailable(entity_id.to_string()));
                    }
                    MissingStopPolicy::SkipMissing => {
                        warn!(entity_id, "entity state unavailable, skipping stop");
                        continue;
                    }
                }
            };

            if show_stop_name {
                content.push_str(&format!(
                    "<div class=\"stop\">{}</div>",
                    entity.attributes.friendly_name
                ));
            }

            // First max_entries departures in sensor order; rows hidden by
            // show_cancelled are skipped outright, not padded back.
            let rows: Vec<String> = entity
                .attributes
                .departures
                .iter()
                .take(max_entries)
                .filter(|departure| !departure.cancelled || show_cancelled)
                .map(departure_row)
                .collect();
            rows_total += rows.len();

            content.push_str("<div class=\"departures\">");
            content.push_str(&rows.join("\n"));
            content.push_str("</div>");
        }

        shadow.set_content(content);
        info!(rows = rows_total, "render complete");
        Ok(())
    }

    /// Size reporter. Static contract: the count of stops and departures
    /// on screen does not change the answer.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    pub fn shadow_root(&self) -> Option<&ShadowRoot> {
        self.shadow.as_ref()
    }
}

// One departure row: colored line badge, direction, time. A cancelled row
// that is still shown gets the struck-through class, same structure.
// Strings are interpolated as-is; the data comes from the host's own
// sensor and is trusted not to carry markup.
fn departure_row(departure: &Departure) -> String {
    let class = if departure.cancelled {
        "departure-cancelled"
    } else {
        "departure"
    };
    let mut row = String::new();
    row.push_str(&format!("<div class=\"{class}\">"));
    row.push_str(&format!(
        "<div class=\"line\"><div class=\"line-icon\" style=\"background-color: {}\">{}</div></div>",
        departure.color, departure.line_name
    ));
    row.push_str(&format!(
        "<div class=\"direction\">{}</div>",
        departure.direction
    ));
    row.push_str(&format!("<div class=\"time\">{}</div>", departure.time));
    row.push_str("</div>");
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departure_row_markup() {
        let departure = Departure::new("U1", "#7dad4c", "Uhlandstr.", "14:07", false);
        let row = departure_row(&departure);
        assert!(row.starts_with("<div class=\"departure\">"));
        assert!(row.contains("background-color: #7dad4c"));
        assert!(row.contains("<div class=\"direction\">Uhlandstr.</div>"));
        assert!(row.contains("<div class=\"time\">14:07</div>"));
    }

    #[test]
    fn test_cancelled_row_keeps_structure() {
        let departure = Departure::new("S5", "#eb7405", "Strausberg Nord", "14:09", true);
        let row = departure_row(&departure);
        assert!(row.starts_with("<div class=\"departure-cancelled\">"));
        assert!(row.contains("class=\"line-icon\""));
        assert!(row.contains("<div class=\"time\">14:09</div>"));
    }
}
