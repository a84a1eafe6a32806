use serde::Deserialize;

pub const DEFAULT_MAX_ENTRIES: u32 = 10;

/// Card configuration as supplied by the dashboard user.
///
/// Every field is optional and resolved lazily through the accessor
/// methods; nothing is validated up front. Booleans are three-state on
/// purpose: absent defaults to true, an explicit `false` stays false.
/// Unknown extra keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardConfig {
    pub entity: Option<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    pub max_entries: Option<u32>,
    pub show_stop_name: Option<bool>,
    pub show_cancelled: Option<bool>,
    pub title: Option<String>,
}

impl CardConfig {
    // Absent defaults to 10; an explicit value is honored as-is, zero included
    pub fn max_entries(&self) -> usize {
        self.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES) as usize
    }

    pub fn show_stop_name(&self) -> bool {
        self.show_stop_name.unwrap_or(true)
    }

    pub fn show_cancelled(&self) -> bool {
        self.show_cancelled.unwrap_or(true)
    }

    /// Effective stop list: `entity` wins over `entities` and is wrapped
    /// into a single-element list; both absent means an empty list.
    pub fn stop_ids(&self) -> Vec<&str> {
        match &self.entity {
            Some(entity) => vec![entity.as_str()],
            None => self.entities.iter().map(String::as_str).collect(),
        }
    }
}
