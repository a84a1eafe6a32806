use std::collections::HashMap;

use tracing::{info, warn};

use crate::card::TimetableCard;

/// Tag name the timetable card registers under.
pub const TAG_NAME: &str = "transport-timetable-card";

type CardFactory = fn() -> TimetableCard;

/// Host-side component registry mapping tag names to widget constructors.
#[derive(Debug, Default)]
pub struct CardRegistry {
    factories: HashMap<String, CardFactory>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a custom element. Redefining an already-registered tag is
    /// a guarded no-op returning false, in case the hosting environment
    /// loads the module twice.
    pub fn define(&mut self, tag: &str, factory: CardFactory) -> bool {
        if self.factories.contains_key(tag) {
            warn!(tag, "tag already registered, ignoring");
            return false;
        }
        self.factories.insert(tag.to_string(), factory);
        info!(tag, "registered custom element");
        true
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Instantiates a fresh (unconfigured) widget for a registered tag.
    pub fn create(&self, tag: &str) -> Option<TimetableCard> {
        self.factories.get(tag).map(|factory| factory())
    }
}

/// Load-time setup: registers the timetable card under its fixed tag name.
pub fn register(registry: &mut CardRegistry) -> bool {
    registry.define(TAG_NAME, TimetableCard::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_create() {
        let mut registry = CardRegistry::new();
        assert!(register(&mut registry));
        assert!(registry.is_registered(TAG_NAME));

        let card = registry.create(TAG_NAME).unwrap();
        // Fresh instances start unconfigured
        assert!(card.shadow_root().is_none());
    }

    #[test]
    fn test_double_registration_is_a_noop() {
        let mut registry = CardRegistry::new();
        assert!(register(&mut registry));
        assert!(!register(&mut registry));
    }

    #[test]
    fn test_unknown_tag_creates_nothing() {
        let registry = CardRegistry::new();
        assert!(registry.create(TAG_NAME).is_none());
    }
}
