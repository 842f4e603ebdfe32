use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::env::Environment;

/// Every distinct variable name referenced by a scan, with its value
/// when the environment had one.
///
/// Names are kept sorted so the checklist prints in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableRegistry {
    entries: BTreeMap<String, Option<String>>,
}

impl VariableRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `name`, looking it up in `env` only the first time it is
    /// seen. Returns `true` when the name was new.
    pub fn resolve_with<E: Environment + ?Sized>(&mut self, name: &str, env: &E) -> bool {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let value = env.lookup(name);
                tracing::trace!(name, resolved = value.is_some(), "resolved variable");
                slot.insert(value);
                true
            }
        }
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn is_resolved(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Names that have no value, in sorted order.
    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.entries.values().filter(|value| value.is_some()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checklist view: `(name, resolved)` for every registered name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.is_some()))
    }
}
