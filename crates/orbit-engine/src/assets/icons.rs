use std::collections::HashMap;

/// Load state of one icon.
#[derive(Debug, Clone, PartialEq)]
pub enum IconState<I> {
    Loading,
    Ready(I),
    /// Never retried; the item is drawn without its icon.
    Failed,
}

/// Icons keyed by orbit item name.
///
/// The loader owns all writes. The frame routine only asks [`IconCache::ready`],
/// so a frame never starts or waits on a load.
#[derive(Debug, Clone)]
pub struct IconCache<I> {
    entries: HashMap<String, IconState<I>>,
}

impl<I> IconCache<I> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a load for `name`. Returns false if one was already registered,
    /// in which case the caller must not start a second load.
    pub fn begin(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), IconState::Loading);
        true
    }

    /// Store a decoded icon.
    pub fn mark_ready(&mut self, name: &str, icon: I) {
        self.entries.insert(name.to_string(), IconState::Ready(icon));
    }

    pub fn mark_failed(&mut self, name: &str) {
        self.entries.insert(name.to_string(), IconState::Failed);
    }

    /// The icon for `name` if it finished loading.
    pub fn ready(&self, name: &str) -> Option<&I> {
        match self.entries.get(name) {
            Some(IconState::Ready(icon)) => Some(icon),
            _ => None,
        }
    }

    pub fn state(&self, name: &str) -> Option<&IconState<I>> {
        self.entries.get(name)
    }

    /// Names still waiting on their load.
    pub fn loading(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, state)| matches!(state, IconState::Loading))
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I> Default for IconCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_once_per_name() {
        let mut cache: IconCache<u32> = IconCache::new();
        assert!(cache.begin("Rust"));
        assert!(!cache.begin("Rust"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.loading().collect::<Vec<_>>(), ["Rust"]);
    }

    #[test]
    fn only_ready_icons_are_visible() {
        let mut cache = IconCache::new();
        cache.begin("Git");
        cache.begin("AWS");
        assert_eq!(cache.ready("Git"), None);

        cache.mark_ready("Git", 7u32);
        cache.mark_failed("AWS");
        assert_eq!(cache.ready("Git"), Some(&7));
        assert_eq!(cache.ready("AWS"), None);
        assert_eq!(cache.state("AWS"), Some(&IconState::Failed));
        assert_eq!(cache.loading().count(), 0);
    }

    #[test]
    fn failed_icons_are_not_restarted() {
        let mut cache: IconCache<u32> = IconCache::new();
        cache.begin("Docker");
        cache.mark_failed("Docker");
        assert!(!cache.begin("Docker"));
    }

    #[test]
    fn unknown_returns_none() {
        let cache: IconCache<u32> = IconCache::new();
        assert!(cache.ready("nonexistent").is_none());
        assert!(cache.is_empty());
    }
}
