//! In-memory entity collections using DashMap

use dashmap::DashMap;
use linkpage_core::{AnalyticsEvent, SocialLink, Tip, User};

/// A keyed collection of one entity type. Insertion order is not kept.
pub struct Collection<T> {
    entries: DashMap<String, T>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get an entity by id
    pub fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Insert or replace an entity
    pub fn put(&self, id: String, entity: T) {
        self.entries.insert(id, entity);
    }

    /// Remove an entity, reporting whether it was present
    pub fn delete(&self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Entities matching `predicate`, in no particular order.
    ///
    /// Each item is cloned out as the iterator advances. Collect before
    /// writing to the same collection: the iterator holds shard read locks.
    pub fn list<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = T> + 'a
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.entries
            .iter()
            .filter(move |entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The four entity collections. Lives for the whole process; nothing is
/// persisted.
#[derive(Default)]
pub struct EntityStore {
    pub users: Collection<User>,
    pub social_links: Collection<SocialLink>,
    pub tips: Collection<Tip>,
    pub analytics: Collection<AnalyticsEvent>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let collection: Collection<u32> = Collection::new();

        collection.put("a".to_string(), 1);
        assert_eq!(collection.get("a"), Some(1));
        assert_eq!(collection.get("missing"), None);

        // Upsert replaces
        collection.put("a".to_string(), 2);
        assert_eq!(collection.get("a"), Some(2));
        assert_eq!(collection.len(), 1);

        assert!(collection.delete("a"));
        assert!(!collection.delete("a"));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_list_filters_and_restarts() {
        let collection: Collection<u32> = Collection::new();
        for i in 0..10 {
            collection.put(format!("k{i}"), i);
        }

        let mut evens: Vec<u32> = collection.list(|v| v % 2 == 0).collect();
        evens.sort();
        assert_eq!(evens, vec![0, 2, 4, 6, 8]);

        // A second pass sees the same data
        assert_eq!(collection.list(|v| v % 2 == 0).count(), 5);
        assert_eq!(collection.list(|_| true).count(), 10);
    }

    #[test]
    fn test_collections_are_independent() {
        let store = EntityStore::new();
        assert!(store.users.is_empty());
        assert!(store.social_links.is_empty());
        assert!(store.tips.is_empty());
        assert!(store.analytics.is_empty());
        assert!(!store.users.contains("default-user"));
    }
}
