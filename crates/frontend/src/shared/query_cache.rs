//! Explicit cache behind the option hooks. Entries are keyed by resource
//! name plus the dependency value the rows were fetched under, and carry a
//! version that write paths bump to push mounted hooks into a refetch.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::shared::options::OptionPair;

/// Value a dependent fetch was parameterized by (a parent entity id).
pub type DependencyKey = i64;

/// Cache slot address: resource name plus the dependency the rows belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: &'static str,
    pub dep: Option<DependencyKey>,
}

impl QueryKey {
    pub fn of(resource: &'static str) -> Self {
        Self {
            resource,
            dep: None,
        }
    }

    pub fn dependent(resource: &'static str, dep: DependencyKey) -> Self {
        Self {
            resource,
            dep: Some(dep),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    options: Option<Vec<OptionPair>>,
    version: u64,
}

/// The cache itself. Lives behind a signal (see [`QueryCacheHandle`]) so
/// that invalidation wakes every hook that read from it.
#[derive(Debug, Default)]
pub struct QueryCache {
    slots: HashMap<QueryKey, Slot>,
}

impl QueryCache {
    pub fn lookup(&self, key: &QueryKey) -> Option<&[OptionPair]> {
        self.slots.get(key).and_then(|slot| slot.options.as_deref())
    }

    /// Slot version, bumped on every invalidation. Missing slots are
    /// version 0.
    pub fn version(&self, key: &QueryKey) -> u64 {
        self.slots.get(key).map(|slot| slot.version).unwrap_or(0)
    }

    pub fn store(&mut self, key: QueryKey, options: Vec<OptionPair>) {
        let slot = self.slots.entry(key).or_default();
        slot.options = Some(options);
    }

    /// Drop cached rows for `resource`. With a dependency value only that
    /// slot is touched; without one, every slot of the resource is.
    pub fn invalidate(&mut self, resource: &str, dep: Option<DependencyKey>) {
        for (key, slot) in self.slots.iter_mut() {
            if key.resource != resource {
                continue;
            }
            if let Some(dep) = dep {
                if key.dep != Some(dep) {
                    continue;
                }
            }
            slot.options = None;
            slot.version += 1;
        }
    }
}

/// Copyable handle to the cache signal, provided once at the application
/// root.
#[derive(Clone, Copy)]
pub struct QueryCacheHandle(RwSignal<QueryCache>);

impl QueryCacheHandle {
    pub fn new() -> Self {
        Self(RwSignal::new(QueryCache::default()))
    }

    /// Read through the signal, tracking it when called from a reactive
    /// scope.
    pub fn with<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> R {
        self.0.with(f)
    }

    pub fn store(&self, key: QueryKey, options: Vec<OptionPair>) {
        self.0.update(|cache| cache.store(key, options));
    }

    pub fn invalidate(&self, resource: &str, dep: Option<DependencyKey>) {
        self.0.update(|cache| cache.invalidate(resource, dep));
    }
}

impl Default for QueryCacheHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCacheHandle {
    use_context::<QueryCacheHandle>().expect("QueryCacheHandle not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::OptionValue;

    fn pair(label: &str, id: i64) -> OptionPair {
        OptionPair::new(label, OptionValue::Num(id))
    }

    #[test]
    fn lookup_misses_until_stored() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of("categories");
        assert!(cache.lookup(&key).is_none());

        cache.store(key.clone(), vec![pair("Grocery", 1)]);
        assert_eq!(cache.lookup(&key).map(|o| o.len()), Some(1));
    }

    #[test]
    fn invalidate_with_dependency_touches_only_that_slot() {
        let mut cache = QueryCache::default();
        cache.store(QueryKey::dependent("sub-categories", 1), vec![pair("Rice", 10)]);
        cache.store(QueryKey::dependent("sub-categories", 2), vec![pair("Oil", 20)]);

        cache.invalidate("sub-categories", Some(1));

        assert!(cache.lookup(&QueryKey::dependent("sub-categories", 1)).is_none());
        assert!(cache.lookup(&QueryKey::dependent("sub-categories", 2)).is_some());
        assert_eq!(cache.version(&QueryKey::dependent("sub-categories", 1)), 1);
        assert_eq!(cache.version(&QueryKey::dependent("sub-categories", 2)), 0);
    }

    #[test]
    fn invalidate_without_dependency_sweeps_the_resource() {
        let mut cache = QueryCache::default();
        cache.store(QueryKey::dependent("sub-categories", 1), vec![pair("Rice", 10)]);
        cache.store(QueryKey::dependent("sub-categories", 2), vec![pair("Oil", 20)]);
        cache.store(QueryKey::of("categories"), vec![pair("Grocery", 1)]);

        cache.invalidate("sub-categories", None);

        assert!(cache.lookup(&QueryKey::dependent("sub-categories", 1)).is_none());
        assert!(cache.lookup(&QueryKey::dependent("sub-categories", 2)).is_none());
        assert!(cache.lookup(&QueryKey::of("categories")).is_some());
    }

    #[test]
    fn versions_accumulate_across_invalidations() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of("brands");
        cache.store(key.clone(), vec![pair("Acme", 1)]);
        cache.invalidate("brands", None);
        cache.store(key.clone(), vec![pair("Acme", 1)]);
        cache.invalidate("brands", None);
        assert_eq!(cache.version(&key), 2);
    }
}
