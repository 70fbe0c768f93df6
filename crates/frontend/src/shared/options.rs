//! Option lists for selects, plus the hooks that load them.
//!
//! Two hook flavours: [`use_option_list`] for parentless resources and
//! [`use_dependent_options`] for resources filtered by a parent id. Both
//! read through the option cache, and both discard responses that were
//! overtaken by a newer fetch or by the dependency being cleared.

use std::future::Future;

use leptos::prelude::*;

use crate::shared::http::ApiError;
use crate::shared::query_cache::{use_query_cache, DependencyKey, QueryKey};

/// Value carried by a select entry. Ids in practice; free-form strings are
/// allowed for static lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Num(i64),
    Text(String),
}

impl OptionValue {
    pub fn as_num(&self) -> Option<i64> {
        match self {
            OptionValue::Num(n) => Some(*n),
            OptionValue::Text(_) => None,
        }
    }

    /// String form used for the `value` attribute of `<option>` elements.
    pub fn as_attr(&self) -> String {
        match self {
            OptionValue::Num(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Num(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// Label/value pair as selects consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPair {
    pub label: String,
    pub value: OptionValue,
}

impl OptionPair {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Implemented by records that can feed a select.
pub trait OptionItem {
    fn option_label(&self) -> String;
    fn option_value(&self) -> OptionValue;
}

/// Project fetched records into select options, keeping the backend's order.
pub fn project_options<T: OptionItem>(items: &[T]) -> Vec<OptionPair> {
    items
        .iter()
        .map(|item| OptionPair {
            label: item.option_label(),
            value: item.option_value(),
        })
        .collect()
}

/// Monotonic fetch generation. Every run of a hook's effect advances it; a
/// response holding an older ticket is stale and must be dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchEpoch(u64);

impl FetchEpoch {
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// What a hook hands to its consumers.
#[derive(Clone, Copy)]
pub struct OptionsHandle {
    pub options: Signal<Vec<OptionPair>>,
    pub is_loading: Signal<bool>,
    pub is_error: Signal<bool>,
    /// Reload from the backend, bypassing the cache.
    pub refetch: Callback<()>,
}

/// Options for a resource without a parent (categories, brands, groups).
///
/// The first mount fetches and fills the cache; later mounts commit the
/// cached rows synchronously. A write through the resource's gateway
/// invalidates the cache entry, which re-runs the effect and refetches.
pub fn use_option_list<F, Fut>(resource: &'static str, fetch: F) -> OptionsHandle
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<OptionPair>, ApiError>> + 'static,
{
    let cache = use_query_cache();
    let options = RwSignal::new(Vec::new());
    let is_loading = RwSignal::new(false);
    let is_error = RwSignal::new(false);
    let epoch = StoredValue::new(FetchEpoch::default());
    let force = RwSignal::new(0u64);
    let seen_force = StoredValue::new(0u64);

    Effect::new(move |_| {
        let tick = force.get();
        let forced = tick != seen_force.get_value();
        seen_force.set_value(tick);

        let key = QueryKey::of(resource);
        let cached = cache.with(|cache| cache.lookup(&key).map(<[OptionPair]>::to_vec));
        let ticket = advance(&epoch);

        if !forced {
            if let Some(hit) = cached {
                options.set(hit);
                is_loading.set(false);
                is_error.set(false);
                return;
            }
        }

        is_loading.set(true);
        is_error.set(false);
        let fut = fetch();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fut.await;
            if !epoch.with_value(|epoch| epoch.is_current(ticket)) {
                return;
            }
            match result {
                Ok(list) => {
                    cache.store(QueryKey::of(resource), list.clone());
                    options.set(list);
                    is_loading.set(false);
                }
                Err(err) => {
                    log::warn!("Loading {} options failed: {}", resource, err);
                    options.set(Vec::new());
                    is_error.set(true);
                    is_loading.set(false);
                }
            }
        });
    });

    OptionsHandle {
        options: options.into(),
        is_loading: is_loading.into(),
        is_error: is_error.into(),
        refetch: Callback::new(move |_| force.update(|n| *n += 1)),
    }
}

/// Options filtered by a parent id (sub-categories under a category,
/// variants under a product).
///
/// While the dependency is absent the options are empty and nothing is
/// fetched. When the dependency changes, any in-flight response for the
/// previous value is discarded rather than committed.
pub fn use_dependent_options<F, Fut>(
    resource: &'static str,
    dep: Signal<Option<DependencyKey>>,
    fetch: F,
) -> OptionsHandle
where
    F: Fn(DependencyKey) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<OptionPair>, ApiError>> + 'static,
{
    let cache = use_query_cache();
    let options = RwSignal::new(Vec::new());
    let is_loading = RwSignal::new(false);
    let is_error = RwSignal::new(false);
    let epoch = StoredValue::new(FetchEpoch::default());
    let force = RwSignal::new(0u64);
    let seen_force = StoredValue::new(0u64);

    Effect::new(move |_| {
        let tick = force.get();
        let forced = tick != seen_force.get_value();
        seen_force.set_value(tick);

        // Every run supersedes whatever was in flight.
        let ticket = advance(&epoch);

        let Some(dep_key) = dep.get() else {
            options.set(Vec::new());
            is_loading.set(false);
            is_error.set(false);
            return;
        };

        let key = QueryKey::dependent(resource, dep_key);
        let cached = cache.with(|cache| cache.lookup(&key).map(<[OptionPair]>::to_vec));
        if !forced {
            if let Some(hit) = cached {
                options.set(hit);
                is_loading.set(false);
                is_error.set(false);
                return;
            }
        }

        is_loading.set(true);
        is_error.set(false);
        let fut = fetch(dep_key);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fut.await;
            if !epoch.with_value(|epoch| epoch.is_current(ticket)) {
                return;
            }
            match result {
                Ok(list) => {
                    cache.store(QueryKey::dependent(resource, dep_key), list.clone());
                    options.set(list);
                    is_loading.set(false);
                }
                Err(err) => {
                    log::warn!(
                        "Loading {} options for dependency {} failed: {}",
                        resource,
                        dep_key,
                        err
                    );
                    options.set(Vec::new());
                    is_error.set(true);
                    is_loading.set(false);
                }
            }
        });
    });

    OptionsHandle {
        options: options.into(),
        is_loading: is_loading.into(),
        is_error: is_error.into(),
        refetch: Callback::new(move |_| force.update(|n| *n += 1)),
    }
}

fn advance(epoch: &StoredValue<FetchEpoch>) -> u64 {
    let mut ticket = 0;
    epoch.update_value(|epoch| ticket = epoch.advance());
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        name: &'static str,
    }

    impl OptionItem for Row {
        fn option_label(&self) -> String {
            self.name.to_string()
        }

        fn option_value(&self) -> OptionValue {
            OptionValue::Num(self.id)
        }
    }

    #[test]
    fn projection_keeps_backend_order() {
        let rows = [
            Row { id: 7, name: "Rice" },
            Row { id: 3, name: "Oil" },
        ];
        let options = project_options(&rows);
        assert_eq!(options[0], OptionPair::new("Rice", 7i64));
        assert_eq!(options[1].value.as_num(), Some(3));
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut epoch = FetchEpoch::default();
        let first = epoch.advance();
        let second = epoch.advance();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn clearing_the_dependency_supersedes_in_flight_work() {
        let mut epoch = FetchEpoch::default();
        let ticket = epoch.advance();
        // The dependency was cleared before the response landed.
        epoch.advance();
        assert!(!epoch.is_current(ticket));
    }

    #[test]
    fn option_values_round_trip_through_attrs() {
        assert_eq!(OptionValue::Num(42).as_attr(), "42");
        assert_eq!(OptionValue::from("bulk").as_attr(), "bulk");
        assert_eq!(OptionValue::from("bulk").as_num(), None);
    }
}
