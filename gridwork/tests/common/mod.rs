#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use gridwork::{Column, FilterOption, PageState, SubscriptionId, TableEngine};

#[derive(Default)]
struct Inner {
    columns: Vec<Column>,
    page_index: usize,
    page_size: usize,
    page_count: usize,
    filters: HashMap<String, Vec<String>>,
    global_filter: Option<String>,
    filter_options: HashMap<String, Vec<FilterOption>>,
    filter_option_writes: HashMap<String, usize>,
    facets: HashMap<String, HashMap<String, usize>>,
    selection: HashMap<String, bool>,
    selected_keys: Vec<String>,
    page_keys: Vec<String>,
    page_index_writes: usize,
}

/// Scriptable engine double. Every trait read reflects whatever the
/// test last scripted; writes are recorded for assertions.
pub struct StubEngine {
    inner: RwLock<Inner>,
    subscribers: RwLock<Vec<(SubscriptionId, Box<dyn Fn()>)>>,
    next_subscription: AtomicU64,
    supports_subscriptions: bool,
}

impl StubEngine {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                page_size: 10,
                page_count: 1,
                ..Inner::default()
            }),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            supports_subscriptions: false,
        }
    }

    pub fn with_subscriptions() -> Self {
        Self {
            supports_subscriptions: true,
            ..Self::new()
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap()
    }

    // Scripting helpers.

    pub fn script_columns(&self, columns: Vec<Column>) {
        self.write().columns = columns;
    }

    pub fn script_page(&self, page_index: usize, page_count: usize) {
        let mut inner = self.write();
        inner.page_index = page_index;
        inner.page_count = page_count;
    }

    pub fn script_selection(&self, entries: &[(&str, bool)]) {
        self.write().selection = entries
            .iter()
            .map(|(key, selected)| (key.to_string(), *selected))
            .collect();
    }

    pub fn script_selected_keys(&self, keys: &[&str]) {
        self.write().selected_keys = keys.iter().map(|k| k.to_string()).collect();
    }

    pub fn script_page_keys(&self, keys: &[&str]) {
        self.write().page_keys = keys.iter().map(|k| k.to_string()).collect();
    }

    pub fn script_facet(&self, column_id: &str, value: &str, count: usize) {
        self.write()
            .facets
            .entry(column_id.to_string())
            .or_default()
            .insert(value.to_string(), count);
    }

    /// Fire every registered selection subscriber.
    pub fn notify_selection(&self) {
        for (_, callback) in self.subscribers.read().unwrap().iter() {
            callback();
        }
    }

    // Recorded-write accessors.

    pub fn global_filter(&self) -> Option<String> {
        self.read().global_filter.clone()
    }

    pub fn filter_option_writes(&self, column_id: &str) -> usize {
        self.read()
            .filter_option_writes
            .get(column_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn page_index_writes(&self) -> usize {
        self.read().page_index_writes
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap().len()
    }

    pub fn column_visible(&self, column_id: &str) -> Option<bool> {
        self.read()
            .columns
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.visible)
    }
}

impl TableEngine for StubEngine {
    fn page_state(&self) -> PageState {
        let inner = self.read();
        PageState {
            page_index: inner.page_index,
            page_size: inner.page_size,
        }
    }

    fn set_page_index(&self, page_index: usize) {
        let mut inner = self.write();
        inner.page_index = page_index;
        inner.page_index_writes += 1;
    }

    fn set_page_size(&self, page_size: usize) {
        self.write().page_size = page_size;
    }

    fn page_count(&self) -> usize {
        self.read().page_count
    }

    fn can_previous_page(&self) -> bool {
        self.read().page_index > 0
    }

    fn can_next_page(&self) -> bool {
        let inner = self.read();
        inner.page_index + 1 < inner.page_count
    }

    fn columns(&self) -> Vec<Column> {
        self.read().columns.clone()
    }

    fn set_column_visibility(&self, column_id: &str, visible: bool) {
        if let Some(column) = self.write().columns.iter_mut().find(|c| c.id == column_id) {
            column.visible = visible;
        }
    }

    fn filter_value(&self, column_id: &str) -> Option<Vec<String>> {
        self.read().filters.get(column_id).cloned()
    }

    fn set_filter_value(&self, column_id: &str, value: Option<Vec<String>>) {
        let mut inner = self.write();
        match value {
            Some(values) => {
                inner.filters.insert(column_id.to_string(), values);
            }
            None => {
                inner.filters.remove(column_id);
            }
        }
    }

    fn set_global_filter(&self, value: Option<String>) {
        self.write().global_filter = value;
    }

    fn faceted_unique_values(&self, column_id: &str) -> HashMap<String, usize> {
        self.read().facets.get(column_id).cloned().unwrap_or_default()
    }

    fn filter_options(&self, column_id: &str) -> Option<Vec<FilterOption>> {
        self.read().filter_options.get(column_id).cloned()
    }

    fn set_filter_options(&self, column_id: &str, options: Vec<FilterOption>) {
        let mut inner = self.write();
        inner.filter_options.insert(column_id.to_string(), options);
        *inner
            .filter_option_writes
            .entry(column_id.to_string())
            .or_insert(0) += 1;
    }

    fn selection_state(&self) -> HashMap<String, bool> {
        self.read().selection.clone()
    }

    fn selected_row_keys(&self) -> Vec<String> {
        self.read().selected_keys.clone()
    }

    fn page_row_keys(&self) -> Vec<String> {
        self.read().page_keys.clone()
    }

    fn subscribe_selection(&self, callback: Box<dyn Fn()>) -> Option<SubscriptionId> {
        if !self.supports_subscriptions {
            return None;
        }
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers.write().unwrap().push((id, callback));
        Some(id)
    }

    fn unsubscribe_selection(&self, id: SubscriptionId) {
        self.subscribers
            .write()
            .unwrap()
            .retain(|(existing, _)| *existing != id);
    }
}
