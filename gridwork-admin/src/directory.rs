//! In-memory user directory implementing the tabular-data engine.
//!
//! Owns the user rows plus all grid state the engine is responsible
//! for: column definitions, per-column and global filters, pagination
//! counters and the selection map. All reads derive from the filtered
//! row set so the grid components see a consistent snapshot.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use gridwork::{
    CELL_KEY_SEPARATOR, Column, FilterOption, GridError, PageState, SubscriptionId, TableEngine,
};

use crate::users::User;

const DEFAULT_PAGE_SIZE: usize = 10;

struct Inner {
    users: Vec<User>,
    columns: Vec<Column>,
    filter_options: HashMap<String, Vec<FilterOption>>,
    column_filters: HashMap<String, Vec<String>>,
    global_filter: Option<String>,
    page_index: usize,
    page_size: usize,
    selection: HashMap<String, bool>,
}

impl Inner {
    /// The raw filterable value of one cell.
    fn field(user: &User, column_id: &str) -> String {
        match column_id {
            "name" => user.name.clone(),
            "email" => user.email.clone(),
            "role" => user.role.as_str().to_string(),
            "status" => user.status.as_str().to_string(),
            "created" => user.created_at.format("%Y-%m-%d").to_string(),
            _ => String::new(),
        }
    }

    /// Whether `user` passes every active filter, optionally skipping
    /// one column's own filter (facet counts are computed that way).
    fn matches(&self, user: &User, skip_column: Option<&str>) -> bool {
        if let Some(needle) = &self.global_filter {
            let needle = needle.to_lowercase();
            let haystack =
                format!("{} {}", user.name.to_lowercase(), user.email.to_lowercase());
            if !haystack.contains(&needle) {
                return false;
            }
        }
        for (column_id, selected) in &self.column_filters {
            if skip_column == Some(column_id.as_str()) {
                continue;
            }
            if !selected.contains(&Self::field(user, column_id)) {
                return false;
            }
        }
        true
    }

    fn filtered(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| self.matches(user, None))
            .collect()
    }

    fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// Keep the page index inside the (possibly shrunken) page range.
    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

/// Engine over an in-memory user list. All mutators take `&self`; the
/// grid components share one instance behind an `Arc`.
pub struct UserDirectory {
    inner: RwLock<Inner>,
    // Kept outside `inner` so callbacks never run under the data lock.
    subscribers: RwLock<Vec<(SubscriptionId, Box<dyn Fn()>)>>,
    next_subscription: AtomicU64,
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory").finish_non_exhaustive()
    }
}

impl UserDirectory {
    /// Build a directory over `users` with the given column layout.
    /// Column ids containing the cell-key separator are rejected.
    pub fn new(users: Vec<User>, columns: Vec<Column>) -> Result<Self, GridError> {
        for column in &columns {
            if column.id.contains(CELL_KEY_SEPARATOR) {
                return Err(GridError::InvalidColumnId {
                    id: column.id.clone(),
                });
            }
        }
        Ok(Self {
            inner: RwLock::new(Inner {
                users,
                columns,
                filter_options: HashMap::new(),
                column_filters: HashMap::new(),
                global_filter: None,
                page_index: 0,
                page_size: DEFAULT_PAGE_SIZE,
                selection: HashMap::new(),
            }),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        })
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fire selection subscribers. Callers must not hold the data lock.
    fn notify_selection(&self) {
        if let Ok(subscribers) = self.subscribers.read() {
            for (_, callback) in subscribers.iter() {
                callback();
            }
        }
    }

    // ---------------------------------------------------------------
    // Directory operations
    // ---------------------------------------------------------------

    /// Number of rows passing the current filters.
    pub fn record_count(&self) -> u64 {
        self.read().filtered().len() as u64
    }

    pub fn user(&self, key: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.key() == key).cloned()
    }

    pub fn add_user(&self, user: User) {
        let mut inner = self.write();
        log::info!("adding user {} ({})", user.name, user.email);
        inner.users.push(user);
        inner.clamp_page();
    }

    /// Remove users by row key, pruning their selection entries.
    /// Returns the number of rows removed.
    pub fn remove_users(&self, keys: &[String]) -> usize {
        let removed;
        {
            let mut inner = self.write();
            let before = inner.users.len();
            inner.users.retain(|user| !keys.contains(&user.key()));
            removed = before - inner.users.len();
            for key in keys {
                inner.selection.remove(key);
            }
            inner.clamp_page();
        }
        if removed > 0 {
            log::info!("removed {removed} users");
            self.notify_selection();
        }
        removed
    }

    /// Remove every row whose selection entry is set. Returns the
    /// number of rows removed.
    pub fn remove_selected(&self) -> usize {
        let keys: Vec<String> = self
            .read()
            .selection
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(key, _)| key.clone())
            .collect();
        self.remove_users(&keys)
    }

    pub fn set_selected(&self, key: &str, selected: bool) {
        {
            let mut inner = self.write();
            if selected {
                inner.selection.insert(key.to_string(), true);
            } else {
                inner.selection.remove(key);
            }
        }
        self.notify_selection();
    }

    pub fn toggle_selected(&self, key: &str) {
        let selected = {
            let inner = self.read();
            inner.selection.get(key).copied().unwrap_or(false)
        };
        self.set_selected(key, !selected);
    }

    /// Set every row of the current page to `selected`, the header
    /// checkbox action.
    pub fn set_page_selected(&self, selected: bool) {
        {
            let mut inner = self.write();
            let keys: Vec<String> = inner
                .filtered()
                .iter()
                .skip(inner.page_index * inner.page_size)
                .take(inner.page_size)
                .map(|user| user.key())
                .collect();
            for key in keys {
                if selected {
                    inner.selection.insert(key, true);
                } else {
                    inner.selection.remove(&key);
                }
            }
        }
        self.notify_selection();
    }

    pub fn clear_selection(&self) {
        self.write().selection.clear();
        self.notify_selection();
    }
}

impl TableEngine for UserDirectory {
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
        inner.clamp_page();
    }

    fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            log::warn!("ignoring zero page size");
            return;
        }
        let mut inner = self.write();
        // Keep the first visible row on screen across the size change.
        let first_row = inner.page_index * inner.page_size;
        inner.page_size = page_size;
        inner.page_index = first_row / page_size;
        inner.clamp_page();
    }

    fn page_count(&self) -> usize {
        self.read().page_count()
    }

    fn can_previous_page(&self) -> bool {
        self.read().page_index > 0
    }

    fn can_next_page(&self) -> bool {
        let inner = self.read();
        inner.page_index + 1 < inner.page_count()
    }

    fn columns(&self) -> Vec<Column> {
        self.read().columns.clone()
    }

    fn set_column_visibility(&self, column_id: &str, visible: bool) {
        let mut inner = self.write();
        if let Some(column) = inner.columns.iter_mut().find(|c| c.id == column_id) {
            column.visible = visible;
        } else {
            log::debug!("visibility change for unknown column {column_id:?}");
        }
    }

    fn filter_value(&self, column_id: &str) -> Option<Vec<String>> {
        self.read().column_filters.get(column_id).cloned()
    }

    fn set_filter_value(&self, column_id: &str, value: Option<Vec<String>>) {
        let mut inner = self.write();
        match value {
            Some(values) => {
                inner.column_filters.insert(column_id.to_string(), values);
            }
            None => {
                inner.column_filters.remove(column_id);
            }
        }
        inner.clamp_page();
    }

    fn set_global_filter(&self, value: Option<String>) {
        let mut inner = self.write();
        inner.global_filter = value.filter(|v| !v.is_empty());
        inner.clamp_page();
    }

    fn faceted_unique_values(&self, column_id: &str) -> HashMap<String, usize> {
        let inner = self.read();
        let mut counts = HashMap::new();
        // Facets ignore the faceted column's own filter, so unselected
        // options keep showing what choosing them would yield.
        for user in inner
            .users
            .iter()
            .filter(|user| inner.matches(user, Some(column_id)))
        {
            *counts.entry(Inner::field(user, column_id)).or_insert(0) += 1;
        }
        counts
    }

    fn filter_options(&self, column_id: &str) -> Option<Vec<FilterOption>> {
        self.read().filter_options.get(column_id).cloned()
    }

    fn set_filter_options(&self, column_id: &str, options: Vec<FilterOption>) {
        self.write()
            .filter_options
            .insert(column_id.to_string(), options);
    }

    fn selection_state(&self) -> HashMap<String, bool> {
        self.read().selection.clone()
    }

    fn selected_row_keys(&self) -> Vec<String> {
        let inner = self.read();
        inner
            .filtered()
            .iter()
            .map(|user| user.key())
            .filter(|key| inner.selection.get(key).copied().unwrap_or(false))
            .collect()
    }

    fn page_row_keys(&self) -> Vec<String> {
        let inner = self.read();
        inner
            .filtered()
            .iter()
            .skip(inner.page_index * inner.page_size)
            .take(inner.page_size)
            .map(|user| user.key())
            .collect()
    }

    fn subscribe_selection(&self, callback: Box<dyn Fn()>) -> Option<SubscriptionId> {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.push((id, callback));
            Some(id)
        } else {
            None
        }
    }

    fn unsubscribe_selection(&self, id: SubscriptionId) {
        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.retain(|(existing, _)| *existing != id);
        }
    }
}
