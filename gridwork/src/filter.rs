//! Faceted multi-select column filtering.
//!
//! The engine's per-column filter value is the authoritative store;
//! this view-model holds no selection state of its own across renders.
//! Every operation materializes the working set from the engine,
//! mutates it, and commits the result straight back.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::TableEngine;

/// One selectable option of a faceted column filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// View-model for one column's multi-select filter popover.
pub struct ColumnFilter<E: TableEngine> {
    engine: Arc<E>,
    column_id: String,
    title: String,
    options: Vec<FilterOption>,
}

impl<E: TableEngine> ColumnFilter<E> {
    /// Create the filter and cache its option metadata onto the column
    /// definition for other consumers. First write wins unless the
    /// option list content changed (value equality).
    pub fn new(
        engine: Arc<E>,
        column_id: impl Into<String>,
        title: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        let column_id = column_id.into();
        let cached = engine.filter_options(&column_id);
        if cached.as_deref() != Some(options.as_slice()) {
            engine.set_filter_options(&column_id, options.clone());
        }
        Self {
            engine,
            column_id,
            title: title.into(),
            options,
        }
    }

    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// The currently selected option values, read from the engine.
    pub fn selected_values(&self) -> BTreeSet<String> {
        self.engine
            .filter_value(&self.column_id)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected_values().len()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_values().contains(value)
    }

    /// Toggle one option value and commit the result. An emptied set
    /// commits as "no filter", never as an empty value list.
    pub fn toggle(&self, value: &str) {
        let mut selected = self.selected_values();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        let committed = if selected.is_empty() {
            None
        } else {
            Some(selected.into_iter().collect())
        };
        self.engine.set_filter_value(&self.column_id, committed);
    }

    /// Drop the column filter entirely.
    pub fn clear(&self) {
        self.engine.set_filter_value(&self.column_id, None);
    }

    /// Facet count for one option value; `None` when the engine has no
    /// (nonzero) count for it.
    pub fn facet(&self, value: &str) -> Option<usize> {
        self.engine
            .faceted_unique_values(&self.column_id)
            .get(value)
            .copied()
            .filter(|count| *count > 0)
    }

    /// Labels of the selected options, in option order; feeds the badge
    /// row on the popover trigger.
    pub fn selected_labels(&self) -> Vec<String> {
        let selected = self.selected_values();
        self.options
            .iter()
            .filter(|option| selected.contains(&option.value))
            .map(|option| option.label.clone())
            .collect()
    }
}
