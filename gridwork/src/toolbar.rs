//! Toolbar view-model: search, bulk actions, selected-row count.

use std::sync::Arc;

use crate::engine::TableEngine;
use crate::selection::SelectionWatch;
use crate::state::DataGrid;

/// Event callbacks a host wires into the toolbar. All optional; absent
/// callbacks disable the corresponding control.
#[derive(Default)]
pub struct ToolbarCallbacks {
    pub on_add: Option<Box<dyn Fn()>>,
    pub on_delete_selected: Option<Box<dyn Fn()>>,
    pub on_selection_toggle: Option<Box<dyn Fn(bool)>>,
    /// When present, search is host-controlled: submissions go to the
    /// callback instead of the engine's global filter.
    pub on_search: Option<Box<dyn Fn(&str)>>,
}

/// Headless toolbar state.
pub struct Toolbar<E: TableEngine> {
    grid: Arc<DataGrid<E>>,
    callbacks: ToolbarCallbacks,
    watch: SelectionWatch<E>,
    search_value: String,
    selection_enabled: bool,
}

impl<E: TableEngine> Toolbar<E> {
    pub fn new(grid: Arc<DataGrid<E>>, callbacks: ToolbarCallbacks) -> Self {
        let watch = SelectionWatch::new(Arc::clone(grid.engine()));
        Self {
            grid,
            callbacks,
            watch,
            search_value: String::new(),
            selection_enabled: false,
        }
    }

    // ---------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------

    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// Update the search box content without committing it.
    pub fn set_search_value(&mut self, value: impl Into<String>) {
        self.search_value = value.into();
    }

    /// Commit the current search text: to the host callback when search
    /// is controlled, otherwise to the engine's global filter. An empty
    /// value commits as "no filter".
    pub fn submit_search(&self) {
        if let Some(on_search) = &self.callbacks.on_search {
            on_search(&self.search_value);
        } else if self.search_value.is_empty() {
            self.grid.engine().set_global_filter(None);
        } else {
            self.grid
                .engine()
                .set_global_filter(Some(self.search_value.clone()));
        }
    }

    /// Clear the search box and drop the filter.
    pub fn clear_search(&mut self) {
        self.search_value.clear();
        if let Some(on_search) = &self.callbacks.on_search {
            on_search("");
        } else {
            self.grid.engine().set_global_filter(None);
        }
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    pub fn toggle_selection_mode(&mut self) {
        self.selection_enabled = !self.selection_enabled;
        if let Some(on_toggle) = &self.callbacks.on_selection_toggle {
            on_toggle(self.selection_enabled);
        }
    }

    /// Reconciled selected-row count.
    pub fn selected_count(&self) -> usize {
        self.watch.selected_count()
    }

    /// Whether the delete-selected control is shown: selection must be
    /// enabled, rows selected, and a delete callback wired.
    pub fn show_delete_selected(&self) -> bool {
        self.selection_enabled
            && self.callbacks.on_delete_selected.is_some()
            && self.selected_count() > 0
    }

    /// Advance the selection staleness detector. Returns true when the
    /// toolbar should re-render.
    pub fn tick(&mut self) -> bool {
        self.watch.tick()
    }

    /// [`Toolbar::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: std::time::Instant) -> bool {
        self.watch.tick_at(now)
    }

    // ---------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------

    pub fn add(&self) {
        if let Some(on_add) = &self.callbacks.on_add {
            on_add();
        }
    }

    pub fn delete_selected(&self) {
        if !self.show_delete_selected() {
            return;
        }
        if let Some(on_delete) = &self.callbacks.on_delete_selected {
            on_delete();
        }
    }

    pub fn grid(&self) -> &Arc<DataGrid<E>> {
        &self.grid
    }
}
