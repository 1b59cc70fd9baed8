//! Pagination bar view-model.
//!
//! Thin stateless wrapper over the engine's pagination counters and the
//! window generator in [`crate::pager`]. All reads are live; selecting a
//! page or page size commits straight to the engine.

use std::sync::Arc;

use crate::engine::TableEngine;
use crate::pager::{PageToken, page_window};
use crate::state::DataGrid;

pub struct PaginationBar<E: TableEngine> {
    grid: Arc<DataGrid<E>>,
}

impl<E: TableEngine> PaginationBar<E> {
    pub fn new(grid: Arc<DataGrid<E>>) -> Self {
        Self { grid }
    }

    /// The bar renders only when data is settled and there is more than
    /// one page to move between.
    pub fn is_visible(&self) -> bool {
        !self.grid.is_loading() && self.page_count() > 1
    }

    /// The ellipsis-collapsed page tokens to display.
    pub fn window(&self) -> Vec<PageToken> {
        page_window(self.page_count(), self.current_page())
    }

    /// 1-based current page number.
    pub fn current_page(&self) -> usize {
        self.grid.engine().page_state().current_page()
    }

    pub fn page_count(&self) -> usize {
        self.grid.engine().page_count()
    }

    pub fn page_size(&self) -> usize {
        self.grid.engine().page_state().page_size
    }

    /// Page sizes offered in the size selector.
    pub fn page_sizes(&self) -> &[usize] {
        &self.grid.config().page_sizes
    }

    /// Total record count across all pages, when known.
    pub fn record_count(&self) -> Option<u64> {
        self.grid.record_count()
    }

    /// Commit a new page size. Sizes outside the configured list are
    /// ignored.
    pub fn set_page_size(&self, page_size: usize) {
        if !self.grid.config().page_sizes.contains(&page_size) {
            log::debug!("ignoring page size {page_size} not offered by the selector");
            return;
        }
        self.grid.engine().set_page_size(page_size);
    }

    /// Jump to a 1-based page number. Re-selecting the current page is
    /// a no-op.
    pub fn select_page(&self, page: usize) {
        if page == 0 || page > self.page_count() || page == self.current_page() {
            return;
        }
        self.grid.engine().set_page_index(page - 1);
    }

    pub fn next_page(&self) {
        let engine = self.grid.engine();
        if engine.can_next_page() {
            engine.set_page_index(engine.page_state().page_index + 1);
        }
    }

    pub fn previous_page(&self) {
        let engine = self.grid.engine();
        if engine.can_previous_page() {
            engine.set_page_index(engine.page_state().page_index.saturating_sub(1));
        }
    }
}
