//! Capability interface to the external tabular-data engine.
//!
//! The engine owns rows, columns, sorting, filtering, pagination
//! counters and selection state. This layer never caches a write across
//! renders: it reads snapshots through these methods and issues commit
//! calls back through them. A commit is visible to the next read from
//! the same engine instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter::FilterOption;

/// Side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// Rendering direction of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Row height presets offered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowHeight {
    #[default]
    Short,
    Medium,
    Tall,
    ExtraTall,
}

impl RowHeight {
    /// Row height in pixels.
    pub fn pixels(self) -> f32 {
        match self {
            RowHeight::Short => 40.0,
            RowHeight::Medium => 60.0,
            RowHeight::Tall => 80.0,
            RowHeight::ExtraTall => 100.0,
        }
    }

    /// Number of text lines a cell of this height can show.
    pub fn line_count(self) -> usize {
        match self {
            RowHeight::Short => 1,
            RowHeight::Medium => 2,
            RowHeight::Tall => 3,
            RowHeight::ExtraTall => 4,
        }
    }
}

/// A column as seen by the grid layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    /// Display title; an empty title falls back to the raw id.
    pub title: String,
    /// Width in pixels. Never negative.
    pub size: f32,
    pub pinned: Option<PinSide>,
    pub visible: bool,
    /// Whether the column may be hidden through the visibility menu.
    pub hideable: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, size: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            size: size.max(0.0),
            pinned: None,
            visible: true,
            hideable: true,
        }
    }

    /// Pin the column to one side.
    pub fn pinned(mut self, side: PinSide) -> Self {
        self.pinned = Some(side);
        self
    }

    /// Exclude the column from the visibility menu.
    pub fn fixed(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Start out hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Display title, falling back to the raw id when unset.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// Current pagination counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 0-based page index.
    pub page_index: usize,
    pub page_size: usize,
}

impl PageState {
    /// 1-based page number.
    pub fn current_page(&self) -> usize {
        self.page_index + 1
    }
}

/// Select-all summary for the current page, driving the header
/// checkbox's checked / indeterminate presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Some,
    All,
}

/// Handle for a selection-change subscription. Released by handing it
/// back to [`TableEngine::unsubscribe_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Capability set required from the tabular-data engine collaborator.
///
/// All methods are synchronous and non-failing at this boundary;
/// transient failures are the engine's responsibility to surface. State
/// mutators take `&self`, so engines are expected to use interior
/// mutability, since the grid components share one engine instance.
pub trait TableEngine {
    // Pagination.
    fn page_state(&self) -> PageState;
    fn set_page_index(&self, page_index: usize);
    fn set_page_size(&self, page_size: usize);
    fn page_count(&self) -> usize;
    fn can_previous_page(&self) -> bool;
    fn can_next_page(&self) -> bool;

    // Columns.
    fn columns(&self) -> Vec<Column>;
    fn set_column_visibility(&self, column_id: &str, visible: bool);

    // Filtering. `None` means "no filter set"; engines never see an
    // empty value list.
    fn filter_value(&self, column_id: &str) -> Option<Vec<String>>;
    fn set_filter_value(&self, column_id: &str, value: Option<Vec<String>>);
    fn set_global_filter(&self, value: Option<String>);

    /// Facet counts per distinct value of a column.
    fn faceted_unique_values(&self, column_id: &str) -> HashMap<String, usize>;

    /// Filter-option metadata cached onto the column definition, for
    /// consumers other than the filter popover (tooltips and the like).
    fn filter_options(&self, column_id: &str) -> Option<Vec<FilterOption>>;
    fn set_filter_options(&self, column_id: &str, options: Vec<FilterOption>);

    // Selection. Two views exist: the raw state map and the derived
    // row model; they may transiently disagree.
    fn selection_state(&self) -> HashMap<String, bool>;
    fn selected_row_keys(&self) -> Vec<String>;
    /// Row keys of the current page, in display order.
    fn page_row_keys(&self) -> Vec<String>;

    /// Register a selection-change callback. Engines without change
    /// notifications return `None`, and consumers fall back to polling.
    fn subscribe_selection(&self, callback: Box<dyn Fn()>) -> Option<SubscriptionId> {
        let _ = callback;
        None
    }

    /// Release a subscription handle obtained from
    /// [`TableEngine::subscribe_selection`].
    fn unsubscribe_selection(&self, id: SubscriptionId) {
        let _ = id;
    }

    /// Select-all summary for the header checkbox of the current page.
    fn select_all_state(&self) -> SelectAllState {
        let keys = self.page_row_keys();
        if keys.is_empty() {
            return SelectAllState::None;
        }
        let selection = self.selection_state();
        let selected = keys
            .iter()
            .filter(|key| selection.get(*key).copied().unwrap_or(false))
            .count();
        if selected == 0 {
            SelectAllState::None
        } else if selected == keys.len() {
            SelectAllState::All
        } else {
            SelectAllState::Some
        }
    }
}
