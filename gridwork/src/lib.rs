//! Headless state and behavior layer for tabular admin grids.
//!
//! Gridwork sits between a tabular-data engine (the owner of rows,
//! columns, filters, pagination counters and selection state) and the
//! visual widgets of a dashboard: toolbar, pagination bar, column
//! filter popover and column-visibility menu. It owns the parts that
//! need algorithmic care (page-window generation, pinned-column
//! geometry, scroll targeting, faceted filtering and selection
//! reconciliation) and stays entirely render-agnostic.

pub mod cell;
pub mod engine;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod pager;
pub mod pagination_bar;
pub mod scroll;
pub mod selection;
pub mod state;
pub mod toolbar;
pub mod visibility;

pub use cell::{CELL_KEY_SEPARATOR, CellAddress, cell_key, parse_cell_key};
pub use engine::{
    Column, PageState, PinSide, RowHeight, SelectAllState, SubscriptionId, TableEngine,
    TextDirection,
};
pub use error::GridError;
pub use filter::{ColumnFilter, FilterOption};
pub use geometry::{
    BoundaryShadow, CellPosition, PinnedWidths, PinningStyle, pinned_widths, pinning_style,
};
pub use pager::{PageToken, page_window};
pub use pagination_bar::PaginationBar;
pub use scroll::{ScrollIntent, ScrollPort, ScrollTarget, Span, scroll_adjustment};
pub use selection::SelectionWatch;
pub use state::{DataGrid, GridConfig, LoadingMode};
pub use toolbar::{Toolbar, ToolbarCallbacks};
pub use visibility::{ColumnVisibilityMenu, VisibilityEntry};
