//! Grid state container: record count, loading debounce, scrollbar
//! presence.
//!
//! One [`DataGrid`] instance is the single state owner shared by the
//! toolbar, pagination bar and filter popover. The engine is a required
//! constructor dependency; there is no detached provider that could go
//! missing at runtime.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::engine::{RowHeight, TableEngine};
use crate::error::GridError;

/// How the rendering layer should present the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingMode {
    #[default]
    Skeleton,
    Spinner,
}

/// Grid configuration. Caller values take precedence over the defaults;
/// validation happens when the grid is constructed.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Delay before the loading flag becomes visible, to avoid skeleton
    /// flicker on fast responses. Zero means immediate.
    pub loading_delay: Duration,
    /// Margin kept around the usable viewport band during scroll
    /// targeting. Must be finite and non-negative.
    pub viewport_margin: f32,
    /// Page sizes offered by the pagination bar. Must be non-empty and
    /// free of zeroes.
    pub page_sizes: Vec<usize>,
    pub loading_mode: LoadingMode,
    pub row_height: RowHeight,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(100),
            viewport_margin: 0.0,
            page_sizes: vec![5, 10, 25, 50, 100],
            loading_mode: LoadingMode::default(),
            row_height: RowHeight::default(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.page_sizes.is_empty() {
            return Err(GridError::InvalidConfig(
                "page_sizes must not be empty".into(),
            ));
        }
        if self.page_sizes.contains(&0) {
            return Err(GridError::InvalidConfig(
                "page_sizes must not contain zero".into(),
            ));
        }
        if !self.viewport_margin.is_finite() || self.viewport_margin < 0.0 {
            return Err(GridError::InvalidConfig(
                "viewport_margin must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct GridState {
    record_count: Option<u64>,
    raw_loading: bool,
    debounced_loading: bool,
    loading_deadline: Option<Instant>,
    has_vertical_scrollbar: bool,
}

/// Single state owner wrapping the tabular-data engine.
pub struct DataGrid<E: TableEngine> {
    engine: Arc<E>,
    config: GridConfig,
    state: RwLock<GridState>,
}

impl<E: TableEngine> DataGrid<E> {
    /// Construct the container. The engine reference is mandatory and
    /// the configuration is validated up front; both failures are
    /// configuration errors, not runtime faults.
    pub fn new(engine: Arc<E>, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            engine,
            config,
            state: RwLock::new(GridState::default()),
        })
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn record_count(&self) -> Option<u64> {
        self.state.read().map(|s| s.record_count).unwrap_or(None)
    }

    pub fn set_record_count(&self, count: Option<u64>) {
        if let Ok(mut state) = self.state.write() {
            state.record_count = count;
        }
    }

    /// Feed the raw loading signal from the data source.
    pub fn set_loading(&self, raw: bool) {
        self.set_loading_at(raw, Instant::now());
    }

    /// [`DataGrid::set_loading`] with an explicit clock.
    pub fn set_loading_at(&self, raw: bool, now: Instant) {
        if let Ok(mut state) = self.state.write() {
            if state.raw_loading == raw {
                return;
            }
            state.raw_loading = raw;
            if !raw {
                // Falling edge clears immediately and cancels any
                // pending timer.
                state.debounced_loading = false;
                state.loading_deadline = None;
            } else if self.config.loading_delay.is_zero() {
                state.debounced_loading = true;
            } else {
                state.loading_deadline = Some(now + self.config.loading_delay);
            }
        }
    }

    /// Advance the debounce timer.
    pub fn tick(&self) {
        self.tick_at(Instant::now());
    }

    /// [`DataGrid::tick`] with an explicit clock.
    pub fn tick_at(&self, now: Instant) {
        if let Ok(mut state) = self.state.write()
            && let Some(deadline) = state.loading_deadline
            && now >= deadline
        {
            state.loading_deadline = None;
            if state.raw_loading {
                state.debounced_loading = true;
            }
        }
    }

    /// The debounced loading flag the widgets consume.
    pub fn is_loading(&self) -> bool {
        self.state
            .read()
            .map(|s| s.debounced_loading)
            .unwrap_or(false)
    }

    /// The raw, undebounced loading signal.
    pub fn raw_loading(&self) -> bool {
        self.state.read().map(|s| s.raw_loading).unwrap_or(false)
    }

    pub fn has_vertical_scrollbar(&self) -> bool {
        self.state
            .read()
            .map(|s| s.has_vertical_scrollbar)
            .unwrap_or(false)
    }

    /// Recorded by the rendering layer when the scrollable body
    /// overflows vertically; header styling consumes it.
    pub fn set_has_vertical_scrollbar(&self, present: bool) {
        if let Ok(mut state) = self.state.write() {
            state.has_vertical_scrollbar = present;
        }
    }
}
