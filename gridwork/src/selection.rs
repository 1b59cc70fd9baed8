//! Reconciliation of externally-driven selection changes.
//!
//! The engine may mutate row selection through paths that do not reach
//! the toolbar's normal re-render triggers. [`SelectionWatch`] detects
//! that staleness: it subscribes to the engine's change notifications
//! when the engine offers them, and otherwise polls on a fixed cadence,
//! comparing a stable serialization of the selection map. It never
//! decides selection content itself.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::engine::{SubscriptionId, TableEngine};

/// Poll cadence used when the engine cannot push change notifications.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

enum WatchMode {
    Subscribed(SubscriptionId),
    Polling {
        last_seen: String,
        next_poll: Instant,
    },
}

/// Staleness detector for row-selection state.
pub struct SelectionWatch<E: TableEngine> {
    engine: Arc<E>,
    dirty: Arc<AtomicBool>,
    mode: WatchMode,
}

impl<E: TableEngine> SelectionWatch<E> {
    pub fn new(engine: Arc<E>) -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        let mode = match engine.subscribe_selection(Box::new(move || {
            flag.store(true, Ordering::SeqCst);
        })) {
            Some(id) => WatchMode::Subscribed(id),
            None => {
                log::debug!("engine offers no selection notifications, falling back to polling");
                WatchMode::Polling {
                    last_seen: serialize_selection(engine.as_ref()),
                    next_poll: Instant::now() + POLL_INTERVAL,
                }
            }
        };
        Self {
            engine,
            dirty,
            mode,
        }
    }

    /// True when the watch runs on the polling fallback.
    pub fn is_polling(&self) -> bool {
        matches!(self.mode, WatchMode::Polling { .. })
    }

    /// Advance the detector. Returns true when the consumer should
    /// re-render; the flag resets once reported.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// [`SelectionWatch::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if let WatchMode::Polling {
            last_seen,
            next_poll,
        } = &mut self.mode
            && now >= *next_poll
        {
            *next_poll = now + POLL_INTERVAL;
            let current = serialize_selection(self.engine.as_ref());
            if current != *last_seen {
                *last_seen = current;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Selected-row count tolerant of either source momentarily
    /// under-reporting: the maximum of the state-map count and the
    /// derived row-model count.
    pub fn selected_count(&self) -> usize {
        let from_state = self
            .engine
            .selection_state()
            .values()
            .filter(|selected| **selected)
            .count();
        let from_model = self.engine.selected_row_keys().len();
        from_state.max(from_model)
    }
}

impl<E: TableEngine> Drop for SelectionWatch<E> {
    fn drop(&mut self) {
        if let WatchMode::Subscribed(id) = &self.mode {
            self.engine.unsubscribe_selection(*id);
        }
    }
}

/// Stable serialization of the selection map: sorted keys, JSON body.
fn serialize_selection<E: TableEngine>(engine: &E) -> String {
    let snapshot: BTreeMap<String, bool> = engine.selection_state().into_iter().collect();
    serde_json::to_string(&snapshot).unwrap_or_default()
}
