//! Column-visibility menu view-model.

use std::sync::Arc;

use crate::engine::TableEngine;

/// One row of the visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub column_id: String,
    pub title: String,
    pub visible: bool,
}

/// Menu listing the hideable columns with show/hide toggles.
pub struct ColumnVisibilityMenu<E: TableEngine> {
    engine: Arc<E>,
}

impl<E: TableEngine> ColumnVisibilityMenu<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Entries in column order, hideable columns only. Titles fall back
    /// to the raw column id.
    pub fn entries(&self) -> Vec<VisibilityEntry> {
        self.engine
            .columns()
            .into_iter()
            .filter(|column| column.hideable)
            .map(|column| {
                if column.title.is_empty() {
                    log::debug!("column {:?} has no title, showing its id", column.id);
                }
                VisibilityEntry {
                    title: column.display_title().to_string(),
                    column_id: column.id,
                    visible: column.visible,
                }
            })
            .collect()
    }

    /// Flip one column's visibility. Unknown or non-hideable columns
    /// are skipped.
    pub fn toggle(&self, column_id: &str) {
        let Some(column) = self
            .engine
            .columns()
            .into_iter()
            .find(|column| column.id == column_id)
        else {
            log::debug!("visibility toggle for unknown column {column_id:?}");
            return;
        };
        if !column.hideable {
            log::debug!("column {column_id:?} is not hideable");
            return;
        }
        self.engine
            .set_column_visibility(column_id, !column.visible);
    }

    /// Set one column's visibility explicitly, with the same skip rules
    /// as [`ColumnVisibilityMenu::toggle`].
    pub fn set_visible(&self, column_id: &str, visible: bool) {
        let Some(column) = self
            .engine
            .columns()
            .into_iter()
            .find(|column| column.id == column_id)
        else {
            log::debug!("visibility change for unknown column {column_id:?}");
            return;
        };
        if !column.hideable {
            log::debug!("column {column_id:?} is not hideable");
            return;
        }
        self.engine.set_column_visibility(column_id, visible);
    }
}
