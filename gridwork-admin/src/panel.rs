//! The wired-up user management panel.
//!
//! Assembles the grid components around one [`UserDirectory`]: data
//! grid container, toolbar with delete-selected wiring, pagination bar,
//! the role and status filters and the column-visibility menu.

use std::sync::Arc;

use gridwork::{
    Column, ColumnFilter, ColumnVisibilityMenu, DataGrid, FilterOption, GridConfig, GridError,
    PaginationBar, PinSide, Toolbar, ToolbarCallbacks,
};

use crate::directory::UserDirectory;
use crate::users::User;

/// Column layout of the users table. The selection checkbox and the
/// row-actions column are pinned and excluded from the visibility menu.
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("select", "", 36.0).pinned(PinSide::Left).fixed(),
        Column::new("name", "Name", 200.0).pinned(PinSide::Left),
        Column::new("email", "Email", 240.0),
        Column::new("role", "Role", 140.0),
        Column::new("status", "Status", 140.0),
        Column::new("created", "Created", 160.0),
        Column::new("actions", "", 80.0).pinned(PinSide::Right).fixed(),
    ]
}

pub fn role_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("admin", "Admin"),
        FilterOption::new("manager", "Manager"),
        FilterOption::new("member", "Member"),
    ]
}

pub fn status_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("active", "Active"),
        FilterOption::new("inactive", "Inactive"),
    ]
}

pub struct UsersPanel {
    directory: Arc<UserDirectory>,
    grid: Arc<DataGrid<UserDirectory>>,
    toolbar: Toolbar<UserDirectory>,
    pagination: PaginationBar<UserDirectory>,
    role_filter: ColumnFilter<UserDirectory>,
    status_filter: ColumnFilter<UserDirectory>,
    visibility: ColumnVisibilityMenu<UserDirectory>,
}

impl UsersPanel {
    pub fn new(users: Vec<User>) -> Result<Self, GridError> {
        Self::with_config(users, GridConfig::default())
    }

    pub fn with_config(users: Vec<User>, config: GridConfig) -> Result<Self, GridError> {
        let directory = Arc::new(UserDirectory::new(users, user_columns())?);
        let grid = Arc::new(DataGrid::new(Arc::clone(&directory), config)?);
        grid.set_record_count(Some(directory.record_count()));

        let callbacks = ToolbarCallbacks {
            on_delete_selected: Some(Box::new({
                let directory = Arc::clone(&directory);
                let grid = Arc::clone(&grid);
                move || {
                    directory.remove_selected();
                    grid.set_record_count(Some(directory.record_count()));
                }
            })),
            ..ToolbarCallbacks::default()
        };

        Ok(Self {
            toolbar: Toolbar::new(Arc::clone(&grid), callbacks),
            pagination: PaginationBar::new(Arc::clone(&grid)),
            role_filter: ColumnFilter::new(
                Arc::clone(&directory),
                "role",
                "Role",
                role_options(),
            ),
            status_filter: ColumnFilter::new(
                Arc::clone(&directory),
                "status",
                "Status",
                status_options(),
            ),
            visibility: ColumnVisibilityMenu::new(Arc::clone(&directory)),
            directory,
            grid,
        })
    }

    pub fn directory(&self) -> &Arc<UserDirectory> {
        &self.directory
    }

    pub fn grid(&self) -> &Arc<DataGrid<UserDirectory>> {
        &self.grid
    }

    pub fn toolbar(&self) -> &Toolbar<UserDirectory> {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut Toolbar<UserDirectory> {
        &mut self.toolbar
    }

    pub fn pagination(&self) -> &PaginationBar<UserDirectory> {
        &self.pagination
    }

    pub fn role_filter(&self) -> &ColumnFilter<UserDirectory> {
        &self.role_filter
    }

    pub fn status_filter(&self) -> &ColumnFilter<UserDirectory> {
        &self.status_filter
    }

    pub fn visibility(&self) -> &ColumnVisibilityMenu<UserDirectory> {
        &self.visibility
    }

    /// Push the filtered row count into the grid after data changes
    /// made outside the panel's own callbacks.
    pub fn refresh_record_count(&self) {
        self.grid.set_record_count(Some(self.directory.record_count()));
    }
}
