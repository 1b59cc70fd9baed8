//! Admin dashboard built on the gridwork grid layer.
//!
//! Provides a user-management table: an in-memory [`TableEngine`]
//! implementation over a user directory, plus the wired-up panel of
//! grid components (toolbar, pagination bar, column filters and the
//! visibility menu).
//!
//! [`TableEngine`]: gridwork::TableEngine

pub mod directory;
pub mod panel;
pub mod users;

pub use directory::UserDirectory;
pub use panel::{UsersPanel, user_columns};
pub use users::{Role, User, UserStatus, sample_users};
