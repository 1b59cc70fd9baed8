//! Error types for the grid layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// Column ids may not contain the cell-key separator; the canonical
    /// cell encoding would be ambiguous otherwise.
    #[error("invalid column id {id:?}: column ids may not contain ':'")]
    InvalidColumnId { id: String },

    /// The grid configuration failed validation at construction.
    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),
}
