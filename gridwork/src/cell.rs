//! Canonical cell addressing.
//!
//! A cell is identified by a (row index, column id) pair. The pair is
//! encoded into a single opaque key so that focus targets, edit targets
//! and scroll targets can be passed around as one value.

/// Separator between the row and column parts of a cell key.
///
/// Column ids must not contain this character; engines are expected to
/// reject such ids at column-registration time.
pub const CELL_KEY_SEPARATOR: char = ':';

/// A (row, column) identity pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellAddress {
    pub row_index: usize,
    pub column_id: String,
}

impl CellAddress {
    pub fn new(row_index: usize, column_id: impl Into<String>) -> Self {
        Self {
            row_index,
            column_id: column_id.into(),
        }
    }

    /// Encode this address as a cell key.
    pub fn key(&self) -> String {
        cell_key(self.row_index, &self.column_id)
    }

    /// A decoded default address (empty column id) means "no valid
    /// target" and callers should skip the operation.
    pub fn is_valid_target(&self) -> bool {
        !self.column_id.is_empty()
    }
}

/// Encode a (row, column) pair as a single key.
pub fn cell_key(row_index: usize, column_id: &str) -> String {
    format!("{row_index}{CELL_KEY_SEPARATOR}{column_id}")
}

/// Decode a cell key.
///
/// Fails soft: malformed input (missing separator, empty column part,
/// non-numeric row part) yields the default address of row 0 with an
/// empty column id rather than an error.
pub fn parse_cell_key(key: &str) -> CellAddress {
    let mut parts = key.splitn(2, CELL_KEY_SEPARATOR);
    if let (Some(row), Some(column_id)) = (parts.next(), parts.next())
        && !column_id.is_empty()
        && let Ok(row_index) = row.parse::<usize>()
    {
        return CellAddress {
            row_index,
            column_id: column_id.to_string(),
        };
    }
    log::debug!("malformed cell key {key:?}, treating as no valid target");
    CellAddress::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_plain_column_ids() {
        let address = CellAddress::new(42, "email");
        assert_eq!(parse_cell_key(&address.key()), address);
        assert_eq!(cell_key(0, "name"), "0:name");
    }

    #[test]
    fn malformed_keys_fail_soft() {
        for key in ["", "email", "5:", "x:email", ":email"] {
            let address = parse_cell_key(key);
            assert_eq!(address, CellAddress::default(), "key {key:?}");
            assert!(!address.is_valid_target());
        }
    }

    #[test]
    fn decoded_addresses_are_valid_targets() {
        assert!(parse_cell_key("3:status").is_valid_target());
    }
}
