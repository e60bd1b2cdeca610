use thiserror::Error;

/// Errors that can occur when working with a chained table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Every primary slot is occupied and the key is not already stored
    #[error("Insert Error: Hash Table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    /// A table needs at least one slot
    #[error("Invalid input: capacity must be greater than zero")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, TableError>;
