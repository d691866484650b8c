use std::io;

use thiserror::Error;

/// Every way a [`super::RecordTable`] operation can fail.
///
/// None of the failures leave the table half-mutated: an append that is
/// rejected does not touch the buffer, and a construction that fails returns
/// no table at all.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("table full: capacity of {capacity} records reached")]
    CapacityExceeded { capacity: usize },

    #[error("not found: index {index} with {len} record(s) held")]
    NotFound { index: usize, len: usize },

    #[error("io failure: {0}")]
    Io(#[from] io::Error),

    #[error("overflow on load: file holds {records} records, capacity is {capacity}")]
    OverflowOnLoad { records: usize, capacity: usize },

    #[error("truncated file: {size} bytes is not a multiple of the {record_size} byte record")]
    TruncatedFile { size: u64, record_size: usize },
}
