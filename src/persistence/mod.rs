//! Persistence is a single fixed-capacity table and its file format:
//! - Record (fixed layout, four columns: id, name, email, age)
//! - Codec (explicit byte layout of one record block on disk)
//! - Table (preallocated array of Records, optionally bound to a file)
//!

//  All modules of this lib
pub mod codec;
mod error;
mod record;
mod table;

//  External API
pub use error::TableError;
pub use record::{COLUMN_EMAIL_SIZE, COLUMN_NAME_SIZE, Record};
pub use table::{MAX_TABLE_SIZE, RecordTable};
