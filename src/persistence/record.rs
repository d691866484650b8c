use std::fmt::Display;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::TableError;

pub const COLUMN_NAME_SIZE: usize = 255;
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// A single user entry of a [`super::RecordTable`].
///
/// The text columns live in fixed-size byte buffers padded with NUL, so every
/// record has the same statically known size on disk (see [`super::codec`]).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Record {
    pub id: u32,
    pub(super) name: [u8; COLUMN_NAME_SIZE],
    pub(super) email: [u8; COLUMN_EMAIL_SIZE],
    pub age: u32,
}

impl Record {
    pub fn new(id: u32, name: &str, email: &str, age: u32) -> Result<Record, TableError> {
        //! Build a record from its column values.
        //!
        //! Fails with [`TableError::InvalidArgument`] when a text value does not
        //! fit into its column or carries a NUL byte, which would be read back
        //! as the end of the value.

        Ok(Record {
            id,
            name: pack_column("name", name)?,
            email: pack_column("email", email)?,
            age,
        })
    }

    pub fn name(&self) -> &str {
        unpack_column(&self.name)
    }

    pub fn email(&self) -> &str {
        unpack_column(&self.email)
    }
}

fn pack_column<const N: usize>(column: &str, value: &str) -> Result<[u8; N], TableError> {
    let bytes = value.as_bytes();

    if bytes.len() > N {
        return Err(TableError::InvalidArgument(format!(
            "long value for {}: {} bytes, limit is {}",
            column,
            bytes.len(),
            N
        )));
    }
    if bytes.contains(&0) {
        return Err(TableError::InvalidArgument(format!(
            "invalid value for {}: contains a NUL byte",
            column
        )));
    }

    let mut packed = [0u8; N];
    packed[..bytes.len()].copy_from_slice(bytes);
    Ok(packed)
}

fn unpack_column(column: &[u8]) -> &str {
    let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    // Files written by other tools may carry bytes that are not UTF-8; keep
    // the longest valid prefix instead of failing the read.
    match std::str::from_utf8(&column[..end]) {
        Ok(text) => text,
        Err(e) => std::str::from_utf8(&column[..e.valid_up_to()]).unwrap_or_default(),
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.id,
            self.name(),
            self.email(),
            self.age
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("email", self.email())?;
        state.serialize_field("age", &self.age)?;
        state.end()
    }
}
