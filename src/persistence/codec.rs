//! Fixed-width binary layout of a [`Record`] block.
//!
//! A table file is nothing but these blocks laid end to end, with no header,
//! footer or magic bytes:
//!
//! ```text
//! offset  size  field
//! 0       4     id     (u32, little-endian)
//! 4       255   name   (UTF-8, NUL padded)
//! 259     255   email  (UTF-8, NUL padded)
//! 514     4     age    (u32, little-endian)
//! ```

use byteorder::{ByteOrder, LittleEndian};

use super::record::{COLUMN_EMAIL_SIZE, COLUMN_NAME_SIZE, Record};

pub const ID_SIZE: usize = size_of::<u32>();
pub const AGE_SIZE: usize = size_of::<u32>();
pub const ID_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = NAME_OFFSET + COLUMN_NAME_SIZE;
pub const AGE_OFFSET: usize = EMAIL_OFFSET + COLUMN_EMAIL_SIZE;
pub const RECORD_SIZE: usize = AGE_OFFSET + AGE_SIZE;

pub fn encode_record(record: &Record, block: &mut [u8]) {
    //! Write `record` into the first [`RECORD_SIZE`] bytes of `block`.
    //!
    //! Panics if `block` is shorter than one record; callers size their
    //! buffers from [`RECORD_SIZE`].

    let block = &mut block[..RECORD_SIZE];
    LittleEndian::write_u32(&mut block[ID_OFFSET..NAME_OFFSET], record.id);
    block[NAME_OFFSET..EMAIL_OFFSET].copy_from_slice(&record.name);
    block[EMAIL_OFFSET..AGE_OFFSET].copy_from_slice(&record.email);
    LittleEndian::write_u32(&mut block[AGE_OFFSET..RECORD_SIZE], record.age);
}

pub fn decode_record(block: &[u8]) -> Record {
    //! Read one record from the first [`RECORD_SIZE`] bytes of `block`.
    //!
    //! The text columns are copied byte for byte so that a load followed by
    //! an archive reproduces the file exactly.

    let block = &block[..RECORD_SIZE];
    let mut name = [0u8; COLUMN_NAME_SIZE];
    let mut email = [0u8; COLUMN_EMAIL_SIZE];
    name.copy_from_slice(&block[NAME_OFFSET..EMAIL_OFFSET]);
    email.copy_from_slice(&block[EMAIL_OFFSET..AGE_OFFSET]);

    Record {
        id: LittleEndian::read_u32(&block[ID_OFFSET..NAME_OFFSET]),
        name,
        email,
        age: LittleEndian::read_u32(&block[AGE_OFFSET..RECORD_SIZE]),
    }
}

pub fn encode_records(records: &[Record]) -> Vec<u8> {
    let mut buffer = vec![0u8; records.len() * RECORD_SIZE];
    for (record, block) in records.iter().zip(buffer.chunks_exact_mut(RECORD_SIZE)) {
        encode_record(record, block);
    }
    buffer
}
