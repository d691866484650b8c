use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::codec::{RECORD_SIZE, decode_record, encode_records};
use super::error::TableError;
use super::record::Record;

/// Upper bound on the number of records a table holds unless another
/// capacity is picked through [`RecordTable::with_capacity`].
pub const MAX_TABLE_SIZE: usize = 10_000;

struct BackingFile {
    path: PathBuf,
    handle: File,
}

/// A fixed-capacity, in-memory array of [`Record`]s with an optional binding
/// to a file on disk.
///
/// The record buffer is allocated once, at construction, for the full
/// capacity and is never grown afterwards. When a file is bound, its handle
/// stays open for the lifetime of the table and is closed when the table is
/// dropped or [`RecordTable::close`] is called.
///
/// Records only reach the disk through [`RecordTable::archive`]; appends are
/// purely in-memory.
///
/// # Restrictions
/// - The table is meant for a single owner on a single thread.
/// - Two tables opened on the same path at the same time are not coordinated
/// in any way, the last one to archive wins.
pub struct RecordTable {
    capacity: usize,
    records: Vec<Record>,
    file: Option<BackingFile>,
}

impl RecordTable {
    pub fn in_memory() -> Result<RecordTable, TableError> {
        //! An empty table with [`MAX_TABLE_SIZE`] capacity and no file.

        RecordTable::allocate(MAX_TABLE_SIZE)
    }

    pub fn new(path: Option<&Path>) -> Result<RecordTable, TableError> {
        //! Create a table with the default [`MAX_TABLE_SIZE`] capacity.
        //!
        //! See [`RecordTable::with_capacity`] for how `path` is handled.

        RecordTable::with_capacity(MAX_TABLE_SIZE, path)
    }

    pub fn with_capacity(capacity: usize, path: Option<&Path>) -> Result<RecordTable, TableError> {
        //! Create a table holding at most `capacity` records.
        //!
        //! - With no `path` (or an empty one) the table lives in memory only.
        //! - With a `path` the file is opened for read and write, created when
        //! missing, and never truncated on open. Its content is loaded as a run
        //! of whole records.
        //!
        //! Fails when the file cannot be opened or read, when its size is not
        //! a multiple of the record size, when it holds more records than
        //! `capacity`, or when `capacity` records cannot be allocated. No
        //! table is returned in any of these cases.

        let mut table = RecordTable::allocate(capacity)?;

        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
            _ => {
                debug!("created in-memory table with capacity {}", capacity);
                return Ok(table);
            }
        };

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        table.load(&mut handle)?;
        info!(
            "opened table at {} with {} record(s)",
            path.display(),
            table.len()
        );

        table.file = Some(BackingFile { path, handle });
        Ok(table)
    }

    fn allocate(capacity: usize) -> Result<RecordTable, TableError> {
        let mut records = Vec::new();
        records.try_reserve_exact(capacity).map_err(|e| {
            TableError::InvalidArgument(format!(
                "capacity of {} records cannot be allocated: {}",
                capacity, e
            ))
        })?;

        Ok(RecordTable {
            capacity,
            records,
            file: None,
        })
    }

    fn load(&mut self, handle: &mut File) -> Result<(), TableError> {
        let size = handle.metadata()?.len();
        if size == 0 {
            return Ok(());
        }

        if size % RECORD_SIZE as u64 != 0 {
            warn!("rejected file of {} bytes: partial trailing record", size);
            return Err(TableError::TruncatedFile {
                size,
                record_size: RECORD_SIZE,
            });
        }

        let n_records = size / RECORD_SIZE as u64;
        if n_records > self.capacity as u64 {
            warn!(
                "rejected file of {} records: capacity is {}",
                n_records, self.capacity
            );
            return Err(TableError::OverflowOnLoad {
                records: n_records as usize,
                capacity: self.capacity,
            });
        }

        let mut buffer = vec![0u8; size as usize];
        handle.seek(SeekFrom::Start(0))?;
        handle.read_exact(&mut buffer)?;

        self.records
            .extend(buffer.chunks_exact(RECORD_SIZE).map(decode_record));
        debug!("loaded {} record(s) from file", self.records.len());

        Ok(())
    }

    pub fn append(&mut self, record: Record) -> Result<usize, TableError> {
        //! Store `record` after the last held record.
        //!
        //! Returns the index the record now occupies. A full table rejects
        //! the record and is left untouched.

        if self.is_full() {
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let index = self.records.len();
        self.records.push(record);
        debug!("appended record at index {}", index);

        Ok(index)
    }

    pub fn append_many<I>(&mut self, records: I) -> Result<usize, TableError>
    where
        I: IntoIterator<Item = Record>,
    {
        //! Bulk append, that uses the singular append under the hood.
        //!
        //! Returns the number of records appended. This is not atomic, records
        //! appended before the table fills up stay in the table.

        let mut n_appended = 0;

        for record in records {
            self.append(record)?;
            n_appended += 1;
        }

        Ok(n_appended)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn fetch(&self, index: usize) -> Result<&Record, TableError> {
        //! Same as [`RecordTable::get`] but reports a missing index as
        //! [`TableError::NotFound`].

        self.records.get(index).ok_or(TableError::NotFound {
            index,
            len: self.records.len(),
        })
    }

    pub fn archive(&mut self) -> Result<usize, TableError> {
        //! Write every held record to the bound file, replacing its content.
        //!
        //! The write starts at offset 0 and the file is then cut to exactly
        //! the written length, so stale records from a larger previous file
        //! do not survive. The data is synced before returning.
        //!
        //! Returns the number of records written, `0` when no file is bound.

        let Some(file) = self.file.as_mut() else {
            debug!("archive skipped: table has no backing file");
            return Ok(0);
        };

        let buffer = encode_records(&self.records);
        file.handle.seek(SeekFrom::Start(0))?;
        file.handle.write_all(&buffer)?;
        file.handle.set_len(buffer.len() as u64)?;
        file.handle.sync_all()?;

        info!(
            "archived {} record(s) to {}",
            self.records.len(),
            file.path.display()
        );
        Ok(self.records.len())
    }

    pub fn close(mut self) -> Result<(), TableError> {
        //! Release the table and close its file, surfacing any sync failure.
        //!
        //! Dropping the table closes the file as well, but silently.

        if let Some(file) = self.file.take() {
            file.handle.sync_all()?;
            debug!("closed {}", file.path.display());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.path.as_path())
    }

    pub fn has_backing_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Display for RecordTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .iter()
            .enumerate()
            .map(|(index, record)| format!("{:5} | {}", index, record))
            .collect();

        writeln!(f, "{:5} | ID | NAME | EMAIL | AGE\n{}", "#", rows.join("\n"))
    }
}
