use std::fs;
use std::path::Path;

use slate_engine::persistence::codec::RECORD_SIZE;
use slate_engine::persistence::{MAX_TABLE_SIZE, Record, RecordTable, TableError};
use tempfile::tempdir;

use super::{_seed_file, _user};

#[test]
fn table_creates_empty_without_file() {
    let table = RecordTable::new(None).unwrap();

    assert_eq!(table.capacity(), MAX_TABLE_SIZE);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert!(!table.has_backing_file());
    assert_eq!(table.path(), None);
}

#[test]
fn table_treats_empty_path_as_in_memory() {
    let table = RecordTable::new(Some(Path::new(""))).unwrap();
    assert!(!table.has_backing_file());
}

#[test]
fn table_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");

    let table = RecordTable::new(Some(path.as_path())).unwrap();

    assert_eq!(table.capacity(), MAX_TABLE_SIZE);
    assert_eq!(table.len(), 0);
    assert!(table.has_backing_file());
    assert_eq!(table.path(), Some(path.as_path()));
    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn table_loads_records_from_old_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let users = vec![_user(1, 20), _user(2, 22)];
    _seed_file(&path, &users);

    let table = RecordTable::new(Some(path.as_path())).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0), Some(&users[0]));
    assert_eq!(table.get(1), Some(&users[1]));
    assert_eq!(table.get(1).unwrap().name(), "user2");
    assert_eq!(table.get(1).unwrap().email(), "user2@example.com");
    assert_eq!(table.get(2), None);
}

#[test]
fn table_rejects_partial_trailing_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    _seed_file(&path, &[_user(1, 20)]);
    let mut bytes = fs::read(&path).unwrap();
    bytes.extend_from_slice(&[0u8; 3]);
    fs::write(&path, &bytes).unwrap();

    match RecordTable::new(Some(path.as_path())) {
        Err(TableError::TruncatedFile { size, record_size }) => {
            assert_eq!(size, (RECORD_SIZE + 3) as u64);
            assert_eq!(record_size, RECORD_SIZE);
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("partial record was accepted"),
    }
}

#[test]
fn table_rejects_file_larger_than_capacity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    _seed_file(&path, &[_user(1, 20), _user(2, 22), _user(3, 23)]);

    let result = RecordTable::with_capacity(2, Some(path.as_path()));

    assert!(matches!(
        result,
        Err(TableError::OverflowOnLoad {
            records: 3,
            capacity: 2
        })
    ));
}

#[test]
fn table_fails_on_unopenable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("test.db");

    assert!(matches!(
        RecordTable::new(Some(path.as_path())),
        Err(TableError::Io(_))
    ));
}

#[test]
fn table_append_success() {
    let mut table = RecordTable::in_memory().unwrap();
    let user = Record::new(1, "First User", "first@example.com", 21).unwrap();

    assert_eq!(table.append(user.clone()).unwrap(), 0);
    assert_eq!(table.capacity(), MAX_TABLE_SIZE);
    assert_eq!(table.len(), 1);

    let stored = table.get(0).unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.name(), "First User");
    assert_eq!(stored.email(), "first@example.com");
    assert_eq!(stored.age, 21);
}

#[test]
fn table_get_returns_latest_append() {
    let mut table = RecordTable::in_memory().unwrap();

    for id in 1..=5 {
        table.append(_user(id, 20 + id)).unwrap();
        assert_eq!(table.len(), id as usize);
        assert_eq!(table.get(id as usize - 1), Some(&_user(id, 20 + id)));
    }
}

#[test]
fn table_append_full() {
    let mut table = RecordTable::in_memory().unwrap();
    let user = Record::new(1, "user", "user@example.com", 20).unwrap();

    for index in 0..MAX_TABLE_SIZE {
        assert_eq!(table.append(user.clone()).unwrap(), index);
        assert!(table.len() <= MAX_TABLE_SIZE);
    }
    assert!(table.is_full());

    let result = table.append(user);
    assert!(matches!(
        result,
        Err(TableError::CapacityExceeded {
            capacity: MAX_TABLE_SIZE
        })
    ));
    assert_eq!(table.len(), MAX_TABLE_SIZE);
}

#[test]
fn table_append_many_stops_at_capacity() {
    let mut table = RecordTable::with_capacity(3, None).unwrap();

    let result = table.append_many((1..=5).map(|id| _user(id, 30)));

    assert!(result.is_err());
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(2).unwrap().id, 3);
}

#[test]
fn table_get_out_of_range() {
    let mut table = RecordTable::in_memory().unwrap();
    assert_eq!(table.get(0), None);
    assert_eq!(table.get(usize::MAX), None);

    table.append(_user(1, 20)).unwrap();
    assert!(table.get(0).is_some());
    assert_eq!(table.get(1), None);
    assert!(matches!(
        table.fetch(1),
        Err(TableError::NotFound { index: 1, len: 1 })
    ));
}

#[test]
fn record_rejects_oversized_columns() {
    let long_name = "n".repeat(256);
    let long_email = "e".repeat(300);

    assert!(matches!(
        Record::new(1, &long_name, "user@example.com", 20),
        Err(TableError::InvalidArgument(_))
    ));
    assert!(matches!(
        Record::new(1, "user", &long_email, 20),
        Err(TableError::InvalidArgument(_))
    ));
    assert!(matches!(
        Record::new(1, "us\0er", "user@example.com", 20),
        Err(TableError::InvalidArgument(_))
    ));
    assert!(Record::new(1, &"n".repeat(255), "user@example.com", 20).is_ok());
}

#[test]
fn record_displays_columns() {
    let user = Record::new(3, "user3", "user3@example.com", 23).unwrap();
    assert_eq!(user.to_string(), "3 | user3 | user3@example.com | 23");
}

#[test]
fn table_rejects_unallocatable_capacity() {
    assert!(matches!(
        RecordTable::with_capacity(usize::MAX, None),
        Err(TableError::InvalidArgument(_))
    ));
}

#[test]
fn table_displays_every_record_in_order() {
    let mut table = RecordTable::in_memory().unwrap();
    table.append_many(vec![_user(1, 20), _user(2, 22)]).unwrap();

    let shown = table.to_string();
    let lines: Vec<&str> = shown.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ID | NAME | EMAIL | AGE"));
    assert_eq!(lines[1], "    0 | 1 | user1 | user1@example.com | 20");
    assert_eq!(lines[2], "    1 | 2 | user2 | user2@example.com | 22");
    assert_eq!(table.iter().count(), 2);
}
