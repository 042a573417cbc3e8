//! JSON file persistence for the address book.
//!
//! The whole book is written as one JSON array of
//! `{"name", "phone", "birthday"}` objects in book order; loading reads
//! the whole array back and revalidates every field through the same
//! rules as interactive input. There is nothing incremental here: save
//! replaces the file, load replaces the book.

use crate::book::AddressBook;
use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// What to do with a stored record whose phone or birthday fails
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail the whole load on the first invalid record.
    #[default]
    Strict,
    /// Drop invalid records with a warning and load the rest.
    SkipInvalid,
}

/// Untyped shape of one persisted entry.
///
/// Field validation happens when the raw entry is turned into a
/// [`Record`], so a bad phone or birthday can be reported (or skipped)
/// per record instead of failing the JSON parse.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl RawRecord {
    fn into_record(self) -> Result<Record, ValidationError> {
        let mut record = Record::new(ContactName::new(self.name));
        if let Some(phone) = self.phone {
            record.phone = Some(PhoneNumber::new(phone)?);
        }
        if let Some(birthday) = self.birthday {
            record.birthday = Some(Birthday::parse(&birthday)?);
        }
        Ok(record)
    }
}

/// Write the entire book to `path`, replacing the file.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let records: Vec<&Record> = book.iter().collect();

    let write_err = |source: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)
        .map_err(|source| write_err(source.into()))?;
    writer.flush().map_err(write_err)
}

/// Load a book from `path`, validating every record.
///
/// # Errors
///
/// `NotFound` when the file does not exist, `Read` when it cannot be
/// read, `Malformed` when the content is not a JSON array of record
/// objects, and `InvalidRecord` when a stored field fails validation
/// under [`LoadPolicy::Strict`].
pub fn load(path: &Path, policy: LoadPolicy) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: Vec<RawRecord> =
        serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut book = AddressBook::new();
    for entry in raw {
        let name = entry.name.clone();
        match entry.into_record() {
            Ok(record) => book.add_record(record),
            Err(source) => match policy {
                LoadPolicy::Strict => {
                    return Err(StorageError::InvalidRecord { name, source });
                }
                LoadPolicy::SkipInvalid => {
                    warn!(name = %name, error = %source, "skipping invalid stored record");
                }
            },
        }
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(name: &str, phone: &str) -> Record {
        Record::new(ContactName::new(name)).with_phone(PhoneNumber::new(phone).unwrap())
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111"));
        book.add_record(
            record("Bob", "2222222").with_birthday(
                Birthday::new(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()).unwrap(),
            ),
        );
        book.add_record(Record::new(ContactName::new("Carol")));
        book
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");

        let book = sample_book();
        save(&book, &path).unwrap();
        let loaded = load(&path, LoadPolicy::Strict).unwrap();

        assert_eq!(loaded.len(), book.len());
        let original: Vec<&Record> = book.iter().collect();
        let reloaded: Vec<&Record> = loaded.iter().collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");

        save(&sample_book(), &path).unwrap();

        let mut smaller = AddressBook::new();
        smaller.add_record(record("Zed", "7777777"));
        save(&smaller, &path).unwrap();

        let loaded = load(&path, LoadPolicy::Strict).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("Zed").is_some());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        match load(&path, LoadPolicy::Strict) {
            Err(StorageError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            load(&path, LoadPolicy::Strict),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        fs::write(&path, r#"{"name": "Alice"}"#).unwrap();

        // An object where the array should be is a shape error
        assert!(matches!(
            load(&path, LoadPolicy::Strict),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_accepts_null_and_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        fs::write(
            &path,
            r#"[{"name": "Alice", "phone": null, "birthday": null}, {"name": "Bob"}]"#,
        )
        .unwrap();

        let book = load(&path, LoadPolicy::Strict).unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.get("Alice").unwrap().phone.is_none());
        assert!(book.get("Bob").unwrap().birthday.is_none());
    }

    #[test]
    fn test_strict_load_fails_on_invalid_phone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        fs::write(
            &path,
            r#"[{"name": "Alice", "phone": "555-1234", "birthday": null}]"#,
        )
        .unwrap();

        match load(&path, LoadPolicy::Strict) {
            Err(StorageError::InvalidRecord { name, .. }) => assert_eq!(name, "Alice"),
            other => panic!("expected InvalidRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_skip_invalid_load_keeps_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        fs::write(
            &path,
            r#"[
                {"name": "Alice", "phone": "555-1234", "birthday": null},
                {"name": "Bob", "phone": "2222222", "birthday": "9999-01-01T00:00:00"},
                {"name": "Carol", "phone": "3333333", "birthday": "1990-05-17T00:00:00"}
            ]"#,
        )
        .unwrap();

        let book = load(&path, LoadPolicy::SkipInvalid).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.get("Carol").is_some());
    }

    #[test]
    fn test_persisted_shape_matches_contract() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("address_book.json");
        save(&sample_book(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["name"], "Alice");
        assert_eq!(entries[1]["birthday"], "1990-05-17T00:00:00");
        assert!(entries[2]["phone"].is_null());
    }
}
