//! The record store: an ordered, file-backed list of records.
//!
//! Every addition rewrites the whole JSON file. That is O(n) per add, which
//! is fine for a class register and keeps the file a plain JSON array.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::StoreConfig;
use crate::error::{GradebookError, Result};
use crate::export::export_csv;
use crate::model::Record;

/// Owns the in-memory records and their persistence.
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    records: Vec<Record>,
}

impl Store {
    /// Open a store, loading any records already in `config.data_path`.
    ///
    /// A missing file yields an empty store; a malformed one is an error.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let records = load_records(&config.data_path)?;
        if records.is_empty() {
            tracing::info!(path = %config.data_path.display(), "opened empty store");
        } else {
            tracing::info!(
                path = %config.data_path.display(),
                records = records.len(),
                "opened store"
            );
        }
        Ok(Self { config, records })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Append a record and persist the whole collection.
    ///
    /// If persisting fails the record is dropped again so the in-memory list
    /// keeps matching the file.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.config.enforce_unique_rolls
            && self
                .records
                .iter()
                .any(|r| r.roll_number == record.roll_number)
        {
            return Err(GradebookError::DuplicateRoll(record.roll_number));
        }

        self.records.push(record);
        if let Err(e) = self.save_records() {
            tracing::warn!(error = %e, "save failed, discarding new record");
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Write all records to the configured data file.
    pub fn save_records(&self) -> Result<()> {
        save_records(&self.records, &self.config.data_path)
    }

    /// Write the CSV report to the configured report path.
    pub fn export_report(&self) -> Result<PathBuf> {
        self.export_report_to(&self.config.report_path)?;
        Ok(self.config.report_path.clone())
    }

    /// Write the CSV report to an explicit path.
    pub fn export_report_to(&self, path: &Path) -> Result<()> {
        export_csv(&self.records, path)
    }

    /// Records in insertion order.
    pub fn list_records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read records from `path`. A missing file is an empty list.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(GradebookError::io(path, e)),
    };
    let records: Vec<Record> =
        serde_json::from_str(&content).map_err(|source| GradebookError::MalformedData {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Write records to `path` as pretty-printed JSON.
///
/// The JSON goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a half-written file.
pub fn save_records(records: &[Record], path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| GradebookError::io(path, e.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| GradebookError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GradebookError::io(dir, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| GradebookError::io(tmp.path(), e))?;
    // The temp file starts owner-only; keep whatever mode the old file had.
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| GradebookError::io(tmp.path(), e))?;
    }
    tmp.persist(path).map_err(|e| GradebookError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), records = records.len(), "saved records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Marks;

    fn sample() -> Vec<Record> {
        vec![
            Record::present(1, "Asha", Marks::new(90.0, 80.0, 95.0)),
            Record::absent(2, "Bo"),
            Record::present(3, "Cy", Marks::new(30.5, 90.0, 90.0)),
        ]
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::in_dir(dir.path())).unwrap();
        assert!(store.is_empty());
        assert!(!dir.path().join("students.json").exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let records = sample();
        save_records(&records, &path).unwrap();
        assert_eq!(load_records(&path).unwrap(), records);
    }

    #[test]
    fn empty_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        save_records(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
        assert!(load_records(&path).unwrap().is_empty());
    }

    #[test]
    fn saved_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        save_records(&sample()[..1], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  {"));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["roll"], 1);
        assert_eq!(value[0]["marks"]["Science"], 95.0);
        assert_eq!(value[0]["present"], true);
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        save_records(&[], &path).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        save_records(&sample(), &path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(load_records(&path).unwrap(), sample());
    }

    #[test]
    fn add_record_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        let mut store = Store::open(config.clone()).unwrap();

        for record in sample() {
            store.add_record(record).unwrap();
        }
        assert_eq!(store.list_records(), sample().as_slice());

        let reopened = Store::open(config).unwrap();
        assert_eq!(reopened.list_records(), sample().as_slice());
    }

    #[test]
    fn malformed_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        std::fs::write(&config.data_path, "{ not json").unwrap();
        let err = Store::open(config).unwrap_err();
        assert!(matches!(err, GradebookError::MalformedData { .. }));
    }

    #[test]
    fn wrong_shape_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        std::fs::write(
            &path,
            r#"[{"roll": 1, "name": "A", "marks": {"English": 1, "Maths": 2, "Science": 3}, "present": true},
                {"roll": "two", "name": "B", "marks": {"English": 1, "Maths": 2, "Science": 3}, "present": true}]"#,
        )
        .unwrap();
        assert!(matches!(
            load_records(&path),
            Err(GradebookError::MalformedData { .. })
        ));
    }

    #[test]
    fn duplicate_rolls_allowed_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(StoreConfig::in_dir(dir.path())).unwrap();
        store.add_record(Record::absent(1, "A")).unwrap();
        store.add_record(Record::absent(1, "B")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_rolls_rejected_when_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            enforce_unique_rolls: true,
            ..StoreConfig::in_dir(dir.path())
        };
        let mut store = Store::open(config).unwrap();
        store.add_record(Record::absent(1, "A")).unwrap();
        let err = store.add_record(Record::absent(1, "B")).unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateRoll(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_save_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let config = StoreConfig {
            data_path: sub.join("students.json"),
            ..StoreConfig::in_dir(dir.path())
        };
        let mut store = Store::open(config).unwrap();
        // A regular file where the data directory should go.
        std::fs::write(&sub, "").unwrap();
        let err = store.add_record(Record::absent(1, "A")).unwrap_err();
        assert!(matches!(err, GradebookError::Io { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn export_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(StoreConfig::in_dir(dir.path())).unwrap();
        store.add_record(sample().remove(0)).unwrap();
        let path = store.export_report().unwrap();
        assert_eq!(path, dir.path().join("student_report.csv"));
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn export_empty_store_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::in_dir(dir.path())).unwrap();
        let path = store.export_report().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("Name,Roll No,English"));
    }
}
