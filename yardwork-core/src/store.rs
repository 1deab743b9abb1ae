//! On-disk record list for the mulch calculator.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::mulch::MulchRecord;

/// Default store location, resolved against the working directory.
pub const DATA_PATH: &str = "./data.json";

/// Full record list backed by a single JSON file, newest record first.
///
/// The file must exist before a run; the calculator never creates it. The
/// whole list is loaded up front and rewritten in full on commit. Single
/// writer assumed: no locking, concurrent runs can clobber each other.
#[derive(Debug)]
pub struct MulchStore {
    path: PathBuf,
    records: Vec<MulchRecord>,
}

impl MulchStore {
    /// Load every record from `path`, refusing to run without the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(StoreError::Missing { path });
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        let records = serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;

        Ok(MulchStore { path, records })
    }

    pub fn records(&self) -> &[MulchRecord] {
        &self.records
    }

    /// Insert `record` at the head of the list and rewrite the whole file,
    /// keeping older records in their existing order.
    pub fn commit(&mut self, record: MulchRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);

        let json =
            serde_json::to_string_pretty(&self.records).map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
