//! Disk-backed store: the only code that touches the filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};
use super::index::PrimaryKeyIndex;
use super::types::{validate_alphanumeric, DatabaseName, TableName};

/// Line terminator written after the header row.
pub const HEADER_TERMINATOR: &str = "\r\n";

/// Maps databases and tables onto a directory tree under a single root.
///
/// ```text
/// <root>/<db>/<table>.csv
/// <root>/<db>/<table>_map.json
/// ```
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open a store rooted at `root`, creating the directory if asked to.
    pub fn open(root: impl Into<PathBuf>, create_if_missing: bool) -> StorageResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            if !create_if_missing {
                return Err(StorageError::RootNotFound(root));
            }
            fs::create_dir_all(&root)
                .map_err(|e| StorageError::io("create storage root", &root, e))?;
            debug!("created storage root {}", root.display());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self, db: &DatabaseName) -> PathBuf {
        self.root.join(db.key())
    }

    pub fn table_path(&self, db: &DatabaseName, table: &TableName) -> PathBuf {
        self.database_path(db).join(table.file_name())
    }

    pub fn index_path(&self, db: &DatabaseName, table: &TableName) -> PathBuf {
        self.database_path(db).join(table.index_file_name())
    }

    pub fn database_exists(&self, db: &DatabaseName) -> bool {
        self.database_path(db).is_dir()
    }

    pub fn table_exists(&self, db: &DatabaseName, table: &TableName) -> bool {
        self.table_path(db, table).is_file()
    }

    /// Create the database directory and any missing parents.
    ///
    /// Returns `true` if the directory was newly created.
    pub fn create_database_dir(&self, db: &DatabaseName) -> StorageResult<bool> {
        let path = self.database_path(db);
        let existed = path.is_dir();
        fs::create_dir_all(&path).map_err(|e| StorageError::io("create directory", &path, e))?;
        Ok(!existed)
    }

    /// Write the header row into a new table file.
    ///
    /// Uses exclusive create, so of two racing writers exactly one wins and
    /// the other gets [`StorageError::AlreadyExists`] without touching the
    /// winner's file.
    pub fn write_table_header(
        &self,
        db: &DatabaseName,
        table: &TableName,
        header: &str,
    ) -> StorageResult<PathBuf> {
        let path = self.table_path(db, table);
        let contents = format!("{}{}", header, HEADER_TERMINATOR);
        if !create_new_file(&path, contents.as_bytes())? {
            return Err(StorageError::AlreadyExists(path));
        }
        Ok(path)
    }

    /// Read the header row of a table, without its line terminator.
    pub fn read_table_header(&self, db: &DatabaseName, table: &TableName) -> StorageResult<String> {
        let path = self.table_path(db, table);
        let file = fs::File::open(&path).map_err(|e| StorageError::io("open", &path, e))?;
        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|e| StorageError::io("read header of", &path, e))?;
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
        Ok(trimmed.to_string())
    }

    /// Create an empty primary-key index next to the table unless one is
    /// already there.
    ///
    /// Returns `true` if a new sidecar was written.
    pub fn init_index(&self, db: &DatabaseName, table: &TableName) -> StorageResult<bool> {
        let path = self.index_path(db, table);
        let json = PrimaryKeyIndex::new()
            .to_json()
            .map_err(|e| StorageError::CorruptedData {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        create_new_file(&path, json.as_bytes())
    }

    /// Read the primary-key index sidecar, if the table has one.
    pub fn read_index(
        &self,
        db: &DatabaseName,
        table: &TableName,
    ) -> StorageResult<Option<PrimaryKeyIndex>> {
        let path = self.index_path(db, table);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io("read", &path, e)),
        };
        let index = PrimaryKeyIndex::from_json(&text).map_err(|e| StorageError::CorruptedData {
            path,
            reason: e.to_string(),
        })?;
        Ok(Some(index))
    }

    /// Remove a table's header file. Returns `false` if there was none.
    pub fn remove_table_file(&self, db: &DatabaseName, table: &TableName) -> StorageResult<bool> {
        remove_file_if_present(&self.table_path(db, table))
    }

    /// Remove a table's index sidecar. Returns `false` if there was none.
    pub fn remove_index_file(&self, db: &DatabaseName, table: &TableName) -> StorageResult<bool> {
        remove_file_if_present(&self.index_path(db, table))
    }

    /// Remove a database directory and everything in it.
    pub fn remove_database_dir(&self, db: &DatabaseName) -> StorageResult<PathBuf> {
        let path = self.database_path(db);
        fs::remove_dir_all(&path).map_err(|e| StorageError::io("remove directory", &path, e))?;
        Ok(path)
    }

    /// Names of the database directories under the root, sorted.
    ///
    /// Entries whose names could not have been produced by the catalog are
    /// skipped.
    pub fn list_databases(&self) -> StorageResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in read_dir(&self.root)? {
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if validate_alphanumeric(name).is_ok() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Names of the tables in a database, sorted.
    pub fn list_tables(&self, db: &DatabaseName) -> StorageResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in read_dir(&self.database_path(db))? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(TableName::EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_alphanumeric(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Create `path` with `contents` unless it exists. Returns `false` if it did.
fn create_new_file(path: &Path, contents: &[u8]) -> StorageResult<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(StorageError::io("create", path, e)),
    };
    let written = file.write_all(contents).and_then(|_| file.sync_all());
    drop(file);
    discard_on_error(path, written)?;
    Ok(true)
}

/// Remove a freshly created file whose contents could not be written, so a
/// half-written file never passes for a complete one.
fn discard_on_error(path: &Path, written: io::Result<()>) -> StorageResult<()> {
    let Err(e) = written else {
        return Ok(());
    };
    if let Err(cleanup) = fs::remove_file(path) {
        warn!("could not remove partial file {}: {}", path.display(), cleanup);
    }
    Err(StorageError::io("write", path, e))
}

fn remove_file_if_present(path: &Path) -> StorageResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StorageError::io("remove", path, e)),
    }
}

fn read_dir(path: &Path) -> StorageResult<Vec<fs::DirEntry>> {
    fs::read_dir(path)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|e| StorageError::io("list", path, e))
}
