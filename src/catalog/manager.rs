//! Catalog manager: database and table lifecycle.

use std::path::Path;

use tracing::{debug, info, warn};

use super::config::CatalogConfig;
use super::confirm::Confirm;
use super::error::{CatalogError, CatalogResult};
use super::locks::DatabaseLocks;
use super::outcome::CatalogOutcome;
use super::schema::{SchemaBuilder, TableSchema};
use super::types::EntityKind;
use crate::storage::{DatabaseName, DiskStore, PrimaryKeyIndex, StorageError, TableName};

/// The catalog owns every database directory and table file under its root.
///
/// All methods take `&self`; the handle can be shared across threads.
/// Mutations on one database are serialized by a per-database lock.
pub struct Catalog {
    config: CatalogConfig,
    store: DiskStore,
    locks: DatabaseLocks,
}

impl Catalog {
    /// Open a catalog rooted at the given directory, creating it if needed.
    pub fn open(root: impl AsRef<Path>) -> CatalogResult<Self> {
        Self::open_with_config(CatalogConfig::new(root.as_ref()))
    }

    /// Open a catalog with custom configuration.
    pub fn open_with_config(config: CatalogConfig) -> CatalogResult<Self> {
        let store = DiskStore::open(&config.root, config.create_root_if_missing)?;
        info!("catalog opened at {}", store.root().display());
        Ok(Self {
            config,
            store,
            locks: DatabaseLocks::new(),
        })
    }

    /// Get the storage root.
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    /// Get the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Create a database directory.
    ///
    /// Creating a database that already exists succeeds.
    pub fn create_database(&self, name: &str) -> CatalogResult<CatalogOutcome> {
        let db = database_name(name)?;
        self.with_database_lock(&db, || {
            let newly_created = self.store.create_database_dir(&db)?;
            let path = self.store.database_path(&db);
            if newly_created {
                info!("created database '{}' at {}", db, path.display());
            } else {
                debug!("database '{}' already exists at {}", db, path.display());
            }

            Ok(CatalogOutcome::DatabaseCreated {
                name: db.as_str().to_string(),
                path,
                newly_created,
            })
        })
    }

    /// Create a table in an existing database.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// database exists, table name, table absent, each column in turn,
    /// primary key. Nothing is written unless all pass, and a header whose
    /// index sidecar cannot be written is removed again.
    pub fn create_table<I, K, V>(
        &self,
        database: &str,
        table: &str,
        columns: I,
        primary_key: Option<&str>,
    ) -> CatalogResult<CatalogOutcome>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let db = database_name(database)?;
        self.with_database_lock(&db, || {
            self.require_database(&db)?;
            let table = table_name(table)?;
            if self.store.table_exists(&db, &table) {
                debug!("table '{}' already exists in '{}'", table, db);
                return Err(self.table_exists_error(&db, &table));
            }

            let mut builder = SchemaBuilder::new(table.as_str()).columns(columns);
            if let Some(pk) = primary_key {
                builder = builder.primary_key(pk);
            }
            let schema = builder.build()?;

            let path = self
                .store
                .write_table_header(&db, &table, &schema.to_header())
                .map_err(|e| match e {
                    StorageError::AlreadyExists(_) => self.table_exists_error(&db, &table),
                    other => other.into(),
                })?;

            let index = if schema.primary_key().is_some() {
                match self.store.init_index(&db, &table) {
                    Ok(true) => {}
                    Ok(false) => debug!("reusing existing index sidecar for '{}'", table),
                    Err(e) => {
                        self.discard_table(&db, &table);
                        return Err(e.into());
                    }
                }
                Some(self.store.index_path(&db, &table))
            } else {
                None
            };

            info!(
                "created table '{}' in '{}' with {} column(s)",
                table,
                db,
                schema.columns.len()
            );

            Ok(CatalogOutcome::TableCreated {
                database: db.as_str().to_string(),
                table: table.as_str().to_string(),
                path,
                index,
                schema,
            })
        })
    }

    /// Remove a table's header file.
    ///
    /// The primary-key sidecar stays unless the catalog was configured with
    /// `remove_index_on_drop`.
    pub fn delete_table(&self, database: &str, table: &str) -> CatalogResult<CatalogOutcome> {
        let db = database_name(database)?;
        self.with_database_lock(&db, || {
            self.require_database(&db)?;
            let table = table_name(table)?;

            if !self.store.remove_table_file(&db, &table)? {
                return Err(self.table_not_found(&db, &table));
            }

            let index_removed = if self.config.remove_index_on_drop {
                self.store.remove_index_file(&db, &table)?
            } else {
                false
            };

            info!("deleted table '{}' from '{}'", table, db);
            Ok(CatalogOutcome::TableDropped {
                database: db.as_str().to_string(),
                table: table.as_str().to_string(),
                path: self.store.database_path(&db),
                index_removed,
            })
        })
    }

    /// Remove a database and everything in it.
    ///
    /// `confirmation` must produce the database name exactly as passed in
    /// `database` (case-sensitive). Anything else aborts without touching
    /// the disk.
    pub fn delete_database(
        &self,
        database: &str,
        confirmation: impl Confirm,
    ) -> CatalogResult<CatalogOutcome> {
        let db = database_name(database)?;
        self.with_database_lock(&db, || {
            self.require_database(&db)?;

            let answer = confirmation.confirm(db.as_str());
            if answer != db.as_str() {
                warn!("deletion of database '{}' aborted: confirmation does not match", db);
                return Err(CatalogError::ConfirmationMismatch {
                    name: db.as_str().to_string(),
                });
            }

            let path = self.store.remove_database_dir(&db)?;
            info!("deleted database '{}' at {}", db, path.display());
            Ok(CatalogOutcome::DatabaseDropped {
                name: db.as_str().to_string(),
                path,
            })
        })
    }

    /// Read a table's schema back from its header row.
    pub fn describe_table(&self, database: &str, table: &str) -> CatalogResult<TableSchema> {
        let db = database_name(database)?;
        self.require_database(&db)?;
        let table = table_name(table)?;
        if !self.store.table_exists(&db, &table) {
            return Err(self.table_not_found(&db, &table));
        }

        let line = self.store.read_table_header(&db, &table)?;
        TableSchema::from_header(table.key(), &line).map_err(|source| CatalogError::CorruptHeader {
            path: self.store.table_path(&db, &table),
            source,
        })
    }

    /// Read a table's primary-key index sidecar, if it has one.
    pub fn read_index(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Option<PrimaryKeyIndex>> {
        let db = database_name(database)?;
        self.require_database(&db)?;
        let table = table_name(table)?;
        Ok(self.store.read_index(&db, &table)?)
    }

    /// List database names, sorted.
    pub fn list_databases(&self) -> CatalogResult<Vec<String>> {
        Ok(self.store.list_databases()?)
    }

    /// List the tables of a database, sorted.
    pub fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        let db = database_name(database)?;
        self.require_database(&db)?;
        Ok(self.store.list_tables(&db)?)
    }

    /// Check if a database exists. Invalid names never exist.
    pub fn database_exists(&self, database: &str) -> bool {
        DatabaseName::new(database)
            .map(|db| self.store.database_exists(&db))
            .unwrap_or(false)
    }

    /// Check if a table exists. Invalid names never exist.
    pub fn table_exists(&self, database: &str, table: &str) -> bool {
        match (DatabaseName::new(database), TableName::new(table)) {
            (Ok(db), Ok(table)) => self.store.table_exists(&db, &table),
            _ => false,
        }
    }

    /// Run `f` holding the database's lock, then drop the lock entry if no
    /// other caller is waiting on it.
    fn with_database_lock<T>(
        &self,
        db: &DatabaseName,
        f: impl FnOnce() -> CatalogResult<T>,
    ) -> CatalogResult<T> {
        let lock = self.locks.get(db.key());
        let result = {
            let _guard = lock.lock();
            f()
        };
        drop(lock);
        self.locks.prune(db.key());
        result
    }

    /// Best-effort removal of a half-created table.
    fn discard_table(&self, db: &DatabaseName, table: &TableName) {
        match self.store.remove_table_file(db, table) {
            Ok(_) => debug!("removed table '{}' after failed index write", table),
            Err(e) => warn!("could not remove table '{}' after failed index write: {}", table, e),
        }
    }

    fn require_database(&self, db: &DatabaseName) -> CatalogResult<()> {
        if self.store.database_exists(db) {
            Ok(())
        } else {
            debug!("database '{}' does not exist", db);
            Err(CatalogError::DatabaseNotFound {
                name: db.as_str().to_string(),
                path: self.store.database_path(db),
            })
        }
    }

    fn table_exists_error(&self, db: &DatabaseName, table: &TableName) -> CatalogError {
        CatalogError::TableAlreadyExists {
            database: db.as_str().to_string(),
            table: table.as_str().to_string(),
            path: self.store.table_path(db, table),
        }
    }

    fn table_not_found(&self, db: &DatabaseName, table: &TableName) -> CatalogError {
        CatalogError::TableNotFound {
            database: db.as_str().to_string(),
            table: table.as_str().to_string(),
            path: self.store.database_path(db),
        }
    }
}

fn database_name(name: &str) -> CatalogResult<DatabaseName> {
    DatabaseName::new(name).map_err(|e| CatalogError::invalid_name(EntityKind::Database, name, e))
}

fn table_name(name: &str) -> CatalogResult<TableName> {
    TableName::new(name).map_err(|e| CatalogError::invalid_name(EntityKind::Table, name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::confirm::Prompt;
    use crate::catalog::error::ErrorKind;
    use crate::catalog::types::ColumnType;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup_catalog() -> (Catalog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let catalog = Catalog::open(temp_dir.path().join("database")).unwrap();
        (catalog, temp_dir)
    }

    fn users_columns() -> Vec<(&'static str, &'static str)> {
        vec![("id", "int"), ("name", "str")]
    }

    /// Every file and directory under the root, for "nothing changed" checks.
    fn snapshot(root: &Path) -> Vec<String> {
        fn walk(dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                out.push(path.display().to_string());
                if path.is_dir() {
                    walk(&path, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(root, &mut out);
        out.sort();
        out
    }

    #[test]
    fn test_create_database() {
        let (catalog, _dir) = setup_catalog();

        let outcome = catalog.create_database("MyDB").unwrap();
        let path = catalog.root().join("mydb");
        assert_eq!(outcome.path(), &path);
        assert!(path.is_dir());
        assert!(outcome.to_string().contains("created successfully"));
        assert!(catalog.database_exists("mydb"));
    }

    #[test]
    fn test_create_database_is_idempotent() {
        let (catalog, _dir) = setup_catalog();

        let first = catalog.create_database("mydb").unwrap();
        let second = catalog.create_database("mydb").unwrap();
        assert!(matches!(first, CatalogOutcome::DatabaseCreated { newly_created: true, .. }));
        assert!(matches!(second, CatalogOutcome::DatabaseCreated { newly_created: false, .. }));
        assert_eq!(catalog.list_databases().unwrap(), vec!["mydb"]);
    }

    #[test]
    fn test_invalid_names_do_not_touch_disk() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), None).unwrap();
        let before = snapshot(catalog.root());

        for bad in ["", "Invalid@DB", "my_db", "my-db", "../mydb", "a b"] {
            let err = catalog.create_database(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName, "create_database({:?})", bad);

            let err = catalog.create_table("mydb", bad, users_columns(), None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName, "create_table({:?})", bad);

            let err = catalog.create_table(bad, "users", users_columns(), None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName);

            let err = catalog.delete_table("mydb", bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName, "delete_table({:?})", bad);

            let err = catalog.delete_table(bad, "users").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName);

            let err = catalog.delete_database(bad, bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName, "delete_database({:?})", bad);
        }

        assert_eq!(snapshot(catalog.root()), before);
    }

    #[test]
    fn test_create_table_in_missing_database() {
        let (catalog, _dir) = setup_catalog();

        let err = catalog
            .create_table("missingdb", "t", vec![("a", "int")], None)
            .unwrap_err();
        match &err {
            CatalogError::DatabaseNotFound { name, .. } => assert_eq!(name, "missingdb"),
            other => panic!("expected DatabaseNotFound, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_create_table_with_unknown_type() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("db").unwrap();

        let err = catalog
            .create_table("db", "t", vec![("x", "integer")], None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        let msg = err.to_string();
        assert!(msg.contains("'integer'"));
        assert!(msg.contains("'x'"));
        for ty in ColumnType::NAMES {
            assert!(msg.contains(ty), "{} missing from {}", ty, msg);
        }
        assert!(!catalog.table_exists("db", "t"));
    }

    #[test]
    fn test_create_table_twice_leaves_original() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), Some("id")).unwrap();

        let path = catalog.root().join("mydb").join("users.csv");
        let original = fs::read(&path).unwrap();

        let err = catalog
            .create_table("mydb", "USERS", vec![("other", "bool")], None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::TableAlreadyExists { .. }));
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_existing_table_reported_before_column_errors() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), None).unwrap();

        let err = catalog
            .create_table("mydb", "users", vec![("bad!", "nope")], None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_header_round_trips() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        let columns = vec![
            ("Id", "INT"),
            ("name", "str"),
            ("ratio", "float"),
            ("z", "complex"),
            ("active", "bool"),
            ("doorkey", "bytes"),
            ("gen", "list"),
            ("joined", "Date"),
        ];
        catalog.create_table("mydb", "users", columns.clone(), Some("ID")).unwrap();

        let schema = catalog.describe_table("mydb", "Users").unwrap();
        let recovered: Vec<(String, String, bool)> = schema
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.column_type.to_string(), c.primary_key))
            .collect();
        let expected: Vec<(String, String, bool)> = columns
            .iter()
            .map(|(n, t)| (n.to_lowercase(), t.to_lowercase(), n.eq_ignore_ascii_case("id")))
            .collect();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn test_header_on_disk() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog
            .create_table("mydb", "users", vec![("id", "int"), ("name", "str")], Some("id"))
            .unwrap();

        let text = fs::read_to_string(catalog.root().join("mydb").join("users.csv")).unwrap();
        assert_eq!(text, "id:int:pk,name:str\r\n");
    }

    #[test]
    fn test_primary_key_not_found_writes_nothing() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        let err = catalog
            .create_table("mydb", "users", users_columns(), Some("email"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::PrimaryKeyNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let db_dir = catalog.root().join("mydb");
        assert!(!db_dir.join("users.csv").exists());
        assert!(!db_dir.join("users_map.json").exists());
    }

    #[test]
    fn test_primary_key_creates_empty_index() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        let outcome = catalog
            .create_table("mydb", "users", users_columns(), Some("ID"))
            .unwrap();
        let index_path = catalog.root().join("mydb").join("users_map.json");
        match &outcome {
            CatalogOutcome::TableCreated { index, schema, .. } => {
                assert_eq!(index.as_ref(), Some(&index_path));
                assert_eq!(schema.columns.iter().filter(|c| c.primary_key).count(), 1);
            }
            other => panic!("expected TableCreated, got {:?}", other),
        }

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&index_path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({}));

        let index = catalog.read_index("mydb", "users").unwrap().unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_no_primary_key_no_index() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), None).unwrap();

        assert!(!catalog.root().join("mydb").join("users_map.json").exists());
        assert_eq!(catalog.read_index("mydb", "users").unwrap(), None);
        assert!(catalog.describe_table("mydb", "users").unwrap().primary_key().is_none());
    }

    #[test]
    fn test_failed_index_write_removes_table() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        // `<name>.csv` fits in a file name but `<name>_map.json` does not
        let name = "t".repeat(248);
        let err = catalog
            .create_table("mydb", &name, vec![("id", "int")], Some("id"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(!catalog.table_exists("mydb", &name));

        catalog.create_table("mydb", &name, vec![("id", "int")], None).unwrap();
        assert!(catalog.table_exists("mydb", &name));
    }

    #[test]
    fn test_locks_released_after_operations() {
        let (catalog, _dir) = setup_catalog();

        assert!(catalog.create_table("ghost", "t", vec![("a", "int")], None).is_err());
        assert!(catalog.delete_database("ghost", "ghost").is_err());
        assert_eq!(catalog.locks.len(), 0);

        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), Some("id")).unwrap();
        catalog.delete_table("mydb", "users").unwrap();
        catalog.delete_database("mydb", "mydb").unwrap();
        assert_eq!(catalog.locks.len(), 0);
    }

    #[test]
    fn test_delete_table() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), None).unwrap();

        let outcome = catalog.delete_table("mydb", "users").unwrap();
        assert!(outcome.to_string().contains("deleted successfully"));
        assert!(!catalog.table_exists("mydb", "users"));
    }

    #[test]
    fn test_delete_missing_table() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        let err = catalog.delete_table("mydb", "testtable").unwrap_err();
        assert!(matches!(err, CatalogError::TableNotFound { .. }));
        assert!(err.to_string().starts_with("table 'testtable' does not exist"));
    }

    #[test]
    fn test_delete_table_in_missing_database() {
        let (catalog, _dir) = setup_catalog();

        let err = catalog.delete_table("nonexistentdb", "users").unwrap_err();
        assert!(matches!(err, CatalogError::DatabaseNotFound { .. }));
    }

    #[test]
    fn test_delete_table_can_remove_index() {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig::new(temp_dir.path()).remove_index_on_drop(true);
        let catalog = Catalog::open_with_config(config).unwrap();
        catalog.create_database("mydb").unwrap();
        catalog.create_table("mydb", "users", users_columns(), Some("id")).unwrap();

        let outcome = catalog.delete_table("mydb", "users").unwrap();
        assert!(matches!(outcome, CatalogOutcome::TableDropped { index_removed: true, .. }));
        assert!(!temp_dir.path().join("mydb").join("users_map.json").exists());
    }

    #[test]
    fn test_delete_database_requires_exact_confirmation() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("MyDB").unwrap();
        catalog.create_table("mydb", "users", users_columns(), Some("id")).unwrap();
        let before = snapshot(catalog.root());

        for wrong in ["mydb", "MYDB", "", "MyDB "] {
            let err = catalog.delete_database("MyDB", wrong).unwrap_err();
            assert!(matches!(err, CatalogError::ConfirmationMismatch { .. }));
            assert_eq!(err.kind(), ErrorKind::ConfirmationMismatch);
        }
        assert_eq!(snapshot(catalog.root()), before);

        catalog.delete_database("MyDB", "MyDB").unwrap();
        assert!(!catalog.database_exists("mydb"));
    }

    #[test]
    fn test_delete_database_prompt() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();

        let outcome = catalog
            .delete_database("mydb", Prompt(|name: &str| name.to_string()))
            .unwrap();
        assert!(matches!(outcome, CatalogOutcome::DatabaseDropped { .. }));
    }

    #[test]
    fn test_delete_missing_database_skips_prompt() {
        let (catalog, _dir) = setup_catalog();

        let err = catalog
            .delete_database("ghost", Prompt(|_: &str| -> String { panic!("prompted for missing database") }))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DatabaseNotFound { .. }));
    }

    #[test]
    fn test_list_tables() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        assert!(catalog.list_tables("mydb").unwrap().is_empty());

        for name in ["users", "orders", "products"] {
            catalog.create_table("mydb", name, vec![("id", "int")], Some("id")).unwrap();
        }
        assert_eq!(
            catalog.list_tables("mydb").unwrap(),
            vec!["orders", "products", "users"]
        );
    }

    #[test]
    fn test_describe_corrupt_header() {
        let (catalog, _dir) = setup_catalog();
        catalog.create_database("mydb").unwrap();
        fs::write(catalog.root().join("mydb").join("broken.csv"), "id:int:pk,x:int:pk\r\n").unwrap();

        let err = catalog.describe_table("mydb", "broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Corrupt);
    }

    #[test]
    fn test_concurrent_create_table_has_one_winner() {
        let (catalog, _dir) = setup_catalog();
        let catalog = Arc::new(catalog);
        catalog.create_database("mydb").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    catalog.create_table("mydb", "users", vec![("id", "int")], Some("id"))
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        for err in results.into_iter().filter_map(Result::err) {
            assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let (catalog, _dir) = setup_catalog();
        let db_dir = catalog.root().join("mydb");

        catalog.create_database("mydb").unwrap();
        catalog
            .create_table("mydb", "users", vec![("id", "int"), ("name", "str")], Some("id"))
            .unwrap();

        let schema = catalog.describe_table("mydb", "users").unwrap();
        let triples: Vec<(&str, ColumnType, bool)> = schema
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.column_type, c.primary_key))
            .collect();
        assert_eq!(
            triples,
            vec![("id", ColumnType::Int, true), ("name", ColumnType::Str, false)]
        );

        let again = catalog.create_table(
            "mydb",
            "users",
            vec![("id", "int"), ("name", "str")],
            Some("id"),
        );
        assert_eq!(again.unwrap_err().kind(), ErrorKind::AlreadyExists);

        catalog.delete_table("mydb", "users").unwrap();
        assert!(!db_dir.join("users.csv").exists());
        assert!(db_dir.join("users_map.json").exists());

        catalog.delete_database("mydb", "mydb").unwrap();
        assert!(!db_dir.exists());
    }
}
