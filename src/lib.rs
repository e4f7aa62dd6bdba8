//! flatdb - a flat-file database catalog
//!
//! Databases are directories, tables are CSV files whose single header row
//! records the column names, their types and the primary key. This crate
//! manages that catalog: it validates names and types and creates or removes
//! the files. Reading and writing rows is left to a layer above it.
//!
//! # Example
//!
//! ```no_run
//! use flatdb::catalog::Catalog;
//!
//! let catalog = Catalog::open("./database").unwrap();
//! catalog.create_database("mydb").unwrap();
//! catalog
//!     .create_table("mydb", "users", [("id", "int"), ("name", "str")], Some("id"))
//!     .unwrap();
//! catalog.delete_database("mydb", "mydb").unwrap();
//! ```

pub mod catalog;
pub mod storage;
