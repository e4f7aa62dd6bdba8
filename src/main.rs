//! flatdb - command-line interface to the flat-file catalog.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use flatdb::catalog::{Catalog, CatalogConfig, CatalogError, CatalogResult, Prompt};

#[derive(Parser, Debug)]
#[command(name = "flatdb", version, about = "Manage flat-file databases and tables")]
struct Args {
    /// Directory holding the databases
    #[arg(short, long, env = "FLATDB_ROOT", default_value = "database")]
    root: PathBuf,

    /// Also remove a table's primary-key index when dropping it
    #[arg(long)]
    remove_index_on_drop: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a database (succeeds if it already exists)
    CreateDb { name: String },

    /// Create a table from name:type column specs
    CreateTable {
        database: String,
        table: String,
        /// Columns as name:type, e.g. id:int name:str
        #[arg(required = true, value_parser = parse_column)]
        columns: Vec<(String, String)>,
        #[arg(short, long)]
        primary_key: Option<String>,
    },

    /// Delete a table
    DropTable { database: String, table: String },

    /// Delete a database and all its tables
    DropDb {
        name: String,
        /// Confirm non-interactively by repeating the database name
        #[arg(long, value_name = "NAME")]
        yes: Option<String>,
    },

    /// Show a table's columns
    Describe { database: String, table: String },

    /// List databases, or the tables of one database
    List { database: Option<String> },
}

fn parse_column(spec: &str) -> Result<(String, String), String> {
    spec.split_once(':')
        .map(|(name, ty)| (name.to_string(), ty.to_string()))
        .ok_or_else(|| format!("expected name:type, got '{}'", spec))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = CatalogConfig::new(&args.root).remove_index_on_drop(args.remove_index_on_drop);
    let catalog = match Catalog::open_with_config(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error opening catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "root {}, remove_index_on_drop={}",
        catalog.root().display(),
        catalog.config().remove_index_on_drop
    );

    match run(&catalog, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// A missing table is reported as plain text; everything else as an error.
fn format_error(e: &CatalogError) -> String {
    match e {
        CatalogError::TableNotFound { .. } => e.to_string(),
        other => format!("Error: {}", other),
    }
}

fn run(catalog: &Catalog, command: Command) -> CatalogResult<()> {
    match command {
        Command::CreateDb { name } => {
            println!("{}", catalog.create_database(&name)?);
        }
        Command::CreateTable {
            database,
            table,
            columns,
            primary_key,
        } => {
            let outcome =
                catalog.create_table(&database, &table, columns, primary_key.as_deref())?;
            println!("{}", outcome);
        }
        Command::DropTable { database, table } => {
            println!("{}", catalog.delete_table(&database, &table)?);
        }
        Command::DropDb { name, yes } => {
            let outcome = match yes {
                Some(answer) => catalog.delete_database(&name, answer)?,
                None => catalog.delete_database(&name, Prompt(ask_confirmation))?,
            };
            println!("{}", outcome);
        }
        Command::Describe { database, table } => {
            print!("{}", catalog.describe_table(&database, &table)?);
        }
        Command::List { database: None } => {
            for name in catalog.list_databases()? {
                println!("{}", name);
            }
        }
        Command::List {
            database: Some(database),
        } => {
            for name in catalog.list_tables(&database)? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

/// Ask on the terminal. A failed read yields an empty answer, which aborts.
fn ask_confirmation(name: &str) -> String {
    print!(
        "Are you sure you want to delete the database '{}'? Type '{}' to confirm: ",
        name, name
    );
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => line.trim_end_matches(&['\r', '\n'][..]).to_string(),
        Err(_) => String::new(),
    }
}
