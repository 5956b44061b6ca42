// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `cargo xtask` for the personnel directory workspace.
//!
//! `ci` runs `lint`, `test` and `verify-migrations` in that order and stops
//! at the first failure.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::BTreeSet;

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail, eyre},
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

const TABLES: [&str; 2] = ["departments", "employees"];

/// Columns that back the duplicate checks and need a unique index.
const UNIQUE_COLUMNS: [(&str, &str); 3] = [
    ("departments", "name"),
    ("employees", "email"),
    ("employees", "employee_id"),
];

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Cli {
    #[command(subcommand)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Task {
    /// Lint, test, then verify migrations
    Ci,
    /// Check formatting, clippy and rustdoc with warnings denied
    Lint,
    /// Run unit, integration and doc tests for the workspace
    Test,
    /// Apply and revert the persistence migrations on a scratch database
    VerifyMigrations,
}

impl Task {
    fn run(self) -> Result<()> {
        match self {
            Self::Ci => {
                for task in [Self::Lint, Self::Test, Self::VerifyMigrations] {
                    task.run()?;
                }
                Ok(())
            }
            Self::Lint => lint(),
            Self::Test => test(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    cli.task.run()
}

/// Runs `cargo` with `args`, optionally extending its environment.
fn cargo(args: &[&str], env: &[(&str, &str)]) -> Result<()> {
    tracing::info!("cargo {}", args.join(" "));
    let expression = env
        .iter()
        .fold(duct::cmd("cargo", args.iter().copied()), |expr, &(key, value)| {
            expr.env(key, value)
        });
    expression
        .run()
        .map(drop)
        .wrap_err_with(|| format!("`cargo {}` failed", args.join(" ")))
}

fn lint() -> Result<()> {
    cargo(&["fmt", "--all", "--check"], &[])?;
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        &[],
    )?;

    let metadata = MetadataCommand::new()
        .exec()
        .wrap_err("Failed to read cargo metadata")?;
    let packages: Vec<&str> = metadata
        .workspace_default_packages()
        .into_iter()
        .map(|package| -> &str { &package.name })
        .collect();
    let mut args: Vec<&str> = vec!["doc", "--no-deps"];
    for name in packages {
        args.extend(["--package", name]);
    }
    cargo(&args, &[("RUSTDOCFLAGS", "-D warnings")])
}

fn test() -> Result<()> {
    cargo(&["test", "--workspace", "--all-targets"], &[])?;
    cargo(&["test", "--workspace", "--doc"], &[])
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct IndexRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Integer)]
    unique: i32,
}

#[derive(QueryableByName)]
struct ForeignKeyRow {
    #[diesel(sql_type = Text)]
    table: String,
    #[diesel(sql_type = Text)]
    from: String,
    #[diesel(sql_type = Text)]
    to: String,
}

/// Applies every migration to an in-memory database with foreign keys
/// enforced, checks the resulting schema, then reverts every migration and
/// checks that no table is left.
fn verify_migrations() -> Result<()> {
    let mut conn: SqliteConnection =
        SqliteConnection::establish(":memory:").wrap_err("Failed to open in-memory SQLite")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys")?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;
    tracing::info!("Applied {} migration(s)", applied.len());

    let tables: BTreeSet<String> = user_tables(&mut conn)?;
    for table in TABLES {
        if !tables.contains(table) {
            bail!("Table `{table}` is missing after migrating");
        }
    }

    for (table, column) in UNIQUE_COLUMNS {
        if !unique_columns(&mut conn, table)?.contains(column) {
            bail!("`{table}.{column}` has no single-column unique index");
        }
    }

    let references_departments: bool = employee_references(&mut conn)?
        .iter()
        .any(|fk| fk.from == "department_id" && fk.table == "departments" && fk.to == "id");
    if !references_departments {
        bail!("`employees.department_id` does not reference `departments.id`");
    }
    tracing::info!("Schema has the expected tables, unique indexes and foreign key");

    let reverted = conn
        .revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;
    tracing::info!("Reverted {} migration(s)", reverted.len());

    let leftover: BTreeSet<String> = user_tables(&mut conn)?;
    if !leftover.is_empty() {
        bail!("Tables remain after reverting every migration: {leftover:?}");
    }

    tracing::info!("Migrations verified");
    Ok(())
}

fn user_tables(conn: &mut SqliteConnection) -> Result<BTreeSet<String>> {
    let rows: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations'",
    )
    .load(conn)
    .wrap_err("Failed to list tables")?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Columns of `table` covered by a unique index on that column alone.
fn unique_columns(conn: &mut SqliteConnection, table: &str) -> Result<BTreeSet<String>> {
    let indexes: Vec<IndexRow> = diesel::sql_query(format!("PRAGMA index_list({table})"))
        .load(conn)
        .wrap_err_with(|| format!("Failed to list indexes of {table}"))?;

    let mut columns: BTreeSet<String> = BTreeSet::new();
    for index in indexes.into_iter().filter(|index| index.unique != 0) {
        let indexed: Vec<NameRow> =
            diesel::sql_query(format!("PRAGMA index_info({})", index.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read index {}", index.name))?;
        if let [only] = indexed.as_slice() {
            columns.insert(only.name.clone());
        }
    }
    Ok(columns)
}

fn employee_references(conn: &mut SqliteConnection) -> Result<Vec<ForeignKeyRow>> {
    diesel::sql_query("PRAGMA foreign_key_list(employees)")
        .load(conn)
        .wrap_err("Failed to list foreign keys of employees")
}
