// Copyright (C) 2024-2026 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation and Infrastructure Orchestration
//!
//! ## Backend Validation
//!
//! The server runs on `SQLite` by default and on `PostgreSQL` whenever a
//! database URL is configured. Both backends are exercised from here:
//!
//! - `cargo test` — Runs all standard tests against in-memory `SQLite` (fast, no infrastructure)
//! - `cargo xtask test-postgres` — Runs the ignored backend validation tests against Postgres
//! - `cargo xtask verify-migrations` — Checks that `migrations/` and `migrations_postgres/`
//!   produce the same schema
//!
//! ### Implementation Details
//!
//! The Postgres commands:
//! - Orchestrate Docker container lifecycle (start, wait, stop, cleanup)
//! - Provision a `PostgreSQL` 16 container with a throwaway database
//! - Pass the connection URL to tests through the environment
//! - Guarantee cleanup even on failure
//!
//! ### Design Principles
//!
//! - No test infrastructure is embedded in test code
//! - No tests silently skip due to missing services
//! - External databases are opt-in only, never automatic

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{PgConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, schema parity)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib and binary tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run `PostgreSQL` backend validation tests
    #[command(visible_alias = "tp")]
    TestPostgres,

    /// Verify schema parity between `SQLite` and `PostgreSQL` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::TestPostgres => test_postgres(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, schema parity)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    test_postgres()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting, typos, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Check for typos in the project using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Run lib/binary tests, then doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib and binary tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// A disposable `PostgreSQL` container.
struct PostgresContainer {
    name: &'static str,
    db_name: &'static str,
    user: &'static str,
    password: &'static str,
    port: &'static str,
}

impl PostgresContainer {
    /// Starts the container and waits up to 30 seconds for it to accept queries.
    fn start(self) -> Result<Self> {
        use std::thread::sleep;
        use std::time::Duration;

        tracing::info!("Checking Docker availability");
        cmd!("docker", "--version")
            .run_with_trace()
            .wrap_err("Docker is not available. Please install Docker.")?;

        tracing::info!("Cleaning up any existing container named {}", self.name);
        self.remove();

        tracing::info!("Starting PostgreSQL container: {}", self.name);
        cmd!(
            "docker",
            "run",
            "--name",
            self.name,
            "-e",
            format!("POSTGRES_DB={}", self.db_name),
            "-e",
            format!("POSTGRES_USER={}", self.user),
            "-e",
            format!("POSTGRES_PASSWORD={}", self.password),
            "-p",
            format!("{}:5432", self.port),
            "-d",
            "postgres:16"
        )
        .run_with_trace()
        .wrap_err("Failed to start PostgreSQL container")?;

        tracing::info!("Waiting for PostgreSQL to be ready...");
        let max_attempts = 30;

        for attempt in 1..=max_attempts {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {}/{}", attempt, max_attempts);

            let result = cmd!(
                "docker",
                "exec",
                self.name,
                "psql",
                "-U",
                self.user,
                "-d",
                self.db_name,
                "-c",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if result.is_ok() {
                tracing::info!("PostgreSQL is ready");
                return Ok(self);
            }
        }

        self.remove();
        Err(color_eyre::eyre::eyre!(
            "PostgreSQL did not become ready within timeout"
        ))
    }

    fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.db_name
        )
    }

    /// Stops and removes the container, ignoring failures.
    fn remove(&self) {
        let _ = cmd!("docker", "stop", self.name)
            .stdout_null()
            .stderr_null()
            .run();
        let _ = cmd!("docker", "rm", self.name)
            .stdout_null()
            .stderr_null()
            .run();
    }
}

/// Run `PostgreSQL` backend validation tests
///
/// Starts a disposable `PostgreSQL` 16 container on port 5433, runs the
/// ignored `backend_validation_tests` of `olympiad-cms-persistence` against it
/// with `DATABASE_URL` and `OLYMPIAD_TEST_BACKEND=postgres` set, and removes
/// the container afterwards, even when tests fail.
///
/// ## Requirements
///
/// - Docker must be installed and running
/// - Port 5433 must be available
/// - libpq must be available for compilation
///
/// ## Usage
///
/// ```bash
/// cargo xtask test-postgres
/// ```
fn test_postgres() -> Result<()> {
    tracing::info!("Starting PostgreSQL backend validation");

    let container = PostgresContainer {
        name: "olympiad-cms-test-postgres",
        db_name: "olympiad_test",
        user: "olympiad",
        password: "test_password",
        port: "5433", // Non-standard port to avoid clashing with a local server
    }
    .start()?;

    // Filter to the backend_validation_tests module to avoid running non-ignored tests
    tracing::info!("Running PostgreSQL backend validation tests");
    let test_result = cmd!(
        "cargo",
        "test",
        "--package",
        "olympiad-cms-persistence",
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.database_url())
    .env("OLYMPIAD_TEST_BACKEND", "postgres")
    .run_with_trace();

    tracing::info!("Stopping PostgreSQL container");
    container.remove();

    test_result.wrap_err("PostgreSQL backend validation tests failed")?;

    tracing::info!("PostgreSQL backend validation completed successfully");
    Ok(())
}

/// Verify schema parity between `SQLite` and `PostgreSQL` migrations
///
/// Applies `migrations/` to an in-memory `SQLite` database and
/// `migrations_postgres/` to a disposable Postgres container (port 5434),
/// introspects both schemas (tables, columns, normalized types, nullability,
/// keys, unique constraints, indexes) and fails on any mismatch. The
/// container is removed regardless of outcome.
///
/// ## Usage
///
/// ```bash
/// cargo xtask verify-migrations
/// ```
fn verify_migrations() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, MigrationHarness};

    tracing::info!("Starting schema parity verification");

    let container = PostgresContainer {
        name: "olympiad-cms-verify-migrations",
        db_name: "olympiad_verify",
        user: "olympiad",
        password: "verify_password",
        port: "5434", // Different port from test-postgres to avoid conflicts
    }
    .start()?;

    let verification_result = (|| -> Result<()> {
        tracing::info!("Applying SQLite migrations");
        #[allow(clippy::items_after_statements)]
        const SQLITE_MIGRATIONS: diesel_migrations::EmbeddedMigrations =
            embed_migrations!("../crates/persistence/migrations");

        let mut sqlite_conn = SqliteConnection::establish(":memory:")
            .wrap_err("Failed to create SQLite in-memory database")?;

        sqlite_conn
            .run_pending_migrations(SQLITE_MIGRATIONS)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to apply SQLite migrations: {}", e))?;

        tracing::info!("Applying PostgreSQL migrations");
        #[allow(clippy::items_after_statements)]
        const POSTGRES_MIGRATIONS: diesel_migrations::EmbeddedMigrations =
            embed_migrations!("../crates/persistence/migrations_postgres");

        let mut pg_conn = PgConnection::establish(&container.database_url())
            .wrap_err("Failed to connect to PostgreSQL")?;

        pg_conn
            .run_pending_migrations(POSTGRES_MIGRATIONS)
            .map_err(|e| {
                color_eyre::eyre::eyre!("Failed to apply PostgreSQL migrations: {}", e)
            })?;

        tracing::info!("Introspecting schemas");
        let sqlite_schema = introspect_sqlite_schema(&mut sqlite_conn)?;
        let postgres_schema = introspect_postgres_schema(&mut pg_conn)?;

        tracing::info!("Comparing schemas");
        compare_schemas(&sqlite_schema, &postgres_schema)?;

        tracing::info!("✓ Schema parity verification passed");
        Ok(())
    })();

    container.remove();

    verification_result
}

/// Normalized schema representation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    unique_constraints: BTreeSet<Vec<String>>,
    /// Column lists of non-unique indexes. Names are not compared.
    indexes: BTreeSet<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: String,
    nullable: bool,
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let mut table_info = Table::default();

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        for col in columns {
            table_info.columns.insert(
                col.name.clone(),
                Column {
                    normalized_type: normalize_sqlite_type(&col.r#type),
                    nullable: col.notnull == 0,
                },
            );

            if col.pk > 0 {
                table_info.primary_keys.insert(col.name);
            }
        }

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get indexes for table {}", table.name))?;

        for idx in indexes {
            let index_columns: Vec<IndexColumnInfo> =
                diesel::sql_query(format!("PRAGMA index_info({})", idx.name))
                    .load(conn)
                    .wrap_err(format!("Failed to get index columns for {}", idx.name))?;

            let column_names: Vec<String> = index_columns.into_iter().map(|c| c.name).collect();

            // origin 'u' is a UNIQUE constraint, 'c' a CREATE INDEX, 'pk' the primary key
            match idx.origin.as_str() {
                "u" => {
                    table_info.unique_constraints.insert(column_names);
                }
                "c" => {
                    table_info.indexes.insert(column_names);
                }
                _ => {}
            }
        }

        schema.tables.insert(table.name, table_info);
    }

    Ok(schema)
}

/// Introspect `PostgreSQL` schema (the `public` schema only)
#[allow(clippy::too_many_lines)]
fn introspect_postgres_schema(conn: &mut PgConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        table_name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
    }

    #[derive(QueryableByName)]
    struct ConstraintColumn {
        #[diesel(sql_type = Text)]
        constraint_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT table_name::text AS table_name FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
           AND table_name != '__diesel_schema_migrations' \
         ORDER BY table_name",
    )
    .load(conn)
    .wrap_err("Failed to query PostgreSQL tables")?;

    for table in tables {
        let mut table_info = Table::default();

        let columns: Vec<ColumnInfo> = diesel::sql_query(
            "SELECT column_name::text AS column_name, data_type::text AS data_type, \
                    is_nullable::text AS is_nullable \
             FROM information_schema.columns \
             WHERE table_schema = 'public' AND table_name = $1 \
             ORDER BY ordinal_position",
        )
        .bind::<Text, _>(&table.table_name)
        .load(conn)
        .wrap_err(format!("Failed to get columns for table {}", table.table_name))?;

        for col in columns {
            table_info.columns.insert(
                col.column_name,
                Column {
                    normalized_type: normalize_postgres_type(&col.data_type),
                    nullable: col.is_nullable == "YES",
                },
            );
        }

        let constraint_columns = |constraint_type: &str,
                                  conn: &mut PgConnection|
         -> Result<BTreeMap<String, Vec<String>>> {
            let rows: Vec<ConstraintColumn> = diesel::sql_query(
                "SELECT tc.constraint_name::text AS constraint_name, \
                        kcu.column_name::text AS column_name \
                 FROM information_schema.table_constraints tc \
                 JOIN information_schema.key_column_usage kcu \
                   ON tc.constraint_name = kcu.constraint_name \
                   AND tc.table_schema = kcu.table_schema \
                   AND tc.table_name = kcu.table_name \
                 WHERE tc.constraint_type = $1 \
                   AND tc.table_schema = 'public' \
                   AND tc.table_name = $2 \
                 ORDER BY tc.constraint_name, kcu.ordinal_position",
            )
            .bind::<Text, _>(constraint_type)
            .bind::<Text, _>(&table.table_name)
            .load(conn)
            .wrap_err(format!(
                "Failed to get {constraint_type} constraints for table {}",
                table.table_name
            ))?;

            let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for row in rows {
                grouped
                    .entry(row.constraint_name)
                    .or_default()
                    .push(row.column_name);
            }
            Ok(grouped)
        };

        table_info.primary_keys = constraint_columns("PRIMARY KEY", conn)?
            .into_values()
            .flatten()
            .collect();
        table_info.unique_constraints = constraint_columns("UNIQUE", conn)?
            .into_values()
            .collect();

        // Plain indexes only; primary key and unique indexes are covered above
        let index_rows: Vec<ConstraintColumn> = diesel::sql_query(
            "SELECT i.relname::text AS constraint_name, a.attname::text AS column_name \
             FROM pg_class t \
             JOIN pg_namespace n ON n.oid = t.relnamespace \
             JOIN pg_index ix ON ix.indrelid = t.oid \
             JOIN pg_class i ON i.oid = ix.indexrelid \
             JOIN LATERAL unnest(ix.indkey) WITH ORDINALITY AS k(attnum, ord) ON true \
             JOIN pg_attribute a ON a.attrelid = t.oid AND a.attnum = k.attnum \
             WHERE n.nspname = 'public' AND t.relname = $1 \
               AND NOT ix.indisprimary AND NOT ix.indisunique \
             ORDER BY i.relname, k.ord",
        )
        .bind::<Text, _>(&table.table_name)
        .load(conn)
        .wrap_err(format!(
            "Failed to get indexes for table {}",
            table.table_name
        ))?;

        let mut index_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in index_rows {
            index_map
                .entry(row.constraint_name)
                .or_default()
                .push(row.column_name);
        }
        table_info.indexes = index_map.into_values().collect();

        schema.tables.insert(table.table_name, table_info);
    }

    Ok(schema)
}

/// Normalize `SQLite` type to common representation
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer".to_string()
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real".to_string()
    } else if normalized.contains("BLOB") {
        "blob".to_string()
    } else {
        "text".to_string() // TEXT, CHAR, CLOB and SQLite's default affinity
    }
}

/// Normalize `PostgreSQL` `information_schema` type to common representation
fn normalize_postgres_type(postgres_type: &str) -> String {
    match postgres_type.to_lowercase().as_str() {
        "smallint" | "integer" | "bigint" => "integer".to_string(),
        "real" | "double precision" | "numeric" => "real".to_string(),
        "bytea" => "blob".to_string(),
        _ => "text".to_string(),
    }
}

/// Compare schemas and fail on the first mismatch
fn compare_schemas(sqlite_schema: &Schema, postgres_schema: &Schema) -> Result<()> {
    let sqlite_tables: BTreeSet<_> = sqlite_schema.tables.keys().collect();
    let postgres_tables: BTreeSet<_> = postgres_schema.tables.keys().collect();

    if sqlite_tables != postgres_tables {
        let mut errors = Vec::new();

        for table in sqlite_tables.difference(&postgres_tables) {
            errors.push(format!(
                "  - Table '{table}' exists in SQLite but not in PostgreSQL"
            ));
        }

        for table in postgres_tables.difference(&sqlite_tables) {
            errors.push(format!(
                "  - Table '{table}' exists in PostgreSQL but not in SQLite"
            ));
        }

        return Err(color_eyre::eyre::eyre!(
            "❌ Schema parity check FAILED: Table mismatch\n{}",
            errors.join("\n")
        ));
    }

    for table_name in sqlite_tables {
        let sqlite_table = &sqlite_schema.tables[table_name];
        let postgres_table = &postgres_schema.tables[table_name];

        let sqlite_columns: BTreeSet<_> = sqlite_table.columns.keys().collect();
        let postgres_columns: BTreeSet<_> = postgres_table.columns.keys().collect();

        if sqlite_columns != postgres_columns {
            let mut errors = Vec::new();

            for col in sqlite_columns.difference(&postgres_columns) {
                errors.push(format!(
                    "    - Column '{col}' exists in SQLite but not in PostgreSQL"
                ));
            }

            for col in postgres_columns.difference(&sqlite_columns) {
                errors.push(format!(
                    "    - Column '{col}' exists in PostgreSQL but not in SQLite"
                ));
            }

            return Err(color_eyre::eyre::eyre!(
                "❌ Schema parity check FAILED: Column mismatch in table '{}'\n{}",
                table_name,
                errors.join("\n")
            ));
        }

        for col_name in sqlite_columns {
            let sqlite_col = &sqlite_table.columns[col_name];
            let postgres_col = &postgres_table.columns[col_name];

            if sqlite_col != postgres_col {
                return Err(color_eyre::eyre::eyre!(
                    "❌ Schema parity check FAILED: Column definition mismatch in table '{}', column '{}'\n  SQLite: {:?}\n  PostgreSQL: {:?}",
                    table_name,
                    col_name,
                    sqlite_col,
                    postgres_col
                ));
            }
        }

        let checks = [
            (
                "Primary key",
                format!("{:?}", sqlite_table.primary_keys),
                format!("{:?}", postgres_table.primary_keys),
            ),
            (
                "Unique constraint",
                format!("{:?}", sqlite_table.unique_constraints),
                format!("{:?}", postgres_table.unique_constraints),
            ),
            (
                "Index",
                format!("{:?}", sqlite_table.indexes),
                format!("{:?}", postgres_table.indexes),
            ),
        ];

        for (what, sqlite, postgres) in checks {
            if sqlite != postgres {
                return Err(color_eyre::eyre::eyre!(
                    "❌ Schema parity check FAILED: {} mismatch in table '{}'\n  SQLite: {}\n  PostgreSQL: {}",
                    what,
                    table_name,
                    sqlite,
                    postgres
                ));
            }
        }
    }

    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
