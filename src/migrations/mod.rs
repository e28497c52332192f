//! Schema migrations for the order tables.
//!
//! Migrations are registered with [`sqlx_migrator`]; each one declares its parent
//! revision so the migrator can order them, and each operation has an `up` and a
//! `down` step so any revision can be rolled back. Every migration runs in a single
//! transaction.
//!
//! PostgreSQL is the production backend. SQLite is available behind the `sqlite`
//! feature for local development and the integration tests.
//!
//! # Revisions
//!
//! | Revision | Parent | Changes |
//! |---|---|---|
//! | `baseline` | - | Creates `orders`, `energy_orders`, `trx_exchange_orders`, `premium_orders` |
//! | `m0002_trx_exchange_expires_at` | `baseline` | Adds `trx_exchange_orders.expires_at` and backfills it |
//! | `m0003_user_confirmation_columns` | `m0002_trx_exchange_expires_at` | Adds user confirmation columns and `premium_orders.fail_reason` |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut conn = pool.acquire().await?;
//!
//! migrations::upgrade::<sqlx::Postgres>(&mut conn, None).await?;
//! migrations::downgrade::<sqlx::Postgres>(&mut conn, &DowngradeTarget::Steps(1)).await?;
//! ```

pub mod backfill;
mod m0001;
mod m0002;
mod m0003;
mod operation;

use log::info;
use serde::Serialize;
use sqlx_migrator::{Info, Migrate, Migration, Migrator, Plan};

use crate::entity::StoreError;

pub use backfill::{backfill_expires_at, expiry_for, order_timeout, ORDER_TIMEOUT_MINUTES};
pub use m0001::Baseline;
pub use m0002::M0002;
pub use m0003::M0003;

/// Application name every revision is recorded under
pub const APP: &str = "tron_energy";

/// Bookkeeping table maintained by the migrator
pub const MIGRATION_TABLE: &str = "_sqlx_migrator_migrations";

/// Database backends the migrations can run against.
pub trait Backend: sqlx::Database {
    /// sea-query builder that renders statements for this backend
    type Builder: sea_query::QueryBuilder + Default + Send;

    /// Query returning the number of tables named [`MIGRATION_TABLE`]
    const MIGRATION_TABLE_EXISTS: &'static str;
}

impl Backend for sqlx::Postgres {
    type Builder = sea_query::PostgresQueryBuilder;

    const MIGRATION_TABLE_EXISTS: &'static str = "SELECT COUNT(*) FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = '_sqlx_migrator_migrations'";
}

#[cfg(feature = "sqlite")]
impl Backend for sqlx::Sqlite {
    type Builder = sea_query::SqliteQueryBuilder;

    const MIGRATION_TABLE_EXISTS: &'static str = "SELECT COUNT(*) FROM sqlite_master \
         WHERE type = 'table' AND name = '_sqlx_migrator_migrations'";
}

/// A revision in the migration chain
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Revision {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub summary: &'static str,
}

/// Every revision, parents first. Must match what [`new`] registers.
pub const REVISIONS: [Revision; 3] = [
    Revision {
        name: "baseline",
        parent: None,
        summary: "create order tables",
    },
    Revision {
        name: "m0002_trx_exchange_expires_at",
        parent: Some("baseline"),
        summary: "add trx_exchange_orders.expires_at and backfill it",
    },
    Revision {
        name: "m0003_user_confirmation_columns",
        parent: Some("m0002_trx_exchange_expires_at"),
        summary: "add user confirmation columns and premium_orders.fail_reason",
    },
];

/// How far [`downgrade`] rolls back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DowngradeTarget {
    /// Revert the latest `n` applied revisions
    Steps(usize),
    /// Revert everything applied after the named revision, keeping it
    Revision(String),
    /// Revert every revision
    All,
}

/// Creates a [`Migrator`] with every revision registered.
///
/// # Errors
///
/// Returns an error if migration registration fails.
pub fn new<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    Baseline: Migration<DB>,
    M0002: Migration<DB>,
    M0003: Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migration(Box::new(Baseline))?;
    migrator.add_migration(Box::new(M0002))?;
    migrator.add_migration(Box::new(M0003))?;

    Ok(migrator)
}

/// Every known revision with its parent, oldest first
pub fn history() -> &'static [Revision] {
    &REVISIONS
}

/// Looks up a revision by name
pub fn revision(name: &str) -> Result<&'static Revision, StoreError> {
    REVISIONS
        .iter()
        .find(|revision| revision.name == name)
        .ok_or_else(|| StoreError::UnknownRevision(name.to_string()))
}

/// Applies pending revisions, all of them or up to and including `target`.
pub async fn upgrade<DB>(
    connection: &mut DB::Connection,
    target: Option<&str>,
) -> Result<(), StoreError>
where
    DB: Backend,
    Migrator<DB>: Migrate<DB>,
    Baseline: Migration<DB>,
    M0002: Migration<DB>,
    M0003: Migration<DB>,
{
    let plan = match target {
        Some(name) => {
            let revision = revision(name)?;
            info!("Upgrading schema to revision {}", revision.name);
            Plan::apply_name(APP, &Some(revision.name.to_string()))
        }
        None => {
            info!("Upgrading schema to the latest revision");
            Plan::apply_all()
        }
    };

    let migrator = new::<DB>()?;
    migrator.run(connection, &plan).await?;

    info!("Schema upgrade completed");
    Ok(())
}

/// Reverts applied revisions according to `target`.
pub async fn downgrade<DB>(
    connection: &mut DB::Connection,
    target: &DowngradeTarget,
) -> Result<(), StoreError>
where
    DB: Backend,
    Migrator<DB>: Migrate<DB>,
    Baseline: Migration<DB>,
    M0002: Migration<DB>,
    M0003: Migration<DB>,
{
    let plan = match target {
        DowngradeTarget::Steps(0) => {
            info!("Nothing to downgrade");
            return Ok(());
        }
        DowngradeTarget::Steps(steps) => {
            info!("Downgrading schema by {} revision(s)", steps);
            Plan::revert_count(*steps)
        }
        DowngradeTarget::Revision(name) => {
            let keep = revision(name)?;
            let child = REVISIONS.iter().find(|r| r.parent == Some(keep.name));
            match child {
                Some(child) => {
                    info!("Downgrading schema to revision {}", keep.name);
                    Plan::revert_name(APP, &Some(child.name.to_string()))
                }
                None => {
                    info!("Revision {} is the head, nothing to downgrade", keep.name);
                    return Ok(());
                }
            }
        }
        DowngradeTarget::All => {
            info!("Downgrading every revision");
            Plan::revert_all()
        }
    };

    let migrator = new::<DB>()?;
    migrator.run(connection, &plan).await?;

    info!("Schema downgrade completed");
    Ok(())
}

/// Names of the applied revisions, oldest first.
///
/// Returns an empty list when the database was never migrated.
pub async fn applied<DB>(connection: &mut DB::Connection) -> Result<Vec<String>, StoreError>
where
    DB: Backend,
    for<'c> &'c mut DB::Connection: sqlx::Executor<'c, Database = DB>,
    for<'q> DB::Arguments<'q>: sqlx::IntoArguments<'q, DB>,
    (i64,): for<'r> sqlx::FromRow<'r, DB::Row>,
    (String,): for<'r> sqlx::FromRow<'r, DB::Row>,
{
    let (tables,) = sqlx::query_as::<DB, (i64,)>(DB::MIGRATION_TABLE_EXISTS)
        .fetch_one(&mut *connection)
        .await?;
    if tables == 0 {
        return Ok(Vec::new());
    }

    let statement = format!("SELECT name FROM {MIGRATION_TABLE} WHERE app = '{APP}' ORDER BY id");
    let rows = sqlx::query_as::<DB, (String,)>(&statement)
        .fetch_all(&mut *connection)
        .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revisions_form_a_single_chain() {
        let mut parent = None;
        for revision in history() {
            assert_eq!(revision.parent, parent);
            parent = Some(revision.name);
        }
    }

    #[test]
    fn unknown_revision_is_rejected() {
        let err = revision("m9999_missing").unwrap_err();
        assert!(matches!(err, StoreError::UnknownRevision(name) if name == "m9999_missing"));
    }

    #[test]
    fn migrator_registers_every_revision() {
        assert!(new::<sqlx::Postgres>().is_ok());
    }
}
