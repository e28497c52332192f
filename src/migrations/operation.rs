/// Implements [`sqlx_migrator::Operation`] for every enabled backend from two
/// functions returning sea-query schema statements.
///
/// ```rust,ignore
/// schema_operation!(Operation, up_statement, down_statement);
/// ```
macro_rules! schema_operation {
    ($operation:ty, $up:path, $down:path) => {
        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Postgres> for $operation {
            async fn up(
                &self,
                connection: &mut sqlx::PgConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::PostgresQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::PgConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::PostgresQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }

        #[cfg(feature = "sqlite")]
        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $operation {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

/// Registers a migration with its parents and operations for every enabled backend.
macro_rules! order_migration {
    ($migration:ty, $name:literal, [$($parent:expr),*], [$($operation:expr),* $(,)?]) => {
        sqlx_migrator::postgres_migration!(
            $migration,
            "tron_energy",
            $name,
            sqlx_migrator::vec_box![$($parent),*],
            sqlx_migrator::vec_box![$($operation),*]
        );

        #[cfg(feature = "sqlite")]
        sqlx_migrator::sqlite_migration!(
            $migration,
            "tron_energy",
            $name,
            sqlx_migrator::vec_box![$($parent),*],
            sqlx_migrator::vec_box![$($operation),*]
        );
    };
}

pub(crate) use order_migration;
pub(crate) use schema_operation;
