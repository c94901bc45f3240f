//! SQLite connection pool backing [`DieselRepository`](crate::repository::DieselRepository).

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied to every connection checked out of the pool.
///
/// Foreign keys are always enforced: deleting a user relies on them to drop
/// the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SqliteSettings {
    /// Write-ahead logging, so list reads do not block writers.
    pub wal: bool,
    pub busy_timeout: Duration,
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self {
            wal: true,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl SqliteSettings {
    fn pragmas(&self) -> String {
        let mut pragmas = String::from("PRAGMA foreign_keys = ON;");
        if self.wal {
            pragmas.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        pragmas.push_str(&format!(
            " PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ));
        pragmas
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.pragmas())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Pool for `database_url` with the default [`SqliteSettings`].
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    build_pool(database_url, SqliteSettings::default())
}

pub fn build_pool(database_url: &str, settings: SqliteSettings) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_customizer(Box::new(settings))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
        .map_err(|err| {
            log::error!("Failed to open database {database_url}: {err}");
            err
        })
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().map_err(|err| {
        log::error!("Failed to check out a database connection: {err}");
        err
    })
}
