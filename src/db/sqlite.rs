use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, Pool, Sqlite};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error};

pub type SqlitePool = Pool<Sqlite>;

/// Read-only query executor over the e-commerce database.
///
/// Connections are opened on first use, never at construction, so a missing
/// database file surfaces per request rather than at startup.
#[derive(Clone)]
pub struct OrdersStore {
    pool: SqlitePool,
}

impl OrdersStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build a lazy pool over `path`. The file is opened read-only and never created.
    pub fn open(path: &Path) -> Self {
        let connect_opts = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(60))
            .connect_lazy_with(connect_opts);
        Self::new(pool)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a parameterless statement and return every row in store order.
    pub async fn fetch_rows<R>(&self, sql: &str) -> Result<Vec<R>, sqlx::Error>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.fetch_rows_with(sql, SqliteArguments::default()).await
    }

    /// Run `sql` with positional `?` arguments and return every row in store order.
    ///
    /// One connection is held for the duration of the call and handed back to the
    /// pool when it returns, on success or failure.
    pub async fn fetch_rows_with<'q, R>(
        &self,
        sql: &'q str,
        args: SqliteArguments<'q>,
    ) -> Result<Vec<R>, sqlx::Error>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql = sql.trim(), "executing query");
        let mut conn = self
            .pool
            .acquire()
            .await
            .inspect_err(|e| error!(error = %e, "failed to open database connection"))?;

        sqlx::query_as_with::<Sqlite, R, _>(sql, args)
            .fetch_all(&mut *conn)
            .await
            .inspect_err(|e| error!(sql = sql.trim(), error = %e, "query failed"))
    }

    /// Run a statement that always yields exactly one row (e.g. an aggregate).
    pub async fn fetch_one_row<R>(&self, sql: &str) -> Result<R, sqlx::Error>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.fetch_rows::<R>(sql)
            .await?
            .into_iter()
            .next()
            .ok_or(sqlx::Error::RowNotFound)
    }
}
