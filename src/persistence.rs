//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Diesel connections are synchronous, so every adapter offloads its work to
//! Tokio's blocking pool through [`run_blocking_with`].

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type handed to adapter closures.
pub type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}

/// Checks out a connection and runs `f` on the blocking thread pool.
///
/// Pool checkout failures and join errors are mapped into the caller's
/// error type with `map_pool` and `map_join` respectively.
pub(crate) async fn run_blocking_with<F, T, E>(
    pool: &PgPool,
    f: F,
    map_pool: fn(PoolError) -> E,
    map_join: fn(tokio::task::JoinError) -> E,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection: PooledConn = owned_pool.get().map_err(map_pool)?;
        f(&mut connection)
    })
    .await
    .map_err(map_join)?
}
