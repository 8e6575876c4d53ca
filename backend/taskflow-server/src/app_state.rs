use sqlx::SqlitePool;

/// Shared state for request handlers.
///
/// The pool is the only shared mutable resource; handlers hold no locks
/// and keep no in-process caches, so requests run with arbitrary
/// concurrency and consistency is whatever sqlite guarantees per write.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
