// src/db/session.rs
//
// Scoped database access
//
// A connection is borrowed from the pool for exactly one operation and
// returned on every exit path, including early returns and panics.
// Write operations run inside a transaction that commits only when the
// closure succeeds.

use log::warn;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use super::connection::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// Run `work` with a pooled connection, outside any explicit transaction.
pub fn with_connection<T, F>(pool: &ConnectionPool, work: F) -> AppResult<T>
where
    F: FnOnce(&Connection) -> AppResult<T>,
{
    let conn = get_connection(pool)?;
    work(&conn)
}

/// Run `work` inside a write transaction.
///
/// - `Ok` commits; a failed commit is returned as the error.
/// - `Err` rolls back and returns the original error.
/// - A panic unwinds through the `Transaction` drop, which rolls back.
///
/// The write lock is taken up front so two concurrent writers queue on
/// the busy timeout instead of failing on lock upgrade.
pub fn with_transaction<T, F>(pool: &ConnectionPool, work: F) -> AppResult<T>
where
    F: FnOnce(&Transaction<'_>) -> AppResult<T>,
{
    let mut conn = get_connection(pool)?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    match work(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!("event=rollback status=error error={}", rollback_err);
            }
            Err(err)
        }
    }
}
