// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization
// - Scoped connection / transaction helpers

pub mod connection;
pub mod migrations;
pub mod session;

pub use connection::{
    create_connection_pool, create_test_connection, get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};

pub use session::{with_connection, with_transaction};
