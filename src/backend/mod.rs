//! Backend driver layer
//!
//! The proxy reaches every real database through ODBC. This module holds the
//! trait seam the proxy delegates to (`BackendConnection` /
//! `BackendStatement`), the static driver table, the process-wide registry,
//! and the ODBC implementation of the seam.

pub mod drivers;
pub mod odbc;
pub mod registry;

use odbc_api::Error as OdbcError;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("ODBC error: {0}")]
    Odbc(#[from] OdbcError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Connection is closed")]
    Closed,
}

/// Credentials and per-connection overrides supplied alongside a URL.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Override the backend's default ODBC driver name.
    pub odbc_driver: Option<String>,
}

/// One live backend connection. Object-safe so tests can substitute a
/// recording fake for the ODBC implementation. Dropping a connection
/// disconnects it.
pub trait BackendConnection {
    /// The product name the backend reports for itself, unmasked.
    fn product_name(&self) -> Result<String, BackendError>;

    /// The backend's own version string, unmasked.
    fn product_version(&self) -> Result<String, BackendError>;

    /// Name of the driver actually serving this connection.
    fn driver_name(&self) -> &str;

    fn prepare<'c>(&'c self, sql: &str) -> Result<Box<dyn BackendStatement + 'c>, BackendError>;

    /// Prepare and run a statement, discarding any result rows.
    fn execute(&self, sql: &str) -> Result<(), BackendError>;

    /// Run a query and return the first column of the first row, if any.
    fn query_single_value(&self, sql: &str) -> Result<Option<String>, BackendError>;

    fn commit(&self) -> Result<(), BackendError>;

    fn rollback(&self) -> Result<(), BackendError>;

    fn set_autocommit(&self, enabled: bool) -> Result<(), BackendError>;
}

/// A prepared statement on the real backend.
pub trait BackendStatement {
    /// The statement text as handed to the backend.
    fn sql(&self) -> &str;

    /// Bind the given text parameters, execute, and fetch all rows as text.
    fn query(&mut self, params: &[String]) -> Result<Vec<Vec<String>>, BackendError>;

    /// Bind and execute, discarding any result rows.
    fn execute(&mut self, params: &[String]) -> Result<(), BackendError>;
}
