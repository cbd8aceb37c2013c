//! sqlfacade: a dialect facade for MySQL-only schema browsers
//!
//! Lets a client tool that speaks one fixed set of MySQL-flavored
//! introspection queries browse PostgreSQL, Snowflake, SQLite and H2
//! databases over ODBC. Three pieces make that work:
//!
//! - [`router`] resolves proxy-form and double-encoded connection strings
//!   to the backend they actually name,
//! - [`proxy`] wraps the live connection, masking the backend's identity as
//!   MySQL and intercepting statement preparation,
//! - [`rewrite`] swaps the known introspection queries for their
//!   backend-native equivalents, placeholder for placeholder.
//!
//! ```no_run
//! use sqlfacade_rs::backend::ConnectOptions;
//!
//! let conn = sqlfacade_rs::proxy::connect(
//!     "proxy:postgresql://localhost:5432/postgres",
//!     &ConnectOptions::default(),
//! )?;
//! let metadata = conn.metadata()?;
//! assert_eq!(metadata.product_name()?, "MySQL");
//! assert_eq!(metadata.true_product_name()?, "PostgreSQL");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod cli;
pub mod dialect;
pub mod logger;
pub mod model;
pub mod proxy;
pub mod rewrite;
pub mod router;
