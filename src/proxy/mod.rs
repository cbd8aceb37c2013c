//! Connection proxy
//!
//! Composition layer: routing, identity masking, and statement rewriting
//! around one real backend connection.

pub mod connection;
pub mod metadata;

pub use connection::{connect, ProxyConnection};
pub use metadata::ProxyMetadata;

use crate::backend::BackendError;
use crate::router::RouteError;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
