//! The proxied connection
//!
//! Wraps one live backend connection. Statement preparation is intercepted
//! and run through the rewrite engine (or the call translator for procedure
//! calls); everything else delegates to the backend untouched, so backend
//! errors keep their native codes and messages.

use crate::backend::{registry, BackendConnection, BackendError, BackendStatement, ConnectOptions};
use crate::dialect::Dialect;
use crate::proxy::metadata::ProxyMetadata;
use crate::proxy::ProxyError;
use crate::rewrite;
use crate::router;
use log::{debug, warn};
use std::cell::OnceCell;

/// Resolve a connection string, open the backend it names, and wrap it.
pub fn connect(url: &str, opts: &ConnectOptions) -> Result<ProxyConnection, ProxyError> {
    let registry = registry::init()?;
    let target = router::resolve(url)?;
    let backend = registry.connect(&target, opts)?;
    Ok(ProxyConnection::new(Box::new(backend)))
}

pub struct ProxyConnection {
    target: Option<Box<dyn BackendConnection>>,
    // resolved on first use, then fixed for the life of the connection
    dialect: OnceCell<Option<Dialect>>,
}

impl ProxyConnection {
    pub fn new(target: Box<dyn BackendConnection>) -> Self {
        Self {
            target: Some(target),
            dialect: OnceCell::new(),
        }
    }

    fn target(&self) -> Result<&dyn BackendConnection, BackendError> {
        self.target.as_deref().ok_or(BackendError::Closed)
    }

    /// The real backend's dialect, resolved from its reported product name
    /// once and cached. `None` means the product is not one of the supported
    /// backends; its statements pass through unrewritten.
    pub fn dialect(&self) -> Result<Option<Dialect>, ProxyError> {
        if let Some(dialect) = self.dialect.get() {
            return Ok(*dialect);
        }
        let product = self.target()?.product_name()?;
        let dialect = Dialect::from_product_name(&product);
        if dialect.is_none() {
            warn!(
                "Unrecognized backend product '{}'; statements pass through unrewritten",
                product
            );
        }
        Ok(*self.dialect.get_or_init(|| dialect))
    }

    /// The masked metadata view of this connection.
    pub fn metadata(&self) -> Result<ProxyMetadata<'_>, ProxyError> {
        Ok(ProxyMetadata::new(self.target()?))
    }

    /// Rewrite a statement for the active backend and prepare it there.
    pub fn prepare_statement(&self, sql: &str) -> Result<Box<dyn BackendStatement + '_>, ProxyError> {
        let rewritten = match self.dialect()? {
            Some(dialect) => rewrite::rewrite(sql, dialect),
            None => sql.to_string(),
        };
        if rewritten != sql {
            debug!("Rewrote statement for backend: {}", rewritten);
        }
        Ok(self.target()?.prepare(&rewritten)?)
    }

    /// Translate a procedure-call statement and prepare it.
    pub fn prepare_call(&self, sql: &str) -> Result<Box<dyn BackendStatement + '_>, ProxyError> {
        let rewritten = rewrite::call::rewrite_call(sql);
        Ok(self.target()?.prepare(&rewritten)?)
    }

    pub fn execute(&self, sql: &str) -> Result<(), ProxyError> {
        Ok(self.target()?.execute(sql)?)
    }

    pub fn query_single_value(&self, sql: &str) -> Result<Option<String>, ProxyError> {
        Ok(self.target()?.query_single_value(sql)?)
    }

    pub fn commit(&self) -> Result<(), ProxyError> {
        Ok(self.target()?.commit()?)
    }

    pub fn rollback(&self) -> Result<(), ProxyError> {
        Ok(self.target()?.rollback()?)
    }

    pub fn set_autocommit(&self, enabled: bool) -> Result<(), ProxyError> {
        Ok(self.target()?.set_autocommit(enabled)?)
    }

    /// Close the backend connection (dropping the handle disconnects).
    /// Idempotent; later calls on this proxy fail with a closed error.
    pub fn close(&mut self) {
        if self.target.take().is_some() {
            debug!("Closed proxied connection");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.target.is_none()
    }
}
