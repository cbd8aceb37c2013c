//! Process-wide driver registry
//!
//! One explicit, idempotent initialization call owns the ODBC environment
//! for the lifetime of the process. Nothing registers itself as a side
//! effect of being loaded; `init` is called once at startup (and is safe to
//! call again) and hands back the immutable registry.

use crate::backend::drivers::{self, BackendDriver};
use crate::backend::odbc::OdbcConnection;
use crate::backend::{BackendError, ConnectOptions};
use crate::router::ResolvedTarget;
use log::{debug, error, info};
use odbc_api::{ConnectionOptions, Environment};
use std::sync::OnceLock;

pub struct DriverRegistry {
    environment: Environment,
}

static REGISTRY: OnceLock<DriverRegistry> = OnceLock::new();

/// Initialize the registry, creating the process-wide ODBC environment.
/// Idempotent; subsequent calls return the same handle.
pub fn init() -> Result<&'static DriverRegistry, BackendError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let environment = Environment::new()?;
    info!(
        "Initialized backend registry with {} drivers",
        drivers::DRIVERS.len()
    );
    Ok(REGISTRY.get_or_init(|| DriverRegistry { environment }))
}

impl DriverRegistry {
    pub fn drivers(&self) -> &'static [BackendDriver] {
        drivers::DRIVERS
    }

    /// Open the real backend connection for a routed target.
    pub fn connect(
        &'static self,
        target: &ResolvedTarget,
        opts: &ConnectOptions,
    ) -> Result<OdbcConnection, BackendError> {
        let driver = drivers::driver_for_dialect(target.backend);
        let connection_string = driver.connection_string(&target.url, opts)?;
        debug!("Connecting to {} backend", target.backend);

        let connection = self
            .environment
            .connect_with_connection_string(&connection_string, ConnectionOptions::default())
            .map_err(|e| {
                error!("Failed to connect to {} backend: {}", target.backend, e);
                BackendError::ConnectionFailed(e.to_string())
            })?;

        info!("Successfully connected to {} backend", target.backend);
        let odbc_driver = opts
            .odbc_driver
            .clone()
            .unwrap_or_else(|| driver.default_odbc_driver.to_string());
        Ok(OdbcConnection::new(connection, driver, odbc_driver))
    }
}
