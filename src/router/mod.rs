//! Connection-string routing
//!
//! Resolves an incoming connection string into the backend it names and the
//! literal connection string handed to that backend's driver. Two forms are
//! recognized: the explicit proxy form (`proxy:<target>`) and the native
//! double-encoded form the client tool produces when the real target is
//! typed into its fixed `mysql://host:port/db` connection dialog. Resolution
//! is pure parsing; no connection is attempted here.

pub mod url;

use crate::backend::drivers;
use crate::dialect::Dialect;
use log::debug;

/// Prefix of the explicit proxy form.
pub const PROXY_PREFIX: &str = "proxy:";

/// Outer scheme the client tool's URL validator insists on.
const OUTER_SCHEME: &str = "mysql:";

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Cannot connect. Connection string {0} is not supported.")]
    UnsupportedConnectionString(String),

    #[error("{}", url::INVALID_FORMAT)]
    InvalidConnectionStringFormat,

    #[error("Cannot connect. No registered backend driver accepts {0}.")]
    BackendDriverNotFound(String),
}

/// A routed connection request. The url is always directly usable by the
/// named backend's driver: proxy wrappers and legacy prefixes are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub backend: Dialect,
    pub url: String,
}

/// Quick check whether a connection string is in one of the recognized
/// forms. Accepting a string does not guarantee it resolves.
pub fn accepts(request: &str) -> bool {
    let url = normalize(request);
    url.starts_with(PROXY_PREFIX) || url.starts_with(OUTER_SCHEME)
}

/// Resolve a raw connection string to its backend and effective target.
pub fn resolve(request: &str) -> Result<ResolvedTarget, RouteError> {
    let url = normalize(request);

    if let Some(target) = url.strip_prefix(PROXY_PREFIX) {
        debug!("Resolving proxy form: {}", target);
        return resolve_proxy(target);
    }

    if url.starts_with(OUTER_SCHEME) {
        if let Some(rest) = url.strip_prefix("mysql://") {
            if rest.contains("://") {
                // Double-encoded: the host part embeds the real target.
                let target = url::extract_target(url)?;
                debug!("Extracted embedded target: {}", target);
                return resolve_proxy(target);
            }
        }
        // Plain native MySQL URL, routed as-is.
        return Ok(ResolvedTarget {
            backend: Dialect::MySql,
            url: url.to_string(),
        });
    }

    Err(RouteError::UnsupportedConnectionString(request.to_string()))
}

fn resolve_proxy(target: &str) -> Result<ResolvedTarget, RouteError> {
    let target = normalize(target);
    if target.starts_with(OUTER_SCHEME) {
        // The embedded target may itself be double-encoded; run it through
        // the full resolution once more.
        return resolve(target);
    }
    match drivers::driver_for_url(target) {
        Some(driver) => {
            debug!("Matched backend {} for {}", driver.dialect, target);
            Ok(ResolvedTarget {
                backend: driver.dialect,
                url: target.to_string(),
            })
        }
        None => Err(RouteError::BackendDriverNotFound(target.to_string())),
    }
}

/// The client tool is a JDBC-era product; accept its `jdbc:`-prefixed
/// spellings everywhere a connection string is read.
fn normalize(url: &str) -> &str {
    url.strip_prefix("jdbc:").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_encoded_native_form() {
        let resolved = resolve("mysql://jdbc:mysql://localhost:3306/mysql:3306/mysql").unwrap();
        assert_eq!(resolved.backend, Dialect::MySql);
        assert_eq!(resolved.url, "mysql://localhost:3306/mysql");
    }

    #[test]
    fn test_plain_mysql_url_passes_through() {
        let resolved = resolve("mysql://localhost:3306/mysql").unwrap();
        assert_eq!(resolved.backend, Dialect::MySql);
        assert_eq!(resolved.url, "mysql://localhost:3306/mysql");
    }

    #[test]
    fn test_proxy_form_to_postgres() {
        let resolved = resolve("proxy:jdbc:postgresql://localhost:5432/postgres").unwrap();
        assert_eq!(resolved.backend, Dialect::Postgres);
        assert_eq!(resolved.url, "postgresql://localhost:5432/postgres");
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = resolve("oracle://localhost:1521/xe").unwrap_err();
        assert!(matches!(err, RouteError::UnsupportedConnectionString(_)));
    }

    #[test]
    fn test_proxy_to_unknown_backend() {
        let err = resolve("proxy:oracle://localhost:1521/xe").unwrap_err();
        assert!(matches!(err, RouteError::BackendDriverNotFound(_)));
    }
}
